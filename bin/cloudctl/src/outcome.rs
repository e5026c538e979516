//! Track the result of commands that operate on several items.
use slog::error;

use crate::Globals;

/// Collection of outcomes for a batch of items.
///
/// A failed item is reported as soon as it is recorded so processing
/// can carry on with the remaining items.
#[derive(Debug, Default)]
pub struct Outcomes {
    failures: Vec<String>,
}

impl Outcomes {
    pub fn new() -> Outcomes {
        Outcomes::default()
    }

    /// Exit code for the command: 1 if any item failed.
    pub fn exit_code(&self) -> i32 {
        match self.has_failures() {
            true => 1,
            false => 0,
        }
    }

    /// Record and report the failure to process an item.
    pub fn failure(&mut self, globals: &Globals, item: &str, error: anyhow::Error) {
        error!(
            globals.logger, "Failed to process item";
            "item" => item,
            "error" => format!("{:#}", error),
        );
        eprintln!("Error processing [{}]: {:#}", item, error);
        self.failures.push(item.to_string());
    }

    /// Return true if any item failed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Outcomes;

    #[test]
    fn exit_code_reflects_failures() {
        let globals = crate::globals::tests::fixture();
        let mut outcomes = Outcomes::new();
        assert_eq!(outcomes.exit_code(), 0);

        outcomes.failure(&globals, "example.com", anyhow::anyhow!("lookup failed"));
        assert!(outcomes.has_failures());
        assert_eq!(outcomes.exit_code(), 1);
    }
}
