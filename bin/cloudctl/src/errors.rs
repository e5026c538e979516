//! Errors reported by `cloudctl` commands.

/// Error indicating a context does not exist.
#[derive(thiserror::Error, Debug)]
#[error("A context named '{context}' was not found")]
pub struct ContextNotFound {
    context: String,
}

impl ContextNotFound {
    /// Create a context not found error for the given name.
    pub fn for_name<S>(name: S) -> ContextNotFound
    where
        S: Into<String>,
    {
        let context = name.into();
        ContextNotFound { context }
    }

    /// The name of the context we failed to find.
    pub fn name(&self) -> &str {
        &self.context
    }
}

/// A command argument or flag value is malformed.
#[derive(thiserror::Error, Debug)]
#[error("Invalid {kind} [{value}]")]
pub struct InvalidArgument {
    kind: String,
    value: String,
}

impl InvalidArgument {
    pub fn new<S1, S2>(kind: S1, value: S2) -> InvalidArgument
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        InvalidArgument {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Requests can't be authenticated without an API key.
#[derive(thiserror::Error, Debug)]
#[error("No API key is configured for context '{context}'")]
pub struct NoApiKey {
    pub context: String,
}
