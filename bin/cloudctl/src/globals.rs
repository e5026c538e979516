//! Container for data to made accessible to all `cloudctl` commands.
use anyhow::Result;
use slog::Logger;

use crate::formatter::Formatter;
use crate::Cli;

/// Container for data to made accessible to all `cloudctl` commands.
pub struct Globals {
    /// Parse CLI arguments.
    pub cli: Cli,

    /// Configured process formatter for all output.
    pub formatter: Formatter,

    /// Configured process logger for advanced users feedback/debugging.
    pub logger: Logger,
}

impl Globals {
    /// Initialise `cloudctl` process [`Globals`].
    pub fn initialise(cli: Cli) -> Result<Self> {
        let logger = crate::logging::configure(&cli.log)?;
        let formatter = crate::formatter::select(&cli.format);
        slog::debug!(
            logger, "cloudctl process initialised";
            "version" => env!("CARGO_PKG_VERSION"),
            "git-hash" => env!("GIT_BUILD_HASH"),
        );
        Ok(Globals {
            cli,
            formatter,
            logger,
        })
    }
}
