//! Inspect the direct debit status of the account.
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use crate::Globals;

/// Inspect the direct debit status of the account.
#[derive(Debug, Parser)]
pub struct DirectDebitCli {
    #[command(subcommand)]
    pub command: DirectDebitCmd,
}

#[derive(Debug, Subcommand)]
pub enum DirectDebitCmd {
    /// Show the direct debit status of the account.
    Show,
}

/// Execute the selected `cloudctl billing direct-debit` command.
pub async fn run(globals: &Globals, cmd: &DirectDebitCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match cmd.command {
        DirectDebitCmd::Show => {
            let details = client.billing().direct_debit().await?;
            crate::formatter::objects(globals, &[details])?;
            Ok(0)
        }
    }
}
