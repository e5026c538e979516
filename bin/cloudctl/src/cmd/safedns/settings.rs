//! Inspect account wide SafeDNS settings.
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use crate::Globals;

#[derive(Debug, Parser)]
pub struct SettingsCli {
    #[command(subcommand)]
    pub command: SettingsCmd,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCmd {
    /// Show account wide SafeDNS settings.
    Show,
}

/// Execute the selected `cloudctl safedns settings` command.
pub async fn run(globals: &Globals, cmd: &SettingsCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match cmd.command {
        SettingsCmd::Show => {
            let settings = client.safedns().settings().await?;
            crate::formatter::objects(globals, &[settings])?;
            Ok(0)
        }
    }
}
