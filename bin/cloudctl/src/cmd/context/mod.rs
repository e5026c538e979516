//! Manage configuration of API servers and keys to access.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use crate::Globals;

mod configure;
mod delete;
mod list;
mod select;
mod show;

/// Manage configuration of API servers and keys to access.
#[derive(Debug, Parser)]
pub struct ContextCli {
    /// Select the `cloudctl context` command to run.
    #[command(subcommand)]
    pub command: ContextCmd,
}

/// Select the `cloudctl context` command to run.
#[derive(Debug, Subcommand)]
pub enum ContextCmd {
    /// Configure or update the selected context with --api-key, --api-url and timeouts.
    Configure(ConfigureOpts),

    /// Remove the selected context from the store.
    Delete(DeleteOpts),

    /// List known contexts.
    List,

    /// Select the active context, the one used when none are specified.
    Select(SelectOpts),

    /// Show details about the selected context.
    Show,
}

/// Connection options to store in addition to the API key and URL.
#[derive(Args, Debug)]
pub struct ConfigureOpts {
    /// Seconds to wait for a response before a request is failed.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Seconds to wait for a connection to be established.
    #[arg(long)]
    pub timeout_connect: Option<u64>,
}

#[derive(Args, Debug)]
pub struct DeleteOpts {
    /// Do not ask for confirmation.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct SelectOpts {
    /// Name of the context to activate, prompt for one if omitted.
    pub name: Option<String>,
}

/// Execute the selected `cloudctl context` command.
pub async fn run(globals: &Globals, cmd: &ContextCli) -> Result<i32> {
    match &cmd.command {
        ContextCmd::Configure(opts) => self::configure::run(globals, opts).await,
        ContextCmd::Delete(opts) => self::delete::run(globals, opts).await,
        ContextCmd::List => self::list::run(globals).await,
        ContextCmd::Select(opts) => self::select::run(globals, opts).await,
        ContextCmd::Show => self::show::run(globals).await,
    }
}
