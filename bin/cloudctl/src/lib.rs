//! Inspect and manage billing, SafeDNS and LoadTest resources from a Command Line Interface.
use anyhow::Result;
use clap::Parser;

use cloudclient::Client;

mod cmd;
mod context;
mod formatter;
mod globals;
mod locator;
mod logging;
mod outcome;
mod utils;

pub mod errors;

// Re-export errors so main can provide more accurate messages.
pub use cloudclient_utils::ResourceNotFound;
pub use errors::ContextNotFound;
pub use errors::NoApiKey;
pub use locator::LocateError;

use self::cmd::Cli;
use self::cmd::Command;
use self::context::Context;
use self::globals::Globals;

/// Initialise the cloudctl process and invoke a command implementation.
pub async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let globals = Globals::initialise(cli)?;

    match &globals.cli.command {
        Command::Billing(cmd) => cmd::billing::run(&globals, cmd).await,
        Command::Context(cmd) => cmd::context::run(&globals, cmd).await,
        Command::LoadTest(cmd) => cmd::loadtest::run(&globals, cmd).await,
        Command::SafeDns(cmd) => cmd::safedns::run(&globals, cmd).await,
    }
}

/// Initialise an API client to access the servers of the given context.
fn client(globals: &Globals, context: &Context) -> Result<Client> {
    let options = context.options(&globals.cli.context)?;
    slog::debug!(
        globals.logger, "Initialising API client";
        "url" => &options.address,
    );
    Client::with(options)
}
