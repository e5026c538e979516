//! Inspect payments.
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::billing::Payment;
use cloudclient::Client;

use crate::cmd::IdsOpts;
use crate::cmd::ListOpts;
use crate::utils::parse_id;
use crate::Globals;

/// Inspect payments.
#[derive(Debug, Parser)]
pub struct PaymentCli {
    /// Select the `cloudctl billing payment` command to run.
    #[command(subcommand)]
    pub command: PaymentCmd,
}

/// Possible payment commands to run.
#[derive(Debug, Subcommand)]
pub enum PaymentCmd {
    /// List payments.
    List(ListOpts),

    /// Show details of one or more payments.
    Show(IdsOpts),
}

/// Execute the selected `cloudctl billing payment` command.
pub async fn run(globals: &Globals, cmd: &PaymentCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        PaymentCmd::List(opts) => {
            crate::cmd::list(globals, client.billing().payments(&opts.params())).await
        }
        PaymentCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| fetch(&client, id)).await
        }
    }
}

async fn fetch(client: &Client, id: &str) -> Result<Payment> {
    let id = parse_id("payment", id)?;
    client.billing().payment(id).await
}
