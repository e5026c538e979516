//! Inspect invoices.
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::billing::Invoice;
use cloudclient::Client;

use crate::cmd::IdsOpts;
use crate::cmd::ListOpts;
use crate::utils::parse_id;
use crate::Globals;

/// Inspect invoices.
#[derive(Debug, Parser)]
pub struct InvoiceCli {
    /// Select the `cloudctl billing invoice` command to run.
    #[command(subcommand)]
    pub command: InvoiceCmd,
}

/// Possible invoice commands to run.
#[derive(Debug, Subcommand)]
pub enum InvoiceCmd {
    /// List invoices.
    List(ListOpts),

    /// Show details of one or more invoices.
    Show(IdsOpts),
}

/// Execute the selected `cloudctl billing invoice` command.
pub async fn run(globals: &Globals, cmd: &InvoiceCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        InvoiceCmd::List(opts) => {
            crate::cmd::list(globals, client.billing().invoices(&opts.params())).await
        }
        InvoiceCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| fetch(&client, id)).await
        }
    }
}

async fn fetch(client: &Client, id: &str) -> Result<Invoice> {
    let id = parse_id("invoice", id)?;
    client.billing().invoice(id).await
}
