//! Inspect or raise queries about invoices.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::billing::CreateInvoiceQueryRequest;
use cloudclient::models::billing::InvoiceQuery;
use cloudclient::Client;

use crate::cmd::IdsOpts;
use crate::cmd::ListOpts;
use crate::utils::parse_id;
use crate::Globals;

/// Inspect or raise queries about invoices.
#[derive(Debug, Parser)]
pub struct InvoiceQueryCli {
    /// Select the `cloudctl billing invoice-query` command to run.
    #[command(subcommand)]
    pub command: InvoiceQueryCmd,
}

/// Possible invoice query commands to run.
#[derive(Debug, Subcommand)]
pub enum InvoiceQueryCmd {
    /// Raise a query about one or more invoices.
    Create(CreateOpts),

    /// List invoice queries.
    List(ListOpts),

    /// Show details of one or more invoice queries.
    Show(IdsOpts),
}

/// Details of the invoice query to raise.
#[derive(Args, Debug)]
pub struct CreateOpts {
    /// ID of the contact raising the query.
    #[arg(long)]
    pub contact_id: i32,

    /// Amount the query is about.
    #[arg(long)]
    pub amount: f64,

    /// What the contact expected to be invoiced.
    #[arg(long, default_value = "")]
    pub what_was_expected: String,

    /// What the contact was invoiced instead.
    #[arg(long, default_value = "")]
    pub what_was_received: String,

    /// How the contact would like the query resolved.
    #[arg(long, default_value = "")]
    pub proposed_solution: String,

    /// Invoice the query is about (can be repeated).
    #[arg(long = "invoice-id", required = true)]
    pub invoice_ids: Vec<i32>,

    /// How the contact would like to be reached, for example email or phone.
    #[arg(long, default_value = "email")]
    pub contact_method: String,
}

/// Execute the selected `cloudctl billing invoice-query` command.
pub async fn run(globals: &Globals, cmd: &InvoiceQueryCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        InvoiceQueryCmd::Create(opts) => create(globals, &client, opts).await,
        InvoiceQueryCmd::List(opts) => {
            let params = opts.params();
            crate::cmd::list(globals, client.billing().invoice_queries(&params)).await
        }
        InvoiceQueryCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| fetch(&client, id)).await
        }
    }
}

async fn create(globals: &Globals, client: &Client, opts: &CreateOpts) -> Result<i32> {
    let request = CreateInvoiceQueryRequest {
        contact_id: opts.contact_id,
        amount: opts.amount,
        what_was_expected: opts.what_was_expected.clone(),
        what_was_received: opts.what_was_received.clone(),
        proposed_solution: opts.proposed_solution.clone(),
        invoice_ids: opts.invoice_ids.clone(),
        contact_method: opts.contact_method.clone(),
    };
    let id = client.billing().create_invoice_query(&request).await?;
    slog::info!(globals.logger, "Raised invoice query"; "id" => id);
    let query = client.billing().invoice_query(id).await?;
    crate::formatter::objects(globals, &[query])?;
    Ok(0)
}

async fn fetch(client: &Client, id: &str) -> Result<InvoiceQuery> {
    let id = parse_id("invoice query", id)?;
    client.billing().invoice_query(id).await
}
