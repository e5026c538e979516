//! Inspect account billing information and manage payment cards.
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use crate::Globals;

mod card;
mod cloud_cost;
mod direct_debit;
mod invoice;
mod invoice_query;
mod payment;
mod recurring_cost;

/// Inspect account billing information and manage payment cards.
#[derive(Debug, Parser)]
pub struct BillingCli {
    /// Select the `cloudctl billing` command to run.
    #[command(subcommand)]
    pub command: BillingCmd,
}

/// Select the `cloudctl billing` command to run.
#[derive(Debug, Subcommand)]
pub enum BillingCmd {
    /// Manage payment cards.
    Card(card::CardCli),

    /// Inspect costs of cloud resources.
    CloudCost(cloud_cost::CloudCostCli),

    /// Inspect the direct debit status of the account.
    DirectDebit(direct_debit::DirectDebitCli),

    /// Inspect invoices.
    Invoice(invoice::InvoiceCli),

    /// Inspect or raise queries about invoices.
    InvoiceQuery(invoice_query::InvoiceQueryCli),

    /// Inspect payments.
    Payment(payment::PaymentCli),

    /// Inspect costs billed at regular intervals.
    RecurringCost(recurring_cost::RecurringCostCli),
}

/// Execute the selected `cloudctl billing` command.
pub async fn run(globals: &Globals, cmd: &BillingCli) -> Result<i32> {
    match &cmd.command {
        BillingCmd::Card(cmd) => card::run(globals, cmd).await,
        BillingCmd::CloudCost(cmd) => cloud_cost::run(globals, cmd).await,
        BillingCmd::DirectDebit(cmd) => direct_debit::run(globals, cmd).await,
        BillingCmd::Invoice(cmd) => invoice::run(globals, cmd).await,
        BillingCmd::InvoiceQuery(cmd) => invoice_query::run(globals, cmd).await,
        BillingCmd::Payment(cmd) => payment::run(globals, cmd).await,
        BillingCmd::RecurringCost(cmd) => recurring_cost::run(globals, cmd).await,
    }
}
