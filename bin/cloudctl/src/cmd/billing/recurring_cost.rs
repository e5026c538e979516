//! Inspect recurring costs.
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::billing::RecurringCost;
use cloudclient::Client;

use crate::cmd::IdsOpts;
use crate::cmd::ListOpts;
use crate::utils::parse_id;
use crate::Globals;

/// Inspect recurring costs.
#[derive(Debug, Parser)]
pub struct RecurringCostCli {
    /// Select the `cloudctl billing recurring-cost` command to run.
    #[command(subcommand)]
    pub command: RecurringCostCmd,
}

/// Possible recurring cost commands to run.
#[derive(Debug, Subcommand)]
pub enum RecurringCostCmd {
    /// List recurring costs.
    List(ListOpts),

    /// Show details of one or more recurring costs.
    Show(IdsOpts),
}

/// Execute the selected `cloudctl billing recurring-cost` command.
pub async fn run(globals: &Globals, cmd: &RecurringCostCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        RecurringCostCmd::List(opts) => {
            crate::cmd::list(globals, client.billing().recurring_costs(&opts.params())).await
        }
        RecurringCostCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| fetch(&client, id)).await
        }
    }
}

async fn fetch(client: &Client, id: &str) -> Result<RecurringCost> {
    let id = parse_id("recurring cost", id)?;
    client.billing().recurring_cost(id).await
}
