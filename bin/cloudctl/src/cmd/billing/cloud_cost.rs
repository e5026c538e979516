//! Inspect cloud resources costs.
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::billing::CloudCost;
use cloudclient::Client;

use crate::cmd::IdsOpts;
use crate::cmd::ListOpts;
use crate::utils::parse_id;
use crate::Globals;

/// Inspect cloud resources costs.
#[derive(Debug, Parser)]
pub struct CloudCostCli {
    /// Select the `cloudctl billing cloud-cost` command to run.
    #[command(subcommand)]
    pub command: CloudCostCmd,
}

/// Possible cloud cost commands to run.
#[derive(Debug, Subcommand)]
pub enum CloudCostCmd {
    /// List cloud resources costs.
    List(ListOpts),

    /// Show details of one or more cloud resources costs.
    Show(IdsOpts),
}

/// Execute the selected `cloudctl billing cloud-cost` command.
pub async fn run(globals: &Globals, cmd: &CloudCostCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        CloudCostCmd::List(opts) => {
            crate::cmd::list(globals, client.billing().cloud_costs(&opts.params())).await
        }
        CloudCostCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| fetch(&client, id)).await
        }
    }
}

async fn fetch(client: &Client, id: &str) -> Result<CloudCost> {
    let id = parse_id("cloud cost", id)?;
    client.billing().cloud_cost(id).await
}
