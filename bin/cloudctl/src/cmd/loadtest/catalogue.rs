//! Inspect the agents, threads and scenarios offered by the load testing service.
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::loadtest::Agent;
use cloudclient::models::loadtest::Scenario;
use cloudclient::models::loadtest::Thread;
use cloudclient::Client;

use crate::cmd::IdsOpts;
use crate::cmd::ListOpts;
use crate::utils::parse_uuid;
use crate::Globals;

/// List or show catalogue items.
#[derive(Debug, Subcommand)]
pub enum CatalogueCmd {
    /// List items.
    List(ListOpts),

    /// Show details of one or more items.
    Show(IdsOpts),
}

/// Inspect agents that generate load.
#[derive(Debug, Parser)]
pub struct AgentCli {
    #[command(subcommand)]
    pub command: CatalogueCmd,
}

/// Inspect available test scenarios.
#[derive(Debug, Parser)]
pub struct ScenarioCli {
    #[command(subcommand)]
    pub command: CatalogueCmd,
}

/// Inspect threads available to agents.
#[derive(Debug, Parser)]
pub struct ThreadCli {
    #[command(subcommand)]
    pub command: CatalogueCmd,
}

/// Execute the selected `cloudctl loadtest agent` command.
pub async fn agent(globals: &Globals, cmd: &AgentCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        CatalogueCmd::List(opts) => {
            crate::cmd::list(globals, client.loadtest().agents(&opts.params())).await
        }
        CatalogueCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| fetch_agent(&client, id)).await
        }
    }
}

/// Execute the selected `cloudctl loadtest scenario` command.
pub async fn scenario(globals: &Globals, cmd: &ScenarioCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        CatalogueCmd::List(opts) => {
            crate::cmd::list(globals, client.loadtest().scenarios(&opts.params())).await
        }
        CatalogueCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| fetch_scenario(&client, id)).await
        }
    }
}

/// Execute the selected `cloudctl loadtest thread` command.
pub async fn thread(globals: &Globals, cmd: &ThreadCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        CatalogueCmd::List(opts) => {
            crate::cmd::list(globals, client.loadtest().threads(&opts.params())).await
        }
        CatalogueCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| fetch_thread(&client, id)).await
        }
    }
}

async fn fetch_agent(client: &Client, id: &str) -> Result<Agent> {
    let id = parse_uuid("agent", id)?;
    client.loadtest().agent(id).await
}

async fn fetch_scenario(client: &Client, id: &str) -> Result<Scenario> {
    let id = parse_uuid("scenario", id)?;
    client.loadtest().scenario(id).await
}

async fn fetch_thread(client: &Client, id: &str) -> Result<Thread> {
    let id = parse_uuid("thread", id)?;
    client.loadtest().thread(id).await
}
