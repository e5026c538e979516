//! Manage load testing domains, tests and jobs.
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use crate::Globals;

mod catalogue;
mod domain;
mod job;
mod test;

/// Manage load testing domains, tests and jobs.
#[derive(Debug, Parser)]
pub struct LoadTestCli {
    /// Select the `cloudctl loadtest` command to run.
    #[command(subcommand)]
    pub command: LoadTestCmd,
}

/// Select the `cloudctl loadtest` command to run.
#[derive(Debug, Subcommand)]
pub enum LoadTestCmd {
    /// Inspect agents that generate load.
    Agent(catalogue::AgentCli),

    /// Manage domains registered for testing.
    Domain(domain::DomainCli),

    /// Manage executions of tests.
    Job(job::JobCli),

    /// Inspect available test scenarios.
    Scenario(catalogue::ScenarioCli),

    /// Manage test definitions.
    Test(test::TestCli),

    /// Inspect threads available to agents.
    Thread(catalogue::ThreadCli),
}

/// Execute the selected `cloudctl loadtest` command.
pub async fn run(globals: &Globals, cmd: &LoadTestCli) -> Result<i32> {
    match &cmd.command {
        LoadTestCmd::Agent(cmd) => catalogue::agent(globals, cmd).await,
        LoadTestCmd::Domain(cmd) => domain::run(globals, cmd).await,
        LoadTestCmd::Job(cmd) => job::run(globals, cmd).await,
        LoadTestCmd::Scenario(cmd) => catalogue::scenario(globals, cmd).await,
        LoadTestCmd::Test(cmd) => test::run(globals, cmd).await,
        LoadTestCmd::Thread(cmd) => catalogue::thread(globals, cmd).await,
    }
}
