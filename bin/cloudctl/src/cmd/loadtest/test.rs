//! Manage test definitions.
//!
//! Tests, and the domains they target, can be referenced by ID or by name.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use uuid::Uuid;

use cloudclient::models::loadtest::CreateTestRequest;
use cloudclient::models::loadtest::Test;
use cloudclient::Client;

use crate::cmd::ListOpts;
use crate::locator::DomainByName;
use crate::locator::TestByName;
use crate::Globals;

/// Manage test definitions.
#[derive(Debug, Parser)]
pub struct TestCli {
    /// Select the `cloudctl loadtest test` command to run.
    #[command(subcommand)]
    pub command: TestCmd,
}

/// Possible test commands to run.
#[derive(Debug, Subcommand)]
pub enum TestCmd {
    /// Define a new test.
    Create(CreateOpts),

    /// Remove one or more tests.
    Delete(TestsOpts),

    /// List tests.
    List(ListOpts),

    /// Show details of one or more tests.
    Show(TestsOpts),
}

/// Definition of the test to create.
#[derive(Args, Debug)]
pub struct CreateOpts {
    /// Name of the test.
    #[arg(long)]
    pub name: String,

    /// ID or name of the domain to test.
    #[arg(long)]
    pub domain: String,

    /// ID of the scenario to run.
    #[arg(long)]
    pub scenario_id: Uuid,

    /// Protocol to send requests with.
    #[arg(long, default_value = "https")]
    pub protocol: String,

    /// Path to send requests to.
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Number of virtual users to simulate.
    #[arg(long)]
    pub number_of_users: i32,

    /// How long the test should run for, for example 00:05:00.
    #[arg(long)]
    pub duration: String,

    /// Repeat the test at the given interval type, for example daily.
    #[arg(long)]
    pub recurring_type: Option<String>,

    /// Number of recurring intervals between test runs.
    #[arg(long)]
    pub recurring_value: Option<i32>,
}

/// Tests to operate on.
#[derive(Args, Debug)]
pub struct TestsOpts {
    /// IDs or names of the tests to operate on.
    #[arg(required = true, value_name = "TEST")]
    pub tests: Vec<String>,
}

/// Execute the selected `cloudctl loadtest test` command.
pub async fn run(globals: &Globals, cmd: &TestCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        TestCmd::Create(opts) => create(globals, &client, opts).await,
        TestCmd::Delete(opts) => {
            crate::cmd::each(globals, &opts.tests, |test| delete(&client, test)).await
        }
        TestCmd::List(opts) => {
            crate::cmd::list(globals, client.loadtest().tests(&opts.params())).await
        }
        TestCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.tests, |test| fetch(&client, test)).await
        }
    }
}

async fn create(globals: &Globals, client: &Client, opts: &CreateOpts) -> Result<i32> {
    let domain_id = DomainByName::resolve(client, &opts.domain).await?;
    let request = CreateTestRequest {
        name: opts.name.clone(),
        domain_id,
        scenario_id: opts.scenario_id,
        protocol: opts.protocol.clone(),
        path: opts.path.clone(),
        number_of_users: opts.number_of_users,
        duration: opts.duration.clone(),
        recurring_type: opts.recurring_type.clone(),
        recurring_value: opts.recurring_value,
    };
    let id = client.loadtest().create_test(&request).await?;
    slog::info!(globals.logger, "Created test"; "id" => %id, "domain" => %domain_id);
    let test = client.loadtest().test(id).await?;
    crate::formatter::objects(globals, &[test])?;
    Ok(0)
}

async fn delete(client: &Client, test: &str) -> Result<()> {
    let id = TestByName::resolve(client, test).await?;
    client.loadtest().delete_test(id).await?;
    println!("Test '{}' was deleted.", test);
    Ok(())
}

async fn fetch(client: &Client, test: &str) -> Result<Test> {
    let id = TestByName::resolve(client, test).await?;
    client.loadtest().test(id).await
}
