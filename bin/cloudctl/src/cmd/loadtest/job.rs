//! Manage executions of tests.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::loadtest::CreateJobRequest;
use cloudclient::models::loadtest::Job;
use cloudclient::models::loadtest::JobSettings;
use cloudclient::Client;

use crate::cmd::IdsOpts;
use crate::cmd::ListOpts;
use crate::locator::TestByName;
use crate::utils::parse_uuid;
use crate::Globals;

/// Manage executions of tests.
#[derive(Debug, Parser)]
pub struct JobCli {
    /// Select the `cloudctl loadtest job` command to run.
    #[command(subcommand)]
    pub command: JobCmd,
}

/// Possible job commands to run.
#[derive(Debug, Subcommand)]
pub enum JobCmd {
    /// Schedule a run of a test.
    Create(CreateOpts),

    /// Remove one or more jobs.
    Delete(IdsOpts),

    /// List jobs.
    List(ListOpts),

    /// Show the results collected while a job was running.
    Results(ResultsOpts),

    /// Show the settings one or more jobs ran with.
    Settings(IdsOpts),

    /// Show details of one or more jobs.
    Show(IdsOpts),

    /// Stop one or more running jobs.
    Stop(IdsOpts),
}

/// Details of the job to schedule.
#[derive(Args, Debug)]
pub struct CreateOpts {
    /// ID or name of the test to run.
    #[arg(long)]
    pub test: String,

    /// When to run the test, as an ISO 8601 timestamp.
    #[arg(long)]
    pub scheduled_timestamp: Option<String>,

    /// Run the test as soon as possible.
    #[arg(long)]
    pub run_now: bool,
}

/// Job to show results of.
#[derive(Args, Debug)]
pub struct ResultsOpts {
    /// ID of the job.
    pub job: String,
}

/// Execute the selected `cloudctl loadtest job` command.
pub async fn run(globals: &Globals, cmd: &JobCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        JobCmd::Create(opts) => create(globals, &client, opts).await,
        JobCmd::Delete(opts) => {
            crate::cmd::each(globals, &opts.ids, |id| delete(&client, id)).await
        }
        JobCmd::List(opts) => {
            crate::cmd::list(globals, client.loadtest().jobs(&opts.params())).await
        }
        JobCmd::Results(opts) => {
            let id = parse_uuid("job", &opts.job)?;
            let results = client.loadtest().job_results(id).await?;
            crate::formatter::objects(globals, &results.rows())?;
            Ok(0)
        }
        JobCmd::Settings(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| settings(&client, id)).await
        }
        JobCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| fetch(&client, id)).await
        }
        JobCmd::Stop(opts) => crate::cmd::each(globals, &opts.ids, |id| stop(&client, id)).await,
    }
}

async fn create(globals: &Globals, client: &Client, opts: &CreateOpts) -> Result<i32> {
    let test_id = TestByName::resolve(client, &opts.test).await?;
    let request = CreateJobRequest {
        test_id,
        scheduled_timestamp: opts.scheduled_timestamp.clone(),
        run_now: opts.run_now,
    };
    let id = client.loadtest().create_job(&request).await?;
    slog::info!(globals.logger, "Scheduled job"; "id" => %id, "test" => %test_id);
    let job = client.loadtest().job(id).await?;
    crate::formatter::objects(globals, &[job])?;
    Ok(0)
}

async fn delete(client: &Client, id: &str) -> Result<()> {
    let id = parse_uuid("job", id)?;
    client.loadtest().delete_job(id).await?;
    println!("Job '{}' was deleted.", id);
    Ok(())
}

async fn fetch(client: &Client, id: &str) -> Result<Job> {
    let id = parse_uuid("job", id)?;
    client.loadtest().job(id).await
}

async fn settings(client: &Client, id: &str) -> Result<JobSettings> {
    let id = parse_uuid("job", id)?;
    client.loadtest().job_settings(id).await
}

async fn stop(client: &Client, id: &str) -> Result<()> {
    let id = parse_uuid("job", id)?;
    client.loadtest().stop_job(id).await?;
    println!("Job '{}' was stopped.", id);
    Ok(())
}
