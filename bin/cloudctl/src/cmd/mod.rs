//! CLI interface for the `cloudctl` client.
use std::future::Future;

use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use cloudclient::Client;
use cloudclient_utils::Filter;
use cloudclient_utils::ListParameters;
use cloudclient_utils::Sort;

pub mod billing;
pub mod context;
pub mod loadtest;
pub mod safedns;

use crate::context::ContextOpt;
use crate::context::ContextStore;
use crate::formatter::FormatOpts;
use crate::formatter::Resource;
use crate::logging::LogOpt;
use crate::outcome::Outcomes;
use crate::Globals;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " [",
    env!("GIT_BUILD_HASH"),
    "; ",
    env!("GIT_BUILD_TAINT"),
    "]",
);

/// CLI definition for the cloudctl binary.
#[derive(Debug, Parser)]
#[command(about)]
#[command(propagate_version = true)]
#[command(version = VERSION)]
pub struct Cli {
    /// API context selection and override arguments.
    #[command(flatten)]
    pub context: ContextOpt,

    /// Select the `cloudctl` command to run.
    #[command(subcommand)]
    pub command: Command,

    /// Configure how `cloudctl` output is formatted.
    #[command(flatten)]
    pub format: FormatOpts,

    /// Configure the `cloudctl` log file.
    #[command(flatten)]
    pub log: LogOpt,
}

/// Select the `cloudctl` command to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect account billing information and manage payment cards.
    Billing(billing::BillingCli),

    /// Manage configuration of API servers and keys to access.
    Context(context::ContextCli),

    /// Manage load testing domains, tests and jobs.
    #[command(name = "loadtest", alias = "lt", alias = "ltaas")]
    LoadTest(loadtest::LoadTestCli),

    /// Manage DNS zones, records and templates.
    #[command(name = "safedns", alias = "dns")]
    SafeDns(safedns::SafeDnsCli),
}

/// Filter and sort collections when listing them.
#[derive(Args, Debug)]
pub struct ListOpts {
    /// Filter items as property[:operator]=value[,value] (can be repeated).
    #[arg(long = "filter")]
    pub filters: Vec<Filter>,

    /// Sort items as property[:asc|:desc].
    #[arg(long)]
    pub sort: Option<Sort>,
}

impl ListOpts {
    /// Parameters to send with list requests.
    pub fn params(&self) -> ListParameters {
        ListParameters {
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            ..Default::default()
        }
    }
}

/// Identify the objects to operate on.
#[derive(Args, Debug)]
pub struct IdsOpts {
    /// IDs of the objects to operate on.
    #[arg(required = true, value_name = "ID")]
    pub ids: Vec<String>,
}

/// Initialise an API client for the active context.
pub async fn connect(globals: &Globals) -> Result<Client> {
    let context = ContextStore::active(globals).await?;
    crate::client(globals, &context)
}

/// Render the items of a collection.
pub async fn list<R, Fut>(globals: &Globals, fetch: Fut) -> Result<i32>
where
    R: Resource,
    Fut: Future<Output = Result<Vec<R>>>,
{
    let items = fetch.await?;
    slog::debug!(globals.logger, "Listed items"; "count" => items.len());
    crate::formatter::objects(globals, &items)?;
    Ok(0)
}

/// Fetch an object for each ID, one at a time, and render the ones found.
///
/// Failures are reported as they happen and do not stop the remaining IDs from being processed.
pub async fn show_each<'a, R, F, Fut>(globals: &Globals, ids: &'a [String], fetch: F) -> Result<i32>
where
    R: Resource,
    F: Fn(&'a str) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    let mut outcomes = Outcomes::new();
    let mut items = Vec::new();
    for id in ids {
        slog::debug!(globals.logger, "Processing item"; "item" => id);
        match fetch(id.as_str()).await {
            Ok(item) => items.push(item),
            Err(error) => outcomes.failure(globals, id, error),
        }
    }
    if !items.is_empty() {
        crate::formatter::objects(globals, &items)?;
    }
    Ok(outcomes.exit_code())
}

/// Perform an action for each ID, one at a time.
///
/// Failures are reported as they happen and do not stop the remaining IDs from being processed.
pub async fn each<'a, F, Fut>(globals: &Globals, ids: &'a [String], action: F) -> Result<i32>
where
    F: Fn(&'a str) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut outcomes = Outcomes::new();
    for id in ids {
        slog::debug!(globals.logger, "Processing item"; "item" => id);
        if let Err(error) = action(id.as_str()).await {
            outcomes.failure(globals, id, error);
        }
    }
    Ok(outcomes.exit_code())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::Parser;

    use super::Cli;
    use super::ListOpts;

    #[test]
    fn clap_integrity_check() {
        let command = crate::Cli::command();
        command.debug_assert();
    }

    #[derive(Debug, Parser)]
    struct ListCli {
        #[command(flatten)]
        list: ListOpts,
    }

    #[test]
    fn list_options_to_params() {
        let cli = ListCli::parse_from([
            "list",
            "--filter",
            "name:lk=*.com",
            "--filter",
            "id:in=1,2",
            "--sort",
            "name:desc",
        ]);
        let params = cli.list.params();
        assert_eq!(
            params.query(1),
            vec![
                ("page".to_string(), "1".to_string()),
                ("per_page".to_string(), "100".to_string()),
                ("name:lk".to_string(), "*.com".to_string()),
                ("id:in".to_string(), "1,2".to_string()),
                ("sort".to_string(), "name:desc".to_string()),
            ],
        );
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let result = Cli::try_parse_from(["cloudctl", "billing", "invoice", "list", "--filter", "paid"]);
        assert!(result.is_err());
    }
}
