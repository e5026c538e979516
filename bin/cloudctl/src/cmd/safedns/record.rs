//! Manage the records of a zone.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::safedns::Record;
use cloudclient::models::safedns::RecordRequest;
use cloudclient::Client;

use super::NewRecordFlags;
use super::RecordFlags;
use crate::cmd::IdsOpts;
use crate::cmd::ListOpts;
use crate::utils::parse_id;
use crate::Globals;

/// Manage the records of a zone.
#[derive(Debug, Parser)]
pub struct RecordCli {
    /// Select the `cloudctl safedns record` command to run.
    #[command(subcommand)]
    pub command: RecordCmd,
}

/// Possible record commands to run.
#[derive(Debug, Subcommand)]
pub enum RecordCmd {
    /// Add a record to a zone.
    Create(CreateOpts),

    /// Remove one or more records from a zone.
    Delete(RecordsOpts),

    /// List records in a zone.
    List(ListRecordsOpts),

    /// Show details of one or more records in a zone.
    Show(RecordsOpts),

    /// Update one or more records in a zone.
    Update(UpdateOpts),
}

/// Details of the record to add.
#[derive(Args, Debug)]
pub struct CreateOpts {
    /// Name of the zone to add the record to.
    pub zone: String,

    #[command(flatten)]
    pub record: NewRecordFlags,
}

/// Records to list.
#[derive(Args, Debug)]
pub struct ListRecordsOpts {
    /// Name of the zone to list records of.
    pub zone: String,

    #[command(flatten)]
    pub list: ListOpts,
}

/// Records to operate on.
#[derive(Args, Debug)]
pub struct RecordsOpts {
    /// Name of the zone the records belong to.
    pub zone: String,

    #[command(flatten)]
    pub ids: IdsOpts,
}

/// Records to update.
#[derive(Args, Debug)]
pub struct UpdateOpts {
    #[command(flatten)]
    pub record: RecordFlags,

    #[command(flatten)]
    pub records: RecordsOpts,
}

/// Execute the selected `cloudctl safedns record` command.
pub async fn run(globals: &Globals, cmd: &RecordCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        RecordCmd::Create(opts) => {
            let request = RecordRequest::from(&opts.record);
            let id = client.safedns().create_record(&opts.zone, &request).await?;
            slog::info!(
                globals.logger, "Created record";
                "zone" => &opts.zone, "id" => id,
            );
            let record = client.safedns().record(&opts.zone, id).await?;
            crate::formatter::objects(globals, &[record])?;
            Ok(0)
        }
        RecordCmd::Delete(opts) => {
            let zone = opts.zone.as_str();
            crate::cmd::each(globals, &opts.ids.ids, |id| delete(&client, zone, id)).await
        }
        RecordCmd::List(opts) => {
            let params = opts.list.params();
            crate::cmd::list(globals, client.safedns().records(&opts.zone, &params)).await
        }
        RecordCmd::Show(opts) => {
            let zone = opts.zone.as_str();
            crate::cmd::show_each(globals, &opts.ids.ids, |id| fetch(&client, zone, id)).await
        }
        RecordCmd::Update(opts) => {
            let request = RecordRequest::from(&opts.record);
            let zone = opts.records.zone.as_str();
            crate::cmd::show_each(globals, &opts.records.ids.ids, |id| {
                update(&client, zone, &request, id)
            })
            .await
        }
    }
}

async fn delete(client: &Client, zone: &str, id: &str) -> Result<()> {
    let id = parse_id("record", id)?;
    client.safedns().delete_record(zone, id).await?;
    println!("Record '{}' in zone '{}' was deleted.", id, zone);
    Ok(())
}

async fn fetch(client: &Client, zone: &str, id: &str) -> Result<Record> {
    let id = parse_id("record", id)?;
    client.safedns().record(zone, id).await
}

async fn update(client: &Client, zone: &str, request: &RecordRequest, id: &str) -> Result<Record> {
    let id = parse_id("record", id)?;
    client.safedns().patch_record(zone, id, request).await?;
    client.safedns().record(zone, id).await
}
