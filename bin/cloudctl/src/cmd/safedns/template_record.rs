//! Manage the records of a template.
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
use crate::locator::TemplateByName;
use crate::utils::parse_id;
use crate::Globals;

/// Manage the records of a template.
#[derive(Debug, Parser)]
pub struct TemplateRecordCli {
    /// Select the `cloudctl safedns template record` command to run.
    #[command(subcommand)]
    pub command: TemplateRecordCmd,
}

/// Possible template record commands to run.
#[derive(Debug, Subcommand)]
pub enum TemplateRecordCmd {
    /// Add a record to a template.
    Create(CreateOpts),

    /// Remove one or more records from a template.
    Delete(RecordsOpts),

    /// List records in a template.
    List(ListRecordsOpts),

    /// Show details of one or more records in a template.
    Show(RecordsOpts),

    /// Update one or more records in a template.
    Update(UpdateOpts),
}

#[derive(Args, Debug)]
pub struct CreateOpts {
    /// ID or name of the template to add the record to.
    pub template: String,

    #[command(flatten)]
    pub record: NewRecordFlags,
}

#[derive(Args, Debug)]
pub struct ListRecordsOpts {
    /// ID or name of the template to list records of.
    pub template: String,

    #[command(flatten)]
    pub list: ListOpts,
}

#[derive(Args, Debug)]
pub struct RecordsOpts {
    /// ID or name of the template the records belong to.
    pub template: String,

    #[command(flatten)]
    pub ids: IdsOpts,
}

#[derive(Args, Debug)]
pub struct UpdateOpts {
    #[command(flatten)]
    pub record: RecordFlags,

    #[command(flatten)]
    pub records: RecordsOpts,
}

/// Execute the selected `cloudctl safedns template record` command.
///
/// The template is resolved once for the whole command.
pub async fn run(globals: &Globals, client: &Client, cmd: &TemplateRecordCli) -> Result<i32> {
    match &cmd.command {
        TemplateRecordCmd::Create(opts) => {
            let template = TemplateByName::resolve(client, &opts.template).await?;
            let request = RecordRequest::from(&opts.record);
            let id = client
                .safedns()
                .create_template_record(template, &request)
                .await?;
            slog::info!(
                globals.logger, "Created template record";
                "template" => template, "id" => id,
            );
            let record = client.safedns().template_record(template, id).await?;
            crate::formatter::objects(globals, &[record])?;
            Ok(0)
        }
        TemplateRecordCmd::Delete(opts) => {
            let template = TemplateByName::resolve(client, &opts.template).await?;
            crate::cmd::each(globals, &opts.ids.ids, |id| delete(client, template, id)).await
        }
        TemplateRecordCmd::List(opts) => {
            let template = TemplateByName::resolve(client, &opts.template).await?;
            let params = opts.list.params();
            let records = client.safedns();
            crate::cmd::list(globals, records.template_records(template, &params)).await
        }
        TemplateRecordCmd::Show(opts) => {
            let template = TemplateByName::resolve(client, &opts.template).await?;
            crate::cmd::show_each(globals, &opts.ids.ids, |id| fetch(client, template, id)).await
        }
        TemplateRecordCmd::Update(opts) => {
            let template = TemplateByName::resolve(client, &opts.records.template).await?;
            let request = RecordRequest::from(&opts.record);
            crate::cmd::show_each(globals, &opts.records.ids.ids, |id| {
                update(client, template, &request, id)
            })
            .await
        }
    }
}

async fn delete(client: &Client, template: i32, id: &str) -> Result<()> {
    let id = parse_id("record", id)?;
    client.safedns().delete_template_record(template, id).await?;
    println!("Record '{}' in template '{}' was deleted.", id, template);
    Ok(())
}

async fn fetch(client: &Client, template: i32, id: &str) -> Result<Record> {
    let id = parse_id("record", id)?;
    client.safedns().template_record(template, id).await
}

async fn update(
    client: &Client,
    template: i32,
    request: &RecordRequest,
    id: &str,
) -> Result<Record> {
    let id = parse_id("record", id)?;
    client
        .safedns()
        .patch_template_record(template, id, request)
        .await?;
    client.safedns().template_record(template, id).await
}
