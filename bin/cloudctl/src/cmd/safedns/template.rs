//! Manage templates and their records.
//!
//! Templates can be referenced by ID or by name.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::safedns::Template;
use cloudclient::models::safedns::TemplateRequest;
use cloudclient::Client;

use super::template_record;
use crate::cmd::ListOpts;
use crate::locator::TemplateByName;
use crate::Globals;

/// Manage templates and their records.
#[derive(Debug, Parser)]
pub struct TemplateCli {
    /// Select the `cloudctl safedns template` command to run.
    #[command(subcommand)]
    pub command: TemplateCmd,
}

/// Possible template commands to run.
#[derive(Debug, Subcommand)]
pub enum TemplateCmd {
    /// Create a new template.
    Create(CreateOpts),

    /// Remove one or more templates.
    Delete(TemplatesOpts),

    /// List templates.
    List(ListOpts),

    /// Manage the records of a template.
    Record(template_record::TemplateRecordCli),

    /// Show details of one or more templates.
    Show(TemplatesOpts),

    /// Update one or more templates.
    Update(UpdateOpts),
}

/// Details of the template to create.
#[derive(Args, Debug)]
pub struct CreateOpts {
    /// Name of the template.
    #[arg(long)]
    pub name: String,

    /// Apply the template to new zones by default.
    #[arg(long)]
    pub default: bool,
}

/// Templates to operate on.
#[derive(Args, Debug)]
pub struct TemplatesOpts {
    /// IDs or names of the templates to operate on.
    #[arg(required = true, value_name = "TEMPLATE")]
    pub templates: Vec<String>,
}

/// Templates to update.
#[derive(Args, Debug)]
pub struct UpdateOpts {
    /// New name of the templates.
    #[arg(long)]
    pub name: Option<String>,

    /// Apply the templates to new zones by default.
    #[arg(long)]
    pub default: Option<bool>,

    #[command(flatten)]
    pub templates: TemplatesOpts,
}

/// Execute the selected `cloudctl safedns template` command.
pub async fn run(globals: &Globals, cmd: &TemplateCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        TemplateCmd::Create(opts) => {
            let request = TemplateRequest {
                name: Some(opts.name.clone()),
                default: Some(opts.default),
            };
            let id = client.safedns().create_template(&request).await?;
            slog::info!(globals.logger, "Created template"; "id" => id);
            let template = client.safedns().template(id).await?;
            crate::formatter::objects(globals, &[template])?;
            Ok(0)
        }
        TemplateCmd::Delete(opts) => {
            crate::cmd::each(globals, &opts.templates, |template| {
                delete(&client, template)
            })
            .await
        }
        TemplateCmd::List(opts) => {
            crate::cmd::list(globals, client.safedns().templates(&opts.params())).await
        }
        TemplateCmd::Record(cmd) => template_record::run(globals, &client, cmd).await,
        TemplateCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.templates, |template| {
                fetch(&client, template)
            })
            .await
        }
        TemplateCmd::Update(opts) => {
            let request = TemplateRequest {
                name: opts.name.clone(),
                default: opts.default,
            };
            crate::cmd::show_each(globals, &opts.templates.templates, |template| {
                update(&client, &request, template)
            })
            .await
        }
    }
}

async fn delete(client: &Client, template: &str) -> Result<()> {
    let id = TemplateByName::resolve(client, template).await?;
    client.safedns().delete_template(id).await?;
    println!("Template '{}' was deleted.", template);
    Ok(())
}

async fn fetch(client: &Client, template: &str) -> Result<Template> {
    let id = TemplateByName::resolve(client, template).await?;
    client.safedns().template(id).await
}

async fn update(client: &Client, request: &TemplateRequest, template: &str) -> Result<Template> {
    let id = TemplateByName::resolve(client, template).await?;
    client.safedns().patch_template(id, request).await?;
    client.safedns().template(id).await
}
