//! Manage DNS zones, records and templates.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::safedns::RecordRequest;

use crate::Globals;

mod note;
mod record;
mod settings;
mod template;
mod template_record;
mod zone;

/// Manage DNS zones, records and templates.
#[derive(Debug, Parser)]
pub struct SafeDnsCli {
    /// Select the `cloudctl safedns` command to run.
    #[command(subcommand)]
    pub command: SafeDnsCmd,
}

/// Select the `cloudctl safedns` command to run.
#[derive(Debug, Subcommand)]
pub enum SafeDnsCmd {
    /// Inspect or add notes attached to a zone.
    Note(note::NoteCli),

    /// Manage the records of a zone.
    Record(record::RecordCli),

    /// Inspect account wide SafeDNS settings.
    Settings(settings::SettingsCli),

    /// Manage templates and their records.
    Template(template::TemplateCli),

    /// Manage DNS zones.
    Zone(zone::ZoneCli),
}

/// Execute the selected `cloudctl safedns` command.
pub async fn run(globals: &Globals, cmd: &SafeDnsCli) -> Result<i32> {
    match &cmd.command {
        SafeDnsCmd::Note(cmd) => note::run(globals, cmd).await,
        SafeDnsCmd::Record(cmd) => record::run(globals, cmd).await,
        SafeDnsCmd::Settings(cmd) => settings::run(globals, cmd).await,
        SafeDnsCmd::Template(cmd) => template::run(globals, cmd).await,
        SafeDnsCmd::Zone(cmd) => zone::run(globals, cmd).await,
    }
}

/// Attributes of a new DNS record.
#[derive(Args, Debug)]
pub struct NewRecordFlags {
    /// Fully qualified name of the record.
    #[arg(long)]
    pub name: String,

    /// Type of the record, for example A or CNAME.
    #[arg(long = "type")]
    pub record_type: String,

    /// Content of the record.
    #[arg(long)]
    pub content: String,

    /// Time to live of the record, in seconds.
    #[arg(long)]
    pub ttl: Option<i32>,

    /// Priority of MX and SRV records.
    #[arg(long)]
    pub priority: Option<i32>,
}

impl From<&NewRecordFlags> for RecordRequest {
    fn from(flags: &NewRecordFlags) -> Self {
        RecordRequest {
            name: Some(flags.name.clone()),
            record_type: Some(flags.record_type.clone()),
            content: Some(flags.content.clone()),
            ttl: flags.ttl,
            priority: flags.priority,
        }
    }
}

/// Attributes of DNS records to update.
#[derive(Args, Debug)]
pub struct RecordFlags {
    /// Fully qualified name of the record.
    #[arg(long)]
    pub name: Option<String>,

    /// Type of the record, for example A or CNAME.
    #[arg(long = "type")]
    pub record_type: Option<String>,

    /// Content of the record.
    #[arg(long)]
    pub content: Option<String>,

    /// Time to live of the record, in seconds.
    #[arg(long)]
    pub ttl: Option<i32>,

    /// Priority of MX and SRV records.
    #[arg(long)]
    pub priority: Option<i32>,
}

impl From<&RecordFlags> for RecordRequest {
    fn from(flags: &RecordFlags) -> Self {
        RecordRequest {
            name: flags.name.clone(),
            record_type: flags.record_type.clone(),
            content: flags.content.clone(),
            ttl: flags.ttl,
            priority: flags.priority,
        }
    }
}
