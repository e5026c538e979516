//! Manage DNS zones.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::safedns::CreateZoneRequest;
use cloudclient::models::safedns::PatchZoneRequest;
use cloudclient::models::safedns::Zone;
use cloudclient::Client;

use crate::cmd::ListOpts;
use crate::Globals;

/// Manage DNS zones.
#[derive(Debug, Parser)]
pub struct ZoneCli {
    /// Select the `cloudctl safedns zone` command to run.
    #[command(subcommand)]
    pub command: ZoneCmd,
}

/// Possible zone commands to run.
#[derive(Debug, Subcommand)]
pub enum ZoneCmd {
    /// Create a new zone.
    Create(CreateOpts),

    /// Remove one or more zones.
    Delete(ZonesOpts),

    /// List zones.
    List(ListOpts),

    /// Show details of one or more zones.
    Show(ZonesOpts),

    /// Update the description of one or more zones.
    Update(UpdateOpts),
}

/// Details of the zone to create.
#[derive(Args, Debug)]
pub struct CreateOpts {
    /// Name of the zone, for example example.com.
    pub zone: String,

    /// Description of the zone.
    #[arg(long)]
    pub description: Option<String>,
}

/// Zones to update.
#[derive(Args, Debug)]
pub struct UpdateOpts {
    /// New description of the zones.
    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub zones: ZonesOpts,
}

/// Zones to operate on.
#[derive(Args, Debug)]
pub struct ZonesOpts {
    /// Names of the zones to operate on.
    #[arg(required = true, value_name = "ZONE")]
    pub zones: Vec<String>,
}

/// Execute the selected `cloudctl safedns zone` command.
pub async fn run(globals: &Globals, cmd: &ZoneCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        ZoneCmd::Create(opts) => create(globals, &client, opts).await,
        ZoneCmd::Delete(opts) => {
            crate::cmd::each(globals, &opts.zones, |name| delete(&client, name)).await
        }
        ZoneCmd::List(opts) => {
            crate::cmd::list(globals, client.safedns().zones(&opts.params())).await
        }
        ZoneCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.zones, |name| fetch(&client, name)).await
        }
        ZoneCmd::Update(opts) => {
            let request = PatchZoneRequest {
                description: opts.description.clone(),
            };
            crate::cmd::show_each(globals, &opts.zones.zones, |name| {
                update(&client, &request, name)
            })
            .await
        }
    }
}

async fn create(globals: &Globals, client: &Client, opts: &CreateOpts) -> Result<i32> {
    let request = CreateZoneRequest {
        name: opts.zone.clone(),
        description: opts.description.clone(),
    };
    client.safedns().create_zone(&request).await?;
    slog::info!(globals.logger, "Created zone"; "zone" => &opts.zone);
    let zone = client.safedns().zone(&opts.zone).await?;
    crate::formatter::objects(globals, &[zone])?;
    Ok(0)
}

async fn delete(client: &Client, name: &str) -> Result<()> {
    client.safedns().delete_zone(name).await?;
    println!("Zone '{}' was deleted.", name);
    Ok(())
}

async fn fetch(client: &Client, name: &str) -> Result<Zone> {
    client.safedns().zone(name).await
}

async fn update(client: &Client, request: &PatchZoneRequest, name: &str) -> Result<Zone> {
    client.safedns().patch_zone(name, request).await?;
    client.safedns().zone(name).await
}
