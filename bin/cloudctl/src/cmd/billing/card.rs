//! Manage payment cards.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::billing::Card;
use cloudclient::models::billing::CardRequest;
use cloudclient::Client;

use crate::cmd::IdsOpts;
use crate::cmd::ListOpts;
use crate::utils::parse_id;
use crate::Globals;

/// Manage payment cards.
#[derive(Debug, Parser)]
pub struct CardCli {
    /// Select the `cloudctl billing card` command to run.
    #[command(subcommand)]
    pub command: CardCmd,
}

/// Possible card commands to run.
#[derive(Debug, Subcommand)]
pub enum CardCmd {
    /// Register a new payment card.
    Create(CardFlags),

    /// Remove one or more payment cards.
    Delete(IdsOpts),

    /// List payment cards.
    List(ListOpts),

    /// Show details of one or more payment cards.
    Show(IdsOpts),

    /// Update one or more payment cards.
    Update(UpdateOpts),
}

/// Attributes of a payment card.
#[derive(Args, Debug)]
pub struct CardFlags {
    /// Name to refer to the card by.
    #[arg(long)]
    pub friendly_name: Option<String>,

    /// Name of the card holder.
    #[arg(long)]
    pub name: Option<String>,

    /// Billing address of the card.
    #[arg(long)]
    pub address: Option<String>,

    /// Billing postcode of the card.
    #[arg(long)]
    pub postcode: Option<String>,

    /// Number of the card.
    #[arg(long)]
    pub card_number: Option<String>,

    /// Type of card, for example Visa.
    #[arg(long)]
    pub card_type: Option<String>,

    /// Date the card is valid from.
    #[arg(long)]
    pub valid_from: Option<String>,

    /// Expiry date of the card.
    #[arg(long)]
    pub expiry: Option<String>,

    /// Issue number of the card.
    #[arg(long)]
    pub issue_number: Option<i32>,

    /// Use the card for payments by default.
    #[arg(long)]
    pub primary_card: Option<bool>,
}

impl CardFlags {
    fn request(&self) -> CardRequest {
        CardRequest {
            friendly_name: self.friendly_name.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            postcode: self.postcode.clone(),
            card_number: self.card_number.clone(),
            card_type: self.card_type.clone(),
            valid_from: self.valid_from.clone(),
            expiry: self.expiry.clone(),
            issue_number: self.issue_number,
            primary_card: self.primary_card,
        }
    }
}

/// Update payment cards.
#[derive(Args, Debug)]
pub struct UpdateOpts {
    #[command(flatten)]
    pub card: CardFlags,

    #[command(flatten)]
    pub ids: IdsOpts,
}

/// Execute the selected `cloudctl billing card` command.
pub async fn run(globals: &Globals, cmd: &CardCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        CardCmd::Create(flags) => create(globals, &client, flags).await,
        CardCmd::Delete(opts) => {
            crate::cmd::each(globals, &opts.ids, |id| delete(&client, id)).await
        }
        CardCmd::List(opts) => {
            crate::cmd::list(globals, client.billing().cards(&opts.params())).await
        }
        CardCmd::Show(opts) => {
            crate::cmd::show_each(globals, &opts.ids, |id| fetch(&client, id)).await
        }
        CardCmd::Update(opts) => {
            let request = opts.card.request();
            crate::cmd::show_each(globals, &opts.ids.ids, |id| {
                update(&client, &request, id)
            })
            .await
        }
    }
}

async fn create(globals: &Globals, client: &Client, flags: &CardFlags) -> Result<i32> {
    let id = client.billing().create_card(&flags.request()).await?;
    slog::info!(globals.logger, "Created payment card"; "id" => id);
    let card = client.billing().card(id).await?;
    crate::formatter::objects(globals, &[card])?;
    Ok(0)
}

async fn delete(client: &Client, id: &str) -> Result<()> {
    let id = parse_id("card", id)?;
    client.billing().delete_card(id).await?;
    println!("Card '{}' was deleted.", id);
    Ok(())
}

async fn fetch(client: &Client, id: &str) -> Result<Card> {
    let id = parse_id("card", id)?;
    client.billing().card(id).await
}

async fn update(client: &Client, request: &CardRequest, id: &str) -> Result<Card> {
    let id = parse_id("card", id)?;
    client.billing().patch_card(id, request).await?;
    client.billing().card(id).await
}
