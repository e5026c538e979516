//! Inspect or add notes attached to a zone.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use cloudclient::models::safedns::CreateNoteRequest;
use cloudclient::models::safedns::Note;
use cloudclient::Client;

use crate::cmd::IdsOpts;
use crate::cmd::ListOpts;
use crate::utils::parse_id;
use crate::Globals;

/// Inspect or add notes attached to a zone.
#[derive(Debug, Parser)]
pub struct NoteCli {
    #[command(subcommand)]
    pub command: NoteCmd,
}

/// Possible note commands to run.
#[derive(Debug, Subcommand)]
pub enum NoteCmd {
    /// Attach a note to a zone.
    Create(CreateOpts),

    /// List notes attached to a zone.
    List(ListNotesOpts),

    /// Show one or more notes attached to a zone.
    Show(NotesOpts),
}

/// Details of the note to attach.
#[derive(Args, Debug)]
pub struct CreateOpts {
    /// Name of the zone to attach the note to.
    pub zone: String,

    /// Text of the note.
    #[arg(long)]
    pub notes: String,

    /// ID of the contact the note is from.
    #[arg(long)]
    pub contact_id: Option<i32>,
}

#[derive(Args, Debug)]
pub struct ListNotesOpts {
    /// Name of the zone to list notes of.
    pub zone: String,

    #[command(flatten)]
    pub list: ListOpts,
}

#[derive(Args, Debug)]
pub struct NotesOpts {
    /// Name of the zone the notes are attached to.
    pub zone: String,

    #[command(flatten)]
    pub ids: IdsOpts,
}

/// Execute the selected `cloudctl safedns note` command.
pub async fn run(globals: &Globals, cmd: &NoteCli) -> Result<i32> {
    let client = crate::cmd::connect(globals).await?;
    match &cmd.command {
        NoteCmd::Create(opts) => {
            let request = CreateNoteRequest {
                notes: opts.notes.clone(),
                contact_id: opts.contact_id,
            };
            let id = client.safedns().create_note(&opts.zone, &request).await?;
            let note = client.safedns().note(&opts.zone, id).await?;
            crate::formatter::objects(globals, &[note])?;
            Ok(0)
        }
        NoteCmd::List(opts) => {
            let params = opts.list.params();
            crate::cmd::list(globals, client.safedns().notes(&opts.zone, &params)).await
        }
        NoteCmd::Show(opts) => {
            let zone = opts.zone.as_str();
            crate::cmd::show_each(globals, &opts.ids.ids, |id| fetch(&client, zone, id)).await
        }
    }
}

async fn fetch(client: &Client, zone: &str, id: &str) -> Result<Note> {
    let id = parse_id("note", id)?;
    client.safedns().note(zone, id).await
}
