//! Remove the selected context from the store.
use anyhow::Result;
use inquire::Confirm;

use super::DeleteOpts;
use crate::context::ContextStore;
use crate::errors::ContextNotFound;
use crate::Globals;

/// Remove the selected context from the store, after confirmation.
pub async fn run(globals: &Globals, opts: &DeleteOpts) -> Result<i32> {
    let mut store = ContextStore::load(globals).await?;
    let active = store.active_id(globals).to_owned();
    if store.get(&active).is_none() {
        anyhow::bail!(ContextNotFound::for_name(active));
    }

    let confirm = match opts.yes {
        true => true,
        false => {
            let message = format!("Deleting context {}, can't be undone", active);
            tokio::task::spawn_blocking(move || {
                Confirm::new(&message).with_default(false).prompt()
            })
            .await??
        }
    };

    if confirm {
        store.remove(&active);
        store.save(globals).await?;
        println!("Context '{}' was deleted.", active);
    }
    Ok(0)
}
