//! Select the active context, the one used when none are specified.
use anyhow::Result;
use inquire::Select;

use super::SelectOpts;
use crate::context::ContextStore;
use crate::errors::ContextNotFound;
use crate::Globals;

/// Select the active context, by name or interactively.
pub async fn run(globals: &Globals, opts: &SelectOpts) -> Result<i32> {
    let mut store = ContextStore::load(globals).await?;
    let selection = match &opts.name {
        Some(name) if store.get(name).is_none() => {
            anyhow::bail!(ContextNotFound::for_name(name.as_str()));
        }
        Some(name) => name.clone(),
        None => prompt(globals, &store).await?,
    };

    store.set_active_id(Some(selection.clone()));
    store.save(globals).await?;
    println!("Context '{}' is now active.", selection);
    Ok(0)
}

async fn prompt(globals: &Globals, store: &ContextStore) -> Result<String> {
    let current = store.active_id(globals);
    let options: Vec<_> = store.iter().map(|(name, _)| name.to_string()).collect();
    if options.is_empty() {
        anyhow::bail!("no contexts are configured, add one with 'cloudctl context configure'");
    }
    let selected = options.iter().position(|name| name == current);

    let selection = tokio::task::spawn_blocking(move || {
        let mut prompt = Select::new(
            "Select the active context for use in future commands",
            options,
        );
        if let Some(index) = selected {
            prompt = prompt.with_starting_cursor(index);
        }
        prompt.prompt()
    })
    .await??;
    Ok(selection)
}
