//! Configure or update the connection options for the selected context.
use std::io::IsTerminal;

use anyhow::Result;
use inquire::Password;

use super::ConfigureOpts;
use crate::context::Context;
use crate::context::ContextStore;
use crate::errors::NoApiKey;
use crate::Globals;

/// Store connection options for the selected context.
///
/// The API key and URL come from the global `--api-key` and `--api-url` options.
/// Without an API key to store or already stored, one is prompted for on terminals.
pub async fn run(globals: &Globals, opts: &ConfigureOpts) -> Result<i32> {
    let mut store = ContextStore::load(globals).await?;
    let name = store.active_id(globals).to_string();
    let mut context = store
        .get(&name)
        .unwrap_or_else(|| Context::named(name.as_str()));

    let overrides = &globals.cli.context;
    if let Some(url) = &overrides.api_url {
        context.connection.url = url.clone();
    }
    if let Some(api_key) = &overrides.api_key {
        context.connection.api_key = Some(api_key.clone());
    }
    if let Some(timeout) = opts.timeout {
        context.connection.timeout = Some(timeout);
    }
    if let Some(timeout) = opts.timeout_connect {
        context.connection.timeout_connect = Some(timeout);
    }

    if context.connection.api_key.is_none() {
        if !std::io::stdin().is_terminal() {
            anyhow::bail!(NoApiKey { context: name });
        }
        let prompt = format!("API key for context {}:", name);
        let api_key = tokio::task::spawn_blocking(move || {
            Password::new(&prompt)
                .without_confirmation()
                .with_help_message("Input is hidden")
                .prompt()
        })
        .await??;
        context.connection.api_key = Some(api_key);
    }

    // Update the contexts store and save it to disk.
    store.upsert(name.clone(), context);
    if !store.has_active() {
        store.set_active_id(Some(name.clone()));
    }
    store.save(globals).await?;
    slog::info!(globals.logger, "Context configured"; "context" => &name);
    println!("Context '{}' was configured.", name);
    Ok(0)
}
