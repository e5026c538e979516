//! Render every context configured in the store.
use anyhow::Result;

use crate::context::ContextStore;
use crate::formatter::ops::ContextListOp;
use crate::Globals;

pub async fn run(globals: &Globals) -> Result<i32> {
    let store = ContextStore::load(globals).await?;
    let active = store.active_id(globals);
    let mut listed = 0;

    let mut contexts = globals.formatter.format(globals, ContextListOp);
    for (name, context) in store.iter() {
        contexts.append(name, context, name == active)?;
        listed += 1;
    }
    contexts.finish()?;

    slog::debug!(globals.logger, "Listed contexts"; "count" => listed, "active" => active);
    if listed == 0 {
        eprintln!("No contexts configured yet, add one with 'cloudctl context configure'");
    }
    Ok(0)
}
