//! Format `cloudctl` context objects.
use anyhow::Result;

use crate::context::Context;
use crate::utils::set_or_not;
use crate::utils::value_or_not_set;

/// Format a list of [`Context`] objects into a table.
pub struct ContextList {
    table: comfy_table::Table,
}

impl ContextList {
    pub fn new() -> ContextList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ACTIVE", "NAME", "URL", "API KEY", "TIMEOUT"]);
        ContextList { table }
    }
}

impl crate::formatter::ContextList for ContextList {
    fn append(&mut self, name: &str, context: &Context, active: bool) -> Result<()> {
        let api_key = set_or_not(&context.connection.api_key);
        self.table.add_row(vec![
            if active { "*" } else { "" },
            name,
            &context.connection.url,
            api_key,
            &value_or_not_set(&context.connection.timeout),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format the [`Context`] for users to inspect.
pub fn show(context: &Context) {
    let api_key = set_or_not(&context.connection.api_key);
    println!("Context: {}", context.name);
    println!();
    println!("API Connection:");
    println!("  URL: {}", context.connection.url);
    println!("  API Key: {}", api_key);
    println!(
        "  Request Timeout: {}",
        value_or_not_set(&context.connection.timeout)
    );
    println!(
        "  Connect Timeout: {}",
        value_or_not_set(&context.connection.timeout_connect)
    );
}
