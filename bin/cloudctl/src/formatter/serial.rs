//! Format output to JSON or YAML documents.
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use super::ops::Ops;
use super::ops::Responses;
use super::FormatterStrategy;
use super::Record;
use crate::context::Context;
use crate::globals::Globals;
use crate::utils::set_or_not;

/// Format output to structured documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerialFormatter {
    Json,
    Yaml,
}

impl SerialFormatter {
    /// Print a serialisable value in the selected encoding.
    fn print<V>(self, value: &V) -> Result<()>
    where
        V: Serialize,
    {
        let encoded = self.encode(value)?;
        println!("{}", encoded.trim_end());
        Ok(())
    }

    fn encode<V>(self, value: &V) -> Result<String>
    where
        V: Serialize,
    {
        let encoded = match self {
            SerialFormatter::Json => serde_json::to_string_pretty(value)?,
            SerialFormatter::Yaml => serde_yaml::to_string(value)?,
        };
        Ok(encoded)
    }
}

impl FormatterStrategy for SerialFormatter {
    fn format(&self, globals: &Globals, op: Ops) -> Responses {
        match op {
            Ops::Context(context) => self.print(&ContextInfo::new(&context, true)).into(),
            Ops::ContextList => Responses::contexts(ContextList {
                encoding: *self,
                items: Vec::new(),
            }),
            Ops::ObjectList(_) => Responses::objects(ObjectList {
                encoding: *self,
                items: Vec::new(),
                properties: globals.cli.format.properties.clone(),
            }),
        }
    }
}

/// Collect contexts to print them as a single document.
struct ContextList {
    encoding: SerialFormatter,
    items: Vec<ContextInfo>,
}

impl crate::formatter::ContextList for ContextList {
    fn append(&mut self, name: &str, context: &Context, active: bool) -> Result<()> {
        let mut info = ContextInfo::new(context, active);
        info.name = name.to_string();
        self.items.push(info);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.encoding.print(&self.items)
    }
}

/// Container for context entries to output, without the secret API key.
#[derive(Serialize)]
struct ContextInfo {
    name: String,
    active: bool,
    url: String,
    api_key: &'static str,
    timeout: Option<u64>,
    timeout_connect: Option<u64>,
}

impl ContextInfo {
    fn new(context: &Context, active: bool) -> ContextInfo {
        ContextInfo {
            name: context.name.clone(),
            active,
            url: context.connection.url.clone(),
            api_key: set_or_not(&context.connection.api_key),
            timeout: context.connection.timeout,
            timeout_connect: context.connection.timeout_connect,
        }
    }
}

/// Collect API objects to print them as a single document.
struct ObjectList {
    encoding: SerialFormatter,
    items: Vec<Value>,
    properties: Vec<String>,
}

impl crate::formatter::ObjectList for ObjectList {
    fn append(&mut self, record: Record) -> Result<()> {
        self.items.push(record.select_document(&self.properties));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.encoding.print(&self.items)
    }
}
