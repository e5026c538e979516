//! Format output as bare values for use in shell pipelines.
use anyhow::Result;

use super::ops::Ops;
use super::ops::Responses;
use super::resource::columns;
use super::FormatterStrategy;
use super::Record;
use crate::context::Context;
use crate::globals::Globals;

/// Print one line per object with its field values separated by spaces.
pub struct ValueFormatter;

impl FormatterStrategy for ValueFormatter {
    fn format(&self, globals: &Globals, op: Ops) -> Responses {
        match op {
            Ops::Context(context) => {
                println!("{} {}", context.name, context.connection.url);
                Responses::Success
            }
            Ops::ContextList => Responses::contexts(ContextList),
            Ops::ObjectList(fields) => {
                let columns = columns(fields, &globals.cli.format.properties);
                Responses::objects(ObjectList { columns })
            }
        }
    }
}

struct ContextList;

impl crate::formatter::ContextList for ContextList {
    fn append(&mut self, name: &str, context: &Context, _: bool) -> Result<()> {
        println!("{} {}", name, context.connection.url);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

struct ObjectList {
    columns: Vec<&'static str>,
}

impl crate::formatter::ObjectList for ObjectList {
    fn append(&mut self, record: Record) -> Result<()> {
        println!("{}", record.select(&self.columns).join(" "));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
