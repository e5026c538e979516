//! Format output for easy consumption by people interacting with `cloudctl`.
use super::ops::Ops;
use super::ops::Responses;
use super::FormatterStrategy;
use crate::globals::Globals;

mod context;
mod objects;

/// Format output for easy consumption by people interacting with `cloudctl`.
pub struct HumanFormatter;

impl FormatterStrategy for HumanFormatter {
    fn format(&self, globals: &Globals, op: Ops) -> Responses {
        match op {
            Ops::Context(context) => {
                self::context::show(&context);
                Responses::Success
            }
            Ops::ContextList => Responses::contexts(self::context::ContextList::new()),
            Ops::ObjectList(fields) => {
                let properties = &globals.cli.format.properties;
                Responses::objects(self::objects::ObjectTable::new(fields, properties))
            }
        }
    }
}
