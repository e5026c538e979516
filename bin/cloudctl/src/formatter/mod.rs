//! Abstract how information is presented to users to enable different interaction styles.
//!
//! For example:
//!
//! - The default `Human` formatter aims to provide output suitable for an interactive session
//!   where people issue commands and review results.
//! - The `JSON` and `YAML` formatters aim to provide output suitable for automated scripts.
//! - The `Value` formatter emits bare values for shell pipelines.
use anyhow::Result;
use clap::Args;
use clap::ValueEnum;

mod human;
mod resource;
mod resources;
mod serial;
mod value;

pub mod ops;

pub use self::resource::Record;
pub use self::resource::Resource;

use self::ops::ObjectListOp;
use crate::context::Context;
use crate::globals::Globals;

/// Present a list of [`Context`]s to the user.
pub trait ContextList {
    /// Append a new context into the list being formatted.
    fn append(&mut self, name: &str, context: &Context, active: bool) -> Result<()>;

    /// Handle the now complete list of contexts and emit it to standard output.
    fn finish(&mut self) -> Result<()>;
}

/// Present a list of API objects to the user.
pub trait ObjectList {
    /// Append a new object into the list being formatted.
    fn append(&mut self, record: Record) -> Result<()>;

    /// Handle the now complete list of objects and emit it to standard output.
    fn finish(&mut self) -> Result<()>;
}

impl dyn ObjectList {
    /// Append a [`Resource`] into the list being formatted.
    pub fn push<R: Resource>(&mut self, item: &R) -> Result<()> {
        let record = Record::from_resource(item)?;
        self.append(record)
    }
}

/// List of available output formats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatId {
    /// Optimise output for viewing by humans.
    #[default]
    Human,

    /// Output information as JSON documents.
    Json,

    /// Output bare field values, one object per line.
    Value,

    /// Output information as YAML documents.
    Yaml,
}

/// Configure output formatting for `cloudctl`.
#[derive(Args, Debug)]
pub struct FormatOpts {
    /// Select the format to use for output.
    #[arg(
        long = "format",
        global = true,
        env = "CLOUDCTL_FORMAT",
        default_value_t,
        value_enum
    )]
    pub format: FormatId,

    /// Only output the given object properties (can be repeated).
    #[arg(long = "property", global = true)]
    pub properties: Vec<String>,
}

/// Present information to users in their preferred format.
pub struct Formatter {
    /// Runtime strategy to execute formatting operations with.
    strategy: Box<dyn FormatterStrategy>,
}

impl Formatter {
    /// Execute the specified formatting operation.
    pub fn format<O>(&self, globals: &Globals, op: O) -> O::Response
    where
        O: self::ops::FormatOp,
    {
        let op = op.into();
        let result = self.strategy.format(globals, op);
        O::Response::from(result)
    }
}

/// Interface to implement user output formatting.
pub trait FormatterStrategy {
    /// Execute the requested formatting operation.
    fn format(&self, globals: &Globals, op: self::ops::Ops) -> self::ops::Responses;
}

/// Render a collection of API objects in the selected format.
pub fn objects<R: Resource>(globals: &Globals, items: &[R]) -> Result<()> {
    let mut list = globals.formatter.format(globals, ObjectListOp(R::FIELDS));
    for item in items {
        list.push(item)?;
    }
    list.finish()
}

/// Instantiate a formatter based on CLI configuration.
pub fn select(format: &FormatOpts) -> Formatter {
    let strategy: Box<dyn FormatterStrategy> = match format.format {
        FormatId::Human => Box::new(self::human::HumanFormatter),
        FormatId::Json => Box::new(self::serial::SerialFormatter::Json),
        FormatId::Value => Box::new(self::value::ValueFormatter),
        FormatId::Yaml => Box::new(self::serial::SerialFormatter::Yaml),
    };
    Formatter { strategy }
}
