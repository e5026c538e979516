//! Operations offered by a `cloudctl` formatter interface.
use crate::context::Context;

use self::sealed::SealFormatOp;

/// Internal trait to support ergonomic formatting operations.
pub trait FormatOp: Into<Ops> + SealFormatOp {
    /// Type returned by the matching format operation.
    type Response: From<Responses>;
}

/// All known operations that must be implemented by formatters.
pub enum Ops {
    /// Format information about a [`Context`].
    Context(Context),

    /// Request a formatter to emit [`Context`] lists.
    ContextList,

    /// Request a formatter to emit lists of objects with the given fields.
    ObjectList(&'static [&'static str]),
}

/// All known responses from format operations.
pub enum Responses {
    /// Return a object to format a list of [`Context`]s.
    ContextList(Box<dyn super::ContextList>),

    /// The formatting operation failed.
    Err(anyhow::Error),

    /// Return a object to format a list of API objects.
    ObjectList(Box<dyn super::ObjectList>),

    /// The formatting operation was successful.
    Success,
}

impl Responses {
    pub fn contexts<L>(list: L) -> Responses
    where
        L: super::ContextList + 'static,
    {
        Responses::ContextList(Box::new(list))
    }

    pub fn objects<L>(list: L) -> Responses
    where
        L: super::ObjectList + 'static,
    {
        Responses::ObjectList(Box::new(list))
    }
}

impl From<anyhow::Result<()>> for Responses {
    fn from(value: anyhow::Result<()>) -> Self {
        match value {
            Ok(()) => Responses::Success,
            Err(error) => Responses::Err(error),
        }
    }
}

// --- Operation & return types -- //
/// Request a formatter to emit [`Context`] lists.
pub struct ContextListOp;

/// Request a formatter to emit lists of objects with the given fields.
pub struct ObjectListOp(pub &'static [&'static str]);

/// Private module to seal implementation details.
mod sealed {
    /// Super-trait to seal the [`FormatOp`](super::FormatOp) trait.
    pub trait SealFormatOp {}
}

// --- Implement FormatOp and other traits on types for transparent operations --- //
impl SealFormatOp for Context {}
impl From<Context> for Ops {
    fn from(value: Context) -> Self {
        Self::Context(value)
    }
}
impl FormatOp for Context {
    type Response = anyhow::Result<()>;
}

impl SealFormatOp for ContextListOp {}
impl From<ContextListOp> for Ops {
    fn from(_: ContextListOp) -> Self {
        Self::ContextList
    }
}
impl FormatOp for ContextListOp {
    type Response = Box<dyn super::ContextList>;
}

impl SealFormatOp for ObjectListOp {}
impl From<ObjectListOp> for Ops {
    fn from(value: ObjectListOp) -> Self {
        Self::ObjectList(value.0)
    }
}
impl FormatOp for ObjectListOp {
    type Response = Box<dyn super::ObjectList>;
}

// --- Implement Responses conversions on return types for transparent operations --- //
impl From<Responses> for Box<dyn super::ContextList> {
    fn from(value: Responses) -> Self {
        match value {
            Responses::ContextList(value) => value,
            _ => panic!("unexpected response type for formatter operation"),
        }
    }
}
impl From<Responses> for Box<dyn super::ObjectList> {
    fn from(value: Responses) -> Self {
        match value {
            Responses::ObjectList(value) => value,
            _ => panic!("unexpected response type for formatter operation"),
        }
    }
}
impl From<Responses> for anyhow::Result<()> {
    fn from(value: Responses) -> Self {
        match value {
            Responses::Success => Ok(()),
            Responses::Err(error) => Err(error),
            _ => panic!("unexpected response type for formatter operation"),
        }
    }
}
