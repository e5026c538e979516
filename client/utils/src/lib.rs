//! Utilities for API clients built on the [`reqwest`] crate.
mod config;
mod envelope;
mod error;
mod params;

pub use self::config::ClientOptions;
pub use self::config::ClientOptionsBuilder;
pub use self::config::DEFAULT_API_URL;
pub use self::envelope::Created;
pub use self::envelope::Envelope;
pub use self::envelope::Meta;
pub use self::envelope::Pagination;
pub use self::error::inspect;
pub use self::error::ApiError;
pub use self::error::ApiErrors;
pub use self::error::ClientError;
pub use self::error::EmptyResponse;
pub use self::error::InvalidResponse;
pub use self::error::ResourceIdentifier;
pub use self::error::ResourceNotFound;
pub use self::error::ServerError;
pub use self::params::Filter;
pub use self::params::InvalidFilter;
pub use self::params::ListParameters;
pub use self::params::Operator;
pub use self::params::Sort;
pub use self::params::DEFAULT_PER_PAGE;
