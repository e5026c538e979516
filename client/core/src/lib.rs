//! Async client library to interact with the billing, SafeDNS and LoadTest APIs.
pub use cloudclient_utils::ClientOptions;
pub use cloudclient_utils::ListParameters;

mod client;
pub mod models;

pub use self::client::BillingClient;
pub use self::client::Client;
pub use self::client::LoadTestClient;
pub use self::client::SafeDnsClient;
