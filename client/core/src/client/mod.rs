//! Implementation of the API client object, to keep files organised.
use anyhow::Context;
use anyhow::Result;
use reqwest::Client as ReqwestClient;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;

use cloudclient_utils::Created;
use cloudclient_utils::EmptyResponse;
use cloudclient_utils::Envelope;
use cloudclient_utils::ListParameters;
use cloudclient_utils::ResourceIdentifier;

mod billing;
mod loadtest;
mod safedns;


pub use self::billing::BillingClient;
pub use self::loadtest::LoadTestClient;
pub use self::safedns::SafeDnsClient;

use crate::ClientOptions;

/// String to set as the user agent in HTTP request.
static CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Async API client to the billing, SafeDNS and LoadTest APIs.
pub struct Client {
    /// Base URL of the API server to send requests to.
    base: String,

    /// Low-level [`Client`](reqwest::Client) to perform HTTP requests with.
    client: ReqwestClient,
}

impl Client {
    /// Initialise a client with [`ClientOptions`].
    pub fn with<O>(options: O) -> Result<Client>
    where
        O: Into<ClientOptions>,
    {
        let options = options.into();
        let client = options.client(CLIENT_USER_AGENT)?;
        let client = Client {
            base: options.address,
            client: client.build()?,
        };
        Ok(client)
    }
}

impl Client {
    /// Create a resource and return the ID assigned to it by the server.
    async fn create<B, I>(&self, path: &str, body: &B) -> Result<I>
    where
        B: Serialize,
        I: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)).json(body);
        let response = request.send().await?;
        let response = cloudclient_utils::inspect::<Envelope<Created<I>>>(response).await?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.data.id)
    }

    /// Send a request for which the response payload, if any, is not relevant.
    async fn execute(&self, request: RequestBuilder, reference: ResourceIdentifier) -> Result<()> {
        let response = request.send().await?;
        cloudclient_utils::inspect::<serde_json::Value>(response)
            .await
            .with_context(|| reference)?;
        Ok(())
    }

    /// Fetch a single object from the server.
    async fn fetch<T>(&self, path: &str, reference: ResourceIdentifier) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.client.get(self.url(path)).send().await?;
        let response = cloudclient_utils::inspect::<Envelope<T>>(response)
            .await
            .with_context(|| reference)?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.data)
    }

    /// Fetch all items in a collection, one page at a time.
    async fn fetch_all<T>(&self, path: &str, params: &ListParameters) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let request = self.client.get(&url).query(&params.query(page));
            let response = request.send().await?;
            let response = cloudclient_utils::inspect::<Envelope<Vec<T>>>(response).await?;
            let response = response.ok_or(EmptyResponse)?;
            if response.data.is_empty() {
                return Ok(items);
            }
            items.extend(response.data);
            match response.meta.pagination {
                Some(pagination) if pagination.has_next(page) => page += 1,
                _ => return Ok(items),
            }
        }
    }

    /// Full URL to an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}
