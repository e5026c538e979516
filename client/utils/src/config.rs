//! Configuration options for API clients.
use std::time::Duration;

use anyhow::Result;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use reqwest::ClientBuilder;

/// Default address of the API servers.
pub const DEFAULT_API_URL: &str = "https://api.ukfast.io/";

/// Options to initialise clients with.
pub struct ClientOptions {
    /// Address of the API server to connect to, with trailing slash.
    pub address: String,

    /// Key to authenticate requests with, sent as the `Authorization` header.
    pub api_key: String,

    /// Timeout for requests made by the client.
    pub timeout: Duration,

    /// Timeout for new connections initialised by the client.
    pub timeout_connect: Duration,
}

impl ClientOptions {
    /// Configure a [`ClientBuilder`] with these options.
    pub fn client(&self, user_agent: &str) -> Result<ClientBuilder> {
        let mut auth = HeaderValue::from_str(&self.api_key)?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let builder = Client::builder()
            .connect_timeout(self.timeout_connect)
            .default_headers(headers)
            .timeout(self.timeout)
            .user_agent(user_agent);
        Ok(builder)
    }

    /// Define options for API clients.
    pub fn url<S>(address: S) -> ClientOptionsBuilder
    where
        S: Into<String>,
    {
        ClientOptionsBuilder {
            address: address.into(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
            timeout_connect: Duration::from_secs(5),
        }
    }
}

// The API key never shows up in debug output or logs.
impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = match self.api_key.is_empty() {
            true => "<not set>",
            false => "<redacted>",
        };
        f.debug_struct("ClientOptions")
            .field("address", &self.address)
            .field("api_key", &api_key)
            .field("timeout", &self.timeout)
            .field("timeout_connect", &self.timeout_connect)
            .finish()
    }
}

/// Incrementally build [`ClientOptions`] objects.
pub struct ClientOptionsBuilder {
    address: String,
    api_key: String,
    timeout: Duration,
    timeout_connect: Duration,
}

impl ClientOptionsBuilder {
    /// Set the API key requests are authenticated with.
    pub fn api_key<S>(mut self, key: S) -> Self
    where
        S: Into<String>,
    {
        self.api_key = key.into();
        self
    }

    /// All options are set, get a usable options object.
    pub fn client(self) -> ClientOptions {
        self.into()
    }

    /// Set the timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout to establish new connections.
    pub fn timeout_connect(mut self, timeout: Duration) -> Self {
        self.timeout_connect = timeout;
        self
    }
}

impl From<ClientOptionsBuilder> for ClientOptions {
    fn from(value: ClientOptionsBuilder) -> Self {
        let mut address = value.address;
        if !address.ends_with('/') {
            address.push('/');
        }
        ClientOptions {
            address,
            api_key: value.api_key,
            timeout: value.timeout,
            timeout_connect: value.timeout_connect,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ClientOptions;

    #[test]
    fn address_gains_trailing_slash() {
        let options = ClientOptions::url("http://localhost:8080").client();
        assert_eq!(options.address, "http://localhost:8080/");
    }

    #[test]
    fn address_keeps_trailing_slash() {
        let options = ClientOptions::url("http://localhost:8080/").client();
        assert_eq!(options.address, "http://localhost:8080/");
    }

    #[test]
    fn builder_sets_options() {
        let options = ClientOptions::url("http://localhost")
            .api_key("secret")
            .timeout(Duration::from_secs(2))
            .timeout_connect(Duration::from_secs(1))
            .client();
        assert_eq!(options.api_key, "secret");
        assert_eq!(options.timeout, Duration::from_secs(2));
        assert_eq!(options.timeout_connect, Duration::from_secs(1));
    }

    #[test]
    fn debug_hides_api_key() {
        let options = ClientOptions::url("http://localhost")
            .api_key("secret")
            .client();
        let debug = format!("{:?}", options);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn invalid_api_key_is_rejected() {
        let options = ClientOptions::url("http://localhost")
            .api_key("bad\nkey")
            .client();
        assert!(options.client("test").is_err());
    }
}
