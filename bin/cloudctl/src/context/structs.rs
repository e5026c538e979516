use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use cloudclient::ClientOptions;
use cloudclient_utils::DEFAULT_API_URL;

use super::ContextOpt;
use crate::errors::NoApiKey;

/// Information needed to access the API.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Connection {
    /// Key to authenticate requests with.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Seconds to wait for a response before a request is failed.
    #[serde(default)]
    pub timeout: Option<u64>,

    /// Seconds to wait for a connection to be established.
    #[serde(default)]
    pub timeout_connect: Option<u64>,

    /// URL of the API servers.
    #[serde(default = "Connection::default_url")]
    pub url: String,
}

impl Connection {
    fn default_url() -> String {
        DEFAULT_API_URL.to_string()
    }
}

impl Default for Connection {
    fn default() -> Self {
        Connection {
            api_key: None,
            timeout: None,
            timeout_connect: None,
            url: Connection::default_url(),
        }
    }
}

/// Contextual information used by API requests.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Context {
    /// How to reach the API server(s).
    pub connection: Connection,

    /// Name of the context in the store.
    #[serde(skip)]
    pub name: String,
}

impl Context {
    /// Create an empty context with default connection options.
    pub fn named<S>(name: S) -> Context
    where
        S: Into<String>,
    {
        Context {
            connection: Connection::default(),
            name: name.into(),
        }
    }

    /// API key to use for requests, preferring the CLI override.
    pub fn api_key<'a>(&'a self, opt: &'a ContextOpt) -> Option<&'a str> {
        opt.api_key
            .as_deref()
            .or(self.connection.api_key.as_deref())
    }

    /// Options to create API clients for this context, with CLI overrides applied.
    pub fn options(&self, opt: &ContextOpt) -> Result<ClientOptions> {
        let api_key = self.api_key(opt).ok_or_else(|| NoApiKey {
            context: self.name.clone(),
        })?;
        let url = opt.api_url.as_deref().unwrap_or(&self.connection.url);
        let mut options = ClientOptions::url(url).api_key(api_key);
        if let Some(timeout) = self.connection.timeout {
            options = options.timeout(Duration::from_secs(timeout));
        }
        if let Some(timeout) = self.connection.timeout_connect {
            options = options.timeout_connect(Duration::from_secs(timeout));
        }
        Ok(options.client())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Context;
    use crate::context::ContextOpt;
    use crate::errors::NoApiKey;

    fn opt() -> ContextOpt {
        ContextOpt {
            api_key: None,
            api_url: None,
            context: None,
            contexts_file: None,
        }
    }

    #[test]
    fn options_from_context() {
        let mut context = Context::named("work");
        context.connection.api_key = Some("stored-key".into());
        context.connection.timeout = Some(10);
        let options = context.options(&opt()).unwrap();
        assert_eq!(options.address, "https://api.ukfast.io/");
        assert_eq!(options.api_key, "stored-key");
        assert_eq!(options.timeout, Duration::from_secs(10));
    }

    #[test]
    fn options_prefer_overrides() {
        let mut context = Context::named("work");
        context.connection.api_key = Some("stored-key".into());
        let mut opt = opt();
        opt.api_key = Some("override-key".into());
        opt.api_url = Some("http://localhost:8080".into());
        let options = context.options(&opt).unwrap();
        assert_eq!(options.address, "http://localhost:8080/");
        assert_eq!(options.api_key, "override-key");
    }

    #[test]
    fn options_without_api_key() {
        let context = Context::named("work");
        let error = context.options(&opt()).unwrap_err();
        let error = error.downcast_ref::<NoApiKey>().unwrap();
        assert_eq!(error.context, "work");
    }
}
