//! Locate resources by name and resolve command line references to IDs.
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use cloudclient::models::loadtest::Domain;
use cloudclient::models::loadtest::Test;
use cloudclient::models::safedns::Template;
use cloudclient::Client;
use cloudclient_utils::Filter;
use cloudclient_utils::ListParameters;

use super::ResourceLocator;
use super::ResourceLocatorProvider;

const BY_NAME: &[&str] = &["name"];

/// Locate SafeDNS templates by name.
pub struct TemplateByName<'a> {
    client: &'a Client,
}

impl<'a> TemplateByName<'a> {
    pub fn new(client: &'a Client) -> TemplateByName<'a> {
        TemplateByName { client }
    }

    /// Resolve a template ID, or a name when the value is not a valid ID.
    pub async fn resolve(client: &'a Client, value: &str) -> Result<i32> {
        if let Ok(id) = value.parse::<i32>() {
            return Ok(id);
        }
        let template = ResourceLocator::new(TemplateByName::new(client))
            .invoke(value)
            .await?;
        Ok(template.id)
    }
}

#[async_trait]
impl<'a> ResourceLocatorProvider for TemplateByName<'a> {
    type Item = Template;

    fn supported_properties(&self) -> &[&'static str] {
        BY_NAME
    }

    async fn locate(&self, property: &str, value: &str) -> Result<Vec<Template>> {
        let params = ListParameters::filtered(Filter::eq(property, value));
        self.client.safedns().templates(&params).await
    }
}

/// Locate LoadTest domains by name.
pub struct DomainByName<'a> {
    client: &'a Client,
}

impl<'a> DomainByName<'a> {
    pub fn new(client: &'a Client) -> DomainByName<'a> {
        DomainByName { client }
    }

    /// Resolve a domain ID, or a name when the value is not a valid UUID.
    pub async fn resolve(client: &'a Client, value: &str) -> Result<Uuid> {
        if let Ok(id) = Uuid::parse_str(value) {
            return Ok(id);
        }
        let domain = ResourceLocator::new(DomainByName::new(client))
            .invoke(value)
            .await?;
        Ok(domain.id)
    }
}

#[async_trait]
impl<'a> ResourceLocatorProvider for DomainByName<'a> {
    type Item = Domain;

    fn supported_properties(&self) -> &[&'static str] {
        BY_NAME
    }

    async fn locate(&self, property: &str, value: &str) -> Result<Vec<Domain>> {
        let params = ListParameters::filtered(Filter::eq(property, value));
        self.client.loadtest().domains(&params).await
    }
}

/// Locate LoadTest tests by name.
pub struct TestByName<'a> {
    client: &'a Client,
}

impl<'a> TestByName<'a> {
    pub fn new(client: &'a Client) -> TestByName<'a> {
        TestByName { client }
    }

    /// Resolve a test ID, or a name when the value is not a valid UUID.
    pub async fn resolve(client: &'a Client, value: &str) -> Result<Uuid> {
        if let Ok(id) = Uuid::parse_str(value) {
            return Ok(id);
        }
        let test = ResourceLocator::new(TestByName::new(client))
            .invoke(value)
            .await?;
        Ok(test.id)
    }
}

#[async_trait]
impl<'a> ResourceLocatorProvider for TestByName<'a> {
    type Item = Test;

    fn supported_properties(&self) -> &[&'static str] {
        BY_NAME
    }

    async fn locate(&self, property: &str, value: &str) -> Result<Vec<Test>> {
        let params = ListParameters::filtered(Filter::eq(property, value));
        self.client.loadtest().tests(&params).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use cloudclient::Client;
    use cloudclient::ClientOptions;

    use super::DomainByName;
    use super::TemplateByName;
    use crate::locator::LocateError;

    fn client(server: &MockServer) -> Client {
        let options = ClientOptions::url(server.base_url())
            .api_key("test-key")
            .client();
        Client::with(options).expect("client to initialise")
    }

    fn page(data: serde_json::Value, count: usize) -> serde_json::Value {
        json!({
            "data": data,
            "meta": {"pagination": {"total": count, "count": count, "per_page": 100, "current_page": 1, "total_pages": 1}}
        })
    }

    #[tokio::test]
    async fn template_id_skips_lookup() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/safedns/v1/templates");
                then.status(500);
            })
            .await;

        let client = client(&server);
        let id = TemplateByName::resolve(&client, "42").await.unwrap();
        assert_eq!(id, 42);
        mock.assert_calls_async(0).await;
    }

    #[tokio::test]
    async fn template_by_name() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/safedns/v1/templates")
                    .query_param("name:eq", "web");
                then.status(200)
                    .json_body(page(json!([{"id": 3, "name": "web"}]), 1));
            })
            .await;

        let client = client(&server);
        let id = TemplateByName::resolve(&client, "web").await.unwrap();
        mock.assert_async().await;
        assert_eq!(id, 3);
    }

    #[tokio::test]
    async fn template_by_ambiguous_name() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/safedns/v1/templates");
                then.status(200).json_body(page(
                    json!([{"id": 3, "name": "web"}, {"id": 4, "name": "web"}]),
                    2,
                ));
            })
            .await;

        let client = client(&server);
        let error = TemplateByName::resolve(&client, "web").await.unwrap_err();
        let error = error.downcast_ref::<LocateError>().unwrap();
        assert_eq!(
            error.to_string(),
            "more than one item found matching [web] (name)",
        );
    }

    #[tokio::test]
    async fn domain_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/ltaas/v1/domains")
                    .query_param("name:eq", "example.com");
                then.status(200).json_body(page(json!([]), 0));
            })
            .await;

        let client = client(&server);
        let error = DomainByName::resolve(&client, "example.com")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "no items found matching [example.com]");
    }

    #[tokio::test]
    async fn domain_lookup_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ltaas/v1/domains");
                then.status(500);
            })
            .await;

        let client = client(&server);
        let error = DomainByName::resolve(&client, "example.com")
            .await
            .unwrap_err();
        let error = error.downcast_ref::<LocateError>().unwrap();
        assert!(matches!(error, LocateError::Lookup(_)));
    }
}
