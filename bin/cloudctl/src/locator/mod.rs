//! Resolve free-text filters, such as names, to a single API resource.
//!
//! A [`ResourceLocatorProvider`] exposes an ordered list of properties that identify
//! resources of a kind and a way to look resources up by value of one of these properties.
//! The [`ResourceLocator`] probes the properties in order, one API round trip each,
//! and stops as soon as a probe matches anything.
use async_trait::async_trait;

mod providers;

pub use self::providers::DomainByName;
pub use self::providers::TemplateByName;
pub use self::providers::TestByName;

/// Lookup resources of a specific kind by property value.
#[async_trait]
pub trait ResourceLocatorProvider: Send + Sync {
    /// Type of the resources located by the provider.
    type Item: Send;

    /// Properties to probe, in order, when locating a resource.
    fn supported_properties(&self) -> &[&'static str];

    /// Find all resources whose `property` is equal to `value`.
    async fn locate(&self, property: &str, value: &str) -> anyhow::Result<Vec<Self::Item>>;
}

/// Errors returned when locating resources.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("more than one item found matching [{filter}] ({property})")]
    AmbiguousMatch { filter: String, property: String },

    #[error("error locating item")]
    Lookup(#[source] anyhow::Error),

    #[error("no items found matching [{filter}]")]
    NotFound { filter: String },
}

/// Resolve a filter to exactly one resource using a [`ResourceLocatorProvider`].
pub struct ResourceLocator<P> {
    provider: P,
}

impl<P> ResourceLocator<P>
where
    P: ResourceLocatorProvider,
{
    pub fn new(provider: P) -> ResourceLocator<P> {
        ResourceLocator { provider }
    }

    /// Locate the one resource matching the filter.
    ///
    /// Properties are probed in order: the first probe returning one item wins,
    /// a probe returning more items or failing ends the search with an error.
    pub async fn invoke(&self, filter: &str) -> Result<P::Item, LocateError> {
        for property in self.provider.supported_properties() {
            let mut items = self
                .provider
                .locate(property, filter)
                .await
                .map_err(LocateError::Lookup)?;
            match items.len() {
                0 => continue,
                1 => return Ok(items.remove(0)),
                _ => {
                    return Err(LocateError::AmbiguousMatch {
                        filter: filter.to_string(),
                        property: property.to_string(),
                    })
                }
            }
        }
        Err(LocateError::NotFound {
            filter: filter.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use anyhow::Result;
    use async_trait::async_trait;

    use super::LocateError;
    use super::ResourceLocator;
    use super::ResourceLocatorProvider;

    /// Provider returning canned responses and recording the properties it is asked for.
    struct Fixture {
        properties: Vec<&'static str>,
        probes: Mutex<Vec<String>>,
        responses: HashMap<&'static str, Result<Vec<&'static str>, &'static str>>,
    }

    impl Fixture {
        fn new(properties: Vec<&'static str>) -> Fixture {
            Fixture {
                properties,
                probes: Mutex::new(Vec::new()),
                responses: HashMap::new(),
            }
        }

        fn fails(mut self, property: &'static str, error: &'static str) -> Fixture {
            self.responses.insert(property, Err(error));
            self
        }

        fn matches(mut self, property: &'static str, items: Vec<&'static str>) -> Fixture {
            self.responses.insert(property, Ok(items));
            self
        }
    }

    #[async_trait]
    impl ResourceLocatorProvider for &Fixture {
        type Item = &'static str;

        fn supported_properties(&self) -> &[&'static str] {
            &self.properties
        }

        async fn locate(&self, property: &str, value: &str) -> Result<Vec<&'static str>> {
            assert_eq!(value, "foo");
            self.probes.lock().unwrap().push(property.to_string());
            match self.responses.get(property) {
                None => Ok(Vec::new()),
                Some(Ok(items)) => Ok(items.clone()),
                Some(Err(error)) => Err(anyhow::anyhow!(*error)),
            }
        }
    }

    fn probes(fixture: &Fixture) -> Vec<String> {
        fixture.probes.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn single_match() {
        let fixture = Fixture::new(vec!["name"]).matches("name", vec!["item"]);
        let item = ResourceLocator::new(&fixture).invoke("foo").await.unwrap();
        assert_eq!(item, "item");
    }

    #[tokio::test]
    async fn ambiguous_match() {
        let fixture = Fixture::new(vec!["name"]).matches("name", vec!["item1", "item2"]);
        let error = ResourceLocator::new(&fixture)
            .invoke("foo")
            .await
            .unwrap_err();
        assert!(matches!(error, LocateError::AmbiguousMatch { .. }));
        assert_eq!(
            error.to_string(),
            "more than one item found matching [foo] (name)",
        );
    }

    #[tokio::test]
    async fn not_found() {
        let fixture = Fixture::new(vec!["id", "name", "email"]);
        let error = ResourceLocator::new(&fixture)
            .invoke("foo")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "no items found matching [foo]");
        assert_eq!(probes(&fixture), vec!["id", "name", "email"]);
    }

    #[tokio::test]
    async fn no_properties_is_not_found() {
        let fixture = Fixture::new(Vec::new());
        let error = ResourceLocator::new(&fixture)
            .invoke("foo")
            .await
            .unwrap_err();
        assert!(matches!(error, LocateError::NotFound { .. }));
        assert!(probes(&fixture).is_empty());
    }

    #[tokio::test]
    async fn stops_at_first_match() {
        let fixture = Fixture::new(vec!["id", "name", "email", "alias"])
            .matches("name", vec!["by-name"])
            .matches("email", vec!["by-email"]);
        let item = ResourceLocator::new(&fixture).invoke("foo").await.unwrap();
        assert_eq!(item, "by-name");
        assert_eq!(probes(&fixture), vec!["id", "name"]);
    }

    #[tokio::test]
    async fn ambiguous_match_stops_probing() {
        let fixture = Fixture::new(vec!["id", "name", "email"])
            .matches("name", vec!["one", "two"])
            .matches("email", vec!["three"]);
        let error = ResourceLocator::new(&fixture)
            .invoke("foo")
            .await
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "more than one item found matching [foo] (name)",
        );
        assert_eq!(probes(&fixture), vec!["id", "name"]);
    }

    #[tokio::test]
    async fn lookup_error_stops_probing() {
        let fixture = Fixture::new(vec!["id", "name", "email"])
            .fails("id", "connection refused")
            .matches("name", vec!["item"]);
        let error = ResourceLocator::new(&fixture)
            .invoke("foo")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "error locating item");
        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), "connection refused");
        assert_eq!(probes(&fixture), vec!["id"]);
    }
}
