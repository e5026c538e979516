//! Errors encountered during API requests or reported by the remote server.
use anyhow::Result;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// The client sent an invalid API request
#[derive(Debug, thiserror::Error)]
#[error("the client sent an invalid API request")]
pub struct ClientError;

/// The server returned an empty API response.
#[derive(Debug, thiserror::Error)]
#[error("the server returned an empty API response")]
pub struct EmptyResponse;

/// Invalid API response received.
#[derive(Debug, thiserror::Error)]
#[error("invalid API response received: {response}")]
pub struct InvalidResponse {
    pub response: String,
}

/// The resource is not available, or access to it is restricted.
#[derive(Debug, thiserror::Error)]
#[error("the resource is not available, or access to it is restricted")]
pub struct ResourceNotFound;

/// Error refers to resource with ID.
#[derive(Debug, thiserror::Error)]
#[error("error refers to {resource} '{id}'")]
pub struct ResourceIdentifier {
    /// Identifier of a resource the error refers to.
    pub id: String,

    /// Type of resource the error refers to.
    pub resource: String,
}

impl ResourceIdentifier {
    /// Resource identifier context for the given resource type and id.
    pub fn reference<S1, S2>(resource: S1, id: S2) -> Self
    where
        S1: Into<String>,
        S2: ToString,
    {
        ResourceIdentifier {
            id: id.to_string(),
            resource: resource.into(),
        }
    }
}

/// The server failed to process the API request.
#[derive(Debug, thiserror::Error)]
#[error("the server failed to process the API request")]
pub struct ServerError;

/// A single error entry reported by the API.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiError {
    /// Short summary of the error.
    pub title: String,

    /// Human readable explanation of the error.
    #[serde(default)]
    pub detail: String,

    /// HTTP status code the error was reported with.
    #[serde(default)]
    pub status: u16,

    /// Request attribute the error refers to, if any.
    #[serde(default)]
    pub source: Option<String>,
}

/// Errors reported by the API in the response body.
#[derive(Debug, thiserror::Error, Deserialize)]
pub struct ApiErrors {
    /// List of errors reported by the server.
    pub errors: Vec<ApiError>,
}

impl std::fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the API reported errors:")?;
        for error in &self.errors {
            write!(f, "\n  - {}", error.title)?;
            if !error.detail.is_empty() {
                write!(f, ": {}", error.detail)?;
            }
            if let Some(source) = &error.source {
                write!(f, " [source={}]", source)?;
            }
        }
        Ok(())
    }
}

/// Decode the body of an HTTP response and correctly handle errors in the process.
pub async fn inspect<T>(response: Response) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let code = response.status();
    let text = response.text().await?;

    // Not found errors may or may not carry error details.
    if matches!(code, reqwest::StatusCode::NOT_FOUND) {
        let error = match serde_json::from_str::<ApiErrors>(&text) {
            Ok(errors) => anyhow::anyhow!(errors).context(ResourceNotFound),
            Err(_) => anyhow::anyhow!(ResourceNotFound),
        };
        return Err(error);
    }

    // On error, attempt to decode the errors list and convert into appropriate errors.
    if code.is_client_error() || code.is_server_error() {
        let error = serde_json::from_str::<ApiErrors>(&text).map_err(|error| {
            let response = text.clone();
            let decode = InvalidResponse { response };
            anyhow::anyhow!(error).context(decode)
        })?;
        let error = anyhow::anyhow!(error);
        let error = match code.is_client_error() {
            true => error.context(ClientError),
            false => error.context(ServerError),
        };
        return Err(error);
    }

    // On success decode the payload, if any, into the requested type.
    if text.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<T>(&text)
        .map_err(|error| {
            let decode = InvalidResponse { response: text };
            anyhow::anyhow!(error).context(decode)
        })
        .map(Some)
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;
    use serde_json::Value as Json;

    use super::inspect;
    use super::ApiErrors;
    use super::ClientError;
    use super::InvalidResponse;
    use super::ResourceNotFound;
    use super::ServerError;

    async fn respond(status: u16, body: &str) -> reqwest::Response {
        let server = MockServer::start_async().await;
        let body = body.to_string();
        server
            .mock_async(|when, then| {
                when.method(GET).path("/check");
                then.status(status).body(body);
            })
            .await;
        reqwest::get(server.url("/check"))
            .await
            .expect("mock server to respond")
    }

    #[tokio::test]
    async fn decode_success_payload() {
        let response = respond(200, r#"{"data":{"id":1}}"#).await;
        let value = inspect::<Json>(response)
            .await
            .expect("payload to decode")
            .expect("payload to be present");
        assert_eq!(value, json!({"data": {"id": 1}}));
    }

    #[tokio::test]
    async fn empty_success_payload() {
        let response = respond(204, "").await;
        let value = inspect::<Json>(response).await.expect("empty payload");
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn not_found_without_body() {
        let response = respond(404, "").await;
        let error = inspect::<Json>(response).await.unwrap_err();
        assert!(error.downcast_ref::<ResourceNotFound>().is_some());
    }

    #[tokio::test]
    async fn not_found_keeps_api_details() {
        let body = r#"{"errors":[{"title":"Not found","detail":"Zone 'x' not found","status":404}]}"#;
        let response = respond(404, body).await;
        let error = inspect::<Json>(response).await.unwrap_err();
        assert!(error.downcast_ref::<ResourceNotFound>().is_some());
        let errors = error.downcast_ref::<ApiErrors>().expect("api errors");
        assert_eq!(errors.errors[0].detail, "Zone 'x' not found");
    }

    #[tokio::test]
    async fn client_error_is_decoded() {
        let body = r#"{"errors":[{"title":"Validation Error","detail":"name is required","status":422,"source":"name"}]}"#;
        let response = respond(422, body).await;
        let error = inspect::<Json>(response).await.unwrap_err();
        assert!(error.downcast_ref::<ClientError>().is_some());
        let message = format!("{:#}", error);
        assert!(message.starts_with("the client sent an invalid API request"));
        assert!(message.contains("Validation Error: name is required [source=name]"));
    }

    #[tokio::test]
    async fn server_error_is_decoded() {
        let body = r#"{"errors":[{"title":"Internal Error"}]}"#;
        let response = respond(500, body).await;
        let error = inspect::<Json>(response).await.unwrap_err();
        assert!(error.downcast_ref::<ServerError>().is_some());
    }

    #[tokio::test]
    async fn invalid_error_body() {
        let response = respond(500, "<html>oops</html>").await;
        let error = inspect::<Json>(response).await.unwrap_err();
        let invalid = error
            .downcast_ref::<InvalidResponse>()
            .expect("invalid response error");
        assert_eq!(invalid.response, "<html>oops</html>");
    }

    #[tokio::test]
    async fn invalid_success_body() {
        let response = respond(200, "not json").await;
        let error = inspect::<Json>(response).await.unwrap_err();
        assert!(error.downcast_ref::<InvalidResponse>().is_some());
    }
}
