//! Core CamposCloud client implementation.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// A client for interacting with the CamposCloud API.
///
/// The client is cheap to clone and holds no mutable state, so clones can be
/// used concurrently from multiple tasks.
///
/// # Example
///
/// ```no_run
/// use camposcloud_client::{Client, ClientConfig};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::new("my-api-token").with_timeout(Duration::from_secs(10));
/// let client = Client::from_config(config)?;
///
/// let apps = client.list_applications().await?;
/// println!("{} applications using {}", apps.applications.len(), apps.total_used_ram);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    /// Base URL for the API.
    base_url: String,
    /// HTTP client.
    http: HttpClient,
    /// Bearer token for authentication.
    api_token: String,
}

impl Client {
    /// Create a new client with the given API token and default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the token is empty.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_token))
    }

    /// Create a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty, the base URL is invalid, or
    /// the HTTP client cannot be created.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        if config.api_token().is_empty() {
            return Err(ClientError::Config(
                "API Token is required to initialize the client.".to_string(),
            ));
        }

        let base_url = config.base_url().to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            base_url,
            http,
            api_token: config.api_token().to_string(),
        })
    }

    /// Get the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path.
    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Start an authenticated request.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(method = %method, path = %path, "Sending request");
        self.http
            .request(method, self.url(path))
            .bearer_auth(&self.api_token)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ClientError::Http)?;
        debug!(status = response.status().as_u16(), url = %response.url(), "Received response");
        Ok(response)
    }

    /// Execute a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        self.execute(self.request(Method::GET, path)).await
    }

    /// Execute a POST request without a body.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<Response> {
        self.execute(self.request(Method::POST, path)).await
    }

    /// Execute a POST request with a multipart form body.
    ///
    /// The form's content type, including its boundary, replaces the
    /// default JSON content type.
    pub(crate) async fn post_multipart(&self, path: &str, form: Form) -> Result<Response> {
        self.execute(self.request(Method::POST, path).multipart(form))
            .await
    }

    /// Execute a PUT request with a JSON body.
    pub(crate) async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<Response> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    /// Handle a response and deserialize JSON.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T> {
        let response = self.handle_raw_response(response).await?;
        let body = response.bytes().await.map_err(ClientError::Http)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Check the status of a response and hand it back untouched on success.
    pub(crate) async fn handle_raw_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        // Try to extract error message from JSON response
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|json| {
                json["error"]
                    .as_str()
                    .or_else(|| json["message"].as_str())
                    .map(str::to_string)
            })
            .unwrap_or(body);

        warn!(status = status.as_u16(), message = %message, "API request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = Client::new("test-token").unwrap();
        assert_eq!(client.base_url, "https://api.camposcloud.com/v1");
        assert_eq!(client.api_token, "test-token");
    }

    #[test]
    fn test_client_requires_token() {
        let result = Client::new("");
        match result {
            Err(ClientError::Config(msg)) => assert!(msg.contains("API Token")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_client_invalid_url() {
        let config = ClientConfig::new("token").with_base_url("not-a-url");
        let result = Client::from_config(config);
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_url_building() {
        let client = Client::new("token").unwrap();
        assert_eq!(client.url("apps"), "https://api.camposcloud.com/v1/apps");
        assert_eq!(
            client.url("/apps/abc/start"),
            "https://api.camposcloud.com/v1/apps/abc/start"
        );
    }

    #[test]
    fn test_url_building_with_trailing_slash() {
        let config = ClientConfig::new("token").with_base_url("http://localhost:8080/v1/");
        let client = Client::from_config(config).unwrap();
        assert_eq!(client.url("teams"), "http://localhost:8080/v1/teams");
    }

    #[test]
    fn test_debug_hides_token() {
        let client = Client::new("secret-token").unwrap();
        assert!(!format!("{:?}", client).contains("secret-token"));
    }
}
