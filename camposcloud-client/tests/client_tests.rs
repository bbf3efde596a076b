//! Integration tests for camposcloud-client.
//!
//! These tests verify the client API surface without requiring a running server.

use camposcloud_client::{
    Client, ClientConfig, ClientError, CreateApplicationParams, RuntimeEnvironment,
    UpdateApplicationParams,
};
use std::time::Duration;

#[test]
fn test_client_construction() {
    let client = Client::new("test-token");
    assert!(client.is_ok());

    let client = Client::from_config(
        ClientConfig::new("test-token").with_base_url("https://staging.example.com/v1"),
    );
    assert!(client.is_ok());
    assert_eq!(client.unwrap().base_url(), "https://staging.example.com/v1");
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
    let result = Client::from_config(ClientConfig::new("test-token").with_base_url("localhost:8080"));

    match result {
        Err(ClientError::InvalidUrl(msg)) => assert!(msg.contains("http://")),
        _ => panic!("Expected InvalidUrl error"),
    }
}

#[test]
fn test_client_with_timeout() {
    let config = ClientConfig::new("test-token").with_timeout(Duration::from_secs(60));
    assert!(Client::from_config(config).is_ok());
}

#[test]
fn test_independent_clients() {
    let first = Client::new("token-a").unwrap();
    let second = Client::from_config(
        ClientConfig::new("token-b").with_base_url("http://localhost:8080"),
    )
    .unwrap();

    assert_eq!(first.base_url(), camposcloud_client::DEFAULT_BASE_URL);
    assert_eq!(second.base_url(), "http://localhost:8080");
}

#[test]
fn test_error_display() {
    let error = ClientError::InvalidUrl("test error".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Invalid URL"));
    assert!(display.contains("test error"));
}

#[test]
fn test_api_error_display() {
    let error = ClientError::Api {
        status: 404,
        message: "Not found".to_string(),
    };

    let display = format!("{}", error);
    assert!(display.contains("404"));
    assert!(display.contains("Not found"));
    assert!(!error.is_validation());
}

#[tokio::test]
async fn test_validation_error_names_field() {
    let client = Client::new("test-token").unwrap();
    let params = CreateApplicationParams::new(
        b"zip".to_vec(),
        "",
        "index.js",
        512,
        RuntimeEnvironment::Nodejs,
    );

    let error = client.create_application(&params).await.unwrap_err();
    assert!(error.is_validation());
    assert!(error.to_string().contains("appName"));
}

#[tokio::test]
async fn test_update_rejects_empty_app_id() {
    let client = Client::new("test-token").unwrap();
    let params = UpdateApplicationParams::new("app", 512, RuntimeEnvironment::Python);

    match client.update_application("", &params).await {
        Err(ClientError::Validation { field, message }) => {
            assert_eq!(field, "appId");
            assert!(message.contains("appId"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}
