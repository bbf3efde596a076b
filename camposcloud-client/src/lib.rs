//! Type-safe Rust client for the CamposCloud application hosting API.
//!
//! This crate provides a high-level, ergonomic interface to the CamposCloud
//! REST API.
//!
//! # Features
//!
//! - Bearer token authentication, configured per client
//! - Application management (create, list, get, update, delete, upload files)
//! - Lifecycle control (start, stop, restart)
//! - Account lookups (current user, teams)
//! - Input validation before any request is sent
//!
//! # Example
//!
//! ```no_run
//! use camposcloud_client::{Client, CreateApplicationParams, RuntimeEnvironment};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(std::env::var("CAMPOSCLOUD_API_TOKEN")?)?;
//!
//! // Deploy an application
//! let archive = std::fs::read("bot.zip")?;
//! let params = CreateApplicationParams::new(archive, "my-bot", "index.js", 512, RuntimeEnvironment::Nodejs);
//! let app = client.create_application(&params).await?;
//! println!("Created: {}", app.id());
//!
//! // Drive it through its handle
//! let data = app.start().await?;
//! println!("Status: {:?}", data.status);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`. Invalid inputs are
//! rejected with [`ClientError::Validation`] before any request is sent:
//!
//! ```no_run
//! # use camposcloud_client::{Client, ClientError};
//! # async fn example() -> Result<(), ClientError> {
//! # let client = Client::new("my-api-token")?;
//! match client.get_application("65f0c0ffee").await {
//!     Ok(app) => println!("Found: {}", app.data().name),
//!     Err(ClientError::Api { status: 404, .. }) => println!("Application not found"),
//!     Err(e) => println!("Error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod accounts;
mod applications;
mod client;
mod config;
mod error;
mod handle;
mod params;
mod types;
mod validation;

// Re-export the main types
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result};
pub use handle::ApplicationHandle;
pub use params::{
    CreateApplicationParams, EnvironmentVariable, MemorySize, RuntimeEnvironment,
    UpdateApplicationParams,
};
pub use types::{
    ApplicationData, ApplicationList, ApplicationStatus, Pagination, Permissions, PlanReference,
    ResourceMetrics, Session, Subscription, SubscriptionStatus, Team, TeamInvite, TeamMember,
    UploadResponse, User, UserSummary, WorkerNodeRef,
};
