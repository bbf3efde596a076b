//! Per-application convenience handle.

use crate::client::Client;
use crate::error::Result;
use crate::params::UpdateApplicationParams;
use crate::types::{ApplicationData, UploadResponse};
use reqwest::Response;

/// An application bound to the client that fetched it.
///
/// The handle holds a snapshot of the application's data taken when it was
/// fetched or created. Calling a lifecycle method does not refresh that
/// snapshot; use the returned data or fetch the application again.
///
/// # Example
///
/// ```no_run
/// # use camposcloud_client::Client;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let client = Client::new("my-api-token")?;
/// let app = client.get_application("65f0c0ffee").await?;
/// let restarted = app.restart().await?;
/// println!("{:?} -> {:?}", app.data().status, restarted.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApplicationHandle {
    client: Client,
    data: ApplicationData,
}

impl ApplicationHandle {
    pub(crate) fn new(client: Client, data: ApplicationData) -> Self {
        Self { client, data }
    }

    /// The application's identifier.
    pub fn id(&self) -> &str {
        &self.data.id
    }

    /// The snapshot captured when this handle was created.
    pub fn data(&self) -> &ApplicationData {
        &self.data
    }

    /// Consume the handle, keeping only the snapshot.
    pub fn into_data(self) -> ApplicationData {
        self.data
    }

    /// See [`Client::start_application`].
    pub async fn start(&self) -> Result<ApplicationData> {
        self.client.start_application(self.id()).await
    }

    /// See [`Client::stop_application`].
    pub async fn stop(&self) -> Result<ApplicationData> {
        self.client.stop_application(self.id()).await
    }

    /// See [`Client::restart_application`].
    pub async fn restart(&self) -> Result<ApplicationData> {
        self.client.restart_application(self.id()).await
    }

    /// See [`Client::delete_application`].
    pub async fn delete(&self) -> Result<Response> {
        self.client.delete_application(self.id()).await
    }

    /// See [`Client::upload_file`].
    pub async fn upload_file(
        &self,
        file: impl Into<Vec<u8>>,
        path: Option<&str>,
    ) -> Result<UploadResponse> {
        self.client.upload_file(self.id(), file, path).await
    }

    /// See [`Client::update_application`].
    pub async fn update_application(
        &self,
        params: &UpdateApplicationParams,
    ) -> Result<ApplicationData> {
        self.client.update_application(self.id(), params).await
    }
}
