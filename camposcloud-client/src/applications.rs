//! Application management operations.

use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::handle::ApplicationHandle;
use crate::params::{
    CreateApplicationParams, EnvironmentVariable, RuntimeEnvironment, UpdateApplicationParams,
};
use crate::types::{ApplicationData, ApplicationList, UploadResponse};
use crate::validation;
use reqwest::Response;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Number;

/// File name attached to uploaded archives.
const UPLOAD_FILE_NAME: &str = "file.zip";

/// Body of an update request. Absent optionals are left out entirely.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePayload<'a> {
    app_name: &'a str,
    #[serde(rename = "memoryMB")]
    memory_mb: Number,
    runtime_environment: RuntimeEnvironment,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_variables: Option<&'a [EnvironmentVariable]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exposed_via_web: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_restart_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    startup_command: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    team: Option<&'a str>,
}

impl<'a> UpdatePayload<'a> {
    fn from_params(params: &'a UpdateApplicationParams) -> Result<Self> {
        validation::non_empty(
            &params.app_name,
            "appName",
            "Application name (appName) is required.",
        )?;
        let memory_mb = validation::memory(&params.memory_mb)?;

        Ok(Self {
            app_name: &params.app_name,
            memory_mb,
            runtime_environment: params.runtime_environment,
            environment_variables: non_empty_slice(&params.environment_variables),
            exposed_via_web: params.exposed_via_web,
            auto_restart_enabled: params.auto_restart_enabled,
            startup_command: non_empty_str(params.startup_command.as_deref()),
            team: non_empty_str(params.team_id.as_deref()),
        })
    }
}

/// Validate creation parameters and lay out the text parts of the form.
///
/// The binary `file` part is added separately by [`create_form`].
fn create_form_fields(params: &CreateApplicationParams) -> Result<Vec<(&'static str, String)>> {
    if params.file.is_empty() {
        return Err(ClientError::validation(
            "file",
            "File is required to create an application.",
        ));
    }
    validation::non_empty(
        &params.app_name,
        "appName",
        "Application name (appName) is required.",
    )?;
    validation::non_empty(
        &params.main_file,
        "mainFile",
        "Main file (mainFile) is required.",
    )?;
    let memory_mb = validation::memory(&params.memory_mb)?;

    let mut fields = vec![
        ("appName", params.app_name.clone()),
        ("mainFile", params.main_file.clone()),
        ("memoryMB", memory_mb.to_string()),
        (
            "runtimeEnvironment",
            params.runtime_environment.as_str().to_string(),
        ),
    ];

    if let Some(vars) = non_empty_slice(&params.environment_variables) {
        fields.push(("environmentVariables", serde_json::to_string(vars)?));
    }
    if let Some(exposed) = params.exposed_via_web {
        fields.push(("exposedViaWeb", exposed.to_string()));
    }
    if let Some(enabled) = params.auto_restart_enabled {
        fields.push(("autoRestartEnabled", enabled.to_string()));
    }
    if let Some(command) = non_empty_str(params.startup_command.as_deref()) {
        fields.push(("startupCommand", command.to_string()));
    }
    if let Some(team) = non_empty_str(params.team_id.as_deref()) {
        fields.push(("team", team.to_string()));
    }

    Ok(fields)
}

fn create_form(params: &CreateApplicationParams) -> Result<Form> {
    let fields = create_form_fields(params)?;
    let form = Form::new().part("file", archive_part(params.file.clone()));

    Ok(fields
        .into_iter()
        .fold(form, |form, (name, value)| form.text(name, value)))
}

fn archive_part(file: Vec<u8>) -> Part {
    Part::bytes(file).file_name(UPLOAD_FILE_NAME)
}

fn non_empty_str(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn non_empty_slice<T>(values: &[T]) -> Option<&[T]> {
    (!values.is_empty()).then_some(values)
}

impl Client {
    /// Fetch an application by id.
    ///
    /// # Returns
    ///
    /// Returns a handle bound to this client and holding a snapshot of the
    /// application's data.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `app_id` is empty, or an API error if the
    /// application does not exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use camposcloud_client::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("my-api-token")?;
    /// let app = client.get_application("65f0c0ffee").await?;
    /// println!("{} is {:?}", app.data().name, app.data().status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_application(&self, app_id: &str) -> Result<ApplicationHandle> {
        validation::app_id(app_id)?;

        let response = self.get(&format!("apps/{}", urlencoding::encode(app_id))).await?;
        let data: ApplicationData = self.handle_response(response).await?;

        Ok(ApplicationHandle::new(self.clone(), data))
    }

    /// List the account's applications.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use camposcloud_client::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("my-api-token")?;
    /// let list = client.list_applications().await?;
    /// for app in &list.applications {
    ///     println!("{}: {} MB", app.name, app.allocated_memory_mb);
    /// }
    /// println!("page {} of {}", list.pagination.current_page, list.pagination.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_applications(&self) -> Result<ApplicationList> {
        let response = self.get("apps").await?;
        self.handle_response(response).await
    }

    /// Create an application from a zipped archive.
    ///
    /// The archive and settings are sent as `multipart/form-data`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the archive is empty, a required text
    /// field is empty, or the memory size is not a non-zero number. Otherwise
    /// returns an error if the request fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use camposcloud_client::{Client, CreateApplicationParams, RuntimeEnvironment};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("my-api-token")?;
    /// let archive = std::fs::read("bot.zip")?;
    /// let params = CreateApplicationParams::new(
    ///     archive,
    ///     "my-bot",
    ///     "index.js",
    ///     512,
    ///     RuntimeEnvironment::Nodejs,
    /// )
    /// .with_auto_restart(true);
    ///
    /// let app = client.create_application(&params).await?;
    /// println!("Created {}", app.id());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_application(
        &self,
        params: &CreateApplicationParams,
    ) -> Result<ApplicationHandle> {
        let form = create_form(params)?;

        let response = self.post_multipart("apps/create", form).await?;
        let data: ApplicationData = self.handle_response(response).await?;

        Ok(ApplicationHandle::new(self.clone(), data))
    }

    /// Update an application's settings.
    ///
    /// Optional settings left unset are omitted from the request and keep
    /// their current value on the server.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `app_id` or the name is empty or the
    /// memory size is not a non-zero number.
    pub async fn update_application(
        &self,
        app_id: &str,
        params: &UpdateApplicationParams,
    ) -> Result<ApplicationData> {
        validation::app_id(app_id)?;
        let payload = UpdatePayload::from_params(params)?;

        let response = self
            .put(
                &format!("apps/{}/update", urlencoding::encode(app_id)),
                &payload,
            )
            .await?;
        self.handle_response(response).await
    }

    /// Delete an application.
    ///
    /// # Returns
    ///
    /// Returns the raw HTTP response so callers can inspect the status and
    /// body the platform sent back.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `app_id` is empty, or an API error on a
    /// non-success status.
    pub async fn delete_application(&self, app_id: &str) -> Result<Response> {
        validation::app_id(app_id)?;

        let response = self
            .delete(&format!("apps/{}/delete", urlencoding::encode(app_id)))
            .await?;
        self.handle_raw_response(response).await
    }

    /// Start an application.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `app_id` is empty, or an error if the
    /// request fails.
    pub async fn start_application(&self, app_id: &str) -> Result<ApplicationData> {
        self.lifecycle_action(app_id, "start").await
    }

    /// Stop an application.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `app_id` is empty, or an error if the
    /// request fails.
    pub async fn stop_application(&self, app_id: &str) -> Result<ApplicationData> {
        self.lifecycle_action(app_id, "stop").await
    }

    /// Restart an application.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `app_id` is empty, or an error if the
    /// request fails.
    pub async fn restart_application(&self, app_id: &str) -> Result<ApplicationData> {
        self.lifecycle_action(app_id, "restart").await
    }

    async fn lifecycle_action(&self, app_id: &str, action: &str) -> Result<ApplicationData> {
        validation::app_id(app_id)?;

        let response = self
            .post_empty(&format!("apps/{}/{}", urlencoding::encode(app_id), action))
            .await?;
        self.handle_response(response).await
    }

    /// Upload an archive into an application's file tree.
    ///
    /// # Arguments
    ///
    /// * `app_id` - Application identifier
    /// * `file` - Archive contents
    /// * `path` - Destination directory inside the application, if any
    ///
    /// # Errors
    ///
    /// Failures are reported through the returned `Result` like every other
    /// operation: a validation error if `app_id` or `file` is empty, or an
    /// API error on a non-success status.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use camposcloud_client::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("my-api-token")?;
    /// let archive = std::fs::read("assets.zip")?;
    /// let ack = client.upload_file("65f0c0ffee", archive, Some("public")).await?;
    /// println!("{}", ack.message);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_file(
        &self,
        app_id: &str,
        file: impl Into<Vec<u8>>,
        path: Option<&str>,
    ) -> Result<UploadResponse> {
        validation::app_id(app_id)?;
        let file = file.into();
        if file.is_empty() {
            return Err(ClientError::validation(
                "file",
                "File must be valid binary data.",
            ));
        }

        let app_id = urlencoding::encode(app_id);
        let endpoint = match path {
            Some(path) => format!("apps/{}/upload?path={}", app_id, urlencoding::encode(path)),
            None => format!("apps/{}/upload", app_id),
        };
        let form = Form::new().part("file", archive_part(file));

        let response = self.post_multipart(&endpoint, form).await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_params() -> CreateApplicationParams {
        CreateApplicationParams::new(
            b"zip".to_vec(),
            "x",
            "index.js",
            512,
            RuntimeEnvironment::Nodejs,
        )
    }

    fn names(fields: &[(&'static str, String)]) -> Vec<&'static str> {
        fields.iter().map(|(name, _)| *name).collect()
    }

    #[test]
    fn test_create_form_required_fields_only() {
        let fields = create_form_fields(&minimal_params()).unwrap();
        assert_eq!(
            names(&fields),
            vec!["appName", "mainFile", "memoryMB", "runtimeEnvironment"]
        );
        assert_eq!(fields[2].1, "512");
        assert_eq!(fields[3].1, "nodejs");
    }

    #[test]
    fn test_create_form_optional_fields() {
        let params = minimal_params()
            .with_exposed_via_web(false)
            .with_auto_restart(true)
            .with_startup_command("node index.js")
            .with_team("team-1")
            .with_environment_variable("PORT", "3000");

        let fields = create_form_fields(&params).unwrap();
        assert_eq!(
            names(&fields),
            vec![
                "appName",
                "mainFile",
                "memoryMB",
                "runtimeEnvironment",
                "environmentVariables",
                "exposedViaWeb",
                "autoRestartEnabled",
                "startupCommand",
                "team",
            ]
        );
        assert_eq!(fields[4].1, r#"[{"key":"PORT","value":"3000"}]"#);
        assert_eq!(fields[5].1, "false");
        assert_eq!(fields[6].1, "true");
    }

    #[test]
    fn test_create_form_skips_empty_optionals() {
        let params = minimal_params().with_startup_command("").with_team("");
        let fields = create_form_fields(&params).unwrap();
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_create_form_rejects_missing_inputs() {
        let mut params = minimal_params();
        params.file.clear();
        assert!(matches!(
            create_form_fields(&params),
            Err(ClientError::Validation { field: "file", .. })
        ));

        let mut params = minimal_params();
        params.main_file.clear();
        assert!(matches!(
            create_form_fields(&params),
            Err(ClientError::Validation {
                field: "mainFile",
                ..
            })
        ));

        let mut params = minimal_params();
        params.memory_mb = "abc".into();
        assert!(matches!(
            create_form_fields(&params),
            Err(ClientError::Validation {
                field: "memoryMB",
                ..
            })
        ));
    }

    #[test]
    fn test_create_form_passes_empty_env_key_through() {
        let params = minimal_params().with_environment_variable("", "v");
        let fields = create_form_fields(&params).unwrap();
        assert_eq!(fields[4], ("environmentVariables", r#"[{"key":"","value":"v"}]"#.to_string()));
    }

    #[test]
    fn test_update_payload_omits_absent_optionals() {
        let params = UpdateApplicationParams::new("x", 256, RuntimeEnvironment::Python);
        let payload = UpdatePayload::from_params(&params).unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "appName": "x",
                "memoryMB": 256,
                "runtimeEnvironment": "python"
            })
        );
    }

    #[test]
    fn test_update_payload_includes_supplied_optionals() {
        let params = UpdateApplicationParams::new("x", "1024", RuntimeEnvironment::Nodejs)
            .with_startup_command("npm start")
            .with_auto_restart(false)
            .with_team("team-1")
            .with_environment_variable("NODE_ENV", "production");
        let payload = UpdatePayload::from_params(&params).unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "appName": "x",
                "memoryMB": 1024,
                "runtimeEnvironment": "nodejs",
                "environmentVariables": [{ "key": "NODE_ENV", "value": "production" }],
                "autoRestartEnabled": false,
                "startupCommand": "npm start",
                "team": "team-1"
            })
        );
    }

    #[test]
    fn test_update_payload_rejects_zero_memory() {
        let params = UpdateApplicationParams::new("x", 0, RuntimeEnvironment::Nodejs);
        assert!(UpdatePayload::from_params(&params).is_err());
    }
}
