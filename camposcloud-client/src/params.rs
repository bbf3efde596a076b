//! Request parameter types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime an application is executed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Node.js runtime.
    Nodejs,
    /// Python runtime.
    Python,
}

impl RuntimeEnvironment {
    /// The tag the API uses for this runtime.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nodejs => "nodejs",
            Self::Python => "python",
        }
    }
}

impl fmt::Display for RuntimeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Memory allocation in megabytes, as supplied by the caller.
///
/// The value is kept in its textual form and checked when a request is
/// built: it must parse as a finite, non-zero number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySize(String);

impl MemorySize {
    /// The raw value as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! memory_size_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MemorySize {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

memory_size_from_number!(u16, u32, u64, i32, i64, f32, f64);

impl From<&str> for MemorySize {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MemorySize {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single environment variable passed to an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    /// Variable name.
    pub key: String,
    /// Variable value.
    pub value: String,
}

impl EnvironmentVariable {
    /// Create a new environment variable.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Parameters for creating an application.
///
/// # Example
///
/// ```
/// use camposcloud_client::{CreateApplicationParams, RuntimeEnvironment};
///
/// let params = CreateApplicationParams::new(
///     b"PK...".to_vec(),
///     "my-bot",
///     "index.js",
///     512,
///     RuntimeEnvironment::Nodejs,
/// )
/// .with_auto_restart(true)
/// .with_environment_variable("TOKEN", "abc");
/// assert_eq!(params.environment_variables.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CreateApplicationParams {
    /// Zipped application sources.
    pub file: Vec<u8>,
    /// Display name.
    pub app_name: String,
    /// Entry point, relative to the archive root.
    pub main_file: String,
    /// Memory allocation in megabytes.
    pub memory_mb: MemorySize,
    /// Runtime environment.
    pub runtime_environment: RuntimeEnvironment,
    /// Expose the application over HTTP.
    pub exposed_via_web: Option<bool>,
    /// Restart the application automatically when it exits.
    pub auto_restart_enabled: Option<bool>,
    /// Custom startup command.
    pub startup_command: Option<String>,
    /// Team that owns the application.
    pub team_id: Option<String>,
    /// Environment variables. Sent only when non-empty.
    pub environment_variables: Vec<EnvironmentVariable>,
}

impl CreateApplicationParams {
    /// Create parameters with the required fields set.
    pub fn new(
        file: impl Into<Vec<u8>>,
        app_name: impl Into<String>,
        main_file: impl Into<String>,
        memory_mb: impl Into<MemorySize>,
        runtime_environment: RuntimeEnvironment,
    ) -> Self {
        Self {
            file: file.into(),
            app_name: app_name.into(),
            main_file: main_file.into(),
            memory_mb: memory_mb.into(),
            runtime_environment,
            exposed_via_web: None,
            auto_restart_enabled: None,
            startup_command: None,
            team_id: None,
            environment_variables: Vec::new(),
        }
    }

    /// Set whether the application is exposed over HTTP.
    #[must_use]
    pub fn with_exposed_via_web(mut self, exposed: bool) -> Self {
        self.exposed_via_web = Some(exposed);
        self
    }

    /// Set whether the application restarts automatically.
    #[must_use]
    pub fn with_auto_restart(mut self, enabled: bool) -> Self {
        self.auto_restart_enabled = Some(enabled);
        self
    }

    /// Set a custom startup command.
    #[must_use]
    pub fn with_startup_command(mut self, command: impl Into<String>) -> Self {
        self.startup_command = Some(command.into());
        self
    }

    /// Assign the application to a team.
    #[must_use]
    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// Add one environment variable.
    #[must_use]
    pub fn with_environment_variable(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.environment_variables
            .push(EnvironmentVariable::new(key, value));
        self
    }

    /// Add several environment variables.
    #[must_use]
    pub fn with_environment_variables(
        mut self,
        vars: impl IntoIterator<Item = EnvironmentVariable>,
    ) -> Self {
        self.environment_variables.extend(vars);
        self
    }
}

/// Parameters for updating an application's settings.
#[derive(Debug, Clone)]
pub struct UpdateApplicationParams {
    /// Display name.
    pub app_name: String,
    /// Memory allocation in megabytes.
    pub memory_mb: MemorySize,
    /// Runtime environment.
    pub runtime_environment: RuntimeEnvironment,
    /// Custom startup command. Omitted from the request when empty.
    pub startup_command: Option<String>,
    /// Expose the application over HTTP.
    pub exposed_via_web: Option<bool>,
    /// Restart the application automatically when it exits.
    pub auto_restart_enabled: Option<bool>,
    /// Team that owns the application.
    pub team_id: Option<String>,
    /// Environment variables. Sent only when non-empty.
    pub environment_variables: Vec<EnvironmentVariable>,
}

impl UpdateApplicationParams {
    /// Create parameters with the required fields set.
    pub fn new(
        app_name: impl Into<String>,
        memory_mb: impl Into<MemorySize>,
        runtime_environment: RuntimeEnvironment,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            memory_mb: memory_mb.into(),
            runtime_environment,
            startup_command: None,
            exposed_via_web: None,
            auto_restart_enabled: None,
            team_id: None,
            environment_variables: Vec::new(),
        }
    }

    /// Set a custom startup command.
    #[must_use]
    pub fn with_startup_command(mut self, command: impl Into<String>) -> Self {
        self.startup_command = Some(command.into());
        self
    }

    /// Set whether the application is exposed over HTTP.
    #[must_use]
    pub fn with_exposed_via_web(mut self, exposed: bool) -> Self {
        self.exposed_via_web = Some(exposed);
        self
    }

    /// Set whether the application restarts automatically.
    #[must_use]
    pub fn with_auto_restart(mut self, enabled: bool) -> Self {
        self.auto_restart_enabled = Some(enabled);
        self
    }

    /// Assign the application to a team.
    #[must_use]
    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// Add one environment variable.
    #[must_use]
    pub fn with_environment_variable(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.environment_variables
            .push(EnvironmentVariable::new(key, value));
        self
    }

    /// Add several environment variables.
    #[must_use]
    pub fn with_environment_variables(
        mut self,
        vars: impl IntoIterator<Item = EnvironmentVariable>,
    ) -> Self {
        self.environment_variables.extend(vars);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_serializes_as_tag() {
        assert_eq!(
            serde_json::to_value(RuntimeEnvironment::Nodejs).unwrap(),
            serde_json::json!("nodejs")
        );
        assert_eq!(RuntimeEnvironment::Python.to_string(), "python");
    }

    #[test]
    fn test_memory_size_conversions() {
        assert_eq!(MemorySize::from(512u32).as_str(), "512");
        assert_eq!(MemorySize::from("1024").as_str(), "1024");
        assert_eq!(MemorySize::from(0.5f64).as_str(), "0.5");
    }

    #[test]
    fn test_create_params_defaults() {
        let params =
            CreateApplicationParams::new(vec![1, 2, 3], "app", "main.py", 256, RuntimeEnvironment::Python);
        assert!(params.exposed_via_web.is_none());
        assert!(params.auto_restart_enabled.is_none());
        assert!(params.startup_command.is_none());
        assert!(params.team_id.is_none());
        assert!(params.environment_variables.is_empty());
    }
}
