//! Type definitions for the CamposCloud client.
//!
//! Field names follow the API's camelCase JSON on the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Snapshot of an application as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationData {
    /// Server-assigned application identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Identifier of the backing container.
    #[serde(default)]
    pub container_id: String,
    /// Owning team, if any.
    pub team_id: Option<String>,
    /// Whether a restart is needed to apply pending settings.
    #[serde(default)]
    pub restart_required: bool,
    /// Owning user.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Allocated memory in megabytes.
    #[serde(rename = "allocatedMemoryMB")]
    pub allocated_memory_mb: u32,
    /// Allocated virtual CPUs.
    #[serde(rename = "allocatedVCpu")]
    pub allocated_vcpu: f64,
    /// Worker node the application is scheduled on.
    pub worker_node_id: WorkerNodeRef,
    /// Latest resource metrics. Offline defaults when the server sends none.
    #[serde(default)]
    pub current_resource_metrics: ResourceMetrics,
    /// Container image the application runs in.
    #[serde(default)]
    pub container_image: String,
    /// Whether the application is reachable over HTTP.
    pub exposed_via_web: bool,
    /// Port inside the container.
    pub internal_port: Option<u16>,
    /// Port exposed on the worker node.
    pub external_port: Option<u16>,
    /// Subdomain assigned when exposed over HTTP.
    pub assigned_subdomain: Option<String>,
    /// Command used to start the application.
    #[serde(default)]
    pub startup_command: String,
    /// Command used to install dependencies.
    pub install_dependencies_cmd: Option<String>,
    /// Runtime tag (e.g. "nodejs", "python").
    pub runtime_environment: String,
    /// Whether the application restarts automatically.
    pub auto_restart_enabled: bool,
    /// Lifecycle status.
    pub status: ApplicationStatus,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last update timestamp.
    pub updated_at: String,
    /// Fields not modeled above, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Application lifecycle status. Transitions are driven by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Active,
    Creating,
    Suspended,
}

/// Reference to the worker node hosting an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerNodeRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub node_name: String,
}

/// Resource usage of a running application.
///
/// Only `online` is always present; the counters are reported while the
/// container is up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetrics {
    /// ISO 8601 timestamp of the sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub online: bool,
    /// Uptime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_usage_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_rx_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_tx_bytes: Option<u64>,
}

/// A page of applications plus account-wide usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationList {
    pub applications: Vec<ApplicationData>,
    /// Total RAM used by all applications, as formatted by the server (e.g. "512MB").
    #[serde(rename = "totalUsedRAM")]
    pub total_used_ram: String,
    pub pagination: Pagination,
}

/// Pagination block of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub items_per_page: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Acknowledgment of a file upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

/// The authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "isEmail2FAEnabled")]
    pub is_email_2fa_enabled: bool,
    pub has_claimed_free_plan: bool,
    pub created_at: String,
    #[serde(default)]
    pub active_sessions: Vec<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_subscription: Option<Subscription>,
}

/// A logged-in session of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub device: String,
    pub ip: String,
    pub browser: String,
    pub os: String,
    pub last_active: String,
}

/// A user's current plan subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan_reference: PlanReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negotiated_price: Option<f64>,
    #[serde(
        rename = "allocatedMemoryMB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allocated_memory_mb: Option<u32>,
    #[serde(
        rename = "allocatedVCpus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub allocated_vcpus: Option<f64>,
    pub amount_paid: f64,
    pub status: SubscriptionStatus,
    pub start_at: String,
    pub end_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Suspended,
}

/// The plan a subscription refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReference {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub plan_type: String,
    /// Reported as-is; older plans send a string here rather than a boolean.
    pub enabled: Value,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(rename = "ramMB", default, skip_serializing_if = "Option::is_none")]
    pub ram_mb: Option<u32>,
}

/// A team and its membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub owner: UserSummary,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub invites: Vec<TeamInvite>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub applications_count: u64,
}

/// Minimal user description embedded in team payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub user: UserSummary,
    pub permissions: Permissions,
}

/// A pending invitation to join a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInvite {
    pub email: String,
    pub permissions: Permissions,
}

/// Application capabilities granted to a team member.
///
/// Each flag is checked independently by the server; none implies another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Permissions {
    pub can_create_application: bool,
    pub can_delete_application: bool,
    pub can_update_application_settings: bool,
    pub can_change_status_application: bool,
    pub can_edit_application_files: bool,
    pub can_see_application_files: bool,
    pub can_delete_application_files: bool,
}
