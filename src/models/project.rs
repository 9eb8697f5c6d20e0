use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A client project. Status values follow the backend vocabulary:
/// `planning`, `in_progress`, `on_hold`, `completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Completion percentage, 0-100.
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub manager: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Project {
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("completed")
    }
}

/// A reusable project blueprint; creating a project from a template also
/// instantiates its task templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct ProjectTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_days: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Aggregate counters for the admin dashboard, served by the projects app.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct DashboardStats {
    #[serde(default)]
    pub total_projects: u64,
    #[serde(default)]
    pub active_projects: u64,
    #[serde(default)]
    pub completed_projects: u64,
    #[serde(default)]
    pub total_tasks: u64,
    #[serde(default)]
    pub overdue_tasks: u64,
    /// Project counts keyed by status label.
    #[serde(default)]
    pub projects_by_status: BTreeMap<String, u64>,
}

fn default_true() -> bool {
    true
}
