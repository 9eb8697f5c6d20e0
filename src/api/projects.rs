//! Project calls.

use serde::Serialize;

use crate::models::{DashboardStats, Page, Project, Task};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List projects, optionally filtered (`search`, `status`, `client`,
    /// `page`).
    pub async fn list_projects(&self, params: &[(&str, &str)]) -> Result<Page<Project>, ApiError> {
        self.get("/projects/", params).await
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        self.get(&format!("/projects/{}/", id), &[]).await
    }

    pub async fn create_project<B: Serialize>(&self, data: &B) -> Result<Project, ApiError> {
        self.post("/projects/", data).await
    }

    pub async fn update_project<B: Serialize>(
        &self,
        id: &str,
        data: &B,
    ) -> Result<Project, ApiError> {
        self.put(&format!("/projects/{}/", id), data).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/projects/{}/", id)).await
    }

    /// Instantiate a project (and its tasks) from a project template.
    pub async fn create_project_from_template<B: Serialize>(
        &self,
        data: &B,
    ) -> Result<Project, ApiError> {
        self.post("/projects/from-template/", data).await
    }

    /// Tasks belonging to a project.
    pub async fn project_tasks(&self, id: &str) -> Result<Vec<Task>, ApiError> {
        self.get(&format!("/projects/{}/tasks/", id), &[]).await
    }

    /// Aggregate project/task counters for the admin dashboard.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/projects/dashboard/stats/", &[]).await
    }
}
