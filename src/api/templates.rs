//! Project and task template calls.

use serde::Serialize;

use crate::models::{Page, ProjectTemplate, TaskTemplate};

use super::{ApiClient, ApiError};

impl ApiClient {
    // ===== Project templates =====

    pub async fn list_project_templates(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Page<ProjectTemplate>, ApiError> {
        self.get("/projects/templates/", params).await
    }

    pub async fn get_project_template(&self, id: &str) -> Result<ProjectTemplate, ApiError> {
        self.get(&format!("/projects/templates/{}/", id), &[]).await
    }

    pub async fn create_project_template<B: Serialize>(
        &self,
        data: &B,
    ) -> Result<ProjectTemplate, ApiError> {
        self.post("/projects/templates/", data).await
    }

    pub async fn update_project_template<B: Serialize>(
        &self,
        id: &str,
        data: &B,
    ) -> Result<ProjectTemplate, ApiError> {
        self.put(&format!("/projects/templates/{}/", id), data).await
    }

    pub async fn delete_project_template(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/projects/templates/{}/", id)).await
    }

    // ===== Task templates =====

    pub async fn list_task_templates(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Page<TaskTemplate>, ApiError> {
        self.get("/projects/task-templates/", params).await
    }

    pub async fn get_task_template(&self, id: &str) -> Result<TaskTemplate, ApiError> {
        self.get(&format!("/projects/task-templates/{}/", id), &[])
            .await
    }

    pub async fn create_task_template<B: Serialize>(
        &self,
        data: &B,
    ) -> Result<TaskTemplate, ApiError> {
        self.post("/projects/task-templates/", data).await
    }

    pub async fn update_task_template<B: Serialize>(
        &self,
        id: &str,
        data: &B,
    ) -> Result<TaskTemplate, ApiError> {
        self.put(&format!("/projects/task-templates/{}/", id), data)
            .await
    }

    pub async fn delete_task_template(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/projects/task-templates/{}/", id))
            .await
    }
}
