//! Task calls. Tasks live under the projects app, hence the path prefix.

use serde::Serialize;

use crate::models::{Page, Task};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List tasks, optionally filtered (`search`, `status`, `priority`,
    /// `project`, `assignee`, `page`).
    pub async fn list_tasks(&self, params: &[(&str, &str)]) -> Result<Page<Task>, ApiError> {
        self.get("/projects/tasks/", params).await
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, ApiError> {
        self.get(&format!("/projects/tasks/{}/", id), &[]).await
    }

    pub async fn create_task<B: Serialize>(&self, data: &B) -> Result<Task, ApiError> {
        self.post("/projects/tasks/", data).await
    }

    pub async fn update_task<B: Serialize>(&self, id: &str, data: &B) -> Result<Task, ApiError> {
        self.put(&format!("/projects/tasks/{}/", id), data).await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/projects/tasks/{}/", id)).await
    }

    /// Mark a task completed.
    pub async fn complete_task(&self, id: &str) -> Result<Task, ApiError> {
        self.post_empty(&format!("/projects/tasks/{}/complete/", id))
            .await
    }

    /// Tasks assigned to the authenticated user.
    pub async fn my_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get("/projects/tasks/my-tasks/", &[]).await
    }
}
