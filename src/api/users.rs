//! User management calls.

use serde::Serialize;

use crate::models::{Page, User, UserProfile};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List users, optionally filtered (`search`, `role`, `department`,
    /// `is_active`, `page`).
    pub async fn list_users(&self, params: &[(&str, &str)]) -> Result<Page<User>, ApiError> {
        self.get("/users/", params).await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ApiError> {
        self.get(&format!("/users/{}/", id), &[]).await
    }

    pub async fn create_user<B: Serialize>(&self, data: &B) -> Result<User, ApiError> {
        self.post("/users/", data).await
    }

    pub async fn update_user<B: Serialize>(&self, id: &str, data: &B) -> Result<User, ApiError> {
        self.put(&format!("/users/{}/", id), data).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}/", id)).await
    }

    pub async fn get_user_profile(&self, id: &str) -> Result<UserProfile, ApiError> {
        self.get(&format!("/users/{}/profile/", id), &[]).await
    }

    pub async fn update_user_profile<B: Serialize>(
        &self,
        id: &str,
        data: &B,
    ) -> Result<UserProfile, ApiError> {
        self.put(&format!("/users/{}/profile/", id), data).await
    }
}
