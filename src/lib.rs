//! Core API client library for the OpsDesk business-management platform.
//!
//! OpsDesk backends expose a JSON REST API (users, CRM clients, projects,
//! tasks, templates, invoices, interactions) authenticated with short-lived
//! JWT bearer tokens and a longer-lived refresh token. This crate provides:
//!
//! - `ApiClient`: the authenticated request pipeline, including transparent
//!   single-shot token refresh and replay on 401 responses
//! - `TokenStore`: pluggable access/refresh token storage (memory, file,
//!   OS keychain)
//! - Typed request/response models for the resource endpoints
//!
//! Host applications (admin dashboards, client portals, CLI tools) supply a
//! token store and an optional auth-failure handler, then call the resource
//! methods directly.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use auth::{AuthEvents, TokenSet, TokenStore};
pub use config::Config;
