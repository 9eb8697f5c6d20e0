//! Typed payloads for the OpsDesk API.
//!
//! Read models are deserialization-tolerant: fields the backend may omit or
//! null are `Option` with `#[serde(default)]`, so partial serializer variants
//! (list vs detail) parse into the same type. Create/update payloads are
//! caller-supplied `Serialize` values rather than fixed structs.
//!
//! With the `ts` feature enabled, models derive `ts_rs::TS` for TypeScript
//! binding generation in the web frontends.

pub mod auth;
pub mod client;
pub mod interaction;
pub mod invoice;
pub mod page;
pub mod project;
pub mod task;
pub mod user;

pub use auth::{Credentials, RefreshResponse, TokenPair};
pub use client::ClientRecord;
pub use interaction::Interaction;
pub use invoice::{Invoice, InvoiceItem};
pub use page::Page;
pub use project::{DashboardStats, Project, ProjectTemplate};
pub use task::{Task, TaskTemplate};
pub use user::{Role, User, UserProfile};
