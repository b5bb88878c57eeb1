//! Catalog Client - HTTP client for the AI model catalog API
//!
//! Implements the client side of the catalog workflow: composing a draft
//! record, submitting it, listing the remote collection, editing and
//! deleting entries. All UI-relevant state lives in [`state::Session`];
//! the four network operations live in [`engine::SyncEngine`].

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;
pub mod state;

pub use api::CatalogApi;
pub use config::ClientConfig;
pub use engine::SyncEngine;
pub use error::{ClientError, ClientResult};
pub use http::{HttpTransport, NetworkTransport};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotTransport;
pub use state::{EditDraft, FormField, ModelForm, Session, ViewMode};

// Re-export shared types for convenience
pub use shared::{AiModel, AiModelPayload, ModelEnvelope, TagList};
