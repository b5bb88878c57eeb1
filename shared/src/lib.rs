//! Shared types for the AI model catalog
//!
//! Wire-level types used by both the catalog client and any in-process
//! test server: the record entity, tag representations, request payloads,
//! and the response envelope.

pub mod models;
pub mod response;

// Re-exports
pub use models::{AiModel, AiModelPayload, TagList, parse_rating, split_tags};
pub use response::ModelEnvelope;
pub use serde::{Deserialize, Serialize};
