//! Data models for the catalog API

mod ai_model;

pub use ai_model::{AiModel, AiModelPayload, TagList, parse_rating, split_tags};
