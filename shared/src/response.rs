//! API response envelope
//!
//! The catalog server wraps every successful JSON payload in a single-key
//! `{ "model": ... }` object, both for one record and for the full listing.

use serde::{Deserialize, Serialize};

/// `{ "model": T }` wrapper returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEnvelope<T> {
    pub model: T,
}

impl<T> ModelEnvelope<T> {
    /// Wrap a payload.
    pub fn new(model: T) -> Self {
        Self { model }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AiModel, TagList};

    #[test]
    fn test_envelope_wraps_single_record() {
        let json = r#"{"model": {
            "_id": "1",
            "name": "Foo",
            "image": "",
            "developer": "",
            "description": "",
            "category": "",
            "tags": ["x", "y"],
            "website_link": "",
            "rating": 4.0,
            "number_of_reviews": "1",
            "user_clicks": "2",
            "installs": "3"
        }}"#;
        let envelope: ModelEnvelope<AiModel> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.model.name, "Foo");
        assert_eq!(
            envelope.model.tags,
            TagList::Parsed(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_envelope_wraps_empty_listing() {
        let envelope: ModelEnvelope<Vec<AiModel>> =
            serde_json::from_str(r#"{"model": []}"#).unwrap();
        assert!(envelope.model.is_empty());
    }
}
