//! AI Model entity

use serde::{Deserialize, Serialize};

/// Catalog entry exchanged with the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiModel {
    /// Server-assigned identifier; absent until the first create succeeds
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub image: String,
    pub developer: String,
    pub description: String,
    pub category: String,
    pub tags: TagList,
    pub website_link: String,
    /// Non-finite values travel as JSON null
    #[serde(default = "nan", deserialize_with = "rating_or_nan")]
    pub rating: f64,
    /// String-typed counters, passed through without numeric coercion
    pub number_of_reviews: String,
    pub user_clicks: String,
    pub installs: String,
}

/// Request body for create and update.
///
/// Tags are already normalized to a token sequence; `_id` is present only
/// on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiModelPayload {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub image: String,
    pub developer: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub website_link: String,
    #[serde(default = "nan", deserialize_with = "rating_or_nan")]
    pub rating: f64,
    pub number_of_reviews: String,
    pub user_clicks: String,
    pub installs: String,
}

/// Tags as they appear on either side of the wire.
///
/// Fetched records carry a token array; a form carries the comma-separated
/// text the user typed. Keeping the two representations explicit removes the
/// runtime type check the duck-typed payload needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagList {
    /// Comma-separated text, not yet split
    Raw(String),
    /// Server-side token sequence
    Parsed(Vec<String>),
}

impl TagList {
    /// Wire form: split and trim `Raw` text. A `Parsed` sequence passes
    /// through unchanged and is never re-split.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            TagList::Raw(text) => split_tags(text),
            TagList::Parsed(tags) => tags.clone(),
        }
    }

    /// Form display: `Parsed` tokens join with `", "`; `Raw` text shows
    /// as typed.
    pub fn display(&self) -> String {
        match self {
            TagList::Raw(text) => text.clone(),
            TagList::Parsed(tags) => tags.join(", "),
        }
    }
}

impl Default for TagList {
    fn default() -> Self {
        TagList::Raw(String::new())
    }
}

/// Split comma-separated tag text into trimmed tokens, preserving order.
///
/// Empty input yields `[""]`: the server contract stores the single empty
/// token rather than an empty list.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Coerce a rating typed into a form. Unparsable input yields `NaN`,
/// which serializes as JSON null.
pub fn parse_rating(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

fn nan() -> f64 {
    f64::NAN
}

fn rating_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_trims_and_preserves_order() {
        assert_eq!(split_tags("x, y , z"), vec!["x", "y", "z"]);
        assert_eq!(split_tags("single"), vec!["single"]);
        assert_eq!(split_tags("b,a"), vec!["b", "a"]);
    }

    #[test]
    fn test_split_tags_empty_input_yields_one_empty_token() {
        assert_eq!(split_tags(""), vec![""]);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("4.5"), 4.5);
        assert_eq!(parse_rating(" 3 "), 3.0);
        assert!(parse_rating("not a number").is_nan());
        assert!(parse_rating("").is_nan());
    }

    #[test]
    fn test_tag_list_normalize_never_resplits_parsed() {
        let parsed = TagList::Parsed(vec!["a, b".to_string(), "c".to_string()]);
        assert_eq!(parsed.normalize(), vec!["a, b", "c"]);

        let raw = TagList::Raw("a, b".to_string());
        assert_eq!(raw.normalize(), vec!["a", "b"]);
    }

    #[test]
    fn test_tag_list_display() {
        let parsed = TagList::Parsed(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(parsed.display(), "a, b");

        let raw = TagList::Raw("a,b".to_string());
        assert_eq!(raw.display(), "a,b");
    }

    #[test]
    fn test_tag_list_deserializes_both_representations() {
        let parsed: TagList = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(parsed, TagList::Parsed(vec!["a".to_string(), "b".to_string()]));

        let raw: TagList = serde_json::from_str(r#""a, b""#).unwrap();
        assert_eq!(raw, TagList::Raw("a, b".to_string()));
    }

    #[test]
    fn test_model_id_uses_server_field_name() {
        let json = r#"{
            "_id": "65f0",
            "name": "Foo",
            "image": "",
            "developer": "",
            "description": "",
            "category": "",
            "tags": ["x"],
            "website_link": "",
            "rating": 4.5,
            "number_of_reviews": "10",
            "user_clicks": "0",
            "installs": "5"
        }"#;
        let model: AiModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.id.as_deref(), Some("65f0"));
        assert_eq!(model.rating, 4.5);

        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["_id"], "65f0");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_payload_without_id_omits_field() {
        let payload = AiModelPayload {
            id: None,
            name: "Foo".to_string(),
            image: String::new(),
            developer: String::new(),
            description: String::new(),
            category: String::new(),
            tags: vec!["x".to_string()],
            website_link: String::new(),
            rating: 4.5,
            number_of_reviews: String::new(),
            user_clicks: String::new(),
            installs: String::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_nan_rating_serializes_as_null() {
        let payload = AiModelPayload {
            id: None,
            name: String::new(),
            image: String::new(),
            developer: String::new(),
            description: String::new(),
            category: String::new(),
            tags: vec![],
            website_link: String::new(),
            rating: f64::NAN,
            number_of_reviews: String::new(),
            user_clicks: String::new(),
            installs: String::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["rating"].is_null());
    }

    #[test]
    fn test_null_rating_deserializes_as_nan() {
        let json = r#"{
            "name": "Foo",
            "image": "",
            "developer": "",
            "description": "",
            "category": "",
            "tags": [],
            "website_link": "",
            "rating": null,
            "number_of_reviews": "",
            "user_clicks": "",
            "installs": ""
        }"#;
        let model: AiModel = serde_json::from_str(json).unwrap();
        assert!(model.id.is_none());
        assert!(model.rating.is_nan());
    }
}
