//! Wire models for the `/testimonials` endpoint.
//!
//! The backend returns more than the widget needs (`id`, `approved`,
//! `created_at`); unknown fields are ignored on deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single published testimonial as returned by `GET /testimonials`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "text_from_scalar")]
    pub author: String,
    #[serde(default, deserialize_with = "text_from_scalar")]
    pub text: String,
}

impl Testimonial {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Body of `POST /testimonials`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub author: String,
    pub text: String,
}

impl SubmissionRequest {
    /// Build a request from raw form values.
    ///
    /// Both values are trimmed; returns `None` if either ends up empty.
    pub fn from_fields(author: &str, text: &str) -> Option<Self> {
        let author = author.trim();
        let text = text.trim();
        if author.is_empty() || text.is_empty() {
            return None;
        }
        Some(Self {
            author: author.to_string(),
            text: text.to_string(),
        })
    }
}

/// Acknowledgment returned on a successful submission.
///
/// New testimonials start unapproved and only show up in the list once a
/// moderator approves them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmitAck {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub approved: bool,
}

/// Error body the backend sends with a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// The `detail` field, but only when it is plain text.
    ///
    /// Validation failures carry a structured array here, which is not
    /// something to show a visitor.
    pub fn detail_text(self) -> Option<String> {
        match self.detail {
            Some(Value::String(detail)) => Some(detail),
            _ => None,
        }
    }
}

/// Project a JSON list body onto testimonials.
///
/// Anything other than an array means "nothing to show", not a failure.
/// Elements that are not objects are skipped so one bad entry does not hide
/// the rest.
pub fn testimonials_from_value(value: Value) -> Result<Vec<Testimonial>, serde_json::Error> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(_) => Some(serde_json::from_value(item)),
                other => {
                    tracing::debug!("Skipping non-object testimonial entry: {}", other);
                    None
                }
            })
            .collect(),
        _ => Ok(Vec::new()),
    }
}

fn text_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_fields_trims() {
        let req = SubmissionRequest::from_fields("  Jo ", "\tGreat!\n").unwrap();
        assert_eq!(req.author, "Jo");
        assert_eq!(req.text, "Great!");
    }

    #[test]
    fn test_from_fields_rejects_blank() {
        assert!(SubmissionRequest::from_fields("", "hello").is_none());
        assert!(SubmissionRequest::from_fields("Jo", "   ").is_none());
        assert!(SubmissionRequest::from_fields(" ", "\n").is_none());
    }

    #[test]
    fn test_non_array_is_empty() {
        assert!(testimonials_from_value(Value::Null).unwrap().is_empty());
        assert!(testimonials_from_value(json!({})).unwrap().is_empty());
        assert!(testimonials_from_value(json!("x")).unwrap().is_empty());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let items = testimonials_from_value(json!([
            {"id": 3, "author": "A", "text": "B", "approved": true, "created_at": "2024-01-01"}
        ]))
        .unwrap();
        assert_eq!(items, vec![Testimonial::new("A", "B")]);
    }

    #[test]
    fn test_non_object_entries_skipped() {
        let items = testimonials_from_value(json!([{"author": "A", "text": "ok"}, 5])).unwrap();
        assert_eq!(items, vec![Testimonial::new("A", "ok")]);

        let items =
            testimonials_from_value(json!([null, "x", [1], {"author": "B", "text": "fine"}]))
                .unwrap();
        assert_eq!(items, vec![Testimonial::new("B", "fine")]);

        assert!(testimonials_from_value(json!([null])).unwrap().is_empty());
    }

    #[test]
    fn test_scalars_coerced_to_text() {
        let items = testimonials_from_value(json!([
            {"author": 42, "text": null},
            {"text": true}
        ]))
        .unwrap();
        assert_eq!(items[0], Testimonial::new("42", ""));
        assert_eq!(items[1], Testimonial::new("", "true"));
    }

    #[test]
    fn test_detail_text_only_for_strings() {
        let body: ErrorBody = serde_json::from_value(json!({"detail": "Too short"})).unwrap();
        assert_eq!(body.detail_text().as_deref(), Some("Too short"));

        let body: ErrorBody =
            serde_json::from_value(json!({"detail": [{"loc": ["body", "text"]}]})).unwrap();
        assert!(body.detail_text().is_none());

        let body: ErrorBody = serde_json::from_value(json!({})).unwrap();
        assert!(body.detail_text().is_none());
    }

    #[test]
    fn test_ack_defaults() {
        let ack: SubmitAck =
            serde_json::from_value(json!({"id": 7, "author": "Jo", "text": "Hi", "approved": false}))
                .unwrap();
        assert_eq!(ack, SubmitAck { id: Some(7), approved: false });

        let ack: SubmitAck = serde_json::from_value(json!({})).unwrap();
        assert_eq!(ack, SubmitAck::default());
    }
}
