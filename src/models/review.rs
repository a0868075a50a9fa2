// src/models/review.rs
use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

/// A normalized review as served by `/api/reviews` and rendered by the
/// carousel. Field names on the wire match what the widget expects:
/// `author`, `rating`, `text`, `time`, `photoUrl`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub author: String,          // Display name of the reviewer
    pub rating: u8,              // 1-5, taken as-is from upstream
    pub text: String,            // Free-form review body
    pub time: String,            // ISO-8601 UTC string, millisecond precision
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>, // Serialized as null when absent
}

/// Converts an upstream epoch-seconds value into the ISO-8601 string the
/// widget serves, e.g. 1700000000 -> "2023-11-14T22:13:20.000Z".
/// Out-of-range inputs yield an empty string.
pub fn iso8601_from_epoch(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_review(photo_url: Option<String>) -> Review {
        Review {
            author: "Jane Doe".into(),
            rating: 5,
            text: "Great service, “amazing” food".into(),
            time: iso8601_from_epoch(1700000000),
            photo_url,
        }
    }

    #[test]
    fn converts_epoch_seconds_to_iso8601() {
        assert_eq!(iso8601_from_epoch(1700000000), "2023-11-14T22:13:20.000Z");
        assert_eq!(iso8601_from_epoch(0), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample_review(Some("https://example.com/p.png".into())))
            .unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["author"], "Jane Doe");
        assert_eq!(obj["rating"], 5);
        assert_eq!(obj["time"], "2023-11-14T22:13:20.000Z");
        assert_eq!(obj["photoUrl"], "https://example.com/p.png");
        assert!(!obj.contains_key("photo_url"));
    }

    #[test]
    fn missing_photo_serializes_as_null_not_omitted() {
        let value = serde_json::to_value(sample_review(None)).unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("photoUrl"));
        assert!(obj["photoUrl"].is_null());
    }

    #[test]
    fn deserializes_the_served_payload() {
        let parsed: Vec<Review> = serde_json::from_str(
            r#"[{"author":"A","rating":4,"text":"ok","time":"2023-11-14T22:13:20.000Z","photoUrl":null}]"#,
        )
        .unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].rating, 4);
        assert_eq!(parsed[0].photo_url, None);
    }
}
