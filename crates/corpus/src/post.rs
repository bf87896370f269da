use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped post. `conversation_id` equals `id` when the post is
/// itself a thread root; every post in one reply tree shares the root's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub conversation_id: String,
    pub author_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub has_media: bool,
    /// Synthetic-corpus label marking the known true source. Test fixtures
    /// only; attribution never reads it.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_source: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl Post {
    pub fn is_thread_root(&self) -> bool {
        self.id == self.conversation_id
    }

    /// True when the text contains at least one of the keywords as a substring.
    pub fn matches_any(&self, keywords: &[String]) -> bool {
        keywords.iter().any(|kw| self.text.contains(kw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(id: &str, conv: &str, text: &str) -> Post {
        Post {
            id: id.to_string(),
            conversation_id: conv.to_string(),
            author_id: "u1".to_string(),
            text: text.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 14, 15, 0).unwrap(),
            has_media: false,
            is_source: false,
        }
    }

    #[test]
    fn thread_root_when_ids_match() {
        assert!(post("t1", "t1", "").is_thread_root());
        assert!(!post("t2", "t1", "").is_thread_root());
    }

    #[test]
    fn keyword_match_is_substring_based() {
        let p = post("t1", "t1", "انتشر فيديو مضاربة في النسيم");
        assert!(p.matches_any(&["مضاربة".to_string()]));
        assert!(p.matches_any(&["غائب".to_string(), "فيديو".to_string()]));
        assert!(!p.matches_any(&["شرطة".to_string()]));
        assert!(!p.matches_any(&[]));
    }

    #[test]
    fn malformed_timestamp_is_a_parse_error() {
        let raw = r#"{
            "id": "t1",
            "conversation_id": "t1",
            "author_id": "u1",
            "text": "hello",
            "created_at": "not-a-time"
        }"#;
        assert!(serde_json::from_str::<Post>(raw).is_err());
    }

    #[test]
    fn source_label_defaults_and_is_omitted() {
        let raw = r#"{
            "id": "t1",
            "conversation_id": "t1",
            "author_id": "u1",
            "text": "hello",
            "created_at": "2024-03-05T14:15:00Z"
        }"#;
        let p: Post = serde_json::from_str(raw).unwrap();
        assert!(!p.is_source);
        assert!(!p.has_media);

        let out = serde_json::to_string(&p).unwrap();
        assert!(!out.contains("is_source"));
    }
}
