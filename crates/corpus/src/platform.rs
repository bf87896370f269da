use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};
use crate::post::Post;
use crate::Corpus;

/// One post as exported by the upstream platform API: nested author object,
/// media attachment list, timestamp as an RFC 3339 string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformPost {
    pub id: String,
    pub conversation_id: String,
    pub text: String,
    pub created_at: String,
    pub author: PlatformAuthor,
    #[serde(default)]
    pub media: Vec<PlatformMedia>,
    #[serde(default)]
    pub is_source: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformAuthor {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformMedia {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Envelope of the platform's bulk export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformExport {
    pub data: Vec<PlatformPost>,
}

impl TryFrom<PlatformPost> for Post {
    type Error = CorpusError;

    fn try_from(raw: PlatformPost) -> Result<Post> {
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&raw.created_at)
            .map_err(|source| CorpusError::Timestamp {
                id: raw.id.clone(),
                value: raw.created_at.clone(),
                source,
            })?
            .with_timezone(&Utc);

        Ok(Post {
            id: raw.id,
            conversation_id: raw.conversation_id,
            author_id: raw.author.id,
            text: raw.text,
            created_at,
            has_media: !raw.media.is_empty(),
            is_source: raw.is_source,
        })
    }
}

impl PlatformExport {
    /// Validates every record and builds a corpus; the first malformed
    /// timestamp aborts ingestion with the offending post id.
    pub fn into_corpus(self) -> Result<Corpus> {
        self.data
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>>>()
            .map(Corpus::new)
    }
}
