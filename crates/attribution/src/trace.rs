use sarmad_corpus::{Corpus, Post};

/// Earliest post sharing `conversation_id` — the presumed thread origin.
/// Ties on `created_at` break by post id so the choice is deterministic.
pub fn conversation_root<'a>(corpus: &'a Corpus, conversation_id: &str) -> Option<&'a Post> {
    corpus
        .iter()
        .filter(|post| post.conversation_id == conversation_id)
        .min_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        })
}
