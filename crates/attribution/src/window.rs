use sarmad_corpus::{Corpus, Post};

use crate::types::SearchWindow;

/// Posts inside the half-open window whose text contains at least one keyword
/// as a substring, plus any in-window post carrying media. The media clause
/// is deliberate: an originating post often precedes the crowd-coined
/// vocabulary, so media alone makes it a candidate.
pub fn matches_in_window<'a>(
    corpus: &'a Corpus,
    keywords: &[String],
    window: &SearchWindow,
) -> Vec<&'a Post> {
    corpus
        .iter()
        .filter(|post| window.contains(post.created_at))
        .filter(|post| post.matches_any(keywords) || post.has_media)
        .collect()
}

/// In-window media posts that do not match any keyword. Used at bisection
/// termination to surface keyword-silent originators explicitly.
pub fn media_only_in_window<'a>(
    corpus: &'a Corpus,
    keywords: &[String],
    window: &SearchWindow,
) -> Vec<&'a Post> {
    corpus
        .iter()
        .filter(|post| window.contains(post.created_at))
        .filter(|post| post.has_media && !post.matches_any(keywords))
        .collect()
}
