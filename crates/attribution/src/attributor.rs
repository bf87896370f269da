use sarmad_corpus::Corpus;
use sarmad_fingerprint::FingerprintExtractor;

use crate::bisect::{BisectConfig, Bisector};
use crate::progress::ProgressSink;
use crate::trace::conversation_root;
use crate::types::{Decision, SearchProgress, SearchResult};

/// What the caller knows going in: the automated monitor supplies keywords,
/// the human-report workflow supplies a reported post id. Either field may
/// be absent.
#[derive(Debug, Clone, Default)]
pub struct AttributionRequest {
    pub reported_post_id: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// Orchestrates both attribution strategies. Structural reply-thread
/// ancestry is stronger and cheaper evidence than statistical volume
/// inference, so the conversation trace always runs first when a reported
/// post resolves; the bisector is the fallback.
pub struct Attributor {
    bisector: Bisector,
    extractor: FingerprintExtractor,
}

impl Attributor {
    pub fn new(config: BisectConfig, extractor: FingerprintExtractor) -> Self {
        Self {
            bisector: Bisector::new(config),
            extractor,
        }
    }

    pub async fn attribute(
        &self,
        corpus: &Corpus,
        request: &AttributionRequest,
        mut sink: Option<&mut dyn ProgressSink>,
    ) -> SearchResult {
        if corpus.is_empty() {
            return SearchResult::not_found();
        }

        // Strategy 1: structural trace. A resolved conversation root is
        // accepted as the source immediately. An unknown reported id is
        // skipped silently, not an error.
        if let Some(reported) = request
            .reported_post_id
            .as_deref()
            .and_then(|id| corpus.get(id))
        {
            if let Some(root) = conversation_root(corpus, &reported.conversation_id) {
                let entry = SearchProgress {
                    iteration: 1,
                    low: root.created_at,
                    mid: root.created_at,
                    high: root.created_at,
                    matched: 1,
                    decision: Decision::TraceConversation,
                    window_minutes: 0,
                };
                if let Some(sink) = sink.as_mut() {
                    if let Err(err) = sink.deliver(&entry) {
                        log::warn!("progress sink failed on conversation trace: {err}");
                    }
                }
                return SearchResult {
                    found: true,
                    source: Some(root.clone()),
                    iterations: 1,
                    window: None,
                    trace: vec![entry],
                };
            }
        }

        // Strategy 2: temporal bisection over the supplied or freshly
        // extracted keyword set.
        let keywords = match &request.keywords {
            Some(supplied) => supplied.clone(),
            None => {
                log::debug!("no keywords supplied; extracting fingerprint");
                self.extractor.extract(corpus, None).keywords
            }
        };
        if keywords.is_empty() {
            return SearchResult::not_found();
        }

        self.bisector.run(corpus, &keywords, sink).await
    }
}
