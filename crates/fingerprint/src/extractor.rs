use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sarmad_corpus::Corpus;

use crate::lexicon::Lexicon;
use crate::tokenize::{extract_hashtags, tokenize};

pub const DEFAULT_TOP_K: usize = 3;
const TOP_BIGRAMS: usize = 5;

/// The semantic fingerprint of an event: the keyword/bigram/hashtag signature
/// that distinguishes event-specific chatter from background noise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Top unigrams by frequency, generic terms excluded. Order matters.
    pub keywords: Vec<String>,
    /// Top adjacent-pair bigrams by frequency.
    pub top_bigrams: Vec<String>,
    pub unigram_freq: HashMap<String, u64>,
    pub bigram_freq: HashMap<String, u64>,
    pub hashtag_freq: HashMap<String, u64>,
    pub posts_analyzed: usize,
    pub total_tokens: usize,
}

/// Frequency table that remembers first-encounter order so ranking is
/// deterministic under equal counts.
#[derive(Default)]
struct FrequencyTable {
    entries: HashMap<String, (u64, usize)>,
}

impl FrequencyTable {
    fn record(&mut self, token: &str) {
        let next_rank = self.entries.len();
        let entry = self
            .entries
            .entry(token.to_string())
            .or_insert((0, next_rank));
        entry.0 += 1;
    }

    /// Descending by count, ties broken by first-encounter order.
    fn ranked(&self) -> Vec<(&str, u64)> {
        let mut items: Vec<_> = self
            .entries
            .iter()
            .map(|(token, &(count, first_seen))| (token.as_str(), count, first_seen))
            .collect();
        items.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        items.into_iter().map(|(token, count, _)| (token, count)).collect()
    }

    fn counts(&self) -> HashMap<String, u64> {
        self.entries
            .iter()
            .map(|(token, &(count, _))| (token.clone(), count))
            .collect()
    }
}

/// Derives a fingerprint from crowd chatter ("crowd echo"): tokenize, drop
/// stop words, rank unigram/bigram/hashtag frequencies, keep the most
/// discriminating survivors. Pure compute; holds only immutable
/// configuration.
#[derive(Debug, Clone)]
pub struct FingerprintExtractor {
    lexicon: Lexicon,
    top_k: usize,
}

impl FingerprintExtractor {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Analyzes every post with `created_at >= since` (the whole corpus when
    /// `since` is `None`). An empty eligible subset yields an empty
    /// fingerprint, never an error.
    pub fn extract(&self, corpus: &Corpus, since: Option<DateTime<Utc>>) -> Fingerprint {
        let mut unigrams = FrequencyTable::default();
        let mut bigrams = FrequencyTable::default();
        let mut hashtags = FrequencyTable::default();
        let mut posts_analyzed = 0usize;
        let mut total_tokens = 0usize;

        for post in corpus.iter() {
            if let Some(since) = since {
                if post.created_at < since {
                    continue;
                }
            }
            posts_analyzed += 1;

            for tag in extract_hashtags(&post.text) {
                hashtags.record(&tag);
            }

            let tokens: Vec<String> = tokenize(&post.text)
                .into_iter()
                .filter(|t| !self.lexicon.is_stop_word(t))
                .collect();
            total_tokens += tokens.len();

            for token in &tokens {
                unigrams.record(token);
            }
            // Adjacent pairs only; pairs never cross post boundaries.
            for pair in tokens.windows(2) {
                bigrams.record(&format!("{} {}", pair[0], pair[1]));
            }
        }

        let keywords = unigrams
            .ranked()
            .into_iter()
            .filter(|(token, _)| !self.lexicon.is_generic(token))
            .take(self.top_k)
            .map(|(token, _)| token.to_string())
            .collect();

        let top_bigrams = bigrams
            .ranked()
            .into_iter()
            .take(TOP_BIGRAMS)
            .map(|(token, _)| token.to_string())
            .collect();

        Fingerprint {
            keywords,
            top_bigrams,
            unigram_freq: unigrams.counts(),
            bigram_freq: bigrams.counts(),
            hashtag_freq: hashtags.counts(),
            posts_analyzed,
            total_tokens,
        }
    }
}
