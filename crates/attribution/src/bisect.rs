use chrono::Duration;

use sarmad_corpus::Corpus;

use crate::progress::ProgressSink;
use crate::types::{Decision, SearchProgress, SearchResult, SearchWindow};
use crate::window::{matches_in_window, media_only_in_window};

/// Slack added on both sides of the corpus time span before bisecting.
const WINDOW_MARGIN_MINUTES: i64 = 30;

#[derive(Debug, Clone)]
pub struct BisectConfig {
    /// Hard safety cap, not a correctness bound. On exhaustion the last
    /// window is accepted as final.
    pub max_iterations: u32,
    /// Stop narrowing once the window is at or below this size.
    pub min_window: Duration,
    /// Cosmetic pause after each emitted step, so an observer can consume
    /// events at a human-visible rate. Zero forces fully synchronous
    /// execution. Never affects the result.
    pub step_delay: std::time::Duration,
}

impl Default for BisectConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            min_window: Duration::minutes(1),
            step_delay: std::time::Duration::ZERO,
        }
    }
}

/// Temporal bisection over keyword/media density. Each step evaluates the
/// left half `[low, mid)`: any match there means the origin lies left,
/// otherwise right. The loop's only suspension point is the pacing sleep,
/// so dropping the returned future cancels the run with no further scans or
/// emissions.
#[derive(Debug, Clone, Default)]
pub struct Bisector {
    config: BisectConfig,
}

impl Bisector {
    pub fn new(config: BisectConfig) -> Self {
        Self { config }
    }

    pub async fn run(
        &self,
        corpus: &Corpus,
        keywords: &[String],
        mut sink: Option<&mut dyn ProgressSink>,
    ) -> SearchResult {
        let Some((earliest, latest)) = corpus.time_bounds() else {
            return SearchResult::not_found();
        };

        let margin = Duration::minutes(WINDOW_MARGIN_MINUTES);
        let mut window = SearchWindow::new(earliest - margin, latest + margin);
        let mut trace: Vec<SearchProgress> = Vec::new();
        let mut iterations = 0u32;

        while window.duration() > self.config.min_window
            && iterations < self.config.max_iterations
        {
            iterations += 1;
            let mid = window.mid();
            let pre_narrow_minutes = window.duration().num_minutes();

            let left_half = SearchWindow::new(window.low, mid);
            let matched = matches_in_window(corpus, keywords, &left_half).len();

            let decision = if matched > 0 {
                window.high = mid;
                Decision::Left
            } else {
                window.low = mid;
                Decision::Right
            };

            let progress = SearchProgress {
                iteration: iterations,
                low: window.low,
                mid,
                high: window.high,
                matched,
                decision,
                window_minutes: pre_narrow_minutes,
            };
            trace.push(progress.clone());

            if let Some(sink) = sink.as_mut() {
                if let Err(err) = sink.deliver(&progress) {
                    log::warn!("progress sink failed on iteration {iterations}: {err}");
                }
            }

            if !self.config.step_delay.is_zero() {
                tokio::time::sleep(self.config.step_delay).await;
            }
        }

        // Final window: keyword/media matches, plus keyword-silent media
        // posts made explicit, earliest first.
        let mut candidates = matches_in_window(corpus, keywords, &window);
        for post in media_only_in_window(corpus, keywords, &window) {
            if !candidates.iter().any(|c| c.id == post.id) {
                candidates.push(post);
            }
        }
        candidates.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        let source = candidates.first().map(|p| (*p).clone());

        SearchResult {
            found: source.is_some(),
            source,
            iterations,
            window: Some(window),
            trace,
        }
    }
}
