use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use sarmad_corpus::Post;

/// Direction taken after evaluating one half of the window, or the tag for a
/// structural conversation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Left,
    Right,
    TraceConversation,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Decision::Left => "left",
            Decision::Right => "right",
            Decision::TraceConversation => "trace_conversation",
        };
        f.write_str(s)
    }
}

/// Half-open interval `[low, high)`; `low < high`. Bisection moves exactly
/// one bound per step, so windows shrink monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWindow {
    pub low: DateTime<Utc>,
    pub high: DateTime<Utc>,
}

impl SearchWindow {
    pub fn new(low: DateTime<Utc>, high: DateTime<Utc>) -> Self {
        debug_assert!(low < high, "window bounds out of order");
        Self { low, high }
    }

    /// Exact midpoint; sub-minute precision is preserved.
    pub fn mid(&self) -> DateTime<Utc> {
        self.low + (self.high - self.low) / 2
    }

    pub fn duration(&self) -> Duration {
        self.high - self.low
    }

    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.low <= t && t < self.high
    }
}

/// One immutable record per bisection step: the bounds after the step's
/// update, the evaluated half's match count, and the window size (whole
/// minutes) before narrowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchProgress {
    pub iteration: u32,
    pub low: DateTime<Utc>,
    pub mid: DateTime<Utc>,
    pub high: DateTime<Utc>,
    pub matched: usize,
    pub decision: Decision,
    pub window_minutes: i64,
}

impl SearchProgress {
    /// The post-update window of a bisection step. Not meaningful for a
    /// `TraceConversation` entry, whose bounds all carry the root's time.
    pub fn window(&self) -> SearchWindow {
        SearchWindow::new(self.low, self.high)
    }
}

/// Outcome of one attribution run. Produced once, never mutated. `window` is
/// `None` when no bisection ran (empty corpus, conversation-trace path).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub found: bool,
    pub source: Option<Post>,
    pub iterations: u32,
    pub window: Option<SearchWindow>,
    pub trace: Vec<SearchProgress>,
}

impl SearchResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            source: None,
            iterations: 0,
            window: None,
            trace: Vec::new(),
        }
    }
}
