use thiserror::Error;
use tokio::sync::mpsc;

use crate::types::SearchProgress;

#[derive(Error, Debug)]
#[error("progress sink rejected event: {0}")]
pub struct SinkError(pub String);

/// Observer for per-iteration search progress. Events arrive strictly in
/// iteration order, once each, before the next iteration starts. A delivery
/// failure never aborts the search; the engine logs it and keeps going.
pub trait ProgressSink: Send {
    fn deliver(&mut self, progress: &SearchProgress) -> Result<(), SinkError>;
}

/// Forwards progress into a tokio channel, e.g. toward a UI or socket writer
/// owned by the caller.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<SearchProgress>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<SearchProgress>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelSink {
    fn deliver(&mut self, progress: &SearchProgress) -> Result<(), SinkError> {
        self.tx
            .send(progress.clone())
            .map_err(|_| SinkError("channel receiver dropped".to_string()))
    }
}

/// Renders each step as a log line.
#[derive(Default)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn deliver(&mut self, progress: &SearchProgress) -> Result<(), SinkError> {
        log::info!("{}", format_progress(progress));
        Ok(())
    }
}

/// One-line rendering of a search step.
pub fn format_progress(progress: &SearchProgress) -> String {
    format!(
        "[iter {}] window {} - {} | mid {} | matched {} | narrowing {}",
        progress.iteration,
        progress.low.format("%H:%M"),
        progress.high.format("%H:%M"),
        progress.mid.format("%H:%M"),
        progress.matched,
        progress.decision,
    )
}
