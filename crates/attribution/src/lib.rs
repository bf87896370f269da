mod attributor;
mod bisect;
mod progress;
mod trace;
mod types;
mod window;

pub use attributor::{AttributionRequest, Attributor};
pub use bisect::{BisectConfig, Bisector};
pub use progress::{format_progress, ChannelSink, LogSink, ProgressSink, SinkError};
pub use trace::conversation_root;
pub use types::{Decision, SearchProgress, SearchResult, SearchWindow};
pub use window::matches_in_window;
