mod corpus;
mod error;
mod platform;
mod post;

pub use corpus::Corpus;
pub use error::{CorpusError, Result};
pub use platform::{PlatformAuthor, PlatformExport, PlatformMedia, PlatformPost};
pub use post::Post;
