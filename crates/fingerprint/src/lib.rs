mod error;
mod extractor;
mod lexicon;
mod tokenize;

pub use error::{FingerprintError, Result};
pub use extractor::{Fingerprint, FingerprintExtractor, DEFAULT_TOP_K};
pub use lexicon::Lexicon;
pub use tokenize::{extract_hashtags, strip_noise, tokenize};
