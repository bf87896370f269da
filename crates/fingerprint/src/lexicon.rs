use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Stop-word and generic-term configuration for one language or dialect.
/// Immutable once constructed; the extractor takes it by value at build time
/// so fingerprinting carries no process-wide state. Dialect packs are plain
/// data and can be loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    /// Tokens removed before any frequency counting.
    #[serde(default)]
    pub stop_words: HashSet<String>,
    /// High-frequency terms excluded from keyword selection but kept in the
    /// raw frequency tables.
    #[serde(default)]
    pub generic_terms: HashSet<String>,
}

impl Lexicon {
    pub fn new(stop_words: HashSet<String>, generic_terms: HashSet<String>) -> Self {
        Self {
            stop_words,
            generic_terms,
        }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn is_generic(&self, token: &str) -> bool {
        self.generic_terms.contains(token)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Built-in pack for Arabic crowd chatter, Saudi/Gulf dialect included.
    pub fn arabic() -> Self {
        let stop_words = [
            // Prepositions
            "في", "من", "على", "إلى", "الى", "عن", "مع", "بين", "حتى", "منذ",
            "خلال", "عند", "لدى", "ضد", "نحو", "فوق", "تحت", "أمام", "وراء",
            // Pronouns
            "أنا", "انا", "أنت", "انت", "أنتم", "انتم", "هو", "هي", "هم", "هن",
            "نحن", "انتي", "أنتي", "هذا", "هذه", "ذلك", "تلك", "هؤلاء", "أولئك",
            // Conjunctions
            "و", "أو", "او", "ثم", "لكن", "بل", "لأن", "لان", "إذا", "اذا",
            "لو", "كي", "حين", "عندما", "بينما", "كما", "مثل", "إن", "ان", "أن",
            // Articles and particles
            "ال", "الـ", "لا", "لم", "لن", "ما", "قد", "سوف", "سـ", "كل",
            "بعض", "كثير", "قليل", "جدا", "جداً", "فقط", "أيضا", "ايضا",
            // Conjugated common verbs
            "كان", "كانت", "يكون", "تكون", "كانوا", "يكونون", "هناك",
            "صار", "أصبح", "اصبح", "بات", "ظل", "مازال",
            // Saudi/Gulf dialect
            "وش", "ايش", "ليش", "كيف", "متى", "وين", "منو", "شنو",
            "مو", "مب", "بس", "يعني", "طيب", "زين", "اوكي", "خلاص",
            "اللي", "اللى", "الي", "اله", "له", "لها", "لهم", "عليه", "عليها",
            "فيه", "فيها", "منه", "منها", "بعد", "قبل",
            // Fillers
            "يا", "ياء", "آه", "اه", "والله", "هاه",
            // Platform shorthand
            "rt", "via", "cc", "dm",
        ];
        let generic_terms = ["الله", "الناس", "اليوم", "الحين", "شي", "اكثر", "كلام"];

        Self::new(
            stop_words.iter().map(|w| w.to_string()).collect(),
            generic_terms.iter().map(|w| w.to_string()).collect(),
        )
    }
}
