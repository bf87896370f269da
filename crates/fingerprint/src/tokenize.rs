use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").unwrap());
// Whitespace plus Arabic and Latin sentence punctuation. `#` is a separator
// here so hashtag bodies also feed the unigram counts.
static SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\s،.!؟:؛…\-_()\[\]«»"'#,;?]+"#).unwrap());

/// Removes URLs and @-mentions. Hashtags stay in place; their bodies are
/// tokenized like any other word and counted separately by
/// [`extract_hashtags`].
pub fn strip_noise(text: &str) -> String {
    let without_urls = URL_RE.replace_all(text, "");
    MENTION_RE.replace_all(&without_urls, "").trim().to_string()
}

/// Splits on whitespace and punctuation, discarding tokens of one character
/// or less.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = strip_noise(text);
    SPLIT_RE
        .split(&cleaned)
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Hashtag bodies in raw text, marker stripped, in order of appearance.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_RE
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_urls_and_mentions() {
        let text = "شوفوا المقطع https://t.co/abc123 عند @abu_fahad الآن";
        let cleaned = strip_noise(text);
        assert!(!cleaned.contains("https"));
        assert!(!cleaned.contains("abu_fahad"));
        assert!(cleaned.contains("المقطع"));
    }

    #[test]
    fn splits_on_arabic_punctuation() {
        let tokens = tokenize("وش صار؟ مضاربة، عنف!");
        assert_eq!(tokens, vec!["وش", "صار", "مضاربة", "عنف"]);
    }

    #[test]
    fn drops_single_char_tokens() {
        let tokens = tokenize("و مضاربة في حي النسيم");
        assert!(!tokens.contains(&"و".to_string()));
        assert!(tokens.contains(&"مضاربة".to_string()));
    }

    #[test]
    fn hashtag_bodies_become_tokens() {
        // Underscores separate, so compound tags contribute their words.
        let tokens = tokenize("ترند #مضاربة_النسيم الحين");
        assert!(tokens.contains(&"مضاربة".to_string()));
        assert!(tokens.contains(&"النسيم".to_string()));
    }

    #[test]
    fn extracts_hashtags_without_marker() {
        let tags = extract_hashtags("انتشر #مضاربة_النسيم و #الرياض الآن");
        assert_eq!(tags, vec!["مضاربة_النسيم", "الرياض"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(extract_hashtags("").is_empty());
    }
}
