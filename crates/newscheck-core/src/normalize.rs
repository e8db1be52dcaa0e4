//! Text normalisation for article classification.
//!
//! Converts raw pasted article text into the canonical cleaned form the
//! scoring artifact was trained on: lowercase, single-spaced, free of HTML
//! tags, URLs, punctuation, and digit-bearing tokens.
//!
//! The step order is fixed; later steps assume earlier ones ran. Punctuation
//! is replaced before digit-token removal, so `report-123` keeps `report`
//! while `report123` is dropped wholesale.

use std::sync::LazyLock;

use regex::Regex;

static NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::new);

/// Normalise `text` using the shared, process-wide [`Normalizer`].
///
/// Pure and deterministic; idempotent under re-application.
pub fn normalize(text: &str) -> String {
    NORMALIZER.run(text)
}

/// Compiled cleaning patterns, built once and shared read-only.
pub struct Normalizer {
    html_tag: Regex,
    url: Regex,
    punct: Regex,
    digit_token: Regex,
    whitespace: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            // Angle-bracket delimited, non-greedy, zero-width content allowed.
            html_tag: Regex::new(r"<[^>]*>").expect("valid html pattern"),
            // Scheme or bare www prefix, through the next whitespace run.
            url: Regex::new(r"(?:https?://|www\.)\S+").expect("valid url pattern"),
            punct: Regex::new(r"[[:punct:]]").expect("valid punct pattern"),
            // Maximal word-character run containing at least one digit.
            digit_token: Regex::new(r"\w*\d\w*").expect("valid digit-token pattern"),
            whitespace: Regex::new(r"\s+").expect("valid whitespace pattern"),
        }
    }

    /// Run the full cleaning pipeline.
    ///
    /// 1. Lowercase.
    /// 2. Newlines to spaces, trim ends.
    /// 3. Strip HTML-tag-like substrings.
    /// 4. Strip URL-like tokens.
    /// 5. Punctuation to spaces.
    /// 6. Drop digit-bearing tokens wholesale.
    /// 7. Collapse whitespace runs to single spaces, trim ends.
    pub fn run(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let flat = lowered.replace('\n', " ");
        let flat = flat.trim();

        let no_html = self.html_tag.replace_all(flat, "");
        let no_urls = self.url.replace_all(&no_html, "");
        let no_punct = self.punct.replace_all(&no_urls, " ");
        let no_digit_tokens = self.digit_token.replace_all(&no_punct, "");
        let collapsed = self.whitespace.replace_all(&no_digit_tokens, " ");

        collapsed.trim().to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
