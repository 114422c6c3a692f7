//! Text normalization
//!
//! Deterministic cleanup applied to the concatenated page + document text
//! before it is stored in a content record. Order of operations matters for
//! overlapping matches and mirrors the removal sequence the extractors
//! depend on: URLs first (so an address like `https://a.gov/x@y` is eaten as
//! a URL, not an email), then emails, stray `None` markers, whitespace
//! collapsing, and oversized garbage tokens.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// URL-shaped tokens: scheme://non-whitespace-run
    static ref URL_RE: Regex = Regex::new(r"(?i)[a-z][a-z0-9+.-]*://\S+").unwrap();

    /// Email-shaped tokens
    static ref EMAIL_RE: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();

    /// Any whitespace run, including newlines and tabs
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();

    /// Whitespace-delimited tokens of 50+ characters: extraction garbage
    /// such as encoded binary or hashes
    static ref LONG_TOKEN_RE: Regex = Regex::new(r"\S{50,}").unwrap();
}

/// Normalizes extracted text into its canonical stored form
///
/// Pure and idempotent: `normalize(normalize(x)) == normalize(x)`. Steps,
/// in order:
/// 1. remove URL-shaped tokens
/// 2. remove email-shaped tokens
/// 3. remove literal stray "None" substrings (upstream missing-value
///    stringification artifact), repeating until none remain since a
///    removal can splice a fresh "None" out of surrounding fragments
/// 4. collapse whitespace runs to single spaces
/// 5. remove whitespace-delimited tokens of 50+ characters
/// 6. collapse again (step 5 can leave doubled spaces) and trim
pub fn normalize(raw: &str) -> String {
    let text = URL_RE.replace_all(raw, "");
    let text = EMAIL_RE.replace_all(&text, "");
    let mut text = text.into_owned();
    while text.contains("None") {
        text = text.replace("None", "");
    }
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = LONG_TOKEN_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
