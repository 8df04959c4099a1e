//! # Word Spanning
//!
//! Splits raw text into word-like units ahead of segmentation and
//! training; and protects special tokens from being split.

use std::sync::LazyLock;

use compact_str::{CompactString, ToCompactString};
use regex::Regex;

/// The word split pattern: maximal alphanumeric/underscore runs,
/// or single non-word, non-space characters.
pub const WORD_PATTERN: &str = r"\w+|[^\w\s]";

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("word pattern compilation failed"));

/// Split text into case-folded word units.
///
/// Deterministic and total; empty input yields an empty vector.
///
/// ## Arguments
/// * `text` - The text to split.
///
/// ## Returns
/// The lowercased word units, in text order.
pub fn split_words(text: &str) -> Vec<CompactString> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_compact_string())
        .collect()
}

/// A span of input text, as carved up by [`SpecialSplitter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSpan<'a> {
    /// A verbatim special token occurrence.
    Special(&'a str),

    /// A run of ordinary text between special tokens.
    Plain(&'a str),
}

/// Splits text into special-token spans and plain spans.
///
/// Special tokens are matched verbatim (no case folding), longest
/// alternative first, so they are never broken up by word splitting.
#[derive(Clone, Debug, Default)]
pub struct SpecialSplitter {
    special_re: Option<Regex>,
}

impl SpecialSplitter {
    /// Create a splitter for the given special tokens.
    ///
    /// ## Arguments
    /// * `special_tokens` - The special token strings to protect.
    ///
    /// ## Returns
    /// A new `SpecialSplitter` instance.
    pub fn new<S: AsRef<str>>(special_tokens: &[S]) -> Self {
        if special_tokens.is_empty() {
            return Self { special_re: None };
        }

        let mut alts = special_tokens
            .iter()
            .map(|s| regex::escape(s.as_ref()))
            .collect::<Vec<_>>();

        // The regex crate uses leftmost-first alternation; longer
        // alternatives must come first to win over their prefixes.
        alts.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let pattern = alts.join("|");
        let special_re = Regex::new(&pattern).expect("special pattern compilation failed");

        Self {
            special_re: Some(special_re),
        }
    }

    /// Split text into [`TextSpan`]s.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// The spans, in text order; empty plain runs are skipped.
    pub fn split<'a>(
        &self,
        text: &'a str,
    ) -> Vec<TextSpan<'a>> {
        let Some(re) = &self.special_re else {
            if text.is_empty() {
                return Vec::new();
            }
            return vec![TextSpan::Plain(text)];
        };

        let mut spans = Vec::new();
        let mut last = 0;
        for m in re.find_iter(text) {
            if last < m.start() {
                spans.push(TextSpan::Plain(&text[last..m.start()]));
            }
            spans.push(TextSpan::Special(m.as_str()));
            last = m.end();
        }
        if last < text.len() {
            spans.push(TextSpan::Plain(&text[last..]));
        }
        spans
    }
}
