//! # `WordPiece` Tokenizer
//!
//! Greedy longest-match segmentation over a frozen [`PieceVocab`].
//!
//! All runtime operations are total: input that cannot be matched
//! degrades to the unknown token rather than failing.

use compact_str::{CompactString, ToCompactString, format_compact};

use crate::spanning::{SpecialSplitter, TextSpan, split_words};
use crate::types::TokenType;
use crate::vocab::PieceVocab;

/// The reserved marker prefix for continuation pieces.
pub const CONTINUATION_MARKER: &str = "##";

/// The unknown token.
pub const UNKNOWN_TOKEN: &str = "[UNK]";

/// The default special tokens, in id order.
pub const DEFAULT_SPECIAL_TOKENS: &[&str] = &["[PAD]", "[UNK]", "[CLS]", "[SEP]", "[MASK]"];

/// The default per-word character threshold for segmentation.
///
/// Words longer than this are mapped to the unknown token without
/// scanning, bounding the cost of pathological inputs.
pub const DEFAULT_MAX_CHARS_PER_WORD: usize = 100;

/// `WordPiece` tokenizer over a frozen piece vocabulary.
///
/// Produced by [`crate::training::WordPieceTrainer`], or rebuilt from a
/// loaded vocabulary with [`WordPieceTokenizer::from_vocab`].
#[derive(Debug, Clone)]
pub struct WordPieceTokenizer<T: TokenType> {
    vocab: PieceVocab<T>,
    splitter: SpecialSplitter,
    unknown_id: T,
    max_chars_per_word: usize,
}

impl<T: TokenType> WordPieceTokenizer<T> {
    /// Create a tokenizer from a finalized vocabulary.
    ///
    /// ## Arguments
    /// * `vocab` - The piece vocabulary.
    /// * `special_tokens` - The special tokens to protect from splitting.
    ///
    /// ## Returns
    /// A new `WordPieceTokenizer` instance; the unknown id falls back to
    /// 0 if `[UNK]` is not in the vocabulary.
    pub fn from_vocab<S: AsRef<str>>(
        vocab: PieceVocab<T>,
        special_tokens: &[S],
    ) -> Self {
        let splitter = SpecialSplitter::new(special_tokens);
        let unknown_id = vocab.lookup_id(UNKNOWN_TOKEN).unwrap_or_else(T::zero);

        Self {
            vocab,
            splitter,
            unknown_id,
            max_chars_per_word: DEFAULT_MAX_CHARS_PER_WORD,
        }
    }

    /// Sets the per-word character threshold.
    pub fn with_max_chars_per_word(
        self,
        max_chars_per_word: usize,
    ) -> Self {
        Self {
            max_chars_per_word,
            ..self
        }
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &PieceVocab<T> {
        &self.vocab
    }

    /// Get the unknown token id.
    pub fn unknown_id(&self) -> T {
        self.unknown_id
    }

    /// Get the number of pieces in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Tokenize text into pieces.
    ///
    /// Special tokens pass through verbatim; every other word unit is
    /// segmented by greedy longest match, degrading to `[UNK]` when no
    /// segmentation exists.
    ///
    /// ## Arguments
    /// * `text` - The text to tokenize.
    ///
    /// ## Returns
    /// The pieces, in text order.
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<CompactString> {
        let mut tokens = Vec::new();
        for span in self.splitter.split(text) {
            match span {
                TextSpan::Special(special) => tokens.push(special.to_compact_string()),
                TextSpan::Plain(plain) => {
                    for word in split_words(plain) {
                        self.tokenize_word(&word, &mut tokens);
                    }
                }
            }
        }
        tokens
    }

    /// Encode text into token ids.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The ids of the tokenized pieces; pieces absent from the
    /// vocabulary map to the unknown id.
    pub fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.tokenize(text)
            .iter()
            .map(|piece| self.vocab.lookup_id(piece).unwrap_or(self.unknown_id))
            .collect()
    }

    /// Batch version of [`Self::encode`].
    pub fn encode_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text.as_ref())).collect()
    }

    /// Decode token ids back into text.
    ///
    /// Continuation pieces have their marker stripped and concatenate
    /// directly onto the preceding output; other pieces are preceded by
    /// a single space unless first. Unmapped ids decode as `[UNK]`.
    ///
    /// ## Arguments
    /// * `ids` - The token ids to decode.
    ///
    /// ## Returns
    /// The reconstructed text.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> String {
        let mut out = String::new();
        for &id in ids {
            let piece = self.vocab.lookup_piece(id).unwrap_or(UNKNOWN_TOKEN);
            if let Some(rest) = piece.strip_prefix(CONTINUATION_MARKER) {
                out.push_str(rest);
            } else {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(piece);
            }
        }
        out
    }

    /// Batch version of [`Self::decode`].
    pub fn decode_batch(
        &self,
        batch: &[&[T]],
    ) -> Vec<String> {
        batch.iter().map(|ids| self.decode(ids)).collect()
    }

    /// Segment one word unit, appending to `out`.
    ///
    /// A word with no full segmentation contributes exactly one `[UNK]`;
    /// partial piece runs are discarded.
    fn tokenize_word(
        &self,
        word: &str,
        out: &mut Vec<CompactString>,
    ) {
        if word.chars().count() > self.max_chars_per_word {
            out.push(UNKNOWN_TOKEN.to_compact_string());
            return;
        }

        let mut pieces: Vec<CompactString> = Vec::new();
        let mut start = 0;
        while start < word.len() {
            let mut end = word.len();
            let mut matched = false;
            while start < end {
                let candidate = if start == 0 {
                    (&word[start..end]).to_compact_string()
                } else {
                    format_compact!("{CONTINUATION_MARKER}{}", &word[start..end])
                };
                if self.vocab.contains(&candidate) {
                    pieces.push(candidate);
                    start = end;
                    matched = true;
                    break;
                }
                // Shrink the candidate by one character from the end.
                end = word[..end]
                    .char_indices()
                    .next_back()
                    .map(|(idx, _)| idx)
                    .unwrap_or(start);
            }
            if !matched {
                out.push(UNKNOWN_TOKEN.to_compact_string());
                return;
            }
        }
        out.append(&mut pieces);
    }
}
