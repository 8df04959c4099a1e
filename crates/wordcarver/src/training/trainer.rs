//! # `WordPiece` Trainer
//!
//! Builds a piece vocabulary by iteratively merging the adjacent piece
//! pair with the highest likelihood score:
//!
//! ```text
//! score(a, b) = pair_freq(a, b) / (piece_freq(a) * piece_freq(b))
//! ```
//!
//! Ties are broken to the lexicographically smallest pair, which makes
//! merge selection independent of hash map iteration order.

use compact_str::{CompactString, format_compact};

use crate::errors::WvResult;
use crate::tokenizer::{
    CONTINUATION_MARKER, DEFAULT_MAX_CHARS_PER_WORD, DEFAULT_SPECIAL_TOKENS, WordPieceTokenizer,
};
use crate::training::WordCounter;
use crate::types::{TokenType, WvHashMap};
use crate::vocab::PieceVocab;

/// A pair of adjacent pieces in a word split.
pub type PiecePair = (CompactString, CompactString);

/// Options for [`WordPieceTrainer`].
#[derive(Debug, Clone)]
pub struct WordPieceTrainerOptions {
    /// The target vocabulary size.
    pub vocab_size: usize,

    /// The special tokens, seeded at the lowest ids in this order.
    pub special_tokens: Vec<CompactString>,

    /// The per-word character threshold for the built tokenizer.
    pub max_chars_per_word: usize,
}

impl WordPieceTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `vocab_size` - The target vocabulary size.
    ///
    /// ## Returns
    /// A new `WordPieceTrainerOptions` instance with the default
    /// special tokens.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            special_tokens: DEFAULT_SPECIAL_TOKENS
                .iter()
                .map(|&s| CompactString::from(s))
                .collect(),
            max_chars_per_word: DEFAULT_MAX_CHARS_PER_WORD,
        }
    }

    /// Sets the vocab size.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the special tokens.
    ///
    /// ## Arguments
    /// * `special_tokens` - The special tokens, in id order.
    ///
    /// ## Returns
    /// The updated `WordPieceTrainerOptions` instance.
    pub fn with_special_tokens<I, S>(
        self,
        special_tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            special_tokens: special_tokens
                .into_iter()
                .map(|s| CompactString::from(s.as_ref()))
                .collect(),
            ..self
        }
    }

    /// Sets the per-word character threshold of the built tokenizer.
    pub fn with_max_chars_per_word(
        self,
        max_chars_per_word: usize,
    ) -> Self {
        Self {
            max_chars_per_word,
            ..self
        }
    }

    /// Initializes a [`WordPieceTrainer`] from these options.
    pub fn init(self) -> WordPieceTrainer {
        WordPieceTrainer::new(self)
    }
}

impl Default for WordPieceTrainerOptions {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// Trainer for learning `WordPiece` vocabularies.
#[derive(Debug, Clone, Default)]
pub struct WordPieceTrainer {
    /// Trainer options.
    pub options: WordPieceTrainerOptions,

    /// The corpus word counter.
    pub word_counter: WordCounter,
}

impl WordPieceTrainer {
    /// Initializes a [`WordPieceTrainer`].
    ///
    /// ## Arguments
    /// * `options` - The trainer options.
    ///
    /// ## Returns
    /// A new `WordPieceTrainer` instance.
    pub fn new(options: WordPieceTrainerOptions) -> Self {
        Self {
            options,
            word_counter: WordCounter::new(),
        }
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like samples.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.word_counter.update_from_samples(samples);
    }

    /// Trains a [`WordPieceTokenizer<T>`].
    ///
    /// Seeds the vocabulary with the special tokens and the initial
    /// character pieces, then merges the best-scoring adjacent pair
    /// until the vocabulary is full or no candidate remains.
    ///
    /// ## Returns
    /// A `Result` containing the `WordPieceTokenizer<T>`, or
    /// `VocabSizeOverflow` if the vocabulary does not fit `T`.
    pub fn train<T: TokenType>(self) -> WvResult<WordPieceTokenizer<T>> {
        let WordPieceTrainer {
            options,
            word_counter,
        } = self;

        log::info!(
            "Starting WordPiece training: {} distinct words, target vocab size {}",
            word_counter.len(),
            options.vocab_size
        );

        let mut vocab: PieceVocab<T> = PieceVocab::new();
        for special in &options.special_tokens {
            vocab.add_piece(special)?;
        }

        let (words, word_counts) = word_counter.into_parts();

        // Initial splits: one char per piece, continuation-marked off
        // the word start. Registration scans words in first-seen order,
        // chars in word order.
        let mut splits: Vec<Vec<CompactString>> =
            words.iter().map(|word| word_to_pieces(word)).collect();
        for pieces in &splits {
            for piece in pieces {
                vocab.add_piece(piece)?;
            }
        }

        log::info!(
            "Seeded vocabulary: {} pieces ({} special)",
            vocab.len(),
            options.special_tokens.len()
        );

        let num_merges = options.vocab_size.saturating_sub(vocab.len());
        let mut merges_done = 0;
        let mut last_log_percent = 0;

        while vocab.len() < options.vocab_size {
            let Some(pair) = select_best_pair(&splits, &word_counts) else {
                // No more pairs to merge.
                break;
            };

            let merged = merge_piece_text(&pair.0, &pair.1);
            vocab.add_piece(&merged)?;
            apply_merge(&mut splits, &pair, &merged);

            merges_done += 1;

            // Log progress every 1%.
            let current_percent = (merges_done * 100) / num_merges;
            if current_percent > last_log_percent {
                log::info!(
                    "Progress: {}% ({}/{} merges) - Last merge: {:?} + {:?} -> {:?}",
                    current_percent,
                    merges_done,
                    num_merges,
                    pair.0,
                    pair.1,
                    merged
                );
                last_log_percent = current_percent;
            }
        }

        log::info!(
            "Finished training: {} merges completed, vocab size {}",
            merges_done,
            vocab.len()
        );

        Ok(WordPieceTokenizer::from_vocab(vocab, &options.special_tokens)
            .with_max_chars_per_word(options.max_chars_per_word))
    }
}

/// Build the initial char-level split for a word.
///
/// The first char is an initial piece; every subsequent char is a
/// continuation piece.
fn word_to_pieces(word: &str) -> Vec<CompactString> {
    let mut pieces = Vec::with_capacity(word.chars().count());
    for (idx, c) in word.chars().enumerate() {
        if idx == 0 {
            pieces.push(format_compact!("{c}"));
        } else {
            pieces.push(format_compact!("{CONTINUATION_MARKER}{c}"));
        }
    }
    pieces
}

/// Build the merged piece for a pair.
///
/// The first piece is kept verbatim; the second piece's continuation
/// marker is stripped. Marker status is inherited from the first piece
/// alone.
fn merge_piece_text(
    a: &str,
    b: &str,
) -> CompactString {
    format_compact!("{a}{}", b.strip_prefix(CONTINUATION_MARKER).unwrap_or(b))
}

/// Select the merge pair with the maximum likelihood score.
///
/// Piece and pair frequencies are fully recomputed from the current
/// splits, weighted by word corpus frequency. Ties on score resolve to
/// the lexicographically smallest pair.
///
/// ## Returns
/// The best pair, or `None` when no positively-scored pair remains.
fn select_best_pair(
    splits: &[Vec<CompactString>],
    word_counts: &[u64],
) -> Option<PiecePair> {
    let mut piece_freq: WvHashMap<&CompactString, u64> = WvHashMap::default();
    let mut pair_freq: WvHashMap<(&CompactString, &CompactString), u64> = WvHashMap::default();

    for (pieces, &count) in splits.iter().zip(word_counts) {
        for piece in pieces {
            *piece_freq.entry(piece).or_default() += count;
        }
        for window in pieces.windows(2) {
            *pair_freq.entry((&window[0], &window[1])).or_default() += count;
        }
    }

    let mut best: Option<(f64, (&CompactString, &CompactString))> = None;
    for (&pair, &count) in &pair_freq {
        let a_freq = piece_freq.get(&pair.0).copied().unwrap_or(0);
        let b_freq = piece_freq.get(&pair.1).copied().unwrap_or(0);
        let denom = a_freq * b_freq;
        if denom == 0 {
            continue;
        }
        let score = count as f64 / denom as f64;

        let better = match &best {
            None => true,
            Some((best_score, best_pair)) => {
                score > *best_score || (score == *best_score && pair < *best_pair)
            }
        };
        if better {
            best = Some((score, pair));
        }
    }

    best.map(|(_, (a, b))| (a.clone(), b.clone()))
}

/// Rewrite every split, replacing adjacent occurrences of `pair` with
/// `merged` in a single left-to-right, non-overlapping pass.
fn apply_merge(
    splits: &mut [Vec<CompactString>],
    pair: &PiecePair,
    merged: &CompactString,
) {
    for pieces in splits.iter_mut() {
        let mut out = Vec::with_capacity(pieces.len());
        let mut idx = 0;
        while idx < pieces.len() {
            if idx + 1 < pieces.len() && pieces[idx] == pair.0 && pieces[idx + 1] == pair.1 {
                out.push(merged.clone());
                idx += 2;
            } else {
                out.push(pieces[idx].clone());
                idx += 1;
            }
        }
        *pieces = out;
    }
}
