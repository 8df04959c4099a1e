//! # `wordcarver` `WordPiece` Tokenizer
//!
//! A subword tokenization library: a trainer that induces a bounded
//! vocabulary of subword pieces from a text corpus by iterative
//! frequency-scored merging, and a tokenizer that greedily segments
//! arbitrary text into those pieces and maps them to/from dense ids.
//!
//! See:
//! * [`training`] to train a [`WordPieceTokenizer`].
//! * [`tokenizer`] for segmentation, encode, and decode.
//! * [`vocab`] to manage piece vocabularies and vocab io.
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which
//! is a performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::WvHash{*}`` type alias machinery.
//!
//! #### feature: ``training``
//!
//! The training feature enables the vocabulary trainer.
//!
//! ## Example
//!
//! ```rust
//! use wordcarver::training::WordPieceTrainerOptions;
//! use wordcarver::WordPieceTokenizer;
//!
//! let mut trainer = WordPieceTrainerOptions::new(200).init();
//! trainer.update_from_samples(["low lower lowest", "new newest widest"]);
//!
//! let tokenizer: WordPieceTokenizer<u32> = trainer.train().unwrap();
//!
//! let ids = tokenizer.encode("lowest");
//! assert_eq!(tokenizer.decode(&ids), "lowest");
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "training")]
pub mod training;

pub mod errors;
pub mod spanning;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WordcarverError, WvResult};
#[doc(inline)]
pub use tokenizer::WordPieceTokenizer;
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::PieceVocab;
