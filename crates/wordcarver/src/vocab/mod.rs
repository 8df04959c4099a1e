//! # Vocabulary
//!
//! This module provides the piece vocabulary and related io mechanisms.
//!
//! The primary structure is [`PieceVocab`]: an ordered bidirectional
//! ``{ piece <-> id }`` map with dense, insertion-ordered ids.

pub mod io;
pub mod piece_vocab;

#[doc(inline)]
pub use piece_vocab::PieceVocab;
