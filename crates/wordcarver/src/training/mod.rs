//! # Vocabulary Training
//!
//! Induces a bounded piece vocabulary from a text corpus by iterative
//! frequency-scored pair merging.

pub mod trainer;
pub mod word_counter;

#[doc(inline)]
pub use trainer::{WordPieceTrainer, WordPieceTrainerOptions};
#[doc(inline)]
pub use word_counter::WordCounter;
