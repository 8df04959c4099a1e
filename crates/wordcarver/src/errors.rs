//! # Error Types

/// Errors from wordcarver operations.
#[derive(Debug, thiserror::Error)]
pub enum WordcarverError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for wordcarver operations.
pub type WvResult<T> = core::result::Result<T, WordcarverError>;
