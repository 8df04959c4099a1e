//! # Piece Vocabulary Index

use compact_str::{CompactString, ToCompactString};

use crate::errors::{WordcarverError, WvResult};
use crate::types::{TokenType, WvHashMap};

/// Ordered bidirectional ``{ piece <-> id }`` vocabulary.
///
/// Ids are dense and assigned in insertion order starting at 0;
/// the id of a piece is its position in the piece list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieceVocab<T: TokenType> {
    /// Pieces indexed by id.
    pieces: Vec<CompactString>,

    /// The reverse map of pieces to ids.
    index: WvHashMap<CompactString, T>,
}

impl<T: TokenType> PieceVocab<T> {
    /// Create a new empty vocab.
    pub fn new() -> Self {
        Self {
            pieces: Vec::new(),
            index: WvHashMap::default(),
        }
    }

    /// Add a piece to the vocab, if not already present.
    ///
    /// ## Arguments
    /// * `piece` - The piece string to add.
    ///
    /// ## Returns
    /// The id of the piece; the existing id if the piece was already
    /// present, or `VocabSizeOverflow` if the next id does not fit `T`.
    pub fn add_piece(
        &mut self,
        piece: &str,
    ) -> WvResult<T> {
        if let Some(&id) = self.index.get(piece) {
            return Ok(id);
        }

        let id = T::from_usize(self.pieces.len()).ok_or(WordcarverError::VocabSizeOverflow {
            size: self.pieces.len() + 1,
        })?;

        self.pieces.push(piece.to_compact_string());
        self.index.insert(piece.to_compact_string(), id);
        Ok(id)
    }

    /// Return the id for a piece, if any.
    pub fn lookup_id(
        &self,
        piece: &str,
    ) -> Option<T> {
        self.index.get(piece).copied()
    }

    /// Return the piece for an id, if any.
    pub fn lookup_piece(
        &self,
        id: T,
    ) -> Option<&str> {
        id.to_usize()
            .and_then(|idx| self.pieces.get(idx))
            .map(CompactString::as_str)
    }

    /// Check if the vocab contains a piece.
    pub fn contains(
        &self,
        piece: &str,
    ) -> bool {
        self.index.contains_key(piece)
    }

    /// Get the number of pieces in the vocab.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterate over pieces in id order.
    pub fn iter_pieces(&self) -> impl Iterator<Item = &str> {
        self.pieces.iter().map(CompactString::as_str)
    }

    /// Generate all ``(piece, id)`` pairs, in id order.
    pub fn piece_pairs(&self) -> impl Iterator<Item = (&str, T)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(idx, piece)| (piece.as_str(), T::from_usize(idx).unwrap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_vocab() {
        type T = u32;

        let mut vocab: PieceVocab<T> = PieceVocab::new();
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 0);

        assert_eq!(vocab.add_piece("[UNK]").unwrap(), 0);
        assert_eq!(vocab.add_piece("cat").unwrap(), 1);
        assert_eq!(vocab.add_piece("##s").unwrap(), 2);

        // Duplicate insertion never creates a second id.
        assert_eq!(vocab.add_piece("cat").unwrap(), 1);
        assert_eq!(vocab.len(), 3);

        assert_eq!(vocab.lookup_id("##s"), Some(2));
        assert_eq!(vocab.lookup_id("dog"), None);
        assert_eq!(vocab.lookup_piece(1), Some("cat"));
        assert_eq!(vocab.lookup_piece(9), None);
        assert!(vocab.contains("[UNK]"));

        assert_eq!(
            vocab.iter_pieces().collect::<Vec<_>>(),
            vec!["[UNK]", "cat", "##s"]
        );
        assert_eq!(
            vocab.piece_pairs().collect::<Vec<_>>(),
            vec![("[UNK]", 0), ("cat", 1), ("##s", 2)]
        );
    }

    #[test]
    fn test_piece_vocab_overflow() {
        type T = u8;

        let mut vocab: PieceVocab<T> = PieceVocab::new();
        for i in 0..=u8::MAX as usize {
            vocab.add_piece(&format!("p{i}")).unwrap();
        }

        assert!(matches!(
            vocab.add_piece("overflow"),
            Err(crate::errors::WordcarverError::VocabSizeOverflow { size: 257 })
        ));
    }
}
