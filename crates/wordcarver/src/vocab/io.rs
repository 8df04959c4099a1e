//! # Vocabulary IO
//!
//! The canonical serialization is a plain UTF-8, newline-terminated,
//! one-piece-per-line file; the id of a piece is its zero-based line
//! position. Special tokens occupy the first lines in their configured
//! order.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::errors::{WordcarverError, WvResult};
use crate::types::TokenType;
use crate::vocab::PieceVocab;

/// Save a [`PieceVocab`] to a vocab file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_piece_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &PieceVocab<T>,
    path: P,
) -> WvResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_piece_vocab(vocab, &mut writer)
}

/// Save a [`PieceVocab`] to a [`Write`] writer.
pub fn write_piece_vocab<T, W>(
    vocab: &PieceVocab<T>,
    writer: &mut W,
) -> WvResult<()>
where
    T: TokenType,
    W: Write,
{
    for piece in vocab.iter_pieces() {
        writeln!(writer, "{piece}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Load a [`PieceVocab`] from a vocab file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_piece_vocab_path<T, P>(path: P) -> WvResult<PieceVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    read_piece_vocab(reader)
}

/// Read a [`PieceVocab`] from a [`BufRead`] line stream.
///
/// ## Arguments
/// * `reader` - the line reader.
///
/// ## Returns
/// The loaded vocabulary; `VocabConflict` on duplicate pieces, which
/// would corrupt the id mapping.
pub fn read_piece_vocab<T, R>(reader: R) -> WvResult<PieceVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut vocab = PieceVocab::new();
    for (line_no, line) in reader.lines().enumerate() {
        let piece = line?;
        if vocab.contains(&piece) {
            return Err(WordcarverError::VocabConflict(format!(
                "duplicate piece {piece:?} at line {line_no}"
            )));
        }
        vocab.add_piece(&piece)?;
    }
    Ok(vocab)
}
