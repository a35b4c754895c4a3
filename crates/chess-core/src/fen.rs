//! FEN helpers: parsing, serialization and the normalized book key.

use shakmaty::{fen::Fen, CastlingMode, Chess, EnPassantMode};

use crate::error::InvalidPositionError;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Strips en passant and move counters from FEN, keeping only position + side + castling.
///
/// Book keys are generated with the same truncation, so two positions that only
/// differ in en passant availability share a key.
pub fn normalize_fen(fen: &str) -> String {
    fen.split_whitespace().take(3).collect::<Vec<_>>().join(" ")
}

/// Parse a FEN string into a legal standard-chess position.
pub fn parse_position(fen: &str) -> Result<Chess, InvalidPositionError> {
    let trimmed = fen.trim();
    let parsed: Fen = trimmed
        .parse()
        .map_err(|e| InvalidPositionError::new(trimmed, e))?;
    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| InvalidPositionError::new(trimmed, e))
}

/// Full six-field FEN. The en passant square is only written when a capture is legal.
pub fn to_fen(pos: &Chess) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}
