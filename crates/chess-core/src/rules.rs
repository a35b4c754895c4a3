//! The rules-engine seam used by the classifier.
//!
//! The classifier never mutates the position it was handed: `apply_move` plays
//! a move on a copy and returns the copy, so there is no undo step to get wrong.

use shakmaty::{san::SanPlus, Chess, File, Move, Position, Square};

use crate::error::InvalidPositionError;
use crate::fen;

/// Result of playing one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    /// SAN including the check or mate suffix, e.g. "Bb5+".
    pub san: String,
    pub from: String,
    /// For castling this is the king's destination square.
    pub to: String,
}

pub trait RulesEngine: Sized {
    type Move;

    fn parse_fen(fen: &str) -> Result<Self, InvalidPositionError>;

    /// Legal moves in the engine's enumeration order. Must be stable for a given position.
    fn candidate_moves(&self) -> Vec<Self::Move>;

    /// Play `mv` on a copy of this position.
    /// Returns `None` if the engine refuses the move.
    fn apply_move(&self, mv: &Self::Move) -> Option<(Self, PlayedMove)>;

    fn serialize_fen(&self) -> String;
}

impl RulesEngine for Chess {
    type Move = Move;

    fn parse_fen(input: &str) -> Result<Self, InvalidPositionError> {
        fen::parse_position(input)
    }

    fn candidate_moves(&self) -> Vec<Move> {
        self.legal_moves().into_iter().collect()
    }

    fn apply_move(&self, mv: &Move) -> Option<(Self, PlayedMove)> {
        let after = self.clone().play(mv.clone()).ok()?;
        let san = SanPlus::from_move(self.clone(), mv.clone());

        let (from, to) = move_squares(mv)?;
        let played = PlayedMove {
            san: san.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        };
        Some((after, played))
    }

    fn serialize_fen(&self) -> String {
        fen::to_fen(self)
    }
}

/// Origin and destination squares as a front-end would draw them.
/// shakmaty encodes castling as king-takes-rook; report the king's landing square instead.
fn move_squares(mv: &Move) -> Option<(Square, Square)> {
    match mv {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() { File::G } else { File::C };
            Some((*king, Square::from_coords(file, king.rank())))
        }
        _ => Some((mv.from()?, mv.to())),
    }
}
