//! Opening classification for a position and its one-ply continuations.

use serde::{Deserialize, Serialize};
use shakmaty::Chess;
use std::sync::Arc;

use crate::error::InvalidPositionError;
use crate::opening_book::{OpeningBook, OpeningEntry};
use crate::rules::RulesEngine;

/// A legal continuation that lands in a known opening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedMove {
    pub san: String,
    pub from: String,
    pub to: String,
    pub name: String,
    #[serde(rename = "hasInfo")]
    pub has_info: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub current_opening_name: Option<String>,
    pub current_opening_info: Option<String>,
    /// In the rules engine's move generation order.
    pub moves: Vec<ClassifiedMove>,
}

/// Classifies positions against an injected opening book.
///
/// Holds no per-request state; share one instance across requests.
#[derive(Debug, Clone)]
pub struct OpeningClassifier {
    book: Arc<OpeningBook>,
}

impl OpeningClassifier {
    pub fn new(book: Arc<OpeningBook>) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &OpeningBook {
        &self.book
    }

    /// Parse `fen` into a fresh position and classify it along with every legal continuation.
    pub fn classify(&self, fen: &str) -> Result<ClassificationResult, InvalidPositionError> {
        let pos = Chess::parse_fen(fen)?;
        Ok(self.classify_with_engine(&pos))
    }

    pub fn classify_with_engine<E: RulesEngine>(&self, pos: &E) -> ClassificationResult {
        let current = self.classify_position(pos);
        let moves = self.classify_continuations(pos);

        tracing::debug!(
            opening = current.map(|e| e.name.as_str()).unwrap_or("-"),
            book_moves = moves.len(),
            "classified position"
        );

        ClassificationResult {
            current_opening_name: current.map(|e| e.name.clone()),
            current_opening_info: current.and_then(|e| e.info.clone()),
            moves,
        }
    }

    /// The opening the position itself belongs to, if it is in the book.
    pub fn classify_position<E: RulesEngine>(&self, pos: &E) -> Option<&OpeningEntry> {
        self.book.lookup(&pos.serialize_fen())
    }

    /// Every legal move whose resulting position is in the book.
    /// Moves the engine refuses to play are skipped; later moves are still evaluated.
    pub fn classify_continuations<E: RulesEngine>(&self, pos: &E) -> Vec<ClassifiedMove> {
        let mut classified = Vec::new();

        for mv in pos.candidate_moves() {
            let Some((after, played)) = pos.apply_move(&mv) else {
                tracing::debug!(fen = %pos.serialize_fen(), "engine refused a generated move, skipping");
                continue;
            };

            if let Some(entry) = self.book.lookup(&after.serialize_fen()) {
                classified.push(ClassifiedMove {
                    san: played.san,
                    from: played.from,
                    to: played.to,
                    name: entry.name.clone(),
                    has_info: entry.has_info(),
                });
            }
        }

        classified
    }
}
