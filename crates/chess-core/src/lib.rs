//! Opening classification core: FEN normalization, the opening book, and the classifier.

pub mod classifier;
pub mod error;
pub mod fen;
pub mod opening_book;
pub mod rules;

pub use classifier::{ClassificationResult, ClassifiedMove, OpeningClassifier};
pub use error::{BookError, InvalidPositionError};
pub use opening_book::{load_book, save_book, OpeningBook, OpeningEntry};
pub use rules::{PlayedMove, RulesEngine};
