use axum::{extract::Path, Extension, Json};
use chess_core::{ClassificationResult, OpeningClassifier};
use std::sync::Arc;

use crate::error::AppError;

/// GET /openings/{*fen}
/// Opening name of the position plus every legal move that leads into the book.
/// The FEN may be percent-encoded or sent with raw slashes.
pub async fn get_openings(
    Extension(classifier): Extension<Arc<OpeningClassifier>>,
    Path(fen): Path<String>,
) -> Result<Json<ClassificationResult>, AppError> {
    let result = classifier.classify(&fen).map_err(|e| {
        tracing::info!(fen = %fen, "Rejected position: {}", e.reason);
        e
    })?;
    Ok(Json(result))
}
