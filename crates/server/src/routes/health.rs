use axum::{Extension, Json};
use chess_core::OpeningClassifier;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// GET /health
pub async fn health_check(
    Extension(classifier): Extension<Arc<OpeningClassifier>>,
) -> Json<JsonValue> {
    Json(serde_json::json!({
        "status": "ok",
        "openings": classifier.book().len(),
    }))
}
