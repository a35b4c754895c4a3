#![allow(dead_code)]

use chess_core::{load_book, OpeningClassifier};
use reqwest::Client;
use server::app::build_router;
use server::config::Config;
use std::path::PathBuf;
use std::sync::Arc;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Path to the opening book shipped with the repository.
pub fn book_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/openings.json")
}

/// A classifier over the bundled book.
pub fn bundled_classifier() -> OpeningClassifier {
    let book = load_book(book_path()).expect("bundled book should load");
    OpeningClassifier::new(Arc::new(book))
}

/// Start the full router on an ephemeral port and return its base URL.
pub async fn spawn_server() -> String {
    let app = build_router(Arc::new(bundled_classifier()), &Config::default())
        .expect("router should build");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });
    format!("http://{addr}")
}

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

/// Percent-encode a FEN for use as a single path segment.
pub fn encode_fen(fen: &str) -> String {
    fen.replace('/', "%2F").replace(' ', "%20")
}
