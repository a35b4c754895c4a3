//! Static opening book: normalized FEN -> opening name and commentary.
//!
//! The book is loaded once at startup and shared read-only behind an `Arc`.
//! Two on-disk formats are supported: a JSON object keyed by FEN, and the same
//! map serialized with bincode (see `bin/pack_book.rs` in the server crate).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::BookError;
use crate::fen::normalize_fen;

/// A named opening or variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningEntry {
    pub name: String,
    /// `None` means no commentary; `Some("")` is still commentary.
    #[serde(default)]
    pub info: Option<String>,
}

impl OpeningEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            info: None,
        }
    }

    pub fn with_info(name: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            info: Some(info.into()),
        }
    }

    pub fn has_info(&self) -> bool {
        self.info.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<String, OpeningEntry>,
}

impl OpeningBook {
    /// Build a book, normalizing every key.
    /// Keys that collapse onto the same normalized FEN are rejected.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, BookError>
    where
        I: IntoIterator<Item = (K, OpeningEntry)>,
        K: AsRef<str>,
    {
        let mut map = HashMap::new();
        for (key, entry) in entries {
            let normalized = normalize_fen(key.as_ref());
            if entry.name.trim().is_empty() {
                return Err(BookError::EmptyName(normalized));
            }
            if map.insert(normalized.clone(), entry).is_some() {
                return Err(BookError::DuplicateKey(normalized));
            }
        }
        Ok(Self { entries: map })
    }

    pub fn from_json_str(json: &str) -> Result<Self, BookError> {
        let raw: BTreeMap<String, OpeningEntry> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, BookError> {
        let raw: BTreeMap<String, OpeningEntry> = serde_json::from_reader(reader)?;
        Self::from_entries(raw)
    }

    pub fn from_bincode_reader<R: Read>(reader: R) -> Result<Self, BookError> {
        let raw: HashMap<String, OpeningEntry> = bincode::deserialize_from(reader)?;
        Self::from_entries(raw)
    }

    /// Look up a position. Accepts either a full FEN or an already normalized key.
    pub fn lookup(&self, fen: &str) -> Option<&OpeningEntry> {
        self.entries.get(&normalize_fen(fen))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OpeningEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Load the book from disk, picking the format from the file extension.
pub fn load_book<P: AsRef<Path>>(path: P) -> Result<OpeningBook, BookError> {
    let path = path.as_ref();
    let open = || {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| BookError::Io {
                path: path.to_path_buf(),
                source,
            })
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => OpeningBook::from_json_reader(open()?),
        Some("bin") => OpeningBook::from_bincode_reader(open()?),
        _ => Err(BookError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Save the book to a binary file.
pub fn save_book<P: AsRef<Path>>(book: &OpeningBook, path: P) -> Result<(), BookError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| BookError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    bincode::serialize_into(file, &book.entries)?;
    Ok(())
}
