//! The raw MIME database: MIME type definitions keyed by `type/subtype`.
//!
//! The on-disk format is the one used by the [`mime-db`] project, a JSON
//! object keyed by MIME type:
//!
//! ```json
//! {
//!   "application/json": {
//!     "source": "iana",
//!     "charset": "UTF-8",
//!     "compressible": true,
//!     "extensions": ["json", "map"]
//!   }
//! }
//! ```
//!
//! A snapshot of roughly 2,300 types ships with the crate, see
//! [`Database::bundled`].
//!
//! [`mime-db`]: https://github.com/jshttp/mime-db

mod assets;
mod entry;
pub mod error;

pub use crate::assets::BUNDLED_DATABASE;
pub use crate::entry::Entry;
pub use mimer_score::Source;

use crate::assets::Builtins;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::collections::BTreeMap;
use std::collections::btree_map::Iter as MapIter;
use std::path::Path;
use tracing::instrument;

/// An immutable-by-convention collection of MIME type [`Entry`]s.
///
/// Keys are trimmed and lower-cased on insertion. Iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    entries: BTreeMap<String, Entry>,
}
impl Database {
    /// Load the database snapshot bundled with this crate.
    #[instrument(level = "debug")]
    pub fn bundled() -> Result<Self> {
        let json = Builtins::load(BUNDLED_DATABASE)?;
        Self::parse(&json, &Builtins::identifier(BUNDLED_DATABASE))
    }

    /// Parse a `mime-db` formatted JSON document.
    ///
    /// ```
    /// use mimer_db::{Database, Source};
    /// let db = Database::from_json(r#"{"text/html":{"source":"iana","extensions":["html","htm"]}}"#).unwrap();
    /// assert_eq!(db.source("text/html"), Some(Source::Iana));
    /// assert_eq!(db.get("text/html").unwrap().extensions, ["html", "htm"]);
    /// ```
    pub fn from_json(json: impl AsRef<[u8]>) -> Result<Self> {
        Self::parse(json.as_ref(), "inline")
    }

    /// Read and parse a `mime-db` formatted JSON file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read(path).or_raise(|| ErrorKind::Io(path.to_path_buf()))?;
        let db = Self::parse(&json, &path.display().to_string())?;
        tracing::info!(path = %path.display(), entries = db.len(), "Loaded MIME database from file");
        Ok(db)
    }

    fn parse(json: &[u8], origin: &str) -> Result<Self> {
        let entries: BTreeMap<String, Entry> =
            serde_json::from_slice(json).or_raise(|| ErrorKind::InvalidDatabase(origin.to_string()))?;
        Ok(entries.into_iter().collect())
    }

    /// Add or replace the definition of a MIME type, returning the previous one.
    pub fn insert(&mut self, mime_type: impl AsRef<str>, entry: Entry) -> Option<Entry> {
        self.entries.insert(normalize(mime_type.as_ref()), entry)
    }

    /// Layer another database on top of this one. Definitions in `other`
    /// replace definitions of the same MIME type in `self`.
    pub fn merge(&mut self, other: Database) {
        self.entries.extend(other.entries);
    }

    /// Look up the definition of a MIME type. The type must already be
    /// lower-case.
    pub fn get(&self, mime_type: &str) -> Option<&Entry> {
        self.entries.get(mime_type)
    }

    /// Provenance of a MIME type, if it is defined and has one.
    pub fn source(&self, mime_type: &str) -> Option<Source> {
        self.get(mime_type).and_then(|entry| entry.source)
    }

    pub fn contains(&self, mime_type: &str) -> bool {
        self.entries.contains_key(mime_type)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(mime_type: &str) -> String {
    mime_type.trim().to_lowercase()
}

impl<K: AsRef<str>> FromIterator<(K, Entry)> for Database {
    fn from_iter<I: IntoIterator<Item = (K, Entry)>>(iter: I) -> Self {
        let mut db = Self::default();
        db.extend(iter);
        db
    }
}
impl<K: AsRef<str>> Extend<(K, Entry)> for Database {
    fn extend<I: IntoIterator<Item = (K, Entry)>>(&mut self, iter: I) {
        for (mime_type, entry) in iter {
            self.insert(mime_type, entry);
        }
    }
}

/// Iterator over `(mime_type, entry)` pairs of a [`Database`], in key order.
pub struct Iter<'a> {
    inner: MapIter<'a, String, Entry>,
}
impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Entry);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k.as_str(), v))
    }
}
impl ExactSizeIterator for Iter<'_> {}
impl<'a> IntoIterator for &'a Database {
    type Item = (&'a str, &'a Entry);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
