//! Conflict-free lookups between MIME types and file extensions.
//!
//! [`MimeTypes`] takes a raw [`Database`] of MIME type definitions and derives
//! an [`Index`] of three lookup tables from it, resolving every case where
//! several types claim the same extension using the scores from
//! [`mimer_score`]. The tables are built once and never change afterwards.
//!
//! ```
//! use mimer_index::MimeTypes;
//! let mime = MimeTypes::bundled().unwrap();
//! // extension → MIME type
//! assert_eq!(mime.mime("video.mp4"), Some("video/mp4"));
//! // extension → every MIME type, best first
//! assert_eq!(mime.mimes("mp4").unwrap(), ["video/mp4", "application/mp4"]);
//! // MIME type → extensions, best first
//! assert_eq!(mime.extensions("image/jpeg"), ["jpg", "jpeg", "jpe"]);
//! ```

mod consts;
mod index;
mod lookup;
mod query;

pub use crate::index::Index;
pub use crate::lookup::extension_of;
pub use mimer_db::{Database, Entry, Source};

use std::collections::BTreeMap;
use tracing::instrument;

/// Pulls the extension out of a file name or path, see [`extension_of`].
pub type ExtensionFn = fn(&str) -> Option<String>;

/// A raw MIME database together with the lookup tables derived from it.
#[derive(Debug, Clone)]
pub struct MimeTypes {
    db: Database,
    index: Index,
    extension_fn: ExtensionFn,
}
impl MimeTypes {
    /// Derive the lookup tables for a database.
    pub fn new(db: Database) -> Self {
        let index = Index::build(&db);
        Self {
            db,
            index,
            extension_fn: extension_of,
        }
    }

    /// Replace how [`mime`](Self::mime) and [`mimes`](Self::mimes) find the
    /// extension of a path.
    ///
    /// Whatever the function returns is lower-cased and has a leading dot
    /// removed before the lookup.
    ///
    /// ```
    /// # use mimer_index::MimeTypes;
    /// fn after_colon(path: &str) -> Option<String> {
    ///     path.rsplit_once(':').map(|(_, ext)| ext.to_string())
    /// }
    /// let mime = MimeTypes::bundled().unwrap().with_extension_fn(after_colon);
    /// assert_eq!(mime.mime("report:PDF"), Some("application/pdf"));
    /// assert_eq!(mime.mime("report.pdf"), None);
    /// ```
    #[must_use]
    pub fn with_extension_fn(mut self, extension_fn: ExtensionFn) -> Self {
        self.extension_fn = extension_fn;
        self
    }

    /// Lookups over the database snapshot bundled with [`mimer_db`].
    #[instrument(level = "debug")]
    pub fn bundled() -> mimer_db::error::Result<Self> {
        Ok(Self::new(Database::bundled()?))
    }

    /// The raw database the lookup tables were derived from.
    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Extension → canonical MIME type.
    pub fn types(&self) -> &BTreeMap<String, String> {
        self.index.types()
    }

    /// MIME type → extensions, as listed by the database.
    pub fn extensions_map(&self) -> &BTreeMap<String, Vec<String>> {
        self.index.extensions()
    }

    /// Extension → every MIME type listing it, best first.
    pub fn type_sets(&self) -> &BTreeMap<String, Vec<String>> {
        self.index.type_sets()
    }
}
impl From<Database> for MimeTypes {
    fn from(db: Database) -> Self {
        Self::new(db)
    }
}
