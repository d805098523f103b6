//! Derived lookup tables.

use mimer_db::{Database, Entry};
use mimer_score::type_score;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::instrument;

/// The three lookup tables derived from a raw [`Database`].
///
/// - **types**: extension → canonical MIME type,
/// - **extensions**: MIME type → extensions, in the order the database lists them,
/// - **type sets**: extension → every MIME type that lists it, best first.
///
/// Extensions used as keys are lower-case. For every extension, the canonical
/// type is the first element of its type set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    types: BTreeMap<String, String>,
    extensions: BTreeMap<String, Vec<String>>,
    type_sets: BTreeMap<String, Vec<String>>,
}

/// A MIME type competing for an extension.
struct Candidate<'a> {
    score: f64,
    mime_type: &'a str,
}
impl Candidate<'_> {
    /// Highest score first. Equal scores fall back to the type name so that
    /// the winner never depends on the order entries were visited in.
    fn rank(&self, other: &Self) -> Ordering {
        other.score.total_cmp(&self.score).then_with(|| self.mime_type.cmp(other.mime_type))
    }
}

impl Index {
    /// Build the lookup tables for every entry in a database.
    ///
    /// A [`Database`] holds at most one entry per (lower-case) MIME type, so
    /// the result only depends on its contents: any two databases with the
    /// same entries build equal indexes, whatever order they were filled in.
    ///
    /// ```
    /// use mimer_db::{Database, Entry, Source};
    /// use mimer_index::Index;
    /// let db: Database = [
    ///     ("application/mp4", Entry::new(["mp4", "m4p"]).with_source(Source::Iana)),
    ///     ("video/mp4", Entry::new(["mp4", "mp4v"]).with_source(Source::Iana)),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let index = Index::build(&db);
    /// assert_eq!(index.canonical_type("mp4"), Some("video/mp4"));
    /// assert_eq!(index.type_set("mp4").unwrap(), ["video/mp4", "application/mp4"]);
    /// ```
    #[instrument(skip_all, fields(entries = db.len()))]
    pub fn build(db: &Database) -> Self {
        Self::from_entries(db)
    }

    /// Build the lookup tables from `(mime_type, entry)` pairs.
    ///
    /// MIME types must be unique and lower-case, as they are in a [`Database`].
    /// Given that, the order of the pairs doesn't affect the result.
    pub(crate) fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a Entry)>,
    {
        let mut extensions = BTreeMap::new();
        let mut candidates: BTreeMap<String, Vec<Candidate<'a>>> = BTreeMap::new();
        for (mime_type, entry) in entries {
            if entry.extensions.is_empty() {
                continue;
            }
            extensions.insert(mime_type.to_string(), entry.extensions.clone());
            let score = type_score(mime_type, entry.source);
            for extension in &entry.extensions {
                let list = candidates.entry(extension.to_lowercase()).or_default();
                // The same type listing an extension twice is still one candidate.
                if list.iter().all(|c| c.mime_type != mime_type) {
                    list.push(Candidate { score, mime_type });
                }
            }
        }

        let mut types = BTreeMap::new();
        let mut type_sets = BTreeMap::new();
        let mut conflicts = 0usize;
        for (extension, mut list) in candidates {
            list.sort_by(Candidate::rank);
            let Some(canonical) = list.first() else {
                continue;
            };
            if list.len() > 1 {
                conflicts += 1;
                tracing::trace!(
                    extension = extension.as_str(),
                    canonical = canonical.mime_type,
                    candidates = list.len(),
                    "Resolved conflicting MIME types for extension"
                );
            }
            types.insert(extension.clone(), canonical.mime_type.to_string());
            type_sets.insert(extension, list.into_iter().map(|c| c.mime_type.to_string()).collect());
        }

        tracing::debug!(
            types = extensions.len(),
            extensions = types.len(),
            conflicts,
            "Built MIME lookup tables"
        );
        Self { types, extensions, type_sets }
    }

    /// Extension → canonical MIME type.
    pub fn types(&self) -> &BTreeMap<String, String> {
        &self.types
    }

    /// MIME type → extensions, as listed by the database.
    pub fn extensions(&self) -> &BTreeMap<String, Vec<String>> {
        &self.extensions
    }

    /// Extension → all MIME types listing it, best first.
    pub fn type_sets(&self) -> &BTreeMap<String, Vec<String>> {
        &self.type_sets
    }

    /// The canonical MIME type of a lower-case extension.
    pub fn canonical_type(&self, extension: &str) -> Option<&str> {
        self.types.get(extension).map(String::as_str)
    }

    /// Every MIME type listing a lower-case extension, best first.
    pub fn type_set(&self, extension: &str) -> Option<&[String]> {
        self.type_sets.get(extension).map(Vec::as_slice)
    }

    /// The extensions of a lower-case MIME type, as listed by the database.
    pub fn extensions_of(&self, mime_type: &str) -> Option<&[String]> {
        self.extensions.get(mime_type).map(Vec::as_slice)
    }

    /// The indexed (lower-case) spelling of an extension.
    pub(crate) fn extension_key(&self, extension: &str) -> Option<&str> {
        self.types.get_key_value(extension.to_lowercase().as_str()).map(|(key, _)| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimer_db::Source;

    fn database() -> Database {
        [
            ("application/mp4", Entry::new(["mp4", "mpg4", "mp4s", "m4p"]).with_source(Source::Iana)),
            ("application/octet-stream", Entry::new(["bin", "exe", "dll"]).with_source(Source::Iana)),
            ("application/rtf", Entry::new(["rtf"]).with_source(Source::Iana)),
            ("application/x-msdownload", Entry::new(["exe", "dll"]).with_source(Source::Apache)),
            ("application/x-unused", Entry::default().with_source(Source::Iana)),
            ("audio/mp3", Entry::new(["mp3"])),
            ("audio/mp4", Entry::new(["m4a", "mp4a"]).with_source(Source::Iana)),
            ("audio/mpeg", Entry::new(["mpga", "mp2", "mp3"]).with_source(Source::Iana)),
            ("image/bmp", Entry::new(["bmp", "dib"]).with_source(Source::Iana)),
            ("image/x-ms-bmp", Entry::new(["bmp"]).with_source(Source::Nginx)),
            ("text/rtf", Entry::new(["rtf"]).with_source(Source::Iana)),
            ("video/mp4", Entry::new(["mp4", "mp4v", "mpg4"]).with_source(Source::Iana)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_canonical_types() {
        let index = Index::build(&database());
        assert_eq!(index.canonical_type("mp4"), Some("video/mp4"));
        assert_eq!(index.canonical_type("mpg4"), Some("video/mp4"));
        assert_eq!(index.canonical_type("m4p"), Some("application/mp4"));
        assert_eq!(index.canonical_type("mp3"), Some("audio/mpeg"));
        assert_eq!(index.canonical_type("rtf"), Some("application/rtf"));
        assert_eq!(index.canonical_type("bmp"), Some("image/bmp"));
        assert_eq!(index.canonical_type("exe"), Some("application/x-msdownload"));
        assert_eq!(index.canonical_type("bin"), Some("application/octet-stream"));
        assert_eq!(index.canonical_type("unknown"), None);
    }

    #[test]
    fn test_type_sets_are_ranked() {
        let index = Index::build(&database());
        assert_eq!(index.type_set("mp3").unwrap(), ["audio/mpeg", "audio/mp3"]);
        assert_eq!(index.type_set("rtf").unwrap(), ["application/rtf", "text/rtf"]);
        assert_eq!(index.type_set("bmp").unwrap(), ["image/bmp", "image/x-ms-bmp"]);
        assert_eq!(index.type_set("exe").unwrap(), ["application/x-msdownload", "application/octet-stream"]);
        assert_eq!(index.type_set("dib").unwrap(), ["image/bmp"]);
    }

    #[test]
    fn test_extensions_keep_source_order() {
        let index = Index::build(&database());
        assert_eq!(index.extensions_of("audio/mpeg").unwrap(), ["mpga", "mp2", "mp3"]);
        assert_eq!(index.extensions_of("application/mp4").unwrap(), ["mp4", "mpg4", "mp4s", "m4p"]);
    }

    #[test]
    fn test_entries_without_extensions_are_skipped() {
        let index = Index::build(&database());
        assert!(index.extensions_of("application/x-unused").is_none());
        assert!(!index.types().values().any(|t| t == "application/x-unused"));
        assert!(index.type_sets().values().flatten().all(|t| t != "application/x-unused"));
    }

    #[test]
    fn test_canonical_is_first_of_type_set() {
        let index = Index::build(&database());
        assert_eq!(index.types().len(), index.type_sets().len());
        for (extension, canonical) in index.types() {
            assert_eq!(&index.type_sets()[extension][0], canonical, "extension: {extension}");
        }
    }

    #[test]
    fn test_every_listed_extension_is_indexed() {
        let db = database();
        let index = Index::build(&db);
        for (mime_type, entry) in &db {
            for extension in &entry.extensions {
                let set = index.type_set(extension).unwrap();
                assert_eq!(set.iter().filter(|t| *t == mime_type).count(), 1);
            }
        }
    }

    #[test]
    fn test_independent_of_entry_order() {
        let db = database();
        let forwards = Index::from_entries(db.iter());
        let backwards = Index::from_entries(db.iter().rev());
        let mut shuffled: Vec<_> = db.iter().collect();
        // Interleave the two halves for an order that is neither sorted nor reversed.
        let back = shuffled.split_off(shuffled.len() / 2);
        let interleaved: Vec<_> = back.into_iter().zip(shuffled).flat_map(|(a, b)| [a, b]).collect();
        assert_eq!(forwards, backwards);
        assert_eq!(forwards, Index::from_entries(interleaved));
        assert_eq!(forwards, Index::build(&db));
    }

    #[test]
    fn test_equal_scores_break_ties_by_name() {
        // Same length, facet, category and source: identical type scores.
        let a = Entry::new(["dat"]);
        let b = Entry::new(["dat"]);
        let first = Index::from_entries([("text/x-aaa", &a), ("text/x-bbb", &b)]);
        let second = Index::from_entries([("text/x-bbb", &b), ("text/x-aaa", &a)]);
        assert_eq!(first.canonical_type("dat"), Some("text/x-aaa"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_extensions_are_lowercased_and_deduplicated() {
        let entry = Entry::new(["PNG", "png"]).with_source(Source::Iana);
        let index = Index::from_entries([("image/png", &entry)]);
        assert_eq!(index.type_set("png").unwrap(), ["image/png"]);
        assert_eq!(index.canonical_type("PNG"), None);
        // The raw list is kept verbatim.
        assert_eq!(index.extensions_of("image/png").unwrap(), ["PNG", "png"]);
    }

    #[test]
    fn test_database_fill_order_is_irrelevant() {
        let db = database();
        let pairs: Vec<(&str, Entry)> = db.iter().map(|(t, e)| (t, e.clone())).collect();
        let forwards: Database = pairs.iter().cloned().collect();
        let backwards: Database = pairs.iter().rev().cloned().collect();
        assert_eq!(Index::build(&forwards), Index::build(&backwards));
    }

    #[test]
    fn test_repeated_and_mixed_case_types_stay_consistent() {
        // A later definition of a type replaces the earlier one before
        // indexing, so every table sees the same entry for `text/x-a`.
        let db: Database = [
            ("text/x-a", Entry::new(["foo"]).with_source(Source::Nginx)),
            ("text/x-b", Entry::new(["foo"]).with_source(Source::Apache)),
            ("Text/X-A", Entry::new(["foo", "bar"]).with_source(Source::Iana)),
        ]
        .into_iter()
        .collect();
        let index = Index::build(&db);
        assert_eq!(index.canonical_type("foo"), Some("text/x-a"));
        assert_eq!(index.canonical_type("bar"), Some("text/x-a"));
        assert_eq!(index.type_set("foo").unwrap(), ["text/x-a", "text/x-b"]);
        assert_eq!(index.extensions_of("text/x-a").unwrap(), ["foo", "bar"]);
        assert!(index.extensions_of("Text/X-A").is_none());
        for (extension, canonical) in index.types() {
            let listed = index.extensions_of(canonical).unwrap();
            assert!(listed.iter().any(|e| e.eq_ignore_ascii_case(extension)), "extension: {extension}");
        }
    }

    #[test]
    fn test_extension_key() {
        let entry = Entry::new(["PNG"]);
        let index = Index::from_entries([("image/png", &entry)]);
        assert_eq!(index.extension_key("PNG"), Some("png"));
        assert_eq!(index.extension_key("png"), Some("png"));
        assert_eq!(index.extension_key("gif"), None);
    }

    #[test]
    fn test_empty_database() {
        let index = Index::build(&Database::default());
        assert_eq!(index, Index::default());
    }
}
