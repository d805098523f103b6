//! Resolving MIME type queries to ranked extensions.

use crate::MimeTypes;
use crate::consts::WILDCARD_SEGMENT;
use mimer_score::{combined_score, extension_score};
use regex::Regex;
use std::collections::BTreeSet;
use tracing::instrument;

/// Trim, lower-case and drop any parameters (`; charset=...`).
fn normalize(query: &str) -> String {
    let query = query.trim().to_lowercase();
    query.split(';').next().unwrap_or_default().trim().to_string()
}

/// Compile a wildcard query into an anchored pattern where each `*` matches
/// within a single segment.
fn wildcard_pattern(query: &str) -> Option<Regex> {
    let pattern = query.split('*').map(regex::escape).collect::<Vec<_>>().join(WILDCARD_SEGMENT);
    match Regex::new(&format!("^{pattern}$")) {
        Ok(regex) => Some(regex),
        Err(error) => {
            tracing::warn!(query, %error, "Wildcard query could not be compiled");
            None
        },
    }
}

impl MimeTypes {
    /// All extensions for a MIME type, best first.
    ///
    /// The query is case-insensitive and may carry parameters. If the type is
    /// unknown and contains `*` (`image/*`), every extension whose canonical
    /// type matches is returned instead. Unknown types give an empty list.
    ///
    /// ```
    /// # use mimer_index::MimeTypes;
    /// let mime = MimeTypes::bundled().unwrap();
    /// assert_eq!(mime.extensions("IMAGE/JPEG; charset=utf-8"), ["jpg", "jpeg", "jpe"]);
    /// assert!(mime.extensions("image/*").contains(&"png"));
    /// assert!(mime.extensions("application/does-not-exist").is_empty());
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn extensions(&self, query: &str) -> Vec<&str> {
        let query = normalize(query);
        if let Some(exact) = self.index.extensions_of(&query)
            && !exact.is_empty()
        {
            return self.rank(exact.iter().map(String::as_str));
        }
        if !query.contains('*') {
            return Vec::new();
        }
        let Some(pattern) = wildcard_pattern(&query) else {
            return Vec::new();
        };
        let matches = self
            .index
            .types()
            .iter()
            .filter(|(_, mime_type)| pattern.is_match(mime_type))
            .map(|(extension, _)| extension.as_str());
        self.rank(matches)
    }

    /// Extensions for several MIME type queries at once, merged and ranked.
    ///
    /// The order of the queries doesn't affect the result.
    #[instrument(level = "trace", skip_all)]
    pub fn extensions_for<I, S>(&self, queries: I) -> Vec<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let merged: Vec<&str> = queries
            .into_iter()
            .flat_map(|query| self.extensions(query.as_ref()))
            .collect();
        self.rank(merged)
    }

    /// The preferred extension for a MIME type.
    ///
    /// ```
    /// # use mimer_index::MimeTypes;
    /// let mime = MimeTypes::bundled().unwrap();
    /// assert_eq!(mime.extension("text/html"), Some("html"));
    /// assert_eq!(mime.extension("application/x-bogus"), None);
    /// ```
    pub fn extension(&self, query: &str) -> Option<&str> {
        self.extensions(query).into_iter().next()
    }

    /// Score an extension in the context of its own canonical MIME type, which
    /// is not necessarily the type it was queried through.
    pub fn ranking_score(&self, extension: &str) -> f64 {
        let extension = extension.to_lowercase();
        match self.index.canonical_type(&extension) {
            Some(mime_type) => combined_score(mime_type, &extension, self.db.source(mime_type)),
            None => extension_score(&extension),
        }
    }

    /// De-duplicate and sort by ranking score, best first. Ties are ordered by
    /// name. Extensions come out in their indexed, lower-case spelling.
    fn rank<'a>(&'a self, extensions: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let unique: BTreeSet<&str> = extensions
            .into_iter()
            .map(|ext| self.index.extension_key(ext).unwrap_or(ext))
            .collect();
        let mut scored: Vec<(f64, &str)> = unique.into_iter().map(|ext| (self.ranking_score(ext), ext)).collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.into_iter().map(|(_, ext)| ext).collect()
    }
}
