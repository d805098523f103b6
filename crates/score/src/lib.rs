//! Scoring for MIME types and file extensions.
//!
//! A single extension can be claimed by several MIME types (`.mp4` is
//! `video/mp4` and `application/mp4`), and a single MIME type can have several
//! extensions (`image/jpeg` is `.jpg`, `.jpeg` and `.jpe`). The functions in
//! this crate assign comparable scores so that those conflicts can always be
//! ordered the same way:
//!
//! - [`type_score`] rates how authoritative a MIME type is,
//! - [`extension_score`] rates how common an extension is,
//! - [`extension_type_score`] derives an extension score from its MIME type
//!   when the extension isn't in the static table, and
//! - [`combined_score`] puts the two together for ranking extensions.
//!
//! Scores only have meaning relative to each other. Every function is total:
//! malformed input gets the lowest score rather than an error.

mod consts;
mod extension;
mod mime;
mod source;

pub use crate::extension::{extension_score, extension_type_score, static_extension_score};
pub use crate::mime::{Facet, OCTET_STREAM, split, type_score};
pub use crate::source::Source;

use crate::consts::TYPE_SCORE_WEIGHT;

/// Score an extension in the context of the MIME type it resolves to.
///
/// MIME authority is weighted one and a half times as heavily as extension
/// preference. The static extension table always wins over the derived
/// [`extension_type_score`] when both are available.
///
/// ```
/// use mimer_score::{Source, combined_score};
/// let jpg = combined_score("image/jpeg", "jpg", Some(Source::Iana));
/// let jpe = combined_score("image/jpeg", "jpe", Some(Source::Iana));
/// assert!(jpg > jpe);
/// ```
#[must_use]
pub fn combined_score(mime_type: &str, extension: &str, source: Option<Source>) -> f64 {
    let type_score = type_score(mime_type, source);
    let extension_score =
        static_extension_score(extension).unwrap_or_else(|| extension_type_score(mime_type, extension, type_score));
    type_score * TYPE_SCORE_WEIGHT + extension_score
}
