//! Extension preference scoring.

use crate::consts::{DEFAULT_EXTENSION_SCORE, EXTENSION_SCORES, MIN_EXTENSION_TYPE_SCORE, TYPE_SCORE_SHARE};
use std::borrow::Cow;

fn normalize(extension: &str) -> Cow<'_, str> {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    match extension.bytes().any(|b| b.is_ascii_uppercase()) {
        true => Cow::Owned(extension.to_ascii_lowercase()),
        false => Cow::Borrowed(extension),
    }
}

/// Look up an extension in the static preference table.
///
/// Case-insensitive, and a leading dot is ignored. Returns `None` for
/// extensions the table doesn't know about.
#[must_use]
pub fn static_extension_score(extension: &str) -> Option<f64> {
    EXTENSION_SCORES.get(normalize(extension).as_ref()).copied()
}

/// Score how commonly an extension is used in the wild.
///
/// ```
/// use mimer_score::extension_score;
/// assert!(extension_score("jpg") > extension_score("jpeg"));
/// assert_eq!(extension_score(".JPG"), extension_score("jpg"));
/// assert_eq!(extension_score("unheard-of"), 100.0);
/// ```
#[must_use]
pub fn extension_score(extension: &str) -> f64 {
    static_extension_score(extension).unwrap_or(DEFAULT_EXTENSION_SCORE)
}

/// Baseline for extensions of a top-level type that aren't in the static table.
fn category_baseline(top: &str) -> f64 {
    match top {
        "text" => 550.0,
        "image" | "video" | "audio" => 500.0,
        "font" => 400.0,
        "application" => 300.0,
        _ => 100.0,
    }
}

/// Derive a score for an extension from the MIME type it belongs to.
///
/// Used for extensions without a static score. A quarter of the type score is
/// folded in so that MIME authority still influences the ranking. Every
/// character beyond three costs two points (and every character short of
/// three earns two), and any character outside `[a-z0-9]` costs twenty. The
/// result is rounded and never drops below `10`.
#[must_use]
pub fn extension_type_score(mime_type: &str, extension: &str, type_score: f64) -> f64 {
    let top = mime_type.split('/').next().unwrap_or_default();
    let extension = normalize(extension);
    let length_penalty = (extension.chars().count() as f64 - 3.0) * 2.0;
    let symbol_penalty = match extension.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
        true => 0.0,
        false => 20.0,
    };
    let score = category_baseline(top) + type_score * TYPE_SCORE_SHARE - length_penalty - symbol_penalty;
    score.round().max(MIN_EXTENSION_TYPE_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jpg", "jpeg")]
    #[case("mp4", "mkv")]
    #[case("mp4", "avi")]
    #[case("woff2", "woff")]
    #[case("png", "bmp")]
    #[case("html", "htm")]
    #[case("bmp", "never-heard-of-it")]
    fn test_preference(#[case] preferred: &str, #[case] other: &str) {
        assert!(extension_score(preferred) > extension_score(other));
    }

    #[rstest]
    #[case("pdf", Some(980.0))]
    #[case(".pdf", Some(980.0))]
    #[case("PDF", Some(980.0))]
    #[case("7z", Some(760.0))]
    #[case("default", None)]
    #[case("jpe", None)]
    #[case("", None)]
    fn test_static_lookup(#[case] extension: &str, #[case] expected: Option<f64>) {
        assert_eq!(static_extension_score(extension), expected);
    }

    #[rstest]
    // 500 + 400 / 4
    #[case("image/png", "png", 400.0, 600.0)]
    // 500 + 100 - (5 - 3) * 2
    #[case("image/x-foo", "jpeg2", 400.0, 596.0)]
    // 550 + 0 + (3 - 1) * 2
    #[case("text/x-c", "c", 0.0, 554.0)]
    // 300 + 100 - (6 - 3) * 2 - 20
    #[case("application/gzip", "tar.gz", 400.0, 374.0)]
    // 100 + 235.225, rounded
    #[case("chemical/x-pdb", "pdb", 940.9, 335.0)]
    #[case("", "pdb", 0.0, 100.0)]
    fn test_extension_type_score(
        #[case] mime_type: &str,
        #[case] extension: &str,
        #[case] type_score: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(extension_type_score(mime_type, extension, type_score), expected);
    }

    #[test]
    fn test_extension_type_score_floor() {
        let extension = "x".repeat(50);
        assert_eq!(extension_type_score("chemical/x-foo", &extension, 0.0), 10.0);
        assert_eq!(extension_type_score("chemical/x-foo", "", 0.0), 106.0);
    }

    #[test]
    fn test_uppercase_is_not_a_symbol() {
        assert_eq!(extension_type_score("image/png", "PNG", 400.0), extension_type_score("image/png", "png", 400.0));
    }
}
