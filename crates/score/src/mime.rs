//! Type authority scoring.
//!
//! The higher the score, the more "official" the type. A type score is the
//! sum of four parts:
//!
//! | Part     | Values                                                          |
//! |----------|-----------------------------------------------------------------|
//! | Facet    | standard `900`, `vnd.` `400`, `x.` `300`, `x-` `200`, `prs.` `100` |
//! | Source   | `iana` `40`, unknown `30`, `apache` `20`, `nginx` `10`          |
//! | Category | `video` `3`, `audio` `2`, `font` `2`, `application` `1`, other `0` |
//! | Length   | `1 - len / 100` floored at `0`, so shorter types win ties       |

use crate::Source;

/// The generic binary type. Never preferred over anything else.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// RFC 6838 registration tree of a subtype, taken from its prefix.
///
/// See <https://tools.ietf.org/html/rfc6838#section-3>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// No prefix (`json`).
    Standard,
    /// `vnd.` vendor tree (`vnd.ms-excel`).
    Vendor,
    /// `x.` unregistered tree.
    Unregistered,
    /// `x-` legacy unregistered prefix (`x-ms-bmp`).
    Experimental,
    /// `prs.` personal or vanity tree.
    Personal,
}
impl Facet {
    /// Determine the facet of a subtype from its prefix.
    ///
    /// ```
    /// use mimer_score::Facet;
    /// assert_eq!(Facet::of("vnd.ms-excel"), Facet::Vendor);
    /// assert_eq!(Facet::of("x-ms-bmp"), Facet::Experimental);
    /// assert_eq!(Facet::of("prs.mytype"), Facet::Personal);
    /// assert_eq!(Facet::of("json"), Facet::Standard);
    /// ```
    #[must_use]
    pub fn of(subtype: &str) -> Self {
        [Self::Vendor, Self::Personal, Self::Experimental, Self::Unregistered]
            .into_iter()
            .find(|facet| subtype.starts_with(facet.prefix()))
            .unwrap_or(Self::Standard)
    }

    /// Returns the subtype prefix identifying this facet.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Vendor => "vnd.",
            Self::Unregistered => "x.",
            Self::Experimental => "x-",
            Self::Personal => "prs.",
        }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            Self::Standard => 900.0,
            Self::Vendor => 400.0,
            Self::Unregistered => 300.0,
            Self::Experimental => 200.0,
            Self::Personal => 100.0,
        }
    }
}

/// Split a MIME type into its `type` and `subtype` components.
///
/// Returns `None` unless there is exactly one `/` with something on both sides.
pub fn split(mime_type: &str) -> Option<(&str, &str)> {
    let (top, subtype) = mime_type.split_once('/')?;
    if top.is_empty() || subtype.is_empty() || subtype.contains('/') {
        return None;
    }
    Some((top, subtype))
}

/// Score contribution of the top-level type.
///
/// Prefers `font/woff` over `application/font-woff`, and `video/mp4` over
/// `audio/mp4` over `application/mp4` (RFC 4337, section 2).
fn category_weight(top: &str) -> f64 {
    match top {
        "video" => 3.0,
        "audio" | "font" => 2.0,
        "application" => 1.0,
        _ => 0.0,
    }
}

/// All else being equal, prefer shorter types. Types of 100 characters or
/// more get nothing.
fn length_weight(mime_type: &str) -> f64 {
    (1.0 - mime_type.chars().count() as f64 / 100.0).max(0.0)
}

/// Score the authority of a MIME type.
///
/// Returns `0` for [`OCTET_STREAM`] and for anything that isn't a valid
/// `type/subtype` pair, so that those always sort last.
///
/// ```
/// use mimer_score::{Source, type_score};
/// assert!(type_score("video/mp4", Some(Source::Iana)) > type_score("audio/mp4", Some(Source::Iana)));
/// assert_eq!(type_score("application/octet-stream", Some(Source::Iana)), 0.0);
/// assert_eq!(type_score("not-a-type", None), 0.0);
/// ```
#[must_use]
pub fn type_score(mime_type: &str, source: Option<Source>) -> f64 {
    if mime_type == OCTET_STREAM {
        return 0.0;
    }
    let Some((top, subtype)) = split(mime_type) else {
        return 0.0;
    };
    Facet::of(subtype).weight() + Source::weight_of(source) + category_weight(top) + length_weight(mime_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[rstest]
    #[case("vnd.ms-excel", Facet::Vendor)]
    #[case("x-ms-bmp", Facet::Experimental)]
    #[case("x.foo", Facet::Unregistered)]
    #[case("prs.btif", Facet::Personal)]
    #[case("json", Facet::Standard)]
    #[case("xml", Facet::Standard)]
    #[case("vnd", Facet::Standard)]
    #[case("", Facet::Standard)]
    fn test_facet_of(#[case] subtype: &str, #[case] expected: Facet) {
        assert_eq!(Facet::of(subtype), expected);
    }

    #[rstest]
    #[case("text/html", Some(("text", "html")))]
    #[case("application/vnd.ms-excel", Some(("application", "vnd.ms-excel")))]
    #[case("text", None)]
    #[case("text/html/extra", None)]
    #[case("/html", None)]
    #[case("text/", None)]
    #[case("/", None)]
    #[case("", None)]
    fn test_split(#[case] input: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split(input), expected);
    }

    #[test]
    fn test_score_components() {
        // 900 (standard) + 40 (iana) + 0 (text) + 1 - 9/100
        assert_close(type_score("text/html", Some(Source::Iana)), 940.91);
        // 400 (vnd.) + 20 (apache) + 1 (application) + 1 - 24/100
        assert_close(type_score("application/vnd.ms-excel", Some(Source::Apache)), 421.76);
        // 200 (x-) + 10 (nginx) + 0 (image) + 1 - 14/100
        assert_close(type_score("image/x-ms-bmp", Some(Source::Nginx)), 210.86);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Source::Iana))]
    #[case(Some(Source::Apache))]
    #[case(Some(Source::Nginx))]
    #[case(Some(Source::Unknown))]
    fn test_octet_stream_floor(#[case] source: Option<Source>) {
        assert_eq!(type_score(OCTET_STREAM, source), 0.0);
    }

    #[rstest]
    #[case("")]
    #[case("text")]
    #[case("text/html/extra")]
    #[case("/")]
    #[case("text/")]
    fn test_invalid_types_score_zero(#[case] input: &str) {
        assert_eq!(type_score(input, Some(Source::Iana)), 0.0);
    }

    #[rstest]
    #[case("application/prs.a")]
    #[case("chemical/x-pdb")]
    #[case("text/plain")]
    #[case("model/vnd.gltf+json")]
    fn test_valid_types_score_positive(#[case] input: &str) {
        for source in [None, Some(Source::Iana), Some(Source::Apache), Some(Source::Nginx)] {
            assert!(type_score(input, source) > 0.0);
        }
    }

    #[rstest]
    #[case("application", None)]
    #[case("image", Some(Source::Iana))]
    #[case("text", Some(Source::Nginx))]
    fn test_facet_ordering(#[case] top: &str, #[case] source: Option<Source>) {
        let standard = type_score(&format!("{top}/thing"), source);
        let vendor = type_score(&format!("{top}/vnd.thing"), source);
        let experimental = type_score(&format!("{top}/x-thing"), source);
        let personal = type_score(&format!("{top}/prs.thing"), source);
        assert!(standard > vendor);
        assert!(vendor > experimental);
        assert!(experimental > personal);
    }

    #[test]
    fn test_category_weighting() {
        let source = Some(Source::Iana);
        assert!(type_score("video/mp4", source) > type_score("audio/mp4", source));
        assert!(type_score("audio/mp4", source) > type_score("application/mp4", source));
        assert!(type_score("font/woff", source) > type_score("application/font-woff", source));
    }

    #[test]
    fn test_source_outweighs_category() {
        // text/rtf loses to application/rtf on category alone, but provenance
        // is a heavier signal than the top-level type.
        assert!(type_score("text/rtf", Some(Source::Iana)) > type_score("application/rtf", Some(Source::Apache)));
        assert!(type_score("application/rtf", Some(Source::Iana)) > type_score("text/rtf", Some(Source::Iana)));
    }

    #[test]
    fn test_shorter_type_wins_tie() {
        assert!(type_score("audio/wav", None) > type_score("audio/wave", None));
    }

    #[rstest]
    #[case(100)]
    #[case(20_000)]
    fn test_long_types_keep_positive_score(#[case] len: usize) {
        let long = format!("application/{}", "a".repeat(len));
        assert_eq!(length_weight(&long), 0.0);
        for source in [None, Some(Source::Iana), Some(Source::Apache), Some(Source::Nginx)] {
            assert_close(type_score(&long, source), 900.0 + Source::weight_of(source) + 1.0);
        }
    }
}
