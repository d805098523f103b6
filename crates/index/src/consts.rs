use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($(#[$meta:meta])* $name:ident, $regex:expr) => {
        $(#[$meta])*
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

regex!(
    /// Bare `type/subtype` at the start of a media type, before any parameters.
    EXTRACT_TYPE_REGEX, r"^\s*([^;\s]*)(?:;|\s|$)"
);
regex!(TEXT_TYPE_REGEX, r"(?i)^text/");

/// Matches any run of characters within a single MIME type segment.
pub(crate) const WILDCARD_SEGMENT: &str = "[^/]*";
/// Charset assumed for `text/*` types that don't declare one.
pub(crate) const DEFAULT_TEXT_CHARSET: &str = "UTF-8";
