//! Path, charset and `Content-Type` helpers.

use crate::MimeTypes;
use crate::consts::{DEFAULT_TEXT_CHARSET, EXTRACT_TYPE_REGEX, TEXT_TYPE_REGEX};

/// Extract the lower-cased extension from a file name, path or bare extension.
///
/// A bare extension (`html`) or a dotted one (`.html`) is its own extension.
/// Otherwise the extension is everything after the last dot, so long as that
/// doesn't cross a path separator.
///
/// ```
/// use mimer_index::extension_of;
/// assert_eq!(extension_of("/srv/www/INDEX.HTML").as_deref(), Some("html"));
/// assert_eq!(extension_of("/srv/www/README"), None);
/// ```
pub fn extension_of(path: &str) -> Option<String> {
    let extension = match path.rsplit_once('.') {
        Some((_, extension)) => extension,
        None => path,
    };
    if extension.is_empty() || extension.contains(['/', '\\']) {
        return None;
    }
    Some(extension.to_lowercase())
}

impl MimeTypes {
    /// Run the configured extension extractor and normalize what it finds.
    fn lookup_key(&self, path: &str) -> Option<String> {
        let extension = (self.extension_fn)(path)?;
        let extension = extension.strip_prefix('.').unwrap_or(&extension);
        (!extension.is_empty()).then(|| extension.to_lowercase())
    }

    /// The canonical MIME type for a file path or extension.
    ///
    /// ```
    /// # use mimer_index::MimeTypes;
    /// let mime = MimeTypes::bundled().unwrap();
    /// assert_eq!(mime.mime("html"), Some("text/html"));
    /// assert_eq!(mime.mime("C:\\path\\to\\PAGE.HTML"), Some("text/html"));
    /// assert_eq!(mime.mime("/path/to/.config.json"), Some("application/json"));
    /// assert_eq!(mime.mime("/path/to/json"), None);
    /// ```
    pub fn mime(&self, path: &str) -> Option<&str> {
        self.index.canonical_type(&self.lookup_key(path)?)
    }

    /// Every MIME type associated with a file path or extension, best first.
    pub fn mimes(&self, path: &str) -> Option<&[String]> {
        self.index.type_set(&self.lookup_key(path)?)
    }

    /// The default charset for a MIME type.
    ///
    /// Falls back to `UTF-8` for any `text/*` type the database has no
    /// charset for.
    ///
    /// ```
    /// # use mimer_index::MimeTypes;
    /// let mime = MimeTypes::bundled().unwrap();
    /// assert_eq!(mime.charset("application/json; foo=bar"), Some("UTF-8"));
    /// assert_eq!(mime.charset("text/x-bogus"), Some("UTF-8"));
    /// assert_eq!(mime.charset("application/octet-stream"), None);
    /// ```
    pub fn charset(&self, mime_type: &str) -> Option<&str> {
        let bare = EXTRACT_TYPE_REGEX.captures(mime_type)?.get(1)?.as_str();
        let declared = self.db.get(&bare.to_lowercase()).and_then(|entry| entry.charset.as_deref());
        match declared {
            Some(charset) => Some(charset),
            None => TEXT_TYPE_REGEX.is_match(bare).then_some(DEFAULT_TEXT_CHARSET),
        }
    }

    /// Build a full `Content-Type` header value from a MIME type or extension.
    ///
    /// A value without a `/` is looked up as an extension first. A charset
    /// parameter is appended when one is known and none is present already.
    /// Unknown MIME types are passed through as-is.
    ///
    /// ```
    /// # use mimer_index::MimeTypes;
    /// let mime = MimeTypes::bundled().unwrap();
    /// assert_eq!(mime.content_type("json").as_deref(), Some("application/json; charset=utf-8"));
    /// assert_eq!(mime.content_type("TEXT/HTML").as_deref(), Some("TEXT/HTML; charset=utf-8"));
    /// assert_eq!(mime.content_type("bogus"), None);
    /// ```
    pub fn content_type(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        let mime_type = match value.contains('/') {
            true => value,
            false => self.mime(value)?,
        };
        if mime_type.contains("charset") {
            return Some(mime_type.to_string());
        }
        Some(match self.charset(mime_type) {
            Some(charset) => format!("{mime_type}; charset={}", charset.to_lowercase()),
            None => mime_type.to_string(),
        })
    }
}
