use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Registry that a MIME type definition was sourced from.
///
/// Used as a credibility signal: IANA registrations outrank definitions that
/// only exist in a web server's bundled type list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Source {
    /// Internet Assigned Numbers Authority media type registry.
    Iana,
    /// Apache HTTPD `mime.types`.
    Apache,
    /// Nginx `mime.types`.
    Nginx,
    /// Any other (or unrecognised) provenance.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}
impl Source {
    /// Weight used when the provenance of a type is unknown or absent.
    pub const DEFAULT_WEIGHT: f64 = 30.0;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iana => "iana",
            Self::Apache => "apache",
            Self::Nginx => "nginx",
            Self::Unknown => "unknown",
        }
    }

    /// Score contribution of this provenance to a type score.
    ///
    /// Definitions without a known registry sit between IANA and the web
    /// servers; they were most likely added by hand by database maintainers.
    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            Self::Iana => 40.0,
            Self::Apache => 20.0,
            Self::Nginx => 10.0,
            Self::Unknown => Self::DEFAULT_WEIGHT,
        }
    }

    /// Same as [`weight`](Self::weight), treating a missing source as [`Unknown`](Self::Unknown).
    #[must_use]
    pub fn weight_of(source: Option<Self>) -> f64 {
        source.map_or(Self::DEFAULT_WEIGHT, |s| s.weight())
    }
}
impl FromStr for Source {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "iana" => Self::Iana,
            "apache" => Self::Apache,
            "nginx" => Self::Nginx,
            _ => Self::Unknown,
        })
    }
}
impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
