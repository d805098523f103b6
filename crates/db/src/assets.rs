//! Database snapshot embedded into the binary at compile time using
//! [`rust-embed`](rust_embed).

use crate::error::{ErrorKind, Result};
use exn::OptionExt;
use rust_embed::Embed;
use std::borrow::Cow;

/// File name of the bundled `mime-db` snapshot.
pub const BUNDLED_DATABASE: &str = "mime-db.json";

#[derive(Embed)]
#[folder = "../../assets/db/"]
pub(crate) struct Builtins;
impl Builtins {
    /// Get the raw contents of a bundled asset by name.
    pub(crate) fn load(name: impl AsRef<str>) -> Result<Cow<'static, [u8]>> {
        Self::get(name.as_ref())
            .map(|f| f.data)
            .ok_or_raise(|| ErrorKind::AssetNotFound(Self::identifier(name)))
    }

    pub(crate) fn identifier(name: impl AsRef<str>) -> String {
        format!("builtin:{}", name.as_ref().trim().trim_start_matches("builtin:"))
    }
}
