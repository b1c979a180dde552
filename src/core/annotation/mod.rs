//! Parse `@encrypted` directives out of field documentation comments.
//!
//! A directive is the literal `@encrypted` anywhere in the documentation
//! text, optionally followed by `?` and a query-like suffix of keys joined
//! with `&`. Only the part of a key before `=` is significant, so
//! `@encrypted?strict=true` and `@encrypted?strict` are the same directive.
//!
//! Recognized keys are listed by [`DirectiveKey`]. `readonly` wins over
//! every other key; `strict` switches on strict decryption; anything else is
//! ignored. Parsing never fails: documentation without the token simply has
//! no directive.
//!
//! ## Examples
//! ```
//! # use prisma_field_encryption::core::annotation::{
//! #     Annotation, parse_annotation,
//! # };
//! assert_eq!(
//!     parse_annotation(Some("/// @encrypted")),
//!     Some(Annotation::ENCRYPTED)
//! );
//! assert_eq!(
//!     parse_annotation(Some("@encrypted?strict&readonly")),
//!     Some(Annotation::READONLY)
//! );
//! assert_eq!(parse_annotation(Some("encrypted")), None);
//! ```

use crate::Keyword;
use serde::{Deserialize, Serialize};

/// Literal token that marks a field for encryption.
pub const DIRECTIVE_TOKEN: &str = "@encrypted";

/// Separator between the token and its key suffix.
const SUFFIX_MARKER: char = '?';

/// Separator between suffix keys.
const KEY_SEPARATOR: char = '&';

/// Separator between a key and its (ignored) value.
const VALUE_SEPARATOR: char = '=';

/// A parsed encryption directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Whether writes to the field are encrypted.
    pub encrypt: bool,

    /// Whether a decryption failure is surfaced instead of returning the
    /// raw ciphertext.
    pub strict_decryption: bool,
}

impl Annotation {
    /// `@encrypted` with no recognized keys.
    pub const ENCRYPTED: Self = Self {
        encrypt: true,
        strict_decryption: false,
    };

    /// `@encrypted?strict`.
    pub const STRICT: Self = Self {
        encrypt: true,
        strict_decryption: true,
    };

    /// `@encrypted?readonly`: decrypt on read, never encrypt on write.
    pub const READONLY: Self = Self {
        encrypt: false,
        strict_decryption: false,
    };

    /// Resolve a directive from the keys of its suffix.
    ///
    /// `readonly` takes precedence over `strict`.
    #[must_use]
    pub fn from_keys(keys: &[DirectiveKey]) -> Self {
        if keys.contains(&DirectiveKey::Readonly) {
            Self::READONLY
        } else if keys.contains(&DirectiveKey::Strict) {
            Self::STRICT
        } else {
            Self::ENCRYPTED
        }
    }

    /// True for `@encrypted?readonly` fields.
    #[must_use]
    pub fn is_readonly(&self) -> bool {
        !self.encrypt
    }
}

/// Keys recognized in a directive suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Keyword)]
pub enum DirectiveKey {
    /// Fail loudly when a value cannot be decrypted.
    Strict,
    /// Decrypt existing values but store new ones in clear text.
    Readonly,
}

/// Parse a field's documentation comment into a directive.
///
/// Returns `None` when the documentation is absent, empty, or does not
/// contain [`DIRECTIVE_TOKEN`]. When the token occurs more than once only
/// the first occurrence is read.
#[must_use]
pub fn parse_annotation(documentation: Option<&str>) -> Option<Annotation> {
    let documentation = documentation?;
    let start = documentation.find(DIRECTIVE_TOKEN)?;
    let after_token = &documentation[start + DIRECTIVE_TOKEN.len()..];

    let keys: Vec<DirectiveKey> = suffix_keys(after_token)
        .filter_map(DirectiveKey::from_keyword)
        .collect();

    Some(Annotation::from_keys(&keys))
}

/// Iterate the raw key names of the suffix that directly follows the token.
///
/// Yields nothing when the token is not immediately followed by `?`.
fn suffix_keys(after_token: &str) -> impl Iterator<Item = &str> {
    let suffix = after_token
        .strip_prefix(SUFFIX_MARKER)
        .map_or("", |rest| {
            let end = rest
                .find(|c: char| !is_suffix_char(c))
                .unwrap_or(rest.len());
            &rest[..end]
        });

    suffix
        .split(KEY_SEPARATOR)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece
                .split_once(VALUE_SEPARATOR)
                .map_or(piece, |(key, _)| key)
        })
}

fn is_suffix_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || c == KEY_SEPARATOR
        || c == VALUE_SEPARATOR
}
