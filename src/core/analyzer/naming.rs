//! Display name forms of a model and the pluralizer seam.
//!
//! Generated code refers to a model in three spellings: the declared name
//! (`User`), its lowercase form (`user`), and the plural of the lowercase
//! form (`users`). Pluralization is delegated to a [`Pluralize`]
//! implementation; [`EnglishPluralizer`] is the default.

use serde::{Deserialize, Serialize};

/// Turns a singular word into its plural.
///
/// Implementations are expected to be deterministic and free of side
/// effects. The analyzer does not catch panics raised here.
///
/// Any `Fn(&str) -> String` closure is a pluralizer:
///
/// ```
/// # use prisma_field_encryption::Pluralize;
/// let naive = |word: &str| format!("{word}s");
/// assert_eq!(naive.plural("post"), "posts");
/// ```
pub trait Pluralize: Send + Sync {
    fn plural(&self, word: &str) -> String;
}

impl<F> Pluralize for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn plural(&self, word: &str) -> String {
        self(word)
    }
}

/// English pluralization from the `pluralizer` crate, including irregular
/// and uncountable nouns.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPluralizer;

impl Pluralize for EnglishPluralizer {
    fn plural(&self, word: &str) -> String {
        pluralizer::pluralize(word, 2, false)
    }
}

/// The three spellings of a model name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelNameForms {
    /// Declared name, verbatim.
    pub title_case: String,
    /// Declared name, lowercased.
    pub lowercase: String,
    /// Plural of the lowercase form.
    pub plural: String,
}

impl ModelNameForms {
    /// Derive the name forms of `declared` using `pluralizer`.
    #[must_use]
    pub fn new<P: Pluralize + ?Sized>(declared: &str, pluralizer: &P) -> Self {
        let lowercase = declared.to_lowercase();
        let plural = pluralizer.plural(&lowercase);
        Self {
            title_case: declared.to_string(),
            lowercase,
            plural,
        }
    }
}
