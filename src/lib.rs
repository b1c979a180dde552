#![deny(clippy::expect_used)] // using deny so that test code can use it
#![deny(clippy::style)]
#![deny(clippy::unwrap_used)] // using deny so that test code can use it
#![deny(unsafe_code)]
#![forbid(clippy::allow_attributes)]
#![forbid(clippy::complexity)]
#![forbid(clippy::correctness)]
#![forbid(clippy::pedantic)]
#![forbid(clippy::perf)]
#![forbid(clippy::suspicious)]
#![forbid(future_incompatible)]

//! Find `@encrypted` field directives and relation connections in a Prisma
//! datamodel.
//!
//! The crate reads the datamodel the Prisma schema compiler emits (the DMMF
//! document), parses the documentation comment of every non-relation field
//! for an `@encrypted` directive, and groups relation fields by the model
//! they point at. The result is a [`SchemaAnalysis`] that a code generator
//! can serialize or walk directly.
//!
//! ## Examples
//! ```
//! # use prisma_field_encryption::{analyse_dmmf, DataModel, Field, Model};
//! let schema = DataModel::new(vec![Model::new(
//!     "User",
//!     vec![
//!         Field::scalar("id"),
//!         Field::scalar("email").with_documentation("@encrypted?strict"),
//!         Field::relation("posts", "Post").list(),
//!     ],
//! )]);
//!
//! let analysis = analyse_dmmf(&schema);
//! let user = analysis.model("User").expect("annotated model");
//! assert_eq!(user.name.plural, "users");
//! assert!(user.fields["email"].strict_decryption);
//! assert_eq!(user.connections_to("Post")[0].name, "posts");
//! ```

pub mod core;

pub use crate::core::analyzer::{
    AnalyzerOptions, ConnectionEntry, ConnectionTargets, ConnectionsMap,
    EnglishPluralizer, FieldEncryptionMap, ModelAnalysis, ModelNameForms,
    Pluralize, SchemaAnalysis, SchemaAnalyzer, analyse_dmmf,
};
pub use crate::core::annotation::{Annotation, DirectiveKey, parse_annotation};
pub use crate::core::dmmf::{DataModel, DmmfError, Field, FieldKind, Model};

// Re-export proc macros used by the core types
pub use compiler_macros::{EnumKindName, Keyword};
