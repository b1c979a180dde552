//! Datamodel description consumed by the analyzer.
//!
//! These types mirror the part of Prisma's DMMF (Data Model Meta Format)
//! that encryption analysis needs: models in declaration order, their
//! fields in declaration order, each field's documentation comment, list
//! multiplicity, and whether it points at another model. The analyzer only
//! ever sees these types; [`document`] maps the JSON emitted by the Prisma
//! schema compiler into them.
//!
//! ## Examples
//! ```
//! # use prisma_field_encryption::core::dmmf::{DataModel, Field, Model};
//! let post = Model::new(
//!     "Post",
//!     vec![
//!         Field::scalar("content").with_documentation("@encrypted"),
//!         Field::relation("author", "User"),
//!     ],
//! );
//! assert_eq!(post.fields[1].relation_target(), Some("User"));
//! assert_eq!(post.fields[1].kind.name(), "Relation");
//! let schema = DataModel::new(vec![post]);
//! assert!(schema.model("Post").is_some());
//! ```

pub mod document;
pub mod error;

pub use error::DmmfError;

use crate::EnumKindName;

/// An ordered list of models, as declared in the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataModel {
    /// Models in declaration order.
    pub models: Vec<Model>,
}

impl DataModel {
    #[must_use]
    pub fn new(models: Vec<Model>) -> Self {
        Self { models }
    }

    /// Find a model by its declared name.
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }
}

/// A single model declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Declared name, e.g. `User`.
    pub name: String,

    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl Model {
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// A single field of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name, unique within its model.
    pub name: String,

    /// Documentation comment text, without comment markers.
    pub documentation: Option<String>,

    /// Whether the field is a list (`Post[]`).
    pub is_list: bool,

    /// Type classification.
    pub kind: FieldKind,
}

/// How a field's type is classified.
#[derive(Debug, Clone, PartialEq, Eq, EnumKindName)]
pub enum FieldKind {
    /// Built-in scalar type (`String`, `Int`, ...).
    Scalar,
    /// User-declared enum.
    Enum,
    /// `Unsupported("...")` native type.
    Unsupported,
    /// Relation to another model.
    Relation {
        /// Declared name of the target model.
        target: String,
    },
}

impl Field {
    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            documentation: None,
            is_list: false,
            kind,
        }
    }

    /// A scalar field with no documentation.
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Scalar)
    }

    /// An enum-typed field with no documentation.
    #[must_use]
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Enum)
    }

    /// A singular relation to `target`.
    #[must_use]
    pub fn relation(
        name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            name,
            FieldKind::Relation {
                target: target.into(),
            },
        )
    }

    /// Mark the field as a list.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Attach documentation text.
    #[must_use]
    pub fn with_documentation(
        mut self,
        documentation: impl Into<String>,
    ) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Join captured `///` doc lines into documentation text.
    ///
    /// Lines are trimmed of a single leading space and joined with `\n`, the
    /// way the Prisma compiler fills the DMMF `documentation` property.
    /// Returns `None` for an empty line list.
    #[must_use]
    pub fn documentation_from_lines<S: AsRef<str>>(
        lines: &[S],
    ) -> Option<String> {
        if lines.is_empty() {
            return None;
        }
        let joined = lines
            .iter()
            .map(|line| {
                let line = line.as_ref();
                line.strip_prefix(' ').unwrap_or(line)
            })
            .collect::<Vec<_>>()
            .join("\n");
        Some(joined)
    }

    /// Name of the target model when this field is a relation.
    #[must_use]
    pub fn relation_target(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Relation { target } => Some(target),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_relation(&self) -> bool {
        matches!(self.kind, FieldKind::Relation { .. })
    }
}
