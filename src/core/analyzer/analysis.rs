//! Result types produced by the schema analyzer.
//!
//! Maps are insertion-ordered: field order and connection order follow the
//! declaration order of the source model, which downstream code generation
//! relies on.

use super::naming::ModelNameForms;
use crate::core::annotation::Annotation;
use crate::core::dmmf::Field;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name → parsed directive, for non-relation fields only.
pub type FieldEncryptionMap = IndexMap<String, Annotation>;

/// Target model name → relation fields pointing at it.
pub type ConnectionsMap = IndexMap<String, Vec<ConnectionEntry>>;

/// One relation field of a model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionEntry {
    /// Name of the relation field on the source model.
    pub name: String,
    /// Whether the relation is to-many.
    pub is_list: bool,
}

impl From<&Field> for ConnectionEntry {
    fn from(field: &Field) -> Self {
        Self {
            name: field.name.clone(),
            is_list: field.is_list,
        }
    }
}

/// Analysis of a single model with at least one annotated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAnalysis {
    pub name: ModelNameForms,
    pub fields: FieldEncryptionMap,
    pub connections: ConnectionsMap,
}

impl ModelAnalysis {
    /// Fields whose writes are encrypted (read-only fields excluded).
    pub fn encrypted_fields(
        &self,
    ) -> impl Iterator<Item = (&str, &Annotation)> {
        self.fields
            .iter()
            .filter(|(_, annotation)| annotation.encrypt)
            .map(|(name, annotation)| (name.as_str(), annotation))
    }

    /// Fields that require strict decryption.
    pub fn strict_fields(&self) -> impl Iterator<Item = (&str, &Annotation)> {
        self.fields
            .iter()
            .filter(|(_, annotation)| annotation.strict_decryption)
            .map(|(name, annotation)| (name.as_str(), annotation))
    }

    /// Relation fields pointing at `target`, in declaration order.
    #[must_use]
    pub fn connections_to(&self, target: &str) -> &[ConnectionEntry] {
        self.connections
            .get(target)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Analysis of a whole datamodel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaAnalysis {
    /// Annotated models, in schema declaration order.
    pub models: Vec<ModelAnalysis>,
}

impl SchemaAnalysis {
    /// Find a model by its declared name.
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&ModelAnalysis> {
        self.models
            .iter()
            .find(|model| model.name.title_case == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModelAnalysis> {
        self.models.iter()
    }

    /// Serialize for a code generator.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a SchemaAnalysis {
    type Item = &'a ModelAnalysis;
    type IntoIter = std::slice::Iter<'a, ModelAnalysis>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}
