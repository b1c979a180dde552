//! Load a [`DataModel`] from the DMMF JSON emitted by the Prisma compiler.
//!
//! Prisma generators receive the DMMF as JSON. Only a handful of its
//! properties matter here; every other key (`isRequired`, `relationName`,
//! `default`, the `schema` and `mappings` sections, ...) is ignored.
//!
//! Both the full document (`{ "datamodel": { "models": [...] } }`) and the
//! bare datamodel (`{ "models": [...] }`) are accepted.
//!
//! ## Examples
//! ```
//! # use prisma_field_encryption::core::dmmf::DataModel;
//! let json = r#"{
//!   "datamodel": {
//!     "models": [{
//!       "name": "User",
//!       "fields": [
//!         { "name": "id", "kind": "scalar", "isList": false, "type": "Int" },
//!         { "name": "name", "kind": "scalar", "isList": false,
//!           "type": "String", "documentation": "@encrypted" }
//!       ]
//!     }]
//!   }
//! }"#;
//! let schema = DataModel::from_dmmf_json(json).expect("valid DMMF");
//! let name = &schema.models[0].fields[1];
//! assert_eq!(name.documentation.as_deref(), Some("@encrypted"));
//! ```

use super::{DataModel, DmmfError, Field, FieldKind, Model};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Key of the datamodel section in a full DMMF document.
const DATAMODEL_KEY: &str = "datamodel";

#[derive(Debug, Deserialize)]
struct RawDatamodel {
    #[serde(default)]
    models: Vec<RawModel>,
}

#[derive(Debug, Deserialize)]
struct RawModel {
    name: String,
    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name: String,
    kind: RawFieldKind,
    #[serde(default)]
    is_list: bool,
    #[serde(rename = "type", default)]
    type_name: String,
    #[serde(default)]
    documentation: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawFieldKind {
    Scalar,
    Object,
    Enum,
    Unsupported,
}

impl DataModel {
    /// Parse DMMF JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DmmfError::Json`] when the text is not valid JSON or lacks
    /// the datamodel shape, and [`DmmfError::MissingRelationTarget`] when a
    /// relation field has no target type.
    pub fn from_dmmf_json(json: &str) -> Result<Self, DmmfError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_dmmf_value(value)
    }

    /// Map an already-parsed DMMF JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`DataModel::from_dmmf_json`].
    pub fn from_dmmf_value(value: Value) -> Result<Self, DmmfError> {
        let datamodel = match value {
            Value::Object(mut document)
                if document.contains_key(DATAMODEL_KEY) =>
            {
                document.remove(DATAMODEL_KEY).unwrap_or(Value::Null)
            }
            other => other,
        };

        let raw: RawDatamodel = serde_json::from_value(datamodel)?;
        let models = raw
            .models
            .into_iter()
            .map(RawModel::into_model)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(models = models.len(), "loaded DMMF datamodel");
        Ok(Self::new(models))
    }
}

impl RawModel {
    fn into_model(self) -> Result<Model, DmmfError> {
        let Self { name, fields } = self;
        let fields = fields
            .into_iter()
            .map(|field| field.into_field(&name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Model::new(name, fields))
    }
}

impl RawField {
    fn into_field(self, model: &str) -> Result<Field, DmmfError> {
        let kind = match self.kind {
            RawFieldKind::Scalar => FieldKind::Scalar,
            RawFieldKind::Enum => FieldKind::Enum,
            RawFieldKind::Unsupported => FieldKind::Unsupported,
            RawFieldKind::Object if self.type_name.is_empty() => {
                return Err(DmmfError::MissingRelationTarget {
                    model: model.to_string(),
                    field: self.name,
                });
            }
            RawFieldKind::Object => FieldKind::Relation {
                target: self.type_name,
            },
        };

        Ok(Field {
            name: self.name,
            documentation: self.documentation,
            is_list: self.is_list,
            kind,
        })
    }
}
