//! Errors raised while loading a DMMF document.

use thiserror::Error;

/// Failure to map a DMMF document into a [`DataModel`](super::DataModel).
#[derive(Debug, Error)]
pub enum DmmfError {
    /// The input is not JSON, or does not have the DMMF datamodel shape.
    #[error("invalid DMMF document: {0}")]
    Json(#[from] serde_json::Error),

    /// An `object` field whose `type` is empty.
    #[error("relation field `{model}.{field}` does not name a target model")]
    MissingRelationTarget {
        /// Model declaring the field.
        model: String,
        /// Offending field.
        field: String,
    },
}
