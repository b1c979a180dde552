//! Schema analysis: encrypted fields and relation connections per model.
//!
//! The analyzer walks the datamodel once. For every model it
//!
//! 1. derives the model's name forms,
//! 2. parses the documentation of each non-relation field for an
//!    `@encrypted` directive,
//! 3. groups relation fields under the name of the model they point at,
//!    keeping declaration order and list multiplicity,
//!
//! and keeps the model only if at least one field carried a directive.
//! Relation-only models are dropped together with their connections.
//!
//! Analysis is pure: the input is only borrowed and every call builds a
//! fresh [`SchemaAnalysis`], so one analyzer can be shared across threads.

pub mod analysis;
pub mod naming;
pub mod options;

// Re-export main types for convenience
pub use analysis::{
    ConnectionEntry, ConnectionsMap, FieldEncryptionMap, ModelAnalysis,
    SchemaAnalysis,
};
pub use naming::{EnglishPluralizer, ModelNameForms, Pluralize};
pub use options::{AnalyzerOptions, ConnectionTargets};

use crate::core::annotation::parse_annotation;
use crate::core::dmmf::{DataModel, FieldKind, Model};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Analyse a datamodel with default options and English pluralization.
#[must_use]
pub fn analyse_dmmf(schema: &DataModel) -> SchemaAnalysis {
    SchemaAnalyzer::default().analyse(schema)
}

/// Configured schema analyzer.
#[derive(Debug, Clone)]
pub struct SchemaAnalyzer<P = EnglishPluralizer> {
    options: AnalyzerOptions,
    pluralizer: P,
}

impl SchemaAnalyzer {
    /// Create an analyzer using [`EnglishPluralizer`].
    #[must_use]
    pub fn new(options: AnalyzerOptions) -> Self {
        Self::with_pluralizer(options, EnglishPluralizer)
    }
}

impl Default for SchemaAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerOptions::default())
    }
}

impl<P: Pluralize> SchemaAnalyzer<P> {
    /// Create an analyzer with a custom pluralizer.
    #[must_use]
    pub fn with_pluralizer(options: AnalyzerOptions, pluralizer: P) -> Self {
        Self {
            options,
            pluralizer,
        }
    }

    /// Analyse `schema`.
    #[must_use]
    pub fn analyse(&self, schema: &DataModel) -> SchemaAnalysis {
        debug!(
            models = schema.models.len(),
            connection_targets = self.options.connection_targets.name(),
            "analysing datamodel"
        );

        let mut models: Vec<ModelAnalysis> = schema
            .models
            .iter()
            .filter_map(|model| self.analyse_model(model))
            .collect();

        if self.options.connection_targets == ConnectionTargets::EncryptedOnly
        {
            let annotated: HashSet<String> = models
                .iter()
                .map(|model| model.name.title_case.clone())
                .collect();
            for model in &mut models {
                model
                    .connections
                    .retain(|target, _| annotated.contains(target));
            }
        }

        SchemaAnalysis { models }
    }

    fn analyse_model(&self, model: &Model) -> Option<ModelAnalysis> {
        let name = ModelNameForms::new(&model.name, &self.pluralizer);
        let mut fields = FieldEncryptionMap::new();
        let mut connections = ConnectionsMap::new();

        for field in &model.fields {
            match &field.kind {
                FieldKind::Relation { target } => {
                    connections
                        .entry(target.clone())
                        .or_default()
                        .push(ConnectionEntry::from(field));
                }
                FieldKind::Scalar
                | FieldKind::Enum
                | FieldKind::Unsupported => {
                    let Some(annotation) =
                        parse_annotation(field.documentation.as_deref())
                    else {
                        continue;
                    };
                    if annotation.is_readonly()
                        && !self.options.include_readonly
                    {
                        continue;
                    }
                    trace!(
                        model = %model.name,
                        field = %field.name,
                        kind = field.kind.name(),
                        encrypt = annotation.encrypt,
                        strict = annotation.strict_decryption,
                        "found encryption directive"
                    );
                    fields.insert(field.name.clone(), annotation);
                }
            }
        }

        if fields.is_empty() {
            debug!(model = %model.name, "no annotated fields, skipping model");
            return None;
        }

        debug!(
            model = %model.name,
            fields = fields.len(),
            connections = connections.len(),
            "analysed model"
        );
        Some(ModelAnalysis {
            name,
            fields,
            connections,
        })
    }
}
