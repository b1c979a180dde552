//! Configuration knobs for schema analysis.
//!
//! The defaults reproduce the plain grouping pass: every relation field is
//! recorded and every parsed directive, read-only ones included, is kept.

use crate::EnumKindName;

/// Which relation groups are kept in a model's connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumKindName)]
pub enum ConnectionTargets {
    /// Record every relation field.
    #[default]
    All,
    /// Drop groups whose target model has no annotated field.
    EncryptedOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Connection filtering applied after the per-model pass
    pub connection_targets: ConnectionTargets,

    /// Keep `@encrypted?readonly` fields in the field map
    pub include_readonly: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            connection_targets: ConnectionTargets::All,
            include_readonly: true,
        }
    }
}

impl AnalyzerOptions {
    #[must_use]
    pub fn with_connection_targets(
        mut self,
        connection_targets: ConnectionTargets,
    ) -> Self {
        self.connection_targets = connection_targets;
        self
    }

    #[must_use]
    pub fn with_readonly(mut self, include_readonly: bool) -> Self {
        self.include_readonly = include_readonly;
        self
    }
}
