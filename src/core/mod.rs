//! Analysis pipeline: the datamodel description, the annotation parser,
//! and the schema analyzer that combines them.

pub mod analyzer;
pub mod annotation;
pub mod dmmf;
