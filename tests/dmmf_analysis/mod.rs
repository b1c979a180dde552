//! DMMF Analysis Integration Test Utilities
//!
//! Shared helpers for loading fixtures, running the analyzer, and checking
//! that concurrent runs agree.

use prisma_field_encryption::{
    AnalyzerOptions, ConnectionEntry, DataModel, SchemaAnalysis, SchemaAnalyzer,
};
use std::fs;
use std::sync::{Arc, Once};
use std::thread;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Honors `RUST_LOG`; silent by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| {
                        tracing_subscriber::EnvFilter::new("off")
                    }),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Read a fixture from `tests/fixtures/dmmf/`.
pub fn load_fixture(path: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/dmmf/{path}"))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {path}"))
}

/// Load a fixture through the DMMF adapter.
pub fn load_datamodel(path: &str) -> DataModel {
    init_tracing();
    DataModel::from_dmmf_json(&load_fixture(path))
        .unwrap_or_else(|e| panic!("Fixture {path} is not valid DMMF: {e}"))
}

/// Load and analyse a fixture with the given options.
pub fn analyse_fixture(path: &str, options: AnalyzerOptions) -> SchemaAnalysis {
    let schema = load_datamodel(path);
    SchemaAnalyzer::new(options).analyse(&schema)
}

/// Shorthand for building expected connection entries.
pub fn entry(name: &str, is_list: bool) -> ConnectionEntry {
    ConnectionEntry {
        name: name.to_string(),
        is_list,
    }
}

/// Analyse the same schema from `thread_count` threads and assert that
/// every result equals a sequential baseline.
pub fn assert_concurrent_deterministic(
    schema: DataModel,
    options: &AnalyzerOptions,
    thread_count: usize,
) {
    let analyzer = Arc::new(SchemaAnalyzer::new(options.clone()));
    let schema = Arc::new(schema);
    let baseline = analyzer.analyse(&schema);

    let handles: Vec<_> = (0..thread_count)
        .map(|_| {
            let analyzer = Arc::clone(&analyzer);
            let schema = Arc::clone(&schema);
            thread::spawn(move || analyzer.analyse(&schema))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle
            .join()
            .unwrap_or_else(|_| panic!("Analysis thread {i} panicked"));
        assert_eq!(
            result, baseline,
            "Thread {i} produced a different analysis"
        );
    }
}
