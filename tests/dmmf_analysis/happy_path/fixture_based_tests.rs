//! Fixture-Based Analysis Tests
//!
//! Runs the analyzer over DMMF documents stored under
//! `tests/fixtures/dmmf/` and checks the complete output.

use crate::dmmf_analysis::{analyse_fixture, entry, load_datamodel};
use prisma_field_encryption::{
    AnalyzerOptions, Annotation, ConnectionTargets, ModelNameForms,
    analyse_dmmf,
};
use serde_json::json;

#[test]
fn blog_fixture_default_options() {
    let analysis = analyse_fixture("blog.json", AnalyzerOptions::default());

    let names: Vec<&str> = analysis
        .iter()
        .map(|model| model.name.title_case.as_str())
        .collect();
    assert_eq!(names, vec!["User", "Post"]);

    let user = analysis.model("User").unwrap();
    assert_eq!(
        user.name,
        ModelNameForms {
            title_case: "User".to_string(),
            lowercase: "user".to_string(),
            plural: "users".to_string(),
        }
    );
    assert_eq!(user.fields.len(), 1);
    assert_eq!(user.fields["name"], Annotation::ENCRYPTED);
    assert_eq!(
        user.connections_to("Post"),
        &[entry("posts", true), entry("pinnedPost", false)]
    );

    // Every relation is grouped, including the one to an unannotated model
    let post = analysis.model("Post").unwrap();
    assert_eq!(post.fields["content"], Annotation::ENCRYPTED);
    let targets: Vec<&String> = post.connections.keys().collect();
    assert_eq!(targets, vec!["User", "Category"]);
    assert_eq!(
        post.connections_to("User"),
        &[entry("author", false), entry("havePinned", true)]
    );
    assert_eq!(post.connections_to("Category"), &[entry("categories", true)]);

    assert!(analysis.model("Category").is_none());
}

#[test]
fn blog_fixture_encrypted_only_targets_serialized() {
    let analysis = analyse_fixture(
        "blog.json",
        AnalyzerOptions::default()
            .with_connection_targets(ConnectionTargets::EncryptedOnly),
    );

    let serialized = serde_json::to_value(&analysis).unwrap();
    let expected = json!({
        "models": [
            {
                "name": {
                    "titleCase": "User",
                    "lowercase": "user",
                    "plural": "users"
                },
                "fields": {
                    "name": { "encrypt": true, "strictDecryption": false }
                },
                "connections": {
                    "Post": [
                        { "name": "posts", "isList": true },
                        { "name": "pinnedPost", "isList": false }
                    ]
                }
            },
            {
                "name": {
                    "titleCase": "Post",
                    "lowercase": "post",
                    "plural": "posts"
                },
                "fields": {
                    "content": { "encrypt": true, "strictDecryption": false }
                },
                "connections": {
                    "User": [
                        { "name": "author", "isList": false },
                        { "name": "havePinned", "isList": true }
                    ]
                }
            }
        ]
    });
    assert_eq!(serialized, expected);
}

#[test]
fn directives_fixture() {
    let analysis =
        analyse_fixture("directives.json", AnalyzerOptions::default());

    // AuditLog only has a relation and is dropped
    assert_eq!(analysis.len(), 1);
    let employee = &analysis.models[0];
    assert_eq!(employee.name.lowercase, "employee");
    assert_eq!(employee.name.plural, "employees");

    let fields: Vec<(&String, &Annotation)> = employee.fields.iter().collect();
    assert_eq!(
        fields,
        vec![
            (&"ssn".to_string(), &Annotation::STRICT),
            (&"legacyNotes".to_string(), &Annotation::READONLY),
            (&"clearance".to_string(), &Annotation::READONLY),
            (&"nickname".to_string(), &Annotation::ENCRYPTED),
        ]
    );

    let encrypted: Vec<&str> =
        employee.encrypted_fields().map(|(name, _)| name).collect();
    assert_eq!(encrypted, vec!["ssn", "nickname"]);

    // The documented relation field is a connection, not an encrypted field
    assert!(!employee.fields.contains_key("manager"));
    assert_eq!(
        employee.connections_to("Employee"),
        &[entry("manager", false), entry("reports", true)]
    );
    assert_eq!(employee.connections_to("AuditLog"), &[entry("logs", true)]);
}

#[test]
fn directives_fixture_without_readonly() {
    let analysis = analyse_fixture(
        "directives.json",
        AnalyzerOptions::default()
            .with_readonly(false)
            .with_connection_targets(ConnectionTargets::EncryptedOnly),
    );

    let employee = analysis.model("Employee").unwrap();
    let names: Vec<&String> = employee.fields.keys().collect();
    assert_eq!(names, vec!["ssn", "nickname"]);

    let targets: Vec<&String> = employee.connections.keys().collect();
    assert_eq!(targets, vec!["Employee"]);
}

#[test]
fn fields_and_connections_are_disjoint() {
    for fixture in ["blog.json", "directives.json"] {
        let schema = load_datamodel(fixture);
        let analysis = analyse_dmmf(&schema);

        for model in &analysis {
            let source = schema.model(&model.name.title_case).unwrap();
            for field_name in model.fields.keys() {
                let field = source
                    .fields
                    .iter()
                    .find(|f| &f.name == field_name)
                    .unwrap();
                assert!(!field.is_relation(), "{fixture}: {field_name}");
            }
            for entries in model.connections.values() {
                for connection in entries {
                    assert!(!model.fields.contains_key(&connection.name));
                }
            }
        }
    }
}

#[test]
fn analysis_round_trips_through_json() {
    let analysis = analyse_fixture("blog.json", AnalyzerOptions::default());
    let pretty = analysis.to_json_pretty().unwrap();
    let back: prisma_field_encryption::SchemaAnalysis =
        serde_json::from_str(&pretty).unwrap();
    assert_eq!(back, analysis);
}
