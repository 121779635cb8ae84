//! End-to-end closure tests driven by catalog files on disk.

use std::fs;

use tempfile::TempDir;
use typegraph_core::{
    ClosureBuilder, ClosureDocument, ClosureError, Limited, Observer, PrimitivePolicy, Registry,
    ResolveError, resolve_closure,
};

const SHAPES: &str = r#"{
    "types": [
        {
            "name": "shop.Box",
            "fields": [{ "name": "contents", "type": "shop.Item" }]
        },
        { "name": "shop.Item" },
        {
            "name": "shop.Node",
            "fields": [{ "name": "next", "type": "shop.Node" }]
        },
        {
            "name": "shop.Counter",
            "methods": [
                { "name": "size", "returnType": "int" },
                { "name": "at", "returnType": "shop.Item", "parameters": ["int"] },
                { "name": "at", "returnType": "shop.Item", "parameters": ["java.lang.String"] },
                { "name": "clear", "returnType": "void", "visibility": "private" }
            ]
        },
        { "name": "java.lang.Integer" },
        { "name": "java.lang.String" }
    ]
}"#;

fn write_catalog(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("shop.json");
    fs::write(&path, SHAPES).unwrap();
    path
}

fn load(policy: PrimitivePolicy) -> (TempDir, Registry) {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir);
    let registry = Registry::load(&path, policy).unwrap();
    (dir, registry)
}

#[test]
fn box_closure_lists_box_then_item() {
    let (_dir, registry) = load(PrimitivePolicy::Boxed);

    let document = resolve_closure(&registry, ["shop.Box"]).unwrap();
    assert_eq!(document.roots(), ["shop.Box"]);
    assert_eq!(document.identities().collect::<Vec<_>>(), ["shop.Box", "shop.Item"]);
    assert_eq!(document.get("shop.Box").unwrap().referenced_names(), ["shop.Item"]);
}

#[test]
fn self_referential_node_appears_once() {
    let (_dir, registry) = load(PrimitivePolicy::Boxed);

    let document = resolve_closure(&registry, ["shop.Node"]).unwrap();
    assert_eq!(document.len(), 1);
    assert!(document.get("shop.Node").unwrap().referenced_names().is_empty());
}

#[test]
fn primitives_stay_in_signatures_but_not_references() {
    let (_dir, registry) = load(PrimitivePolicy::Dropped);

    let document = resolve_closure(&registry, ["shop.Counter"]).unwrap();
    let counter = document.get("shop.Counter").unwrap();

    assert_eq!(counter.overloads("size")[0].return_type, "int");
    assert_eq!(counter.overloads("at").len(), 2);
    assert!(counter.overloads("clear").is_empty());
    assert_eq!(counter.referenced_names(), ["shop.Item", "java.lang.String"]);
    assert_eq!(
        document.identities().collect::<Vec<_>>(),
        ["shop.Counter", "shop.Item", "java.lang.String"]
    );
}

#[test]
fn boxed_policy_follows_the_boxed_type() {
    let (_dir, registry) = load(PrimitivePolicy::Boxed);

    let document = resolve_closure(&registry, ["shop.Counter"]).unwrap();
    let counter = document.get("shop.Counter").unwrap();

    assert_eq!(counter.overloads("size")[0].return_type, "int");
    assert_eq!(
        counter.referenced_names(),
        ["java.lang.Integer", "shop.Item", "java.lang.String"]
    );
    assert!(document.contains("java.lang.Integer"));
}

#[test]
fn federated_runs_cover_the_closure_without_overlap() {
    let (_dir, registry) = load(PrimitivePolicy::Boxed);

    let first = resolve_closure(&registry, ["shop.Box"]).unwrap();
    let second = ClosureBuilder::new(&registry)
        .pre_resolved(first.identities().map(str::to_string))
        .build(["shop.Counter"])
        .unwrap();

    assert_eq!(
        second.identities().collect::<Vec<_>>(),
        ["shop.Counter", "java.lang.Integer", "java.lang.String"]
    );
}

#[test]
fn unknown_type_produces_no_document() {
    let (_dir, registry) = load(PrimitivePolicy::Boxed);

    let err = resolve_closure(&registry, ["shop.Box", "shop.Missing"]).unwrap_err();
    assert_eq!(err.unknown_type(), Some("shop.Missing"));
    assert_eq!(err.to_string(), "unknown type 'shop.Missing'");
}

#[test]
fn limited_resolver_reports_the_budget() {
    let (_dir, registry) = load(PrimitivePolicy::Boxed);
    let limited = Limited::new(&registry, 1);

    let err = resolve_closure(&limited, ["shop.Box"]).unwrap_err();
    assert!(matches!(
        err,
        ClosureError::Resolver { ref name, source: ResolveError::LimitExceeded { limit: 1 } }
            if name == "shop.Item"
    ));
}

#[test]
fn text_observer_sees_each_type_as_json() {
    let (_dir, registry) = load(PrimitivePolicy::Boxed);
    let mut lines = Vec::new();

    let document = ClosureBuilder::new(&registry)
        .observer(Observer::text(|json| lines.push(json.to_string())))
        .build(["shop.Box"])
        .unwrap();

    assert_eq!(lines.len(), document.len());
    let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first["identity"], "shop.Box");
    assert_eq!(first["displayName"], "Box");
}

#[test]
fn document_survives_a_file_round_trip() {
    let (dir, registry) = load(PrimitivePolicy::Boxed);
    let document = resolve_closure(&registry, ["shop.Counter"]).unwrap();

    let out = dir.path().join("closure.json");
    document.write_json(fs::File::create(&out).unwrap(), true).unwrap();

    let restored = ClosureDocument::from_json(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(restored, document);
}

#[test]
fn pattern_selection_feeds_roots() {
    let (_dir, registry) = load(PrimitivePolicy::Boxed);

    let roots = registry.matching(&["shop.N*", "java.lang.*"]).unwrap();
    assert_eq!(roots, ["shop.Node", "java.lang.Integer", "java.lang.String"]);

    let document = resolve_closure(&registry, &roots).unwrap();
    assert_eq!(document.len(), 3);
}
