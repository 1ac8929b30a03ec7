mod common;

use faction_config::{SubfactionCatalog, SubfactionKind, SubfactionRecord, TerritoryCatalog};

/// Parse-serialize-parse must reproduce the catalogue field for field,
/// including record order and optional-field absence.
#[test]
fn subfaction_catalogue_round_trips() {
    let catalog = common::sample_subfactions();
    let reparsed = SubfactionCatalog::from_json_str(&catalog.to_json_string());
    assert_eq!(catalog, reparsed);
}

#[test]
fn territory_catalogue_round_trips() {
    let catalog = common::sample_territories();
    let reparsed = TerritoryCatalog::from_json_str(&catalog.to_json_string());
    assert_eq!(catalog, reparsed);
}

/// A record whose `kind` equals the default parses identically whether
/// or not the key was written; the writer elides it either way.
#[test]
fn default_kind_elision_is_reversible() {
    let explicit = r#"{"subfactions": [{"subfactionId": "a", "kind": "POLITICAL"}]}"#;
    let implicit = r#"{"subfactions": [{"subfactionId": "a"}]}"#;
    let from_explicit = SubfactionCatalog::from_json_str(explicit);
    let from_implicit = SubfactionCatalog::from_json_str(implicit);
    assert_eq!(from_explicit, from_implicit);
    assert_eq!(from_explicit.subfactions[0].kind, SubfactionKind::Political);

    let rendered = from_explicit.to_json_string();
    assert!(!rendered.contains("\"kind\""));
    assert_eq!(SubfactionCatalog::from_json_str(&rendered), from_explicit);
}

#[test]
fn array_order_is_preserved_exactly() {
    let ids = ["delta", "alpha", "echo", "bravo", "charlie"];
    let catalog = SubfactionCatalog {
        subfactions: ids
            .iter()
            .map(|id| SubfactionRecord {
                subfaction_id: id.to_string(),
                name: id.to_uppercase(),
                faction_id: "f1".to_string(),
                ..SubfactionRecord::default()
            })
            .collect(),
    };
    let reparsed = SubfactionCatalog::from_json_str(&catalog.to_json_string());
    let reparsed_ids: Vec<&str> = reparsed
        .subfactions
        .iter()
        .map(|record| record.subfaction_id.as_str())
        .collect();
    assert_eq!(reparsed_ids, ids);
}

#[test]
fn trait_duplicates_survive_round_trip() {
    let doc = r#"{"subfactions": [{"subfactionId": "a", "members": [{"role": "aide", "traits": ["WARY", "WARY"]}]}]}"#;
    let catalog = SubfactionCatalog::from_json_str(doc);
    assert_eq!(catalog.subfactions[0].members[0].traits, vec!["WARY", "WARY"]);
    let reparsed = SubfactionCatalog::from_json_str(&catalog.to_json_string());
    assert_eq!(catalog, reparsed);
}

#[test]
fn escaped_characters_round_trip() {
    let catalog = SubfactionCatalog {
        subfactions: vec![SubfactionRecord {
            subfaction_id: "odd".to_string(),
            name: "The \"Quoted\" Cartel \\ Ltd".to_string(),
            faction_id: "f1".to_string(),
            ..SubfactionRecord::default()
        }],
    };
    let reparsed = SubfactionCatalog::from_json_str(&catalog.to_json_string());
    assert_eq!(catalog, reparsed);
}
