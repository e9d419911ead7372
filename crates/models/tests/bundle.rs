//! Integration tests for bundle construction and decoding across releases.

use fhir_models::{
    Bundle, BundleForVersion, FhirVersion, R4, VersionedResource, names, r4, r4b, r5,
};
use serde_json::json;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn patient(id: &str) -> r4::Patient {
    r4::Patient {
        id: Some(id.to_string()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_collection_assigns_unique_urn_uuids() {
    let bundle: BundleForVersion<R4, names::Patient> =
        r4::Bundle::collection((0..25).map(|i| patient(&format!("p{i}"))));

    assert_eq!(bundle.entry.len(), 25);
    let urls: HashSet<&str> = bundle
        .entry
        .iter()
        .map(|entry| entry.full_url.as_deref().unwrap())
        .collect();
    assert_eq!(urls.len(), 25);
    assert!(urls.iter().all(|url| url.starts_with("urn:uuid:")));

    let timestamp = bundle.timestamp.as_deref().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[test]
fn test_searchset_bundle() {
    let entries = vec![
        r4b::BundleEntry::new(
            Some("http://example.org/fhir/Patient/a".into()),
            r4b::Resource::from(r4b::Patient::default()),
        ),
        r4b::BundleEntry::new(
            None,
            r4b::Resource::from(r4b::OperationOutcome::success("2 matches")),
        ),
    ];
    let bundle = r4b::Bundle::searchset(1, entries);

    let value = serde_json::to_value(&bundle).unwrap();
    assert_eq!(value["resourceType"], "Bundle");
    assert_eq!(value["type"], "searchset");
    assert_eq!(value["total"], 1);
    assert_eq!(value["entry"][0]["fullUrl"], "http://example.org/fhir/Patient/a");
    assert_eq!(value["entry"][1]["resource"]["resourceType"], "OperationOutcome");
    assert!(value.get("timestamp").is_none());
}

#[test]
fn test_default_bundle_holds_any_release_resource() {
    let bundle: r5::Bundle = serde_json::from_value(json!({
        "resourceType": "Bundle",
        "type": "transaction",
        "entry": [
            {
                "resource": {"resourceType": "Patient", "id": "p1"},
                "request": {"method": "POST", "url": "Patient"}
            },
            {
                "resource": {
                    "resourceType": "Transport",
                    "intent": "order",
                    "requestedLocation": {"reference": "Location/a"},
                    "currentLocation": {"reference": "Location/b"}
                },
                "request": {"method": "POST", "url": "Transport"}
            }
        ]
    }))
    .unwrap();

    let kinds: Vec<&str> = bundle
        .resources()
        .map(|resource| resource.resource_type().as_str())
        .collect();
    assert_eq!(kinds, ["Patient", "Transport"]);
    assert_eq!(
        bundle.entry[0].request.as_ref().unwrap().method,
        r5::HttpVerb::Post
    );
    assert_eq!(bundle.version(), FhirVersion::R5);
}

#[test]
fn test_bundles_reject_foreign_entries() {
    let json = json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [{
            "resource": {
                "resourceType": "SubscriptionTopic",
                "url": "http://example.org/FHIR/SubscriptionTopic/admission",
                "status": "active"
            }
        }]
    });

    assert!(serde_json::from_value::<r4::Bundle>(json.clone()).is_err());
    assert!(serde_json::from_value::<r4b::Bundle>(json.clone()).is_ok());
    assert!(Bundle::from_value(FhirVersion::R4, json.clone()).is_err());
    assert_eq!(
        Bundle::from_value(FhirVersion::R5, json).unwrap().version(),
        FhirVersion::R5
    );
}

#[test]
fn test_typed_bundle_into_resources() {
    let bundle = r4::Bundle::collection([patient("a"), patient("b")]);
    let ids: Vec<String> = bundle.into_resources().filter_map(|p| p.id).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn test_nested_bundles() {
    let inner = r4::Bundle::collection([r4::Resource::from(patient("inner"))]);
    let outer = r4::Bundle::collection([r4::Resource::from(inner)]);

    let value = serde_json::to_value(&outer).unwrap();
    let decoded: r4::Bundle = serde_json::from_value(value).unwrap();
    match decoded.resources().next() {
        Some(r4::Resource::Bundle(inner)) => {
            assert_eq!(inner.resources().next().and_then(|r| r.id()), Some("inner"));
        }
        other => panic!("unexpected entry: {other:?}"),
    }
}
