//! Integration tests for version-indexed resolution.
//!
//! Covers the typed lookups (`ResourceForVersion`, `BundleForVersion`), the
//! runtime resolver and the decoding entry points built on top of them.

use fhir_models::{
    BundleForVersion, FhirError, FhirResource, FhirVersion, R4, R4B, R5, ResourceForVersion,
    SchemaRegistry, Version, names, r4, r4b, r5, resolve_bundle, resolve_resource,
    resource_types,
};
use serde_json::{Value, json};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn patient_json(family: &str, given: &str, gender: &str, birth_date: &str) -> Value {
    json!({
        "resourceType": "Patient",
        "name": [{"family": family, "given": [given]}],
        "gender": gender,
        "birthDate": birth_date
    })
}

fn glucose(value: f64) -> r5::Observation {
    r5::Observation {
        status: r5::ObservationStatus::Final,
        code: r5::CodeableConcept::from_coding(r5::Coding::new("http://loinc.org", "15074-8")),
        subject: Some(r5::Reference::to("Patient/example")),
        value_quantity: Some(r5::Quantity::ucum(value, "mmol/L")),
        ..Default::default()
    }
}

/// Resource type names as generated for release `V`, before the registry sees them
fn generated_names<V: Version>() -> Vec<&'static str> {
    V::resource_types()
        .iter()
        .map(|resource_type| V::resource_type_str(*resource_type))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_r4_patient() {
    let value = patient_json("Chalmers", "Peter", "male", "1974-12-25");
    let patient: ResourceForVersion<R4, names::Patient> =
        serde_json::from_value(value.clone()).unwrap();

    assert_eq!(patient.resource_type, "Patient");
    assert_eq!(patient.gender, Some(r4::AdministrativeGender::Male));
    assert_eq!(patient.birth_date.as_deref(), Some("1974-12-25"));
    assert_eq!(patient.name[0].family.as_deref(), Some("Chalmers"));
    assert_eq!(serde_json::to_value(&patient).unwrap(), value);

    let descriptor = resolve_resource(FhirVersion::R4, "Patient").unwrap();
    assert_eq!(descriptor.version, FhirVersion::R4);
    assert_eq!(descriptor.resource_type, "Patient");
}

#[test]
fn test_r5_bundle_of_observation() {
    let bundle: BundleForVersion<R5, names::Observation> =
        r5::Bundle::collection([glucose(6.3), glucose(5.1)]);

    assert_eq!(bundle.resource_type, "Bundle");
    assert_eq!(bundle.bundle_type, r5::BundleType::Collection);
    let values: Vec<f64> = bundle
        .resources()
        .filter_map(|observation| observation.value_quantity.as_ref()?.value)
        .collect();
    assert_eq!(values, [6.3, 5.1]);

    // Entries decode back into the R5 Observation shape only.
    let json = serde_json::to_value(&bundle).unwrap();
    let decoded: BundleForVersion<R5, names::Observation> =
        serde_json::from_value(json.clone()).unwrap();
    assert_eq!(decoded, bundle);

    let mut mixed = json;
    mixed["entry"][1]["resource"] = patient_json("Doe", "Jane", "female", "1990-01-01");
    assert!(serde_json::from_value::<BundleForVersion<R5, names::Observation>>(mixed).is_err());

    let descriptor = resolve_bundle(FhirVersion::R5, "Observation").unwrap();
    assert_eq!(descriptor.version, FhirVersion::R5);
    assert_eq!(descriptor.entry.resource_type, "Observation");
}

#[test]
fn test_r4b_medication() {
    let medication: ResourceForVersion<R4B, names::Medication> = serde_json::from_value(json!({
        "resourceType": "Medication",
        "id": "med0310",
        "code": {
            "coding": [{"system": "http://snomed.info/sct", "code": "430127000"}]
        },
        "form": {"text": "Oral Form Oral Tablet"},
        "manufacturer": {"reference": "Organization/mmanu"}
    }))
    .unwrap();

    assert!(medication.code.as_ref().unwrap().has_code("http://snomed.info/sct", "430127000"));
    assert_eq!(
        medication.form.as_ref().unwrap().text.as_deref(),
        Some("Oral Form Oral Tablet")
    );

    let resource = FhirResource::from(r4b::Resource::from(medication));
    assert_eq!(resource.version(), FhirVersion::R4B);
    assert_eq!(resource.resource_type(), "Medication");
}

#[test]
fn test_reject_unsupported_version() {
    let err = "R6".parse::<FhirVersion>().unwrap_err();
    assert!(matches!(err, FhirError::InvalidVersion(ref v) if v == "R6"));
    assert!(err.to_string().contains("R6"));
}

#[test]
fn test_reject_unknown_resource_name() {
    let err = resolve_resource(FhirVersion::R4, "ObservationX").unwrap_err();
    assert_eq!(err.to_string(), "Unknown resource type for FHIR R4: ObservationX");

    let err = resolve_bundle(FhirVersion::R4, "ObservationX").unwrap_err();
    assert!(matches!(
        err,
        FhirError::UnknownResourceType { version: FhirVersion::R4, ref resource_type }
            if resource_type == "ObservationX"
    ));

    let err = FhirResource::from_value(FhirVersion::R4, json!({"resourceType": "ObservationX"}))
        .unwrap_err();
    assert!(matches!(err, FhirError::UnknownResourceType { .. }));
}

#[test]
fn test_release_specific_names() {
    assert!(resolve_resource(FhirVersion::R4, "MedicinalProduct").is_ok());
    assert!(resolve_resource(FhirVersion::R4B, "MedicinalProduct").is_err());
    assert!(resolve_resource(FhirVersion::R4, "SubscriptionTopic").is_err());
    assert!(resolve_resource(FhirVersion::R4B, "SubscriptionTopic").is_ok());
    assert!(resolve_resource(FhirVersion::R4B, "Transport").is_err());
    assert!(resolve_resource(FhirVersion::R5, "Transport").is_ok());
}

#[test]
fn test_resolution_is_pure() {
    for version in FhirVersion::ALL {
        for name in resource_types(version) {
            let first = resolve_resource(version, name).unwrap();
            assert_eq!(first.resource_type, name);
            assert_eq!(resolve_resource(version, name).unwrap(), first);
            assert_eq!(resolve_bundle(version, name).unwrap().entry, first);
        }
    }
}

#[test]
fn test_name_sets_are_unique_per_release() {
    for (version, names) in [
        (FhirVersion::R4, generated_names::<R4>()),
        (FhirVersion::R4B, generated_names::<R4B>()),
        (FhirVersion::R5, generated_names::<R5>()),
    ] {
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len(), "{version} repeats a resource type");
        assert_eq!(resource_types(version).len(), names.len(), "{version}");
    }

    let err = SchemaRegistry::build([
        (FhirVersion::R4, generated_names::<R4>()),
        (FhirVersion::R4B, generated_names::<R4B>()),
        (FhirVersion::R5, [generated_names::<R5>(), vec!["Patient"]].concat()),
    ])
    .unwrap_err();
    assert!(matches!(err, FhirError::DuplicateResourceType { version: FhirVersion::R5, .. }));
}

#[test]
fn test_releases_decode_independently() {
    let value = json!({
        "resourceType": "DiagnosticReport",
        "status": "modified",
        "code": {"text": "CBC"}
    });

    // `modified` is an R5 status only.
    assert!(fhir_models::DiagnosticReport::from_value(FhirVersion::R5, value.clone()).is_ok());
    let err = fhir_models::DiagnosticReport::from_value(FhirVersion::R4, value).unwrap_err();
    assert!(matches!(err, FhirError::Serialization(_)));
}

#[test]
fn test_missing_resource_type() {
    let err = FhirResource::from_value(FhirVersion::R5, json!({"id": "x"})).unwrap_err();
    assert!(matches!(err, FhirError::MissingResourceType));

    let outcome = r5::OperationOutcome::from_error(&err);
    assert_eq!(serde_json::to_value(&outcome).unwrap()["issue"][0]["code"], "required");
}

#[test]
fn test_choice_elements_hold_one_value() {
    let value = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "Glucose"},
        "valueQuantity": {"value": 6.3, "unit": "mmol/L"},
        "valueString": "6.3 mmol/L"
    });

    for version in FhirVersion::ALL {
        let err = FhirResource::from_value(version, value.clone()).unwrap_err();
        assert!(matches!(err, FhirError::ConflictingChoice { element: "value", .. }));
        assert!(fhir_models::Observation::from_value(version, value.clone()).is_err());
    }

    // Union content is checked inside bundles too.
    let bundle = json!({
        "resourceType": "Bundle",
        "type": "collection",
        "entry": [{"resource": value}]
    });
    assert!(serde_json::from_value::<r4::Bundle>(bundle).is_err());

    let patient = json!({
        "resourceType": "Patient",
        "deceasedBoolean": true,
        "deceasedDateTime": "2015-02-14T13:42:00+10:00"
    });
    let err = r4b::Resource::from_value(patient).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Patient.deceased[x] has more than one value: deceasedBoolean, deceasedDateTime"
    );

    let single = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "Glucose"},
        "valueQuantity": {"value": 6.3, "unit": "mmol/L"}
    });
    assert!(FhirResource::from_value(FhirVersion::R5, single).is_ok());
}
