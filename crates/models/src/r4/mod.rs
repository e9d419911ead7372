//! FHIR R4 (4.0.1) resource shapes

mod bundle;
#[path = "../shared/diagnostic_report.rs"]
mod diagnostic_report;
#[path = "../shared/medication.rs"]
mod medication;
mod medicinal_product;
#[path = "../shared/observation.rs"]
mod observation;
#[path = "../shared/operation_outcome.rs"]
mod operation_outcome;
#[path = "../shared/patient.rs"]
mod patient;

pub use bundle::{
    Bundle, BundleEntry, BundleEntryRequest, BundleEntryResponse, BundleEntrySearch, BundleLink,
    BundleType, HttpVerb, SearchEntryMode,
};
pub use diagnostic_report::{DiagnosticReport, DiagnosticReportMedia, DiagnosticReportStatus};
pub use medication::{Medication, MedicationBatch, MedicationIngredient, MedicationStatus};
pub use medicinal_product::{MedicinalProduct, MedicinalProductName, MedicinalProductNamePart};
pub use observation::{
    Observation, ObservationComponent, ObservationReferenceRange, ObservationStatus,
};
pub use operation_outcome::{OperationOutcome, OperationOutcomeIssue};
pub use patient::{LinkType, Patient, PatientCommunication, PatientContact, PatientLink};

pub use crate::datatypes::*;
pub use crate::version::R4;

crate::macros::resource_union!(
    R4;
    DiagnosticReport,
    Medication,
    MedicinalProduct,
    Observation,
    OperationOutcome,
    Patient,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FhirError, Version};
    use serde_json::json;

    #[test]
    fn decodes_by_discriminant() {
        let resource = Resource::from_value(json!({
            "resourceType": "Patient",
            "id": "example",
            "gender": "female",
            "birthDate": "1974-12-25"
        }))
        .unwrap();

        assert_eq!(resource.resource_type(), ResourceType::Patient);
        assert_eq!(resource.id(), Some("example"));
        let patient = Patient::try_from(resource).unwrap();
        assert_eq!(patient.gender, Some(AdministrativeGender::Female));
    }

    #[test]
    fn rejects_names_foreign_to_r4() {
        let err = Resource::from_value(json!({"resourceType": "Transport"})).unwrap_err();
        match err {
            FhirError::UnknownResourceType {
                version,
                resource_type,
            } => {
                assert_eq!(version, crate::FhirVersion::R4);
                assert_eq!(resource_type, "Transport");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn name_set_is_closed() {
        let names: Vec<&str> = R4::resource_types().iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            [
                "Bundle",
                "DiagnosticReport",
                "Medication",
                "MedicinalProduct",
                "Observation",
                "OperationOutcome",
                "Patient"
            ]
        );
        assert!("SubscriptionTopic".parse::<ResourceType>().is_err());
    }

    #[test]
    fn medication_keeps_r4_fields() {
        let medication: Medication = serde_json::from_value(json!({
            "resourceType": "Medication",
            "id": "med0301",
            "manufacturer": {"reference": "Organization/mmanu"},
            "form": {"text": "Tablet"},
            "ingredient": [{
                "itemCodeableConcept": {"text": "Acetaminophen"},
                "strength": {
                    "numerator": {"value": 500, "unit": "mg"},
                    "denominator": {"value": 1, "unit": "Tab"}
                }
            }]
        }))
        .unwrap();

        assert_eq!(
            medication.manufacturer.unwrap().reference.as_deref(),
            Some("Organization/mmanu")
        );
        assert_eq!(
            medication.ingredient[0].item_codeable_concept.as_ref().unwrap().text.as_deref(),
            Some("Acetaminophen")
        );
    }

    #[test]
    fn outcome_describes_errors() {
        let err = FhirError::unknown_resource_type(crate::FhirVersion::R4, "ObservationX");
        let outcome = OperationOutcome::from_error(&err);
        assert!(outcome.has_errors());

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["resourceType"], "OperationOutcome");
        assert_eq!(value["issue"][0]["code"], "not-supported");
        assert_eq!(
            value["issue"][0]["diagnostics"],
            "Unknown resource type for FHIR R4: ObservationX"
        );
    }
}
