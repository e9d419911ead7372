//! FHIR R5 (5.0.0) resource shapes

mod bundle;
mod diagnostic_report;
mod medication;
mod observation;
#[path = "../shared/operation_outcome.rs"]
mod operation_outcome;
#[path = "../shared/patient.rs"]
mod patient;
mod subscription_topic;
mod transport;

pub use bundle::{
    Bundle, BundleEntry, BundleEntryRequest, BundleEntryResponse, BundleEntrySearch, BundleLink,
    BundleType, HttpVerb, SearchEntryMode,
};
pub use diagnostic_report::{
    DiagnosticReport, DiagnosticReportMedia, DiagnosticReportStatus,
    DiagnosticReportSupportingInfo,
};
pub use medication::{Medication, MedicationBatch, MedicationIngredient, MedicationStatus};
pub use observation::{
    Observation, ObservationComponent, ObservationReferenceRange, ObservationStatus,
    ObservationTriggeredBy, TriggeredByType,
};
pub use operation_outcome::{OperationOutcome, OperationOutcomeIssue};
pub use patient::{LinkType, Patient, PatientCommunication, PatientContact, PatientLink};
pub use subscription_topic::{
    SubscriptionTopic, SubscriptionTopicCanFilterBy, SubscriptionTopicEventTrigger,
    SubscriptionTopicNotificationShape, SubscriptionTopicQueryCriteria,
    SubscriptionTopicResourceTrigger,
};
pub use transport::{Transport, TransportStatus};

pub use crate::datatypes::*;
pub use crate::version::R5;

crate::macros::resource_union!(
    R5;
    DiagnosticReport,
    Medication,
    Observation,
    OperationOutcome,
    Patient,
    SubscriptionTopic,
    Transport,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn medication_uses_r5_fields() {
        let medication: Medication = serde_json::from_value(json!({
            "resourceType": "Medication",
            "id": "med0311",
            "doseForm": {"text": "Tablet"},
            "totalVolume": {"value": 100, "unit": "mL"},
            "marketingAuthorizationHolder": {"reference": "Organization/mmanu"},
            "ingredient": [{
                "item": {"concept": {"text": "Acetaminophen"}},
                "strengthRatio": {
                    "numerator": {"value": 500, "unit": "mg"},
                    "denominator": {"value": 1, "unit": "Tab"}
                }
            }]
        }))
        .unwrap();

        assert_eq!(medication.total_volume.unwrap().value, Some(100.0));
        let ingredient = &medication.ingredient[0];
        assert_eq!(
            ingredient.item.concept.as_ref().unwrap().text.as_deref(),
            Some("Acetaminophen")
        );
        assert!(ingredient.strength_ratio.is_some());
    }

    #[test]
    fn r4_only_fields_are_not_r5_fields() {
        let medication: Medication = serde_json::from_value(json!({
            "resourceType": "Medication",
            "manufacturer": {"reference": "Organization/mmanu"}
        }))
        .unwrap();

        let value = serde_json::to_value(&medication).unwrap();
        assert!(value.get("manufacturer").is_none());
        assert!(medication.marketing_authorization_holder.is_none());
    }

    #[test]
    fn observation_triggers_and_bundle_issues() {
        let observation: Observation = serde_json::from_value(json!({
            "resourceType": "Observation",
            "status": "final",
            "code": {"text": "Glucose"},
            "triggeredBy": [{
                "observation": {"reference": "Observation/glucose-1"},
                "type": "re-run"
            }]
        }))
        .unwrap();
        assert_eq!(observation.triggered_by[0].trigger_type, TriggeredByType::ReRun);

        let mut bundle = Bundle::collection([observation]);
        bundle.issues = Some(Box::new(Resource::from(OperationOutcome::success("ok"))));
        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value["issues"]["resourceType"], "OperationOutcome");
        assert_eq!(value["entry"][0]["resource"]["triggeredBy"][0]["type"], "re-run");
    }

    #[test]
    fn transport_is_r5_only() {
        let transport: Resource = serde_json::from_value(json!({
            "resourceType": "Transport",
            "status": "in-progress",
            "intent": "order",
            "requestedLocation": {"reference": "Location/lab"},
            "currentLocation": {"reference": "Location/ward"}
        }))
        .unwrap();
        assert_eq!(transport.resource_type(), ResourceType::Transport);
        assert!("Transport".parse::<crate::r4::ResourceType>().is_err());
    }
}
