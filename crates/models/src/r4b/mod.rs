//! FHIR R4B (4.3.0) resource shapes

mod bundle;
#[path = "../shared/diagnostic_report.rs"]
mod diagnostic_report;
#[path = "../shared/medication.rs"]
mod medication;
#[path = "../shared/observation.rs"]
mod observation;
#[path = "../shared/operation_outcome.rs"]
mod operation_outcome;
#[path = "../shared/patient.rs"]
mod patient;
mod subscription_topic;

pub use bundle::{
    Bundle, BundleEntry, BundleEntryRequest, BundleEntryResponse, BundleEntrySearch, BundleLink,
    BundleType, HttpVerb, SearchEntryMode,
};
pub use diagnostic_report::{DiagnosticReport, DiagnosticReportMedia, DiagnosticReportStatus};
pub use medication::{Medication, MedicationBatch, MedicationIngredient, MedicationStatus};
pub use observation::{
    Observation, ObservationComponent, ObservationReferenceRange, ObservationStatus,
};
pub use operation_outcome::{OperationOutcome, OperationOutcomeIssue};
pub use patient::{LinkType, Patient, PatientCommunication, PatientContact, PatientLink};
pub use subscription_topic::{
    SubscriptionTopic, SubscriptionTopicCanFilterBy, SubscriptionTopicEventTrigger,
    SubscriptionTopicNotificationShape, SubscriptionTopicQueryCriteria,
    SubscriptionTopicResourceTrigger,
};

pub use crate::datatypes::*;
pub use crate::version::R4B;

crate::macros::resource_union!(
    R4B;
    DiagnosticReport,
    Medication,
    Observation,
    OperationOutcome,
    Patient,
    SubscriptionTopic,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FhirError;
    use serde_json::json;

    #[test]
    fn medicinal_product_left_r4() {
        let err = Resource::from_value(json!({"resourceType": "MedicinalProduct"})).unwrap_err();
        assert!(matches!(
            err,
            FhirError::UnknownResourceType { version: crate::FhirVersion::R4B, .. }
        ));
    }

    #[test]
    fn shared_shapes_stay_release_specific() {
        use std::any::TypeId;

        assert_ne!(TypeId::of::<Patient>(), TypeId::of::<crate::r4::Patient>());
        assert_ne!(TypeId::of::<Patient>(), TypeId::of::<crate::r5::Patient>());
        assert_ne!(TypeId::of::<Observation>(), TypeId::of::<crate::r4::Observation>());
        assert_ne!(
            TypeId::of::<OperationOutcome>(),
            TypeId::of::<crate::r5::OperationOutcome>()
        );

        // `contained` holds this release's union.
        let patient = json!({
            "resourceType": "Patient",
            "contained": [{
                "resourceType": "SubscriptionTopic",
                "url": "http://example.org/FHIR/SubscriptionTopic/admission",
                "status": "draft"
            }]
        });
        let decoded: Patient = serde_json::from_value(patient.clone()).unwrap();
        assert_eq!(
            decoded.contained[0].resource_type(),
            ResourceType::SubscriptionTopic
        );
        assert!(serde_json::from_value::<crate::r4::Patient>(patient).is_err());
    }

    #[test]
    fn subscription_notifications_are_bundle_types() {
        let bundle: Bundle = serde_json::from_value(json!({
            "resourceType": "Bundle",
            "type": "subscription-notification",
            "entry": [{
                "fullUrl": "urn:uuid:9bb3ba16-5cc5-4e05-8a72-d5a3ba3d3b5a",
                "resource": {
                    "resourceType": "SubscriptionTopic",
                    "url": "http://example.org/FHIR/SubscriptionTopic/admission",
                    "status": "active",
                    "resourceTrigger": [{
                        "resource": "http://hl7.org/fhir/StructureDefinition/Encounter",
                        "supportedInteraction": ["create", "update"]
                    }]
                }
            }]
        }))
        .unwrap();

        assert_eq!(bundle.bundle_type, BundleType::SubscriptionNotification);
        let topic = match bundle.resources().next() {
            Some(Resource::SubscriptionTopic(topic)) => topic,
            other => panic!("unexpected entry: {other:?}"),
        };
        assert_eq!(topic.status, PublicationStatus::Active);
        assert_eq!(
            topic.resource_trigger[0].supported_interaction,
            ["create", "update"]
        );
    }
}
