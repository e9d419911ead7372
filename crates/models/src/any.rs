//! Version-agnostic unions
//!
//! Consumers that handle any release hold one of these instead of a
//! release-specific shape. Each variant carries the release's own type, so
//! converting back is a plain `match`.

use crate::error::Result;
use crate::version::FhirVersion;
use crate::{r4, r4b, r5};
use serde::Serialize;
use serde_json::Value;

/// Any resource of any supported release
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FhirResource {
    R4(Box<r4::Resource>),
    R4B(Box<r4b::Resource>),
    R5(Box<r5::Resource>),
}

impl FhirResource {
    pub fn version(&self) -> FhirVersion {
        match self {
            FhirResource::R4(_) => FhirVersion::R4,
            FhirResource::R4B(_) => FhirVersion::R4B,
            FhirResource::R5(_) => FhirVersion::R5,
        }
    }

    pub fn resource_type(&self) -> &'static str {
        match self {
            FhirResource::R4(resource) => resource.resource_type().as_str(),
            FhirResource::R4B(resource) => resource.resource_type().as_str(),
            FhirResource::R5(resource) => resource.resource_type().as_str(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            FhirResource::R4(resource) => resource.id(),
            FhirResource::R4B(resource) => resource.id(),
            FhirResource::R5(resource) => resource.id(),
        }
    }

    /// Decode `value` as a resource of `version`, dispatching on `resourceType`.
    pub fn from_value(version: FhirVersion, value: Value) -> Result<Self> {
        Ok(match version {
            FhirVersion::R4 => r4::Resource::from_value(value)?.into(),
            FhirVersion::R4B => r4b::Resource::from_value(value)?.into(),
            FhirVersion::R5 => r5::Resource::from_value(value)?.into(),
        })
    }

    pub fn from_json(version: FhirVersion, json: &str) -> Result<Self> {
        Self::from_value(version, serde_json::from_str(json)?)
    }
}

impl From<r4::Resource> for FhirResource {
    fn from(resource: r4::Resource) -> Self {
        FhirResource::R4(Box::new(resource))
    }
}

impl From<r4b::Resource> for FhirResource {
    fn from(resource: r4b::Resource) -> Self {
        FhirResource::R4B(Box::new(resource))
    }
}

impl From<r5::Resource> for FhirResource {
    fn from(resource: r5::Resource) -> Self {
        FhirResource::R5(Box::new(resource))
    }
}

/// One resource kind across every release. Each kind converts into
/// [`FhirResource`] through the release union.
macro_rules! version_union {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum $name {
            R4(Box<r4::$name>),
            R4B(Box<r4b::$name>),
            R5(Box<r5::$name>),
        }

        impl $name {
            pub fn version(&self) -> FhirVersion {
                match self {
                    $name::R4(_) => FhirVersion::R4,
                    $name::R4B(_) => FhirVersion::R4B,
                    $name::R5(_) => FhirVersion::R5,
                }
            }

            pub fn id(&self) -> Option<&str> {
                match self {
                    $name::R4(resource) => resource.id.as_deref(),
                    $name::R4B(resource) => resource.id.as_deref(),
                    $name::R5(resource) => resource.id.as_deref(),
                }
            }

            /// Decode `value` into `version`'s shape for this kind.
            pub fn from_value(version: FhirVersion, value: Value) -> Result<Self> {
                crate::resource::check_choice_elements(&value)?;
                Ok(match version {
                    FhirVersion::R4 => serde_json::from_value::<r4::$name>(value)?.into(),
                    FhirVersion::R4B => serde_json::from_value::<r4b::$name>(value)?.into(),
                    FhirVersion::R5 => serde_json::from_value::<r5::$name>(value)?.into(),
                })
            }
        }

        impl From<r4::$name> for $name {
            fn from(resource: r4::$name) -> Self {
                $name::R4(Box::new(resource))
            }
        }

        impl From<r4b::$name> for $name {
            fn from(resource: r4b::$name) -> Self {
                $name::R4B(Box::new(resource))
            }
        }

        impl From<r5::$name> for $name {
            fn from(resource: r5::$name) -> Self {
                $name::R5(Box::new(resource))
            }
        }

        impl From<$name> for FhirResource {
            fn from(resource: $name) -> Self {
                match resource {
                    $name::R4(inner) => FhirResource::R4(Box::new(r4::Resource::$name(inner))),
                    $name::R4B(inner) => FhirResource::R4B(Box::new(r4b::Resource::$name(inner))),
                    $name::R5(inner) => FhirResource::R5(Box::new(r5::Resource::$name(inner))),
                }
            }
        }
    };
}

version_union!(
    /// A default (union-content) bundle of any release
    Bundle
);
version_union!(
    /// A Patient of any release
    Patient
);
version_union!(Observation);
version_union!(Medication);
version_union!(DiagnosticReport);

impl Bundle {
    /// Entry resources lifted into [`FhirResource`]
    pub fn resources(&self) -> Vec<FhirResource> {
        match self {
            Bundle::R4(bundle) => bundle.resources().cloned().map(FhirResource::from).collect(),
            Bundle::R4B(bundle) => bundle.resources().cloned().map(FhirResource::from).collect(),
            Bundle::R5(bundle) => bundle.resources().cloned().map(FhirResource::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FhirError;
    use serde_json::json;

    fn patient_json() -> Value {
        json!({
            "resourceType": "Patient",
            "id": "pat-1",
            "name": [{"family": "Chalmers", "given": ["Peter", "James"]}]
        })
    }

    #[test]
    fn resource_union_keeps_the_release() {
        for version in FhirVersion::ALL {
            let resource = FhirResource::from_value(version, patient_json()).unwrap();
            assert_eq!(resource.version(), version);
            assert_eq!(resource.resource_type(), "Patient");
            assert_eq!(resource.id(), Some("pat-1"));
        }
    }

    #[test]
    fn resource_union_rejects_foreign_names() {
        let err = FhirResource::from_value(FhirVersion::R4, json!({"resourceType": "Transport"}))
            .unwrap_err();
        assert!(matches!(err, FhirError::UnknownResourceType { .. }));

        let transport = FhirResource::from_value(
            FhirVersion::R5,
            json!({
                "resourceType": "Transport",
                "intent": "order",
                "requestedLocation": {"reference": "Location/a"},
                "currentLocation": {"reference": "Location/b"}
            }),
        )
        .unwrap();
        assert_eq!(transport.resource_type(), "Transport");
    }

    #[test]
    fn kind_unions_convert_into_resource_union() {
        let patient = Patient::from(r4b::Patient {
            id: Some("p".into()),
            ..Default::default()
        });
        assert_eq!(patient.version(), FhirVersion::R4B);

        let resource = FhirResource::from(patient);
        assert_eq!(resource.version(), FhirVersion::R4B);
        assert_eq!(resource.resource_type(), "Patient");
        assert_eq!(resource.id(), Some("p"));
    }

    #[test]
    fn kind_unions_reject_other_kinds() {
        let err = Observation::from_value(FhirVersion::R5, patient_json()).unwrap_err();
        assert!(matches!(err, FhirError::Serialization(_)));
    }

    #[test]
    fn serializes_without_a_version_wrapper() {
        let medication = Medication::from(r5::Medication {
            id: Some("med".into()),
            ..Default::default()
        });
        assert_eq!(
            serde_json::to_value(&medication).unwrap(),
            json!({"resourceType": "Medication", "id": "med"})
        );
    }

    #[test]
    fn bundle_entries_lift_into_resource_union() {
        let bundle = Bundle::from_value(
            FhirVersion::R4,
            json!({
                "resourceType": "Bundle",
                "type": "collection",
                "entry": [
                    {"resource": patient_json()},
                    {"resource": {
                        "resourceType": "MedicinalProduct",
                        "id": "mp",
                        "name": [{"productName": "Acmedol 500 mg tablet"}]
                    }}
                ]
            }),
        )
        .unwrap();

        let resources = bundle.resources();
        assert_eq!(resources.len(), 2);
        assert!(resources.iter().all(|r| r.version() == FhirVersion::R4));
        assert_eq!(resources[1].resource_type(), "MedicinalProduct");
    }
}
