use crate::outcome::{IssueSeverity, IssueType};
use crate::version::FhirVersion;
use thiserror::Error;

/// Errors raised while resolving or decoding versioned FHIR resources
#[derive(Debug, Error)]
pub enum FhirError {
    #[error("Invalid FHIR version: {0} (expected R4, R4B or R5)")]
    InvalidVersion(String),

    #[error("Unknown resource type for FHIR {version}: {resource_type}")]
    UnknownResourceType {
        version: FhirVersion,
        resource_type: String,
    },

    #[error("Missing resourceType")]
    MissingResourceType,

    #[error("{resource_type}.{element}[x] has more than one value: {fields}")]
    ConflictingChoice {
        resource_type: String,
        element: &'static str,
        fields: String,
    },

    #[error("Duplicate resource type in FHIR {version} schema: {resource_type}")]
    DuplicateResourceType {
        version: FhirVersion,
        resource_type: String,
    },

    #[error("No schema registered for FHIR {0}")]
    MissingSchema(FhirVersion),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FhirError {
    pub(crate) fn unknown_resource_type(version: FhirVersion, resource_type: &str) -> Self {
        FhirError::UnknownResourceType {
            version,
            resource_type: resource_type.to_string(),
        }
    }

    /// OperationOutcome issue code describing this error
    pub fn issue_type(&self) -> IssueType {
        match self {
            FhirError::InvalidVersion(_) | FhirError::UnknownResourceType { .. } => {
                IssueType::NotSupported
            }
            FhirError::MissingResourceType => IssueType::Required,
            FhirError::DuplicateResourceType { .. } | FhirError::MissingSchema(_) => {
                IssueType::Exception
            }
            FhirError::ConflictingChoice { .. } | FhirError::Serialization(_) => {
                IssueType::Structure
            }
        }
    }

    /// OperationOutcome issue severity for this error
    pub fn severity(&self) -> IssueSeverity {
        match self {
            FhirError::DuplicateResourceType { .. } | FhirError::MissingSchema(_) => {
                IssueSeverity::Fatal
            }
            _ => IssueSeverity::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, FhirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_resource_type_names_the_pair() {
        let err = FhirError::unknown_resource_type(FhirVersion::R4, "ObservationX");
        assert_eq!(
            err.to_string(),
            "Unknown resource type for FHIR R4: ObservationX"
        );
        assert_eq!(err.issue_type(), IssueType::NotSupported);
    }

    #[test]
    fn conflicting_choices_are_structure_errors() {
        let err = FhirError::ConflictingChoice {
            resource_type: "Observation".into(),
            element: "value",
            fields: "valueQuantity, valueString".into(),
        };
        assert_eq!(
            err.to_string(),
            "Observation.value[x] has more than one value: valueQuantity, valueString"
        );
        assert_eq!(err.issue_type(), IssueType::Structure);
        assert_eq!(err.severity(), IssueSeverity::Error);
    }

    #[test]
    fn integrity_defects_are_fatal() {
        let err = FhirError::DuplicateResourceType {
            version: FhirVersion::R5,
            resource_type: "Patient".into(),
        };
        assert_eq!(err.severity(), IssueSeverity::Fatal);
        assert_eq!(err.issue_type(), IssueType::Exception);
    }
}
