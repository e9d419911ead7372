//! fhir-models: version-indexed FHIR resource models
//!
//! Resource and bundle shapes for FHIR R4, R4B and R5, selected by release.
//! A `(release, resource name)` pair resolves to the release's concrete
//! shape at compile time:
//!
//! ```
//! use fhir_models::{ResourceForVersion, R4, names, r4};
//!
//! let patient: ResourceForVersion<R4, names::Patient> = r4::Patient {
//!     id: Some("example".into()),
//!     ..Default::default()
//! };
//! assert_eq!(serde_json::to_value(&patient).unwrap()["resourceType"], "Patient");
//! ```
//!
//! or at runtime, for names only known as strings:
//!
//! ```
//! use fhir_models::{FhirVersion, resolve_resource};
//!
//! let descriptor = resolve_resource(FhirVersion::R4B, "Medication").unwrap();
//! assert_eq!(descriptor.resource_type, "Medication");
//! assert!(resolve_resource(FhirVersion::R4, "ObservationX").is_err());
//! ```
//!
//! Names a release does not define are rejected either way; see [`resolve`].

mod macros;

pub mod any;
pub mod config;
pub mod datatypes;
pub mod error;
pub mod names;
pub mod outcome;
pub mod r4;
pub mod r4b;
pub mod r5;
pub mod resolve;
mod resource;
pub mod version;

pub use any::{Bundle, DiagnosticReport, FhirResource, Medication, Observation, Patient};
pub use config::Config;
pub use error::{FhirError, Result};
pub use outcome::{IssueSeverity, IssueType};
pub use resolve::{
    BundleDescriptor, BundleForVersion, ResourceDescriptor, ResourceForVersion, ResourceOf,
    SchemaRegistry, resolve_bundle, resolve_resource, resource_types,
};
pub use resource::{BundleContent, ResourceUnion, VersionedResource};
pub use version::{FhirVersion, R4, R4B, R5, Version};
