//! FHIR release tags
//!
//! [`FhirVersion`] is the runtime tag. [`R4`], [`R4B`] and [`R5`] are the
//! type-level tags: zero-sized markers implementing the sealed [`Version`]
//! trait, which maps each release to its resource union, its name-set and its
//! bundle constructor.

use crate::error::{FhirError, Result};
use crate::resource::{BundleContent, ResourceUnion, VersionedResource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// FHIR specification release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FhirVersion {
    /// FHIR 4.0.1
    R4,
    /// FHIR 4.3.0
    R4B,
    /// FHIR 5.0.0
    R5,
}

impl FhirVersion {
    pub const ALL: [FhirVersion; 3] = [FhirVersion::R4, FhirVersion::R4B, FhirVersion::R5];

    pub fn as_str(self) -> &'static str {
        match self {
            FhirVersion::R4 => "R4",
            FhirVersion::R4B => "R4B",
            FhirVersion::R5 => "R5",
        }
    }

    /// Canonical release number, as found in `CapabilityStatement.fhirVersion`
    pub fn release(self) -> &'static str {
        match self {
            FhirVersion::R4 => "4.0.1",
            FhirVersion::R4B => "4.3.0",
            FhirVersion::R5 => "5.0.0",
        }
    }
}

impl fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FhirVersion {
    type Err = FhirError;

    /// Accepts release tags (case-insensitive) and release numbers.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "R4" | "4.0" | "4.0.1" => Ok(FhirVersion::R4),
            "R4B" | "4.3" | "4.3.0" => Ok(FhirVersion::R4B),
            "R5" | "5.0" | "5.0.0" => Ok(FhirVersion::R5),
            _ => Err(FhirError::InvalidVersion(trimmed.to_string())),
        }
    }
}

impl TryFrom<&str> for FhirVersion {
    type Error = FhirError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Type-level FHIR release.
///
/// Implemented only by [`R4`], [`R4B`] and [`R5`].
pub trait Version:
    sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static
{
    const VERSION: FhirVersion;

    /// Every resource shape of this release
    type Resource: ResourceUnion<Version = Self> + BundleContent<Self>;

    /// The release's closed set of `resourceType` names
    type ResourceType: Copy
        + Eq
        + Hash
        + fmt::Debug
        + fmt::Display
        + FromStr<Err = FhirError>
        + Send
        + Sync
        + 'static;

    /// The release's bundle, holding entries of type `R`
    type Bundle<R: BundleContent<Self>>: VersionedResource<Version = Self>;

    fn resource_types() -> &'static [Self::ResourceType];

    /// The `resourceType` literal of a member of the name-set
    fn resource_type_str(resource_type: Self::ResourceType) -> &'static str;
}

/// FHIR 4.0.1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct R4;

/// FHIR 4.3.0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct R4B;

/// FHIR 5.0.0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct R5;

impl sealed::Sealed for R4 {}
impl sealed::Sealed for R4B {}
impl sealed::Sealed for R5 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_and_release_numbers() {
        assert_eq!("R4".parse::<FhirVersion>().unwrap(), FhirVersion::R4);
        assert_eq!("r4b".parse::<FhirVersion>().unwrap(), FhirVersion::R4B);
        assert_eq!("5.0.0".parse::<FhirVersion>().unwrap(), FhirVersion::R5);
        assert_eq!("4.0".parse::<FhirVersion>().unwrap(), FhirVersion::R4);
        assert_eq!(" 4.3.0 ".parse::<FhirVersion>().unwrap(), FhirVersion::R4B);
    }

    #[test]
    fn rejects_versions_outside_the_closed_set() {
        for input in ["R6", "STU3", "3.0.2", ""] {
            let err = input.parse::<FhirVersion>().unwrap_err();
            assert!(matches!(err, FhirError::InvalidVersion(_)), "{input}");
        }
    }

    #[test]
    fn display_round_trips() {
        for version in FhirVersion::ALL {
            assert_eq!(version.to_string().parse::<FhirVersion>().unwrap(), version);
            assert_eq!(version.release().parse::<FhirVersion>().unwrap(), version);
        }
    }

    #[test]
    fn markers_carry_their_tag() {
        assert_eq!(R4::VERSION, FhirVersion::R4);
        assert_eq!(R4B::VERSION, FhirVersion::R4B);
        assert_eq!(R5::VERSION, FhirVersion::R5);
    }
}
