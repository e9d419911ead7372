//! Version-indexed resolution of resource and bundle shapes
//!
//! At compile time a `(release, name)` pair resolves through [`ResourceOf`]:
//!
//! ```
//! use fhir_models::{BundleForVersion, ResourceForVersion, R4, R5, names, r4, r5};
//!
//! let patient: ResourceForVersion<R4, names::Patient> = r4::Patient::default();
//! let bundle: BundleForVersion<R5, names::Observation> = r5::Bundle::<r5::Observation>::collection([]);
//! assert_eq!(patient.resource_type, "Patient");
//! assert!(bundle.entry.is_empty());
//! ```
//!
//! A name the release does not define has no `ResourceOf` impl, so the lookup
//! does not compile:
//!
//! ```compile_fail
//! use fhir_models::{ResourceForVersion, R4, names};
//!
//! let transport: ResourceForVersion<R4, names::Transport> = Default::default();
//! ```
//!
//! ```compile_fail
//! use fhir_models::{BundleForVersion, R5, names};
//!
//! fn accept(_: BundleForVersion<R5, names::MedicinalProduct>) {}
//! ```
//!
//! At runtime the same lookup goes through the process-wide
//! [`SchemaRegistry`], which rejects unknown names with
//! [`FhirError::UnknownResourceType`].

use crate::error::{FhirError, Result};
use crate::names::ResourceName;
use crate::resource::{BundleContent, VersionedResource};
use crate::version::{FhirVersion, Version};
use crate::{r4, r4b, r5};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Membership of a resource name in release `V`, mapping the name to `V`'s
/// shape for it.
pub trait ResourceOf<V: Version>: ResourceName {
    type Resource: VersionedResource<Version = V> + BundleContent<V>;
}

/// The shape release `V` defines for resource name `N`
pub type ResourceForVersion<V, N> = <N as ResourceOf<V>>::Resource;

/// Release `V`'s bundle holding only resources of name `N`
pub type BundleForVersion<V, N> = <V as Version>::Bundle<ResourceForVersion<V, N>>;

/// Runtime result of resolving a resource name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub version: FhirVersion,
    pub resource_type: &'static str,
}

/// Runtime result of resolving a bundle of a resource name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleDescriptor {
    pub version: FhirVersion,
    pub entry: ResourceDescriptor,
}

/// The name-set of every supported release.
///
/// Built once from the generated `ResourceType` sets; construction refuses
/// schemas that repeat a name within one release or omit a release.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    name_sets: BTreeMap<FhirVersion, BTreeSet<&'static str>>,
}

impl SchemaRegistry {
    pub fn build<I, N>(schemas: I) -> Result<Self>
    where
        I: IntoIterator<Item = (FhirVersion, N)>,
        N: IntoIterator<Item = &'static str>,
    {
        let mut name_sets: BTreeMap<FhirVersion, BTreeSet<&'static str>> = BTreeMap::new();

        for (version, names) in schemas {
            let set = name_sets.entry(version).or_default();
            for name in names {
                if !set.insert(name) {
                    tracing::error!(%version, resource_type = name, "duplicate resource type");
                    return Err(FhirError::DuplicateResourceType {
                        version,
                        resource_type: name.to_string(),
                    });
                }
            }
        }

        if let Some(missing) = FhirVersion::ALL
            .into_iter()
            .find(|version| !name_sets.contains_key(version))
        {
            return Err(FhirError::MissingSchema(missing));
        }

        tracing::debug!(
            r4 = name_sets[&FhirVersion::R4].len(),
            r4b = name_sets[&FhirVersion::R4B].len(),
            r5 = name_sets[&FhirVersion::R5].len(),
            "built FHIR schema registry"
        );
        Ok(Self { name_sets })
    }

    /// Registry over the R4, R4B and R5 schema modules of this crate
    pub fn standard() -> Result<Self> {
        Self::build([
            (FhirVersion::R4, names_of::<r4::R4>()),
            (FhirVersion::R4B, names_of::<r4b::R4B>()),
            (FhirVersion::R5, names_of::<r5::R5>()),
        ])
    }

    pub fn contains(&self, version: FhirVersion, name: &str) -> bool {
        self.name_sets
            .get(&version)
            .is_some_and(|set| set.contains(name))
    }

    pub fn resource_types(&self, version: FhirVersion) -> impl Iterator<Item = &'static str> + '_ {
        self.name_sets
            .get(&version)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn resolve_resource(&self, version: FhirVersion, name: &str) -> Result<ResourceDescriptor> {
        match self.name_sets.get(&version).and_then(|set| set.get(name)) {
            Some(&resource_type) => Ok(ResourceDescriptor {
                version,
                resource_type,
            }),
            None => {
                tracing::debug!(%version, resource_type = name, "rejected resource lookup");
                Err(FhirError::unknown_resource_type(version, name))
            }
        }
    }

    pub fn resolve_bundle(&self, version: FhirVersion, name: &str) -> Result<BundleDescriptor> {
        let entry = self.resolve_resource(version, name)?;
        Ok(BundleDescriptor { version, entry })
    }
}

fn names_of<V: Version>() -> Vec<&'static str> {
    V::resource_types()
        .iter()
        .map(|resource_type| V::resource_type_str(*resource_type))
        .collect()
}

static REGISTRY: LazyLock<SchemaRegistry> = LazyLock::new(|| match SchemaRegistry::standard() {
    Ok(registry) => registry,
    Err(err) => panic!("FHIR schema integrity violation: {err}"),
});

/// The process-wide registry.
///
/// # Panics
///
/// On first use, if the compiled-in schemas repeat a resource name within a
/// release or leave a release out.
pub fn registry() -> &'static SchemaRegistry {
    &REGISTRY
}

/// Resolve `name` against `version`'s name-set
pub fn resolve_resource(version: FhirVersion, name: &str) -> Result<ResourceDescriptor> {
    registry().resolve_resource(version, name)
}

/// Resolve the bundle of `name` resources for `version`
pub fn resolve_bundle(version: FhirVersion, name: &str) -> Result<BundleDescriptor> {
    registry().resolve_bundle(version, name)
}

/// Resource names defined by `version`, sorted
pub fn resource_types(version: FhirVersion) -> Vec<&'static str> {
    registry().resource_types(version).collect()
}
