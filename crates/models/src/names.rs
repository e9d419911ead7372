//! Resource-name markers
//!
//! One zero-sized type per `resourceType` literal known to any supported
//! release. A marker says nothing about which releases define the resource;
//! that is what [`ResourceOf`](crate::ResourceOf) records.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A `resourceType` literal lifted to the type level
pub trait ResourceName: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;
}

macro_rules! resource_names {
    ($($name:ident),+ $(,)?) => {
        $(
            #[doc = concat!("The `", stringify!($name), "` resource type")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl ResourceName for $name {
                const NAME: &'static str = stringify!($name);
            }
        )+

        /// Every name declared in this module
        pub const ALL: &[&str] = &[$(stringify!($name)),+];
    };
}

resource_names!(
    Bundle,
    DiagnosticReport,
    Medication,
    MedicinalProduct,
    Observation,
    OperationOutcome,
    Patient,
    SubscriptionTopic,
    Transport,
);

/// The `resourceType` field of a resource shape.
///
/// Serializes as the literal name `N::NAME` and refuses to deserialize from
/// anything else, so a `r4::Patient` can never be decoded from an
/// Observation's JSON.
pub struct ResourceTag<N>(PhantomData<N>);

impl<N: ResourceName> ResourceTag<N> {
    pub fn new() -> Self {
        ResourceTag(PhantomData)
    }

    pub fn as_str(&self) -> &'static str {
        N::NAME
    }
}

impl<N: ResourceName> Default for ResourceTag<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for ResourceTag<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for ResourceTag<N> {}

impl<N> PartialEq for ResourceTag<N> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<N> Eq for ResourceTag<N> {}

impl<N: ResourceName> Hash for ResourceTag<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        N::NAME.hash(state);
    }
}

impl<N: ResourceName> fmt::Debug for ResourceTag<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", N::NAME)
    }
}

impl<N: ResourceName> fmt::Display for ResourceTag<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(N::NAME)
    }
}

impl<N: ResourceName> PartialEq<str> for ResourceTag<N> {
    fn eq(&self, other: &str) -> bool {
        N::NAME == other
    }
}

impl<N: ResourceName> PartialEq<&str> for ResourceTag<N> {
    fn eq(&self, other: &&str) -> bool {
        N::NAME == *other
    }
}

impl<N: ResourceName> Serialize for ResourceTag<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(N::NAME)
    }
}

impl<'de, N: ResourceName> Deserialize<'de> for ResourceTag<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagVisitor<N>(PhantomData<N>);

        impl<N: ResourceName> Visitor<'_> for TagVisitor<N> {
            type Value = ResourceTag<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "resourceType \"{}\"", N::NAME)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                if value == N::NAME {
                    Ok(ResourceTag::new())
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_str(TagVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_serializes_as_literal() {
        let tag = ResourceTag::<Patient>::new();
        assert_eq!(serde_json::to_value(tag).unwrap(), "Patient");
        assert_eq!(tag, "Patient");
    }

    #[test]
    fn tag_rejects_other_names() {
        let err = serde_json::from_str::<ResourceTag<Patient>>("\"Observation\"").unwrap_err();
        assert!(err.to_string().contains("resourceType \"Patient\""));
        assert!(serde_json::from_str::<ResourceTag<Patient>>("\"Patient\"").is_ok());
    }

    #[test]
    fn names_are_unique() {
        let mut names = ALL.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }
}
