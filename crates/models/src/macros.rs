//! Declarations shared by the per-release schema modules.

/// Declares a release's `Resource` union and `ResourceType` name-set, and
/// registers every listed shape (plus `Bundle`) with the resolver.
///
/// Must be invoked inside the release module, where `Bundle<R>` and each
/// listed shape are in scope. The release marker ident doubles as the
/// `FhirVersion` variant name.
macro_rules! resource_union {
    ($version:ident; $($name:ident),+ $(,)?) => {
        /// Every resource shape defined by this release, discriminated by `resourceType`
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        #[serde(untagged)]
        pub enum Resource {
            Bundle(Box<Bundle>),
            $($name(Box<$name>),)+
        }

        /// The closed set of `resourceType` names of this release
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ResourceType {
            Bundle,
            $($name,)+
        }

        impl ResourceType {
            pub const ALL: &'static [ResourceType] = &[
                ResourceType::Bundle,
                $(ResourceType::$name,)+
            ];

            pub fn as_str(self) -> &'static str {
                match self {
                    ResourceType::Bundle => "Bundle",
                    $(ResourceType::$name => stringify!($name),)+
                }
            }
        }

        impl std::fmt::Display for ResourceType {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for ResourceType {
            type Err = $crate::FhirError;

            fn from_str(s: &str) -> $crate::Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|resource_type| resource_type.as_str() == s)
                    .ok_or_else(|| {
                        $crate::FhirError::unknown_resource_type(
                            $crate::FhirVersion::$version,
                            s,
                        )
                    })
            }
        }

        impl Resource {
            pub fn resource_type(&self) -> ResourceType {
                match self {
                    Resource::Bundle(_) => ResourceType::Bundle,
                    $(Resource::$name(_) => ResourceType::$name,)+
                }
            }

            pub fn id(&self) -> Option<&str> {
                match self {
                    Resource::Bundle(resource) => resource.id.as_deref(),
                    $(Resource::$name(resource) => resource.id.as_deref(),)+
                }
            }

            /// Decode a resource of this release, dispatching on `resourceType`.
            pub fn from_value(value: serde_json::Value) -> $crate::Result<Self> {
                let resource_type: ResourceType = match $crate::resource::discriminant(&value)
                    .and_then(str::parse)
                    .and_then(|resource_type| {
                        $crate::resource::check_choice_elements(&value).map(|()| resource_type)
                    }) {
                        Ok(resource_type) => resource_type,
                        Err(err) => {
                            tracing::debug!(
                                version = %$crate::FhirVersion::$version,
                                error = %err,
                                "rejected resource"
                            );
                            return Err(err);
                        }
                    };

                Ok(match resource_type {
                    ResourceType::Bundle => Resource::Bundle(Box::new(serde_json::from_value(value)?)),
                    $(ResourceType::$name => Resource::$name(Box::new(serde_json::from_value(value)?)),)+
                })
            }

            pub fn from_json(json: &str) -> $crate::Result<Self> {
                Self::from_value(serde_json::from_str(json)?)
            }
        }

        impl<'de> serde::Deserialize<'de> for Resource {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                Resource::from_value(value).map_err(serde::de::Error::custom)
            }
        }

        impl $crate::ResourceUnion for Resource {
            type Version = $crate::version::$version;

            fn resource_type_name(&self) -> &'static str {
                self.resource_type().as_str()
            }

            fn id(&self) -> Option<&str> {
                Resource::id(self)
            }

            fn from_value(value: serde_json::Value) -> $crate::Result<Self> {
                Resource::from_value(value)
            }
        }

        impl $crate::BundleContent<$crate::version::$version> for Resource {
            fn content_type_name(&self) -> &'static str {
                self.resource_type().as_str()
            }
        }

        impl $crate::Version for $crate::version::$version {
            const VERSION: $crate::FhirVersion = $crate::FhirVersion::$version;

            type Resource = Resource;
            type ResourceType = ResourceType;
            type Bundle<R: $crate::BundleContent<Self>> = Bundle<R>;

            fn resource_types() -> &'static [ResourceType] {
                ResourceType::ALL
            }

            fn resource_type_str(resource_type: ResourceType) -> &'static str {
                resource_type.as_str()
            }
        }

        impl<R: $crate::BundleContent<$crate::version::$version>> $crate::VersionedResource
            for Bundle<R>
        {
            type Version = $crate::version::$version;
            type Name = $crate::names::Bundle;

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
        }

        impl<R: $crate::BundleContent<$crate::version::$version>>
            $crate::BundleContent<$crate::version::$version> for Bundle<R>
        {
            fn content_type_name(&self) -> &'static str {
                "Bundle"
            }
        }

        impl $crate::ResourceOf<$crate::version::$version> for $crate::names::Bundle {
            type Resource = Bundle;
        }

        impl From<Bundle> for Resource {
            fn from(resource: Bundle) -> Self {
                Resource::Bundle(Box::new(resource))
            }
        }

        $(
            impl $crate::VersionedResource for $name {
                type Version = $crate::version::$version;
                type Name = $crate::names::$name;

                fn id(&self) -> Option<&str> {
                    self.id.as_deref()
                }
            }

            impl $crate::BundleContent<$crate::version::$version> for $name {
                fn content_type_name(&self) -> &'static str {
                    stringify!($name)
                }
            }

            impl $crate::ResourceOf<$crate::version::$version> for $crate::names::$name {
                type Resource = $name;
            }

            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(Box::new(resource))
                }
            }

            impl TryFrom<Resource> for $name {
                type Error = Resource;

                fn try_from(resource: Resource) -> std::result::Result<Self, Resource> {
                    match resource {
                        Resource::$name(inner) => Ok(*inner),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

/// Constructors and accessors shared by every release's `Bundle<R>` and
/// `BundleEntry<R>`. The release module supplies `BundleType::Collection`
/// and `BundleType::Searchset`; release-specific bundle fields are listed
/// after the marker with their initial value.
macro_rules! bundle_impls {
    ($version:ident $(; $field:ident: $value:expr)* $(,)?) => {
        impl<R> Bundle<R> {
            pub fn new(bundle_type: BundleType) -> Self {
                Self {
                    resource_type: $crate::names::ResourceTag::new(),
                    id: None,
                    meta: None,
                    implicit_rules: None,
                    language: None,
                    identifier: None,
                    bundle_type,
                    timestamp: None,
                    total: None,
                    link: Vec::new(),
                    entry: Vec::new(),
                    signature: None,
                    $($field: $value,)*
                }
            }

            /// Search results bundle
            pub fn searchset(total: u32, entries: Vec<BundleEntry<R>>) -> Self {
                Self {
                    total: Some(total),
                    entry: entries,
                    ..Self::new(BundleType::Searchset)
                }
            }

            /// Entry resources, skipping entries that carry none
            pub fn resources(&self) -> impl Iterator<Item = &R> {
                self.entry.iter().filter_map(|entry| entry.resource.as_ref())
            }

            pub fn into_resources(self) -> impl Iterator<Item = R> {
                self.entry.into_iter().filter_map(|entry| entry.resource)
            }
        }

        impl<R: $crate::BundleContent<$crate::version::$version>> Bundle<R> {
            /// Collection bundle stamped with the current instant, each entry
            /// addressed by a fresh `urn:uuid:` full URL.
            pub fn collection(resources: impl IntoIterator<Item = R>) -> Self {
                let entry: Vec<BundleEntry<R>> = resources
                    .into_iter()
                    .map(|resource| BundleEntry::new(Some($crate::resource::urn_uuid()), resource))
                    .collect();

                Self {
                    timestamp: Some($crate::resource::instant_now()),
                    entry,
                    ..Self::new(BundleType::Collection)
                }
            }
        }

        impl<R> BundleEntry<R> {
            pub fn new(full_url: Option<String>, resource: R) -> Self {
                Self {
                    link: Vec::new(),
                    full_url,
                    resource: Some(resource),
                    search: None,
                    request: None,
                    response: None,
                }
            }
        }
    };
}

pub(crate) use bundle_impls;
pub(crate) use resource_union;
