use crate::error::Result;
use crate::names::ResourceName;
use crate::version::{FhirVersion, Version};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// A single resource shape belonging to exactly one release
pub trait VersionedResource:
    Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    type Version: Version;

    /// Marker for the `resourceType` literal this shape is tagged with
    type Name: ResourceName;

    const RESOURCE_TYPE: &'static str = <Self::Name as ResourceName>::NAME;

    fn id(&self) -> Option<&str>;

    fn version(&self) -> FhirVersion {
        <Self::Version as Version>::VERSION
    }
}

/// The discriminated union of every resource shape in one release
pub trait ResourceUnion:
    Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    type Version: Version;

    fn resource_type_name(&self) -> &'static str;

    fn id(&self) -> Option<&str>;

    /// Decode by dispatching on the `resourceType` discriminant
    fn from_value(value: Value) -> Result<Self>;

    fn version(&self) -> FhirVersion {
        <Self::Version as Version>::VERSION
    }
}

/// Types allowed as the entry content of release `V`'s bundle: the release's
/// union and each of its resource shapes.
pub trait BundleContent<V: Version>:
    Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    fn content_type_name(&self) -> &'static str;
}

/// Reads the `resourceType` discriminant out of raw JSON.
pub(crate) fn discriminant(value: &Value) -> Result<&str> {
    value
        .get("resourceType")
        .and_then(Value::as_str)
        .ok_or(crate::FhirError::MissingResourceType)
}

/// Choice elements checked on decode, as `(array field holding them or None
/// for the resource itself, element name without the type suffix)`.
fn choice_elements(resource_type: &str) -> &'static [(Option<&'static str>, &'static str)] {
    match resource_type {
        "Observation" => &[
            (None, "instantiates"),
            (None, "effective"),
            (None, "value"),
            (Some("component"), "value"),
        ],
        "DiagnosticReport" => &[(None, "effective")],
        "Patient" => &[(None, "deceased"), (None, "multipleBirth")],
        "Medication" => &[(Some("ingredient"), "item"), (Some("ingredient"), "strength")],
        _ => &[],
    }
}

/// `valueQuantity` is a choice of `value`; `value` and `values` are not.
fn is_choice_of(key: &str, element: &str) -> bool {
    key.strip_prefix(element)
        .and_then(|suffix| suffix.chars().next())
        .is_some_and(char::is_uppercase)
}

/// Rejects JSON that sets more than one type of the same `[x]` element.
pub(crate) fn check_choice_elements(value: &Value) -> Result<()> {
    let Some(resource_type) = value.get("resourceType").and_then(Value::as_str) else {
        return Ok(());
    };

    for &(container, element) in choice_elements(resource_type) {
        let scopes: Vec<&Value> = match container {
            None => vec![value],
            Some(field) => value
                .get(field)
                .and_then(Value::as_array)
                .map(|items| items.iter().collect())
                .unwrap_or_default(),
        };

        for object in scopes.iter().filter_map(|scope| scope.as_object()) {
            let present: Vec<&str> = object
                .keys()
                .map(String::as_str)
                .filter(|key| is_choice_of(key, element))
                .collect();
            if present.len() > 1 {
                return Err(crate::FhirError::ConflictingChoice {
                    resource_type: resource_type.to_string(),
                    element,
                    fields: present.join(", "),
                });
            }
        }
    }
    Ok(())
}

/// Fresh `urn:uuid:` URI for a bundle entry's `fullUrl`
pub(crate) fn urn_uuid() -> String {
    format!("urn:uuid:{}", uuid::Uuid::new_v4())
}

/// Current instant in FHIR `instant` format
pub(crate) fn instant_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn discriminant_reads_resource_type() {
        let value = json!({"resourceType": "Patient", "id": "p1"});
        assert_eq!(discriminant(&value).unwrap(), "Patient");
    }

    #[test]
    fn discriminant_requires_a_string() {
        for value in [json!({"id": "p1"}), json!({"resourceType": 7}), json!([])] {
            assert!(matches!(
                discriminant(&value),
                Err(crate::FhirError::MissingResourceType)
            ));
        }
    }

    #[test]
    fn choice_elements_take_one_type() {
        let value = json!({
            "resourceType": "Observation",
            "valueQuantity": {"value": 6.3},
            "valueString": "6.3"
        });
        match check_choice_elements(&value) {
            Err(crate::FhirError::ConflictingChoice {
                resource_type,
                element,
                fields,
            }) => {
                assert_eq!(resource_type, "Observation");
                assert_eq!(element, "value");
                assert_eq!(fields, "valueQuantity, valueString");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let component = json!({
            "resourceType": "Observation",
            "component": [{"valueInteger": 1, "valueBoolean": true}]
        });
        assert!(check_choice_elements(&component).is_err());

        let ingredient = json!({
            "resourceType": "Medication",
            "ingredient": [{"itemReference": {}, "itemCodeableConcept": {}}]
        });
        assert!(check_choice_elements(&ingredient).is_err());
    }

    #[test]
    fn single_choices_and_plain_fields_pass() {
        for value in [
            json!({"resourceType": "Observation", "valueQuantity": {}, "effectiveDateTime": "2024"}),
            json!({"resourceType": "Medication", "ingredient": [{"item": {}, "strengthRatio": {}}]}),
            json!({"resourceType": "Medication", "ingredient": [{"itemReference": {}, "strength": {}}]}),
            json!({"resourceType": "Patient", "deceasedBoolean": false, "multipleBirthInteger": 2}),
            json!({"resourceType": "Bundle", "valueQuantity": {}, "valueString": ""}),
            json!({"id": "no-discriminant"}),
        ] {
            assert!(check_choice_elements(&value).is_ok(), "{value}");
        }
    }

    #[test]
    fn generated_urls_and_instants_are_well_formed() {
        let url = urn_uuid();
        let uuid = url.strip_prefix("urn:uuid:").unwrap();
        assert!(uuid::Uuid::parse_str(uuid).is_ok());

        let instant = instant_now();
        assert!(instant.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&instant).is_ok());
    }
}
