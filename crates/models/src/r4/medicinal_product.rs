use super::Resource;
use crate::datatypes::{
    CodeableConcept, Coding, Extension, Identifier, Meta, Narrative, Reference,
};
use crate::names::{self, ResourceTag};
use serde::{Deserialize, Serialize};

/// Detailed definition of a medicinal product, typically for uses other than
/// direct patient care (e.g. regulatory use). Replaced by
/// `MedicinalProductDefinition` after R4.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicinalProduct {
    pub resource_type: ResourceTag<names::MedicinalProduct>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<Resource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Coding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined_pharmaceutical_dose_form: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_status_of_supply: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_monitoring_indicator: Option<CodeableConcept>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_measures: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pharmaceutical_product: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packaged_medicinal_product: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attached_document: Vec<Reference>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub master_file: Vec<Reference>,

    pub name: Vec<MedicinalProductName>,
}

/// The product's name, including full name and possibly coded parts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicinalProductName {
    pub product_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name_part: Vec<MedicinalProductNamePart>,
}

/// Coding words or phrases of the name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicinalProductNamePart {
    pub part: String,

    #[serde(rename = "type")]
    pub part_type: Coding,
}
