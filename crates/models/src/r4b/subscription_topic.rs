use super::Resource;
use crate::datatypes::{
    CodeableConcept, Extension, Identifier, Meta, Narrative, Period, PublicationStatus,
};
use crate::names::{self, ResourceTag};
use serde::{Deserialize, Serialize};

/// Describes a stream of resource state changes or events and annotated with
/// labels useful to filter projections from this topic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTopic {
    pub resource_type: ResourceTag<names::SubscriptionTopic>,

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

    /// Canonical identifier for this subscription topic
    pub url: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived_from: Vec<String>,

    pub status: PublicationStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jurisdiction: Vec<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_trigger: Vec<SubscriptionTopicResourceTrigger>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event_trigger: Vec<SubscriptionTopicEventTrigger>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub can_filter_by: Vec<SubscriptionTopicCanFilterBy>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notification_shape: Vec<SubscriptionTopicNotificationShape>,
}

/// Definition of a resource-based trigger for the subscription topic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTopicResourceTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Data Type or Resource (reference to definition) for this trigger definition
    pub resource: String,

    /// create | update | delete
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_interaction: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_criteria: Option<SubscriptionTopicQueryCriteria>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fhir_path_criteria: Option<String>,
}

/// Query based trigger rule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTopicQueryCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,

    /// test-passes | test-fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_for_create: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_for_delete: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_both: Option<bool>,
}

/// Event definitions the SubscriptionTopic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionTopicEventTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub event: CodeableConcept,

    pub resource: String,
}

/// Properties by which a Subscription can filter notifications from the topic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTopicCanFilterBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,

    pub filter_parameter: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_definition: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier: Vec<String>,
}

/// Properties for describing the shape of notifications generated by this topic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTopicNotificationShape {
    pub resource: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rev_include: Vec<String>,
}
