//! Component property definitions, instance values, and overrides

use crate::ComponentPropertyType;
use serde::{Deserialize, Serialize};

/// Value held by a component property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Boolean(bool),
    Text(String),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Property declared on a component or component set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPropertyDefinition {
    #[serde(rename = "type")]
    pub kind: ComponentPropertyType,
    pub default_value: PropertyValue,
    /// Allowed values for `VARIANT` properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_options: Option<Vec<String>>,
    /// Preferred swap targets for `INSTANCE_SWAP` properties, by component key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_values: Option<Vec<String>>,
}

impl ComponentPropertyDefinition {
    pub fn boolean(default: bool) -> Self {
        Self {
            kind: ComponentPropertyType::Boolean,
            default_value: PropertyValue::Boolean(default),
            variant_options: None,
            preferred_values: None,
        }
    }

    pub fn text(default: impl Into<String>) -> Self {
        Self {
            kind: ComponentPropertyType::Text,
            default_value: PropertyValue::Text(default.into()),
            variant_options: None,
            preferred_values: None,
        }
    }

    pub fn variant(default: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            kind: ComponentPropertyType::Variant,
            default_value: PropertyValue::Text(default.into()),
            variant_options: Some(options),
            preferred_values: None,
        }
    }
}

/// Property value set on an instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentPropertyValue {
    #[serde(rename = "type")]
    pub kind: ComponentPropertyType,
    pub value: PropertyValue,
}

impl ComponentPropertyValue {
    pub fn new(kind: ComponentPropertyType, value: impl Into<PropertyValue>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Fields an instance overrides on one of its sublayers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRecord {
    /// Host id of the overridden sublayer
    pub id: String,
    pub overridden_fields: Vec<String>,
}
