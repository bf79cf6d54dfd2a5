use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PatternParseError;
use crate::pattern::RoutePattern;

/// Identifier for a view component. The rendering layer resolves it to a
/// concrete view to mount; the matcher treats it as opaque.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(value: &str) -> Self {
        ViewId(value.to_string())
    }
}

impl From<String> for ViewId {
    fn from(value: String) -> Self {
        ViewId(value)
    }
}

impl log::kv::ToValue for ViewId {
    fn to_value(&self) -> log::kv::Value<'_> {
        log::kv::Value::from_debug(self)
    }
}

/// A metadata value attached to a route
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Empty,
    String(String),
    Boolean(bool),
}

impl MetadataValue {
    pub fn boolean(&self) -> bool {
        match self {
            MetadataValue::Boolean(b) => *b,
            _ => false,
        }
    }

    pub fn string(&self) -> &str {
        match self {
            MetadataValue::String(s) => s,
            _ => "",
        }
    }
}

impl log::kv::ToValue for MetadataValue {
    fn to_value(&self) -> log::kv::Value<'_> {
        log::kv::Value::from_debug(self)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Boolean(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

pub type MetadataMap = HashMap<String, MetadataValue>;

/// One entry of the route table: a path pattern, the view it maps to, and
/// any metadata the surrounding layers want back when the entry is matched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub pattern: RoutePattern,
    pub view: ViewId,
    #[serde(default)]
    pub metadata: MetadataMap,
}

impl RouteDefinition {
    pub fn new(pattern: &str, view: impl Into<ViewId>) -> Result<Self, PatternParseError> {
        Ok(RouteDefinition {
            pattern: RoutePattern::parse(pattern)?,
            view: view.into(),
            metadata: MetadataMap::default(),
        })
    }

    pub fn with_metadata(mut self, metadata: MetadataMap) -> Self {
        self.metadata = metadata;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_value_accessors() {
        assert_eq!(MetadataValue::from("Home").string(), "Home");
        assert_eq!(MetadataValue::from(true).boolean(), true);

        // Accessors fall back rather than panic on the wrong variant.
        assert_eq!(MetadataValue::Empty.string(), "");
        assert_eq!(MetadataValue::from("Home").boolean(), false);
    }

    #[test]
    fn test_metadata_values_are_untagged_in_data() {
        let metadata: MetadataMap = serde_json::from_str(
            r#"{"title": "Home", "beta": true, "placeholder": null}"#,
        )
        .expect("metadata should deserialize");

        assert_eq!(metadata.get("title"), Some(&MetadataValue::from("Home")));
        assert_eq!(metadata.get("beta"), Some(&MetadataValue::from(true)));
        assert_eq!(metadata.get("placeholder"), Some(&MetadataValue::Empty));
    }
}
