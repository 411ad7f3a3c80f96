//! Raw records as produced by the external JDL parser
//!
//! These shapes mirror the parser's JSON export. Every attribute is optional
//! here; the adapters in [`crate::JdlEntity`] and [`crate::JdlModule`] decide
//! which ones are required and default the rest.

use jdlgen_core::{CodegenError, CodegenResult};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Complete parse result of one or more JDL documents
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawJdl {
    #[serde(default)]
    pub entities: RawCollection<RawEntity>,

    #[serde(default)]
    pub applications: RawCollection<RawApplication>,

    #[serde(default)]
    pub relationships: Vec<RawRelationship>,
}

/// Name-keyed records in document order
#[derive(Debug, Clone, PartialEq)]
pub struct RawCollection<T> {
    entries: Vec<(String, T)>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub table_name: Option<String>,

    #[serde(default)]
    pub javadoc: Option<String>,

    #[serde(default)]
    pub body: Option<Vec<RawField>>,

    #[serde(default)]
    pub annotations: Option<Vec<RawOption>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawField {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "type")]
    pub field_type: Option<String>,

    #[serde(default)]
    pub javadoc: Option<String>,

    #[serde(default)]
    pub validations: Option<Vec<RawValidation>>,

    #[serde(default)]
    pub annotations: Option<Vec<RawOption>>,
}

/// An `@name(value)` annotation or option
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOption {
    #[serde(default)]
    pub option_name: Option<String>,

    #[serde(default)]
    pub option_value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawValidation {
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawApplication {
    #[serde(default)]
    pub config: Option<RawAppConfig>,

    #[serde(default)]
    pub entities: Option<RawEntitySelection>,

    #[serde(default)]
    pub dto: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(default)]
    pub service: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(default)]
    pub paginate: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(default)]
    pub other: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAppConfig {
    #[serde(default)]
    pub base_name: Option<String>,

    #[serde(default)]
    pub package_name: Option<String>,

    #[serde(default)]
    pub application_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntitySelection {
    #[serde(default)]
    pub entity_list: Option<Vec<String>>,

    #[serde(default)]
    pub excluded: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRelationship {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub from: Option<RawRelationshipSide>,

    #[serde(default)]
    pub to: Option<RawRelationshipSide>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRelationshipSide {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub injected_field: Option<String>,

    #[serde(default)]
    pub required: Option<bool>,
}

impl RawJdl {
    /// Parse a JSON export of the JDL parser
    pub fn from_json_str(content: &str) -> CodegenResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Append another document, rejecting names declared twice
    pub fn merge(&mut self, other: RawJdl) -> CodegenResult<()> {
        for (name, entity) in other.entities {
            self.entities.insert_unique("entity", name, entity)?;
        }
        for (name, application) in other.applications {
            self.applications
                .insert_unique("application", name, application)?;
        }
        self.relationships.extend(other.relationships);
        Ok(())
    }
}

impl<T> RawCollection<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Insert a record, failing if the name is already present
    pub fn insert_unique(&mut self, kind: &str, name: String, value: T) -> CodegenResult<()> {
        if self.contains(&name) {
            return Err(CodegenError::DuplicateDeclaration {
                kind: kind.to_string(),
                name,
            });
        }
        self.entries.push((name, value));
        Ok(())
    }
}

impl<T> Default for RawCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for RawCollection<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T> FromIterator<(String, T)> for RawCollection<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RawCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CollectionVisitor(PhantomData))
    }
}

/// Reads a JSON object into entries without losing key order
struct CollectionVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for CollectionVisitor<T> {
    type Value = RawCollection<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of name to record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, T>()? {
            if entries.iter().any(|(existing, _)| existing == &key) {
                return Err(serde::de::Error::custom(format!("duplicate key '{key}'")));
            }
            entries.push((key, value));
        }
        Ok(RawCollection { entries })
    }
}

/// Flatten a raw option value to text
///
/// String literals may arrive bare or wrapped as `{ "value": ... }`.
pub(crate) fn value_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Object(map) => map.get("value").and_then(value_to_string),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_to_string).collect();
            Some(parts.join(","))
        }
    }
}
