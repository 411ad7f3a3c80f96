//! Typed adapter over raw application records

use crate::raw::{RawApplication, value_to_string};
use jdlgen_core::{CodegenError, CodegenResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Entity list entry meaning "every declared entity"
const ALL_ENTITIES: &str = "*";

/// Application type assumed when the record does not name one
const DEFAULT_APPLICATION_TYPE: &str = "microservice";

/// Per-application generation options (`dto`, `service`, `paginate`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JdlModuleOptions {
    pub dto: BTreeMap<String, String>,
    pub service: BTreeMap<String, String>,
    pub paginate: BTreeMap<String, String>,
    pub other: BTreeMap<String, Vec<String>>,
}

/// One application declared in the JDL source; one generated output unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdlModule {
    name: String,
    package_name: Option<String>,
    application_type: String,
    entity_list: Vec<String>,
    excluded: Vec<String>,
    options: JdlModuleOptions,
}

impl JdlModule {
    /// Adapt a raw application record; `config.baseName` is required
    pub fn from_raw(raw: &RawApplication) -> CodegenResult<Self> {
        let config = raw.config.clone().unwrap_or_default();

        let name = config.base_name.filter(|n| !n.is_empty()).ok_or_else(|| {
            CodegenError::malformed("application", "<unnamed>", "application without a baseName")
        })?;

        let selection = raw.entities.clone().unwrap_or_default();

        Ok(Self {
            name,
            package_name: config.package_name.filter(|p| !p.is_empty()),
            application_type: config
                .application_type
                .unwrap_or_else(|| DEFAULT_APPLICATION_TYPE.to_string()),
            entity_list: selection.entity_list.unwrap_or_default(),
            excluded: selection.excluded.unwrap_or_default(),
            options: JdlModuleOptions {
                dto: string_options(raw.dto.as_ref()),
                service: string_options(raw.service.as_ref()),
                paginate: string_options(raw.paginate.as_ref()),
                other: list_options(raw.other.as_ref()),
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    pub fn application_type(&self) -> &str {
        &self.application_type
    }

    pub fn options(&self) -> &JdlModuleOptions {
        &self.options
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Whether the entity list is the `*` wildcard
    pub fn claims_all(&self) -> bool {
        self.entity_list.iter().any(|e| e == ALL_ENTITIES)
    }

    /// Entity names listed explicitly, in declaration order
    pub fn listed_entities(&self) -> impl Iterator<Item = &str> {
        self.entity_list
            .iter()
            .map(String::as_str)
            .filter(|e| *e != ALL_ENTITIES)
    }

    /// Whether this module's output includes `entity`
    pub fn claims(&self, entity: &str) -> bool {
        if self.excluded.iter().any(|e| e == entity) {
            return false;
        }
        self.claims_all() || self.entity_list.iter().any(|e| e == entity)
    }
}

fn string_options(raw: Option<&BTreeMap<String, serde_json::Value>>) -> BTreeMap<String, String> {
    raw.into_iter()
        .flatten()
        .filter_map(|(key, value)| value_to_string(value).map(|v| (key.clone(), v)))
        .collect()
}

fn list_options(
    raw: Option<&BTreeMap<String, serde_json::Value>>,
) -> BTreeMap<String, Vec<String>> {
    raw.into_iter()
        .flatten()
        .map(|(key, value)| {
            let items = match value {
                serde_json::Value::Array(items) => items.iter().filter_map(value_to_string).collect(),
                other => value_to_string(other).into_iter().collect(),
            };
            (key.clone(), items)
        })
        .collect()
}
