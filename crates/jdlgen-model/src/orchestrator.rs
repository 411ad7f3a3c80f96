//! Partitioning of built entity models into per-module output groups
//!
//! Membership comes from each module's `entities` clause. An entity may be
//! claimed by several modules and is then emitted into each of them. Entities
//! no module claims land in a trailing default group so nothing declared is
//! silently dropped.

use crate::layout::ModuleLayout;
use crate::model::CodegenEntityModel;
use jdlgen_core::{CodegenError, CodegenResult, GenerationSection};
use jdlgen_jdl::JdlModule;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Application type of the default group
const DEFAULT_APPLICATION_TYPE: &str = "microservice";

/// Entities emitted together as one output unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleGroup {
    pub name: String,
    pub package_name: String,
    pub application_type: String,
    /// Holds the entities no module claimed
    pub is_default: bool,
    pub layouts: Vec<ModuleLayout>,
    pub entities: Vec<CodegenEntityModel>,
}

impl ModuleGroup {
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.name.as_str())
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.entity_names().any(|name| name == entity)
    }
}

/// The complete result of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    pub groups: Vec<ModuleGroup>,
}

impl GenerationPlan {
    pub fn group(&self, name: &str) -> Option<&ModuleGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn default_group(&self) -> Option<&ModuleGroup> {
        self.groups.iter().find(|g| g.is_default)
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Number of distinct entities across all groups
    pub fn entity_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(ModuleGroup::entity_names)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Group built models by module claim
///
/// Groups follow module declaration order and entities keep their declaration
/// order inside each group. A module listing an entity that was never declared
/// fails with [`CodegenError::UnknownEntityReference`]. Module names must be
/// unique, and must differ from `default_module` whenever a default group is
/// emitted.
pub fn group_models(
    models: &[CodegenEntityModel],
    modules: &[JdlModule],
    generation: &GenerationSection,
) -> CodegenResult<GenerationPlan> {
    let declared: HashSet<&str> = models.iter().map(|m| m.name.as_str()).collect();

    let mut module_names = HashSet::with_capacity(modules.len());
    for module in modules {
        if !module_names.insert(module.name()) {
            return Err(CodegenError::DuplicateDeclaration {
                kind: "module".to_string(),
                name: module.name().to_string(),
            });
        }
    }

    for module in modules {
        if let Some(unknown) = module
            .listed_entities()
            .find(|entity| !declared.contains(entity))
        {
            return Err(CodegenError::UnknownEntityReference {
                module: module.name().to_string(),
                entity: unknown.to_string(),
            });
        }
    }

    let mut groups = Vec::with_capacity(modules.len() + 1);

    for module in modules {
        let entities: Vec<CodegenEntityModel> = models
            .iter()
            .filter(|m| module.claims(&m.name))
            .cloned()
            .collect();

        let package_name = module.package_name().map_or_else(
            || format!("{}.{}", generation.base_package, module.name().to_lowercase()),
            str::to_string,
        );

        debug!(module = %module.name(), entities = entities.len(), "grouped module");

        groups.push(ModuleGroup {
            layouts: ModuleLayout::all_for_module(module.name(), &package_name, generation),
            name: module.name().to_string(),
            package_name,
            application_type: module.application_type().to_string(),
            is_default: false,
            entities,
        });
    }

    let unclaimed: Vec<CodegenEntityModel> = models
        .iter()
        .filter(|m| !modules.iter().any(|module| module.claims(&m.name)))
        .cloned()
        .collect();

    if !unclaimed.is_empty() {
        if module_names.contains(generation.default_module.as_str()) {
            return Err(CodegenError::ConfigError(format!(
                "default_module '{}' collides with a declared module of the same name",
                generation.default_module
            )));
        }

        info!(
            module = %generation.default_module,
            entities = unclaimed.len(),
            "entities claimed by no module go to the default group"
        );
        groups.push(ModuleGroup {
            name: generation.default_module.clone(),
            package_name: generation.base_package.clone(),
            application_type: DEFAULT_APPLICATION_TYPE.to_string(),
            is_default: true,
            layouts: ModuleLayout::all_for_module(
                &generation.default_module,
                &generation.base_package,
                generation,
            ),
            entities: unclaimed,
        });
    }

    Ok(GenerationPlan { groups })
}
