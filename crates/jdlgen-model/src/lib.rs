//! jdlgen-model - From adapted JDL records to a renderable generation plan
//!
//! This crate provides:
//! - [`TypeMappingTable`] for JDL → Kotlin/SQL type resolution
//! - [`classify`] and [`ResourceVariant`] for resource scoping
//! - [`EntityModelBuilder`] producing [`CodegenEntityModel`]s
//! - [`group_models`] partitioning models into a [`GenerationPlan`]
//! - [`Pipeline`] running every stage in sequence into a [`ModelSink`]

mod builder;
mod layout;
mod model;
mod orchestrator;
mod pipeline;
mod resource;
mod template;
mod types;

pub mod naming;

pub use builder::EntityModelBuilder;
pub use layout::{ModuleDependency, ModuleLayout};
pub use model::{CodegenEntityFieldModel, CodegenEntityModel, CodegenRelationshipModel};
pub use orchestrator::{GenerationPlan, ModuleGroup, group_models};
pub use pipeline::{ModelSink, Pipeline};
pub use resource::{Classification, ResourceVariant, ScopePolicy, classify};
pub use template::{
    ColumnContext, EntityTemplateContext, FieldContext, ListItem, TemplateValue, to_template_list,
    to_template_values,
};
pub use types::{TypeMapping, TypeMappingTable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodegenEntityModel, EntityModelBuilder, GenerationPlan, ModelSink, ModuleGroup, Pipeline,
        ResourceVariant, TypeMappingTable,
    };
}
