//! # jdlgen
//!
//! Turns JDL entity descriptions into a typed, template-ready entity model.
//!
//! The pipeline runs one linear pass per generation:
//! - load the JDL parser's JSON export
//! - adapt raw records into [`JdlEntity`] and [`JdlModule`]
//! - classify each entity into a [`ResourceVariant`] and resolve field types
//!   through the [`TypeMappingTable`]
//! - build one [`CodegenEntityModel`] per entity
//! - group models per module into a [`GenerationPlan`]
//!
//! Any failure ends the run; a [`ModelSink`] only ever receives a complete plan.
//!
//! ## Quick Start
//!
//! ```no_run
//! use jdlgen::prelude::*;
//!
//! # fn main() -> CodegenResult<()> {
//! let config = CodegenConfig::from_file("jdlgen.toml")?;
//! let pipeline = Pipeline::new(JsonJdlParser::new(), config);
//!
//! let plan = pipeline.run(&["jdl/library.jdl.json"])?;
//! for group in &plan.groups {
//!     for entity in &group.entities {
//!         println!("{}: {} -> {}", group.name, entity.name, entity.table_name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`jdlgen_core`] - Errors, configuration and path resolution
//! - [`jdlgen_jdl`] - Parser seam, loader and JDL adapters
//! - [`jdlgen_model`] - Type mapping, classification, model building and grouping
//! - [`jdlgen_logging`] - Tracing setup and diagnostics capture

// Re-export core types
pub use jdlgen_core::{
    CodegenConfig, CodegenError, CodegenResult, GenerationSection, LogLevel, ModuleKind,
    PathsSection, TemplateKind, TypeOverride,
};

// Re-export JDL input types
pub use jdlgen_jdl::{
    JdlAnnotation, JdlEntity, JdlField, JdlLoader, JdlModule, JdlModuleOptions, JdlParser,
    JdlRelationship, JdlValidation, JsonJdlParser, RawJdl, RelationshipKind,
};

// Re-export model types
pub use jdlgen_model::{
    CodegenEntityFieldModel, CodegenEntityModel, CodegenRelationshipModel, EntityModelBuilder,
    EntityTemplateContext, GenerationPlan, ListItem, ModelSink, ModuleGroup, ModuleLayout,
    Pipeline, ResourceVariant, ScopePolicy, TypeMapping, TypeMappingTable, classify, group_models,
    naming, to_template_list,
};

// Re-export logging
pub use jdlgen_logging::{DiagnosticsCollector, ReloadHandle, init_logging};

// Re-export common dependencies that embedders need
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use jdlgen::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Configuration and errors: `CodegenConfig`, `CodegenError`, `CodegenResult`
/// - Input side: `JdlParser`, `JsonJdlParser`, `JdlEntity`, `JdlModule`
/// - Pipeline: `Pipeline`, `ModelSink`, `GenerationPlan`, `CodegenEntityModel`
pub mod prelude {
    pub use crate::{
        CodegenConfig, CodegenEntityModel, CodegenError, CodegenResult, GenerationPlan, JdlEntity,
        JdlModule, JdlParser, JsonJdlParser, ModelSink, ModuleGroup, Pipeline, ResourceVariant,
        TypeMappingTable,
    };
}
