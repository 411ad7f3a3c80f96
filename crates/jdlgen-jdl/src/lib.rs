//! jdlgen-jdl - JDL input side of the pipeline
//!
//! This crate provides:
//! - [`JdlParser`], the seam to the external JDL parser, and [`JsonJdlParser`]
//!   which reads the parser's JSON export
//! - [`RawJdl`] and the raw record shapes the parser produces
//! - [`JdlLoader`], which resolves input paths and guards against empty input
//! - [`JdlEntity`] and [`JdlModule`], typed adapters over raw records

mod entity;
mod loader;
mod module;
mod parser;
mod raw;

pub use entity::{JdlAnnotation, JdlEntity, JdlField, JdlRelationship, JdlValidation, RelationshipKind};
pub use loader::JdlLoader;
pub use module::{JdlModule, JdlModuleOptions};
pub use parser::{JdlParser, JsonJdlParser};
pub use raw::{
    RawAppConfig, RawApplication, RawCollection, RawEntity, RawEntitySelection, RawField, RawJdl,
    RawOption, RawRelationship, RawRelationshipSide, RawValidation,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{JdlEntity, JdlField, JdlLoader, JdlModule, JdlParser, JsonJdlParser, RawJdl};
}
