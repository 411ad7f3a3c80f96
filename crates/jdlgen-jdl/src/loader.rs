//! Raw JDL loading with non-empty input guards

use crate::entity::JdlEntity;
use crate::module::JdlModule;
use crate::parser::JdlParser;
use crate::raw::RawJdl;
use jdlgen_core::{CodegenError, CodegenResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolves input paths, invokes the parser and adapts its records
pub struct JdlLoader<P> {
    parser: P,
}

impl<P: JdlParser> JdlLoader<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Make every path absolute, relative ones against the current directory
    pub fn resolve_paths<S: AsRef<Path>>(paths: &[S]) -> CodegenResult<Vec<PathBuf>> {
        paths
            .iter()
            .map(|p| std::path::absolute(p.as_ref()).map_err(|e| CodegenError::io(p, e)))
            .collect()
    }

    /// Parse the given files into one raw document
    pub fn load<S: AsRef<Path>>(&self, paths: &[S]) -> CodegenResult<RawJdl> {
        let resolved = Self::resolve_paths(paths)?;
        for path in &resolved {
            info!(path = %path.display(), "loading JDL");
        }

        let raw = self.parser.parse(&resolved)?;
        debug!(
            entities = raw.entities.len(),
            applications = raw.applications.len(),
            relationships = raw.relationships.len(),
            "JDL parsed"
        );
        Ok(raw)
    }

    /// Adapt every raw entity, in parser order
    ///
    /// Fails with [`CodegenError::NoEntitiesFound`] when there are none.
    pub fn entities(raw: &RawJdl) -> CodegenResult<Vec<JdlEntity>> {
        if raw.entities.is_empty() {
            return Err(CodegenError::NoEntitiesFound);
        }

        raw.entities
            .iter()
            .map(|(_, entity)| JdlEntity::from_raw(entity, &raw.relationships))
            .collect()
    }

    /// Adapt every raw application, in parser order
    ///
    /// Fails with [`CodegenError::NoApplicationsFound`] when there are none.
    pub fn modules(raw: &RawJdl) -> CodegenResult<Vec<JdlModule>> {
        if raw.applications.is_empty() {
            return Err(CodegenError::NoApplicationsFound);
        }

        raw.applications
            .iter()
            .map(|(_, application)| JdlModule::from_raw(application))
            .collect()
    }

    pub fn load_entities<S: AsRef<Path>>(&self, paths: &[S]) -> CodegenResult<Vec<JdlEntity>> {
        let raw = self.load(paths)?;
        Self::entities(&raw)
    }

    pub fn load_modules<S: AsRef<Path>>(&self, paths: &[S]) -> CodegenResult<Vec<JdlModule>> {
        let raw = self.load(paths)?;
        Self::modules(&raw)
    }
}

#[cfg(test)]
#[path = "loader/loader_tests.rs"]
mod loader_tests;
