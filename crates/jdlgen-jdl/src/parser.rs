//! Seam to the external JDL parser
//!
//! The rest of the pipeline only sees [`RawJdl`]; any parser able to produce it
//! can be plugged in behind [`JdlParser`].

use crate::raw::RawJdl;
use jdlgen_core::{CodegenError, CodegenResult};
use std::path::PathBuf;
use tracing::debug;

/// Parses JDL source files into raw records
pub trait JdlParser {
    fn parse(&self, paths: &[PathBuf]) -> CodegenResult<RawJdl>;
}

/// Reads JSON exports of the JDL parser, one document per file
///
/// Documents are merged in argument order. An entity or application declared
/// by two files is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonJdlParser;

impl JsonJdlParser {
    pub fn new() -> Self {
        Self
    }
}

impl JdlParser for JsonJdlParser {
    fn parse(&self, paths: &[PathBuf]) -> CodegenResult<RawJdl> {
        let mut merged = RawJdl::default();

        for path in paths {
            let content =
                std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;

            let document: RawJdl =
                serde_json::from_str(&content).map_err(|e| CodegenError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;

            debug!(
                path = %path.display(),
                entities = document.entities.len(),
                applications = document.applications.len(),
                "parsed JDL document"
            );

            merged.merge(document)?;
        }

        Ok(merged)
    }
}

/// An already parsed document parses to itself
impl JdlParser for RawJdl {
    fn parse(&self, _paths: &[PathBuf]) -> CodegenResult<RawJdl> {
        Ok(self.clone())
    }
}
