//! JSON output of a generation plan
//!
//! Layout under the output directory:
//!
//! ```text
//! <out>/jdlgen-plan.json
//! <out>/<module>/<Entity>.context.json
//! ```

use jdlgen_core::{CodegenError, CodegenResult};
use jdlgen_model::{EntityTemplateContext, GenerationPlan, ModelSink};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const PLAN_FILE: &str = "jdlgen-plan.json";

/// Writes the plan and one template context per grouped entity
pub struct JsonPlanSink {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonPlanSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Vec::new(),
        }
    }

    /// Files written by the last [`ModelSink::accept`]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write_json<T: Serialize>(&mut self, path: PathBuf, value: &T) -> CodegenResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CodegenError::io(parent, e))?;
        }
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&path, content).map_err(|e| CodegenError::io(&path, e))?;
        debug!(path = %path.display(), "wrote file");
        self.written.push(path);
        Ok(())
    }

    fn context_path(&self, module: &str, entity: &str) -> CodegenResult<PathBuf> {
        let module = path_segment("module", module)?;
        let entity = path_segment("entity", entity)?;
        Ok(self
            .out_dir
            .join(module)
            .join(format!("{entity}.context.json")))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl ModelSink for JsonPlanSink {
    fn accept(&mut self, plan: &GenerationPlan) -> CodegenResult<()> {
        self.written.clear();

        let mut contexts = Vec::new();
        for group in &plan.groups {
            for entity in &group.entities {
                contexts.push((self.context_path(&group.name, &entity.name)?, entity));
            }
        }

        self.write_json(self.out_dir.join(PLAN_FILE), plan)?;
        for (path, entity) in contexts {
            self.write_json(path, &EntityTemplateContext::from_model(entity))?;
        }

        info!(
            files = self.written.len(),
            out_dir = %self.out_dir.display(),
            "generation plan written"
        );
        Ok(())
    }
}

/// A name used as a single path component below the output directory
fn path_segment<'a>(kind: &str, name: &'a str) -> CodegenResult<&'a str> {
    let unsafe_name = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || Path::new(name).is_absolute();
    if unsafe_name {
        return Err(CodegenError::malformed(
            kind,
            name,
            "name cannot be used as an output path component",
        ));
    }
    Ok(name)
}
