//! The linear generation pipeline
//!
//! Load → Adapt → Classify/Map → Build → Group, strictly in sequence. Any
//! stage failing ends the run; the sink only ever sees a complete plan.

use crate::builder::EntityModelBuilder;
use crate::orchestrator::{GenerationPlan, group_models};
use crate::types::TypeMappingTable;
use jdlgen_core::{CodegenConfig, CodegenResult};
use jdlgen_jdl::{JdlLoader, JdlParser};
use std::path::Path;
use tracing::info;

/// Consumer of a finished plan, typically a template renderer
pub trait ModelSink {
    fn accept(&mut self, plan: &GenerationPlan) -> CodegenResult<()>;
}

/// One configured generation run
pub struct Pipeline<P> {
    loader: JdlLoader<P>,
    config: CodegenConfig,
    types: TypeMappingTable,
}

impl<P: JdlParser> Pipeline<P> {
    /// Create a pipeline; type overrides from `config` are applied here and
    /// the table is read-only from then on
    pub fn new(parser: P, config: CodegenConfig) -> Self {
        let types = TypeMappingTable::kotlin().with_overrides(&config.types);
        Self {
            loader: JdlLoader::new(parser),
            config,
            types,
        }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    pub fn types(&self) -> &TypeMappingTable {
        &self.types
    }

    /// Run every stage and return the grouped models
    pub fn run<S: AsRef<Path>>(&self, paths: &[S]) -> CodegenResult<GenerationPlan> {
        let raw = self.loader.load(paths)?;

        let entities = JdlLoader::<P>::entities(&raw)?;
        let modules = JdlLoader::<P>::modules(&raw)?;
        info!(
            entities = entities.len(),
            modules = modules.len(),
            "adapted JDL records"
        );

        let builder = EntityModelBuilder::from_config(&self.types, &self.config);
        let models = builder.build_all(&entities)?;

        let plan = group_models(&models, &modules, &self.config.generation)?;
        info!(
            groups = plan.groups.len(),
            entities = plan.entity_count(),
            "generation plan ready"
        );
        Ok(plan)
    }

    /// Run every stage, then hand the plan to `sink`
    pub fn run_into<S: AsRef<Path>>(
        &self,
        paths: &[S],
        sink: &mut dyn ModelSink,
    ) -> CodegenResult<GenerationPlan> {
        let plan = self.run(paths)?;
        sink.accept(&plan)?;
        Ok(plan)
    }
}
