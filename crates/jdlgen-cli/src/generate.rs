//! `jdlgen generate`

use crate::inputs::jdl_inputs;
use crate::sink::JsonPlanSink;
use anyhow::Result;
use jdlgen_core::CodegenConfig;
use jdlgen_jdl::JsonJdlParser;
use jdlgen_model::Pipeline;
use std::path::PathBuf;

pub fn run(config: &CodegenConfig, jdl: Vec<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let paths = jdl_inputs(jdl, config)?;
    let out_dir = out_dir.unwrap_or_else(|| config.output_dir().to_path_buf());

    let pipeline = Pipeline::new(JsonJdlParser::new(), config.clone());
    let mut sink = JsonPlanSink::new(&out_dir);
    let plan = pipeline.run_into(&paths, &mut sink)?;

    println!(
        "✓ Generated {} entities in {} modules",
        plan.entity_count(),
        plan.groups.len()
    );
    println!("✓ Wrote {} files to {}", sink.written().len(), out_dir.display());

    Ok(())
}
