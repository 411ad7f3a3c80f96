//! `jdlgen check`

use crate::inputs::jdl_inputs;
use anyhow::Result;
use jdlgen_core::CodegenConfig;
use jdlgen_jdl::JsonJdlParser;
use jdlgen_logging::DiagnosticsCollector;
use jdlgen_model::{GenerationPlan, Pipeline};
use std::path::PathBuf;

pub fn run(config: &CodegenConfig, jdl: Vec<PathBuf>) -> Result<()> {
    let paths = jdl_inputs(jdl, config)?;

    let pipeline = Pipeline::new(JsonJdlParser::new(), config.clone());
    let plan = pipeline.run(&paths)?;

    print!("{}", summary(&plan));
    println!(
        "\n✓ JDL is valid ({} warnings)",
        DiagnosticsCollector::global().warning_count()
    );

    Ok(())
}

/// One line per module, then one indented line per entity
pub fn summary(plan: &GenerationPlan) -> String {
    let mut out = String::new();
    for group in &plan.groups {
        let marker = if group.is_default { " (unclaimed)" } else { "" };
        out.push_str(&format!(
            "✓ Module: {}{} [{}] {} entities\n",
            group.name,
            marker,
            group.package_name,
            group.entities.len()
        ));
        for entity in &group.entities {
            out.push_str(&format!(
                "    {} -> {} ({}, {} fields)\n",
                entity.name,
                entity.table_name,
                entity.resource_type,
                entity.fields.len()
            ));
        }
    }
    out
}
