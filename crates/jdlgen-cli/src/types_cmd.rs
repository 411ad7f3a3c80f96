//! `jdlgen types`

use jdlgen_core::CodegenConfig;
use jdlgen_model::TypeMappingTable;

pub fn run(config: &CodegenConfig) {
    let table = TypeMappingTable::kotlin().with_overrides(&config.types);
    print!("{}", render(&table));
}

/// The table as aligned text columns
pub fn render(table: &TypeMappingTable) -> String {
    let mut rows = vec![[
        "JDL".to_string(),
        "KOTLIN".to_string(),
        "IMPORT".to_string(),
        "SQL".to_string(),
        "DOMAIN".to_string(),
    ]];
    rows.extend(table.iter().map(|(jdl, mapping)| {
        [
            jdl.to_string(),
            mapping.target_type.clone(),
            mapping.import.clone().unwrap_or_else(|| "-".to_string()),
            mapping.db_data_type.clone(),
            mapping.db_domain.clone(),
        ]
    }));

    let mut widths = [0usize; 5];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}
