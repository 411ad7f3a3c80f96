#![allow(non_snake_case)]

use super::*;
use std::path::Path;

// Parsing

#[test]
fn CodegenConfig___from_str___parses_full_document() {
    let toml = r#"
log_level = "debug"

[paths]
template_base = "tpl"
input_dir = "model"
output_dir = "out"

[templates]
resource = "custom/resource.mustache"

[generation]
base_package = "com.example.api"
group = "com.example"
version = "2.0.0"
default_module = "common"
strict_scoping = true

[types.Money]
target = "BigDecimal"
import = "java.math.BigDecimal"
db_type = "NUMERIC(19, 4)"
"#;

    let config = CodegenConfig::from_str(toml).unwrap();

    assert_eq!(config.log_level(), LogLevel::Debug);
    assert_eq!(config.input_dir(), Path::new("model"));
    assert_eq!(config.output_dir(), Path::new("out"));
    assert_eq!(config.generation.base_package, "com.example.api");
    assert_eq!(config.generation.default_module, "common");
    assert!(config.generation.strict_scoping);
    assert_eq!(
        config.types["Money"].import.as_deref(),
        Some("java.math.BigDecimal")
    );
    assert_eq!(config.types["Money"].db_domain, None);
}

#[test]
fn CodegenConfig___from_str___empty_document_uses_defaults() {
    let config = CodegenConfig::from_str("").unwrap();

    assert_eq!(config, CodegenConfig::default());
    assert_eq!(config.generation.base_package, "net.blugrid.api");
    assert!(!config.generation.strict_scoping);
}

#[test]
fn CodegenConfig___from_str___partial_section_keeps_other_defaults() {
    let config = CodegenConfig::from_str("[generation]\nversion = \"9.9.9\"\n").unwrap();

    assert_eq!(config.generation.version, "9.9.9");
    assert_eq!(config.generation.group, "net.blugrid.api");
}

#[test]
fn CodegenConfig___from_str___rejects_unknown_log_level() {
    let result = CodegenConfig::from_str("log_level = \"chatty\"");

    assert!(matches!(result, Err(CodegenError::ConfigError(_))));
}

#[test]
fn CodegenConfig___from_str___rejects_invalid_toml() {
    let result = CodegenConfig::from_str("[paths\n");

    assert!(matches!(result, Err(CodegenError::ConfigError(_))));
}

#[test]
fn CodegenConfig___from_str___rejects_empty_type_target() {
    let result = CodegenConfig::from_str("[types.Money]\ntarget = \" \"\n");

    assert!(matches!(result, Err(CodegenError::ConfigError(_))));
}

#[test]
fn CodegenConfig___from_file___missing_file_returns_io_error() {
    let result = CodegenConfig::from_file("/nonexistent/jdlgen.toml");

    assert!(matches!(result, Err(CodegenError::Io { .. })));
}

// Template resolution

#[test]
fn CodegenConfig___template_path___uses_default_relative_path() {
    let config = CodegenConfig::default();

    let path = config.template_path(TemplateKind::CreateTableSql);

    assert_eq!(path, Path::new("templates/sql/create-table.mustache"));
}

#[test]
fn CodegenConfig___template_path___override_replaces_default() {
    let mut config = CodegenConfig::default();
    config
        .templates
        .insert(TemplateKind::Resource, "mine/resource.hbs".to_string());

    let path = config.template_path(TemplateKind::Resource);

    assert_eq!(path, Path::new("templates/mine/resource.hbs"));
}

#[test]
fn TemplateKind___default_path___unique_per_kind() {
    let paths: std::collections::HashSet<&str> =
        TemplateKind::ALL.iter().map(|k| k.default_path()).collect();

    assert_eq!(paths.len(), TemplateKind::ALL.len());
}

// Module directories

#[test]
fn CodegenConfig___module_output_dir___model_has_kind_suffix() {
    let config = CodegenConfig::default();

    let dir = config.module_output_dir("organisation", ModuleKind::Model);

    assert_eq!(
        dir,
        Path::new("generated/core-organisation-api/core-organisation-api-model")
    );
}

#[test]
fn CodegenConfig___module_output_dir___api_has_no_suffix() {
    let config = CodegenConfig::default();

    let dir = config.module_output_dir("organisation", ModuleKind::Api);

    assert_eq!(
        dir,
        Path::new("generated/core-organisation-api/core-organisation-api")
    );
}

#[test]
fn CodegenConfig___source_dir___expands_package_segments() {
    let dir = CodegenConfig::source_dir(Path::new("mod"), "net.blugrid.api.book");

    assert_eq!(dir, Path::new("mod/src/main/kotlin/net/blugrid/api/book"));
}
