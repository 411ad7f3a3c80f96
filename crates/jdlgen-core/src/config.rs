//! Generation configuration and output path resolution
//!
//! Everything here is pure path arithmetic over the loaded settings; no
//! directory is created or inspected.

use crate::{CodegenError, CodegenResult, LogLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Settings for a generation run, usually read from `jdlgen.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Initial log level
    pub log_level: String,

    /// Input, output and template directories
    pub paths: PathsSection,

    /// Per-kind template path overrides, relative to `paths.template_base`
    pub templates: BTreeMap<TemplateKind, String>,

    /// Naming and classification settings
    pub generation: GenerationSection,

    /// Additional or overriding type mapping rows, keyed by JDL type name
    pub types: BTreeMap<String, TypeOverride>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub template_base: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSection {
    /// Package prefix for generated entities
    pub base_package: String,

    /// Maven/Gradle group of generated modules
    pub group: String,

    /// Version of generated modules
    pub version: String,

    /// Group receiving entities that no application claims
    pub default_module: String,

    /// Reject entities carrying both tenant and business-unit scope signals
    pub strict_scoping: bool,
}

/// A type mapping row supplied by configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeOverride {
    pub target: String,

    #[serde(default)]
    pub import: Option<String>,

    #[serde(default)]
    pub db_type: Option<String>,

    #[serde(default)]
    pub db_domain: Option<String>,

    #[serde(default)]
    pub example: Option<String>,
}

/// Kinds of template the external renderer is fed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Resource,
    CreateResource,
    UpdateResource,
    ResourceInterface,
    StateServiceInterface,
    DbEntity,
    CrudRepository,
    StateServiceDbImpl,
    MappingService,
    CreateTableSql,
    CreateViewSql,
    GradleBuild,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 12] = [
        TemplateKind::Resource,
        TemplateKind::CreateResource,
        TemplateKind::UpdateResource,
        TemplateKind::ResourceInterface,
        TemplateKind::StateServiceInterface,
        TemplateKind::DbEntity,
        TemplateKind::CrudRepository,
        TemplateKind::StateServiceDbImpl,
        TemplateKind::MappingService,
        TemplateKind::CreateTableSql,
        TemplateKind::CreateViewSql,
        TemplateKind::GradleBuild,
    ];

    /// Template location relative to the template base when not overridden
    pub fn default_path(&self) -> &'static str {
        match self {
            TemplateKind::Resource => "kotlin/model/resource.mustache",
            TemplateKind::CreateResource => "kotlin/model/resource-create.mustache",
            TemplateKind::UpdateResource => "kotlin/model/resource-update.mustache",
            TemplateKind::ResourceInterface => "kotlin/model/resource-interface.mustache",
            TemplateKind::StateServiceInterface => "kotlin/model/state-service.mustache",
            TemplateKind::DbEntity => "kotlin/db/entity.mustache",
            TemplateKind::CrudRepository => "kotlin/db/crud-repository.mustache",
            TemplateKind::StateServiceDbImpl => "kotlin/db/state-service-db-impl.mustache",
            TemplateKind::MappingService => "kotlin/db/mapping-service.mustache",
            TemplateKind::CreateTableSql => "sql/create-table.mustache",
            TemplateKind::CreateViewSql => "sql/create-view.mustache",
            TemplateKind::GradleBuild => "common/build.gradle.kts.mustache",
        }
    }
}

/// Generated output unit flavours, one Gradle module each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    Model,
    Db,
    Api,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Model => "model",
            ModuleKind::Db => "db",
            ModuleKind::Api => "api",
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            paths: PathsSection::default(),
            templates: BTreeMap::new(),
            generation: GenerationSection::default(),
            types: BTreeMap::new(),
        }
    }
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            template_base: PathBuf::from("templates"),
            input_dir: PathBuf::from("jdl"),
            output_dir: PathBuf::from("generated"),
        }
    }
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            base_package: "net.blugrid.api".to_string(),
            group: "net.blugrid.api".to_string(),
            version: "0.1.0".to_string(),
            default_module: "shared".to_string(),
            strict_scoping: false,
        }
    }
}

impl CodegenConfig {
    /// Create a configuration with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CodegenError::io(path.as_ref(), e))?;

        Self::from_str(&content)
    }

    /// Parse configuration from TOML text
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> CodegenResult<Self> {
        let config: CodegenConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodegenResult<()> {
        self.log_level.parse::<LogLevel>()?;

        if !is_package_name(&self.generation.base_package) {
            return Err(CodegenError::ConfigError(format!(
                "base_package must be a dotted identifier, got '{}'",
                self.generation.base_package
            )));
        }

        if self.generation.default_module.trim().is_empty() {
            return Err(CodegenError::ConfigError(
                "default_module cannot be empty".to_string(),
            ));
        }

        for (jdl_type, row) in &self.types {
            if row.target.trim().is_empty() {
                return Err(CodegenError::ConfigError(format!(
                    "type override '{jdl_type}' has an empty target"
                )));
            }
        }

        Ok(())
    }

    /// The configured log level, falling back to info
    pub fn log_level(&self) -> LogLevel {
        self.log_level.parse().unwrap_or(LogLevel::Info)
    }

    pub fn input_dir(&self) -> &Path {
        &self.paths.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.paths.output_dir
    }

    /// Full path of the template used for `kind`
    pub fn template_path(&self, kind: TemplateKind) -> PathBuf {
        let relative = self
            .templates
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_path());

        self.paths.template_base.join(relative)
    }

    /// Directory of one generated Gradle module
    ///
    /// Model and db modules carry a kind suffix; the api server module does not.
    pub fn module_output_dir(&self, module: &str, kind: ModuleKind) -> PathBuf {
        let base_name = format!("core-{module}-api");
        let dir_name = match kind {
            ModuleKind::Api => base_name.clone(),
            _ => format!("{base_name}-{kind}"),
        };

        self.paths.output_dir.join(&base_name).join(dir_name)
    }

    /// Kotlin source directory for a package inside a module directory
    pub fn source_dir(module_dir: &Path, package: &str) -> PathBuf {
        package
            .split('.')
            .fold(module_dir.join("src/main/kotlin"), |dir, segment| {
                dir.join(segment)
            })
    }
}

/// Check that `s` is a dotted sequence of identifiers
fn is_package_name(s: &str) -> bool {
    !s.is_empty()
        && s.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
