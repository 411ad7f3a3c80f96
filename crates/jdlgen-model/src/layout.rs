//! Gradle output units generated for each module

use jdlgen_core::{GenerationSection, ModuleKind};
use serde::Serialize;

/// A sibling module this unit depends on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDependency {
    /// Domain name of the module, e.g. `library`
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ModuleKind,
}

/// One generated Gradle module (`core-<domain>-api-<kind>`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleLayout {
    pub domain: String,
    #[serde(rename = "moduleType")]
    pub kind: ModuleKind,
    pub base_name: String,
    pub package_name: String,
    pub main_class_name: String,
    pub group: String,
    pub version: String,
    pub core_dependencies: Vec<ModuleDependency>,
    pub include_db: bool,
    pub include_web_service: bool,
    pub include_security: bool,
    pub include_test: bool,
}

impl ModuleLayout {
    /// Layout of the `kind` unit of `domain`
    ///
    /// Db and api units depend on the model unit and pull in database and
    /// test support; the model unit stands alone.
    pub fn for_module(
        domain: &str,
        package_name: &str,
        kind: ModuleKind,
        generation: &GenerationSection,
    ) -> Self {
        let depends_on_model = matches!(kind, ModuleKind::Db | ModuleKind::Api);
        let core_dependencies = if depends_on_model {
            vec![ModuleDependency {
                name: domain.to_string(),
                kind: ModuleKind::Model,
            }]
        } else {
            Vec::new()
        };

        Self {
            domain: domain.to_string(),
            kind,
            base_name: format!("core-{domain}-api"),
            package_name: package_name.to_string(),
            main_class_name: format!("{package_name}.ApplicationKt"),
            group: generation.group.clone(),
            version: generation.version.clone(),
            core_dependencies,
            include_db: depends_on_model,
            include_web_service: false,
            include_security: false,
            include_test: depends_on_model,
        }
    }

    /// The model, db and api units of `domain`, in that order
    pub fn all_for_module(domain: &str, package_name: &str, generation: &GenerationSection) -> Vec<Self> {
        [ModuleKind::Model, ModuleKind::Db, ModuleKind::Api]
            .into_iter()
            .map(|kind| Self::for_module(domain, package_name, kind, generation))
            .collect()
    }

    pub fn name(&self) -> String {
        format!("{}-{}", self.base_name, self.kind)
    }

    pub fn gradle_build_file(&self) -> &'static str {
        "build.gradle.kts"
    }

    pub fn gradle_props_file(&self) -> &'static str {
        "gradle.properties"
    }

    pub fn gradlew_file(&self) -> &'static str {
        "gradlew"
    }

    pub fn gradlew_bat_file(&self) -> &'static str {
        "gradlew.bat"
    }
}
