//! Composes classification and type mapping into [`CodegenEntityModel`]s
//!
//! # Naming Convention
//!
//! - package: `<base package>.<lower-cased entity name>`
//! - table: the declared table name, else the snake_case entity name
//!   (`BookAuthor` → `book_author`), never pluralised
//! - column: UPPER_SNAKE field name (`publishedAt` → `PUBLISHED_AT`)

use crate::model::{CodegenEntityFieldModel, CodegenEntityModel, CodegenRelationshipModel};
use crate::naming::{to_snake_case, to_upper_snake_case};
use crate::resource::{Classification, ScopePolicy, classify};
use crate::types::TypeMappingTable;
use jdlgen_core::{CodegenConfig, CodegenError, CodegenResult};
use jdlgen_jdl::{JdlEntity, JdlField, JdlRelationship};
use std::collections::HashSet;
use tracing::{debug, info};

const TABLE_NAME: &str = "tableName";
const EXAMPLE: &str = "example";
const NO_AUDIT: &str = "noAudit";
const NO_SEARCH: &str = "noSearch";

/// Builds entity models against a read-only type table
#[derive(Debug, Clone)]
pub struct EntityModelBuilder<'a> {
    types: &'a TypeMappingTable,
    base_package: String,
    policy: ScopePolicy,
}

impl<'a> EntityModelBuilder<'a> {
    pub fn new(types: &'a TypeMappingTable, base_package: impl Into<String>, policy: ScopePolicy) -> Self {
        Self {
            types,
            base_package: base_package.into(),
            policy,
        }
    }

    pub fn from_config(types: &'a TypeMappingTable, config: &CodegenConfig) -> Self {
        Self::new(
            types,
            config.generation.base_package.clone(),
            ScopePolicy::from_strict(config.generation.strict_scoping),
        )
    }

    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    /// Build one entity model
    ///
    /// Fails on the first field whose type is not in the table; no partial
    /// model is returned. Relationship targets are not checked here, see
    /// [`EntityModelBuilder::build_all`].
    pub fn build(&self, entity: &JdlEntity) -> CodegenResult<CodegenEntityModel> {
        let classification = classify(entity, self.policy)?;

        let fields = entity
            .fields()
            .iter()
            .map(|field| self.build_field(entity.name(), field, &classification))
            .collect::<CodegenResult<Vec<_>>>()?;

        let imports = collect_imports(&fields);

        let relationships = entity
            .relationships()
            .iter()
            .map(build_relationship)
            .collect();

        debug!(
            entity = %entity.name(),
            fields = fields.len(),
            resource_type = %classification.resource_type,
            "built entity model"
        );

        Ok(CodegenEntityModel {
            name: entity.name().to_string(),
            package_name: self.package_for(entity.name()),
            table_name: table_name(entity),
            description: entity.javadoc().map(str::to_string),
            fields,
            imports,
            relationships,
            resource_type: classification.resource_type,
            is_auditable: classification.is_auditable,
            is_searchable: classification.is_searchable,
        })
    }

    /// Build every entity in declaration order
    ///
    /// Relationship targets must name declared entities. The first failure
    /// aborts the whole batch.
    pub fn build_all(&self, entities: &[JdlEntity]) -> CodegenResult<Vec<CodegenEntityModel>> {
        let declared: HashSet<&str> = entities.iter().map(JdlEntity::name).collect();

        for entity in entities {
            if let Some(unknown) = entity
                .relationships()
                .iter()
                .find(|r| !declared.contains(r.target.as_str()))
            {
                return Err(CodegenError::UnknownRelationshipTarget {
                    entity: entity.name().to_string(),
                    relationship: unknown.field_name.clone(),
                    target: unknown.target.clone(),
                });
            }
        }

        let models = entities
            .iter()
            .map(|entity| self.build(entity))
            .collect::<CodegenResult<Vec<_>>>()?;

        info!(count = models.len(), "built entity models");
        Ok(models)
    }

    fn package_for(&self, entity_name: &str) -> String {
        format!("{}.{}", self.base_package, entity_name.to_lowercase())
    }

    fn build_field(
        &self,
        entity: &str,
        field: &JdlField,
        classification: &Classification,
    ) -> CodegenResult<CodegenEntityFieldModel> {
        let mapping = self.types.resolve(entity, field.name(), field.field_type())?;
        let required = field.is_required();

        Ok(CodegenEntityFieldModel {
            name: field.name().to_string(),
            jdl_type: field.field_type().to_string(),
            target_type: mapping.target_type.clone(),
            import: mapping.import.clone(),
            db_column_name: to_upper_snake_case(field.name()),
            db_data_type: mapping.db_data_type.clone(),
            db_domain: mapping.db_domain.clone(),
            required,
            nullable: !required,
            unique: field.is_unique(),
            description: field.javadoc().map(str::to_string),
            example: field
                .annotation(EXAMPLE)
                .map_or_else(|| mapping.example.clone(), str::to_string),
            audited: classification.is_auditable && !field.has_annotation(NO_AUDIT),
            searchable: classification.is_searchable && !field.has_annotation(NO_SEARCH),
        })
    }
}

fn table_name(entity: &JdlEntity) -> String {
    entity
        .table_name()
        .or_else(|| entity.annotation_value(TABLE_NAME))
        .map_or_else(|| to_snake_case(entity.name()), str::to_string)
}

/// Field imports without duplicates, in first-seen order
fn collect_imports(fields: &[CodegenEntityFieldModel]) -> Vec<String> {
    let mut seen = HashSet::new();
    fields
        .iter()
        .filter_map(|f| f.import.as_deref())
        .filter(|import| seen.insert(*import))
        .map(str::to_string)
        .collect()
}

fn build_relationship(relationship: &JdlRelationship) -> CodegenRelationshipModel {
    CodegenRelationshipModel {
        name: relationship.field_name.clone(),
        target: relationship.target.clone(),
        kind: relationship.kind,
        required: relationship.required,
        join_column: relationship
            .kind
            .is_owning()
            .then(|| format!("{}_id", to_snake_case(&relationship.field_name))),
    }
}
