//! The resolved entity model handed to template rendering
//!
//! Nothing here is derived lazily: every value a template needs is computed
//! by the builder so renderers never re-derive names, types or imports.

use crate::naming::to_upper_snake_case;
use crate::resource::ResourceVariant;
use jdlgen_jdl::RelationshipKind;
use serde::Serialize;

/// One field with its target type resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenEntityFieldModel {
    pub name: String,
    /// Type as declared in JDL
    pub jdl_type: String,
    pub target_type: String,
    /// Import the target type needs; `None` for built-ins
    pub import: Option<String>,
    pub db_column_name: String,
    pub db_data_type: String,
    pub db_domain: String,
    pub required: bool,
    pub nullable: bool,
    pub unique: bool,
    pub description: Option<String>,
    pub example: String,
    /// Participates in the audit trail
    pub audited: bool,
    /// Participates in the search index
    pub searchable: bool,
}

impl CodegenEntityFieldModel {
    /// Kotlin property declaration, e.g. `price: BigDecimal?`
    pub fn target_declaration(&self) -> String {
        let marker = if self.nullable { "?" } else { "" };
        format!("{}: {}{}", self.name, self.target_type, marker)
    }

    /// SQL column declaration, e.g. `PRICE NUMERIC(19, 4) NOT NULL`
    pub fn db_declaration(&self) -> String {
        let mut declaration = format!("{} {}", self.db_column_name, self.db_data_type);
        if self.required {
            declaration.push_str(" NOT NULL");
        }
        declaration
    }
}

/// A relationship to another generated entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenRelationshipModel {
    pub name: String,
    pub target: String,
    pub kind: RelationshipKind,
    pub required: bool,
    /// Foreign key column on owning sides
    pub join_column: Option<String>,
}

/// Everything a renderer needs to emit one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodegenEntityModel {
    pub name: String,
    pub package_name: String,
    pub table_name: String,
    pub description: Option<String>,
    pub fields: Vec<CodegenEntityFieldModel>,
    /// Union of field imports in first-seen order
    pub imports: Vec<String>,
    pub relationships: Vec<CodegenRelationshipModel>,
    pub resource_type: ResourceVariant,
    pub is_auditable: bool,
    pub is_searchable: bool,
}

impl CodegenEntityModel {
    pub fn name_lower(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn name_upper_snake(&self) -> String {
        to_upper_snake_case(&self.name)
    }

    pub fn field(&self, name: &str) -> Option<&CodegenEntityFieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &CodegenEntityFieldModel> {
        self.fields.iter().filter(|f| f.required)
    }
}
