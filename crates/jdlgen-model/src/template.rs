//! Template-ready views over the entity model
//!
//! Logic-less templates cannot ask whether an item is the last one in a list,
//! so every list handed to a renderer carries `index`, `first` and `last`.

use crate::model::{CodegenEntityFieldModel, CodegenEntityModel, CodegenRelationshipModel};
use serde::Serialize;

/// A list element annotated with its position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem<T> {
    #[serde(flatten)]
    pub item: T,
    pub index: usize,
    pub first: bool,
    pub last: bool,
}

/// Wraps a scalar so it can be flattened into a [`ListItem`] as `{ value }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateValue<T> {
    pub value: T,
}

/// Annotate items with their list position
pub fn to_template_list<T>(items: impl IntoIterator<Item = T>) -> Vec<ListItem<T>> {
    let items: Vec<T> = items.into_iter().collect();
    let len = items.len();
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| ListItem {
            item,
            index,
            first: index == 0,
            last: index + 1 == len,
        })
        .collect()
}

/// Annotate scalars with their list position, exposing each as `value`
pub fn to_template_values<T>(values: impl IntoIterator<Item = T>) -> Vec<ListItem<TemplateValue<T>>> {
    to_template_list(values.into_iter().map(|value| TemplateValue { value }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldContext {
    #[serde(flatten)]
    pub field: CodegenEntityFieldModel,
    pub declaration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnContext {
    pub name: String,
    pub declaration: String,
    pub domain: String,
}

/// Everything the entity templates bind to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTemplateContext {
    pub package_name: String,
    pub name: String,
    pub name_lower: String,
    pub name_upper_snake: String,
    pub table_name: String,
    pub description: Option<String>,
    pub resource_type: String,
    /// SQL scope tag, e.g. `tenantScoped`
    pub scope: String,
    pub base_columns_table: String,
    pub is_auditable: bool,
    pub is_searchable: bool,
    pub fields: Vec<ListItem<FieldContext>>,
    pub imports: Vec<ListItem<TemplateValue<String>>>,
    pub columns: Vec<ListItem<ColumnContext>>,
    pub relationships: Vec<ListItem<CodegenRelationshipModel>>,
}

impl EntityTemplateContext {
    pub fn from_model(model: &CodegenEntityModel) -> Self {
        let fields = model.fields.iter().map(|field| FieldContext {
            declaration: field.target_declaration(),
            field: field.clone(),
        });

        let columns = model.fields.iter().map(|field| ColumnContext {
            name: field.db_column_name.clone(),
            declaration: field.db_declaration(),
            domain: field.db_domain.clone(),
        });

        Self {
            package_name: model.package_name.clone(),
            name: model.name.clone(),
            name_lower: model.name_lower(),
            name_upper_snake: model.name_upper_snake(),
            table_name: model.table_name.clone(),
            description: model.description.clone(),
            resource_type: model.resource_type.as_str().to_string(),
            scope: model.resource_type.scope_tag().to_string(),
            base_columns_table: model.resource_type.base_columns_table().to_string(),
            is_auditable: model.is_auditable,
            is_searchable: model.is_searchable,
            fields: to_template_list(fields),
            imports: to_template_values(model.imports.iter().cloned()),
            columns: to_template_list(columns),
            relationships: to_template_list(model.relationships.iter().cloned()),
        }
    }
}
