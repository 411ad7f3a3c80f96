//! Typed adapter over raw entity records

use crate::raw::{RawEntity, RawField, RawOption, RawRelationship, RawValidation, value_to_string};
use jdlgen_core::{CodegenError, CodegenResult};
use serde::Serialize;

/// An `@name(value)` annotation on an entity or field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JdlAnnotation {
    pub name: String,
    pub value: Option<String>,
}

/// A field validation such as `required` or `maxlength(64)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JdlValidation {
    pub name: String,
    pub value: Option<String>,
}

/// A declared entity field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdlField {
    name: String,
    field_type: String,
    javadoc: Option<String>,
    validations: Vec<JdlValidation>,
    annotations: Vec<JdlAnnotation>,
}

/// Relationship cardinality as written in JDL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationshipKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

/// A relationship seen from its declaring (`from`) entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdlRelationship {
    pub kind: RelationshipKind,
    /// Property injected into the declaring entity
    pub field_name: String,
    /// Name of the related entity
    pub target: String,
    pub required: bool,
}

/// One entity declared in the JDL source
///
/// Constructed once per raw record and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdlEntity {
    name: String,
    table_name: Option<String>,
    javadoc: Option<String>,
    fields: Vec<JdlField>,
    annotations: Vec<JdlAnnotation>,
    relationships: Vec<JdlRelationship>,
}

impl JdlAnnotation {
    pub fn from_raw(raw: &RawOption) -> Option<Self> {
        let name = raw.option_name.clone()?;
        Some(Self {
            name,
            value: raw.option_value.as_ref().and_then(value_to_string),
        })
    }
}

impl JdlValidation {
    pub fn from_raw(raw: &RawValidation) -> Option<Self> {
        let name = raw.key.clone()?;
        Some(Self {
            name,
            value: raw.value.as_ref().and_then(value_to_string),
        })
    }
}

impl JdlField {
    /// Adapt a raw field of `entity`; name and type are required
    pub fn from_raw(entity: &str, raw: &RawField) -> CodegenResult<Self> {
        let name = raw
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CodegenError::malformed("field", entity, "field without a name"))?;

        let field_type = raw.field_type.clone().filter(|t| !t.is_empty()).ok_or_else(|| {
            CodegenError::malformed("field", format!("{entity}.{name}"), "field without a type")
        })?;

        Ok(Self {
            name,
            field_type,
            javadoc: raw.javadoc.clone(),
            validations: adapt_all(raw.validations.as_deref(), JdlValidation::from_raw),
            annotations: adapt_all(raw.annotations.as_deref(), JdlAnnotation::from_raw),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared JDL type name, e.g. `BigDecimal`
    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    pub fn javadoc(&self) -> Option<&str> {
        self.javadoc.as_deref()
    }

    pub fn validations(&self) -> &[JdlValidation] {
        &self.validations
    }

    pub fn annotations(&self) -> &[JdlAnnotation] {
        &self.annotations
    }

    /// `required` with no value, or with the value `true`
    pub fn is_required(&self) -> bool {
        self.is_flag_validation("required")
    }

    pub fn is_unique(&self) -> bool {
        self.is_flag_validation("unique")
    }

    pub fn validation(&self, name: &str) -> Option<&JdlValidation> {
        self.validations.iter().find(|v| v.name == name)
    }

    pub fn annotation(&self, name: &str) -> Option<&str> {
        self.annotations
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }

    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a.name == name)
    }

    fn is_flag_validation(&self, name: &str) -> bool {
        self.validations
            .iter()
            .any(|v| v.name == name && matches!(v.value.as_deref(), None | Some("true")))
    }
}

impl RelationshipKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OneToOne" => Some(RelationshipKind::OneToOne),
            "OneToMany" => Some(RelationshipKind::OneToMany),
            "ManyToOne" => Some(RelationshipKind::ManyToOne),
            "ManyToMany" => Some(RelationshipKind::ManyToMany),
            _ => None,
        }
    }

    /// Whether the declaring side holds the foreign key column
    pub fn is_owning(&self) -> bool {
        matches!(self, RelationshipKind::ManyToOne | RelationshipKind::OneToOne)
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, RelationshipKind::OneToMany | RelationshipKind::ManyToMany)
    }
}

impl JdlRelationship {
    pub fn from_raw(entity: &str, raw: &RawRelationship) -> CodegenResult<Self> {
        let kind_name = raw.kind.as_deref().unwrap_or_default();
        let kind = RelationshipKind::parse(kind_name).ok_or_else(|| {
            CodegenError::malformed(
                "relationship",
                entity,
                format!("unknown relationship type '{kind_name}'"),
            )
        })?;

        let target = raw
            .to
            .as_ref()
            .and_then(|side| side.name.clone())
            .ok_or_else(|| {
                CodegenError::malformed("relationship", entity, "relationship without a target")
            })?;

        let from = raw.from.as_ref();
        let field_name = from
            .and_then(|side| side.injected_field.clone())
            .unwrap_or_else(|| lower_first(&target));

        Ok(Self {
            kind,
            field_name,
            target,
            required: from.and_then(|side| side.required).unwrap_or(false),
        })
    }
}

impl JdlEntity {
    /// Adapt a raw entity record
    ///
    /// `relationships` may hold every relationship of the document; only those
    /// declared from this entity are kept. Fails when the record has no name
    /// or no field list.
    pub fn from_raw(raw: &RawEntity, relationships: &[RawRelationship]) -> CodegenResult<Self> {
        let name = raw
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CodegenError::malformed("entity", "<unnamed>", "entity without a name"))?;

        let body = raw
            .body
            .as_ref()
            .ok_or_else(|| CodegenError::malformed("entity", &name, "entity without a field list"))?;

        let fields = body
            .iter()
            .map(|f| JdlField::from_raw(&name, f))
            .collect::<CodegenResult<Vec<_>>>()?;

        let relationships = relationships
            .iter()
            .filter(|r| r.from.as_ref().and_then(|side| side.name.as_deref()) == Some(name.as_str()))
            .map(|r| JdlRelationship::from_raw(&name, r))
            .collect::<CodegenResult<Vec<_>>>()?;

        Ok(Self {
            table_name: raw.table_name.clone().filter(|t| !t.is_empty()),
            javadoc: raw.javadoc.clone(),
            annotations: adapt_all(raw.annotations.as_deref(), JdlAnnotation::from_raw),
            name,
            fields,
            relationships,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Table name given by the parser, if any
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    pub fn javadoc(&self) -> Option<&str> {
        self.javadoc.as_deref()
    }

    pub fn fields(&self) -> &[JdlField] {
        &self.fields
    }

    pub fn annotations(&self) -> &[JdlAnnotation] {
        &self.annotations
    }

    pub fn relationships(&self) -> &[JdlRelationship] {
        &self.relationships
    }

    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a.name == name)
    }

    pub fn annotation_value(&self, name: &str) -> Option<&str> {
        self.annotations
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }

    /// Values of every annotation with this name, in declaration order
    pub fn annotation_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.annotations
            .iter()
            .filter(move |a| a.name == name)
            .filter_map(|a| a.value.as_deref())
    }
}

/// Adapt optional raw items, dropping entries without a name
fn adapt_all<R, T>(raw: Option<&[R]>, adapt: fn(&R) -> Option<T>) -> Vec<T> {
    raw.unwrap_or_default().iter().filter_map(adapt).collect()
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}
