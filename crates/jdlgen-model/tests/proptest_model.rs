//! Property-based tests for classification, type mapping and model building
//!
//! Entities are generated as raw JSON records so the properties hold for the
//! same input shape the JDL parser produces.

use jdlgen_jdl::{JdlEntity, RawEntity};
use jdlgen_model::naming::{to_snake_case, to_upper_snake_case};
use jdlgen_model::{EntityModelBuilder, ResourceVariant, ScopePolicy, TypeMappingTable, classify};
use proptest::prelude::*;
use serde_json::{Value, json};
use std::collections::HashSet;

fn entity(name: &str, annotations: Vec<Value>, body: Vec<Value>) -> JdlEntity {
    let raw: RawEntity = serde_json::from_value(json!({
        "name": name,
        "annotations": annotations,
        "body": body
    }))
    .unwrap();
    JdlEntity::from_raw(&raw, &[]).unwrap()
}

// Strategy: a scope signal written either as a flag or as @resourceType
fn arb_signal(flag: &'static str, variant: &'static str) -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(json!({ "optionName": flag }))),
        Just(Some(json!({ "optionName": "resourceType", "optionValue": variant }))),
        Just(Some(json!({ "optionName": "resourceType", "optionValue": { "value": variant } }))),
    ]
}

// Strategy: PascalCase entity names
fn arb_entity_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}([A-Z][a-z]{1,8}){0,3}"
}

fn mapped_types() -> Vec<String> {
    TypeMappingTable::kotlin()
        .iter()
        .map(|(name, _)| name.to_string())
        .collect()
}

proptest! {
    /// Property: every entity gets exactly the variant its signals imply
    #[test]
    fn proptest_classification_is_total(
        tenant in arb_signal("tenantScoped", "TenantResource"),
        business_unit in arb_signal("businessUnitScoped", "BusinessUnitResource"),
        auditable in any::<bool>(),
        searchable in any::<bool>(),
    ) {
        let has_tenant = tenant.is_some();
        let has_business_unit = business_unit.is_some();

        let mut annotations: Vec<Value> = tenant.into_iter().chain(business_unit).collect();
        if auditable {
            annotations.push(json!({ "optionName": "auditable" }));
        }
        if searchable {
            annotations.push(json!({ "optionName": "searchable" }));
        }

        let classification = classify(&entity("Thing", annotations, vec![]), ScopePolicy::Precedence).unwrap();

        let expected = if has_business_unit {
            ResourceVariant::BusinessUnitResource
        } else if has_tenant {
            ResourceVariant::TenantResource
        } else {
            ResourceVariant::UnscopedResource
        };
        prop_assert_eq!(classification.resource_type, expected);
        prop_assert_eq!(classification.is_auditable, auditable);
        prop_assert_eq!(classification.is_searchable, searchable);
    }

    /// Property: resolving a mapped type twice yields the same target and import
    #[test]
    fn proptest_type_mapping_is_deterministic(index in 0usize..18) {
        let types = mapped_types();
        let jdl_type = &types[index % types.len()];
        let table = TypeMappingTable::kotlin();

        let first = table.resolve("Entity", "field", jdl_type).unwrap();
        let second = table.resolve("Entity", "field", jdl_type).unwrap();

        prop_assert_eq!(&first.target_type, &second.target_type);
        prop_assert_eq!(&first.import, &second.import);
    }

    /// Property: aggregate imports hold each field import once, in first-seen order
    #[test]
    fn proptest_imports_are_deduplicated(indexes in prop::collection::vec(0usize..18, 0..24)) {
        let types = mapped_types();
        let body: Vec<Value> = indexes
            .iter()
            .enumerate()
            .map(|(i, index)| json!({ "name": format!("field{i}"), "type": types[index % types.len()] }))
            .collect();
        let table = TypeMappingTable::kotlin();
        let builder = EntityModelBuilder::new(&table, "net.blugrid.api", ScopePolicy::Precedence);

        let model = builder.build(&entity("Thing", vec![], body)).unwrap();

        let mut seen = HashSet::new();
        let expected: Vec<String> = model
            .fields
            .iter()
            .filter_map(|f| f.import.clone())
            .filter(|import| seen.insert(import.clone()))
            .collect();
        prop_assert_eq!(model.imports, expected);
    }

    /// Property: package and table names depend only on the entity name
    #[test]
    fn proptest_naming_is_referentially_transparent(name in arb_entity_name()) {
        let table = TypeMappingTable::kotlin();
        let builder = EntityModelBuilder::new(&table, "net.blugrid.api", ScopePolicy::Precedence);

        let first = builder.build(&entity(&name, vec![], vec![])).unwrap();
        let second = builder.build(&entity(&name, vec![], vec![])).unwrap();

        prop_assert_eq!(&first.package_name, &second.package_name);
        prop_assert_eq!(&first.table_name, &second.table_name);
        prop_assert_eq!(&first.table_name, &to_snake_case(&name));
        prop_assert_eq!(first.package_name, format!("net.blugrid.api.{}", name.to_lowercase()));
        prop_assert!(!first.table_name.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// Property: upper snake case is the upper-cased snake case
    #[test]
    fn proptest_upper_snake_matches_snake(name in "[a-z]{1,6}([A-Z][a-z]{1,6}){0,4}") {
        prop_assert_eq!(to_upper_snake_case(&name), to_snake_case(&name).to_uppercase());
    }
}
