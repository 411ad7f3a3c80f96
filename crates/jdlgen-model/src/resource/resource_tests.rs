#![allow(non_snake_case)]

use super::*;
use jdlgen_jdl::RawEntity;
use serde_json::json;

fn entity_with(annotations: serde_json::Value) -> JdlEntity {
    let raw: RawEntity = serde_json::from_value(json!({
        "name": "Book",
        "annotations": annotations,
        "body": [{ "name": "title", "type": "String" }]
    }))
    .unwrap();
    JdlEntity::from_raw(&raw, &[]).unwrap()
}

// ResourceVariant

#[test]
fn ResourceVariant___default___is_unscoped() {
    assert_eq!(ResourceVariant::default(), ResourceVariant::UnscopedResource);
}

#[test]
fn ResourceVariant___parse___round_trips_as_str() {
    for variant in ResourceVariant::ALL {
        assert_eq!(ResourceVariant::parse(variant.as_str()), Some(variant));
    }
}

#[test]
fn ResourceVariant___parse___unknown_is_none() {
    assert_eq!(ResourceVariant::parse("GlobalResource"), None);
}

#[test]
fn ResourceVariant___serialize___uses_variant_name() {
    let json = serde_json::to_string(&ResourceVariant::TenantResource).unwrap();

    assert_eq!(json, "\"TenantResource\"");
}

// classify

#[test]
fn classify___no_signals___unscoped_without_capabilities() {
    let entity = entity_with(json!([]));

    let classification = classify(&entity, ScopePolicy::Precedence).unwrap();

    assert_eq!(classification, Classification::default());
}

#[test]
fn classify___tenant_annotation___tenant_resource() {
    let entity = entity_with(json!([{ "optionName": "tenantScoped" }]));

    let classification = classify(&entity, ScopePolicy::Precedence).unwrap();

    assert_eq!(classification.resource_type, ResourceVariant::TenantResource);
}

#[test]
fn classify___resource_type_wrapped_value___reads_variant() {
    let entity = entity_with(json!([
        { "optionName": "resourceType", "optionValue": { "value": "BusinessUnitResource" } }
    ]));

    let classification = classify(&entity, ScopePolicy::Precedence).unwrap();

    assert_eq!(
        classification.resource_type,
        ResourceVariant::BusinessUnitResource
    );
}

#[test]
fn classify___both_signals_with_precedence___business_unit_wins() {
    let entity = entity_with(json!([
        { "optionName": "tenantScoped" },
        { "optionName": "businessUnitScoped" }
    ]));

    let classification = classify(&entity, ScopePolicy::Precedence).unwrap();

    assert_eq!(
        classification.resource_type,
        ResourceVariant::BusinessUnitResource
    );
}

#[test]
fn classify___both_signals_when_strict___ambiguous() {
    let entity = entity_with(json!([
        { "optionName": "resourceType", "optionValue": "TenantResource" },
        { "optionName": "businessUnitScoped" }
    ]));

    let result = classify(&entity, ScopePolicy::Strict);

    assert_eq!(
        result,
        Err(CodegenError::AmbiguousResourceScope {
            entity: "Book".into()
        })
    );
}

#[test]
fn classify___repeated_resource_type_with_precedence___business_unit_wins() {
    let entity = entity_with(json!([
        { "optionName": "resourceType", "optionValue": "TenantResource" },
        { "optionName": "resourceType", "optionValue": "BusinessUnitResource" }
    ]));

    let classification = classify(&entity, ScopePolicy::Precedence).unwrap();

    assert_eq!(
        classification.resource_type,
        ResourceVariant::BusinessUnitResource
    );
}

#[test]
fn classify___repeated_resource_type_when_strict___ambiguous() {
    let entity = entity_with(json!([
        { "optionName": "resourceType", "optionValue": "TenantResource" },
        { "optionName": "resourceType", "optionValue": "BusinessUnitResource" }
    ]));

    let result = classify(&entity, ScopePolicy::Strict);

    assert_eq!(
        result,
        Err(CodegenError::AmbiguousResourceScope {
            entity: "Book".into()
        })
    );
}

#[test]
fn classify___unknown_value_after_known_resource_type___fails() {
    let entity = entity_with(json!([
        { "optionName": "resourceType", "optionValue": "TenantResource" },
        { "optionName": "resourceType", "optionValue": "RegionResource" }
    ]));

    let result = classify(&entity, ScopePolicy::Precedence);

    assert_eq!(
        result,
        Err(CodegenError::UnknownResourceScope {
            entity: "Book".into(),
            value: "RegionResource".into(),
        })
    );
}

#[test]
fn classify___explicit_unscoped_with_tenant_flag___tenant_resource() {
    let entity = entity_with(json!([
        { "optionName": "resourceType", "optionValue": "UnscopedResource" },
        { "optionName": "tenantScoped" }
    ]));

    let classification = classify(&entity, ScopePolicy::Strict).unwrap();

    assert_eq!(classification.resource_type, ResourceVariant::TenantResource);
}

#[test]
fn classify___unknown_resource_type___fails() {
    let entity = entity_with(json!([
        { "optionName": "resourceType", "optionValue": "RegionResource" }
    ]));

    let result = classify(&entity, ScopePolicy::Precedence);

    assert_eq!(
        result,
        Err(CodegenError::UnknownResourceScope {
            entity: "Book".into(),
            value: "RegionResource".into(),
        })
    );
}

#[test]
fn classify___capabilities___independent_of_scope() {
    let entity = entity_with(json!([
        { "optionName": "auditable" },
        { "optionName": "searchable" }
    ]));

    let classification = classify(&entity, ScopePolicy::Precedence).unwrap();

    assert_eq!(
        classification.resource_type,
        ResourceVariant::UnscopedResource
    );
    assert!(classification.is_auditable);
    assert!(classification.is_searchable);
}

#[test]
fn classify___same_entity_twice___same_result() {
    let entity = entity_with(json!([{ "optionName": "tenantScoped" }, { "optionName": "auditable" }]));

    let first = classify(&entity, ScopePolicy::Precedence).unwrap();
    let second = classify(&entity, ScopePolicy::Precedence).unwrap();

    assert_eq!(first, second);
}

// ScopePolicy

#[test]
fn ScopePolicy___from_strict___maps_flag() {
    assert_eq!(ScopePolicy::from_strict(true), ScopePolicy::Strict);
    assert_eq!(ScopePolicy::from_strict(false), ScopePolicy::Precedence);
    assert_eq!(ScopePolicy::default(), ScopePolicy::Precedence);
}
