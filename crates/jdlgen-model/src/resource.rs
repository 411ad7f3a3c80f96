//! Resource variant classification
//!
//! Every entity is exactly one of three resource shapes. The variant decides
//! which common columns the table inherits and which access-control scope the
//! generated services apply.

use jdlgen_core::{CodegenError, CodegenResult};
use jdlgen_jdl::JdlEntity;
use serde::{Deserialize, Serialize};
use tracing::warn;

const BUSINESS_UNIT_SCOPED: &str = "businessUnitScoped";
const TENANT_SCOPED: &str = "tenantScoped";
const RESOURCE_TYPE: &str = "resourceType";
const AUDITABLE: &str = "auditable";
const SEARCHABLE: &str = "searchable";

/// Architectural shape of a generated entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResourceVariant {
    #[default]
    UnscopedResource,
    TenantResource,
    BusinessUnitResource,
}

impl ResourceVariant {
    pub const ALL: [ResourceVariant; 3] = [
        ResourceVariant::UnscopedResource,
        ResourceVariant::TenantResource,
        ResourceVariant::BusinessUnitResource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceVariant::UnscopedResource => "UnscopedResource",
            ResourceVariant::TenantResource => "TenantResource",
            ResourceVariant::BusinessUnitResource => "BusinessUnitResource",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    /// Scope tag used by the SQL templates
    pub fn scope_tag(&self) -> &'static str {
        match self {
            ResourceVariant::UnscopedResource => "unscoped",
            ResourceVariant::TenantResource => TENANT_SCOPED,
            ResourceVariant::BusinessUnitResource => BUSINESS_UNIT_SCOPED,
        }
    }

    /// Table holding the columns every resource of this variant inherits
    pub fn base_columns_table(&self) -> &'static str {
        match self {
            ResourceVariant::UnscopedResource => "_common_unscoped_resource_columns",
            ResourceVariant::TenantResource => "_common_tenant_resource_columns",
            ResourceVariant::BusinessUnitResource => "_common_business_unit_resource_columns",
        }
    }
}

impl std::fmt::Display for ResourceVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to treat an entity carrying both scope signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopePolicy {
    /// Business-unit scope wins; a warning is logged
    #[default]
    Precedence,
    /// Fail with [`CodegenError::AmbiguousResourceScope`]
    Strict,
}

impl ScopePolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ScopePolicy::Strict
        } else {
            ScopePolicy::Precedence
        }
    }
}

/// Result of classifying one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub resource_type: ResourceVariant,
    pub is_auditable: bool,
    pub is_searchable: bool,
}

/// Scope signals found on an entity
#[derive(Debug, Default)]
struct ScopeSignals {
    business_unit: bool,
    tenant: bool,
}

impl ScopeSignals {
    fn read(entity: &JdlEntity) -> CodegenResult<Self> {
        let mut signals = ScopeSignals {
            business_unit: entity.has_annotation(BUSINESS_UNIT_SCOPED),
            tenant: entity.has_annotation(TENANT_SCOPED),
        };

        for value in entity.annotation_values(RESOURCE_TYPE) {
            let declared = ResourceVariant::parse(value.trim()).ok_or_else(|| {
                CodegenError::UnknownResourceScope {
                    entity: entity.name().to_string(),
                    value: value.to_string(),
                }
            })?;
            match declared {
                ResourceVariant::BusinessUnitResource => signals.business_unit = true,
                ResourceVariant::TenantResource => signals.tenant = true,
                ResourceVariant::UnscopedResource => {}
            }
        }

        Ok(signals)
    }
}

/// Classify an entity into its resource variant and capability flags
///
/// Total over well-formed entities: no scope signal yields
/// [`ResourceVariant::UnscopedResource`]. The only failures are an unknown
/// `@resourceType` value and, under [`ScopePolicy::Strict`], a dual scope signal.
pub fn classify(entity: &JdlEntity, policy: ScopePolicy) -> CodegenResult<Classification> {
    let signals = ScopeSignals::read(entity)?;

    let resource_type = match (signals.business_unit, signals.tenant) {
        (true, true) => match policy {
            ScopePolicy::Strict => {
                return Err(CodegenError::AmbiguousResourceScope {
                    entity: entity.name().to_string(),
                });
            }
            ScopePolicy::Precedence => {
                warn!(
                    entity = %entity.name(),
                    "entity is both tenant and business-unit scoped, using BusinessUnitResource"
                );
                ResourceVariant::BusinessUnitResource
            }
        },
        (true, false) => ResourceVariant::BusinessUnitResource,
        (false, true) => ResourceVariant::TenantResource,
        (false, false) => ResourceVariant::UnscopedResource,
    };

    Ok(Classification {
        resource_type,
        is_auditable: entity.has_annotation(AUDITABLE),
        is_searchable: entity.has_annotation(SEARCHABLE),
    })
}

#[cfg(test)]
#[path = "resource/resource_tests.rs"]
mod resource_tests;
