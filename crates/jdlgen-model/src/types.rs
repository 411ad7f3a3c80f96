//! JDL to Kotlin type mapping table.
//!
//! The table is data, not logic: supporting a new JDL type means adding a row
//! here (or a `[types.<Name>]` section in `jdlgen.toml`), never touching the
//! classifier or the model builder.
//!
//! # Built-in Rows
//!
//! | JDL | Kotlin | import | SQL |
//! |-----|--------|--------|-----|
//! | `String`, `TextBlob` | `String` | – | `VARCHAR` / `TEXT` |
//! | `UUID` | `UUID` | `java.util.UUID` | `UUID` |
//! | `Integer` / `Long` | `Int` / `Long` | – | `INTEGER` / `BIGINT` |
//! | `BigInteger` | `BigInteger` | `java.math.BigInteger` | `NUMERIC` |
//! | `Float` / `Double` | `Float` / `Double` | – | `REAL` / `DOUBLE PRECISION` |
//! | `BigDecimal` | `BigDecimal` | `java.math.BigDecimal` | `NUMERIC(19, 4)` |
//! | `Boolean` | `Boolean` | – | `BOOLEAN` |
//! | `Instant` | `LocalDateTime` | `java.time.LocalDateTime` | `TIMESTAMP WITH TIME ZONE` |
//! | `ZonedDateTime` | `ZonedDateTime` | `java.time.ZonedDateTime` | `TIMESTAMP WITH TIME ZONE` |
//! | `LocalDate` | `LocalDate` | `java.time.LocalDate` | `DATE` |
//! | `Duration` | `Duration` | `java.time.Duration` | `INTERVAL` |
//! | `Blob`, `AnyBlob`, `ImageBlob`, `byte[]` | `ByteArray` | – | `BYTEA` |

use jdlgen_core::{CodegenError, CodegenResult, TypeOverride};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// SQL type used for override rows that do not name one
const DEFAULT_DB_TYPE: &str = "VARCHAR";

/// Column domain used for override rows that do not name one
const DEFAULT_DB_DOMAIN: &str = "t_unknown";

/// Resolution of one JDL type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMapping {
    /// Kotlin type name, e.g. `BigDecimal`
    pub target_type: String,

    /// Fully qualified import the type needs; `None` for built-ins
    pub import: Option<String>,

    /// SQL column type
    pub db_data_type: String,

    /// Database domain the column is declared with
    pub db_domain: String,

    /// Example value for API documentation
    pub example: String,
}

/// Lookup from JDL type name to [`TypeMapping`]
///
/// Built once before a run; the pipeline only holds shared references to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMappingTable {
    rows: BTreeMap<String, TypeMapping>,
}

struct Row {
    jdl: &'static str,
    target: &'static str,
    import: Option<&'static str>,
    db_type: &'static str,
    db_domain: &'static str,
    example: &'static str,
}

const TIMESTAMP_EXAMPLE: &str = "2024-08-25T14:15:22";

#[rustfmt::skip]
const KOTLIN_ROWS: &[Row] = &[
    Row { jdl: "String", target: "String", import: None, db_type: "VARCHAR", db_domain: "t_text", example: "Example String" },
    Row { jdl: "TextBlob", target: "String", import: None, db_type: "TEXT", db_domain: "t_text", example: "Example String" },
    Row { jdl: "UUID", target: "UUID", import: Some("java.util.UUID"), db_type: "UUID", db_domain: "t_uuid", example: "123e4567-e89b-12d3-a456-426614174000" },
    Row { jdl: "Integer", target: "Int", import: None, db_type: "INTEGER", db_domain: "t_identity", example: "1001" },
    Row { jdl: "Long", target: "Long", import: None, db_type: "BIGINT", db_domain: "t_identity", example: "1001" },
    Row { jdl: "BigInteger", target: "BigInteger", import: Some("java.math.BigInteger"), db_type: "NUMERIC", db_domain: "t_identity", example: "1001" },
    Row { jdl: "Float", target: "Float", import: None, db_type: "REAL", db_domain: "t_float", example: "123.45" },
    Row { jdl: "Double", target: "Double", import: None, db_type: "DOUBLE PRECISION", db_domain: "t_float", example: "123.45" },
    Row { jdl: "BigDecimal", target: "BigDecimal", import: Some("java.math.BigDecimal"), db_type: "NUMERIC(19, 4)", db_domain: "t_money", example: "123.45" },
    Row { jdl: "Boolean", target: "Boolean", import: None, db_type: "BOOLEAN", db_domain: "t_boolean", example: "true" },
    Row { jdl: "Instant", target: "LocalDateTime", import: Some("java.time.LocalDateTime"), db_type: "TIMESTAMP WITH TIME ZONE", db_domain: "t_timestamp", example: TIMESTAMP_EXAMPLE },
    Row { jdl: "ZonedDateTime", target: "ZonedDateTime", import: Some("java.time.ZonedDateTime"), db_type: "TIMESTAMP WITH TIME ZONE", db_domain: "t_timestampz", example: TIMESTAMP_EXAMPLE },
    Row { jdl: "LocalDate", target: "LocalDate", import: Some("java.time.LocalDate"), db_type: "DATE", db_domain: "t_datetime", example: "2024-08-25" },
    Row { jdl: "Duration", target: "Duration", import: Some("java.time.Duration"), db_type: "INTERVAL", db_domain: "t_duration", example: "PT15M" },
    Row { jdl: "Blob", target: "ByteArray", import: None, db_type: "BYTEA", db_domain: "t_binary", example: "<binary>" },
    Row { jdl: "AnyBlob", target: "ByteArray", import: None, db_type: "BYTEA", db_domain: "t_binary", example: "<binary>" },
    Row { jdl: "ImageBlob", target: "ByteArray", import: None, db_type: "BYTEA", db_domain: "t_binary", example: "<binary>" },
    Row { jdl: "byte[]", target: "ByteArray", import: None, db_type: "BYTEA", db_domain: "t_binary", example: "<binary>" },
];

impl TypeMapping {
    fn from_row(row: &Row) -> Self {
        Self {
            target_type: row.target.to_string(),
            import: row.import.map(str::to_string),
            db_data_type: row.db_type.to_string(),
            db_domain: row.db_domain.to_string(),
            example: row.example.to_string(),
        }
    }

    fn from_override(row: &TypeOverride) -> Self {
        Self {
            target_type: row.target.clone(),
            import: row.import.clone().filter(|i| !i.trim().is_empty()),
            db_data_type: row
                .db_type
                .clone()
                .unwrap_or_else(|| DEFAULT_DB_TYPE.to_string()),
            db_domain: row
                .db_domain
                .clone()
                .unwrap_or_else(|| DEFAULT_DB_DOMAIN.to_string()),
            example: row.example.clone().unwrap_or_else(|| row.target.clone()),
        }
    }
}

impl TypeMapping {
    /// True when the target is neither a Kotlin built-in nor given an import
    ///
    /// Such a row renders a type the generated sources cannot resolve.
    pub fn is_missing_import(&self) -> bool {
        self.import.is_none()
            && !KOTLIN_ROWS
                .iter()
                .any(|row| row.import.is_none() && row.target == self.target_type)
    }
}

impl TypeMappingTable {
    /// An empty table; every lookup misses
    pub fn empty() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// The built-in Kotlin table
    pub fn kotlin() -> Self {
        Self {
            rows: KOTLIN_ROWS
                .iter()
                .map(|row| (row.jdl.to_string(), TypeMapping::from_row(row)))
                .collect(),
        }
    }

    /// Add or replace rows from configuration
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, TypeOverride>) -> Self {
        for (jdl_type, row) in overrides {
            let mapping = TypeMapping::from_override(row);
            if mapping.is_missing_import() {
                warn!(
                    jdl_type = %jdl_type,
                    target = %mapping.target_type,
                    "type override target is not a Kotlin built-in and has no import"
                );
            }
            self.rows.insert(jdl_type.clone(), mapping);
        }
        self
    }

    /// Add or replace a single row
    pub fn with_mapping(mut self, jdl_type: impl Into<String>, mapping: TypeMapping) -> Self {
        self.rows.insert(jdl_type.into(), mapping);
        self
    }

    pub fn lookup(&self, jdl_type: &str) -> Option<&TypeMapping> {
        self.rows.get(jdl_type)
    }

    pub fn contains(&self, jdl_type: &str) -> bool {
        self.rows.contains_key(jdl_type)
    }

    /// Look up the type of `entity.field`, failing loudly on a miss
    pub fn resolve(&self, entity: &str, field: &str, jdl_type: &str) -> CodegenResult<&TypeMapping> {
        self.lookup(jdl_type)
            .ok_or_else(|| CodegenError::UnmappedFieldType {
                entity: entity.to_string(),
                field: field.to_string(),
                field_type: jdl_type.to_string(),
            })
    }

    /// Rows sorted by JDL type name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeMapping)> {
        self.rows.iter().map(|(name, mapping)| (name.as_str(), mapping))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for TypeMappingTable {
    fn default() -> Self {
        Self::kotlin()
    }
}
