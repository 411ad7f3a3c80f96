//! Error types for the generation pipeline
//!
//! Every error is terminal for a run: stages propagate them unmodified to the
//! top of the pipeline and no partial output is produced.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for pipeline operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// The parsed JDL source declares no entities
    #[error("no entities found in JDL source")]
    NoEntitiesFound,

    /// The parsed JDL source declares no applications
    #[error("no applications found in JDL source")]
    NoApplicationsFound,

    /// A field's declared type has no row in the type mapping table
    #[error("unmapped field type: {entity}.{field} is declared as '{field_type}'")]
    UnmappedFieldType {
        entity: String,
        field: String,
        field_type: String,
    },

    /// An entity carries both tenant and business-unit scope signals under strict scoping
    #[error("ambiguous resource scope: {entity} is marked both tenant and business-unit scoped")]
    AmbiguousResourceScope { entity: String },

    /// An entity's resourceType annotation names no known variant
    #[error("unknown resource scope on {entity}: '{value}'")]
    UnknownResourceScope { entity: String, value: String },

    /// A raw parser record lacks an attribute the adapter requires
    #[error("malformed {kind} record '{name}': {reason}")]
    MalformedRecord {
        kind: String,
        name: String,
        reason: String,
    },

    /// The same entity or application is declared twice across the input files
    #[error("duplicate {kind} declaration: {name}")]
    DuplicateDeclaration { kind: String, name: String },

    /// A module claims an entity the JDL source never declares
    #[error("module {module} references undeclared entity {entity}")]
    UnknownEntityReference { module: String, entity: String },

    /// A relationship points at an entity the JDL source never declares
    #[error("relationship {entity}.{relationship} targets undeclared entity {target}")]
    UnknownRelationshipTarget {
        entity: String,
        relationship: String,
        target: String,
    },

    /// The parser could not read a JDL document
    #[error("failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    /// File system error
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl CodegenError {
    /// Returns a stable error code, used as the process exit status
    pub fn error_code(&self) -> u8 {
        match self {
            CodegenError::NoEntitiesFound => 10,
            CodegenError::NoApplicationsFound => 11,
            CodegenError::UnmappedFieldType { .. } => 20,
            CodegenError::AmbiguousResourceScope { .. } => 21,
            CodegenError::UnknownResourceScope { .. } => 22,
            CodegenError::MalformedRecord { .. } => 30,
            CodegenError::DuplicateDeclaration { .. } => 31,
            CodegenError::UnknownEntityReference { .. } => 32,
            CodegenError::UnknownRelationshipTarget { .. } => 33,
            CodegenError::ParseError { .. } => 40,
            CodegenError::Io { .. } => 41,
            CodegenError::ConfigError(_) => 50,
        }
    }

    /// Build an I/O error for a path
    pub fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        CodegenError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    /// Build a malformed-record error
    pub fn malformed(
        kind: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CodegenError::MalformedRecord {
            kind: kind.into(),
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::ParseError {
            path: "<json>".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CodegenError {
    fn from(err: toml::de::Error) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
