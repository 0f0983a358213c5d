//! ICGEM Reader Library
//!
//! A Rust library for reading gravity potential models distributed in the
//! International Centre for Global Earth Models (ICGEM) text format.
//!
//! This library provides tools for:
//! - Parsing the ICGEM header (model constants, normalization, data offset)
//! - Inspecting the data section for static/time-variable degree and order bounds
//! - Collecting the periods of the time-variable periodic terms
//! - Extracting static (C,S) spherical-harmonic coefficients up to a requested degree/order
//! - Precise, fail-fast diagnostics for malformed or inconsistent records

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod gravity_loader;
        pub mod icgem_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::coefficients::{HarmonicCoefficients, HarmonicCoeffs};
pub use app::models::{ModelHeader, PeriodRegistry, StructuralBounds};
pub use app::services::gravity_loader::{GravityModel, load_gravity_model, load_static_model};
pub use app::services::icgem_parser::{
    ExtractionReport, IcgemReader, ModelInspection, RecordKind, coeffs_nr,
};
pub use config::ReaderConfig;

/// Result type alias for the ICGEM reader
pub type Result<T> = std::result::Result<T, Error>;

/// Role of a numeric field inside a coefficient record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Spherical-harmonic degree
    Degree,
    /// Spherical-harmonic order
    Order,
    /// Cosine coefficient
    Clm,
    /// Sine coefficient
    Slm,
    /// Numeric fields of a periodic record; `failed` counts the unconvertible ones
    PeriodicTerms { failed: usize },
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Degree => write!(f, "degree"),
            FieldKind::Order => write!(f, "order"),
            FieldKind::Clm => write!(f, "Clm"),
            FieldKind::Slm => write!(f, "Slm"),
            FieldKind::PeriodicTerms { failed } => {
                write!(f, "periodic terms ({} field(s) failed)", failed)
            }
        }
    }
}

fn describe_context(expected: &Option<(usize, usize)>) -> String {
    match expected {
        Some((degree, order)) => format!("{}/{}", degree, order),
        None => "(none read yet)".to_string(),
    }
}

/// Error types for ICGEM reading operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A pass was started before its inputs were resolved
    #[error("Precondition failed for '{file}': {message}")]
    Precondition { file: String, message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// ICGEM header is missing or malformed
    #[error("ICGEM header error in file '{file}': {message}")]
    HeaderFormat { file: String, message: String },

    /// A line exceeds the configured maximum length
    #[error("Line {line_number} of '{file}' exceeds the maximum line length of {limit} bytes")]
    LineTooLong {
        file: String,
        line_number: usize,
        limit: usize,
    },

    /// A numeric field could not be converted at its expected position
    #[error("Failed parsing {kind} in line {line_number}: [{line}]; icgem file '{file}'")]
    FieldParse {
        file: String,
        line_number: usize,
        kind: FieldKind,
        line: String,
    },

    /// A trend/periodic record does not follow a matching time-variable base record
    #[error(
        "Record degree/order {found_degree}/{found_order} does not match current TVG coefficients {}; line {line_number}: [{line}]; icgem file '{file}'",
        describe_context(.expected)
    )]
    ContextMismatch {
        file: String,
        line_number: usize,
        found_degree: usize,
        found_order: usize,
        expected: Option<(usize, usize)>,
        line: String,
    },

    /// A periodic record references a period never registered at degree 1, order 0
    #[error("Unknown harmonic period {period:.3}/year in line {line_number}: [{line}]; icgem file '{file}'")]
    UnknownPeriod {
        file: String,
        line_number: usize,
        period: f64,
        line: String,
    },

    /// Requested degree/order is outside what the model or target supports
    #[error("Invalid degree/order range: {message}")]
    InvalidRange { message: String },

    /// End of data reached before all requested coefficients were read
    #[error("EOF reached before reading all Cnm/Snm coefficients: read/expected {read}/{expected}; icgem file '{file}'")]
    TruncatedData {
        file: String,
        read: usize,
        expected: usize,
    },

    /// Record content violates a structural rule of the format
    #[error("Data integrity violation in line {line_number} of '{file}': {message}")]
    DataIntegrity {
        file: String,
        line_number: usize,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a precondition error
    pub fn precondition(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Precondition {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a header format error
    pub fn header_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HeaderFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a field parse error
    pub fn field_parse(
        file: impl Into<String>,
        line_number: usize,
        kind: FieldKind,
        line: impl Into<String>,
    ) -> Self {
        Self::FieldParse {
            file: file.into(),
            line_number,
            kind,
            line: line.into(),
        }
    }

    /// Create an invalid range error
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange {
            message: message.into(),
        }
    }

    /// Create a data integrity error
    pub fn data_integrity(
        file: impl Into<String>,
        line_number: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::DataIntegrity {
            file: file.into(),
            line_number,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Field role for field parse errors, `None` for every other variant
    pub fn field_kind(&self) -> Option<FieldKind> {
        match self {
            Self::FieldParse { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
