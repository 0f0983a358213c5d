//! Data models for ICGEM gravity models
//!
//! This module contains the core data structures describing an ICGEM gravity
//! potential model: the header constants, the structural bounds discovered in
//! the data section and the registry of periodic-term periods.

pub mod coefficients;

use crate::constants::{DEFAULT_TIDE_SYSTEM, NORM_FULLY_NORMALIZED};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Header Tags
// =============================================================================

/// Normalization of the spherical-harmonic coefficients (`norm` keyword)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Normalization {
    /// `fully_normalized`, the ICGEM default
    FullyNormalized,
    /// `unnormalized`
    Unnormalized,
    /// Any other tag, kept verbatim
    Other(String),
}

impl From<&str> for Normalization {
    fn from(tag: &str) -> Self {
        match tag {
            NORM_FULLY_NORMALIZED => Self::FullyNormalized,
            "unnormalized" => Self::Unnormalized,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullyNormalized => write!(f, "{}", NORM_FULLY_NORMALIZED),
            Self::Unnormalized => write!(f, "unnormalized"),
            Self::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Permanent tide treatment of the model (`tide_system` keyword)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TideSystem {
    ZeroTide,
    TideFree,
    MeanTide,
    /// Not declared in the header
    Unknown,
    /// Any other tag, kept verbatim
    Other(String),
}

impl From<&str> for TideSystem {
    fn from(tag: &str) -> Self {
        match tag {
            "zero_tide" => Self::ZeroTide,
            "tide_free" => Self::TideFree,
            "mean_tide" => Self::MeanTide,
            DEFAULT_TIDE_SYSTEM => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TideSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTide => write!(f, "zero_tide"),
            Self::TideFree => write!(f, "tide_free"),
            Self::MeanTide => write!(f, "mean_tide"),
            Self::Unknown => write!(f, "{}", DEFAULT_TIDE_SYSTEM),
            Self::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Kind of coefficient uncertainties carried by the file (`errors` keyword)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorEstimates {
    No,
    Calibrated,
    Formal,
    CalibratedAndFormal,
    /// Any other tag, kept verbatim
    Other(String),
}

impl From<&str> for ErrorEstimates {
    fn from(tag: &str) -> Self {
        match tag {
            "no" => Self::No,
            "calibrated" => Self::Calibrated,
            "formal" => Self::Formal,
            "calibrated_and_formal" => Self::CalibratedAndFormal,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ErrorEstimates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::No => write!(f, "no"),
            Self::Calibrated => write!(f, "calibrated"),
            Self::Formal => write!(f, "formal"),
            Self::CalibratedAndFormal => write!(f, "calibrated_and_formal"),
            Self::Other(tag) => write!(f, "{}", tag),
        }
    }
}

macro_rules! string_conversions {
    ($($tag:ty),*) => {
        $(
            impl From<String> for $tag {
                fn from(tag: String) -> Self {
                    Self::from(tag.as_str())
                }
            }

            impl From<$tag> for String {
                fn from(tag: $tag) -> Self {
                    tag.to_string()
                }
            }
        )*
    };
}

string_conversions!(Normalization, TideSystem, ErrorEstimates);

// =============================================================================
// Model Header
// =============================================================================

/// Header information of an ICGEM file
///
/// Immutable once parsed. `data_offset` is the byte position of the first
/// line after `end_of_head`, where the coefficient records begin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelHeader {
    /// Product type (e.g. "gravity_field")
    pub product_type: String,

    /// Free-text model name
    pub model_name: String,

    /// Tide system of the coefficients
    pub tide_system: TideSystem,

    /// Coefficient normalization
    pub normalization: Normalization,

    /// Kind of uncertainties given with the coefficients
    pub errors: ErrorEstimates,

    /// Gravitational constant times Earth mass, m^3/s^2
    pub gm: f64,

    /// Reference radius, m
    pub radius: f64,

    /// Maximum degree declared by the header
    pub max_degree: usize,

    /// Byte offset of the data section
    pub data_offset: u64,
}

impl ModelHeader {
    /// Check if the coefficients are fully normalized
    pub fn is_normalized(&self) -> bool {
        self.normalization == Normalization::FullyNormalized
    }

    /// Check if the data section position has been resolved
    pub fn has_data_offset(&self) -> bool {
        self.data_offset > 0
    }
}

// =============================================================================
// Structural Bounds
// =============================================================================

/// Degree/order ranges found in the data section
///
/// "start" fields hold the first non-zero value observed, "stop" fields the
/// maximum. All fields of a part stay zero when no record of that part exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralBounds {
    pub degree_static_start: usize,
    pub degree_static_stop: usize,
    pub order_static_start: usize,
    pub order_static_stop: usize,
    pub degree_tv_start: usize,
    pub degree_tv_stop: usize,
    pub order_tv_start: usize,
    pub order_tv_stop: usize,
}

impl StructuralBounds {
    /// Account for a static (`gfc`) record
    pub fn record_static(&mut self, degree: usize, order: usize) {
        update_range(&mut self.degree_static_start, &mut self.degree_static_stop, degree);
        update_range(&mut self.order_static_start, &mut self.order_static_stop, order);
    }

    /// Account for a time-variable base (`gfct`) record
    pub fn record_time_variable(&mut self, degree: usize, order: usize) {
        update_range(&mut self.degree_tv_start, &mut self.degree_tv_stop, degree);
        update_range(&mut self.order_tv_start, &mut self.order_tv_stop, order);
    }

    /// Check if the model has a time-variable part
    pub fn has_time_variable(&self) -> bool {
        self.degree_tv_stop > 0
    }

    /// Maximum degree over both parts
    pub fn max_degree(&self) -> usize {
        self.degree_static_stop.max(self.degree_tv_stop)
    }

    /// Maximum order over both parts
    pub fn max_order(&self) -> usize {
        self.order_static_stop.max(self.order_tv_stop)
    }
}

fn update_range(start: &mut usize, stop: &mut usize, value: usize) {
    if *start == 0 && value != 0 {
        *start = value;
    }
    if value > *stop {
        *stop = value;
    }
}

// =============================================================================
// Periodic-Term Registry
// =============================================================================

/// Ordered set of distinct periodic-term periods, in years
///
/// Periods are registered by the degree 1, order 0 periodic records in order of
/// first sighting; deduplication uses exact equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodRegistry {
    periods: Vec<f64>,
}

impl PeriodRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a period; returns `false` when it was already present
    pub fn register(&mut self, period: f64) -> bool {
        if self.contains(period) {
            return false;
        }
        self.periods.push(period);
        true
    }

    /// Check if a period has been registered
    pub fn contains(&self, period: f64) -> bool {
        self.periods.iter().any(|p| *p == period)
    }

    /// Position of a period in registration order
    pub fn index_of(&self, period: f64) -> Option<usize> {
        self.periods.iter().position(|p| *p == period)
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Periods in registration order
    pub fn as_slice(&self) -> &[f64] {
        &self.periods
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.periods.iter()
    }
}
