//! Scan statistics and result structures for ICGEM data passes
//!
//! This module provides the types returned by the inspection and extraction
//! passes, together with counters describing what each pass read.

use serde::{Deserialize, Serialize};

use super::record::RecordKind;
use crate::app::models::{PeriodRegistry, StructuralBounds};

/// Result of the inspection pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInspection {
    /// Degree/order ranges of the static and time-variable parts
    pub bounds: StructuralBounds,

    /// Distinct periodic-term periods (years) in order of first sighting
    pub periods: PeriodRegistry,

    /// Line counters for the pass
    pub stats: ScanStats,
}

/// Line counters collected while scanning the data section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total number of lines read from the data section
    pub lines_read: usize,

    /// `gfc` records
    pub static_records: usize,

    /// `gfct` records
    pub time_variable_records: usize,

    /// `trnd` records
    pub trend_records: usize,

    /// `acos`/`asin` records
    pub periodic_records: usize,

    /// Lines that matched no record type
    pub unknown_lines: usize,
}

impl ScanStats {
    /// Count one line of the given kind
    pub fn count(&mut self, kind: RecordKind) {
        self.lines_read += 1;
        match kind {
            RecordKind::StaticCoeff => self.static_records += 1,
            RecordKind::TimeVarBase => self.time_variable_records += 1,
            RecordKind::Trend => self.trend_records += 1,
            RecordKind::PeriodicCos | RecordKind::PeriodicSin => self.periodic_records += 1,
            RecordKind::Unknown => self.unknown_lines += 1,
        }
    }

    /// Number of lines that were coefficient records
    pub fn records(&self) -> usize {
        self.lines_read - self.unknown_lines
    }
}

/// Outcome of a successful extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Requested maximum degree
    pub max_degree: usize,

    /// Requested maximum order
    pub max_order: usize,

    /// Coefficients read from the file
    pub coeffs_read: usize,

    /// Coefficients the requested range contains
    pub coeffs_expected: usize,

    /// C(1,0) and C(1,1) were absent from the file and set to zero
    pub implicit_degree_one: bool,

    /// Lines read before the pass completed
    pub lines_read: usize,
}

impl ExtractionReport {
    /// Check if every coefficient of the range came from the file
    pub fn is_complete(&self) -> bool {
        self.coeffs_read == self.coeffs_expected
    }
}
