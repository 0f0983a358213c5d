//! ICGEM parser for gravity potential model files
//!
//! This module reads ICGEM-format files in two independent passes over the
//! data section, both starting at the offset found by the header parser.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`reader`] - [`IcgemReader`], a reader bound to one file
//! - [`header`] - ICGEM header keywords and the data section offset
//! - [`line_reader`] - Length-checked line iteration from a byte offset
//! - [`record`] - Record classification by leading token
//! - [`field_parsers`] - Degree/order and floating-point field extraction
//! - [`inspector`] - First pass: structural bounds and periodic-term periods
//! - [`extractor`] - Second pass: static coefficients into a container
//! - [`stats`] - Pass results and line counters
//!
//! ## Usage
//!
//! ```no_run
//! use icgem_reader::{HarmonicCoeffs, IcgemReader};
//!
//! # fn example() -> icgem_reader::Result<()> {
//! let mut reader = IcgemReader::new("EGM2008.gfc");
//! reader.parse_header()?;
//! let bounds = reader.inspect()?.bounds;
//!
//! let degree = bounds.degree_static_stop.min(120);
//! let mut coeffs = HarmonicCoeffs::new(degree, degree)?;
//! let report = reader.extract(degree, degree, &mut coeffs)?;
//!
//! println!("Read {} of {} coefficients", report.coeffs_read, report.coeffs_expected);
//! # Ok(())
//! # }
//! ```

pub mod extractor;
pub mod field_parsers;
pub mod header;
pub mod inspector;
pub mod line_reader;
pub mod reader;
pub mod record;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use extractor::{coeffs_nr, extract_coefficients};
pub use header::parse_header;
pub use inspector::inspect_data;
pub use reader::IcgemReader;
pub use record::{Record, RecordKind};
pub use stats::{ExtractionReport, ModelInspection, ScanStats};
