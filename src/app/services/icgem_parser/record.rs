//! Record classification for the ICGEM data section
//!
//! Each data line is identified by its leading token. Classification is an
//! exact, case-sensitive prefix match and never fails: lines that match no
//! known token are [`RecordKind::Unknown`].

use super::field_parsers::FieldCursor;
use crate::constants::record_tokens;

/// Type of a data-section line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `gfc ` static coefficient
    StaticCoeff,
    /// `gfct` time-variable base coefficient
    TimeVarBase,
    /// `trnd` linear trend
    Trend,
    /// `acos` periodic cosine term
    PeriodicCos,
    /// `asin` periodic sine term
    PeriodicSin,
    /// Anything else
    Unknown,
}

impl RecordKind {
    /// Classify a line by its leading token
    pub fn classify(line: &str) -> Self {
        if line.starts_with(record_tokens::STATIC) {
            Self::StaticCoeff
        } else if line.starts_with(record_tokens::TIME_VARIABLE) {
            Self::TimeVarBase
        } else if line.starts_with(record_tokens::TREND) {
            Self::Trend
        } else if line.starts_with(record_tokens::PERIODIC_COS) {
            Self::PeriodicCos
        } else if line.starts_with(record_tokens::PERIODIC_SIN) {
            Self::PeriodicSin
        } else {
            Self::Unknown
        }
    }
}

/// A classified line with a cursor positioned just after its token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    pub kind: RecordKind,
    pub fields: FieldCursor<'a>,
}

impl<'a> Record<'a> {
    /// Classify `line` and position the field cursor after the record token
    pub fn tokenize(line: &'a str) -> Self {
        let kind = RecordKind::classify(line);
        let fields = match kind {
            // all tokens are ASCII and exactly TOKEN_LEN bytes long
            RecordKind::Unknown => line,
            _ => &line[record_tokens::TOKEN_LEN..],
        };
        Self {
            kind,
            fields: FieldCursor::new(fields),
        }
    }
}
