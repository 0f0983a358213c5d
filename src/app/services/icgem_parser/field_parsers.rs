//! Field parsing utilities for ICGEM records
//!
//! Fields are whitespace-separated. A field must convert as a whole: a token
//! such as `12ab` or the FORTRAN-style `-0.48D-03` is a conversion failure,
//! never a partial read.

use crate::FieldKind;

/// Cursor over the numeric fields that follow a record token
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldCursor<'a> {
    rest: &'a str,
}

impl<'a> FieldCursor<'a> {
    /// Create a cursor over `fields`, typically the line after its record token
    pub fn new(fields: &'a str) -> Self {
        Self { rest: fields }
    }

    /// Unconsumed remainder of the line
    pub fn remainder(&self) -> &'a str {
        self.rest
    }

    /// Next whitespace-delimited token, skipping leading whitespace
    pub fn next_token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        let end = trimmed
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(token)
    }

    /// Next field as a non-negative integer
    pub fn next_index(&mut self) -> Option<usize> {
        self.next_token().and_then(|t| t.parse::<usize>().ok())
    }

    /// Next field as a finite floating-point value
    pub fn next_f64(&mut self) -> Option<f64> {
        self.next_token().and_then(parse_f64)
    }

    /// Degree and order fields; the error names the field that failed
    pub fn degree_order(&mut self) -> Result<(usize, usize), FieldKind> {
        let degree = self.next_index().ok_or(FieldKind::Degree)?;
        let order = self.next_index().ok_or(FieldKind::Order)?;
        Ok((degree, order))
    }

    /// Read `N` floats in sequence; missing or unconvertible fields are counted
    /// as failures and left as zero
    pub fn floats<const N: usize>(&mut self) -> ([f64; N], usize) {
        let mut values = [0.0; N];
        let mut failed = 0;
        for value in values.iter_mut() {
            match self.next_f64() {
                Some(v) => *value = v,
                None => failed += 1,
            }
        }
        (values, failed)
    }
}

/// Parse a floating-point field in standard decimal or exponential notation
///
/// Non-finite spellings (`inf`, `NaN`) are rejected, as is the FORTRAN `D`
/// exponent marker.
pub fn parse_f64(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_skip_mixed_whitespace() {
        let mut cursor = FieldCursor::new("  2\t 1   -0.5E-06  ");
        assert_eq!(cursor.next_token(), Some("2"));
        assert_eq!(cursor.next_token(), Some("1"));
        assert_eq!(cursor.next_token(), Some("-0.5E-06"));
        assert_eq!(cursor.next_token(), None);
        assert_eq!(cursor.remainder(), "");
    }

    #[test]
    fn test_degree_order() {
        let mut cursor = FieldCursor::new("   2    1  1.0 2.0");
        assert_eq!(cursor.degree_order(), Ok((2, 1)));
        assert_eq!(cursor.next_f64(), Some(1.0));
    }

    #[test]
    fn test_degree_order_failures() {
        assert_eq!(FieldCursor::new(" X 2 1.0").degree_order(), Err(FieldKind::Degree));
        assert_eq!(FieldCursor::new(" 2 Y 1.0").degree_order(), Err(FieldKind::Order));
        assert_eq!(FieldCursor::new(" 2").degree_order(), Err(FieldKind::Order));
        assert_eq!(FieldCursor::new("").degree_order(), Err(FieldKind::Degree));
        assert_eq!(FieldCursor::new(" -1 0").degree_order(), Err(FieldKind::Degree));
        assert_eq!(FieldCursor::new(" 2x 0").degree_order(), Err(FieldKind::Degree));
    }

    #[test]
    fn test_exponential_notation() {
        assert_eq!(parse_f64("1.234E+05"), Some(123400.0));
        assert_eq!(parse_f64("-4.84165371736E-04"), Some(-4.84165371736e-4));
        assert_eq!(parse_f64("0.0e0"), Some(0.0));
        assert_eq!(parse_f64("+.5"), Some(0.5));
    }

    #[test]
    fn test_fortran_exponent_rejected() {
        assert_eq!(parse_f64("-0.484165371736D-03"), None);
        assert_eq!(parse_f64("1.0d+00"), None);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(parse_f64("inf"), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("1e400"), None);
    }

    #[test]
    fn test_floats_counts_failures() {
        let mut cursor = FieldCursor::new(" 1.0 bad 3.0");
        let (values, failed) = cursor.floats::<4>();
        assert_eq!(values, [1.0, 0.0, 3.0, 0.0]);
        assert_eq!(failed, 2);
    }
}
