//! Tests for the extraction pass and the coefficient count

use super::*;
use crate::app::models::coefficients::{HarmonicCoefficients, HarmonicCoeffs};
use crate::app::services::icgem_parser::{coeffs_nr, extract_coefficients};
use crate::{Error, ExtractionReport, FieldKind};

fn extract(
    file: &NamedTempFile,
    degree: usize,
    order: usize,
    target: &mut HarmonicCoeffs,
    config: &ReaderConfig,
) -> crate::Result<ExtractionReport> {
    let header = test_header(file);
    extract_coefficients(file.path(), &header, degree, order, target, config)
}

#[test]
fn test_extract_full_model() {
    let file = create_icgem_file(&static_data(4, &[]));
    let mut coeffs = HarmonicCoeffs::new(4, 4).unwrap();

    let report = extract(&file, 4, 4, &mut coeffs, &ReaderConfig::default()).unwrap();

    assert_eq!(report.coeffs_read, 15);
    assert_eq!(report.coeffs_expected, 15);
    assert!(report.is_complete());
    assert!(!report.implicit_degree_one);

    for (degree, order, c, s) in coeffs.iter() {
        assert_eq!(c, c_value(degree, order), "C({},{})", degree, order);
        assert_eq!(s, s_value(degree, order), "S({},{})", degree, order);
    }
}

#[test]
fn test_implicit_degree_one() {
    let file = create_icgem_file(&static_data(4, &[(1, 0), (1, 1)]));
    let mut coeffs = HarmonicCoeffs::new(4, 4).unwrap();
    coeffs.set_c(1, 0, 9.0);
    coeffs.set_c(1, 1, 9.0);
    coeffs.set_s(1, 1, 9.0);

    let report = extract(&file, 4, 4, &mut coeffs, &ReaderConfig::default()).unwrap();

    assert_eq!(report.coeffs_read, 13);
    assert_eq!(report.coeffs_expected, 15);
    assert!(report.implicit_degree_one);
    assert!(!report.is_complete());

    assert_eq!(coeffs.c(1, 0), 0.0);
    assert_eq!(coeffs.c(1, 1), 0.0);
    assert_eq!(coeffs.s(1, 1), 0.0);
    assert_eq!(coeffs.c(2, 0), c_value(2, 0));
    assert_eq!(coeffs.s(4, 4), s_value(4, 4));
}

#[test]
fn test_implicit_degree_one_disabled() {
    let file = create_icgem_file(&static_data(4, &[(1, 0), (1, 1)]));
    let mut coeffs = HarmonicCoeffs::new(4, 4).unwrap();

    let result = extract(&file, 4, 4, &mut coeffs, &ReaderConfig::default().strict());

    assert!(matches!(
        result,
        Err(Error::TruncatedData {
            read: 13,
            expected: 15,
            ..
        })
    ));
}

#[test]
fn test_other_missing_coefficient_fails() {
    let file = create_icgem_file(&static_data(4, &[(2, 1)]));
    let mut coeffs = HarmonicCoeffs::new(4, 4).unwrap();

    let result = extract(&file, 4, 4, &mut coeffs, &ReaderConfig::default());

    assert!(matches!(
        result,
        Err(Error::TruncatedData {
            read: 14,
            expected: 15,
            ..
        })
    ));
}

#[test]
fn test_degree_one_and_another_missing_fails() {
    let file = create_icgem_file(&static_data(4, &[(1, 0), (1, 1), (3, 3)]));
    let mut coeffs = HarmonicCoeffs::new(4, 4).unwrap();

    let result = extract(&file, 4, 4, &mut coeffs, &ReaderConfig::default());
    assert!(matches!(result, Err(Error::TruncatedData { read: 12, .. })));
}

#[test]
fn test_partial_range_stops_early() {
    let file = create_icgem_file(&static_data(4, &[]));
    let mut coeffs = HarmonicCoeffs::new(2, 1).unwrap();

    let report = extract(&file, 2, 1, &mut coeffs, &ReaderConfig::default()).unwrap();

    assert_eq!(report.coeffs_expected, 5);
    assert_eq!(report.coeffs_read, 5);
    assert_eq!(report.lines_read, 5);
    assert_eq!(coeffs.c(2, 1), c_value(2, 1));
    assert_eq!(coeffs.s(2, 1), s_value(2, 1));
}

#[test]
fn test_range_with_only_c10_missing() {
    // (1,1) lies outside order 0, so the omission rule does not apply
    let file = create_icgem_file(&static_data(4, &[(1, 0), (1, 1)]));
    let mut coeffs = HarmonicCoeffs::new(1, 0).unwrap();

    let result = extract(&file, 1, 0, &mut coeffs, &ReaderConfig::default());
    assert!(matches!(
        result,
        Err(Error::TruncatedData {
            read: 1,
            expected: 2,
            ..
        })
    ));
}

#[test]
fn test_time_variable_lines_are_ignored() {
    let file = create_icgem_file(&time_variable_data());
    let mut coeffs = HarmonicCoeffs::new(3, 3).unwrap();

    // (2,0) only appears as a gfct record
    let result = extract(&file, 3, 3, &mut coeffs, &ReaderConfig::default());
    assert!(matches!(
        result,
        Err(Error::TruncatedData {
            read: 7,
            expected: 10,
            ..
        })
    ));
}

#[test]
fn test_nonzero_sine_at_order_zero() {
    let file = create_icgem_file("gfc    0    0  1.0  0.5\n");
    let mut coeffs = HarmonicCoeffs::new(0, 0).unwrap();

    let result = extract(&file, 0, 0, &mut coeffs, &ReaderConfig::default());
    match result {
        Err(Error::DataIntegrity {
            line_number,
            message,
            ..
        }) => {
            assert_eq!(line_number, 1);
            assert!(message.contains("S(0,0)"));
        }
        other => panic!("expected DataIntegrity, got {:?}", other),
    }
}

#[test]
fn test_order_above_degree_in_file() {
    let data = format!("{}gfc    1    2  1.0  0.5\n", static_data(0, &[]));
    let file = create_icgem_file(&data);
    let mut coeffs = HarmonicCoeffs::new(2, 2).unwrap();

    let result = extract(&file, 2, 2, &mut coeffs, &ReaderConfig::default());
    assert!(matches!(result, Err(Error::DataIntegrity { line_number: 2, .. })));
}

#[test]
fn test_fortran_exponent_is_rejected() {
    let file = create_icgem_file("gfc    0    0  1.0D+00  0.0\n");
    let mut coeffs = HarmonicCoeffs::new(0, 0).unwrap();

    let err = extract(&file, 0, 0, &mut coeffs, &ReaderConfig::default()).unwrap_err();
    assert_eq!(err.field_kind(), Some(FieldKind::Clm));
}

#[test]
fn test_missing_sine_value() {
    let file = create_icgem_file("gfc    0    0  1.0\n");
    let mut coeffs = HarmonicCoeffs::new(0, 0).unwrap();

    let err = extract(&file, 0, 0, &mut coeffs, &ReaderConfig::default()).unwrap_err();
    assert_eq!(err.field_kind(), Some(FieldKind::Slm));
}

#[test]
fn test_invalid_ranges() {
    let file = create_icgem_file(&static_data(4, &[]));
    let config = ReaderConfig::default();

    let mut large = HarmonicCoeffs::new(6, 6).unwrap();
    assert!(matches!(
        extract(&file, 5, 5, &mut large, &config),
        Err(Error::InvalidRange { .. })
    ));
    assert!(matches!(
        extract(&file, 2, 3, &mut large, &config),
        Err(Error::InvalidRange { .. })
    ));

    let mut small = HarmonicCoeffs::new(2, 2).unwrap();
    assert!(matches!(
        extract(&file, 3, 3, &mut small, &config),
        Err(Error::InvalidRange { .. })
    ));
}

#[test]
fn test_invalid_config_is_rejected() {
    let file = create_icgem_file(&static_data(2, &[]));
    let mut coeffs = HarmonicCoeffs::new(2, 2).unwrap();
    let config = ReaderConfig::default().with_max_line_length(0);

    assert!(matches!(
        extract(&file, 2, 2, &mut coeffs, &config),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_header_without_offset() {
    let file = create_icgem_file(&static_data(2, &[]));
    let mut header = test_header(&file);
    header.data_offset = 0;
    let mut coeffs = HarmonicCoeffs::new(2, 2).unwrap();

    let result = extract_coefficients(file.path(), &header, 2, 2, &mut coeffs, &ReaderConfig::default());
    assert!(matches!(result, Err(Error::Precondition { .. })));
}

#[test]
fn test_coeffs_nr_values() {
    assert_eq!(coeffs_nr(0, 0), 1);
    assert_eq!(coeffs_nr(2, 2), 6);
    assert_eq!(coeffs_nr(3, 2), 9);
    assert_eq!(coeffs_nr(2, 1), 5);
    assert_eq!(coeffs_nr(4, 0), 5);
    // order is clamped to degree
    assert_eq!(coeffs_nr(2, 10), coeffs_nr(2, 2));
}

#[test]
fn test_coeffs_nr_matches_pair_count() {
    for degree in 0..20 {
        assert_eq!(coeffs_nr(degree, degree), (degree + 1) * (degree + 2) / 2);
        for order in 0..=degree {
            let pairs: usize = (0..=degree).map(|l| l.min(order) + 1).sum();
            assert_eq!(coeffs_nr(degree, order), pairs, "degree {} order {}", degree, order);
        }
    }
}
