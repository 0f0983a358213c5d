//! Test utilities and fixtures for ICGEM parser testing
//!
//! This module provides helpers that build ICGEM files in temporary locations,
//! used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use super::header::parse_header;
use crate::app::models::ModelHeader;
use crate::config::ReaderConfig;

// Test modules
mod extractor_tests;

/// Header of a small fully normalized model declaring degree 4
pub const TEST_HEADER: &str = "\
This is a test model in ICGEM format
begin_of_head =================================================================
generating_institute  test
product_type          gravity_field
modelname             TESTMODEL
earth_gravity_constant 0.3986004415E+15
radius                0.6378136300E+07
max_degree            4
errors                formal
norm                  fully_normalized
tide_system           tide_free

key     L    M             C                    S           sigma C    sigma S
end_of_head ===================================================================
";

/// Deterministic C(l,m) test value
pub fn c_value(degree: usize, order: usize) -> f64 {
    if degree == 0 {
        1.0
    } else {
        -((degree * 100 + order) as f64) * 1.0e-7
    }
}

/// Deterministic S(l,m) test value, zero at order 0
pub fn s_value(degree: usize, order: usize) -> f64 {
    if order == 0 {
        0.0
    } else {
        ((degree * 100 + order) as f64) * 1.0e-8
    }
}

/// `gfc` line for (degree, order) with the test values
pub fn gfc_line(degree: usize, order: usize) -> String {
    format!(
        "gfc {:4} {:4} {:e} {:e} 1.0E-12 1.0E-12",
        degree,
        order,
        c_value(degree, order),
        s_value(degree, order)
    )
}

/// Complete static data section up to `max_degree`, leaving out `skip`
pub fn static_data(max_degree: usize, skip: &[(usize, usize)]) -> String {
    let mut data = String::new();
    for degree in 0..=max_degree {
        for order in 0..=degree {
            if skip.contains(&(degree, order)) {
                continue;
            }
            data.push_str(&gfc_line(degree, order));
            data.push('\n');
        }
    }
    data
}

/// Time-variable data section with two annual/semi-annual terms at degree 1 and
/// their re-use at degree 2
pub fn time_variable_data() -> String {
    let mut data = static_data(3, &[(1, 0), (1, 1), (2, 0)]);
    data.push_str(
        "\
gfct   1    0  0.0E+00  0.0E+00 0.0E+00 0.0E+00 19500101.0000 20140101.0000
trnd   1    0  1.0E-11  0.0E+00 0.0E+00 0.0E+00
acos   1    0  1.98940208316E-10  0.00000000000E+00 2.4920E-11 0.0000E+00 19500101.0000 19930115.0546 1.0
asin   1    0  1.10000000000E-10  0.00000000000E+00 2.4920E-11 0.0000E+00 19500101.0000 19930115.0546 1.0
acos   1    0  3.00000000000E-11  0.00000000000E+00 2.4920E-11 0.0000E+00 19500101.0000 19930115.0546 0.5
gfct   2    0 -4.84165E-04  0.0E+00 0.0E+00 0.0E+00 19500101.0000 20140101.0000
trnd   2    0  1.1E-11  0.0E+00 0.0E+00 0.0E+00
acos   2    0  1.00000000000E-11  0.00000000000E+00 2.4920E-11 0.0000E+00 19500101.0000 19930115.0546 0.5
asin   2    0  2.00000000000E-11  0.00000000000E+00 2.4920E-11 0.0000E+00 19500101.0000 19930115.0546 1.0
gfct   2    1 -2.0E-10  1.4E-09 0.0E+00 0.0E+00 19500101.0000 20140101.0000
",
    );
    data
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to create a temporary file with raw bytes, for content that is not UTF-8
pub fn create_temp_file_bytes(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Temporary ICGEM file made of [`TEST_HEADER`] followed by `data`
pub fn create_icgem_file(data: &str) -> NamedTempFile {
    create_temp_file(&format!("{}{}", TEST_HEADER, data))
}

/// Parsed header of a temporary test file
pub fn test_header(file: &NamedTempFile) -> ModelHeader {
    parse_header(file.path(), &ReaderConfig::default()).unwrap()
}
