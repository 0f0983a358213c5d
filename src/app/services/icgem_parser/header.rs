//! ICGEM header parsing and metadata extraction
//!
//! The header runs from the start of the file to the `end_of_head` line. Lines
//! whose first token is a known keyword set the matching field; everything
//! else (free-text description, `begin_of_head`, unknown keywords) is ignored.

use std::path::Path;
use tracing::debug;

use super::field_parsers::parse_f64;
use super::line_reader::open_at;
use crate::app::models::{ErrorEstimates, ModelHeader, Normalization, TideSystem};
use crate::config::ReaderConfig;
use crate::constants::{DEFAULT_TIDE_SYSTEM, NORM_FULLY_NORMALIZED, header_keys};
use crate::{Error, Result};

/// Header values collected before `end_of_head` is reached
#[derive(Debug, Default)]
struct HeaderBuilder {
    product_type: Option<String>,
    model_name: Option<String>,
    tide_system: Option<String>,
    normalization: Option<String>,
    errors: Option<String>,
    gm: Option<String>,
    radius: Option<String>,
    max_degree: Option<String>,
}

impl HeaderBuilder {
    fn parse_line(&mut self, line: &str) {
        let mut parts = line.split_whitespace();
        let Some(key) = parts.next() else {
            return;
        };
        let value = parts.next().map(str::to_string);

        let slot = match key {
            header_keys::PRODUCT_TYPE => &mut self.product_type,
            header_keys::MODEL_NAME => &mut self.model_name,
            header_keys::TIDE_SYSTEM => &mut self.tide_system,
            header_keys::NORM => &mut self.normalization,
            header_keys::ERRORS => &mut self.errors,
            header_keys::GM => &mut self.gm,
            header_keys::RADIUS => &mut self.radius,
            header_keys::MAX_DEGREE => &mut self.max_degree,
            _ => return,
        };
        *slot = value;
    }

    fn build(self, file: &str, data_offset: u64) -> Result<ModelHeader> {
        let gm = required_f64(file, header_keys::GM, self.gm)?;
        let radius = required_f64(file, header_keys::RADIUS, self.radius)?;

        let max_degree_str = required(file, header_keys::MAX_DEGREE, self.max_degree)?;
        let max_degree = max_degree_str.parse::<usize>().map_err(|e| {
            Error::header_format(
                file,
                format!("invalid {} '{}': {}", header_keys::MAX_DEGREE, max_degree_str, e),
            )
        })?;

        Ok(ModelHeader {
            product_type: self.product_type.unwrap_or_default(),
            model_name: self.model_name.unwrap_or_default(),
            tide_system: TideSystem::from(
                self.tide_system.as_deref().unwrap_or(DEFAULT_TIDE_SYSTEM),
            ),
            normalization: Normalization::from(
                self.normalization.as_deref().unwrap_or(NORM_FULLY_NORMALIZED),
            ),
            errors: self
                .errors
                .as_deref()
                .map(ErrorEstimates::from)
                .unwrap_or(ErrorEstimates::No),
            gm,
            radius,
            max_degree,
            data_offset,
        })
    }
}

fn required(file: &str, key: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::header_format(file, format!("missing or empty keyword '{}'", key)))
}

fn required_f64(file: &str, key: &str, value: Option<String>) -> Result<f64> {
    let raw = required(file, key, value)?;
    parse_f64(&raw)
        .ok_or_else(|| Error::header_format(file, format!("invalid {} value '{}'", key, raw)))
}

/// Parse the header of an ICGEM file
///
/// The returned header's `data_offset` is the byte position just after the
/// `end_of_head` line.
pub fn parse_header(path: &Path, config: &ReaderConfig) -> Result<ModelHeader> {
    let file = path.display().to_string();
    let mut lines = open_at(path, 0, config)?;
    let mut builder = HeaderBuilder::default();

    while let Some(line) = lines.next() {
        let line = line?;
        if line.text.split_whitespace().next() == Some(header_keys::END_OF_HEAD) {
            let header = builder.build(&file, lines.position())?;
            debug!(
                "Parsed header for {}: model={}, max_degree={}, data_offset={}",
                file, header.model_name, header.max_degree, header.data_offset
            );
            return Ok(header);
        }
        builder.parse_line(&line.text);
    }

    Err(Error::header_format(
        file,
        format!("no '{}' marker found", header_keys::END_OF_HEAD),
    ))
}
