//! Gravity model loading
//!
//! Runs the complete read sequence for one file: header, inspection, range
//! validation, container allocation and extraction.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::app::models::coefficients::HarmonicCoeffs;
use crate::app::models::ModelHeader;
use crate::app::services::icgem_parser::{ExtractionReport, IcgemReader, ModelInspection};
use crate::config::ReaderConfig;
use crate::{Error, Result};

/// A gravity model read from an ICGEM file
#[derive(Debug, Clone, Serialize)]
pub struct GravityModel {
    pub header: ModelHeader,
    pub inspection: ModelInspection,
    #[serde(skip)]
    pub coefficients: HarmonicCoeffs,
    pub report: ExtractionReport,
}

impl GravityModel {
    /// Degree of the loaded coefficient set
    pub fn degree(&self) -> usize {
        self.report.max_degree
    }

    /// Order of the loaded coefficient set
    pub fn order(&self) -> usize {
        self.report.max_order
    }
}

/// Load static coefficients up to `degree`/`order` from an ICGEM file
///
/// `degree` must not exceed the largest degree found in the data section and
/// `order` must not exceed `degree`. Coefficients are returned as stored in
/// the file (no change of normalization).
pub fn load_gravity_model(
    path: impl AsRef<Path>,
    degree: usize,
    order: usize,
    config: &ReaderConfig,
) -> Result<GravityModel> {
    load_static_model(path, Some(degree), Some(order), config)
}

/// Load static coefficients, taking missing limits from the file
///
/// Without `degree` the largest static degree found by the inspection pass is
/// used; without `order` the order equals the degree. The file is read once
/// for the header, once for inspection and once for extraction.
pub fn load_static_model(
    path: impl AsRef<Path>,
    degree: Option<usize>,
    order: Option<usize>,
    config: &ReaderConfig,
) -> Result<GravityModel> {
    let path = path.as_ref();
    let mut reader = IcgemReader::with_config(path, config.clone());

    let header = reader.parse_header()?.clone();
    let inspection = reader.inspect()?.clone();

    let degree = degree.unwrap_or_else(|| {
        let degree = inspection.bounds.degree_static_stop;
        debug!("No degree requested, using static degree {}", degree);
        degree
    });
    let order = order.unwrap_or(degree);

    if degree > reader.degree() || order > degree {
        return Err(Error::invalid_range(format!(
            "invalid degree/order {}/{} for gravity model {} (max degree {})",
            degree,
            order,
            path.display(),
            reader.degree()
        )));
    }

    let mut coefficients = HarmonicCoeffs::new(degree, order)?;
    let report = reader.extract(degree, order, &mut coefficients)?;

    info!(
        "Loaded {} coefficients of {} up to degree/order {}/{}",
        report.coeffs_expected, header.model_name, degree, order
    );

    Ok(GravityModel {
        header,
        inspection,
        coefficients,
        report,
    })
}
