//! Extraction pass: static coefficients into a coefficient container
//!
//! Only `gfc` records are read; time-variable, trend and periodic records are
//! passed over. The pass succeeds when every (degree, order) pair of the
//! requested range has been read, with one exception: many files (EGM2008
//! among them) leave out C(1,0) and C(1,1), which are zero in a geocentric
//! frame. When exactly those two are missing they are set to zero.

use std::path::Path;
use tracing::{debug, info};

use super::line_reader::{TextLine, open_at};
use super::record::{Record, RecordKind};
use super::stats::ExtractionReport;
use crate::app::models::ModelHeader;
use crate::app::models::coefficients::HarmonicCoefficients;
use crate::config::ReaderConfig;
use crate::constants::IMPLICIT_DEGREE_ONE;
use crate::{Error, FieldKind, Result};

/// Number of (degree, order) pairs with `degree <= max_degree` and
/// `order <= min(degree, max_order)`
///
/// Rows up to `max_order` form a full triangle; every later row adds
/// `max_order + 1` pairs. `max_order` is clamped to `max_degree`.
pub fn coeffs_nr(max_degree: usize, max_order: usize) -> usize {
    let m = max_order.min(max_degree);
    (m + 1) * (m + 2) / 2 + (max_degree - m) * (m + 1)
}

/// Coefficients that may be absent from the file without failing the pass
#[derive(Debug)]
struct ExpectedOmissions {
    pending: Vec<(usize, usize)>,
}

impl ExpectedOmissions {
    /// The omission rule applies only when both entries lie in the requested range
    fn new(max_degree: usize, max_order: usize, enabled: bool) -> Self {
        let in_range = IMPLICIT_DEGREE_ONE
            .iter()
            .all(|&(l, m)| l <= max_degree && m <= max_order);
        let pending = if enabled && in_range {
            IMPLICIT_DEGREE_ONE.to_vec()
        } else {
            Vec::new()
        };
        Self { pending }
    }

    fn mark_read(&mut self, degree: usize, order: usize) {
        self.pending.retain(|&entry| entry != (degree, order));
    }

    /// Check if the shortfall consists of exactly the omitted entries
    fn explains(&self, missing: usize) -> bool {
        missing == IMPLICIT_DEGREE_ONE.len() && self.pending.len() == missing
    }
}

/// Scan state local to one extraction pass
#[derive(Debug)]
struct ExtractState {
    max_degree: usize,
    max_order: usize,
    coeffs_read: usize,
    coeffs_to_read: usize,
    lines_read: usize,
    omissions: ExpectedOmissions,
}

/// Read static coefficients up to `max_degree`/`max_order` into `target`
///
/// Requires `max_degree <= header.max_degree`, `max_order <= max_degree` and a
/// target large enough for the range.
pub fn extract_coefficients<C>(
    path: &Path,
    header: &ModelHeader,
    max_degree: usize,
    max_order: usize,
    target: &mut C,
    config: &ReaderConfig,
) -> Result<ExtractionReport>
where
    C: HarmonicCoefficients + ?Sized,
{
    let file = path.display().to_string();

    if !header.has_data_offset() {
        return Err(Error::precondition(
            &file,
            "header not parsed; data section offset unknown",
        ));
    }
    validate_range(header, max_degree, max_order, target)?;

    info!(
        "Extracting coefficients up to degree/order {}/{} from {}",
        max_degree, max_order, file
    );

    let mut state = ExtractState {
        max_degree,
        max_order,
        coeffs_read: 0,
        coeffs_to_read: coeffs_nr(max_degree, max_order),
        lines_read: 0,
        omissions: ExpectedOmissions::new(max_degree, max_order, config.allow_implicit_degree_one),
    };

    for line in open_at(path, header.data_offset, config)? {
        let line = line?;
        state.lines_read += 1;
        extract_line(&mut state, &line, target, &file)?;
        if state.coeffs_read == state.coeffs_to_read {
            break;
        }
    }

    let mut implicit_degree_one = false;
    if state.coeffs_read < state.coeffs_to_read {
        let missing = state.coeffs_to_read - state.coeffs_read;
        if !state.omissions.explains(missing) {
            return Err(Error::TruncatedData {
                file,
                read: state.coeffs_read,
                expected: state.coeffs_to_read,
            });
        }

        info!(
            "The coefficients C(1,0) and C(1,1) are not explicitly written in the icgem file {}; setting C(1,0) = C(1,1) = 0",
            file
        );
        for &(degree, order) in &IMPLICIT_DEGREE_ONE {
            target.set_c(degree, order, 0.0);
            target.set_s(degree, order, 0.0);
        }
        implicit_degree_one = true;
    }

    debug!(
        "Read {}/{} coefficients in {} lines",
        state.coeffs_read, state.coeffs_to_read, state.lines_read
    );

    Ok(ExtractionReport {
        max_degree,
        max_order,
        coeffs_read: state.coeffs_read,
        coeffs_expected: state.coeffs_to_read,
        implicit_degree_one,
        lines_read: state.lines_read,
    })
}

fn validate_range<C>(header: &ModelHeader, max_degree: usize, max_order: usize, target: &C) -> Result<()>
where
    C: HarmonicCoefficients + ?Sized,
{
    if max_degree > header.max_degree {
        return Err(Error::invalid_range(format!(
            "requested degree {} exceeds the model's max degree {}",
            max_degree, header.max_degree
        )));
    }
    if max_order > max_degree {
        return Err(Error::invalid_range(format!(
            "requested order {} exceeds requested degree {}",
            max_order, max_degree
        )));
    }
    if !target.fits(max_degree, max_order) {
        return Err(Error::invalid_range(format!(
            "target holds degree/order {}/{}, requested {}/{}",
            target.max_degree(),
            target.max_order(),
            max_degree,
            max_order
        )));
    }
    Ok(())
}

fn extract_line<C>(state: &mut ExtractState, line: &TextLine, target: &mut C, file: &str) -> Result<()>
where
    C: HarmonicCoefficients + ?Sized,
{
    let mut record = Record::tokenize(&line.text);
    if record.kind != RecordKind::StaticCoeff {
        return Ok(());
    }

    let field_error = |kind| Error::field_parse(file, line.number, kind, &line.text);

    let (degree, order) = record.fields.degree_order().map_err(field_error)?;
    if degree > state.max_degree || order > state.max_order {
        return Ok(());
    }
    if order > degree {
        return Err(Error::data_integrity(
            file,
            line.number,
            format!("order {} exceeds degree {}: [{}]", order, degree, line.text),
        ));
    }

    let clm = record.fields.next_f64().ok_or_else(|| field_error(FieldKind::Clm))?;
    let slm = record.fields.next_f64().ok_or_else(|| field_error(FieldKind::Slm))?;

    target.set_c(degree, order, clm);
    if order == 0 {
        if slm != 0.0 {
            return Err(Error::data_integrity(
                file,
                line.number,
                format!(
                    "S({},0) must be zero, found {:e}: [{}]",
                    degree, slm, line.text
                ),
            ));
        }
    } else {
        target.set_s(degree, order, slm);
    }

    state.coeffs_read += 1;
    state.omissions.mark_read(degree, order);
    Ok(())
}
