//! Inspection pass over the ICGEM data section
//!
//! Reads every record once to find the degree/order bounds of the static and
//! time-variable parts and the periods of the periodic terms. Trend and
//! periodic records must refer to the time-variable coefficient that
//! immediately precedes them; periodic records away from degree 1, order 0
//! must use a period already registered at degree 1, order 0.

use std::path::Path;
use tracing::{debug, info, warn};

use super::line_reader::{TextLine, open_at};
use super::record::{Record, RecordKind};
use super::stats::{ModelInspection, ScanStats};
use crate::app::models::{PeriodRegistry, StructuralBounds};
use crate::config::ReaderConfig;
use crate::constants::PERIODIC_FIELD_COUNT;
use crate::{Error, FieldKind, Result};

/// Degree/order of the time-variable coefficient that registers periods
const PERIOD_SOURCE: (usize, usize) = (1, 0);

/// Scan state local to one inspection pass
#[derive(Debug, Default)]
struct InspectState {
    bounds: StructuralBounds,
    periods: PeriodRegistry,
    /// Degree/order of the most recent `gfct` record
    tv_context: Option<(usize, usize)>,
    stats: ScanStats,
}

/// Inspect the data section of `path` starting at `data_offset`
///
/// Fails with [`Error::Precondition`] when `data_offset` is zero, i.e. the
/// header has not been parsed.
pub fn inspect_data(path: &Path, data_offset: u64, config: &ReaderConfig) -> Result<ModelInspection> {
    let file = path.display().to_string();

    if data_offset == 0 {
        return Err(Error::precondition(
            &file,
            "header not parsed; data section offset unknown",
        ));
    }

    info!("Inspecting icgem data section: {}", file);

    let mut state = InspectState::default();
    for line in open_at(path, data_offset, config)? {
        inspect_line(&mut state, &line?, &file)?;
    }

    debug!(
        "Inspected {} lines ({} gfc, {} gfct, {} trnd, {} periodic, {} skipped)",
        state.stats.lines_read,
        state.stats.static_records,
        state.stats.time_variable_records,
        state.stats.trend_records,
        state.stats.periodic_records,
        state.stats.unknown_lines
    );
    info!(
        "Static degree {}..{}, time-variable degree {}..{}, {} periodic term period(s)",
        state.bounds.degree_static_start,
        state.bounds.degree_static_stop,
        state.bounds.degree_tv_start,
        state.bounds.degree_tv_stop,
        state.periods.len()
    );

    Ok(ModelInspection {
        bounds: state.bounds,
        periods: state.periods,
        stats: state.stats,
    })
}

fn inspect_line(state: &mut InspectState, line: &TextLine, file: &str) -> Result<()> {
    let mut record = Record::tokenize(&line.text);
    state.stats.count(record.kind);

    match record.kind {
        RecordKind::StaticCoeff => {
            let (degree, order) = degree_order(&mut record, line, file)?;
            state.bounds.record_static(degree, order);
        }
        RecordKind::TimeVarBase => {
            let (degree, order) = degree_order(&mut record, line, file)?;
            state.bounds.record_time_variable(degree, order);
            state.tv_context = Some((degree, order));
        }
        RecordKind::Trend => {
            let (degree, order) = degree_order(&mut record, line, file)?;
            check_context(state.tv_context, degree, order, line, file)?;
        }
        RecordKind::PeriodicCos | RecordKind::PeriodicSin => {
            let (degree, order) = degree_order(&mut record, line, file)?;

            let (values, failed) = record.fields.floats::<PERIODIC_FIELD_COUNT>();
            if failed > 0 {
                return Err(Error::field_parse(
                    file,
                    line.number,
                    FieldKind::PeriodicTerms { failed },
                    &line.text,
                ));
            }
            let period = values[PERIODIC_FIELD_COUNT - 1];

            check_context(state.tv_context, degree, order, line, file)?;

            if (degree, order) == PERIOD_SOURCE {
                if state.periods.register(period) {
                    debug!("Registered periodic term with period {} year(s)", period);
                }
            } else if !state.periods.contains(period) {
                return Err(Error::UnknownPeriod {
                    file: file.to_string(),
                    line_number: line.number,
                    period,
                    line: line.text.clone(),
                });
            }
        }
        RecordKind::Unknown => {
            if line.text.trim().is_empty() {
                debug!("Skipping blank line {} in {}", line.number, file);
            } else {
                warn!("ICGEM line skipped: '{}' (file {})", line.text, file);
            }
        }
    }

    Ok(())
}

fn degree_order(record: &mut Record<'_>, line: &TextLine, file: &str) -> Result<(usize, usize)> {
    record
        .fields
        .degree_order()
        .map_err(|kind| Error::field_parse(file, line.number, kind, &line.text))
}

fn check_context(
    context: Option<(usize, usize)>,
    degree: usize,
    order: usize,
    line: &TextLine,
    file: &str,
) -> Result<()> {
    if context == Some((degree, order)) {
        return Ok(());
    }

    Err(Error::ContextMismatch {
        file: file.to_string(),
        line_number: line.number,
        found_degree: degree,
        found_order: order,
        expected: context,
        line: line.text.clone(),
    })
}
