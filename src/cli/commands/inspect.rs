//! Inspect command implementation
//!
//! Reads the header and runs the inspection pass, then reports the model
//! constants, structural bounds and periodic-term periods.

use super::shared::{setup_logging, write_json};
use crate::app::models::ModelHeader;
use crate::app::services::icgem_parser::{IcgemReader, ModelInspection};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::Result;
use colored::*;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Inspect arguments: {:?}", args);
    args.validate()?;

    let mut reader = IcgemReader::with_config(&args.file, args.common.reader_config());
    let header = reader.parse_header()?.clone();
    let inspection = reader.inspect()?;

    info!("Inspection of {} complete", args.file.display());

    let mut out = std::io::stdout().lock();
    write_report(&mut out, args.common.output_format, &args.file, &header, inspection)
}

/// Write the inspection report in the requested format
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    file: &Path,
    header: &ModelHeader,
    inspection: &ModelInspection,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_human_report(out, file, header, inspection),
        OutputFormat::Json => write_json(
            out,
            &serde_json::json!({
                "file": file.display().to_string(),
                "header": header,
                "inspection": inspection,
            }),
        ),
        OutputFormat::Csv => write_csv_report(out, header, inspection),
    }
}

fn write_human_report<W: Write>(
    out: &mut W,
    file: &Path,
    header: &ModelHeader,
    inspection: &ModelInspection,
) -> Result<()> {
    let bounds = &inspection.bounds;
    let stats = &inspection.stats;

    writeln!(out, "\n{}", "ICGEM Model".bright_green().bold())?;
    writeln!(out, "  {} {}", "File:".bright_cyan(), file.display())?;
    writeln!(
        out,
        "  {} {}",
        "Model:".bright_cyan(),
        header.model_name.bright_white().bold()
    )?;
    writeln!(out, "  {} {}", "Product type:".bright_cyan(), header.product_type)?;
    writeln!(out, "  {} {:e} m^3/s^2", "GM:".bright_cyan(), header.gm)?;
    writeln!(out, "  {} {} m", "Radius:".bright_cyan(), header.radius)?;
    writeln!(out, "  {} {}", "Declared max degree:".bright_cyan(), header.max_degree)?;
    writeln!(out, "  {} {}", "Normalization:".bright_cyan(), header.normalization)?;
    writeln!(out, "  {} {}", "Tide system:".bright_cyan(), header.tide_system)?;
    writeln!(out, "  {} {}", "Errors:".bright_cyan(), header.errors)?;

    writeln!(out, "\n{}", "Structure".bright_green().bold())?;
    writeln!(
        out,
        "  {} degree {}..{}, order {}..{}",
        "Static:".bright_cyan(),
        bounds.degree_static_start,
        bounds.degree_static_stop,
        bounds.order_static_start,
        bounds.order_static_stop
    )?;
    if bounds.has_time_variable() {
        writeln!(
            out,
            "  {} degree {}..{}, order {}..{}",
            "Time-variable:".bright_cyan(),
            bounds.degree_tv_start,
            bounds.degree_tv_stop,
            bounds.order_tv_start,
            bounds.order_tv_stop
        )?;
    } else {
        writeln!(out, "  {} none", "Time-variable:".bright_cyan())?;
    }

    if !inspection.periods.is_empty() {
        let periods: Vec<String> = inspection.periods.iter().map(|p| p.to_string()).collect();
        writeln!(
            out,
            "  {} {} year(s)",
            "Periods:".bright_cyan(),
            periods.join(", ").bright_white()
        )?;
    }

    writeln!(out, "\n{}", "Records".bright_green().bold())?;
    writeln!(out, "  {} {}", "Lines read:".bright_cyan(), stats.lines_read)?;
    writeln!(out, "  {} {}", "gfc:".bright_cyan(), stats.static_records)?;
    writeln!(out, "  {} {}", "gfct:".bright_cyan(), stats.time_variable_records)?;
    writeln!(out, "  {} {}", "trnd:".bright_cyan(), stats.trend_records)?;
    writeln!(out, "  {} {}", "acos/asin:".bright_cyan(), stats.periodic_records)?;
    if stats.unknown_lines > 0 {
        writeln!(
            out,
            "  {} {}",
            "Skipped lines:".bright_yellow(),
            stats.unknown_lines.to_string().bright_yellow()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_csv_report<W: Write>(
    out: &mut W,
    header: &ModelHeader,
    inspection: &ModelInspection,
) -> Result<()> {
    let bounds = &inspection.bounds;
    let stats = &inspection.stats;

    writeln!(out, "metric,value")?;
    writeln!(out, "model_name,{}", header.model_name)?;
    writeln!(out, "gm,{:e}", header.gm)?;
    writeln!(out, "radius,{}", header.radius)?;
    writeln!(out, "max_degree,{}", header.max_degree)?;
    writeln!(out, "normalization,{}", header.normalization)?;
    writeln!(out, "tide_system,{}", header.tide_system)?;
    writeln!(out, "degree_static_start,{}", bounds.degree_static_start)?;
    writeln!(out, "degree_static_stop,{}", bounds.degree_static_stop)?;
    writeln!(out, "order_static_start,{}", bounds.order_static_start)?;
    writeln!(out, "order_static_stop,{}", bounds.order_static_stop)?;
    writeln!(out, "degree_tv_start,{}", bounds.degree_tv_start)?;
    writeln!(out, "degree_tv_stop,{}", bounds.degree_tv_stop)?;
    writeln!(out, "order_tv_start,{}", bounds.order_tv_start)?;
    writeln!(out, "order_tv_stop,{}", bounds.order_tv_stop)?;
    for (index, period) in inspection.periods.iter().enumerate() {
        writeln!(out, "period_{},{}", index, period)?;
    }
    writeln!(out, "lines_read,{}", stats.lines_read)?;
    writeln!(out, "unknown_lines,{}", stats.unknown_lines)?;
    Ok(())
}
