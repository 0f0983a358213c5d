//! Extract command implementation
//!
//! Loads the static coefficients of a model and prints them as a table,
//! JSON document or CSV.

use super::shared::{format_value, setup_logging, write_json};
use crate::app::services::gravity_loader::{GravityModel, load_static_model};
use crate::cli::args::{ExtractArgs, OutputFormat};
use crate::Result;
use colored::*;
use std::io::Write;
use tracing::{debug, info};

/// Extract command runner
pub fn run_extract(args: ExtractArgs) -> Result<()> {
    setup_logging(&args.common)?;
    debug!("Extract arguments: {:?}", args);
    args.validate()?;

    let config = args.common.reader_config();
    let model = load_static_model(&args.file, args.degree, args.order, &config)?;
    info!(
        "Extracted {}/{} coefficients from {}",
        model.report.coeffs_read,
        model.report.coeffs_expected,
        args.file.display()
    );

    let mut out = std::io::stdout().lock();
    write_report(&mut out, args.common.output_format, &model, args.summary)
}

/// Write the extraction result in the requested format
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    model: &GravityModel,
    summary: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => write_human_report(out, model, summary),
        OutputFormat::Json => {
            let coefficients: Vec<_> = if summary {
                Vec::new()
            } else {
                model
                    .coefficients
                    .iter()
                    .map(|(degree, order, c, s)| {
                        serde_json::json!({ "degree": degree, "order": order, "c": c, "s": s })
                    })
                    .collect()
            };
            write_json(
                out,
                &serde_json::json!({
                    "header": model.header,
                    "report": model.report,
                    "coefficients": coefficients,
                }),
            )
        }
        OutputFormat::Csv => write_csv_report(out, model, summary),
    }
}

fn write_human_report<W: Write>(out: &mut W, model: &GravityModel, summary: bool) -> Result<()> {
    let report = &model.report;

    writeln!(
        out,
        "\n{} {}",
        "Coefficients of".bright_green().bold(),
        model.header.model_name.bright_white().bold()
    )?;
    writeln!(
        out,
        "  {} {}/{}",
        "Degree/order:".bright_cyan(),
        report.max_degree,
        report.max_order
    )?;
    writeln!(
        out,
        "  {} {} of {}",
        "Read:".bright_cyan(),
        report.coeffs_read,
        report.coeffs_expected
    )?;
    if report.implicit_degree_one {
        writeln!(
            out,
            "  {}",
            "C(1,0) and C(1,1) not in file, set to zero".bright_yellow()
        )?;
    }

    if !summary {
        writeln!(out, "\n{:>5} {:>5} {:>20} {:>20}", "L", "M", "C", "S")?;
        for (degree, order, c, s) in model.coefficients.iter() {
            writeln!(
                out,
                "{:>5} {:>5} {:>20} {:>20}",
                degree,
                order,
                format_value(c),
                format_value(s)
            )?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn write_csv_report<W: Write>(out: &mut W, model: &GravityModel, summary: bool) -> Result<()> {
    if summary {
        let report = &model.report;
        writeln!(out, "metric,value")?;
        writeln!(out, "max_degree,{}", report.max_degree)?;
        writeln!(out, "max_order,{}", report.max_order)?;
        writeln!(out, "coeffs_read,{}", report.coeffs_read)?;
        writeln!(out, "coeffs_expected,{}", report.coeffs_expected)?;
        writeln!(out, "implicit_degree_one,{}", report.implicit_degree_one)?;
        return Ok(());
    }

    writeln!(out, "degree,order,c,s")?;
    for (degree, order, c, s) in model.coefficients.iter() {
        writeln!(out, "{},{},{:e},{:e}", degree, order, c, s)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::gravity_loader::load_gravity_model;
    use crate::config::ReaderConfig;
    use tempfile::NamedTempFile;

    fn loaded_model(degree: usize) -> (NamedTempFile, GravityModel) {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "\
modelname TESTMODEL
earth_gravity_constant 3.986004415E+14
radius 6378136.3
max_degree 2
end_of_head
gfc 0 0 1.0 0.0
gfc 2 0 -4.8E-04 0.0
gfc 2 1 1.0E-10 2.0E-10
gfc 2 2 2.4E-06 -1.4E-06
"
        )
        .unwrap();
        file.flush().unwrap();

        let model =
            load_gravity_model(file.path(), degree, degree, &ReaderConfig::default())
                .unwrap();
        (file, model)
    }

    fn report(format: OutputFormat, summary: bool) -> String {
        let (_file, model) = loaded_model(2);
        let mut out = Vec::new();
        write_report(&mut out, format, &model, summary).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_csv_coefficients() {
        let text = report(OutputFormat::Csv, false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "degree,order,c,s");
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "0,0,1e0,0e0");
        assert_eq!(lines[4], "2,0,-4.8e-4,0e0");
        assert_eq!(lines[2], "1,0,0e0,0e0");
    }

    #[test]
    fn test_csv_summary() {
        let text = report(OutputFormat::Csv, true);
        assert!(text.contains("coeffs_read,4\n"));
        assert!(text.contains("coeffs_expected,6\n"));
        assert!(text.contains("implicit_degree_one,true\n"));
    }

    #[test]
    fn test_json_report() {
        let text = report(OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["report"]["coeffs_expected"], 6);
        assert_eq!(value["coefficients"].as_array().unwrap().len(), 6);
        assert_eq!(value["coefficients"][5]["s"], -1.4e-6);
    }

    #[test]
    fn test_human_report() {
        let text = report(OutputFormat::Human, false);
        assert!(text.contains("TESTMODEL"));
        assert!(text.contains("-4.800000000000e-4"));

        let summary = report(OutputFormat::Human, true);
        assert!(!summary.contains("-4.800000000000e-4"));
    }
}
