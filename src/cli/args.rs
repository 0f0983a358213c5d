//! Command-line argument definitions for the ICGEM reader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ReaderConfig;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the ICGEM gravity model reader
#[derive(Debug, Clone, Parser)]
#[command(
    name = "icgem",
    version,
    about = "Inspect ICGEM gravity field models and extract their spherical-harmonic coefficients",
    long_about = "Reads gravity potential models in the ICGEM text format. The inspect command \
                  reports the header constants, the degree/order bounds of the static and \
                  time-variable parts and the periods of the periodic terms; the extract command \
                  reads the static (C,S) coefficients up to a requested degree and order."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Report header, structural bounds and periodic-term periods of a model
    Inspect(InspectArgs),
    /// Extract static coefficients up to a degree/order
    Extract(ExtractArgs),
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// ICGEM model file (.gfc)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// ICGEM model file (.gfc)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum degree to extract
    ///
    /// Defaults to the largest static degree found in the file.
    #[arg(
        short = 'n',
        long = "degree",
        value_name = "N",
        help = "Maximum degree to extract"
    )]
    pub degree: Option<usize>,

    /// Maximum order to extract
    ///
    /// Defaults to the extracted degree.
    #[arg(
        short = 'm',
        long = "order",
        value_name = "M",
        help = "Maximum order to extract (defaults to the degree)"
    )]
    pub order: Option<usize>,

    /// Print a summary only, without the coefficient table
    #[arg(long = "summary", help = "Print a summary without the coefficient table")]
    pub summary: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Reader and output options shared by all commands
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Maximum accepted line length, terminator included
    #[arg(
        long = "max-line-length",
        value_name = "BYTES",
        default_value_t = crate::constants::MAX_DATA_LINE,
        help = "Maximum accepted line length in bytes"
    )]
    pub max_line_length: usize,

    /// Fail when C(1,0) and C(1,1) are missing instead of setting them to zero
    #[arg(long = "strict", help = "Require C(1,0) and C(1,1) to be present")]
    pub strict: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl Commands {
    /// Options shared by every command
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Inspect(args) => &args.common,
            Commands::Extract(args) => &args.common,
        }
    }
}

impl CommonArgs {
    /// Get log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build the reader configuration for these options
    pub fn reader_config(&self) -> ReaderConfig {
        let config = ReaderConfig::default().with_max_line_length(self.max_line_length);
        if self.strict { config.strict() } else { config }
    }
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let (Some(degree), Some(order)) = (self.degree, self.order) {
            if order > degree {
                return Err(Error::configuration(format!(
                    "Order {} cannot exceed degree {}",
                    order, degree
                )));
            }
        }
        if self.degree.is_none() && self.order.is_some() {
            return Err(Error::configuration(
                "--order requires --degree".to_string(),
            ));
        }
        self.common.reader_config().validate()
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments
    pub fn validate(&self) -> Result<()> {
        self.common.reader_config().validate()
    }
}
