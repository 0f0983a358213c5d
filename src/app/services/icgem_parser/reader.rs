//! ICGEM reader bound to one file
//!
//! Ties together header parsing, inspection and extraction. The reader only
//! stores finished results: each pass runs on its own file handle with local
//! scan state, so separate readers on the same file may be used from
//! different threads.

use std::path::{Path, PathBuf};
use tracing::info;

use super::extractor::extract_coefficients;
use super::header::parse_header;
use super::inspector::inspect_data;
use super::stats::{ExtractionReport, ModelInspection};
use crate::app::models::coefficients::HarmonicCoefficients;
use crate::app::models::{ModelHeader, PeriodRegistry, StructuralBounds};
use crate::config::ReaderConfig;
use crate::{Error, Result};

/// Reader for one ICGEM gravity model file
#[derive(Debug, Clone)]
pub struct IcgemReader {
    path: PathBuf,
    config: ReaderConfig,
    header: Option<ModelHeader>,
    inspection: Option<ModelInspection>,
}

impl IcgemReader {
    /// Create a reader with default configuration
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, ReaderConfig::default())
    }

    /// Create a reader with custom configuration
    pub fn with_config(path: impl Into<PathBuf>, config: ReaderConfig) -> Self {
        Self {
            path: path.into(),
            config,
            header: None,
            inspection: None,
        }
    }

    /// Create a reader from a header resolved elsewhere
    pub fn with_header(path: impl Into<PathBuf>, header: ModelHeader) -> Self {
        let mut reader = Self::new(path);
        reader.header = Some(header);
        reader
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read the file header
    pub fn parse_header(&mut self) -> Result<&ModelHeader> {
        let header = parse_header(&self.path, &self.config)?;
        info!(
            "Read icgem header of {}: {} (max degree {})",
            self.path.display(),
            header.model_name,
            header.max_degree
        );
        Ok(self.header.insert(header))
    }

    pub fn header(&self) -> Option<&ModelHeader> {
        self.header.as_ref()
    }

    /// Inspect the data section; replaces any previous inspection result
    ///
    /// On failure the previous result is discarded as well.
    pub fn inspect(&mut self) -> Result<&ModelInspection> {
        self.inspection = None;
        let header = self.require_header()?;
        let inspection = inspect_data(&self.path, header.data_offset, &self.config)?;
        Ok(self.inspection.insert(inspection))
    }

    pub fn inspection(&self) -> Option<&ModelInspection> {
        self.inspection.as_ref()
    }

    /// Structural bounds of the last successful inspection
    pub fn bounds(&self) -> Option<&StructuralBounds> {
        self.inspection.as_ref().map(|i| &i.bounds)
    }

    /// Periodic-term periods of the last successful inspection
    pub fn periods(&self) -> Option<&PeriodRegistry> {
        self.inspection.as_ref().map(|i| &i.periods)
    }

    /// Max degree over static and time-variable records, zero before inspection
    pub fn degree(&self) -> usize {
        self.bounds().map(StructuralBounds::max_degree).unwrap_or(0)
    }

    /// Max order over static and time-variable records, zero before inspection
    pub fn order(&self) -> usize {
        self.bounds().map(StructuralBounds::max_order).unwrap_or(0)
    }

    /// Read static coefficients up to `max_degree`/`max_order` into `target`
    pub fn extract<C>(&self, max_degree: usize, max_order: usize, target: &mut C) -> Result<ExtractionReport>
    where
        C: HarmonicCoefficients + ?Sized,
    {
        let header = self.require_header()?;
        extract_coefficients(&self.path, header, max_degree, max_order, target, &self.config)
    }

    fn require_header(&self) -> Result<&ModelHeader> {
        match &self.header {
            Some(header) if header.has_data_offset() => Ok(header),
            _ => Err(Error::precondition(
                self.path.display().to_string(),
                "header not parsed",
            )),
        }
    }
}
