//! Spherical-harmonic coefficient storage
//!
//! The extractor writes coefficients through the [`HarmonicCoefficients`]
//! trait, so callers may supply their own storage layout. [`HarmonicCoeffs`]
//! is a ready-made implementation using packed lower-triangular storage.

use crate::app::services::icgem_parser::coeffs_nr;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Target of coefficient extraction
///
/// Implementors own storage and indexing. Degrees start at 0 and order never
/// exceeds degree; callers only address entries within
/// `max_degree()`/`max_order()`.
pub trait HarmonicCoefficients {
    /// Largest degree the storage can hold
    fn max_degree(&self) -> usize;

    /// Largest order the storage can hold
    fn max_order(&self) -> usize;

    /// Cosine coefficient C(degree, order)
    fn c(&self, degree: usize, order: usize) -> f64;

    /// Sine coefficient S(degree, order)
    fn s(&self, degree: usize, order: usize) -> f64;

    fn set_c(&mut self, degree: usize, order: usize, value: f64);

    fn set_s(&mut self, degree: usize, order: usize, value: f64);

    /// Check that a (degree, order) range fits in this storage
    fn fits(&self, degree: usize, order: usize) -> bool {
        degree <= self.max_degree() && order <= self.max_order()
    }
}

/// Packed lower-triangular (C,S) storage, truncated at `max_order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonicCoeffs {
    max_degree: usize,
    max_order: usize,
    c: Vec<f64>,
    s: Vec<f64>,
}

impl HarmonicCoeffs {
    /// Allocate zeroed storage for degrees `0..=max_degree`, orders `0..=max_order`
    pub fn new(max_degree: usize, max_order: usize) -> Result<Self> {
        if max_order > max_degree {
            return Err(Error::invalid_range(format!(
                "order {} exceeds degree {}",
                max_order, max_degree
            )));
        }

        let size = coeffs_nr(max_degree, max_order);
        Ok(Self {
            max_degree,
            max_order,
            c: vec![0.0; size],
            s: vec![0.0; size],
        })
    }

    /// Number of stored (degree, order) pairs
    pub fn len(&self) -> usize {
        self.c.len()
    }

    pub fn is_empty(&self) -> bool {
        self.c.is_empty()
    }

    /// Iterate over `(degree, order, C, S)` in degree-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64, f64)> + '_ {
        (0..=self.max_degree).flat_map(move |degree| {
            (0..=degree.min(self.max_order)).map(move |order| {
                let idx = self.index(degree, order);
                (degree, order, self.c[idx], self.s[idx])
            })
        })
    }

    fn index(&self, degree: usize, order: usize) -> usize {
        assert!(
            self.fits(degree, order) && order <= degree,
            "coefficient ({}, {}) outside storage {}/{}",
            degree,
            order,
            self.max_degree,
            self.max_order
        );
        // rows up to max_order are full triangles, later rows hold max_order + 1 entries
        if degree <= self.max_order {
            degree * (degree + 1) / 2 + order
        } else {
            let m = self.max_order;
            (m + 1) * (m + 2) / 2 + (degree - m - 1) * (m + 1) + order
        }
    }
}

impl HarmonicCoefficients for HarmonicCoeffs {
    fn max_degree(&self) -> usize {
        self.max_degree
    }

    fn max_order(&self) -> usize {
        self.max_order
    }

    fn c(&self, degree: usize, order: usize) -> f64 {
        self.c[self.index(degree, order)]
    }

    fn s(&self, degree: usize, order: usize) -> f64 {
        self.s[self.index(degree, order)]
    }

    fn set_c(&mut self, degree: usize, order: usize, value: f64) {
        let idx = self.index(degree, order);
        self.c[idx] = value;
    }

    fn set_s(&mut self, degree: usize, order: usize, value: f64) {
        let idx = self.index(degree, order);
        self.s[idx] = value;
    }
}
