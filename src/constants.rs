//! Application constants for the ICGEM reader
//!
//! This module contains the record tokens, header keywords, limits and
//! default values used throughout the reader.

// =============================================================================
// Line Limits
// =============================================================================

/// Maximum data line length in bytes, line terminator included
///
/// See the ICGEM format description, http://icgem.gfz-potsdam.de/ICGEM-Format-2011.pdf
pub const MAX_DATA_LINE: usize = 512;

// =============================================================================
// Data Section Record Tokens
// =============================================================================

/// Leading tokens of the data section records (exact, case-sensitive prefixes)
pub mod record_tokens {
    /// Static gravity field coefficient (note the trailing blank, so `gfct` does not match)
    pub const STATIC: &str = "gfc ";

    /// Time-variable gravity field base coefficient
    pub const TIME_VARIABLE: &str = "gfct";

    /// Linear trend of the preceding time-variable coefficient
    pub const TREND: &str = "trnd";

    /// Cosine amplitude of a periodic term
    pub const PERIODIC_COS: &str = "acos";

    /// Sine amplitude of a periodic term
    pub const PERIODIC_SIN: &str = "asin";

    /// Length shared by all record tokens
    pub const TOKEN_LEN: usize = 4;
}

/// Number of numeric fields following degree/order on an `acos`/`asin` line
///
/// Columns: amplitude C, amplitude S, sigma C, sigma S, t0, t1, period (years).
pub const PERIODIC_FIELD_COUNT: usize = 7;

// =============================================================================
// Header Keywords
// =============================================================================

/// Keywords recognized in the ICGEM header
pub mod header_keys {
    pub const END_OF_HEAD: &str = "end_of_head";
    pub const PRODUCT_TYPE: &str = "product_type";
    pub const MODEL_NAME: &str = "modelname";
    pub const GM: &str = "earth_gravity_constant";
    pub const RADIUS: &str = "radius";
    pub const MAX_DEGREE: &str = "max_degree";
    pub const ERRORS: &str = "errors";
    pub const NORM: &str = "norm";
    pub const TIDE_SYSTEM: &str = "tide_system";
}

/// Normalization tag of fully normalized coefficients (the ICGEM default)
pub const NORM_FULLY_NORMALIZED: &str = "fully_normalized";

/// Tide system assumed when the header does not declare one
pub const DEFAULT_TIDE_SYSTEM: &str = "unknown";

// =============================================================================
// Omitted Coefficients
// =============================================================================

/// Degree-one coefficients customarily left out of ICGEM files (nominally zero
/// in a geocentric frame)
pub const IMPLICIT_DEGREE_ONE: [(usize, usize); 2] = [(1, 0), (1, 1)];
