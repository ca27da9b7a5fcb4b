//! Catalog filter engine.
//!
//! Pure filtering over an in-memory record collection. Two matching modes
//! are supported for the text criteria:
//!
//! - [`MatchMode::Substring`]: case-insensitive "contains", all active
//!   criteria intersected simultaneously.
//! - [`MatchMode::Fuzzy`]: Jaro-Winkler similarity against a threshold,
//!   applied as sequential narrowing in fixed `marca`, `region`,
//!   `tipoCarroceria` order. Each step filters only the survivors of the
//!   previous step; the final member set does not depend on that order,
//!   since every step is a subset of its input.
//!
//! The price bound applies in both modes. The engine never logs and never
//! does I/O; the only failure it can signal is a malformed numeric bound,
//! rejected when the criteria are built.

use strsim::jaro_winkler;

use crate::error::AppError;
use crate::models::Auto;

/// Minimum Jaro-Winkler similarity for a fuzzy criterion to pass.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Substring,
    Fuzzy,
}

/// Request-scoped search constraints. Absent fields constrain nothing.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub marca: Option<String>,
    pub region: Option<String>,
    pub tipo_carroceria: Option<String>,
    /// Inclusive upper bound on `precio`.
    pub precio: Option<i64>,
}

impl FilterCriteria {
    /// Builds criteria from raw query-parameter values. Empty strings are
    /// treated as absent; a non-numeric `precio` is rejected outright
    /// rather than silently matching nothing.
    pub fn from_raw(
        marca: Option<String>,
        region: Option<String>,
        tipo_carroceria: Option<String>,
        precio: Option<&str>,
    ) -> Result<Self, AppError> {
        let precio = match precio.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                AppError::InvalidCriteria(format!("precio must be a number, got '{}'", raw))
            })?),
            None => None,
        };

        Ok(Self {
            marca: marca.filter(|v| !v.is_empty()),
            region: region.filter(|v| !v.is_empty()),
            tipo_carroceria: tipo_carroceria.filter(|v| !v.is_empty()),
            precio,
        })
    }
}

/// Returns the records passing every active criterion, preserving the
/// input order. Empty input or zero matches yields an empty vec.
pub fn apply(
    records: Vec<Auto>,
    criteria: &FilterCriteria,
    mode: MatchMode,
    fuzzy_threshold: f64,
) -> Vec<Auto> {
    let mut survivors = match mode {
        MatchMode::Substring => substring_pass(records, criteria),
        MatchMode::Fuzzy => fuzzy_narrow(records, criteria, fuzzy_threshold),
    };

    if let Some(bound) = criteria.precio {
        survivors.retain(|auto| auto.precio <= bound);
    }

    survivors
}

fn substring_pass(records: Vec<Auto>, criteria: &FilterCriteria) -> Vec<Auto> {
    records
        .into_iter()
        .filter(|auto| {
            contains_insensitive(&auto.marca, criteria.marca.as_deref())
                && contains_insensitive(&auto.region, criteria.region.as_deref())
                && contains_insensitive(&auto.tipo_carroceria, criteria.tipo_carroceria.as_deref())
        })
        .collect()
}

fn contains_insensitive(field: &str, pattern: Option<&str>) -> bool {
    match pattern {
        Some(p) => field.to_lowercase().contains(&p.to_lowercase()),
        None => true,
    }
}

// Fixed narrowing order: marca, region, tipoCarroceria. Later criteria
// only see records that already passed the earlier ones.
fn fuzzy_narrow(records: Vec<Auto>, criteria: &FilterCriteria, threshold: f64) -> Vec<Auto> {
    let mut survivors = records;
    if let Some(pattern) = active(&criteria.marca) {
        survivors.retain(|auto| fuzzy_matches(&auto.marca, pattern, threshold));
    }
    if let Some(pattern) = active(&criteria.region) {
        survivors.retain(|auto| fuzzy_matches(&auto.region, pattern, threshold));
    }
    if let Some(pattern) = active(&criteria.tipo_carroceria) {
        survivors.retain(|auto| fuzzy_matches(&auto.tipo_carroceria, pattern, threshold));
    }
    survivors
}

// Empty patterns constrain nothing, same as absent ones.
fn active(pattern: &Option<String>) -> Option<&str> {
    pattern.as_deref().filter(|p| !p.is_empty())
}

fn fuzzy_matches(field: &str, pattern: &str, threshold: f64) -> bool {
    jaro_winkler(&field.to_lowercase(), &pattern.to_lowercase()) >= threshold
}
