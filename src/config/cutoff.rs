/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Per species-pair cutoff radii
//!
//! Keys are unordered pairs such as `"C-H"`; `"H-C"` names the same entry.
//! Padding and the neighbor search only use [`CutoffSpec::max`], the pair
//! values are kept for consumers that filter neighbors further.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::errors::{ConfigError, Result};

/// Mapping from an unordered species pair to a cutoff radius
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct CutoffSpec {
    cutoffs: BTreeMap<String, f64>,
}

/// Canonical `"A-B"` key with the two symbols sorted
fn pair_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{}-{}", a, b)
    } else {
        format!("{}-{}", b, a)
    }
}

/// Normalize a user supplied `"A-B"` label
fn normalize_label(label: &str) -> Result<String> {
    let mut parts = label.split('-').map(str::trim);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => Ok(pair_key(a, b)),
        _ => Err(ConfigError::InvalidCutoff(format!(
            "species pair '{}' is not of the form A-B",
            label
        ))),
    }
}

fn check_radius(label: &str, rcut: f64) -> Result<()> {
    if !rcut.is_finite() || rcut <= 0.0 {
        return Err(ConfigError::InvalidCutoff(format!(
            "cutoff for '{}' must be positive and finite, got {}",
            label, rcut
        )));
    }
    Ok(())
}

impl CutoffSpec {
    /// An empty specification
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(pair label, radius)` entries
    pub fn from_pairs<K: AsRef<str>>(pairs: impl IntoIterator<Item = (K, f64)>) -> Result<Self> {
        let mut spec = Self::new();
        for (label, rcut) in pairs {
            spec.insert(label.as_ref(), rcut)?;
        }
        Ok(spec)
    }

    /// Insert or replace the cutoff for a pair label
    pub fn insert(&mut self, label: &str, rcut: f64) -> Result<()> {
        let key = normalize_label(label)?;
        check_radius(&key, rcut)?;
        self.cutoffs.insert(key, rcut);
        Ok(())
    }

    /// Cutoff between species `a` and `b`, in either order
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        self.cutoffs.get(&pair_key(a, b)).copied()
    }

    /// Largest cutoff over all pairs; the radius that governs padding
    pub fn max(&self) -> Result<f64> {
        self.cutoffs
            .values()
            .copied()
            .fold(None, |acc: Option<f64>, r| Some(acc.map_or(r, |m| m.max(r))))
            .ok_or_else(|| ConfigError::InvalidCutoff("no cutoffs specified".to_string()))
    }

    /// Number of pair entries
    pub fn len(&self) -> usize {
        self.cutoffs.len()
    }

    /// True when no pair has a cutoff
    pub fn is_empty(&self) -> bool {
        self.cutoffs.is_empty()
    }

    /// Iterate over `(canonical pair label, radius)`
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.cutoffs.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Parse a single `"A-B=radius"` entry
    pub fn parse_entry(entry: &str) -> Result<(String, f64)> {
        let (label, value) = entry.split_once('=').ok_or_else(|| {
            ConfigError::InvalidCutoff(format!("expected PAIR=RADIUS, got '{}'", entry))
        })?;
        let rcut: f64 = value.trim().parse().map_err(|_| {
            ConfigError::InvalidCutoff(format!("cannot parse radius '{}'", value.trim()))
        })?;
        let key = normalize_label(label)?;
        check_radius(&key, rcut)?;
        Ok((key, rcut))
    }
}

impl TryFrom<BTreeMap<String, f64>> for CutoffSpec {
    type Error = ConfigError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self> {
        Self::from_pairs(map)
    }
}

impl From<CutoffSpec> for BTreeMap<String, f64> {
    fn from(spec: CutoffSpec) -> Self {
        spec.cutoffs
    }
}

/// Comma separated `"A-B=radius"` entries, e.g. `"C-C=1.42,C-H=1.0"`
impl FromStr for CutoffSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let mut spec = Self::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, rcut) = Self::parse_entry(entry)?;
            spec.cutoffs.insert(key, rcut);
        }
        Ok(spec)
    }
}

impl fmt::Display for CutoffSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .cutoffs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        write!(f, "{}", entries.join(","))
    }
}
