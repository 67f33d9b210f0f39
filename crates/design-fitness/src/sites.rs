//! The rover site table.
//!
//! A flat text table, one candidate site per row: latitude and longitude in
//! radians, whitespace separated, `#` starting a comment line. The design
//! vector's last four genes index into it.

use crate::{FitnessError, Result, TERMINAL_COUNT};
use constellation_dynamics::RoverSite;
use std::path::Path;

/// Candidate rover sites shipped with the crate.
const BUILTIN_SITES: &str = include_str!("../data/rover_sites.txt");

#[derive(Debug, Clone)]
pub struct SiteTable {
    sites: Vec<RoverSite>,
}

impl SiteTable {
    /// The built-in 100-site survey table.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_SITES).expect("built-in site table is well formed")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut sites = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let latitude = parse_field(fields.next(), idx)?;
            let longitude = parse_field(fields.next(), idx)?;
            sites.push(RoverSite {
                latitude,
                longitude,
            });
        }
        Ok(Self { sites })
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RoverSite> {
        self.sites.get(index)
    }

    /// Look up the four selected rover sites; an out-of-range index is
    /// fatal and surfaces to the caller.
    pub fn select(&self, indices: &[usize; TERMINAL_COUNT]) -> Result<[RoverSite; TERMINAL_COUNT]> {
        let mut selected = [RoverSite {
            latitude: 0.0,
            longitude: 0.0,
        }; TERMINAL_COUNT];
        for (slot, &index) in indices.iter().enumerate() {
            selected[slot] = *self.sites.get(index).ok_or(FitnessError::SiteIndexOutOfRange {
                index,
                rows: self.sites.len(),
            })?;
        }
        Ok(selected)
    }
}

fn parse_field(field: Option<&str>, line: usize) -> Result<f64> {
    let field = field.ok_or_else(|| FitnessError::SiteTableParse {
        line: line + 1,
        reason: "expected latitude and longitude".to_string(),
    })?;
    field.parse().map_err(|e| FitnessError::SiteTableParse {
        line: line + 1,
        reason: format!("{}", e),
    })
}
