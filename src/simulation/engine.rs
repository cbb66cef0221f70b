//! High-level runtime engine settings
//!
//! Selects how forces are summed and how often a running loop reports
//! progress. None of these change the physics.

pub const DEFAULT_REPORT_INTERVAL: u64 = 2500;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub parallel: bool,       // false = sequential pair sum, true = rayon per-point sum
    pub report_interval: u64, // iterations between progress logs, 0 = silent
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            parallel: false,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}
