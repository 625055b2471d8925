// ==========================================
// Motor de Agendamento Obstétrico - DUM/USG tolerance table
// ==========================================
// Basis: PR-DIMEP-PGS-01
// Allowed day-discrepancy between LMP-derived and
// ultrasound-derived dating, by GA (weeks) at the ultrasound.
// When the discrepancy exceeds the tolerance, USG governs.
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Tolerance applied below the first band (GA < 8 weeks).
pub const FLOOR_TOLERANCE_DAYS: i64 = 5;

// ==========================================
// ToleranceBand
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToleranceBand {
    pub ga_weeks_min: u32,
    pub ga_weeks_max: u32,
    pub tolerance_days: i64,
}

impl ToleranceBand {
    pub const fn new(ga_weeks_min: u32, ga_weeks_max: u32, tolerance_days: i64) -> Self {
        Self {
            ga_weeks_min,
            ga_weeks_max,
            tolerance_days,
        }
    }
}

// ==========================================
// ToleranceTable
// ==========================================
// Immutable after construction. Bands must be ordered,
// contiguous and well-formed; anything else is rejected at
// load time, never surfaced as a wrong schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToleranceTable {
    bands: Vec<ToleranceBand>,
}

impl ToleranceTable {
    /// Validate and build a table from ordered bands.
    pub fn new(bands: Vec<ToleranceBand>) -> ConfigResult<Self> {
        if bands.is_empty() {
            return Err(ConfigError::EmptyToleranceTable);
        }
        let mut expected_min: Option<u32> = None;
        for (index, band) in bands.iter().enumerate() {
            if band.ga_weeks_min > band.ga_weeks_max {
                return Err(ConfigError::InvalidToleranceRange {
                    index,
                    min: band.ga_weeks_min,
                    max: band.ga_weeks_max,
                });
            }
            if band.tolerance_days < 0 {
                return Err(ConfigError::InvalidToleranceRange {
                    index,
                    min: band.ga_weeks_min,
                    max: band.ga_weeks_max,
                });
            }
            if let Some(expected) = expected_min {
                if band.ga_weeks_min != expected {
                    return Err(ConfigError::NonContiguousToleranceBands {
                        expected,
                        found: band.ga_weeks_min,
                    });
                }
            }
            expected_min = Some(band.ga_weeks_max + 1);
        }
        Ok(Self { bands })
    }

    /// Standard PR-DIMEP-PGS-01 table.
    pub fn standard() -> Self {
        // Static data validated by construction; a panic here is a
        // compile-time-style defect caught by the test suite.
        Self::new(vec![
            ToleranceBand::new(8, 9, 5),
            ToleranceBand::new(10, 11, 7),
            ToleranceBand::new(12, 13, 10),
            ToleranceBand::new(14, 15, 14),
            ToleranceBand::new(16, 19, 21),
            ToleranceBand::new(20, 42, 21),
        ])
        .expect("standard tolerance table must be valid")
    }

    /// Tolerance in days for a GA (weeks) at the ultrasound.
    ///
    /// Below the first band the 5-day floor applies; above the last
    /// band the last band's tolerance applies.
    pub fn tolerance_for(&self, usg_ga_weeks: u32) -> i64 {
        let first = self.bands.first().expect("table is never empty");
        if usg_ga_weeks < first.ga_weeks_min {
            return FLOOR_TOLERANCE_DAYS;
        }
        for band in &self.bands {
            if usg_ga_weeks >= band.ga_weeks_min && usg_ga_weeks <= band.ga_weeks_max {
                return band.tolerance_days;
            }
        }
        self.bands.last().expect("table is never empty").tolerance_days
    }

    pub fn bands(&self) -> &[ToleranceBand] {
        &self.bands
    }
}

impl Default for ToleranceTable {
    fn default() -> Self {
        Self::standard()
    }
}
