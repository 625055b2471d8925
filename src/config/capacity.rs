// ==========================================
// Motor de Agendamento Obstétrico - maternity capacity
// ==========================================
// Per-maternity slot configuration: weekday/Saturday daily caps
// plus an independent operator-set weekly ceiling. Sunday is
// always closed by policy.
//
// The weekly ceiling is NOT validated against the sum of daily
// caps; operators may set it tighter on purpose.
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// MaternityCapacity
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaternityCapacity {
    pub maternity_id: String,

    // ===== Daily slots =====
    pub weekday_slots: u32,
    pub saturday_slots: u32,
    pub sunday_slots: u32, // 0 by policy

    // ===== Operator ceilings =====
    pub daily_max: u32,
    pub weekly_max: u32,
}

impl MaternityCapacity {
    /// Validate and build a capacity record. Fails fast on negative
    /// caps, a non-zero Sunday, or a weekly ceiling below 1.
    pub fn new(
        maternity_id: impl Into<String>,
        weekday_slots: i64,
        saturday_slots: i64,
        sunday_slots: i64,
        daily_max: i64,
        weekly_max: i64,
    ) -> ConfigResult<Self> {
        let maternity_id = maternity_id.into();

        let check = |field: &'static str, value: i64| -> ConfigResult<u32> {
            if value < 0 {
                return Err(ConfigError::NegativeCapacity {
                    maternity_id: maternity_id.clone(),
                    field,
                    value,
                });
            }
            Ok(value as u32)
        };

        let weekday_slots = check("weekday_slots", weekday_slots)?;
        let saturday_slots = check("saturday_slots", saturday_slots)?;
        let daily_max = check("daily_max", daily_max)?;
        let weekly_max = check("weekly_max", weekly_max)?;

        if sunday_slots != 0 {
            return Err(ConfigError::SundayNotClosed {
                maternity_id,
                slots: sunday_slots,
            });
        }
        if weekly_max == 0 {
            return Err(ConfigError::InvalidWeeklyMax { maternity_id });
        }

        Ok(Self {
            maternity_id,
            weekday_slots,
            saturday_slots,
            sunday_slots: 0,
            daily_max,
            weekly_max,
        })
    }

    /// Daily cap for a calendar date: Saturday slots on Saturdays,
    /// weekday slots otherwise, bounded by the operator daily ceiling.
    /// Sundays are always 0.
    pub fn day_cap(&self, date: NaiveDate) -> u32 {
        let slots = match date.weekday() {
            Weekday::Sun => return 0,
            Weekday::Sat => self.saturday_slots,
            _ => self.weekday_slots,
        };
        slots.min(self.daily_max)
    }
}

// ==========================================
// CapacityDirectory
// ==========================================
// Registry of validated capacity records, keyed by maternity id.
// An unknown maternity at lookup time is a configuration error,
// not a business outcome.
#[derive(Debug, Clone, Default)]
pub struct CapacityDirectory {
    by_id: HashMap<String, MaternityCapacity>,
}

impl CapacityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory with the four maternities of the standard network.
    /// Weekly ceilings follow the operator baseline (sum of open days).
    pub fn standard() -> ConfigResult<Self> {
        let mut directory = Self::new();
        directory.register(MaternityCapacity::new("Salvalus", 9, 7, 0, 9, 52)?)?;
        directory.register(MaternityCapacity::new("NotreCare", 6, 2, 0, 6, 32)?)?;
        directory.register(MaternityCapacity::new("Cruzeiro", 3, 1, 0, 3, 16)?)?;
        directory.register(MaternityCapacity::new("Guarulhos", 2, 1, 0, 2, 11)?)?;
        Ok(directory)
    }

    pub fn register(&mut self, capacity: MaternityCapacity) -> ConfigResult<()> {
        if self.by_id.contains_key(&capacity.maternity_id) {
            return Err(ConfigError::DuplicateMaternity {
                maternity_id: capacity.maternity_id,
            });
        }
        self.by_id.insert(capacity.maternity_id.clone(), capacity);
        Ok(())
    }

    pub fn get(&self, maternity_id: &str) -> ConfigResult<&MaternityCapacity> {
        self.by_id
            .get(maternity_id)
            .ok_or_else(|| ConfigError::UnknownMaternity {
                maternity_id: maternity_id.to_string(),
            })
    }

    pub fn maternity_ids(&self) -> impl Iterator<Item = &str> {
        self.by_id.keys().map(String::as_str)
    }
}
