// ==========================================
// Motor de Agendamento Obstétrico - domain value types
// ==========================================
// Basis: PT-AON-097 (Rev. 4) - priority tiers and routes
// Serialization format: SCREAMING_SNAKE_CASE
// ==========================================

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Reference method (dating method)
// ==========================================
// Which clinical reference governs the pregnancy timeline.
// DUM = last menstrual period (LMP); USG = first ultrasound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceMethod {
    Lmp, // DUM confiável
    Usg, // ultrasound-anchored dating
}

impl fmt::Display for ReferenceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceMethod::Lmp => write!(f, "LMP"),
            ReferenceMethod::Usg => write!(f, "USG"),
        }
    }
}

// ==========================================
// Preferred delivery route
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryRoute {
    Vaginal,
    Cesarean, // cesárea obrigatória/recomendada
    Either,   // via obstétrica
}

impl fmt::Display for DeliveryRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryRoute::Vaginal => write!(f, "VAGINAL"),
            DeliveryRoute::Cesarean => write!(f, "CESAREAN"),
            DeliveryRoute::Either => write!(f, "EITHER"),
        }
    }
}

// ==========================================
// Schedule status
// ==========================================
// Business outcomes are values, never panics:
// - Scheduled: slot found on the ideal date
// - Deferred: slot found within the window, after the ideal date
// - UrgentReferral: needed in under 10 days, routed to emergency care
//   (distinct from Full - no slot search is performed)
// - Full: no slot in the 8-day window
// - Error: dating data insufficient (no DUM, no USG)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    Scheduled,
    Deferred,
    UrgentReferral,
    Full,
    Error,
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleStatus::Scheduled => write!(f, "SCHEDULED"),
            ScheduleStatus::Deferred => write!(f, "DEFERRED"),
            ScheduleStatus::UrgentReferral => write!(f, "URGENT_REFERRAL"),
            ScheduleStatus::Full => write!(f, "FULL"),
            ScheduleStatus::Error => write!(f, "ERROR"),
        }
    }
}

// ==========================================
// GestationalAge - weeks + days value type
// ==========================================
// Display format follows the clinical convention "39s2d".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GestationalAge {
    pub weeks: u32,
    pub days: u32, // 0..=6
}

impl GestationalAge {
    /// Build from weeks + days. `days` beyond 6 rolls into weeks.
    pub fn new(weeks: u32, days: u32) -> Self {
        Self {
            weeks: weeks + days / 7,
            days: days % 7,
        }
    }

    /// Build from a total day count. Negative totals clamp to 0s0d.
    pub fn from_days(total_days: i64) -> Self {
        let total = total_days.max(0) as u32;
        Self {
            weeks: total / 7,
            days: total % 7,
        }
    }

    /// Total gestational age in days.
    pub fn total_days(&self) -> i64 {
        i64::from(self.weeks) * 7 + i64::from(self.days)
    }
}

impl fmt::Display for GestationalAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s{}d", self.weeks, self.days)
    }
}

// ==========================================
// Weekday label (pt-BR)
// ==========================================

/// Portuguese weekday label, as surfaced to operators.
pub fn weekday_label_pt(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Segunda",
        Weekday::Tue => "Terça",
        Weekday::Wed => "Quarta",
        Weekday::Thu => "Quinta",
        Weekday::Fri => "Sexta",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}
