// ==========================================
// Motor de Agendamento Obstétrico - ideal date calculator
// ==========================================
// Calendar arithmetic over the resolved reference date.
// The reference date is always LMP-equivalent, so the estimated
// due date (DPP) is reference + 280 days regardless of protocol.
// ==========================================

use crate::config::protocols::Protocol;
use crate::domain::types::GestationalAge;
use chrono::{Duration, NaiveDate};

/// DPP convention: 40 weeks from the LMP-equivalent reference.
pub const EDD_OFFSET_DAYS: i64 = 280;

/// Ideal procedure date: reference + ideal GA + protocol margin.
pub fn compute_ideal_date(reference_date: NaiveDate, protocol: &Protocol) -> NaiveDate {
    reference_date
        + Duration::days(i64::from(protocol.ideal_ga_weeks) * 7 + protocol.margin_days)
}

/// Estimated due date (DPP).
pub fn compute_edd(reference_date: NaiveDate) -> NaiveDate {
    reference_date + Duration::days(EDD_OFFSET_DAYS)
}

/// Gestational age reached on `target`, given the reference date.
pub fn ga_at_date(reference_date: NaiveDate, target: NaiveDate) -> GestationalAge {
    GestationalAge::from_days((target - reference_date).num_days())
}
