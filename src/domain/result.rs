// ==========================================
// Motor de Agendamento Obstétrico - result types
// ==========================================
// Business outcomes are values, never exceptions.
// Callers branch on `status` / enum variants.
// ==========================================

use crate::domain::types::{GestationalAge, ReferenceMethod, ScheduleStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// GaReference - dating resolution outcome
// ==========================================
// Encoded as an enum so the invariant "ERROR implies no
// reference date" is unrepresentable-by-construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GaReference {
    Resolved {
        method: ReferenceMethod,
        reference_date: NaiveDate,
        /// Human-readable justification (pt-BR), including the numeric
        /// discrepancy and tolerance whenever a comparison was made.
        rationale: String,
        discrepancy_days: Option<i64>,
        tolerance_used_days: Option<i64>,
    },
    /// Data-quality problem requiring human correction; never retried.
    Unresolvable { rationale: String },
}

impl GaReference {
    pub fn reference_date(&self) -> Option<NaiveDate> {
        match self {
            GaReference::Resolved { reference_date, .. } => Some(*reference_date),
            GaReference::Unresolvable { .. } => None,
        }
    }

    pub fn rationale(&self) -> &str {
        match self {
            GaReference::Resolved { rationale, .. } => rationale,
            GaReference::Unresolvable { rationale } => rationale,
        }
    }
}

// ==========================================
// SlotOutcome - allocator result
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotOutcome {
    /// First date at or after the ideal date with day and week capacity.
    Allocated {
        date: NaiveDate,
        days_deferred: i64,
    },
    /// Needed in under the urgent lead time: no search is performed,
    /// the case is routed to emergency care. Not the same as Full.
    UrgentReferral,
    /// No capacity anywhere in the search window.
    Full,
}

// ==========================================
// SchedulingResult - pipeline output
// ==========================================
// `estimated_due_date` and `reference_method` are populated on
// every branch except Error, where only `message` is guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingResult {
    pub status: ScheduleStatus,

    // ===== Dates =====
    pub scheduled_date: Option<NaiveDate>,
    pub ideal_date: Option<NaiveDate>,
    pub estimated_due_date: Option<NaiveDate>, // DPP
    pub days_deferred: i64,

    // ===== Dating =====
    pub reference_method: Option<ReferenceMethod>,

    // ===== Clinical context =====
    /// Protocol key that governed the ideal GA (or the 39-week default).
    pub protocol_key: Option<String>,
    pub ideal_ga: Option<GestationalAge>,
    /// Gestational age on the scheduled date, for operator review.
    pub ga_at_scheduled: Option<GestationalAge>,
    /// Weekday label of the scheduled date (pt-BR).
    pub weekday_label: Option<String>,

    // ===== Narrative =====
    pub message: String,
}
