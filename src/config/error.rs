// ==========================================
// Motor de Agendamento Obstétrico - configuration errors
// ==========================================
// Operator/programmer errors, raised at catalog-load or
// capacity-registration time. Business-rule outcomes (ERROR
// input, FULL, urgent) are values in SchedulingResult and
// never travel through this enum.
// ==========================================

use thiserror::Error;

/// Configuration-layer error type
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== Tolerance table =====
    #[error("tolerance table is empty")]
    EmptyToleranceTable,

    #[error("tolerance band {index}: invalid range {min}..={max}")]
    InvalidToleranceRange { index: usize, min: u32, max: u32 },

    #[error("tolerance bands not contiguous: band starting at {found}w, expected {expected}w")]
    NonContiguousToleranceBands { expected: u32, found: u32 },

    // ===== Protocol catalog =====
    #[error("duplicate protocol key: {key}")]
    DuplicateProtocolKey { key: String },

    #[error("protocol {key}: ideal GA {weeks}w outside 20..=42")]
    IdealGaOutOfRange { key: String, weeks: u32 },

    #[error("protocol {key}: priority {priority} outside 1..=4")]
    InvalidPriority { key: String, priority: u8 },

    // ===== Maternity capacity =====
    #[error("maternity {maternity_id}: negative capacity (field={field}, value={value})")]
    NegativeCapacity {
        maternity_id: String,
        field: &'static str,
        value: i64,
    },

    #[error("maternity {maternity_id}: Sunday slots must be 0 by policy (got {slots})")]
    SundayNotClosed { maternity_id: String, slots: i64 },

    #[error("maternity {maternity_id}: weekly max must be at least 1")]
    InvalidWeeklyMax { maternity_id: String },

    #[error("maternity already registered: {maternity_id}")]
    DuplicateMaternity { maternity_id: String },

    #[error("unknown maternity: {maternity_id}")]
    UnknownMaternity { maternity_id: String },

    // ===== Escape hatch =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result alias for the configuration layer
pub type ConfigResult<T> = Result<T, ConfigError>;
