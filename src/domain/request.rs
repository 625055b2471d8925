// ==========================================
// Motor de Agendamento Obstétrico - scheduling request
// ==========================================
// Transient value objects: created per request, discarded
// after the pipeline returns a result. Never mutated in place.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// DiagnosisSet
// ==========================================
// Maternal + fetal diagnosis keys attached to one request.
// Entries may be catalog keys ("hipertensao_gestacional") or
// free text routed through the diagnosis classifier.
// May be empty: the resolver falls back to the 39-week default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosisSet {
    pub maternal: Vec<String>,
    pub fetal: Vec<String>,
}

impl DiagnosisSet {
    pub fn new(maternal: Vec<String>, fetal: Vec<String>) -> Self {
        Self { maternal, fetal }
    }

    /// Single maternal diagnosis, the common import-path case.
    pub fn maternal_only(diagnosis: impl Into<String>) -> Self {
        Self {
            maternal: vec![diagnosis.into()],
            fetal: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.maternal.is_empty() && self.fetal.is_empty()
    }

    /// All diagnosis entries, maternal first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.maternal
            .iter()
            .chain(self.fetal.iter())
            .map(String::as_str)
    }
}

// ==========================================
// SchedulingRequest
// ==========================================
// One patient, one maternity, one evaluation.
// `reference_now` is always injected - the engine never reads
// the system clock, so every run is reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingRequest {
    pub patient_id: String,
    pub maternity_id: String,

    // ===== Dating inputs =====
    pub lmp_date: Option<NaiveDate>, // DUM
    pub lmp_reliable: bool,          // DUM confiável
    pub usg_date: Option<NaiveDate>, // first ultrasound exam date
    pub usg_ga_weeks: u32,           // GA at the ultrasound, weeks part
    pub usg_ga_days: u32,            // GA at the ultrasound, days part (0..=6)

    // ===== Clinical inputs =====
    pub diagnoses: DiagnosisSet,

    // ===== Clock =====
    pub reference_now: NaiveDate,
}
