// ==========================================
// Motor de Agendamento Obstétrico - occupancy view
// ==========================================
// The occupancy ledger is owned by the caller's storage layer.
// The core sees a read-only snapshot per invocation and never
// mutates it; committing a reservation (and any serialization
// around the read-then-write race) is the caller's contract.
// ==========================================

use chrono::{Datelike, IsoWeek, NaiveDate};
use std::collections::HashMap;

// ==========================================
// Trait: OccupancyView
// ==========================================
// Read-only snapshot of already-scheduled, non-rejected
// procedures per maternity.
pub trait OccupancyView {
    /// Scheduled count for a maternity on a calendar date.
    fn count_for(&self, maternity_id: &str, date: NaiveDate) -> u32;

    /// Scheduled count for a maternity over an ISO week.
    fn weekly_count_for(&self, maternity_id: &str, week: IsoWeek) -> u32;
}

// ==========================================
// OccupancySnapshot - map-backed implementation
// ==========================================
// Built by the caller from its store before each pipeline run.
// The weekly aggregate is derived on `record`, so day and week
// counts can never drift apart.
#[derive(Debug, Clone, Default)]
pub struct OccupancySnapshot {
    daily: HashMap<(String, NaiveDate), u32>,
    weekly: HashMap<(String, i32, u32), u32>,
}

impl OccupancySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one scheduled procedure.
    pub fn record(&mut self, maternity_id: &str, date: NaiveDate) {
        *self
            .daily
            .entry((maternity_id.to_string(), date))
            .or_insert(0) += 1;
        let week = date.iso_week();
        *self
            .weekly
            .entry((maternity_id.to_string(), week.year(), week.week()))
            .or_insert(0) += 1;
    }

    /// Register `count` scheduled procedures on one date.
    pub fn record_many(&mut self, maternity_id: &str, date: NaiveDate, count: u32) {
        for _ in 0..count {
            self.record(maternity_id, date);
        }
    }
}

impl OccupancyView for OccupancySnapshot {
    fn count_for(&self, maternity_id: &str, date: NaiveDate) -> u32 {
        self.daily
            .get(&(maternity_id.to_string(), date))
            .copied()
            .unwrap_or(0)
    }

    fn weekly_count_for(&self, maternity_id: &str, week: IsoWeek) -> u32 {
        self.weekly
            .get(&(maternity_id.to_string(), week.year(), week.week()))
            .copied()
            .unwrap_or(0)
    }
}
