// ==========================================
// Motor de Agendamento Obstétrico - slot allocator
// ==========================================
// Bounded forward search from the ideal date. Hard policy
// invariants:
// - never a date before the ideal date (the procedure must not
//   happen earlier than clinically indicated)
// - never a Sunday (slots are policy-zero)
// - day cap AND ISO-week cap must both hold
//
// The allocator reads the occupancy snapshot and never mutates
// it; committing the reservation - and serializing concurrent
// reservations for the same (maternity, date) - is the caller's
// contract.
// ==========================================

use crate::config::capacity::MaternityCapacity;
use crate::domain::occupancy::OccupancyView;
use crate::domain::result::SlotOutcome;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::{debug, instrument};

/// Forward search window: ideal date + 0 through + 7, inclusive.
pub const SEARCH_WINDOW_DAYS: i64 = 7;

// ==========================================
// SlotAllocator
// ==========================================
// Stateless engine.
pub struct SlotAllocator;

impl SlotAllocator {
    pub fn new() -> Self {
        Self
    }

    /// Find the first date at or after `ideal_date` with both day
    /// and week capacity.
    ///
    /// Urgent cases (needed in under the urgent lead time, decided by
    /// the caller) are not searched at all: they are routed to
    /// emergency care, a distinct outcome from Full.
    #[instrument(skip(self, capacity, occupancy), fields(maternity_id = %capacity.maternity_id))]
    pub fn find_slot(
        &self,
        ideal_date: NaiveDate,
        capacity: &MaternityCapacity,
        occupancy: &dyn OccupancyView,
        is_urgent: bool,
    ) -> SlotOutcome {
        if is_urgent {
            debug!("urgent case - skipping slot search, routing to emergency care");
            return SlotOutcome::UrgentReferral;
        }

        for offset in 0..=SEARCH_WINDOW_DAYS {
            let candidate = ideal_date + Duration::days(offset);

            if candidate.weekday() == Weekday::Sun {
                continue;
            }

            let day_cap = capacity.day_cap(candidate);
            let day_used = occupancy.count_for(&capacity.maternity_id, candidate);
            if day_used >= day_cap {
                debug!(%candidate, day_used, day_cap, "day cap reached");
                continue;
            }

            let week = candidate.iso_week();
            let week_used = occupancy.weekly_count_for(&capacity.maternity_id, week);
            if week_used >= capacity.weekly_max {
                debug!(%candidate, week_used, weekly_max = capacity.weekly_max, "weekly cap reached");
                continue;
            }

            return SlotOutcome::Allocated {
                date: candidate,
                days_deferred: offset,
            };
        }

        SlotOutcome::Full
    }
}

impl Default for SlotAllocator {
    fn default() -> Self {
        Self::new()
    }
}
