// ==========================================
// Motor de Agendamento Obstétrico - scheduling pipeline
// ==========================================
// Orchestrates the full flow for one request:
// 1. resolve the dating reference (DUM vs USG)
// 2. resolve the governing protocol
// 3. compute ideal date and DPP
// 4. urgency gate (under 10 days -> emergency referral)
// 5. slot search and outcome classification
//
// Synchronous and deterministic: catalogs are injected at
// construction, occupancy and capacity arrive per call, and the
// clock is the caller's `reference_now`. Persisting the result
// and committing the reservation stay with the caller.
// ==========================================

use crate::config::capacity::MaternityCapacity;
use crate::config::protocols::ProtocolCatalog;
use crate::config::tolerance::ToleranceTable;
use crate::domain::occupancy::OccupancyView;
use crate::domain::request::SchedulingRequest;
use crate::domain::result::{GaReference, SchedulingResult, SlotOutcome};
use crate::domain::types::{weekday_label_pt, GestationalAge, ScheduleStatus};
use crate::engine::ga_reference::GaReferenceResolver;
use crate::engine::ideal_date::{compute_edd, compute_ideal_date, ga_at_date};
use crate::engine::protocol_resolver::ProtocolResolver;
use crate::engine::slot_allocator::{SlotAllocator, SEARCH_WINDOW_DAYS};
use tracing::{info, instrument};

/// Cases needed in under this many days are routed to emergency
/// care instead of the elective schedule.
pub const URGENT_LEAD_TIME_DAYS: i64 = 10;

// ==========================================
// SchedulingPipeline
// ==========================================
pub struct SchedulingPipeline {
    ga_resolver: GaReferenceResolver,
    protocol_resolver: ProtocolResolver,
    allocator: SlotAllocator,
}

impl SchedulingPipeline {
    pub fn new(tolerance: ToleranceTable, catalog: ProtocolCatalog) -> Self {
        Self {
            ga_resolver: GaReferenceResolver::new(tolerance),
            protocol_resolver: ProtocolResolver::new(catalog),
            allocator: SlotAllocator::new(),
        }
    }

    /// Pipeline with the shipped PR-DIMEP-PGS-01 table and
    /// PT-AON-097 Rev.4 catalog.
    pub fn standard() -> crate::config::error::ConfigResult<Self> {
        Ok(Self::new(
            ToleranceTable::standard(),
            ProtocolCatalog::standard()?,
        ))
    }

    /// Evaluate one scheduling request against a capacity record and
    /// an occupancy snapshot.
    #[instrument(skip_all, fields(
        patient_id = %request.patient_id,
        maternity_id = %request.maternity_id
    ))]
    pub fn schedule(
        &self,
        request: &SchedulingRequest,
        capacity: &MaternityCapacity,
        occupancy: &dyn OccupancyView,
    ) -> SchedulingResult {
        // 1. Dating reference
        let reference = self.ga_resolver.resolve(
            request.lmp_date,
            request.lmp_reliable,
            request.usg_date,
            request.usg_ga_weeks,
            request.usg_ga_days,
        );
        let (method, reference_date) = match reference {
            GaReference::Resolved {
                method,
                reference_date,
                ..
            } => (method, reference_date),
            GaReference::Unresolvable { rationale } => {
                info!(%rationale, "dating unresolvable - request needs data correction");
                return SchedulingResult {
                    status: ScheduleStatus::Error,
                    scheduled_date: None,
                    ideal_date: None,
                    estimated_due_date: None,
                    days_deferred: 0,
                    reference_method: None,
                    protocol_key: None,
                    ideal_ga: None,
                    ga_at_scheduled: None,
                    weekday_label: None,
                    message: rationale,
                };
            }
        };

        // 2. Governing protocol
        let protocol = self.protocol_resolver.resolve(&request.diagnoses);

        // 3. Ideal date and DPP
        let ideal_date = compute_ideal_date(reference_date, &protocol);
        let estimated_due_date = compute_edd(reference_date);
        let ideal_ga = GestationalAge::new(protocol.ideal_ga_weeks, 0);

        // 4. Urgency gate
        let lead_time_days = (ideal_date - request.reference_now).num_days();
        let is_urgent = lead_time_days < URGENT_LEAD_TIME_DAYS;

        // 5. Slot search and classification
        let outcome = self
            .allocator
            .find_slot(ideal_date, capacity, occupancy, is_urgent);

        let result = match outcome {
            SlotOutcome::UrgentReferral => SchedulingResult {
                status: ScheduleStatus::UrgentReferral,
                scheduled_date: None,
                ideal_date: Some(ideal_date),
                estimated_due_date: Some(estimated_due_date),
                days_deferred: 0,
                reference_method: Some(method),
                protocol_key: Some(protocol.key.clone()),
                ideal_ga: Some(ideal_ga),
                ga_at_scheduled: None,
                weekday_label: None,
                message: format!(
                    "Urgente: interrupção indicada em {lead_time_days} dia(s), abaixo do prazo \
                     mínimo de {URGENT_LEAD_TIME_DAYS} dias - encaminhar à emergência obstétrica"
                ),
            },
            SlotOutcome::Full => SchedulingResult {
                status: ScheduleStatus::Full,
                scheduled_date: None,
                ideal_date: Some(ideal_date),
                estimated_due_date: Some(estimated_due_date),
                days_deferred: 0,
                reference_method: Some(method),
                protocol_key: Some(protocol.key.clone()),
                ideal_ga: Some(ideal_ga),
                ga_at_scheduled: None,
                weekday_label: None,
                message: format!(
                    "Sem vagas em {} na janela de {} a {} - encaminhar para avaliação manual",
                    capacity.maternity_id,
                    ideal_date.format("%d/%m/%Y"),
                    (ideal_date + chrono::Duration::days(SEARCH_WINDOW_DAYS)).format("%d/%m/%Y"),
                ),
            },
            SlotOutcome::Allocated {
                date,
                days_deferred,
            } => {
                let status = if days_deferred == 0 {
                    ScheduleStatus::Scheduled
                } else {
                    ScheduleStatus::Deferred
                };
                let mut message = format!("Data agendada: {}", date.format("%d/%m/%Y"));
                if days_deferred > 0 {
                    message.push_str(&format!(
                        " (adiada {days_deferred} dia(s) por capacidade/domingo)"
                    ));
                }
                SchedulingResult {
                    status,
                    scheduled_date: Some(date),
                    ideal_date: Some(ideal_date),
                    estimated_due_date: Some(estimated_due_date),
                    days_deferred,
                    reference_method: Some(method),
                    protocol_key: Some(protocol.key.clone()),
                    ideal_ga: Some(ideal_ga),
                    ga_at_scheduled: Some(ga_at_date(reference_date, date)),
                    weekday_label: Some(weekday_label_pt(date).to_string()),
                    message,
                }
            }
        };

        info!(
            status = %result.status,
            ideal_date = %ideal_date,
            scheduled_date = ?result.scheduled_date,
            protocol = %protocol.key,
            "scheduling evaluated"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::occupancy::OccupancySnapshot;
    use crate::domain::request::DiagnosisSet;
    use crate::domain::types::ReferenceMethod;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pipeline() -> SchedulingPipeline {
        SchedulingPipeline::standard().unwrap()
    }

    fn capacity() -> MaternityCapacity {
        MaternityCapacity::new("Salvalus", 9, 7, 0, 9, 52).unwrap()
    }

    fn base_request() -> SchedulingRequest {
        SchedulingRequest {
            patient_id: "P-0001".to_string(),
            maternity_id: "Salvalus".to_string(),
            lmp_date: Some(date(2024, 3, 15)),
            lmp_reliable: true,
            usg_date: Some(date(2024, 5, 10)),
            usg_ga_weeks: 8,
            usg_ga_days: 2,
            diagnoses: DiagnosisSet::maternal_only("diabetes gestacional controlado"),
            reference_now: date(2024, 5, 15),
        }
    }

    #[test]
    fn test_error_short_circuits_before_protocol_and_slot() {
        let mut request = base_request();
        request.lmp_date = None;
        request.usg_date = None;
        let result = pipeline().schedule(&request, &capacity(), &OccupancySnapshot::new());
        assert_eq!(result.status, ScheduleStatus::Error);
        assert!(result.message.contains("Impossível calcular"));
        assert!(result.scheduled_date.is_none());
        assert!(result.ideal_date.is_none());
        assert!(result.reference_method.is_none());
    }

    #[test]
    fn test_scheduled_on_free_ideal_date() {
        // Example 1 flow: LMP governs, ideal = 2024-12-13 (a Friday)
        let result = pipeline().schedule(&base_request(), &capacity(), &OccupancySnapshot::new());
        assert_eq!(result.status, ScheduleStatus::Scheduled);
        assert_eq!(result.reference_method, Some(ReferenceMethod::Lmp));
        assert_eq!(result.ideal_date, Some(date(2024, 12, 13)));
        assert_eq!(result.scheduled_date, Some(date(2024, 12, 13)));
        assert_eq!(result.estimated_due_date, Some(date(2024, 12, 20)));
        assert_eq!(result.days_deferred, 0);
        assert_eq!(result.protocol_key.as_deref(), Some("dmg_sem_insulina"));
        assert_eq!(result.weekday_label.as_deref(), Some("Sexta"));
        assert_eq!(result.ga_at_scheduled.unwrap().to_string(), "39s0d");
    }

    #[test]
    fn test_urgent_referral_when_ideal_is_near() {
        let mut request = base_request();
        request.reference_now = date(2024, 12, 10); // 3 days before ideal
        let result = pipeline().schedule(&request, &capacity(), &OccupancySnapshot::new());
        assert_eq!(result.status, ScheduleStatus::UrgentReferral);
        assert!(result.scheduled_date.is_none());
        // estimated DPP and method still populated on the urgent branch
        assert_eq!(result.estimated_due_date, Some(date(2024, 12, 20)));
        assert_eq!(result.reference_method, Some(ReferenceMethod::Lmp));
        assert!(result.message.contains("emergência"));
    }

    #[test]
    fn test_urgent_when_ideal_already_past() {
        let mut request = base_request();
        request.reference_now = date(2024, 12, 20);
        let result = pipeline().schedule(&request, &capacity(), &OccupancySnapshot::new());
        assert_eq!(result.status, ScheduleStatus::UrgentReferral);
    }

    #[test]
    fn test_full_when_window_exhausted() {
        let request = base_request();
        let cap = MaternityCapacity::new("Salvalus", 1, 1, 0, 1, 2).unwrap();
        let mut occupancy = OccupancySnapshot::new();
        for offset in 0..=SEARCH_WINDOW_DAYS {
            occupancy.record("Salvalus", date(2024, 12, 13) + chrono::Duration::days(offset));
        }
        let result = pipeline().schedule(&request, &cap, &occupancy);
        assert_eq!(result.status, ScheduleStatus::Full);
        assert!(result.scheduled_date.is_none());
        assert_eq!(result.ideal_date, Some(date(2024, 12, 13)));
        assert_eq!(result.estimated_due_date, Some(date(2024, 12, 20)));
        assert!(result.message.contains("Sem vagas"));
    }

    #[test]
    fn test_deferred_when_ideal_date_is_occupied() {
        let request = base_request();
        let mut occupancy = OccupancySnapshot::new();
        occupancy.record_many("Salvalus", date(2024, 12, 13), 9);
        let result = pipeline().schedule(&request, &capacity(), &occupancy);
        assert_eq!(result.status, ScheduleStatus::Deferred);
        // Saturday 12-14 has room
        assert_eq!(result.scheduled_date, Some(date(2024, 12, 14)));
        assert_eq!(result.days_deferred, 1);
        assert!(result.message.contains("adiada"));
    }
}
