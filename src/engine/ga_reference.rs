// ==========================================
// Motor de Agendamento Obstétrico - dating reference resolver
// ==========================================
// Basis: PR-DIMEP-PGS-01 - DUM vs USG comparison
// ==========================================
// Decides which clinical reference date governs the pregnancy
// timeline. Pure function of its inputs plus the static
// tolerance table.
//
// Cases:
// 1. no DUM and no USG            -> unresolvable
// 2. DUM absent/unreliable        -> USG (or unresolvable without USG)
// 3. reliable DUM, no USG         -> DUM
// 4. both present                 -> compare against tolerance band
// ==========================================

use crate::config::tolerance::ToleranceTable;
use crate::domain::result::GaReference;
use crate::domain::types::ReferenceMethod;
use chrono::{Duration, NaiveDate};
use tracing::instrument;

// ==========================================
// GaReferenceResolver
// ==========================================
pub struct GaReferenceResolver {
    tolerance: ToleranceTable,
}

impl GaReferenceResolver {
    pub fn new(tolerance: ToleranceTable) -> Self {
        Self { tolerance }
    }

    /// Resolve the authoritative dating reference.
    ///
    /// The returned reference date is always LMP-equivalent: for USG
    /// dating it is the exam date minus the GA measured at the exam.
    #[instrument(skip(self))]
    pub fn resolve(
        &self,
        lmp_date: Option<NaiveDate>,
        lmp_reliable: bool,
        usg_date: Option<NaiveDate>,
        usg_ga_weeks: u32,
        usg_ga_days: u32,
    ) -> GaReference {
        // Case 1: no dating information at all
        if lmp_date.is_none() && usg_date.is_none() {
            return GaReference::Unresolvable {
                rationale: "Impossível calcular: nem DUM nem USG disponíveis".to_string(),
            };
        }

        let usg_ga_total_days = i64::from(usg_ga_weeks) * 7 + i64::from(usg_ga_days);

        // Case 2: DUM absent or not reliable -> USG governs
        let lmp = match lmp_date {
            Some(lmp) if lmp_reliable => lmp,
            _ => {
                let Some(usg) = usg_date else {
                    return GaReference::Unresolvable {
                        rationale: "DUM não disponível/confiável e USG não informado".to_string(),
                    };
                };
                let rationale = if lmp_date.is_some() {
                    "DUM não confiável - usando USG como base"
                } else {
                    "DUM não informada - usando USG como base"
                };
                return GaReference::Resolved {
                    method: ReferenceMethod::Usg,
                    reference_date: usg - Duration::days(usg_ga_total_days),
                    rationale: rationale.to_string(),
                    discrepancy_days: None,
                    tolerance_used_days: None,
                };
            }
        };

        // Case 3: reliable DUM, no ultrasound
        let Some(usg) = usg_date else {
            return GaReference::Resolved {
                method: ReferenceMethod::Lmp,
                reference_date: lmp,
                rationale: "Apenas DUM confiável disponível".to_string(),
                discrepancy_days: None,
                tolerance_used_days: None,
            };
        };

        // Case 4: both present - compare DUM-derived GA at the exam
        // against the GA measured by the exam
        let ga_by_lmp_days = (usg - lmp).num_days();
        let discrepancy = (ga_by_lmp_days - usg_ga_total_days).abs();
        let tolerance = self.tolerance.tolerance_for(usg_ga_weeks);

        if discrepancy <= tolerance {
            GaReference::Resolved {
                method: ReferenceMethod::Lmp,
                reference_date: lmp,
                rationale: format!(
                    "DUM confiável confirmada por USG (diferença {discrepancy}d ≤ tolerância {tolerance}d)"
                ),
                discrepancy_days: Some(discrepancy),
                tolerance_used_days: Some(tolerance),
            }
        } else {
            GaReference::Resolved {
                method: ReferenceMethod::Usg,
                reference_date: usg - Duration::days(usg_ga_total_days),
                rationale: format!(
                    "Discordância DUM/USG (diferença {discrepancy}d > tolerância {tolerance}d) - usando USG"
                ),
                discrepancy_days: Some(discrepancy),
                tolerance_used_days: Some(tolerance),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> GaReferenceResolver {
        GaReferenceResolver::new(ToleranceTable::standard())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_data_is_unresolvable() {
        let result = resolver().resolve(None, false, None, 0, 0);
        match result {
            GaReference::Unresolvable { rationale } => {
                assert!(rationale.contains("Impossível calcular"));
            }
            other => panic!("expected Unresolvable, got {other:?}"),
        }
    }

    #[test]
    fn test_unreliable_lmp_without_usg_is_unresolvable() {
        let result = resolver().resolve(Some(date(2024, 3, 15)), false, None, 0, 0);
        assert!(matches!(result, GaReference::Unresolvable { .. }));
    }

    #[test]
    fn test_usg_only_anchors_reference_at_exam_minus_ga() {
        // spec example: USG 2024-05-01 at 10w3d -> reference 2024-02-18
        let result = resolver().resolve(None, false, Some(date(2024, 5, 1)), 10, 3);
        match result {
            GaReference::Resolved {
                method,
                reference_date,
                ..
            } => {
                assert_eq!(method, ReferenceMethod::Usg);
                assert_eq!(reference_date, date(2024, 2, 18));
            }
            other => panic!("expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn test_unreliable_lmp_falls_back_to_usg() {
        let result = resolver().resolve(
            Some(date(2024, 3, 1)),
            false,
            Some(date(2024, 5, 1)),
            10,
            0,
        );
        match result {
            GaReference::Resolved {
                method, rationale, ..
            } => {
                assert_eq!(method, ReferenceMethod::Usg);
                assert!(rationale.contains("não confiável"));
            }
            other => panic!("expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn test_reliable_lmp_only() {
        let lmp = date(2024, 3, 15);
        let result = resolver().resolve(Some(lmp), true, None, 0, 0);
        match result {
            GaReference::Resolved {
                method,
                reference_date,
                ..
            } => {
                assert_eq!(method, ReferenceMethod::Lmp);
                assert_eq!(reference_date, lmp);
            }
            other => panic!("expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn test_discrepancy_within_tolerance_keeps_lmp() {
        // spec example 1: LMP 2024-03-15, USG 2024-05-10 at 8w2d
        // GA by LMP = 56d, GA by USG = 58d, discrepancy 2 <= tolerance 5
        let lmp = date(2024, 3, 15);
        let result = resolver().resolve(Some(lmp), true, Some(date(2024, 5, 10)), 8, 2);
        match result {
            GaReference::Resolved {
                method,
                reference_date,
                discrepancy_days,
                tolerance_used_days,
                rationale,
            } => {
                assert_eq!(method, ReferenceMethod::Lmp);
                assert_eq!(reference_date, lmp);
                assert_eq!(discrepancy_days, Some(2));
                assert_eq!(tolerance_used_days, Some(5));
                assert!(rationale.contains("2d"));
                assert!(rationale.contains("5d"));
            }
            other => panic!("expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn test_discrepancy_beyond_tolerance_switches_to_usg() {
        // GA by LMP = 70d, GA by USG at 8w0d = 56d, discrepancy 14 > 5
        let lmp = date(2024, 3, 1);
        let usg = date(2024, 5, 10);
        let result = resolver().resolve(Some(lmp), true, Some(usg), 8, 0);
        match result {
            GaReference::Resolved {
                method,
                reference_date,
                discrepancy_days,
                ..
            } => {
                assert_eq!(method, ReferenceMethod::Usg);
                assert_eq!(reference_date, usg - Duration::days(56));
                assert_eq!(discrepancy_days, Some(14));
            }
            other => panic!("expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn test_wider_tolerance_at_later_ga() {
        // Same 14-day discrepancy is acceptable at 16 weeks (tolerance 21d)
        let lmp = date(2024, 1, 1);
        let usg = lmp + Duration::days(16 * 7 + 14);
        let result = resolver().resolve(Some(lmp), true, Some(usg), 16, 0);
        match result {
            GaReference::Resolved { method, .. } => assert_eq!(method, ReferenceMethod::Lmp),
            other => panic!("expected Resolved, got {other:?}"),
        }
    }
}
