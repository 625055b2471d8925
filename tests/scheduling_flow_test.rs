// ==========================================
// End-to-end scheduling flow tests
// ==========================================
// Exercises the full pipeline against the shipped catalogs:
// dating resolution, protocol selection, date math, urgency
// gate and slot search.
// ==========================================

use chrono::NaiveDate;
use obstetric_aps::{
    logging, CapacityDirectory, DiagnosisSet, MaternityCapacity, OccupancySnapshot,
    ReferenceMethod, ScheduleStatus, SchedulingPipeline, SchedulingRequest,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn request(maternity_id: &str) -> SchedulingRequest {
    SchedulingRequest {
        patient_id: "P-0001".to_string(),
        maternity_id: maternity_id.to_string(),
        lmp_date: None,
        lmp_reliable: false,
        usg_date: None,
        usg_ga_weeks: 0,
        usg_ga_days: 0,
        diagnoses: DiagnosisSet::default(),
        reference_now: date(2024, 5, 15),
    }
}

#[test]
fn test_reliable_lmp_confirmed_by_usg_schedules_at_39_weeks() {
    // LMP 2024-03-15 reliable, USG 2024-05-10 at 8w2d, DMG controlada:
    // discrepancy 2d <= tolerance 5d, LMP governs, ideal = LMP + 273d
    logging::init_test();
    let pipeline = SchedulingPipeline::standard().unwrap();
    let directory = CapacityDirectory::standard().unwrap();

    let mut req = request("Salvalus");
    req.lmp_date = Some(date(2024, 3, 15));
    req.lmp_reliable = true;
    req.usg_date = Some(date(2024, 5, 10));
    req.usg_ga_weeks = 8;
    req.usg_ga_days = 2;
    req.diagnoses = DiagnosisSet::maternal_only("diabetes gestacional controlado");

    let result = pipeline.schedule(
        &req,
        directory.get("Salvalus").unwrap(),
        &OccupancySnapshot::new(),
    );

    assert_eq!(result.status, ScheduleStatus::Scheduled);
    assert_eq!(result.reference_method, Some(ReferenceMethod::Lmp));
    assert_eq!(result.ideal_date, Some(date(2024, 12, 13)));
    assert_eq!(result.estimated_due_date, Some(date(2024, 12, 20)));
    assert_eq!(result.protocol_key.as_deref(), Some("dmg_sem_insulina"));
}

#[test]
fn test_usg_only_dating_at_37_weeks() {
    // No LMP, USG 2024-05-01 at 10w3d, hipertensao_gestacional (37w):
    // reference = USG - 73d = 2024-02-18, ideal = reference + 259d
    let pipeline = SchedulingPipeline::standard().unwrap();
    let directory = CapacityDirectory::standard().unwrap();

    let mut req = request("NotreCare");
    req.usg_date = Some(date(2024, 5, 1));
    req.usg_ga_weeks = 10;
    req.usg_ga_days = 3;
    req.diagnoses = DiagnosisSet::maternal_only("hipertensao_gestacional");
    req.reference_now = date(2024, 5, 2);

    let result = pipeline.schedule(
        &req,
        directory.get("NotreCare").unwrap(),
        &OccupancySnapshot::new(),
    );

    assert_eq!(result.reference_method, Some(ReferenceMethod::Usg));
    assert_eq!(result.ideal_date, Some(date(2024, 11, 3)));
    // 2024-11-03 is a Sunday: the slot lands on Monday
    assert_eq!(result.status, ScheduleStatus::Deferred);
    assert_eq!(result.scheduled_date, Some(date(2024, 11, 4)));
    assert_eq!(result.days_deferred, 1);
    assert_eq!(result.weekday_label.as_deref(), Some("Segunda"));
}

#[test]
fn test_no_dating_data_is_a_terminal_error() {
    let pipeline = SchedulingPipeline::standard().unwrap();
    let directory = CapacityDirectory::standard().unwrap();

    let result = pipeline.schedule(
        &request("Cruzeiro"),
        directory.get("Cruzeiro").unwrap(),
        &OccupancySnapshot::new(),
    );

    assert_eq!(result.status, ScheduleStatus::Error);
    assert!(result.message.contains("Impossível calcular"));
    assert!(result.scheduled_date.is_none());
    assert!(result.estimated_due_date.is_none());
}

#[test]
fn test_most_conservative_protocol_governs() {
    // dmg_insulina (39w) + rcf_grave (36w) -> 36w governs
    let pipeline = SchedulingPipeline::standard().unwrap();
    let directory = CapacityDirectory::standard().unwrap();

    let mut req = request("Salvalus");
    req.lmp_date = Some(date(2024, 3, 15));
    req.lmp_reliable = true;
    req.diagnoses = DiagnosisSet::new(
        vec!["dmg_insulina".to_string()],
        vec!["rcf_grave".to_string()],
    );

    let result = pipeline.schedule(
        &req,
        directory.get("Salvalus").unwrap(),
        &OccupancySnapshot::new(),
    );

    assert_eq!(result.protocol_key.as_deref(), Some("rcf_grave"));
    // ideal = LMP + 36 weeks
    assert_eq!(result.ideal_date, Some(date(2024, 3, 15) + chrono::Duration::days(252)));
}

#[test]
fn test_sunday_ideal_with_full_monday_lands_on_tuesday() {
    // Ideal on Sunday 2024-12-01, Monday at daily cap, Tuesday free
    let pipeline = SchedulingPipeline::standard().unwrap();
    let capacity = MaternityCapacity::new("Guarulhos", 2, 1, 0, 2, 11).unwrap();

    // default protocol (39w): pick LMP so that LMP + 273d = 2024-12-01
    let mut req = request("Guarulhos");
    req.lmp_date = Some(date(2024, 12, 1) - chrono::Duration::days(273));
    req.lmp_reliable = true;
    req.reference_now = date(2024, 5, 15);

    let mut occupancy = OccupancySnapshot::new();
    occupancy.record_many("Guarulhos", date(2024, 12, 2), 2);

    let result = pipeline.schedule(&req, &capacity, &occupancy);

    assert_eq!(result.status, ScheduleStatus::Deferred);
    assert_eq!(result.scheduled_date, Some(date(2024, 12, 3)));
    assert_eq!(result.days_deferred, 2);
    assert_eq!(result.weekday_label.as_deref(), Some("Terça"));
}

#[test]
fn test_urgent_case_routes_to_emergency_not_full() {
    let pipeline = SchedulingPipeline::standard().unwrap();
    let directory = CapacityDirectory::standard().unwrap();

    let mut req = request("Salvalus");
    req.lmp_date = Some(date(2024, 3, 15));
    req.lmp_reliable = true;
    req.diagnoses = DiagnosisSet::maternal_only("pre_eclampsia_grave"); // 34w
    // ideal = LMP + 238d = 2024-11-08; 5 days out -> urgent
    req.reference_now = date(2024, 11, 3);

    let result = pipeline.schedule(
        &req,
        directory.get("Salvalus").unwrap(),
        &OccupancySnapshot::new(),
    );

    assert_eq!(result.status, ScheduleStatus::UrgentReferral);
    assert_ne!(result.status, ScheduleStatus::Full);
    assert!(result.scheduled_date.is_none());
    assert_eq!(result.ideal_date, Some(date(2024, 11, 8)));
    assert!(result.estimated_due_date.is_some());
    assert!(result.message.contains("emergência"));
}
