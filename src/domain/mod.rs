// ==========================================
// Motor de Agendamento Obstétrico - domain layer
// ==========================================
// Entities, value types and business interfaces.
// No data access, no engine logic.
// ==========================================

pub mod occupancy;
pub mod request;
pub mod result;
pub mod types;

// Re-export core types
pub use occupancy::{OccupancySnapshot, OccupancyView};
pub use request::{DiagnosisSet, SchedulingRequest};
pub use result::{GaReference, SchedulingResult, SlotOutcome};
pub use types::{weekday_label_pt, DeliveryRoute, GestationalAge, ReferenceMethod, ScheduleStatus};
