// ==========================================
// Motor de Agendamento Obstétrico - engine layer
// ==========================================
// Business rule engines. Pure, synchronous computations over
// explicit inputs: catalogs injected at construction, occupancy
// passed per call. No I/O, no hidden caches, no system clock.
// Every rule outputs a reason.
// ==========================================

pub mod diagnosis_classifier;
pub mod ga_reference;
pub mod ideal_date;
pub mod pipeline;
pub mod protocol_resolver;
pub mod slot_allocator;

// Re-export core engines
pub use ga_reference::GaReferenceResolver;
pub use ideal_date::{compute_edd, compute_ideal_date, ga_at_date, EDD_OFFSET_DAYS};
pub use pipeline::{SchedulingPipeline, URGENT_LEAD_TIME_DAYS};
pub use protocol_resolver::ProtocolResolver;
pub use slot_allocator::{SlotAllocator, SEARCH_WINDOW_DAYS};
