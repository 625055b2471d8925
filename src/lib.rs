// ==========================================
// Motor de Agendamento Obstétrico - core library
// ==========================================
// Basis: PT-AON-097 (Rev. 4) obstetric protocols
//        PR-DIMEP-PGS-01 DUM/USG tolerance table
// Positioning: decision-support core - the caller owns
// persistence, transactions and notification delivery
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and value types
pub mod domain;

// Configuration layer - static catalogs, validated at load
pub mod config;

// Engine layer - business rules
pub mod engine;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{DeliveryRoute, GestationalAge, ReferenceMethod, ScheduleStatus};

// Domain entities
pub use domain::{
    DiagnosisSet, GaReference, OccupancySnapshot, OccupancyView, SchedulingRequest,
    SchedulingResult, SlotOutcome,
};

// Configuration
pub use config::{
    CapacityDirectory, ConfigError, MaternityCapacity, Protocol, ProtocolCatalog, ToleranceBand,
    ToleranceTable,
};

// Engines
pub use engine::{GaReferenceResolver, ProtocolResolver, SchedulingPipeline, SlotAllocator};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// System name
pub const APP_NAME: &str = "Motor de Agendamento Obstétrico";

// Protocol catalog revision shipped with this build
pub const PROTOCOL_VERSION: &str = "PT-AON-097 Rev.4";
