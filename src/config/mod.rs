// ==========================================
// Motor de Agendamento Obstétrico - configuration layer
// ==========================================
// Static catalogs, loaded once at process start and injected
// into the engines as immutable inputs. Malformed configuration
// fails fast here, before any request is processed.
// ==========================================

pub mod capacity;
pub mod error;
pub mod protocols;
pub mod tolerance;

// Re-export core configuration types
pub use capacity::{CapacityDirectory, MaternityCapacity};
pub use error::{ConfigError, ConfigResult};
pub use protocols::{Protocol, ProtocolCatalog};
pub use tolerance::{ToleranceBand, ToleranceTable};
