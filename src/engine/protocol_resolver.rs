// ==========================================
// Motor de Agendamento Obstétrico - protocol resolver
// ==========================================
// Selects the single governing protocol for a request.
// Conflict rule: smallest ideal GA wins (most conservative,
// earliest intervention); ties break on the lowest numeric
// priority (1 beats 4). Pure and total - never errors.
// ==========================================

use crate::config::protocols::{Protocol, ProtocolCatalog};
use crate::domain::request::DiagnosisSet;
use crate::engine::diagnosis_classifier;
use tracing::{debug, instrument};

// ==========================================
// ProtocolResolver
// ==========================================
pub struct ProtocolResolver {
    catalog: ProtocolCatalog,
}

impl ProtocolResolver {
    pub fn new(catalog: ProtocolCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve the governing protocol for a diagnosis set.
    ///
    /// Each entry is tried first as an exact catalog key, then as
    /// free text through the classifier. Unknown entries are ignored.
    /// With no match at all, the 39-week default applies. The result
    /// depends only on the set of matched keys, not their order.
    #[instrument(skip(self, diagnoses), fields(entries = diagnoses.maternal.len() + diagnoses.fetal.len()))]
    pub fn resolve(&self, diagnoses: &DiagnosisSet) -> Protocol {
        let mut selected: Option<&Protocol> = None;

        for entry in diagnoses.iter() {
            if let Some(protocol) = self.catalog.get(entry.trim()) {
                selected = Some(more_conservative(selected, protocol));
                continue;
            }
            for key in diagnosis_classifier::classify(entry) {
                if let Some(protocol) = self.catalog.get(key) {
                    selected = Some(more_conservative(selected, protocol));
                } else {
                    debug!(key, "classifier produced a key absent from the catalog");
                }
            }
        }

        selected
            .cloned()
            .unwrap_or_else(|| self.catalog.default_protocol())
    }
}

/// Keep the earlier ideal GA; on a tie, the lower priority value.
fn more_conservative<'a>(current: Option<&'a Protocol>, candidate: &'a Protocol) -> &'a Protocol {
    match current {
        None => candidate,
        Some(current) => {
            let current_rank = (current.ideal_ga_weeks, current.priority);
            let candidate_rank = (candidate.ideal_ga_weeks, candidate.priority);
            if candidate_rank < current_rank {
                candidate
            } else {
                current
            }
        }
    }
}
