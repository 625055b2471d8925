// ==========================================
// Motor de Agendamento Obstétrico - protocol catalog
// ==========================================
// Basis: PT-AON-097 (Rev. 4 - 27/09/2024) and PR-GNDI-PPS-27
// Diagnosis key -> ideal GA for interruption, clinical priority
// and preferred delivery route. Loaded once at process start.
//
// Emergencies whose protocol is immediate interruption
// (eclampsia, placental abruption) are not elective-scheduling
// entries and do not appear here; they route to emergency care
// upstream of this engine.
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::DeliveryRoute;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ideal GA applied when no diagnosis matches any protocol.
pub const DEFAULT_IDEAL_GA_WEEKS: u32 = 39;

// ==========================================
// Protocol
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Protocol {
    /// Immutable identifier (catalog key).
    pub key: String,
    /// Ideal gestational age for the procedure, in weeks (20..=42).
    pub ideal_ga_weeks: u32,
    /// Extra allowed margin in days beyond the standard search window.
    pub margin_days: i64,
    /// 1=critical, 2=high, 3=moderate, 4=routine.
    pub priority: u8,
    pub preferred_route: DeliveryRoute,
    pub notes: Option<String>,
}

// ==========================================
// ProtocolCatalog
// ==========================================
// Static, versioned table (see crate::PROTOCOL_VERSION).
// Keys are unique; validation happens once, at load.
#[derive(Debug, Clone)]
pub struct ProtocolCatalog {
    by_key: HashMap<String, Protocol>,
}

impl ProtocolCatalog {
    /// Validate and build a catalog.
    pub fn new(protocols: Vec<Protocol>) -> ConfigResult<Self> {
        let mut by_key = HashMap::with_capacity(protocols.len());
        for protocol in protocols {
            if !(20..=42).contains(&protocol.ideal_ga_weeks) {
                return Err(ConfigError::IdealGaOutOfRange {
                    key: protocol.key,
                    weeks: protocol.ideal_ga_weeks,
                });
            }
            if !(1..=4).contains(&protocol.priority) {
                return Err(ConfigError::InvalidPriority {
                    key: protocol.key,
                    priority: protocol.priority,
                });
            }
            if by_key.contains_key(&protocol.key) {
                return Err(ConfigError::DuplicateProtocolKey { key: protocol.key });
            }
            by_key.insert(protocol.key.clone(), protocol);
        }
        Ok(Self { by_key })
    }

    /// The shipped PT-AON-097 Rev.4 catalog.
    pub fn standard() -> ConfigResult<Self> {
        Self::new(standard_protocols())
    }

    pub fn get(&self, key: &str) -> Option<&Protocol> {
        self.by_key.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Fallback protocol: elective term scheduling at 39 weeks.
    pub fn default_protocol(&self) -> Protocol {
        Protocol {
            key: "padrao".to_string(),
            ideal_ga_weeks: DEFAULT_IDEAL_GA_WEEKS,
            margin_days: 0,
            priority: 4,
            preferred_route: DeliveryRoute::Either,
            notes: Some("Padrão 39s - sem protocolo específico".to_string()),
        }
    }
}

fn entry(
    key: &str,
    ideal_ga_weeks: u32,
    priority: u8,
    preferred_route: DeliveryRoute,
    notes: &str,
) -> Protocol {
    Protocol {
        key: key.to_string(),
        ideal_ga_weeks,
        margin_days: 0,
        priority,
        preferred_route,
        notes: Some(notes.to_string()),
    }
}

/// PT-AON-097 Rev.4 protocol table.
fn standard_protocols() -> Vec<Protocol> {
    use DeliveryRoute::{Cesarean, Either};

    vec![
        // ===== Elective =====
        entry("desejo_materno", 39, 3, Cesarean, "39 semanas (PT-AON-097)"),
        entry("laqueadura", 39, 3, Cesarean, "39 semanas (PT-AON-097)"),
        // ===== Hypertensive disorders =====
        entry("hac", 39, 3, Either, "HAC compensada (PT-AON-097)"),
        entry("hac_dificil", 37, 2, Either, "3 drogas - difícil controle (PT-AON-097)"),
        entry("hipertensao_gestacional", 37, 2, Either, ">36sem: Doppler+PBF semanal (PT-AON-097)"),
        entry("pre_eclampsia_sem_deterioracao", 37, 2, Either, "Sem deterioração clínica (PT-AON-097)"),
        entry("pre_eclampsia_grave", 34, 1, Either, "Protocolo SHEG >28sem (PT-AON-097)"),
        entry("sindrome_hellp", 34, 1, Either, "Após estabilização materna"),
        // ===== Diabetes =====
        entry("dmg_sem_insulina", 39, 3, Either, "Bom controle, sem repercussão fetal (PT-AON-097)"),
        entry("dmg_sem_insulina_descomp", 37, 2, Either, "Descontrole ou repercussão fetal (PT-AON-097)"),
        entry("dmg_insulina", 39, 2, Either, "Com insulina, bom controle (PT-AON-097)"),
        entry("dmg_insulina_descomp", 37, 2, Either, "Descontrole glicêmico (PT-AON-097)"),
        entry("dm_pregestacional", 38, 2, Either, "DM1/DM2 bom controle, sem complicações (PT-AON-097)"),
        entry("dm_pregestacional_descomp", 36, 1, Either, "Descontrole ou complicações clínicas/obstétricas (PT-AON-097)"),
        // ===== Placental =====
        entry("placenta_previa_total", 36, 1, Cesarean, "Cesárea obrigatória - risco sangramento"),
        entry("placenta_previa_parcial", 37, 2, Cesarean, "Avaliar distância colo - risco sangramento"),
        entry("placenta_baixa", 38, 2, Either, "Vigilância por sangramento"),
        entry("placenta_acreta", 34, 1, Cesarean, "Equipe especializada - risco histerectomia"),
        entry("placenta_percreta", 34, 1, Cesarean, "Centro terciário - UTI - hemoderivados"),
        // ===== Twin pregnancy =====
        entry("gemelar_monocorionico", 34, 2, Either, "Vigilância STFF - Doppler semanal"),
        entry("gemelar_bicorionico", 37, 2, Either, "Vigilância crescimento fetal"),
        entry("gemelar_monoamniotico", 32, 1, Cesarean, "Alto risco entrelaçamento cordões"),
        // ===== Fetal presentation =====
        entry("pelvico", 37, 2, Cesarean, "VCE até 37sem - cesárea se falha"),
        entry("cormica", 37, 2, Cesarean, "Cesárea indicada"),
        // ===== Membrane rupture =====
        entry("rpmo_pretermo", 34, 1, Either, "Corticoide - antibiótico - vigilância"),
        entry("rpmo_termo", 37, 2, Either, "Indução trabalho parto até 24h"),
        // ===== Fetal growth =====
        entry("rcf", 37, 2, Either, "Doppler alterado - vigilância fetal"),
        entry("rcf_grave", 36, 1, Either, "Doppler crítico - diástole zero/reversa"),
        entry("macrossomia", 38, 2, Either, "PFE >4000g - avaliar via parto"),
        entry("macrossomia_severa", 38, 2, Cesarean, "PFE >4500g - cesárea recomendada"),
        // ===== Amniotic fluid =====
        entry("oligodramnia", 37, 2, Either, "ILA <5 ou MBV <2 - vigilância fetal"),
        entry("oligodramnia_severa", 34, 1, Either, "Anidramnia - interrupção indicada"),
        entry("polidramnia", 37, 2, Either, "ILA >24 - investigar causa"),
        // ===== Prior uterine surgery / iterativity =====
        entry("iteratividade_1cesarea", 39, 3, Either, "Parto vaginal possível após avaliação"),
        entry("iteratividade_2cesarea", 39, 2, Cesarean, "2 ou mais cesáreas prévias"),
        entry("cesarea_corporal", 37, 2, Cesarean, "Risco rotura uterina - cesárea obrigatória"),
        entry("miomatose", 37, 2, Cesarean, "Miomas grandes ou múltiplos - avaliar via"),
        entry("miomectomia_previa", 37, 2, Cesarean, "Miomectomia com abertura cavidade - cesárea"),
        // ===== Fetal malformation =====
        entry("malformacao_grave", 37, 2, Either, "Equipe neonatal especializada"),
        entry("cardiopatia_fetal", 37, 2, Either, "Centro com cardiologia pediátrica"),
        entry("hidrocefalia", 37, 2, Cesarean, "PC >40cm - cesárea indicada"),
        // ===== Maternal disease =====
        entry("cardiopatia_materna", 37, 2, Either, "Classe funcional III/IV - parto assistido"),
        entry("cardiopatia_grave", 36, 1, Either, "UTI - equipe cardiologia"),
        entry("doenca_renal", 37, 2, Either, "Creatinina >1.5 - vigilância materna-fetal"),
        entry("lupus", 37, 2, Either, "Vigilância atividade doença"),
        entry("epilepsia", 38, 2, Either, "Controle medicamentoso"),
        entry("trombofilia", 37, 2, Either, "Anticoagulação - vigilância Doppler"),
        // ===== Infections =====
        entry("hiv", 38, 2, Either, "CV <1000 parto vaginal - CV >1000 cesárea"),
        entry("hepatite_b", 39, 3, Either, "Imunoglobulina RN nas primeiras 12h"),
        entry("hepatite_c", 39, 3, Either, "Sem indicação cesárea profilática"),
        entry("herpes_ativo", 38, 2, Cesarean, "Lesões ativas - cesárea indicada"),
        // ===== Special =====
        entry("tpp_atual", 34, 1, Either, "Corticoide - tocólise - antibiótico"),
        entry("obito_fetal_anterior", 37, 2, Either, "Vigilância intensiva - Doppler"),
        entry("gestacao_prolongada", 41, 2, Either, "Indução 41sem - vigilância fetal"),
        entry("idade_materna_avancada", 39, 3, Either, ">35 anos - vigilância fetal"),
        entry("obesidade_morbida", 38, 2, Either, "IMC >40 - avaliar comorbidades"),
        entry("aloimunizacao_rh", 37, 2, Either, "Vigilância anemia fetal - MCA Doppler"),
    ]
}
