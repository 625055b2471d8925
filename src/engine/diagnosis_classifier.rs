// ==========================================
// Motor de Agendamento Obstétrico - diagnosis classifier
// ==========================================
// Maps free-text maternal/fetal diagnosis entries (as they arrive
// from forms and spreadsheet imports) onto protocol catalog keys.
// Matching is lowercase and accent-insensitive.
//
// Immediate-interruption emergencies (eclampsia, descolamento
// prematuro de placenta) are not classified here: they never
// reach elective scheduling.
// ==========================================

/// Normalize free text for matching: lowercase, accents stripped.
fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Classify one free-text diagnosis into protocol keys.
///
/// A single entry can hit multiple rule groups (e.g. "DMG insulina +
/// oligodrâmnio"); all matched keys are returned, in rule order,
/// deduplicated. Text matching no rule yields an empty vector.
pub fn classify(text: &str) -> Vec<&'static str> {
    let diag = normalize(text);
    let has = |needle: &str| diag.contains(needle);
    let mut keys: Vec<&'static str> = Vec::new();
    let mut push = |key: &'static str, keys: &mut Vec<&'static str>| {
        if !keys.contains(&key) {
            keys.push(key);
        }
    };

    // ===== Hypertensive disorders =====
    if has("hellp") {
        push("sindrome_hellp", &mut keys);
    } else if has("pre-eclampsia grave") || has("pre eclampsia grave") || has("dheg") {
        push("pre_eclampsia_grave", &mut keys);
    } else if has("pre-eclampsia") || has("pre eclampsia") {
        push("pre_eclampsia_sem_deterioracao", &mut keys);
    } else if has("hipertensao gestacional") {
        push("hipertensao_gestacional", &mut keys);
    } else if has("hac") && (has("dificil") || has("3 drogas")) {
        push("hac_dificil", &mut keys);
    } else if has("hac") || has("hipertensao arterial cronica") {
        push("hac", &mut keys);
    }

    // ===== Diabetes =====
    if has("dm2") || has("dm 2") || has("dm pregestacional") || has("dm pre-gestacional") {
        if has("descomp") || has("descontrole") || has("complicac") {
            push("dm_pregestacional_descomp", &mut keys);
        } else {
            push("dm_pregestacional", &mut keys);
        }
    } else if has("dmg") || has("diabetes gestacional") {
        let insulin = has("insulina");
        let decompensated =
            has("descomp") || has("descontrole") || has("feto gig") || has("macrossomia");
        match (insulin, decompensated) {
            (true, true) => push("dmg_insulina_descomp", &mut keys),
            (true, false) => push("dmg_insulina", &mut keys),
            (false, true) => push("dmg_sem_insulina_descomp", &mut keys),
            (false, false) => push("dmg_sem_insulina", &mut keys),
        }
    }

    // ===== Placental =====
    if has("placenta percreta") {
        push("placenta_percreta", &mut keys);
    } else if has("placenta acreta") || has("acretismo") {
        push("placenta_acreta", &mut keys);
    } else if has("placenta previa total") || has("pp centro total") {
        push("placenta_previa_total", &mut keys);
    } else if has("placenta previa parcial") {
        push("placenta_previa_parcial", &mut keys);
    } else if has("placenta previa") || has("placenta baixa") {
        push("placenta_baixa", &mut keys);
    }

    // ===== Twin pregnancy =====
    if has("gemelar") || has("gemeos") {
        if has("monoamniotic") {
            push("gemelar_monoamniotico", &mut keys);
        } else if has("mono") {
            push("gemelar_monocorionico", &mut keys);
        } else if has("bi") {
            push("gemelar_bicorionico", &mut keys);
        }
    }

    // ===== Fetal presentation =====
    if has("pelvic") || has("sentado") {
        push("pelvico", &mut keys);
    } else if has("cormica") || has("transversa") {
        push("cormica", &mut keys);
    }

    // ===== Membrane rupture =====
    if has("rpmo") || has("rotura prematura") || has("bolsa rota") {
        if has("pretermo") || has("pre-termo") || has("prematuro") {
            push("rpmo_pretermo", &mut keys);
        } else {
            push("rpmo_termo", &mut keys);
        }
    }

    // ===== Fetal growth =====
    if has("rcf") || has("restricao de crescimento") || has("pig") {
        if has("grave") || has("doppler critico") || has("diastole") || has("centralizacao") {
            push("rcf_grave", &mut keys);
        } else {
            push("rcf", &mut keys);
        }
    } else if has("macrossomia") || has("feto gig") || has("gig") {
        if has("severa") || has("4500") {
            push("macrossomia_severa", &mut keys);
        } else {
            push("macrossomia", &mut keys);
        }
    }

    // ===== Amniotic fluid =====
    if has("oligoamnio") || has("oligodramnio") || has("oligodramnia") {
        if has("sever") || has("anidramnio") || has("anidramnia") {
            push("oligodramnia_severa", &mut keys);
        } else {
            push("oligodramnia", &mut keys);
        }
    } else if has("polidramnio") || has("polidramnia") || has("poliamnio") {
        push("polidramnia", &mut keys);
    }

    // ===== Iterativity / uterine scar =====
    if has("iteratividade") || has("cesarea previa") {
        if has("corporal") {
            push("cesarea_corporal", &mut keys);
        } else if has("2 cesarea") || has("duas cesarea") || has("multiplas") {
            push("iteratividade_2cesarea", &mut keys);
        } else if has("1 cesarea") || has("uma cesarea") {
            push("iteratividade_1cesarea", &mut keys);
        }
    }

    // ===== Fetal malformation =====
    if has("hidrocefalia") {
        push("hidrocefalia", &mut keys);
    } else if has("cardiopatia fetal") {
        push("cardiopatia_fetal", &mut keys);
    } else if has("malformacao") {
        push("malformacao_grave", &mut keys);
    }

    // ===== Maternal disease =====
    if has("cardiopatia") && !has("fetal") {
        if has("grave") || has("cf iii") || has("cf iv") {
            push("cardiopatia_grave", &mut keys);
        } else {
            push("cardiopatia_materna", &mut keys);
        }
    } else if has("doenca renal") || has("insuficiencia renal") {
        push("doenca_renal", &mut keys);
    } else if has("lupus") || has("les") {
        push("lupus", &mut keys);
    } else if has("epilepsia") {
        push("epilepsia", &mut keys);
    } else if has("trombofilia") {
        push("trombofilia", &mut keys);
    }

    // ===== Infections =====
    if has("hiv") || has("aids") {
        push("hiv", &mut keys);
    } else if has("hepatite b") {
        push("hepatite_b", &mut keys);
    } else if has("hepatite c") {
        push("hepatite_c", &mut keys);
    } else if has("herpes") && has("ativ") {
        push("herpes_ativo", &mut keys);
    }

    // ===== Uterine surgery =====
    if has("miomectomia") {
        push("miomectomia_previa", &mut keys);
    } else if has("mioma") || has("miomatose") {
        push("miomatose", &mut keys);
    }

    // ===== Special =====
    if has("tpp") || has("trabalho de parto prematuro") {
        push("tpp_atual", &mut keys);
    } else if has("obito fetal anterior") || has("ofu") {
        push("obito_fetal_anterior", &mut keys);
    } else if has("gestacao prolongada") || has("41 semanas") {
        push("gestacao_prolongada", &mut keys);
    } else if has("idade materna avancada") || has("ima") {
        push("idade_materna_avancada", &mut keys);
    } else if has("obesidade morbida") || has("imc > 40") || has("imc >40") {
        push("obesidade_morbida", &mut keys);
    } else if has("aloimunizacao") || has("incompatibilidade rh") {
        push("aloimunizacao_rh", &mut keys);
    }

    // ===== Elective =====
    if has("desejo materno") || has("a pedido") {
        push("desejo_materno", &mut keys);
    } else if has("laqueadura") {
        push("laqueadura", &mut keys);
    }

    keys
}
