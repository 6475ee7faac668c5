//! Built-in case: severe hyperkalemia in a dialysis-dependent patient
//!
//! A 68-year-old chronic dialysis patient presenting with paresthesia,
//! weakness and bradycardia. Potassium 7.2 and climbing.

use crate::models::action::{
    ActionCategory, ActionSpec, Milestone, PhysiologicEffect, StatusGrant,
};
use crate::scenario::{InitialState, LabsSpec, PhysiologySpec, Scenario, VitalsSpec};

/// Build the hyperkalemia scenario
pub fn scenario() -> Scenario {
    Scenario {
        initial: InitialState {
            patient_name: "João da Silva".to_string(),
            age: 68,
            weight: "70kg".to_string(),
            history: "Homem, 68a, dialítico, trazido por parestesia e fraqueza.".to_string(),
            rhythm: "Sinus Bradycardia / Junctional".to_string(),
            vitals: VitalsSpec {
                hr: Some(38),
                bp: Some("90/60".to_string()),
                resp: Some(22.0),
                spo2: Some(94),
                temp: Some(37.2),
            },
            labs: LabsSpec {
                k: Some(7.2),
                mg: Some(1.8),
                ph: Some(7.32),
                creatinine: Some(1.5),
                glucose: None,
            },
            physiology: PhysiologySpec::default(),
        },
        actions: vec![
            // --- Exames ---
            ActionSpec::new("exam_ecg", "Solicitar ECG", ActionCategory::Exams, "ecg", 7)
                .once()
                .with_milestone(Milestone::Ecg)
                .with_result_log("ECG realizado. Traçado disponível para análise."),
            ActionSpec::new(
                "exam_labs",
                "Solicitar Exames Séricos",
                ActionCategory::Exams,
                "syringe",
                40,
            )
            .iv_required()
            .draws_labs()
            .with_result_log("Coleta de sangue realizada. Amostras enviadas ao laboratório."),
            ActionSpec::new(
                "exam_dialysis",
                "Solicitar Diálise de Urgência",
                ActionCategory::Exams,
                "blood",
                60,
            )
            .once()
            .with_effect(PhysiologicEffect::PerformDialysis)
            .with_milestone(Milestone::Dialysis)
            .with_result_log("Nefrologia acionada. Equipe preparando equipamento de hemodiálise."),
            // --- Procedimentos ---
            ActionSpec::new(
                "proc_monitor",
                "Monitorizar Paciente",
                ActionCategory::Procedures,
                "monitor",
                2,
            )
            .once()
            .starts_monitoring()
            .granting(StatusGrant::Monitored)
            .with_milestone(Milestone::Monitor)
            .with_result_log("Eletrodos posicionados. Monitor multiparamétrico ligado."),
            ActionSpec::new(
                "proc_iv_access",
                "Estabelecer Acesso Venoso",
                ActionCategory::Procedures,
                "syringe",
                7,
            )
            .once()
            .granting(StatusGrant::IvAccess)
            .with_milestone(Milestone::IvAccess)
            .with_result_log("Acesso venoso periférico calibroso garantido em MSE."),
            ActionSpec::new(
                "proc_sonda",
                "Sondagem Vesical",
                ActionCategory::Procedures,
                "urine",
                12,
            )
            .once()
            .granting(StatusGrant::Foley)
            .with_result_log("Sondagem vesical de demora realizada. Drenagem de urina clara."),
            // --- Drogas ---
            ActionSpec::new(
                "drug_calcium",
                "Gluconato de Cálcio 10% (10ml)",
                ActionCategory::Drugs,
                "syringe",
                5,
            )
            .iv_required()
            .with_effect(PhysiologicEffect::StabilizeMembrane)
            .with_milestone(Milestone::Calcium)
            .with_result_log(
                "Infusão de Gluconato de Cálcio iniciada. Estabilização de membrana em curso.",
            ),
            ActionSpec::new(
                "drug_polarizing",
                "Solução Polarizante (Insulina + Glicose)",
                ActionCategory::Drugs,
                "syringe",
                10,
            )
            .iv_required()
            .with_effect(PhysiologicEffect::StartPolarizingTherapy)
            .with_milestone(Milestone::Treatment)
            .with_result_log("Solução Polarizante em infusão IV. Monitorando glicemia capilar."),
            ActionSpec::new(
                "drug_magnesium",
                "Sulfato de Magnésio",
                ActionCategory::Drugs,
                "syringe",
                3,
            )
            .iv_required()
            .with_result_log("Sulfato de Magnésio administrado em bólus lento."),
            ActionSpec::new(
                "drug_furosemide",
                "Furosemida",
                ActionCategory::Drugs,
                "syringe",
                3,
            )
            .iv_required()
            .with_result_log("Furosemida administrada IV."),
            ActionSpec::new(
                "drug_salbutamol",
                "Salbutamol (Inalatório)",
                ActionCategory::Drugs,
                "wind",
                15,
            )
            .with_milestone(Milestone::Treatment)
            .with_result_log("Nebulização contínua com Salbutamol iniciada."),
            ActionSpec::new(
                "drug_sorcal",
                "Sorcal (Poliestireno Sulfonato)",
                ActionCategory::Drugs,
                "pill",
                5,
            )
            .with_result_log("Sorcal administrado via oral."),
            ActionSpec::new(
                "drug_lokelma",
                "Lokelma (Ciclossilicato de Zircônio)",
                ActionCategory::Drugs,
                "pill",
                5,
            )
            .with_result_log("Lokelma administrado e ingerido pelo paciente."),
            // --- Fluidos ---
            ActionSpec::new("fluid_sf09", "SF 0,9%", ActionCategory::Fluids, "water", 5)
                .iv_required()
                .with_effect(PhysiologicEffect::FluidBolus)
                .with_result_log("Infusão de SF 0.9% aberta em livre fluxo."),
            ActionSpec::new("fluid_sf045", "SF 0,45%", ActionCategory::Fluids, "water", 5)
                .iv_required()
                .with_effect(PhysiologicEffect::FluidBolus)
                .with_result_log("Infusão de SF 0.45% iniciada."),
            ActionSpec::new("fluid_sf20", "SF 20%", ActionCategory::Fluids, "water", 5)
                .iv_required()
                .with_effect(PhysiologicEffect::FluidBolus)
                .with_result_log("Infusão de Salina Hipertônica 20% iniciada."),
            ActionSpec::new(
                "fluid_sg5",
                "Soro Glicosado 5%",
                ActionCategory::Fluids,
                "water",
                5,
            )
            .iv_required()
            .with_effect(PhysiologicEffect::FluidBolus)
            .with_result_log("Soro Glicosado 5% em manutenção."),
            ActionSpec::new(
                "fluid_sg50",
                "Glicose 50% (Ampola)",
                ActionCategory::Fluids,
                "water",
                5,
            )
            .iv_required()
            .with_effect(PhysiologicEffect::FluidBolus)
            .with_result_log("Bólus de Glicose 50% administrado IV."),
            ActionSpec::new(
                "fluid_ringer",
                "Ringer Lactato",
                ActionCategory::Fluids,
                "water",
                5,
            )
            .iv_required()
            .with_effect(PhysiologicEffect::FluidBolus)
            .with_result_log("Infusão de Ringer Lactato iniciada."),
        ],
    }
}
