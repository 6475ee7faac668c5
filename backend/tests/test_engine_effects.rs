//! Integration tests for discrete physiologic interventions
//!
//! Covers the interaction between `apply_effect` and the autonomous
//! tick: shield lifetime, polarizing therapy under drift, fluid
//! boluses accumulating toward overload and dialysis correction.

use patient_simulator_core::{LabPanel, PatientEngine, PhysiologicEffect, Physiology, Vitals};

fn engine_with_k(k: f64) -> PatientEngine {
    let labs = LabPanel {
        k,
        ..LabPanel::default()
    };
    PatientEngine::new(Vitals::default(), labs, Physiology::default())
}

fn run_minutes(engine: &mut PatientEngine, minutes: u32) {
    for _ in 0..(minutes * 60) {
        engine.tick();
    }
}

#[test]
fn test_calcium_shield_lifts_after_eleven_minutes() {
    let mut engine = engine_with_k(9.0);
    assert_eq!(engine.ecg_stage(), 4);

    engine.apply_effect(PhysiologicEffect::StabilizeMembrane);
    assert_eq!(engine.physiology().membrane_stability, 100);
    assert_eq!(engine.ecg_stage(), 1);

    // Decays 5/minute: at 9 minutes stability is 55, still > 50
    run_minutes(&mut engine, 9);
    assert_eq!(engine.physiology().membrane_stability, 55);
    assert_eq!(engine.ecg_stage(), 1);

    // At 11 minutes stability is 45: the cosmetic override lifts and
    // the trace reflects the true (still severe) potassium
    run_minutes(&mut engine, 2);
    assert_eq!(engine.physiology().membrane_stability, 45);
    assert_eq!(engine.ecg_stage(), 4);
}

#[test]
fn test_calcium_does_not_touch_potassium() {
    let mut engine = engine_with_k(8.0);
    engine.apply_effect(PhysiologicEffect::StabilizeMembrane);

    assert!((engine.labs().k - 8.0).abs() < 1e-9);
}

#[test]
fn test_polarizing_therapy_reverses_drift() {
    let mut engine = engine_with_k(7.2);
    let note = engine.apply_effect(PhysiologicEffect::StartPolarizingTherapy);
    assert!(note.starts_with("Solução polarizante"));
    assert!(!note.contains("ALERTA"));

    // Net -0.03/minute
    run_minutes(&mut engine, 10);
    assert!((engine.labs().k - 6.9).abs() < 1e-9);
}

#[test]
fn test_polarizing_warns_when_glucose_low() {
    let labs = LabPanel {
        k: 7.2,
        glucose: 65.0,
        ..LabPanel::default()
    };
    let mut engine = PatientEngine::new(Vitals::default(), labs, Physiology::default());

    let note = engine.apply_effect(PhysiologicEffect::StartPolarizingTherapy);
    assert!(note.contains("ALERTA: Hipo iminente."));
}

#[test]
fn test_repeated_boluses_cross_overload_threshold() {
    let mut engine = engine_with_k(7.2);

    let first = engine.apply_effect(PhysiologicEffect::FluidBolus);
    assert_eq!(engine.physiology().fluid_balance_ml, 500);
    assert!(!first.contains("dispneia"));

    let second = engine.apply_effect(PhysiologicEffect::FluidBolus);
    assert_eq!(engine.physiology().fluid_balance_ml, 1000);
    assert!(!second.contains("dispneia"));
    assert!(!engine.physiology().is_fluid_overloaded());

    // Third bolus: balance strictly exceeds 1000 ml
    let third = engine.apply_effect(PhysiologicEffect::FluidBolus);
    assert_eq!(engine.physiology().fluid_balance_ml, 1500);
    assert!(third.contains("dispneia súbita"));
    assert!(engine.physiology().is_fluid_overloaded());
}

#[test]
fn test_bolus_raises_blood_pressure_to_caps() {
    let mut engine = engine_with_k(7.2);

    engine.apply_effect(PhysiologicEffect::FluidBolus);
    assert_eq!(engine.vitals().bp.sys, 100);
    assert_eq!(engine.vitals().bp.dia, 65);

    // Systolic caps at 140, diastolic at 90
    for _ in 0..10 {
        engine.apply_effect(PhysiologicEffect::FluidBolus);
    }
    assert_eq!(engine.vitals().bp.sys, 140);
    assert_eq!(engine.vitals().bp.dia, 90);
}

#[test]
fn test_dialysis_corrects_potassium_and_shift() {
    let mut engine = engine_with_k(9.5);
    engine.apply_effect(PhysiologicEffect::StartPolarizingTherapy);

    engine.apply_effect(PhysiologicEffect::PerformDialysis);
    assert!((engine.labs().k - 4.0).abs() < 1e-9);
    assert_eq!(engine.physiology().k_shift_rate, 0.0);

    // Basal drift resumes from the corrected value
    run_minutes(&mut engine, 2);
    assert!((engine.labs().k - 4.04).abs() < 1e-9);
}
