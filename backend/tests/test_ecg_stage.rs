//! Integration tests for ECG stage derivation and waveform lookup

use patient_simulator_core::{ecg_stage, waveforms_for_stage, LabPanel, Physiology};

fn labs_with_k(k: f64) -> LabPanel {
    LabPanel {
        k,
        ..LabPanel::default()
    }
}

#[test]
fn test_stage_thresholds_at_boundaries() {
    let physiology = Physiology::default();
    let cases = [
        (2.0, -2),
        (2.49, -2),
        (2.5, -1),
        (3.49, -1),
        (3.5, 0),
        (5.5, 0),
        (5.51, 1),
        (6.5, 1),
        (6.51, 2),
        (7.5, 2),
        (7.51, 3),
        (8.5, 3),
        (8.51, 4),
        (12.0, 4),
    ];

    for (k, expected) in cases {
        assert_eq!(
            ecg_stage(&labs_with_k(k), &physiology),
            expected,
            "k = {}",
            k
        );
    }
}

#[test]
fn test_stage_is_monotonic_in_potassium() {
    let physiology = Physiology::default();
    let mut previous = ecg_stage(&labs_with_k(2.0), &physiology);

    let mut k = 2.0;
    while k <= 12.0 {
        let stage = ecg_stage(&labs_with_k(k), &physiology);
        assert!(stage >= previous, "stage regressed at k = {}", k);
        previous = stage;
        k += 0.01;
    }
}

#[test]
fn test_membrane_protection_caps_severe_stages() {
    let shielded = Physiology {
        membrane_stability: 100,
        ..Physiology::default()
    };

    assert_eq!(ecg_stage(&labs_with_k(9.0), &shielded), 1);
    assert_eq!(ecg_stage(&labs_with_k(7.0), &shielded), 1);

    // Stage 1 and below pass through unchanged
    assert_eq!(ecg_stage(&labs_with_k(6.0), &shielded), 1);
    assert_eq!(ecg_stage(&labs_with_k(4.5), &shielded), 0);
    assert_eq!(ecg_stage(&labs_with_k(3.0), &shielded), -1);
}

#[test]
fn test_protection_requires_strictly_more_than_fifty() {
    let borderline = Physiology {
        membrane_stability: 50,
        ..Physiology::default()
    };
    assert_eq!(ecg_stage(&labs_with_k(9.0), &borderline), 4);

    let shielded = Physiology {
        membrane_stability: 51,
        ..Physiology::default()
    };
    assert_eq!(ecg_stage(&labs_with_k(9.0), &shielded), 1);
}

#[test]
fn test_every_stage_resolves_distinct_waveforms() {
    let mut seen = Vec::new();
    for stage in -2..=4 {
        let leads = waveforms_for_stage(stage);
        assert!(!leads.di.is_empty());
        assert!(!leads.dii.is_empty());
        assert!(!leads.v1.is_empty());
        seen.push(leads.dii);
    }

    // All seven stages carry distinct rhythm strips
    for i in 0..seen.len() {
        for j in (i + 1)..seen.len() {
            assert_ne!(seen[i], seen[j], "stages {} and {} share a strip", i, j);
        }
    }
}

#[test]
fn test_unknown_stage_falls_back_to_baseline() {
    let baseline = waveforms_for_stage(0);
    assert_eq!(waveforms_for_stage(5).dii, baseline.dii);
    assert_eq!(waveforms_for_stage(-3).dii, baseline.dii);
    assert_eq!(waveforms_for_stage(i8::MAX).dii, baseline.dii);
}
