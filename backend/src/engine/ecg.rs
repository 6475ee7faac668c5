//! ECG stage derivation and waveform mapping
//!
//! The stage is a discrete severity index in [-2, 4] (deep hypokalemia
//! through hyperkalemic sine wave), derived from live labs and physiology on
//! every read. It is never stored: callers recompute it before each render.
//!
//! The stage selects a set of three lead curves (DI, DII, V1) the rendering
//! collaborator draws. An out-of-range stage falls back to the normal-rhythm
//! set rather than failing.

use crate::models::labs::LabPanel;
use crate::models::physiology::Physiology;

/// Derive the ECG stage from potassium and membrane protection
///
/// Base stage from potassium:
///
/// | k            | stage | morphology                |
/// |--------------|-------|---------------------------|
/// | < 2.5        | -2    | giant U wave ("camel hump") |
/// | < 3.5        | -1    | flat T, prominent U       |
/// | <= 5.5       | 0     | sinus rhythm              |
/// | <= 6.5       | 1     | tented T waves            |
/// | <= 7.5       | 2     | wide QRS, flattening P    |
/// | <= 8.5       | 3     | sinoventricular, no P     |
/// | > 8.5        | 4     | sine wave                 |
///
/// Membrane-protection override: calcium corrects depolarization-phase
/// abnormalities (QRS widening) but not repolarization-phase ones (T-wave
/// changes), so protection cannot mask the full severity: with stability
/// above 50 the reported stage is clamped to 1, never below.
pub fn ecg_stage(labs: &LabPanel, physiology: &Physiology) -> i8 {
    let k = labs.k;

    let stage: i8 = if k < 2.5 {
        -2
    } else if k < 3.5 {
        -1
    } else if k <= 5.5 {
        0
    } else if k <= 6.5 {
        1
    } else if k <= 7.5 {
        2
    } else if k <= 8.5 {
        3
    } else {
        4
    };

    if physiology.is_protected() && stage > 1 {
        return 1;
    }

    stage
}

/// One waveform path per rendered lead (SVG path data)
///
/// ViewBox reference: 0 -30 400 160; baseline y = 50; 100 x-units per
/// normal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadSet {
    pub di: &'static str,
    pub dii: &'static str,
    pub v1: &'static str,
}

/// Severe hypokalemia (stage -2): giant U wave, T + U fusion
const HYPO_SEVERE: LeadSet = LeadSet {
    di: "M 0 50 L 25 20 L 28 55 L 30 55 Q 50 65 60 55 Q 80 30 90 55 L 100 50",
    dii: "M 0 50 L 5 50 L 15 50 L 22 55 L 25 5 L 28 55 L 32 55 L 45 55 Q 55 65 65 55 Q 75 30 90 55 L 100 50",
    v1: "M 0 50 L 22 40 L 25 90 L 28 50 L 60 50 Q 80 30 95 50 L 100 50",
};

/// Mild hypokalemia (stage -1): flat/inverted T, prominent U wave
const HYPO_MILD: LeadSet = LeadSet {
    di: "M 0 50 L 20 50 L 25 20 L 28 55 L 30 55 L 60 55 Q 80 45 90 50 L 100 50",
    dii: "M 0 50 L 5 50 C 8 40 12 40 15 50 L 20 50 L 22 55 L 25 5 L 28 55 L 30 55 L 45 55 Q 50 58 55 55 L 60 55 Q 70 45 80 55 L 100 50",
    v1: "M 0 50 L 5 50 L 22 40 L 25 90 L 28 50 L 50 50 L 60 50 Q 70 45 80 50 L 100 50",
};

/// Normal sinus rhythm (stage 0)
const NORMAL: LeadSet = LeadSet {
    di: "M 0 50 L 5 50 Q 8 45 12 50 L 15 50 L 16 52 L 20 20 L 23 55 L 25 50 L 35 50 Q 45 50 50 35 Q 55 25 60 40 Q 65 50 70 50 L 100 50",
    dii: "M 0 50 L 5 50 C 8 40 12 40 15 50 L 20 50 L 22 55 L 25 5 L 28 55 L 30 50 L 35 50 C 42 50 45 15 55 20 C 60 22 62 50 65 50 L 100 50",
    v1: "M 0 50 L 5 50 Q 8 45 10 50 Q 12 55 15 50 L 20 50 L 22 40 L 25 90 L 28 50 L 35 50 Q 45 52 55 50 L 100 50",
};

/// Mild hyperkalemia (stage 1): tented T waves, narrow base
const HYPER_MILD: LeadSet = LeadSet {
    di: "M 0 50 L 5 50 Q 8 45 12 50 L 15 50 L 16 52 L 20 20 L 23 55 L 25 50 L 50 50 L 60 10 L 70 50 L 100 50",
    dii: "M 0 50 L 5 50 C 8 40 12 40 15 50 L 20 50 L 22 55 L 25 5 L 28 55 L 30 50 L 50 50 L 62 -10 L 74 50 L 100 50",
    v1: "M 0 50 L 5 50 Q 8 45 10 50 Q 12 55 15 50 L 20 50 L 22 40 L 25 90 L 28 50 L 55 50 L 62 10 L 69 50 L 100 50",
};

/// Moderate hyperkalemia (stage 2): P flattens, PR prolongs, QRS widens
const HYPER_MODERATE: LeadSet = LeadSet {
    di: "M 0 50 L 5 50 Q 12 48 20 50 L 25 50 L 28 55 L 32 15 L 38 65 L 42 50 L 50 50 L 60 0 L 70 50 L 100 50",
    dii: "M 0 50 L 10 50 Q 18 48 25 50 L 30 50 L 32 55 L 38 10 L 45 65 L 50 50 L 55 50 L 65 -20 L 75 50 L 100 50",
    v1: "M 0 50 L 15 50 L 20 45 L 30 95 L 40 50 L 45 50 L 55 10 L 65 50 L 100 50",
};

/// Severe hyperkalemia (stage 3): sinoventricular, bizarre wide QRS
const HYPER_SEVERE: LeadSet = LeadSet {
    di: "M 0 50 L 20 50 L 35 30 L 45 60 L 60 20 L 80 50 L 100 50",
    dii: "M 0 50 L 20 50 L 35 30 L 50 70 L 65 0 L 80 50 L 100 50",
    v1: "M 0 50 L 20 50 L 30 80 L 50 40 L 70 20 L 90 50 L 100 50",
};

/// Critical hyperkalemia (stage 4): sine wave, pre-arrest
const SINE_WAVE: LeadSet = LeadSet {
    di: "M 0 50 Q 25 10 50 50 Q 75 90 100 50",
    dii: "M 0 50 Q 25 -10 50 50 Q 75 110 100 50",
    v1: "M 0 50 Q 25 10 50 50 Q 75 90 100 50",
};

/// Map a derived stage to its lead curves
///
/// Any value outside [-2, 4] resolves to the normal-rhythm set.
pub fn waveforms_for_stage(stage: i8) -> &'static LeadSet {
    match stage {
        -2 => &HYPO_SEVERE,
        -1 => &HYPO_MILD,
        1 => &HYPER_MILD,
        2 => &HYPER_MODERATE,
        3 => &HYPER_SEVERE,
        4 => &SINE_WAVE,
        _ => &NORMAL,
    }
}
