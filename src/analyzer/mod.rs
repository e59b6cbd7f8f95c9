//! The analysis pipeline: extract metrics, grade them against a profile,
//! score, attach tips.
//!
//! Every entry point is a pure function of its inputs.

pub mod extractors;
pub mod profiles;
pub mod rules;
pub mod scoring;
pub mod tips;
pub mod types;

pub use profiles::{profile, rules_for, Profile};
pub use rules::{evaluate_rules, Frame, Rule};
pub use types::{
    CadenceRating, FormIssue, FormReport, GymFormResult, IssueType, MetricsMap, RepQuality,
    RunningFormResult, Severity, StrideAnalysis,
};

use crate::exercises::{Activity, Exercise};
use crate::landmarks::{DerivedSignals, Snapshot};
use tracing::debug;

struct Evaluation {
    issues: Vec<FormIssue>,
    metrics: MetricsMap,
    score: u8,
    tips: Vec<String>,
}

fn evaluate(profile: &Profile, snapshot: &Snapshot, signals: &DerivedSignals) -> Evaluation {
    let frame = Frame { snapshot, signals };
    let (mut issues, metrics) = evaluate_rules(profile.rules, &frame);

    // Tips follow evaluation order; the result lists issues by severity.
    let tips = tips::generate_tips(profile, &issues);
    scoring::sort_by_severity(&mut issues);
    let score = scoring::overall_score(&issues);

    debug!(
        "{}: {} joints, {} issues, score {}",
        profile.activity,
        snapshot.detected_count(),
        issues.len(),
        score
    );

    Evaluation {
        issues,
        metrics,
        score,
        tips,
    }
}

pub fn analyze_running_form(
    snapshot: &Snapshot,
    signals: Option<&DerivedSignals>,
) -> RunningFormResult {
    let signals = signals.copied().unwrap_or_default();
    let Evaluation {
        issues,
        mut metrics,
        score,
        mut tips,
    } = evaluate(&profiles::running::PROFILE, snapshot, &signals);

    let stride = StrideAnalysis::from_signals(&signals);
    for (name, value) in [
        ("cadence", signals.cadence),
        ("stride_length", signals.stride_length),
        ("ground_contact_ms", signals.ground_contact_ms),
        ("flight_time_ms", signals.flight_time_ms),
    ] {
        if let Some(value) = value {
            metrics.insert(name.to_string(), value);
        }
    }

    if let Some(tip) = tips::cadence_tip(stride.cadence_rating) {
        tips.push(tip.to_string());
    }

    RunningFormResult {
        overall_score: score,
        issues,
        metrics,
        cadence: signals.cadence,
        stride,
        tips,
    }
}

pub fn analyze_gym_form(snapshot: &Snapshot, exercise: Exercise) -> GymFormResult {
    let Evaluation {
        issues,
        metrics,
        score,
        tips,
    } = evaluate(
        profile(Activity::Gym(exercise)),
        snapshot,
        &DerivedSignals::default(),
    );

    GymFormResult {
        exercise,
        overall_score: score,
        issues,
        metrics,
        rep_quality: RepQuality::from_score(score),
        tips,
    }
}

/// Dispatches on the activity. Derived signals only affect running.
pub fn analyze(
    snapshot: &Snapshot,
    activity: Activity,
    signals: Option<&DerivedSignals>,
) -> FormReport {
    match activity {
        Activity::Running => FormReport::Running(analyze_running_form(snapshot, signals)),
        Activity::Gym(exercise) => FormReport::Gym(analyze_gym_form(snapshot, exercise)),
    }
}
