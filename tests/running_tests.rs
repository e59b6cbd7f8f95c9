mod common;

use common::*;
use formcheck::analyzer::tips::{HIGH_CADENCE_TIP, LOW_CADENCE_TIP};
use formcheck::analyzer::{CadenceRating, IssueType, Severity};
use formcheck::{analyze_running_form, DerivedSignals, Joint};
use rstest::rstest;

#[test]
fn test_nominal_stride_is_clean() {
    let result = analyze_running_form(&running(), None);
    assert_eq!(result.overall_score, 100);
    assert!(result.issues.is_empty(), "{:?}", result.issues);
    assert_eq!(
        result.tips,
        vec!["Great running form! Keep up the consistent technique.".to_string()]
    );
    assert_eq!(result.cadence, None);
    assert_eq!(result.stride.cadence_rating, CadenceRating::Unknown);
}

#[test]
fn test_uneven_shoulders_is_one_high_posture_issue() {
    let snapshot = moved(
        moved(running(), Joint::LeftShoulder, 0.52, 0.26),
        Joint::RightShoulder,
        0.50,
        0.34,
    );
    let result = analyze_running_form(&snapshot, None);

    assert_eq!(result.issues.len(), 1, "{:?}", result.issues);
    let issue = &result.issues[0];
    assert_eq!(issue.issue_type, IssueType::Posture);
    assert_eq!(issue.severity, Severity::High);
    assert!(issue.description.contains("0.08"), "{}", issue.description);
    assert_eq!(result.overall_score, 85);
}

// --- FORWARD LEAN (two-sided band) ---
#[rstest]
#[case(-0.03, Some(Severity::Low))] // ~2.9°, too upright
#[case(0.0, None)] // ~5.7°
#[case(0.03, Some(Severity::Medium))] // ~14°
#[case(0.05, Some(Severity::Medium))] // ~19.3°
#[case(0.08, Some(Severity::High))] // ~26.6°
fn test_forward_lean_band(#[case] dx: f32, #[case] expected: Option<Severity>) {
    let snapshot = shifted(running(), &UPPER_BODY, dx);
    let result = analyze_running_form(&snapshot, None);
    let lean = result
        .issues
        .iter()
        .find(|i| i.issue_type == IssueType::Posture)
        .map(|i| i.severity);
    assert_eq!(lean, expected, "{:?}", result.metrics.get("forward_lean"));
}

// --- VERTICAL OSCILLATION (signal driven) ---
#[rstest]
#[case(5.0, None, 100)]
#[case(7.5, Some(Severity::Medium), 92)]
#[case(13.0, Some(Severity::High), 85)]
fn test_vertical_oscillation(
    #[case] cm: f32,
    #[case] expected: Option<Severity>,
    #[case] score: u8,
) {
    let signals = DerivedSignals {
        vertical_oscillation_cm: Some(cm),
        ..Default::default()
    };
    let result = analyze_running_form(&running(), Some(&signals));
    let bounce = result
        .issues
        .iter()
        .find(|i| i.issue_type == IssueType::VerticalOscillation)
        .map(|i| i.severity);
    assert_eq!(bounce, expected);
    assert_eq!(result.overall_score, score);
    assert_eq!(result.metrics["vertical_oscillation"], cm);
}

#[test]
fn test_missing_signal_uses_fallback() {
    let result = analyze_running_form(&running(), None);
    assert_eq!(result.metrics["vertical_oscillation"], 0.0);
}

#[rstest]
#[case::straight_arms(
    moved(moved(running(), Joint::LeftWrist, 0.52, 0.50), Joint::RightWrist, 0.50, 0.50),
    IssueType::ArmSwing,
    Severity::Medium
)]
#[case::no_knee_drive(
    moved(moved(running(), Joint::RightKnee, 0.48, 0.69), Joint::LeftKnee, 0.50, 0.61),
    IssueType::KneeDrive,
    Severity::Medium
)]
#[case::overstride(
    moved(running(), Joint::RightAnkle, 0.68, 0.86),
    IssueType::FootStrike,
    Severity::High
)]
fn test_single_fault(
    #[case] snapshot: formcheck::Snapshot,
    #[case] issue_type: IssueType,
    #[case] severity: Severity,
) {
    let result = analyze_running_form(&snapshot, None);
    assert_eq!(result.issues.len(), 1, "{:?}", result.issues);
    assert_eq!(result.issues[0].issue_type, issue_type);
    assert_eq!(result.issues[0].severity, severity);
    assert_eq!(result.overall_score, 100 - severity.penalty() as u8);
}

// --- LEFT/RIGHT METRICS NEED A FRONTAL VIEW ---
#[test]
fn test_side_view_arm_swing_is_not_a_crossover() {
    // Opposite phase of the swing: each wrist sits behind its own shoulder.
    let snapshot = moved(
        moved(running(), Joint::LeftWrist, 0.42, 0.40),
        Joint::RightWrist,
        0.60,
        0.40,
    );
    let result = analyze_running_form(&snapshot, None);
    assert!(result.issues.is_empty(), "{:?}", result.issues);
    assert_eq!(result.metrics["arm_crossover"], 0.0);
    assert_eq!(result.overall_score, 100);
}

#[rstest]
#[case(0.503)]
#[case(0.504)]
#[case(0.51)]
fn test_side_view_hip_jitter_is_ignored(#[case] right_hip_y: f32) {
    let snapshot = moved(running(), Joint::RightHip, 0.48, right_hip_y);
    let result = analyze_running_form(&snapshot, None);
    assert!(result.issues.is_empty(), "{:?}", result.issues);
    assert_eq!(result.metrics["hip_drop"], 0.0);
}

/// Camera behind the runner: shoulders and hips spread across the frame.
fn rear_view(right_hip_y: f32, left_wrist_x: f32) -> formcheck::Snapshot {
    snap(&[
        (Joint::LeftShoulder, 0.42, 0.30),
        (Joint::RightShoulder, 0.62, 0.30),
        (Joint::LeftWrist, left_wrist_x, 0.45),
        (Joint::RightWrist, 0.66, 0.45),
        (Joint::LeftHip, 0.42, 0.50),
        (Joint::RightHip, 0.58, right_hip_y),
    ])
}

#[rstest]
#[case::level(rear_view(0.50, 0.38), None)]
#[case::hip_drop(rear_view(0.515, 0.38), Some((IssueType::HipStability, Severity::Medium)))]
#[case::hip_collapse(rear_view(0.53, 0.38), Some((IssueType::HipStability, Severity::High)))]
#[case::wrist_at_midline(rear_view(0.50, 0.56), Some((IssueType::ArmSwing, Severity::Low)))]
#[case::wrist_across(rear_view(0.50, 0.58), Some((IssueType::ArmSwing, Severity::Medium)))]
fn test_rear_view_faults(
    #[case] snapshot: formcheck::Snapshot,
    #[case] expected: Option<(IssueType, Severity)>,
) {
    let result = analyze_running_form(&snapshot, None);
    let found: Vec<_> = result
        .issues
        .iter()
        .map(|i| (i.issue_type, i.severity))
        .collect();
    assert_eq!(found, expected.into_iter().collect::<Vec<_>>());
}

#[test]
fn test_issues_sorted_by_severity() {
    let snapshot = moved(
        moved(running(), Joint::LeftShoulder, 0.52, 0.26),
        Joint::RightShoulder,
        0.50,
        0.34,
    );
    let signals = DerivedSignals {
        vertical_oscillation_cm: Some(7.5),
        ..Default::default()
    };
    let result = analyze_running_form(&snapshot, Some(&signals));

    let order: Vec<_> = result
        .issues
        .iter()
        .map(|i| (i.issue_type, i.severity))
        .collect();
    assert_eq!(
        order,
        vec![
            (IssueType::Posture, Severity::High),
            (IssueType::VerticalOscillation, Severity::Medium),
        ]
    );
    assert_eq!(result.overall_score, 77);
}

// --- STRIDE / CADENCE ---
#[rstest]
#[case(150.0, CadenceRating::Low, Some(LOW_CADENCE_TIP))]
#[case(160.0, CadenceRating::Optimal, None)]
#[case(175.0, CadenceRating::Optimal, None)]
#[case(190.0, CadenceRating::Optimal, None)]
#[case(200.0, CadenceRating::High, Some(HIGH_CADENCE_TIP))]
fn test_cadence_rating(
    #[case] cadence: f32,
    #[case] rating: CadenceRating,
    #[case] tip: Option<&str>,
) {
    let signals = DerivedSignals {
        cadence: Some(cadence),
        ..Default::default()
    };
    let result = analyze_running_form(&running(), Some(&signals));
    assert_eq!(result.cadence, Some(cadence));
    assert_eq!(result.stride.cadence_rating, rating);
    assert_eq!(result.metrics["cadence"], cadence);
    match tip {
        Some(tip) => assert_eq!(result.tips.last().map(String::as_str), Some(tip)),
        None => assert_eq!(result.tips.len(), 1),
    }
    // Cadence alone never costs points.
    assert_eq!(result.overall_score, 100);
}

#[test]
fn test_stride_analysis() {
    let signals = DerivedSignals {
        cadence: Some(172.0),
        stride_length: Some(1.2),
        ground_contact_ms: Some(240.0),
        flight_time_ms: Some(80.0),
        vertical_oscillation_cm: None,
    };
    let result = analyze_running_form(&running(), Some(&signals));
    let stride = result.stride;

    assert_eq!(stride.stride_length, Some(1.2));
    assert_eq!(stride.duty_factor, Some(0.75));
    assert_eq!(result.metrics["ground_contact_ms"], 240.0);
    assert_eq!(result.metrics["flight_time_ms"], 80.0);
    assert_eq!(result.metrics["stride_length"], 1.2);
}

#[rstest]
#[case::no_flight_time(Some(240.0), None)]
#[case::zero_flight_time(Some(240.0), Some(0.0))]
#[case::zero_contact(Some(0.0), Some(90.0))]
fn test_duty_factor_needs_positive_times(
    #[case] ground_contact_ms: Option<f32>,
    #[case] flight_time_ms: Option<f32>,
) {
    let signals = DerivedSignals {
        ground_contact_ms,
        flight_time_ms,
        ..Default::default()
    };
    let result = analyze_running_form(&running(), Some(&signals));
    assert_eq!(result.stride.duty_factor, None);
    assert_eq!(result.metrics.get("flight_time_ms").copied(), flight_time_ms);
}

#[test]
fn test_tips_follow_issue_types_without_duplicates() {
    // Straight arms plus a strong lean.
    let snapshot = shifted(running(), &UPPER_BODY, 0.08);
    let snapshot = moved(
        moved(snapshot, Joint::LeftWrist, 0.60, 0.50),
        Joint::RightWrist,
        0.58,
        0.50,
    );
    let result = analyze_running_form(&snapshot, None);
    let arm_issues = result
        .issues
        .iter()
        .filter(|i| i.issue_type == IssueType::ArmSwing)
        .count();
    assert!(arm_issues >= 1);

    let mut unique = result.tips.clone();
    unique.dedup();
    assert_eq!(unique.len(), result.tips.len());
    assert!(result.tips[0].contains("running tall"), "{:?}", result.tips);
}
