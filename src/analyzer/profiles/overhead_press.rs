use super::{Profile, TipSet};
use crate::analyzer::extractors as x;
use crate::analyzer::rules::{Grade, IssueCopy, Rule, RuleKind};
use crate::analyzer::types::{IssueType, Severity};
use crate::exercises::{Activity, Exercise};
use crate::tiers;

pub static PROFILE: Profile = Profile {
    activity: Activity::Gym(Exercise::OverheadPress),
    rules: RULES,
    tips: TIPS,
    positive_tip: "Strong overhead press! Great lockout and bar path.",
};

const RULES: &[Rule] = &[
    Rule {
        metric: "bar_path",
        issue_type: IssueType::BarPath,
        kind: RuleKind::Graded {
            extract: x::bar_over_shoulders,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![15.0 => Medium, 30.0 => High],
                copy: IssueCopy {
                    title: "Bar Drifting Forward",
                    description: "The bar sits {value}% of torso length in front of the shoulders.",
                    correction: "Press the bar straight up and move the head back out of its path.",
                },
            }),
        },
    },
    Rule {
        metric: "back_arch",
        issue_type: IssueType::BackPosition,
        kind: RuleKind::Graded {
            extract: x::torso_lean,
            fallback: 0.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![10.0 => Medium, 20.0 => High],
                copy: IssueCopy {
                    title: "Excessive Back Arch",
                    description: "Your torso leans back {value}° from vertical, loading the lower back.",
                    correction: "Squeeze the glutes and brace the abs to keep the ribs down.",
                },
            }),
        },
    },
    Rule {
        metric: "elbow_position",
        issue_type: IssueType::ElbowPosition,
        kind: RuleKind::Graded {
            extract: x::wrist_stack,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![20.0 => Medium, 35.0 => High],
                copy: IssueCopy {
                    title: "Elbows Not Under the Bar",
                    description: "Your forearms are {value}% off vertical, leaking force from the press.",
                    correction: "Keep the elbows directly under the wrists, slightly in front of the bar.",
                },
            }),
        },
    },
    Rule {
        metric: "head_position",
        issue_type: IssueType::HeadPosition,
        kind: RuleKind::Graded {
            extract: x::head_offset,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![25.0 => Low, 40.0 => Medium],
                copy: IssueCopy {
                    title: "Head Jutting Forward",
                    description: "Your head sits {value}% of torso length off the line of the spine.",
                    correction: "Pull the chin back as the bar passes, then push the head through at the top.",
                },
            }),
        },
    },
    Rule {
        metric: "lockout_incomplete",
        issue_type: IssueType::Lockout,
        kind: RuleKind::Detector {
            detect: x::press_lockout_incomplete,
            severity: Severity::Low,
            copy: IssueCopy {
                title: "Incomplete Lockout",
                description: "The bar is overhead but the elbows are not fully extended.",
                correction: "Finish each rep with straight arms and the bar over the mid-foot.",
            },
        },
    },
    Rule {
        metric: "shoulder_alignment",
        issue_type: IssueType::ShoulderPosition,
        kind: RuleKind::Graded {
            extract: x::shoulder_alignment,
            fallback: 0.0,
            precision: 1,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![6.0 => Low, 12.0 => Medium],
                copy: IssueCopy {
                    title: "Uneven Shoulders",
                    description: "Your shoulders are {value}% of frame height out of level under the bar.",
                    correction: "Press evenly with both arms and keep the bar level.",
                },
            }),
        },
    },
];

const TIPS: &[TipSet] = &[
    TipSet {
        issue_type: IssueType::BarPath,
        tips: &["Practice with a vertical line on a mirror to check the bar path."],
    },
    TipSet {
        issue_type: IssueType::BackPosition,
        tips: &[
            "Try the press seated with back support while building core strength.",
            "Tighten the glutes before every rep.",
        ],
    },
    TipSet {
        issue_type: IssueType::ElbowPosition,
        tips: &["Start each rep with the elbows slightly in front of the bar."],
    },
    TipSet {
        issue_type: IssueType::HeadPosition,
        tips: &["Chin tucks between sets reinforce a neutral neck."],
    },
    TipSet {
        issue_type: IssueType::Lockout,
        tips: &["Add overhead holds at lockout to build top-end strength."],
    },
    TipSet {
        issue_type: IssueType::ShoulderPosition,
        tips: &["Single-arm dumbbell presses help even out side-to-side strength."],
    },
];
