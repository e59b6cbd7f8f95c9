use super::{Profile, TipSet};
use crate::analyzer::extractors as x;
use crate::analyzer::rules::{Grade, IssueCopy, Rule, RuleKind};
use crate::analyzer::types::IssueType;
use crate::exercises::{Activity, Exercise};
use crate::tiers;

pub static PROFILE: Profile = Profile {
    activity: Activity::Gym(Exercise::Lunge),
    rules: RULES,
    tips: TIPS,
    positive_tip: "Excellent lunge form! Good balance and depth.",
};

const RULES: &[Rule] = &[
    Rule {
        metric: "front_knee_angle",
        issue_type: IssueType::Depth,
        kind: RuleKind::Graded {
            extract: x::front_knee_angle,
            fallback: 90.0,
            precision: 0,
            unit: "°",
            below: Some(Grade {
                tiers: tiers![70.0 => Low],
                copy: IssueCopy {
                    title: "Front Knee Over-Bent",
                    description: "Your front knee closes to {value}°, pushing the knee far forward.",
                    correction: "Take a longer step so the front shin stays close to vertical.",
                },
            }),
            above: Some(Grade {
                tiers: tiers![110.0 => Medium, 130.0 => High],
                copy: IssueCopy {
                    title: "Insufficient Depth",
                    description: "Your front knee only bends to {value}°. Lower until it reaches about 90°.",
                    correction: "Drop the back knee toward the floor under control.",
                },
            }),
        },
    },
    Rule {
        metric: "knee_over_toe",
        issue_type: IssueType::KneeTracking,
        kind: RuleKind::Graded {
            extract: x::knee_over_toe,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![15.0 => Medium, 30.0 => High],
                copy: IssueCopy {
                    title: "Knee Past Toes",
                    description: "Your front knee travels {value}% of shin length past the toes.",
                    correction: "Sink straight down between the feet rather than lunging forward.",
                },
            }),
        },
    },
    Rule {
        metric: "torso_lean",
        issue_type: IssueType::BackPosition,
        kind: RuleKind::Graded {
            extract: x::torso_lean,
            fallback: 5.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![15.0 => Medium, 25.0 => High],
                copy: IssueCopy {
                    title: "Leaning Forward",
                    description: "Your torso leans {value}° from vertical during the lunge.",
                    correction: "Keep the chest up and shoulders stacked over the hips.",
                },
            }),
        },
    },
    Rule {
        metric: "hip_level",
        issue_type: IssueType::HipPosition,
        kind: RuleKind::Graded {
            extract: x::hip_tilt,
            fallback: 0.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![8.0 => Low, 15.0 => Medium],
                copy: IssueCopy {
                    title: "Hips Not Level",
                    description: "Your hips tilt {value}° from level.",
                    correction: "Keep both hip bones pointing forward and level, like headlights.",
                },
            }),
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
                tiers: tiers![8.0 => Low, 14.0 => Medium],
                copy: IssueCopy {
                    title: "Uneven Shoulders",
                    description: "Your shoulders are {value}% of frame height out of level.",
                    correction: "Keep the shoulders square and level throughout the step.",
                },
            }),
        },
    },
];

const TIPS: &[TipSet] = &[
    TipSet {
        issue_type: IssueType::Depth,
        tips: &["Practice split squats to build depth before moving to walking lunges."],
    },
    TipSet {
        issue_type: IssueType::KneeTracking,
        tips: &["Lengthen your stance so the front shin stays near vertical."],
    },
    TipSet {
        issue_type: IssueType::BackPosition,
        tips: &["Hold a weight at the chest (goblet style) to encourage an upright torso."],
    },
    TipSet {
        issue_type: IssueType::HipPosition,
        tips: &[
            "Strengthen hip stability with single-leg work.",
            "Use a slightly wider stance, as if on train tracks.",
        ],
    },
    TipSet {
        issue_type: IssueType::ShoulderPosition,
        tips: &["Carry equal weights in both hands to stay square."],
    },
];
