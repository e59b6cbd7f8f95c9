use super::{Profile, TipSet};
use crate::analyzer::extractors as x;
use crate::analyzer::rules::{Grade, IssueCopy, Rule, RuleKind};
use crate::analyzer::types::IssueType;
use crate::exercises::{Activity, Exercise};
use crate::tiers;

pub static PROFILE: Profile = Profile {
    activity: Activity::Gym(Exercise::BarbellRow),
    rules: RULES,
    tips: TIPS,
    positive_tip: "Great rowing form! Strong back position.",
};

const RULES: &[Rule] = &[
    Rule {
        metric: "torso_angle",
        issue_type: IssueType::BackPosition,
        kind: RuleKind::Graded {
            extract: x::torso_lean,
            fallback: 60.0,
            precision: 0,
            unit: "°",
            below: Some(Grade {
                tiers: tiers![45.0 => Medium, 30.0 => High],
                copy: IssueCopy {
                    title: "Torso Too Upright",
                    description: "Your torso is only {value}° from vertical, turning the row into a shrug.",
                    correction: "Hinge further at the hips until the torso is closer to parallel with the floor.",
                },
            }),
            above: None,
        },
    },
    Rule {
        metric: "spine_neutrality",
        issue_type: IssueType::BackPosition,
        kind: RuleKind::Graded {
            extract: x::spine_deviation,
            fallback: 0.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![20.0 => Medium, 35.0 => High],
                copy: IssueCopy {
                    title: "Rounded Back",
                    description: "Your head and upper back deviate {value}° from a neutral spine line.",
                    correction: "Brace the core and keep the chest up throughout the set.",
                },
            }),
        },
    },
    Rule {
        metric: "elbow_flare",
        issue_type: IssueType::ElbowPosition,
        kind: RuleKind::Graded {
            extract: x::elbow_flare,
            fallback: 45.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![60.0 => Low, 75.0 => Medium],
                copy: IssueCopy {
                    title: "Elbows Flaring",
                    description: "Your elbows open to {value}° from the torso, shifting work to the rear delts.",
                    correction: "Pull the elbows back toward the hips at about 45° from the body.",
                },
            }),
        },
    },
    Rule {
        metric: "knee_angle",
        issue_type: IssueType::HipPosition,
        kind: RuleKind::Graded {
            extract: x::knee_angle,
            fallback: 150.0,
            precision: 0,
            unit: "°",
            below: Some(Grade {
                tiers: tiers![110.0 => Medium],
                copy: IssueCopy {
                    title: "Knees Too Bent",
                    description: "Your knees bend to {value}°, dropping the hips into a squat.",
                    correction: "Keep a soft knee bend and push the hips back instead of down.",
                },
            }),
            above: Some(Grade {
                tiers: tiers![175.0 => Low],
                copy: IssueCopy {
                    title: "Knees Locked",
                    description: "Your knees are straight at {value}°, putting strain on the hamstrings and lower back.",
                    correction: "Unlock the knees slightly to hold the hinge comfortably.",
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
                    title: "Head Out of Line",
                    description: "Your head sits {value}% of torso length off the line of the spine.",
                    correction: "Look at the floor a little ahead of you to keep the neck neutral.",
                },
            }),
        },
    },
];

const TIPS: &[TipSet] = &[
    TipSet {
        issue_type: IssueType::BackPosition,
        tips: &[
            "Chest-supported rows teach the position without the lower back load.",
            "Practice hip hinges with a dowel along the spine.",
        ],
    },
    TipSet {
        issue_type: IssueType::ElbowPosition,
        tips: &["Think about driving the elbows into your back pockets."],
    },
    TipSet {
        issue_type: IssueType::HipPosition,
        tips: &["Set the hinge with a Romanian deadlift before the first pull."],
    },
    TipSet {
        issue_type: IssueType::HeadPosition,
        tips: &["Keep a packed chin, as if holding an egg under it."],
    },
];
