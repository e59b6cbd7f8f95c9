use super::{Profile, TipSet};
use crate::analyzer::extractors as x;
use crate::analyzer::rules::{Grade, IssueCopy, Rule, RuleKind};
use crate::analyzer::types::IssueType;
use crate::exercises::{Activity, Exercise};
use crate::tiers;

pub static PROFILE: Profile = Profile {
    activity: Activity::Gym(Exercise::Plank),
    rules: RULES,
    tips: TIPS,
    positive_tip: "Perfect plank! Strong straight line from head to heels.",
};

const RULES: &[Rule] = &[
    Rule {
        metric: "hip_sag",
        issue_type: IssueType::HipPosition,
        kind: RuleKind::Graded {
            extract: x::hip_sag,
            fallback: 0.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![10.0 => Medium, 20.0 => High],
                copy: IssueCopy {
                    title: "Hips Sagging",
                    description: "Your hips drop {value}° below the shoulder-to-ankle line, loading the lower back.",
                    correction: "Squeeze the glutes and pull the belly button toward the spine.",
                },
            }),
        },
    },
    Rule {
        metric: "hip_pike",
        issue_type: IssueType::HipPosition,
        kind: RuleKind::Graded {
            extract: x::hip_pike,
            fallback: 0.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![10.0 => Low, 20.0 => Medium],
                copy: IssueCopy {
                    title: "Hips Too High",
                    description: "Your hips rise {value}° above the shoulder-to-ankle line, easing the load on the core.",
                    correction: "Lower the hips until the body forms one straight line.",
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
                tiers: tiers![20.0 => Low, 35.0 => Medium],
                copy: IssueCopy {
                    title: "Head Out of Line",
                    description: "Your head sits {value}% of torso length off the line of the spine.",
                    correction: "Look at the floor just ahead of your hands to keep the neck neutral.",
                },
            }),
        },
    },
    Rule {
        metric: "shoulder_stack",
        issue_type: IssueType::ShoulderPosition,
        kind: RuleKind::Graded {
            extract: x::support_stack,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![20.0 => Low, 35.0 => Medium],
                copy: IssueCopy {
                    title: "Shoulders Not Over Support",
                    description: "Your shoulders sit {value}% of torso length away from your hands or elbows.",
                    correction: "Stack the shoulders directly over the elbows or wrists.",
                },
            }),
        },
    },
];

const TIPS: &[TipSet] = &[
    TipSet {
        issue_type: IssueType::HipPosition,
        tips: &[
            "Hold shorter planks with perfect form rather than long ones with sagging hips.",
            "Dead bugs and hollow holds build the core strength a plank needs.",
        ],
    },
    TipSet {
        issue_type: IssueType::HeadPosition,
        tips: &["Keep a neutral neck: think of making a double chin."],
    },
    TipSet {
        issue_type: IssueType::ShoulderPosition,
        tips: &["Push the floor away to engage the shoulder blades."],
    },
];
