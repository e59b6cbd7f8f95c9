use super::{Profile, TipSet};
use crate::analyzer::extractors as x;
use crate::analyzer::rules::{Grade, IssueCopy, Rule, RuleKind};
use crate::analyzer::types::IssueType;
use crate::exercises::{Activity, Exercise};
use crate::tiers;

pub static PROFILE: Profile = Profile {
    activity: Activity::Gym(Exercise::PushUp),
    rules: RULES,
    tips: TIPS,
    positive_tip: "Great push-up form! Full range of motion with a solid body line.",
};

const RULES: &[Rule] = &[
    Rule {
        metric: "elbow_angle",
        issue_type: IssueType::Depth,
        kind: RuleKind::Graded {
            extract: x::elbow_angle,
            fallback: 90.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![100.0 => Medium, 120.0 => High],
                copy: IssueCopy {
                    title: "Insufficient Depth",
                    description: "Your elbows only bend to {value}° at the bottom.",
                    correction: "Lower until the chest nearly touches the floor.",
                },
            }),
        },
    },
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
                tiers: tiers![12.0 => Medium, 25.0 => High],
                copy: IssueCopy {
                    title: "Hips Sagging",
                    description: "Your hips drop {value}° below the shoulder-to-ankle line.",
                    correction: "Tighten the core and glutes to hold a straight line.",
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
                tiers: tiers![15.0 => Low, 25.0 => Medium],
                copy: IssueCopy {
                    title: "Hips Too High",
                    description: "Your hips rise {value}° above the shoulder-to-ankle line.",
                    correction: "Lower the hips so the body moves as one plank.",
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
                tiers: tiers![60.0 => Medium, 75.0 => High],
                copy: IssueCopy {
                    title: "Elbows Flaring",
                    description: "Your upper arms open to {value}° from the torso.",
                    correction: "Keep the elbows at about 45° from the body, pointing back.",
                },
            }),
        },
    },
    Rule {
        metric: "hand_position",
        issue_type: IssueType::HandPosition,
        kind: RuleKind::Graded {
            extract: x::hand_stack,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![20.0 => Low, 35.0 => Medium],
                copy: IssueCopy {
                    title: "Hands Out of Position",
                    description: "Your hands sit {value}% of torso length away from under the shoulders.",
                    correction: "Place the hands directly under the shoulders, slightly wider than shoulder width.",
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
                    correction: "Keep the gaze slightly ahead of the hands and the neck long.",
                },
            }),
        },
    },
];

const TIPS: &[TipSet] = &[
    TipSet {
        issue_type: IssueType::Depth,
        tips: &["Practice incline push-ups to build strength through the full range."],
    },
    TipSet {
        issue_type: IssueType::HipPosition,
        tips: &["Build a stronger body line with plank holds between sets."],
    },
    TipSet {
        issue_type: IssueType::ElbowPosition,
        tips: &["Screw the hands into the floor to bring the elbows in."],
    },
    TipSet {
        issue_type: IssueType::HandPosition,
        tips: &["Check hand placement in a mirror before starting the set."],
    },
    TipSet {
        issue_type: IssueType::HeadPosition,
        tips: &["Keep a neutral neck: think of making a double chin."],
    },
];
