use super::{Profile, TipSet};
use crate::analyzer::extractors as x;
use crate::analyzer::rules::{Grade, IssueCopy, Rule, RuleKind};
use crate::analyzer::types::{IssueType, Severity};
use crate::exercises::{Activity, Exercise};
use crate::tiers;

pub static PROFILE: Profile = Profile {
    activity: Activity::Gym(Exercise::Deadlift),
    rules: RULES,
    tips: TIPS,
    positive_tip: "Solid deadlift form! Keep the bar close and your back neutral.",
};

const RULES: &[Rule] = &[
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
                    correction: "Keep the chest proud and the neck in line with the spine; pull the slack out of the bar first.",
                },
            }),
        },
    },
    Rule {
        metric: "bar_path",
        issue_type: IssueType::BarPath,
        kind: RuleKind::Graded {
            extract: x::bar_over_midfoot,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![15.0 => Medium, 30.0 => High],
                copy: IssueCopy {
                    title: "Bar Drifting Forward",
                    description: "The bar sits {value}% of torso length away from mid-foot.",
                    correction: "Drag the bar up the shins and thighs; engage the lats to keep it close.",
                },
            }),
        },
    },
    Rule {
        metric: "hip_hinge",
        issue_type: IssueType::HipPosition,
        kind: RuleKind::Graded {
            extract: x::hip_hinge,
            fallback: 90.0,
            precision: 0,
            unit: "°",
            below: Some(Grade {
                tiers: tiers![50.0 => Medium, 35.0 => High],
                copy: IssueCopy {
                    title: "Hips Too Low",
                    description: "Your hip angle closes to {value}°, turning the pull into a squat.",
                    correction: "Set the hips higher so the shoulders start slightly in front of the bar.",
                },
            }),
            above: None,
        },
    },
    Rule {
        metric: "lockout_incomplete",
        issue_type: IssueType::Lockout,
        kind: RuleKind::Detector {
            detect: x::pull_lockout_incomplete,
            severity: Severity::Low,
            copy: IssueCopy {
                title: "Incomplete Lockout",
                description: "At the top, your hips or knees are not fully extended.",
                correction: "Finish by squeezing the glutes and standing tall without leaning back.",
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
                tiers: tiers![8.0 => Low, 14.0 => Medium],
                copy: IssueCopy {
                    title: "Uneven Shoulders",
                    description: "Your shoulders are {value}% of frame height out of level during the pull.",
                    correction: "Pack both shoulders down and pull evenly with both arms.",
                },
            }),
        },
    },
];

const TIPS: &[TipSet] = &[
    TipSet {
        issue_type: IssueType::BackPosition,
        tips: &[
            "Practice Romanian deadlifts with light weight to learn the hinge.",
            "Film your set from the side to check your spine position.",
        ],
    },
    TipSet {
        issue_type: IssueType::BarPath,
        tips: &[
            "Start with the bar over mid-foot, about an inch from the shins.",
            "Think about pushing the floor away rather than pulling the bar.",
        ],
    },
    TipSet {
        issue_type: IssueType::HipPosition,
        tips: &["Hip-hinge drills with a dowel along the spine build the starting position."],
    },
    TipSet {
        issue_type: IssueType::Lockout,
        tips: &["Hip thrusts and rack pulls strengthen the top of the lift."],
    },
    TipSet {
        issue_type: IssueType::ShoulderPosition,
        tips: &["Use a double-overhand or hook grip when asymmetry shows up with a mixed grip."],
    },
];
