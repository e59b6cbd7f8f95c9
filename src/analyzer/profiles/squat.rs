use super::{Profile, TipSet};
use crate::analyzer::extractors as x;
use crate::analyzer::rules::{Grade, IssueCopy, Rule, RuleKind};
use crate::analyzer::types::{IssueType, Severity};
use crate::exercises::{Activity, Exercise};
use crate::tiers;

pub static PROFILE: Profile = Profile {
    activity: Activity::Gym(Exercise::Squat),
    rules: RULES,
    tips: TIPS,
    positive_tip: "Excellent squat form! Keep it up.",
};

const RULES: &[Rule] = &[
    Rule {
        metric: "knee_angle",
        issue_type: IssueType::Depth,
        kind: RuleKind::Graded {
            extract: x::knee_angle,
            fallback: 90.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![100.0 => Medium, 110.0 => High],
                copy: IssueCopy {
                    title: "Insufficient Depth",
                    description: "Your knees only bend to {value}° at the bottom. Aim for thighs parallel to the floor (about 90°).",
                    correction: "Sit back and down as if into a chair, keeping the chest up.",
                },
            }),
        },
    },
    Rule {
        metric: "knee_cave",
        issue_type: IssueType::KneeTracking,
        kind: RuleKind::Graded {
            extract: x::knee_cave,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![10.0 => Medium, 20.0 => High],
                copy: IssueCopy {
                    title: "Knees Caving In",
                    description: "Your knees track {value}% inside your ankles, stressing the knee ligaments.",
                    correction: "Push the knees out over the toes throughout the movement.",
                },
            }),
        },
    },
    Rule {
        metric: "back_angle",
        issue_type: IssueType::BackPosition,
        kind: RuleKind::Graded {
            extract: x::torso_lean,
            fallback: 30.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![45.0 => Medium, 60.0 => High],
                copy: IssueCopy {
                    title: "Excessive Forward Lean",
                    description: "Your torso leans {value}° from vertical, shifting load onto the lower back.",
                    correction: "Keep the chest up and brace the core; drive the hips straight down.",
                },
            }),
        },
    },
    Rule {
        metric: "heel_rise",
        issue_type: IssueType::FootPosition,
        kind: RuleKind::Detector {
            detect: x::heel_rise,
            severity: Severity::Medium,
            copy: IssueCopy {
                title: "Heels Lifting",
                description: "Your heels come off the floor at the bottom of the squat.",
                correction: "Keep your weight over mid-foot and press the whole foot into the floor.",
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
                    description: "Your shoulders are {value}% of frame height out of level, so the bar sits tilted.",
                    correction: "Grip the bar evenly and keep both shoulders at the same height.",
                },
            }),
        },
    },
];

const TIPS: &[TipSet] = &[
    TipSet {
        issue_type: IssueType::Depth,
        tips: &[
            "Practice box squats to groove consistent depth.",
            "Work on ankle and hip mobility with goblet squat holds.",
        ],
    },
    TipSet {
        issue_type: IssueType::KneeTracking,
        tips: &[
            "Place a mini band above the knees during warm-up sets.",
            "Strengthen the glutes with clamshells and lateral band walks.",
        ],
    },
    TipSet {
        issue_type: IssueType::BackPosition,
        tips: &[
            "Front squats reinforce an upright torso.",
            "Brace by taking a deep breath into the belly before each rep.",
        ],
    },
    TipSet {
        issue_type: IssueType::FootPosition,
        tips: &[
            "Stretch the calves and work on ankle dorsiflexion.",
            "Try squatting with a slight heel elevation while mobility improves.",
        ],
    },
    TipSet {
        issue_type: IssueType::ShoulderPosition,
        tips: &["Check your hand spacing on the bar is symmetrical before unracking."],
    },
];
