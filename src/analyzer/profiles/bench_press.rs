use super::{Profile, TipSet};
use crate::analyzer::extractors as x;
use crate::analyzer::rules::{Grade, IssueCopy, Rule, RuleKind};
use crate::analyzer::types::IssueType;
use crate::exercises::{Activity, Exercise};
use crate::tiers;

pub static PROFILE: Profile = Profile {
    activity: Activity::Gym(Exercise::BenchPress),
    rules: RULES,
    tips: TIPS,
    positive_tip: "Great bench press form! Stay tight and keep the arch.",
};

const RULES: &[Rule] = &[
    Rule {
        metric: "elbow_flare",
        issue_type: IssueType::ElbowPosition,
        kind: RuleKind::Graded {
            extract: x::elbow_flare,
            fallback: 60.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![75.0 => Medium, 85.0 => High],
                copy: IssueCopy {
                    title: "Elbows Flaring",
                    description: "Your upper arms open to {value}° from the torso, stressing the shoulder joint.",
                    correction: "Tuck the elbows to roughly 45-70° from the body as you lower the bar.",
                },
            }),
        },
    },
    Rule {
        metric: "wrist_alignment",
        issue_type: IssueType::WristPosition,
        kind: RuleKind::Graded {
            extract: x::wrist_stack,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![20.0 => Medium, 35.0 => High],
                copy: IssueCopy {
                    title: "Wrists Not Stacked",
                    description: "Your wrists sit {value}% of forearm length off the elbows.",
                    correction: "Keep the wrists straight and directly over the elbows.",
                },
            }),
        },
    },
    Rule {
        metric: "touch_point",
        issue_type: IssueType::BarPath,
        kind: RuleKind::Graded {
            extract: x::touch_point,
            fallback: 30.0,
            precision: 0,
            unit: "%",
            below: Some(Grade {
                tiers: tiers![5.0 => Medium, -10.0 => High],
                copy: IssueCopy {
                    title: "Bar Touching Too High",
                    description: "The bar comes down at {value}% of torso length, up near the neck.",
                    correction: "Lower the bar to mid-chest, around nipple line.",
                },
            }),
            above: Some(Grade {
                tiers: tiers![50.0 => Medium, 65.0 => High],
                copy: IssueCopy {
                    title: "Bar Touching Too Low",
                    description: "The bar comes down at {value}% of torso length, toward the belly.",
                    correction: "Bring the bar down to the lower chest, not the stomach.",
                },
            }),
        },
    },
    Rule {
        metric: "grip_width",
        issue_type: IssueType::HandPosition,
        kind: RuleKind::Graded {
            extract: x::grip_width,
            fallback: 1.6,
            precision: 2,
            unit: "x",
            below: Some(Grade {
                tiers: tiers![1.2 => Low, 1.0 => Medium],
                copy: IssueCopy {
                    title: "Grip Too Narrow",
                    description: "Your grip is {value}x shoulder width, shifting the load onto the triceps.",
                    correction: "Widen the grip so the forearms are vertical at the bottom.",
                },
            }),
            above: Some(Grade {
                tiers: tiers![2.2 => Low, 2.5 => Medium],
                copy: IssueCopy {
                    title: "Grip Too Wide",
                    description: "Your grip is {value}x shoulder width, which strains the shoulders.",
                    correction: "Bring the hands in to about 1.5x shoulder width.",
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
                tiers: tiers![6.0 => Low, 12.0 => Medium],
                copy: IssueCopy {
                    title: "Uneven Shoulders",
                    description: "Your shoulders are {value}% of frame height out of level on the bench.",
                    correction: "Retract both shoulder blades evenly and press them into the bench.",
                },
            }),
        },
    },
];

const TIPS: &[TipSet] = &[
    TipSet {
        issue_type: IssueType::ElbowPosition,
        tips: &[
            "Think about bending the bar to engage the lats and tuck the elbows.",
            "Practice with a lighter weight and a 3-second descent.",
        ],
    },
    TipSet {
        issue_type: IssueType::WristPosition,
        tips: &["Wear wrist wraps and hold the bar low in the palm, over the forearm bones."],
    },
    TipSet {
        issue_type: IssueType::BarPath,
        tips: &["Pause reps on the chest teach a consistent touch point."],
    },
    TipSet {
        issue_type: IssueType::HandPosition,
        tips: &["Use the rings on the bar as a reference to set the same grip every set."],
    },
    TipSet {
        issue_type: IssueType::ShoulderPosition,
        tips: &["Set up by pinching the shoulder blades together before unracking."],
    },
];
