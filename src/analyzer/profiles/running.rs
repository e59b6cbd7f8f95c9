use super::{Profile, TipSet};
use crate::analyzer::extractors as x;
use crate::analyzer::rules::{Grade, IssueCopy, Rule, RuleKind};
use crate::analyzer::types::IssueType;
use crate::exercises::Activity;
use crate::tiers;

pub static PROFILE: Profile = Profile {
    activity: Activity::Running,
    rules: RULES,
    tips: TIPS,
    positive_tip: "Great running form! Keep up the consistent technique.",
};

const RULES: &[Rule] = &[
    Rule {
        metric: "forward_lean",
        issue_type: IssueType::Posture,
        kind: RuleKind::Graded {
            extract: x::torso_lean,
            fallback: 7.5,
            precision: 1,
            unit: "°",
            below: Some(Grade {
                tiers: tiers![3.0 => Low],
                copy: IssueCopy {
                    title: "Too Upright",
                    description: "Your torso leans only {value}° forward. A slight lean from the ankles helps you fall into each stride.",
                    correction: "Lean gently forward from the ankles, not the waist.",
                },
            }),
            above: Some(Grade {
                tiers: tiers![12.0 => Medium, 20.0 => High],
                copy: IssueCopy {
                    title: "Excessive Forward Lean",
                    description: "Your torso leans {value}° forward, which loads the lower back and shortens your stride.",
                    correction: "Run tall: imagine a string pulling the top of your head upward.",
                },
            }),
        },
    },
    Rule {
        metric: "shoulder_level",
        issue_type: IssueType::Posture,
        kind: RuleKind::Graded {
            extract: x::shoulder_level,
            fallback: 0.0,
            precision: 2,
            unit: "",
            below: None,
            above: Some(Grade {
                tiers: tiers![0.03 => Medium, 0.06 => High],
                copy: IssueCopy {
                    title: "Uneven Shoulders",
                    description: "One shoulder sits {value} of frame height above the other, a sign of tension or compensation.",
                    correction: "Drop and relax both shoulders; keep them level and away from your ears.",
                },
            }),
        },
    },
    Rule {
        metric: "arm_swing_symmetry",
        issue_type: IssueType::ArmSwing,
        kind: RuleKind::Graded {
            extract: x::arm_swing_symmetry,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![15.0 => Medium, 30.0 => High],
                copy: IssueCopy {
                    title: "Asymmetric Arm Swing",
                    description: "Your elbow angles differ by {value}% between arms, which can throw off your rhythm.",
                    correction: "Swing both arms through the same range, driving the elbows straight back.",
                },
            }),
        },
    },
    Rule {
        metric: "elbow_angle",
        issue_type: IssueType::ArmSwing,
        kind: RuleKind::Graded {
            extract: x::elbow_angle,
            fallback: 90.0,
            precision: 0,
            unit: "°",
            below: Some(Grade {
                tiers: tiers![70.0 => Low, 50.0 => Medium],
                copy: IssueCopy {
                    title: "Arms Too Bent",
                    description: "Your elbows are bent to {value}°, shortening the arm swing.",
                    correction: "Open the elbows to roughly 90° and let the arms swing from the shoulder.",
                },
            }),
            above: Some(Grade {
                tiers: tiers![110.0 => Low, 140.0 => Medium],
                copy: IssueCopy {
                    title: "Arms Too Straight",
                    description: "Your elbows are open to {value}°, making the arm swing long and slow.",
                    correction: "Bend the elbows to about 90° and keep the hands relaxed near the hips.",
                },
            }),
        },
    },
    Rule {
        metric: "arm_crossover",
        issue_type: IssueType::ArmSwing,
        kind: RuleKind::Graded {
            extract: x::arm_crossover,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![10.0 => Low, 25.0 => Medium],
                copy: IssueCopy {
                    title: "Arms Crossing Midline",
                    description: "A hand crosses your body's midline by {value}% of shoulder width, adding torso rotation.",
                    correction: "Keep the hands moving forward and back, brushing the hips rather than crossing the chest.",
                },
            }),
        },
    },
    Rule {
        metric: "vertical_oscillation",
        issue_type: IssueType::VerticalOscillation,
        kind: RuleKind::Graded {
            extract: x::vertical_oscillation,
            fallback: 0.0,
            precision: 1,
            unit: "cm",
            below: None,
            above: Some(Grade {
                tiers: tiers![6.0 => Medium, 12.0 => High],
                copy: IssueCopy {
                    title: "Excessive Bounce",
                    description: "You bounce {value} cm per stride; that energy goes up instead of forward.",
                    correction: "Think about running forward, not up. Quicker, lighter steps reduce bounce.",
                },
            }),
        },
    },
    Rule {
        metric: "hip_drop",
        issue_type: IssueType::HipStability,
        kind: RuleKind::Graded {
            extract: x::hip_tilt,
            fallback: 0.0,
            precision: 1,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![5.0 => Medium, 10.0 => High],
                copy: IssueCopy {
                    title: "Hip Drop",
                    description: "Your pelvis tilts {value}° from level, pointing to weak hip stabilisers.",
                    correction: "Engage the glutes on each landing and keep the pelvis level.",
                },
            }),
        },
    },
    Rule {
        metric: "knee_drive",
        issue_type: IssueType::KneeDrive,
        kind: RuleKind::Graded {
            extract: x::knee_drive,
            fallback: 110.0,
            precision: 0,
            unit: "°",
            below: None,
            above: Some(Grade {
                tiers: tiers![140.0 => Low, 160.0 => Medium],
                copy: IssueCopy {
                    title: "Limited Knee Drive",
                    description: "Your swing knee only bends to {value}°, limiting stride power.",
                    correction: "Lift the knee forward during the swing phase and drive through the hip.",
                },
            }),
        },
    },
    Rule {
        metric: "overstride",
        issue_type: IssueType::FootStrike,
        kind: RuleKind::Graded {
            extract: x::overstride,
            fallback: 0.0,
            precision: 0,
            unit: "%",
            below: None,
            above: Some(Grade {
                tiers: tiers![15.0 => Medium, 25.0 => High],
                copy: IssueCopy {
                    title: "Overstriding",
                    description: "Your foot lands {value}% of leg length ahead of the hips, braking each stride.",
                    correction: "Land with the foot beneath your hips; shorten the stride and quicken the turnover.",
                },
            }),
        },
    },
];

const TIPS: &[TipSet] = &[
    TipSet {
        issue_type: IssueType::Posture,
        tips: &[
            "Practice running tall with a slight forward lean from the ankles.",
            "Add planks and dead bugs to build core stability for posture.",
        ],
    },
    TipSet {
        issue_type: IssueType::ArmSwing,
        tips: &[
            "Do arm swing drills: stand still and swing the arms at 90° for 30 seconds.",
            "Keep the hands relaxed, as if holding a potato chip.",
        ],
    },
    TipSet {
        issue_type: IssueType::VerticalOscillation,
        tips: &[
            "Run to a metronome at 170-180 steps per minute to shorten ground contact.",
            "Try skipping and quick-feet drills to build a lighter stride.",
        ],
    },
    TipSet {
        issue_type: IssueType::HipStability,
        tips: &[
            "Strengthen the hips with clamshells, side planks and single-leg squats.",
            "Add lateral band walks to your warm-up.",
        ],
    },
    TipSet {
        issue_type: IssueType::KneeDrive,
        tips: &[
            "Practice high knees and A-skips to build knee drive.",
            "Hill sprints naturally encourage a stronger knee lift.",
        ],
    },
    TipSet {
        issue_type: IssueType::FootStrike,
        tips: &[
            "Aim to land with the foot under your hips, not out in front.",
            "Increase cadence by 5% to shorten the stride naturally.",
        ],
    },
];
