//! Static rule and tip tables, one module per activity.

pub mod barbell_row;
pub mod bench_press;
pub mod deadlift;
pub mod lunge;
pub mod overhead_press;
pub mod plank;
pub mod push_up;
pub mod running;
pub mod squat;

use super::rules::Rule;
use super::types::IssueType;
use crate::exercises::{Activity, Exercise};

/// Coaching cues triggered by any issue of one type.
#[derive(Debug, Clone, Copy)]
pub struct TipSet {
    pub issue_type: IssueType,
    pub tips: &'static [&'static str],
}

#[derive(Debug)]
pub struct Profile {
    pub activity: Activity,
    pub rules: &'static [Rule],
    pub tips: &'static [TipSet],
    /// Emitted alone when nothing fired.
    pub positive_tip: &'static str,
}

impl Profile {
    pub fn tips_for(&self, issue_type: IssueType) -> &'static [&'static str] {
        self.tips
            .iter()
            .find(|set| set.issue_type == issue_type)
            .map_or(&[], |set| set.tips)
    }

    pub fn rule(&self, metric: &str) -> Option<&'static Rule> {
        self.rules.iter().find(|r| r.metric == metric)
    }
}

pub fn profile(activity: Activity) -> &'static Profile {
    match activity {
        Activity::Running => &running::PROFILE,
        Activity::Gym(exercise) => match exercise {
            Exercise::Squat => &squat::PROFILE,
            Exercise::Deadlift => &deadlift::PROFILE,
            Exercise::BenchPress => &bench_press::PROFILE,
            Exercise::OverheadPress => &overhead_press::PROFILE,
            Exercise::BarbellRow => &barbell_row::PROFILE,
            Exercise::Lunge => &lunge::PROFILE,
            Exercise::Plank => &plank::PROFILE,
            Exercise::PushUp => &push_up::PROFILE,
        },
    }
}

pub fn rules_for(activity: Activity) -> &'static [Rule] {
    profile(activity).rules
}
