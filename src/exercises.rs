use crate::error::FormCheckError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// The eight resistance exercises with their own rule tables.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    Squat,
    Deadlift,
    BenchPress,
    OverheadPress,
    BarbellRow,
    Lunge,
    Plank,
    PushUp,
}

impl Exercise {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::Deadlift => "Deadlift",
            Self::BenchPress => "Bench Press",
            Self::OverheadPress => "Overhead Press",
            Self::BarbellRow => "Barbell Row",
            Self::Lunge => "Lunge",
            Self::Plank => "Plank",
            Self::PushUp => "Push-Up",
        }
    }
}

/// Activity selector: running gait or one of the gym exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Activity {
    Running,
    Gym(Exercise),
}

impl Activity {
    /// All nine activities, running first.
    pub fn all() -> impl Iterator<Item = Activity> {
        std::iter::once(Activity::Running).chain(Exercise::iter().map(Activity::Gym))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Gym(exercise) => exercise.label(),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("running"),
            Self::Gym(exercise) => write!(f, "{}", exercise),
        }
    }
}

impl FromStr for Activity {
    type Err = FormCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace(['-', ' '], "_");
        if name == "running" {
            return Ok(Activity::Running);
        }
        Exercise::from_str(&name)
            .map(Activity::Gym)
            .map_err(|_| FormCheckError::UnknownActivity(s.to_string()))
    }
}

impl TryFrom<String> for Activity {
    type Error = FormCheckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Activity> for String {
    fn from(activity: Activity) -> Self {
        activity.to_string()
    }
}

impl From<Exercise> for Activity {
    fn from(exercise: Exercise) -> Self {
        Activity::Gym(exercise)
    }
}
