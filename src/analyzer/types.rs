use crate::exercises::Exercise;
use crate::landmarks::DerivedSignals;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter};

/// Metric name -> value. Ordered so results serialize identically run to run.
pub type MetricsMap = BTreeMap<String, f32>;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Points deducted from the 100-point score. Fixed so historical scores
    /// stay comparable.
    pub const fn penalty(self) -> u32 {
        match self {
            Self::High => 15,
            Self::Medium => 8,
            Self::Low => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    // Running
    Posture,
    ArmSwing,
    VerticalOscillation,
    HipStability,
    KneeDrive,
    FootStrike,
    // Gym
    Depth,
    KneeTracking,
    BackPosition,
    FootPosition,
    BarPath,
    HipPosition,
    Lockout,
    ElbowPosition,
    WristPosition,
    HeadPosition,
    ShoulderPosition,
    HandPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormIssue {
    pub issue_type: IssueType,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub correction: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RepQuality {
    Poor,
    Fair,
    Good,
}

impl RepQuality {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::Good,
            60..=79 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CadenceRating {
    Unknown,
    Low,
    Optimal,
    High,
}

impl CadenceRating {
    pub const OPTIMAL_MIN: f32 = 160.0;
    pub const OPTIMAL_MAX: f32 = 190.0;

    pub fn from_cadence(cadence: Option<f32>) -> Self {
        match cadence {
            None => Self::Unknown,
            Some(c) if c < Self::OPTIMAL_MIN => Self::Low,
            Some(c) if c > Self::OPTIMAL_MAX => Self::High,
            Some(_) => Self::Optimal,
        }
    }
}

/// Stride-level view of the externally supplied gait signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrideAnalysis {
    pub cadence: Option<f32>,
    pub stride_length: Option<f32>,
    pub ground_contact_ms: Option<f32>,
    pub flight_time_ms: Option<f32>,
    /// Fraction of the step spent on the ground.
    pub duty_factor: Option<f32>,
    pub cadence_rating: CadenceRating,
}

impl StrideAnalysis {
    pub fn from_signals(signals: &DerivedSignals) -> Self {
        let duty_factor = match (signals.ground_contact_ms, signals.flight_time_ms) {
            (Some(contact), Some(flight)) if contact > 0.0 && flight > 0.0 => {
                Some(contact / (contact + flight))
            }
            _ => None,
        };

        Self {
            cadence: signals.cadence,
            stride_length: signals.stride_length,
            ground_contact_ms: signals.ground_contact_ms,
            flight_time_ms: signals.flight_time_ms,
            duty_factor,
            cadence_rating: CadenceRating::from_cadence(signals.cadence),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningFormResult {
    pub overall_score: u8,
    pub issues: Vec<FormIssue>,
    pub metrics: MetricsMap,
    pub cadence: Option<f32>,
    pub stride: StrideAnalysis,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymFormResult {
    pub exercise: Exercise,
    pub overall_score: u8,
    pub issues: Vec<FormIssue>,
    pub metrics: MetricsMap,
    pub rep_quality: RepQuality,
    pub tips: Vec<String>,
}

/// Result of the activity-dispatching entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormReport {
    Running(RunningFormResult),
    Gym(GymFormResult),
}

impl FormReport {
    pub fn overall_score(&self) -> u8 {
        match self {
            Self::Running(r) => r.overall_score,
            Self::Gym(r) => r.overall_score,
        }
    }

    pub fn issues(&self) -> &[FormIssue] {
        match self {
            Self::Running(r) => &r.issues,
            Self::Gym(r) => &r.issues,
        }
    }

    pub fn metrics(&self) -> &MetricsMap {
        match self {
            Self::Running(r) => &r.metrics,
            Self::Gym(r) => &r.metrics,
        }
    }

    pub fn tips(&self) -> &[String] {
        match self {
            Self::Running(r) => &r.tips,
            Self::Gym(r) => &r.tips,
        }
    }
}
