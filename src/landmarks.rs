use crate::error::{FcResult, FormCheckError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// The closed joint vocabulary produced by the pose detector.
///
/// Left/right are the athlete's sides, not the image's.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    EnumCountMacro,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Nose,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

/// A landmark position.
///
/// `x`/`y` are fractions of the frame (x grows rightward, y grows downward).
/// `z` is relative depth and defaults to 0 when the detector has none.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub const fn with_depth(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
            z: (self.z + other.z) * 0.5,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// One point-in-time capture of the detected landmarks.
///
/// Sparse: any joint may be absent. Snapshots are plain values (`Copy`), so
/// builder methods return a new snapshot rather than mutating.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Joint, Point>", into = "BTreeMap<Joint, Point>")]
pub struct Snapshot {
    points: [Option<Point>; Joint::COUNT],
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, joint: Joint, point: Point) -> Self {
        self.points[joint as usize] = Some(point);
        self
    }

    #[must_use]
    pub fn without(mut self, joint: Joint) -> Self {
        self.points[joint as usize] = None;
        self
    }

    #[inline]
    pub fn get(&self, joint: Joint) -> Option<Point> {
        self.points[joint as usize]
    }

    pub fn contains(&self, joint: Joint) -> bool {
        self.get(joint).is_some()
    }

    /// Midpoint of a left/right pair. Falls back to whichever side was
    /// detected; `None` only when both are missing.
    pub fn midpoint(&self, left: Joint, right: Joint) -> Option<Point> {
        match (self.get(left), self.get(right)) {
            (Some(l), Some(r)) => Some(l.midpoint(r)),
            (Some(p), None) | (None, Some(p)) => Some(p),
            (None, None) => None,
        }
    }

    pub fn detected_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    /// Detected joints in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (Joint, Point)> + '_ {
        Joint::iter().filter_map(move |j| self.get(j).map(|p| (j, p)))
    }
}

impl From<BTreeMap<Joint, Point>> for Snapshot {
    fn from(map: BTreeMap<Joint, Point>) -> Self {
        map.into_iter()
            .fold(Snapshot::new(), |snap, (joint, point)| snap.with(joint, point))
    }
}

impl From<Snapshot> for BTreeMap<Joint, Point> {
    fn from(snapshot: Snapshot) -> Self {
        snapshot.iter().collect()
    }
}

impl FromIterator<(Joint, Point)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (Joint, Point)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Snapshot::new(), |snap, (joint, point)| snap.with(joint, point))
    }
}

/// Multi-frame aggregates computed upstream. Passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivedSignals {
    /// Steps per minute.
    pub cadence: Option<f32>,
    /// Metres.
    pub stride_length: Option<f32>,
    pub ground_contact_ms: Option<f32>,
    pub flight_time_ms: Option<f32>,
    pub vertical_oscillation_cm: Option<f32>,
}

impl DerivedSignals {
    /// Returns a copy where every value present in `overrides` replaces ours.
    #[must_use]
    pub fn merged_with(&self, overrides: &DerivedSignals) -> DerivedSignals {
        DerivedSignals {
            cadence: overrides.cadence.or(self.cadence),
            stride_length: overrides.stride_length.or(self.stride_length),
            ground_contact_ms: overrides.ground_contact_ms.or(self.ground_contact_ms),
            flight_time_ms: overrides.flight_time_ms.or(self.flight_time_ms),
            vertical_oscillation_cm: overrides
                .vertical_oscillation_cm
                .or(self.vertical_oscillation_cm),
        }
    }

    /// Every supplied signal must be finite and non-negative.
    pub fn validate(&self) -> FcResult<()> {
        for (name, value) in self.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(FormCheckError::Validation(format!(
                    "signal '{}' must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// `(name, value)` for every supplied signal.
    pub fn entries(&self) -> Vec<(&'static str, f32)> {
        [
            ("cadence", self.cadence),
            ("stride_length", self.stride_length),
            ("ground_contact_ms", self.ground_contact_ms),
            ("flight_time_ms", self.flight_time_ms),
            ("vertical_oscillation_cm", self.vertical_oscillation_cm),
        ]
        .into_iter()
        .filter_map(|(name, v)| v.map(|v| (name, v)))
        .collect()
    }
}
