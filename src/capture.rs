//! On-disk capture format: one snapshot, plus optionally the activity it
//! shows and any derived signals measured alongside it.

use crate::error::{FcResult, FormCheckError};
use crate::exercises::Activity;
use crate::landmarks::{DerivedSignals, Snapshot};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Capture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
    pub landmarks: Snapshot,
    #[serde(default)]
    pub signals: DerivedSignals,
}

impl Capture {
    pub fn new(landmarks: Snapshot) -> Self {
        Self {
            landmarks,
            ..Default::default()
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FcResult<Self> {
        let content = fs::read_to_string(&path)?;
        let capture = Self::from_json(&content)?;
        if capture.landmarks.detected_count() == 0 {
            warn!(
                "⚠️  Capture {:?} has no detected joints; every metric will use its fallback.",
                path.as_ref()
            );
        }
        Ok(capture)
    }

    pub fn from_reader<R: Read>(reader: R) -> FcResult<Self> {
        let capture: Capture = serde_json::from_reader(reader)?;
        capture.validate()?;
        Ok(capture)
    }

    pub fn from_json(content: &str) -> FcResult<Self> {
        let capture: Capture = serde_json::from_str(content)?;
        capture.validate()?;
        Ok(capture)
    }

    /// Rejects values the engine cannot reason about. Coordinates outside
    /// the frame are legal (detectors extrapolate limbs) but logged.
    pub fn validate(&self) -> FcResult<()> {
        for (joint, point) in self.landmarks.iter() {
            if !point.is_finite() {
                return Err(FormCheckError::Validation(format!(
                    "joint '{}' has a non-finite coordinate",
                    joint
                )));
            }
            if !(0.0..=1.0).contains(&point.x) || !(0.0..=1.0).contains(&point.y) {
                warn!(
                    "Joint '{}' at ({:.3}, {:.3}) lies outside the frame",
                    joint, point.x, point.y
                );
            }
        }

        self.signals.validate()
    }
}
