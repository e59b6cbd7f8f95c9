use crate::analyzer::{self, FormReport};
use crate::capture::Capture;
use crate::error::{FcResult, FormCheckError};
use crate::exercises::Activity;
use crate::landmarks::DerivedSignals;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome for one file of a batch. Failures are kept so callers can
/// report them next to the successes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub path: PathBuf,
    pub activity: Option<Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<FormReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.report.is_some()
    }
}

/// The activity flag wins over the file; one of them must name it.
pub fn resolve_activity(capture: &Capture, requested: Option<Activity>) -> FcResult<Activity> {
    requested.or(capture.activity).ok_or_else(|| {
        FormCheckError::Validation(
            "no activity given: pass --activity or set \"activity\" in the capture".to_string(),
        )
    })
}

/// Service: analyze an already-loaded capture.
pub fn analyze_capture(
    capture: &Capture,
    requested: Option<Activity>,
    overrides: &DerivedSignals,
) -> FcResult<FormReport> {
    let activity = resolve_activity(capture, requested)?;
    let signals = capture.signals.merged_with(overrides);
    signals.validate()?;

    if activity != Activity::Running && !signals.entries().is_empty() {
        warn!("Derived signals are ignored for {}", activity.label());
    }

    Ok(analyzer::analyze(&capture.landmarks, activity, Some(&signals)))
}

/// Service: load a capture file and analyze it.
pub fn analyze_file<P: AsRef<Path>>(
    path: P,
    requested: Option<Activity>,
    overrides: &DerivedSignals,
) -> FcResult<FormReport> {
    info!("📂 Loading capture: {}", path.as_ref().display());
    let capture = Capture::load_from_file(&path)?;
    let report = analyze_capture(&capture, requested, overrides)?;
    info!(
        "✅ {}: score {} ({} issues)",
        path.as_ref().display(),
        report.overall_score(),
        report.issues().len()
    );
    Ok(report)
}

/// Service: analyze many captures in parallel. Output order matches input.
pub fn analyze_batch(paths: &[PathBuf], requested: Option<Activity>) -> Vec<BatchEntry> {
    info!("🔥 Analyzing {} captures", paths.len());

    paths
        .par_iter()
        .map(|path| {
            let outcome = Capture::load_from_file(path).and_then(|capture| {
                let activity = resolve_activity(&capture, requested)?;
                let report = analyze_capture(&capture, Some(activity), &DerivedSignals::default())?;
                Ok((activity, report))
            });

            match outcome {
                Ok((activity, report)) => BatchEntry {
                    path: path.clone(),
                    activity: Some(activity),
                    report: Some(report),
                    error: None,
                },
                Err(e) => {
                    warn!("❌ {}: {}", path.display(), e);
                    BatchEntry {
                        path: path.clone(),
                        activity: requested,
                        report: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
}
