pub mod analyzer;
pub mod api;
pub mod capture;
pub mod config;
pub mod error;
pub mod exercises;
pub mod geometry;
pub mod landmarks;

pub use analyzer::{
    analyze, analyze_gym_form, analyze_running_form, FormIssue, FormReport, GymFormResult,
    IssueType, RunningFormResult, Severity,
};
pub use capture::Capture;
pub use error::{FcResult, FormCheckError};
pub use exercises::{Activity, Exercise};
pub use landmarks::{DerivedSignals, Joint, Point, Snapshot};
// cmd and reports are modules of the binary crate (main.rs).
