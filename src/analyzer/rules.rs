//! Declarative rule tables and the single evaluator that runs them.
//!
//! A profile is a `&'static [Rule]`. Each rule names one metric, how to
//! extract it, and how to grade it. Keeping thresholds as data means every
//! profile is auditable with `formcheck profiles` and testable without
//! going through the dispatch layer.

use super::types::{FormIssue, IssueType, MetricsMap, Severity};
use crate::landmarks::{DerivedSignals, Snapshot};
use std::fmt;
use tracing::{debug, trace};

/// Everything an extractor may look at for one analysis call.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub snapshot: &'a Snapshot,
    pub signals: &'a DerivedSignals,
}

/// Scalar extractor. `None` means a required joint (or signal) is missing.
pub type ScalarFn = fn(&Frame<'_>) -> Option<f32>;

/// Boolean detector. `None` means it could not be evaluated.
pub type FlagFn = fn(&Frame<'_>) -> Option<bool>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub bound: f32,
    pub severity: Severity,
}

/// Issue text. `{value}` in the description is replaced by the measured
/// value at the rule's precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IssueCopy {
    pub title: &'static str,
    pub description: &'static str,
    pub correction: &'static str,
}

/// One side of a band: its tiers and the copy used when it fires.
#[derive(Debug, Clone, Copy)]
pub struct Grade {
    pub tiers: &'static [Tier],
    pub copy: IssueCopy,
}

#[derive(Clone, Copy)]
pub enum RuleKind {
    /// Fires above the highest exceeded upper tier or below the lowest
    /// undercut lower tier.
    Graded {
        extract: ScalarFn,
        fallback: f32,
        precision: usize,
        unit: &'static str,
        below: Option<Grade>,
        above: Option<Grade>,
    },
    /// Fires with a fixed severity when the detector reports `true`.
    Detector {
        detect: FlagFn,
        severity: Severity,
        copy: IssueCopy,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub metric: &'static str,
    pub issue_type: IssueType,
    pub kind: RuleKind,
}

// Extractor pointers carry no useful Debug output; show the thresholds.
impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graded {
                fallback,
                below,
                above,
                ..
            } => f
                .debug_struct("Graded")
                .field("fallback", fallback)
                .field("below", below)
                .field("above", above)
                .finish(),
            Self::Detector { severity, .. } => f
                .debug_struct("Detector")
                .field("severity", severity)
                .finish(),
        }
    }
}

/// A measured (or defaulted) metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: f32,
    pub measured: bool,
}

/// Builds a `&'static [Tier]` from `bound => Severity` pairs.
#[macro_export]
macro_rules! tiers {
    ($($bound:expr => $severity:ident),+ $(,)?) => {
        &[$($crate::analyzer::rules::Tier {
            bound: $bound,
            severity: $crate::analyzer::types::Severity::$severity,
        }),+]
    };
}

impl Grade {
    /// Highest severity among tiers whose bound `value` exceeds.
    pub fn above(&self, value: f32) -> Option<Severity> {
        self.tiers
            .iter()
            .filter(|t| value > t.bound)
            .map(|t| t.severity)
            .max()
    }

    /// Highest severity among tiers whose bound `value` falls under.
    pub fn below(&self, value: f32) -> Option<Severity> {
        self.tiers
            .iter()
            .filter(|t| value < t.bound)
            .map(|t| t.severity)
            .max()
    }
}

impl Rule {
    pub fn measure(&self, frame: &Frame<'_>) -> Reading {
        match self.kind {
            RuleKind::Graded {
                extract, fallback, ..
            } => match extract(frame) {
                Some(value) if value.is_finite() => Reading {
                    value,
                    measured: true,
                },
                _ => Reading {
                    value: fallback,
                    measured: false,
                },
            },
            RuleKind::Detector { detect, .. } => match detect(frame) {
                Some(flag) => Reading {
                    value: if flag { 1.0 } else { 0.0 },
                    measured: true,
                },
                None => Reading {
                    value: 0.0,
                    measured: false,
                },
            },
        }
    }

    /// Grades a value against this rule's thresholds.
    pub fn classify(&self, value: f32) -> Option<(Severity, IssueCopy)> {
        match &self.kind {
            RuleKind::Graded { below, above, .. } => {
                if let Some(grade) = above {
                    if let Some(severity) = grade.above(value) {
                        return Some((severity, grade.copy));
                    }
                }
                if let Some(grade) = below {
                    if let Some(severity) = grade.below(value) {
                        return Some((severity, grade.copy));
                    }
                }
                None
            }
            RuleKind::Detector { severity, copy, .. } => {
                (value > 0.5).then_some((*severity, *copy))
            }
        }
    }

    pub fn evaluate(&self, frame: &Frame<'_>) -> (Reading, Option<FormIssue>) {
        let reading = self.measure(frame);
        if !reading.measured {
            trace!("{}: joints missing, using fallback {}", self.metric, reading.value);
        }

        let issue = self.classify(reading.value).map(|(severity, copy)| {
            let description = match self.kind {
                RuleKind::Graded { precision, .. } => copy
                    .description
                    .replace("{value}", &format!("{:.*}", precision, reading.value)),
                RuleKind::Detector { .. } => copy.description.to_string(),
            };
            debug!(
                "{} = {:.3} -> {} {}",
                self.metric, reading.value, severity, self.issue_type
            );
            FormIssue {
                issue_type: self.issue_type,
                severity,
                title: copy.title.to_string(),
                description,
                correction: copy.correction.to_string(),
            }
        });

        (reading, issue)
    }

    pub fn unit(&self) -> &'static str {
        match self.kind {
            RuleKind::Graded { unit, .. } => unit,
            RuleKind::Detector { .. } => "",
        }
    }

    /// Every tier bound with its side (`<` or `>`), for reports.
    pub fn tiers(&self) -> Vec<(&'static str, Tier)> {
        match &self.kind {
            RuleKind::Graded { below, above, .. } => {
                let lower = below
                    .iter()
                    .flat_map(|g| g.tiers.iter().map(|t| ("<", *t)));
                let upper = above
                    .iter()
                    .flat_map(|g| g.tiers.iter().map(|t| (">", *t)));
                lower.chain(upper).collect()
            }
            RuleKind::Detector { .. } => Vec::new(),
        }
    }
}

/// Runs every rule in table order. Metrics always contain one entry per rule.
pub fn evaluate_rules(rules: &[Rule], frame: &Frame<'_>) -> (Vec<FormIssue>, MetricsMap) {
    let mut issues = Vec::new();
    let mut metrics = MetricsMap::new();

    for rule in rules {
        let (reading, issue) = rule.evaluate(frame);
        metrics.insert(rule.metric.to_string(), reading.value);
        issues.extend(issue);
    }

    (issues, metrics)
}
