use super::types::FormIssue;

pub const MAX_SCORE: u8 = 100;

/// 100 minus the per-severity penalties, floored at 0.
pub fn overall_score(issues: &[FormIssue]) -> u8 {
    let penalty: u32 = issues.iter().map(|i| i.severity.penalty()).sum();
    // saturating_sub keeps the result in 0..=100, so the cast is lossless.
    u32::from(MAX_SCORE).saturating_sub(penalty) as u8
}

/// Most severe first. Stable, so equal severities keep evaluation order.
pub fn sort_by_severity(issues: &mut [FormIssue]) {
    issues.sort_by(|a, b| b.severity.cmp(&a.severity));
}
