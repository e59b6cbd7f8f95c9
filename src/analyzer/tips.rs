use super::profiles::Profile;
use super::types::{CadenceRating, FormIssue, IssueType};

pub const LOW_CADENCE_TIP: &str =
    "Your cadence is low. Aim for 170-180 steps per minute with shorter, quicker steps.";
pub const HIGH_CADENCE_TIP: &str =
    "Your cadence is very high. Make sure you are not shuffling; let the stride open up naturally.";

/// Tips for every distinct issue type, in the order the types first appear.
/// A clean result gets the profile's single positive tip.
pub fn generate_tips(profile: &Profile, issues: &[FormIssue]) -> Vec<String> {
    if issues.is_empty() {
        return vec![profile.positive_tip.to_string()];
    }

    let mut seen: Vec<IssueType> = Vec::new();
    let mut tips: Vec<String> = Vec::new();

    for issue in issues {
        if seen.contains(&issue.issue_type) {
            continue;
        }
        seen.push(issue.issue_type);

        for tip in profile.tips_for(issue.issue_type) {
            if !tips.iter().any(|t| t == tip) {
                tips.push(tip.to_string());
            }
        }
    }

    tips
}

pub fn cadence_tip(rating: CadenceRating) -> Option<&'static str> {
    match rating {
        CadenceRating::Low => Some(LOW_CADENCE_TIP),
        CadenceRating::High => Some(HIGH_CADENCE_TIP),
        CadenceRating::Optimal | CadenceRating::Unknown => None,
    }
}
