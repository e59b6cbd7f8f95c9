use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use formcheck::analyzer::rules::RuleKind;
use formcheck::analyzer::{profile, FormIssue, FormReport, Profile, Severity, StrideAnalysis};
use formcheck::api::BatchEntry;
use formcheck::Activity;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Cyan,
    }
}

fn score_color(score: u8) -> Color {
    match score {
        80..=u8::MAX => Color::Green,
        60..=79 => Color::Yellow,
        _ => Color::Red,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_form_report(report: &FormReport) {
    let (activity, extra) = match report {
        FormReport::Running(r) => (
            Activity::Running,
            format!("cadence: {}", r.stride.cadence_rating),
        ),
        FormReport::Gym(r) => (
            Activity::Gym(r.exercise),
            format!("rep quality: {}", r.rep_quality),
        ),
    };
    let score = report.overall_score();

    println!("\n🏋️  === {} FORM REPORT === 🏋️", activity.label().to_uppercase());
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{}/100", score))
            .fg(score_color(score))
            .add_attribute(Attribute::Bold),
        Cell::new(extra),
    ]);
    println!("{}", table);

    print_issues(report.issues());
    if let FormReport::Running(r) = report {
        print_stride(&r.stride);
    }
    print_metrics(activity, report);
    print_tips(report.tips());
}

pub fn print_issues(issues: &[FormIssue]) {
    if issues.is_empty() {
        println!("\n✅ No form issues detected.");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Severity").add_attribute(Attribute::Bold),
        Cell::new("Type"),
        Cell::new("Issue"),
        Cell::new("Details"),
        Cell::new("Correction").fg(Color::Green),
    ]);

    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.severity).fg(severity_color(issue.severity)),
            Cell::new(issue.issue_type),
            Cell::new(&issue.title).add_attribute(Attribute::Bold),
            Cell::new(&issue.description),
            Cell::new(&issue.correction).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
}

fn print_metrics(activity: Activity, report: &FormReport) {
    let profile = profile(activity);
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value"),
        Cell::new("Unit"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (name, value) in report.metrics() {
        let unit = profile.rule(name).map_or("", |r| r.unit());
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.2}", value)),
            Cell::new(unit),
        ]);
    }
    println!("\n{}", table);
}

fn print_stride(stride: &StrideAnalysis) {
    let fmt = |v: Option<f32>, precision: usize| match v {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    };

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Cadence").add_attribute(Attribute::Bold),
        Cell::new("Stride (m)"),
        Cell::new("Contact (ms)"),
        Cell::new("Flight (ms)"),
        Cell::new("Duty"),
        Cell::new("Rating"),
    ]);
    table.add_row(vec![
        Cell::new(fmt(stride.cadence, 0)),
        Cell::new(fmt(stride.stride_length, 2)),
        Cell::new(fmt(stride.ground_contact_ms, 0)),
        Cell::new(fmt(stride.flight_time_ms, 0)),
        Cell::new(fmt(stride.duty_factor, 2)),
        Cell::new(stride.cadence_rating),
    ]);
    println!("\n{}", table);
}

pub fn print_tips(tips: &[String]) {
    println!("\n💡 Tips:");
    for tip in tips {
        println!("   • {}", tip);
    }
}

pub fn print_batch_summary(entries: &[BatchEntry]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("File").add_attribute(Attribute::Bold),
        Cell::new("Activity"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Issues"),
        Cell::new("Worst"),
    ]);
    for i in 2..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for entry in entries {
        let file = entry.path.display().to_string();
        let activity = entry.activity.map_or("-".to_string(), |a| a.to_string());

        match (&entry.report, &entry.error) {
            (Some(report), _) => {
                let score = report.overall_score();
                let worst = report
                    .issues()
                    .first()
                    .map_or("-".to_string(), |i| i.title.clone());
                table.add_row(vec![
                    Cell::new(file).add_attribute(Attribute::Bold),
                    Cell::new(activity),
                    Cell::new(score).fg(score_color(score)),
                    Cell::new(report.issues().len()),
                    Cell::new(worst),
                ]);
            }
            (None, error) => {
                table.add_row(vec![
                    Cell::new(file).add_attribute(Attribute::Bold),
                    Cell::new(activity),
                    Cell::new("ERR").fg(Color::Red),
                    Cell::new("-"),
                    Cell::new(error.as_deref().unwrap_or("unknown error")).fg(Color::Red),
                ]);
            }
        }
    }
    println!("\n{}", table);
}

pub fn print_profile(profile: &Profile) {
    println!("\n{} ({})", profile.activity.label(), profile.activity);
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Issue Type"),
        Cell::new("Fallback"),
        Cell::new("Thresholds"),
    ]);

    for rule in profile.rules {
        let (fallback, thresholds) = match rule.kind {
            RuleKind::Graded { fallback, unit, .. } => {
                let tiers: Vec<String> = rule
                    .tiers()
                    .iter()
                    .map(|(side, tier)| {
                        format!("{} {}{} {}", side, tier.bound, unit, tier.severity)
                    })
                    .collect();
                (format!("{}{}", fallback, unit), tiers.join(", "))
            }
            RuleKind::Detector { severity, .. } => {
                ("false".to_string(), format!("detector: {}", severity))
            }
        };
        table.add_row(vec![
            Cell::new(rule.metric).add_attribute(Attribute::Bold),
            Cell::new(rule.issue_type),
            Cell::new(fallback),
            Cell::new(thresholds),
        ]);
    }
    println!("{}", table);
}
