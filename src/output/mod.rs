mod plan;
mod style;

use clap::ValueEnum;
use serde_json::json;

use crate::generate::{DayPlan, RunReport};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum TabStyle {
    Rounded,
    Modern,
    Ascii,
    Psql,
    Markdown,
    Blank,
}

#[must_use]
pub fn format_plan(plan: &[DayPlan], style: TabStyle, title: &str) -> String {
    plan::render(plan, style, title)
}

/// Closing lines printed after a run; `kind` names the generator ("backdated", "pattern").
#[must_use]
pub fn format_summary(report: &RunReport, kind: &str) -> String {
    match &report.failure {
        None => format!(
            "\nSuccessfully created {} {kind} commits!\n\
             To push to GitHub:\n\
             1. Create a new repository on GitHub\n\
             2. Add remote: git remote add origin <your-repo-url>\n\
             3. Push: git push -u origin main",
            report.commits
        ),
        Some(err) => format!(
            "\nStopped after {} commits: {err}",
            report.commits
        ),
    }
}

#[must_use]
pub fn to_json(report: &RunReport) -> String {
    let value = json!({
        "commits": report.commits,
        "success": report.is_success(),
        "error": report.failure.as_ref().map(ToString::to_string),
    });
    value.to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::GenerateError;

    fn day(d: u32, commits: u32) -> DayPlan {
        DayPlan {
            date: NaiveDate::from_ymd_opt(2024, 1, d).expect("valid date"),
            commits,
        }
    }

    #[test]
    fn plan_table_lists_active_days_and_total() {
        let plan = [day(1, 2), day(2, 0), day(3, 1)];
        let out = format_plan(&plan, TabStyle::Ascii, "Plan");
        assert!(out.contains("2024-01-01"));
        assert!(!out.contains("2024-01-02"));
        assert!(out.contains("2024-01-03"));
        assert!(out.contains("Wed"));
        assert!(out.contains("3 commits over 3 days"));
    }

    #[test]
    fn empty_plan_says_so() {
        let out = format_plan(&[day(1, 0)], TabStyle::Rounded, "Plan");
        assert!(out.contains("(no commits planned)"));
    }

    #[test]
    fn summary_includes_push_guidance_on_success() {
        let report = RunReport {
            commits: 4,
            failure: None,
        };
        let out = format_summary(&report, "backdated");
        assert!(out.contains("Successfully created 4 backdated commits!"));
        assert!(out.contains("git remote add origin <your-repo-url>"));
        assert!(out.contains("git push -u origin main"));
    }

    #[test]
    fn summary_names_the_generator_kind() {
        let report = RunReport {
            commits: 12,
            failure: None,
        };
        let out = format_summary(&report, "pattern");
        assert!(out.contains("Successfully created 12 pattern commits!"));
        assert!(!out.contains("backdated"));
    }

    #[test]
    fn failed_report_serialises_error_text() {
        let report = RunReport {
            commits: 1,
            failure: Some(GenerateError::CommandIo {
                command: "commit".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no git"),
            }),
        };
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&report)).expect("valid json");
        assert_eq!(value["commits"], 1);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "failed to launch git commit: no git");
        assert!(format_summary(&report, "pattern").contains("Stopped after 1 commits"));
    }
}
