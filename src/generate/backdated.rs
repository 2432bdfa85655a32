use std::path::PathBuf;

use chrono::NaiveDate;

use crate::content::{self, CommitSpec};
use crate::git::GitRunner;
use crate::schedule::days_inclusive;
use crate::system::{Clock, FsOps};

use super::{DayPlan, Reporter, RunReport, execute};

#[derive(Debug, Clone)]
pub struct BackdatedRequest {
    pub repo: PathBuf,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub commits_per_day: u32,
}

#[must_use]
pub fn plan_backdated(request: &BackdatedRequest) -> Vec<DayPlan> {
    days_inclusive(request.start, request.end)
        .map(|date| DayPlan {
            date,
            commits: request.commits_per_day,
        })
        .collect()
}

/// Commit `commits_per_day` marker files for every day in `start..=end`, each dated at noon.
///
/// A reversed range creates no commits and is not a failure.
#[must_use]
pub fn create_backdated_commits(
    request: &BackdatedRequest,
    fs: &dyn FsOps,
    git: &dyn GitRunner,
    clock: &dyn Clock,
    reporter: &Reporter,
) -> RunReport {
    let plan = plan_backdated(request);
    tracing::debug!(
        repo = %request.repo.display(),
        days = plan.len(),
        per_day = request.commits_per_day,
        "backdated plan ready"
    );
    execute(&request.repo, &plan, fs, git, reporter, |date, slot| {
        CommitSpec {
            file_name: content::marker_file_name(date, slot),
            contents: content::marker_contents(date, slot, clock.now()),
            message: content::daily_message(date),
            when: content::noon(date),
        }
    })
}
