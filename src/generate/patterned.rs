use std::path::PathBuf;

use chrono::NaiveDate;

use crate::content::{self, CommitSpec};
use crate::git::GitRunner;
use crate::pattern::Pattern;
use crate::random::RandomSource;
use crate::schedule::trailing_year;
use crate::system::{Clock, FsOps};

use super::{DayPlan, Reporter, RunReport, execute};

#[derive(Debug, Clone)]
pub struct PatternRequest {
    pub repo: PathBuf,
    pub pattern: Pattern,
}

/// Sample a commit count for each day of the year ending on `today`.
pub fn plan_patterned(
    pattern: &Pattern,
    today: NaiveDate,
    rng: &mut dyn RandomSource,
) -> Vec<DayPlan> {
    if let Pattern::Unrecognized(name) = pattern {
        tracing::warn!(pattern = %name, "unrecognized pattern, no commits will be made");
    }
    trailing_year(today)
        .map(|date| DayPlan {
            date,
            commits: pattern.commits_for(date, &mut *rng),
        })
        .collect()
}

/// Fill the trailing year with commits shaped by `request.pattern`.
///
/// Per-day counts are drawn first, then each commit draws its time of day, message and
/// filler token, so a plan sampled from a seeded source matches what a run with the same seed commits.
#[must_use]
pub fn create_patterned_commits(
    request: &PatternRequest,
    fs: &dyn FsOps,
    git: &dyn GitRunner,
    clock: &dyn Clock,
    rng: &mut dyn RandomSource,
    reporter: &Reporter,
) -> RunReport {
    let today = clock.now().date_naive();
    let plan = plan_patterned(&request.pattern, today, rng);
    tracing::debug!(
        repo = %request.repo.display(),
        pattern = %request.pattern,
        %today,
        "pattern plan ready"
    );
    execute(&request.repo, &plan, fs, git, reporter, |date, slot| {
        let time = content::working_hours_time(&mut *rng);
        let message = content::pick_message(&mut *rng);
        let token = rng.uniform(0, u32::MAX);
        CommitSpec {
            file_name: content::filler_file_name(date, slot),
            contents: content::filler_contents(date, slot, token),
            message: message.to_string(),
            when: date.and_time(time),
        }
    })
}
