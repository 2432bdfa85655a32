mod backdated;
mod patterned;
mod progress;

pub use backdated::{BackdatedRequest, create_backdated_commits, plan_backdated};
pub use patterned::{PatternRequest, create_patterned_commits, plan_patterned};
pub use progress::Reporter;

use std::path::Path;

use chrono::NaiveDate;

use crate::content::CommitSpec;
use crate::error::GenerateError;
use crate::git::{self, GitRunner};
use crate::system::FsOps;

/// Commits scheduled for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub commits: u32,
}

/// Outcome of a generator run.
///
/// `commits` counts what actually landed in the repository, so a run that
/// stopped early still reports its partial progress next to the failure.
#[derive(Debug, Default)]
pub struct RunReport {
    pub commits: u64,
    pub failure: Option<GenerateError>,
}

impl RunReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

#[must_use]
pub fn planned_total(plan: &[DayPlan]) -> u64 {
    plan.iter().map(|day| u64::from(day.commits)).sum()
}

/// Prepare `repo`, then write, stage and commit one file per planned slot.
///
/// Stops at the first failure.
pub(crate) fn execute<F>(
    repo: &Path,
    plan: &[DayPlan],
    fs: &dyn FsOps,
    git: &dyn GitRunner,
    reporter: &Reporter,
    mut build: F,
) -> RunReport
where
    F: FnMut(NaiveDate, u32) -> CommitSpec,
{
    let mut report = RunReport::default();
    if let Err(err) = prepare_repository(repo, fs, git, reporter) {
        return fail(report, err, reporter);
    }

    reporter.begin(planned_total(plan), "creating commits");
    for day in plan {
        for slot in 0..day.commits {
            let spec = build(day.date, slot);
            if let Err(err) = commit_one(repo, &spec, fs, git) {
                return fail(report, err, reporter);
            }
            report.commits += 1;
            reporter.line(&format!(
                "Created commit {}: {}",
                report.commits, spec.message
            ));
            reporter.advance();
        }
    }
    reporter.finish();
    report
}

fn prepare_repository(
    repo: &Path,
    fs: &dyn FsOps,
    git: &dyn GitRunner,
    reporter: &Reporter,
) -> Result<(), GenerateError> {
    fs.create_dir_all(repo)
        .map_err(|source| GenerateError::CreateDir {
            path: repo.to_path_buf(),
            source,
        })?;
    if git::init_if_missing(repo, fs, git)? {
        reporter.line("Initialized new Git repository");
    }
    Ok(())
}

fn commit_one(
    repo: &Path,
    spec: &CommitSpec,
    fs: &dyn FsOps,
    git: &dyn GitRunner,
) -> Result<(), GenerateError> {
    let path = repo.join(&spec.file_name);
    fs.write_file(&path, &spec.contents)
        .map_err(|source| GenerateError::WriteFile {
            path: path.clone(),
            source,
        })?;
    tracing::debug!(file = %path.display(), "wrote contribution file");
    git::stage(repo, &spec.file_name, git)?;
    git::commit_at(repo, &spec.message, spec.when, git)
}

fn fail(mut report: RunReport, err: GenerateError, reporter: &Reporter) -> RunReport {
    tracing::error!(commits = report.commits, error = %err, "generation stopped");
    reporter.abandon();
    report.failure = Some(err);
    report
}
