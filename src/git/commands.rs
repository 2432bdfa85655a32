use std::path::Path;
use std::process::Output;

use chrono::NaiveDateTime;

use crate::error::GenerateError;
use crate::system::FsOps;

use super::GitRunner;

pub(crate) const AUTHOR_DATE_VAR: &str = "GIT_AUTHOR_DATE";
pub(crate) const COMMITTER_DATE_VAR: &str = "GIT_COMMITTER_DATE";
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Run `git init` unless `repo` already holds a `.git` directory.
///
/// Returns `true` when a new repository was initialised.
pub(crate) fn init_if_missing(
    repo: &Path,
    fs: &dyn FsOps,
    git: &dyn GitRunner,
) -> Result<bool, GenerateError> {
    if fs.is_repo(repo) {
        tracing::debug!(repo = %repo.display(), "repository already initialised");
        return Ok(false);
    }
    run_checked(repo, git, &["init"], &[])?;
    tracing::info!(repo = %repo.display(), "initialised repository");
    Ok(true)
}

pub(crate) fn stage(repo: &Path, file: &str, git: &dyn GitRunner) -> Result<(), GenerateError> {
    run_checked(repo, git, &["add", "--", file], &[]).map(drop)
}

/// Commit the index with author and committer dates both forced to `when`.
pub(crate) fn commit_at(
    repo: &Path,
    message: &str,
    when: NaiveDateTime,
    git: &dyn GitRunner,
) -> Result<(), GenerateError> {
    let stamp = when.format(DATE_FORMAT).to_string();
    run_checked(
        repo,
        git,
        &["commit", "-m", message],
        &[(AUTHOR_DATE_VAR, &stamp), (COMMITTER_DATE_VAR, &stamp)],
    )
    .map(drop)
}

fn run_checked(
    repo: &Path,
    git: &dyn GitRunner,
    args: &[&str],
    envs: &[(&str, &str)],
) -> Result<Output, GenerateError> {
    let command = args.first().copied().unwrap_or_default().to_string();
    tracing::debug!(repo = %repo.display(), ?args, "running git");
    let output = git
        .run_git(repo, args, envs)
        .map_err(|source| GenerateError::CommandIo {
            command: command.clone(),
            source,
        })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GenerateError::CommandFailure {
            command,
            status: output.status,
            stderr,
        });
    }
    Ok(output)
}
