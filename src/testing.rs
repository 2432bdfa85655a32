use std::cell::RefCell;
use std::collections::VecDeque;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use crate::git::GitRunner;
use crate::random::RandomSource;

#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub(crate) repo: PathBuf,
    pub(crate) args: Vec<String>,
    pub(crate) envs: Vec<(String, String)>,
}

impl Call {
    pub(crate) fn env(&self, key: &str) -> Option<&str> {
        self.envs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn subcommand(&self) -> &str {
        self.args.first().map_or("", String::as_str)
    }
}

/// Fake git that records every invocation. `init` creates a `.git` directory so
/// repository detection behaves like the real tool.
pub(crate) struct RecordingGit {
    calls: RefCell<Vec<Call>>,
    failure: Option<Failure>,
}

struct Failure {
    command: String,
    after: usize,
    stderr: String,
}

impl RecordingGit {
    pub(crate) fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failure: None,
        }
    }

    pub(crate) fn fail_on(self, command: &str, stderr: &str) -> Self {
        self.fail_after(command, 0, stderr)
    }

    /// Let `after` invocations of `command` succeed, then fail every later one.
    pub(crate) fn fail_after(mut self, command: &str, after: usize, stderr: &str) -> Self {
        self.failure = Some(Failure {
            command: command.to_string(),
            after,
            stderr: stderr.to_string(),
        });
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn commits(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.subcommand() == "commit")
            .collect()
    }
}

impl GitRunner for RecordingGit {
    fn run_git(
        &self,
        repo: &Path,
        args: &[&str],
        envs: &[(&str, &str)],
    ) -> std::io::Result<Output> {
        let call = Call {
            repo: repo.to_path_buf(),
            args: args.iter().map(ToString::to_string).collect(),
            envs: envs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        };
        let subcommand = call.subcommand().to_string();
        let previous = self
            .calls
            .borrow()
            .iter()
            .filter(|c| c.subcommand() == subcommand)
            .count();
        self.calls.borrow_mut().push(call);

        if let Some(failure) = &self.failure
            && failure.command == subcommand
            && previous >= failure.after
        {
            return Ok(Output {
                status: ExitStatus::from_raw(1 << 8),
                stdout: Vec::new(),
                stderr: failure.stderr.clone().into_bytes(),
            });
        }
        if subcommand == "init" {
            std::fs::create_dir_all(repo.join(".git"))?;
        }
        Ok(Output {
            status: ExitStatus::from_raw(0),
            stdout: Vec::new(),
            stderr: Vec::new(),
        })
    }
}

/// Replays queued answers; `weighted` and `uniform` share one queue of integers.
pub(crate) struct Scripted {
    numbers: VecDeque<u32>,
    coins: VecDeque<bool>,
}

impl Scripted {
    pub(crate) fn new(numbers: &[u32], coins: &[bool]) -> Self {
        Self {
            numbers: numbers.iter().copied().collect(),
            coins: coins.iter().copied().collect(),
        }
    }

    /// Always answers with the lowest allowed value and a `true` coin.
    pub(crate) fn low() -> Self {
        Self::new(&[], &[])
    }
}

impl RandomSource for Scripted {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.numbers.pop_front().unwrap_or(low).clamp(low, high)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.coins.pop_front().unwrap_or(true)
    }

    fn weighted(&mut self, weights: &[u32]) -> usize {
        let last = weights.len().saturating_sub(1);
        self.numbers
            .pop_front()
            .map_or(0, |n| usize::try_from(n).unwrap_or(last).min(last))
    }
}
