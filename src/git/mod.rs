mod commands;
mod runner;

pub use runner::{DefaultGitRunner, GitRunner};

pub(crate) use commands::{commit_at, init_if_missing, stage};
