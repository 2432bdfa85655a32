#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

mod config;
mod content;
mod error;
mod git;
mod pattern;
mod random;
mod schedule;
mod system;
pub mod generate;
pub mod output;

#[cfg(all(test, unix))]
mod testing;

pub use config::{BackdatedOverrides, Config, PatternOverrides, load_config};
pub use error::{ConfigError, GenerateError};
pub use generate::{
    Reporter, RunReport, create_backdated_commits, create_patterned_commits, plan_backdated,
    plan_patterned,
};
pub use git::{DefaultGitRunner, GitRunner};
pub use pattern::Pattern;
pub use random::RandomSource;
pub use system::{Clock, DefaultClock, DefaultFsOps, FsOps};
