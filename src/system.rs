use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

pub trait FsOps {
    fn is_repo(&self, dir: &Path) -> bool;
    fn expand_tilde(&self, p: &Path) -> PathBuf;

    /// Create `dir` and any missing parents. Succeeds if it already exists.
    ///
    /// # Errors
    /// Returns the underlying I/O error when a component cannot be created.
    fn create_dir_all(&self, dir: &Path) -> std::io::Result<()>;

    /// Write `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns the underlying I/O error when the file cannot be written.
    fn write_file(&self, path: &Path, contents: &str) -> std::io::Result<()>;
}

pub struct DefaultFsOps;
impl FsOps for DefaultFsOps {
    fn is_repo(&self, dir: &Path) -> bool {
        dir.join(".git").is_dir()
    }
    fn expand_tilde(&self, p: &Path) -> PathBuf {
        if let Some(home) = std::env::var_os("HOME") {
            let home = PathBuf::from(home);
            if p.starts_with("~")
                && let Ok(rest) = p.strip_prefix("~")
            {
                return home.join(rest);
            }
        }
        p.to_path_buf()
    }
    fn create_dir_all(&self, dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(dir)
    }
    fn write_file(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        std::fs::write(path, contents)
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct DefaultClock;
impl Clock for DefaultClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
