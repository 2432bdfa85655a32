use std::path::PathBuf;
use std::process::ExitStatus;

/// Failure that stops a generator run.
#[derive(Debug)]
pub enum GenerateError {
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
    CommandIo {
        command: String,
        source: std::io::Error,
    },
    CommandFailure {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl GenerateError {
    /// The git subcommand involved, if this error came from git.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::CommandIo { command, .. } | Self::CommandFailure { command, .. } => {
                Some(command)
            }
            Self::CreateDir { .. } | Self::WriteFile { .. } => None,
        }
    }
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDir { path, source } => {
                write!(f, "failed to create directory {}: {source}", path.display())
            }
            Self::WriteFile { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            Self::CommandIo { command, source } => {
                write!(f, "failed to launch git {command}: {source}")
            }
            Self::CommandFailure {
                command,
                status,
                stderr,
            } => {
                match status.code() {
                    Some(code) => write!(f, "git {command} failed with exit code {code}")?,
                    None => write!(f, "git {command} was terminated by a signal")?,
                }
                if stderr.is_empty() {
                    Ok(())
                } else {
                    write!(f, ": {stderr}")
                }
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. }
            | Self::WriteFile { source, .. }
            | Self::CommandIo { source, .. } => Some(source),
            Self::CommandFailure { .. } => None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid {
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config {}: {source}", path.display())
            }
            Self::Invalid { message } => write!(f, "invalid config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}
