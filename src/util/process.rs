//! Subprocess execution for external build tools.
//!
//! The generator and executor are opaque external processes. Their output
//! streams through to the caller's stdout/stderr live, never buffered and
//! replayed, and they inherit the caller's environment -- that inheritance
//! is how the generator locates compilers on PATH.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Error from running an external tool.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The executable could not be located.
    #[error("`{tool}` not found; install it and make sure it is in your PATH")]
    ToolNotFound { tool: String },

    /// The tool ran but exited non-zero.
    #[error("`{command}` failed with {status}")]
    ProcessFailed { command: String, status: ExitStatus },

    /// Spawning failed for a reason other than a missing executable.
    #[error("failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl ExecError {
    /// Exit code of the failed tool, when it ran at all.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::ProcessFailed { status, .. } => status.code(),
            _ => None,
        }
    }
}

/// Builder for external tool invocations.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Display the command for log and error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Run the tool to completion with inherited stdout/stderr.
    ///
    /// Returns `Ok(())` iff the tool exits with status 0. The call blocks
    /// until the child exits; there is no retry and no timeout -- whether
    /// to abort is the caller's decision.
    pub fn stream(&self) -> Result<(), ExecError> {
        // Pre-flight lookup gives a cleaner diagnostic than the raw spawn
        // error and catches tools configured as bare names.
        if which::which(&self.program).is_err() {
            return Err(ExecError::ToolNotFound {
                tool: self.program.display().to_string(),
            });
        }

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        tracing::debug!("running `{}`", self.display_command());

        let status = match cmd.status() {
            Ok(status) => status,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ExecError::ToolNotFound {
                    tool: self.program.display().to_string(),
                });
            }
            Err(e) => {
                return Err(ExecError::Spawn {
                    command: self.display_command(),
                    source: e,
                });
            }
        };

        if !status.success() {
            return Err(ExecError::ProcessFailed {
                command: self.display_command(),
                status,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        let pb = ProcessBuilder::new("cmake").args(["-G", "Ninja", "-B", "build"]);

        assert_eq!(pb.get_program(), Path::new("cmake"));
        assert_eq!(pb.get_args(), ["-G", "Ninja", "-B", "build"]);
        assert_eq!(pb.display_command(), "cmake -G Ninja -B build");
    }

    #[cfg(unix)]
    #[test]
    fn test_stream_in_working_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("marker"), "").unwrap();

        ProcessBuilder::new("sh")
            .args(["-c", "test -f marker"])
            .cwd(tmp.path())
            .stream()
            .unwrap();
    }

    #[test]
    fn test_stream_success() {
        ProcessBuilder::new("echo").arg("hello").stream().unwrap();
    }

    #[test]
    fn test_stream_tool_not_found() {
        let err = ProcessBuilder::new("definitely-not-a-real-tool")
            .stream()
            .unwrap_err();

        assert!(matches!(err, ExecError::ToolNotFound { .. }));
        assert_eq!(err.exit_code(), None);
        assert!(err.to_string().contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_stream_nonzero_exit() {
        let err = ProcessBuilder::new("sh")
            .args(["-c", "exit 7"])
            .stream()
            .unwrap_err();

        assert!(matches!(err, ExecError::ProcessFailed { .. }));
        assert_eq!(err.exit_code(), Some(7));
    }
}
