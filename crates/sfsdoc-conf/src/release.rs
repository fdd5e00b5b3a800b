//! Release identifier derived from the source revision.

use anyhow::{Result, anyhow};
use log::warn;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Substituted when the revision cannot be determined.
pub const RELEASE_FALLBACK: &str = "<unknown>";

/// Trait for executing system commands.
/// This allows us to mock `std::process::Command` in tests.
pub trait CommandExecutor {
    /// Executes a system command with the given arguments.
    fn execute(&self, program: &Path, args: &[&str]) -> Result<Output>;
}

/// Default implementation of [`CommandExecutor`] using `std::process::Command`.
#[derive(Debug)]
pub struct RealCommandExecutor;

impl CommandExecutor for RealCommandExecutor {
    fn execute(&self, program: &Path, args: &[&str]) -> Result<Output> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| anyhow!("Failed to execute command: {}", e))
    }
}

/// Resolves the release string from `git describe --tags --always`.
///
/// Any failure, a missing git binary, a non-zero exit, undecodable
/// output, degrades to [`RELEASE_FALLBACK`]. The build carries on and
/// the placeholder simply shows up in the generated output.
pub fn resolve_release(executor: &dyn CommandExecutor) -> String {
    let output = match executor.execute(Path::new("git"), &["describe", "--tags", "--always"]) {
        Ok(output) => output,
        Err(e) => {
            warn!("git describe failed ({}), release set to {}", e, RELEASE_FALLBACK);
            return RELEASE_FALLBACK.to_string();
        }
    };
    if !output.status.success() {
        warn!(
            "git describe exited with {}, release set to {}",
            output.status, RELEASE_FALLBACK
        );
        return RELEASE_FALLBACK.to_string();
    }
    match String::from_utf8(output.stdout) {
        Ok(stdout) => stdout.trim().to_string(),
        Err(_) => {
            warn!("git describe produced non-UTF-8 output, release set to {}", RELEASE_FALLBACK);
            RELEASE_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A mocked executor that doesn't actually run system commands.
    struct MockCommandExecutor {
        stdout: Vec<u8>,
        status_code: i32,
    }

    impl CommandExecutor for MockCommandExecutor {
        fn execute(&self, _program: &Path, _args: &[&str]) -> Result<Output> {
            #[cfg(unix)]
            let status = {
                use std::os::unix::process::ExitStatusExt;
                std::process::ExitStatus::from_raw(self.status_code << 8)
            };
            #[cfg(windows)]
            let status = {
                use std::os::windows::process::ExitStatusExt;
                std::process::ExitStatus::from_raw(self.status_code as u32)
            };

            Ok(Output {
                status,
                stdout: self.stdout.clone(),
                stderr: Vec::new(),
            })
        }
    }

    struct SpawnFailureExecutor;

    impl CommandExecutor for SpawnFailureExecutor {
        fn execute(&self, _program: &Path, _args: &[&str]) -> Result<Output> {
            Err(anyhow!("No such file or directory"))
        }
    }

    #[test]
    fn trims_describe_output() {
        let executor = MockCommandExecutor {
            stdout: b"v2.0.0-6-g30a59aa\n".to_vec(),
            status_code: 0,
        };
        assert_eq!(resolve_release(&executor), "v2.0.0-6-g30a59aa");
    }

    #[test]
    fn untagged_checkout_yields_bare_hash() {
        let executor = MockCommandExecutor {
            stdout: b"30a59aa\n".to_vec(),
            status_code: 0,
        };
        assert_eq!(resolve_release(&executor), "30a59aa");
    }

    #[test]
    fn missing_binary_falls_back() {
        assert_eq!(resolve_release(&SpawnFailureExecutor), RELEASE_FALLBACK);
    }

    #[test]
    fn nonzero_exit_falls_back() {
        let executor = MockCommandExecutor {
            stdout: Vec::new(),
            status_code: 128,
        };
        assert_eq!(resolve_release(&executor), RELEASE_FALLBACK);
    }

    #[test]
    fn undecodable_output_falls_back() {
        let executor = MockCommandExecutor {
            stdout: vec![0xff, 0xfe, 0xfd],
            status_code: 0,
        };
        assert_eq!(resolve_release(&executor), RELEASE_FALLBACK);
    }
}
