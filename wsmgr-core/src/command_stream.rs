// Standard library
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;

// External crates
use crate::error::{Result, WsError};
use duct::cmd;
use tracing::{debug, warn};
use which::which;

/// Output of a command that ran to completion.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Resolve a tool name through `PATH`.
pub fn resolve_tool(tool_name: &str) -> Result<PathBuf> {
    which(tool_name).map_err(|e| {
        WsError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("`{tool_name}` not found in PATH: {e}"),
        ))
    })
}

/// Run a command to completion and capture stdout and stderr.
///
/// A non-zero exit status is not an error here; callers inspect
/// [`CapturedOutput::status`] since some tools report failures on stdout.
pub fn capture_command<A: AsRef<OsStr>>(command: &str, args: &[A]) -> Result<CapturedOutput> {
    let program = resolve_tool(command)?;
    let output = cmd(program.as_path(), args)
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()?;

    Ok(CapturedOutput {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// A bare name such as `sh` is looked up in `PATH`; anything with a directory
/// part is used as given.
fn resolve_program(program: &Path) -> Result<PathBuf> {
    let bare = program
        .parent()
        .is_some_and(|parent| parent.as_os_str().is_empty());
    if !bare {
        return Ok(program.to_path_buf());
    }
    which(program).map_err(|e| {
        WsError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("`{}` not found in PATH: {e}", program.display()),
        ))
    })
}

/// Start a program without waiting for it.
///
/// stdout and stderr are inherited. The child is reaped on a detached thread
/// which logs a non-zero exit; nothing about its completion is reported back.
pub fn spawn_detached<A: AsRef<OsStr>>(
    program: &Path,
    args: &[A],
    cwd: Option<&Path>,
) -> Result<()> {
    let resolved = resolve_program(program)?;
    let mut expression = cmd(resolved.as_path(), args).unchecked();
    if let Some(dir) = cwd {
        expression = expression.dir(dir);
    }

    let handle = expression.start()?;
    let label = program.display().to_string();
    debug!(program = %label, "started");

    thread::spawn(move || match handle.wait() {
        Ok(output) if !output.status.success() => {
            warn!(program = %label, status = ?output.status.code(), "exited unsuccessfully");
        }
        Ok(_) => debug!(program = %label, "exited"),
        Err(e) => warn!(program = %label, error = %e, "could not be waited on"),
    });

    Ok(())
}
