use std::path::Path;

use wsmgr_core::command_stream::spawn_detached;
use wsmgr_core::error::{Result, WsError};

/// Starts profile entries. Implementations must not wait for the child.
pub trait Launcher {
    fn spawn(&self, program: &Path, args: &[String], cwd: Option<&Path>) -> Result<()>;
}

/// Starts real processes; output goes to our stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn spawn(&self, program: &Path, args: &[String], cwd: Option<&Path>) -> Result<()> {
        spawn_detached(program, args, cwd).map_err(|e| WsError::ProfileEntrySpawnFailed {
            path: program.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_program_is_spawn_failure() {
        let program = PathBuf::from("/nonexistent/wsmgr-entry");
        let err = ProcessLauncher.spawn(&program, &[], None).unwrap_err();
        match err {
            WsError::ProfileEntrySpawnFailed { path, .. } => assert_eq!(path, program),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_bare_name_is_found_in_path() {
        let args = vec!["-name=Work".to_string()];
        ProcessLauncher
            .spawn(Path::new("true"), &args, None)
            .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_spawns_in_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let marker = temp.path().join("ran");
        let args = vec!["-c".to_string(), "pwd > ran".to_string()];
        ProcessLauncher
            .spawn(Path::new("sh"), &args, Some(temp.path()))
            .unwrap();

        // The child is not awaited; poll for its output.
        for _ in 0..100 {
            if marker.exists() && !std::fs::read_to_string(&marker).unwrap().is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        let pwd = std::fs::read_to_string(&marker).unwrap();
        assert_eq!(
            std::fs::canonicalize(pwd.trim()).unwrap(),
            std::fs::canonicalize(temp.path()).unwrap()
        );
    }
}
