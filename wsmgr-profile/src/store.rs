//! Reading profile directories.

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use wsmgr_config::ProfileSettings;
use wsmgr_core::error::{Result, WsError};

/// Owner-execute permission bit.
const OWNER_EXEC: u32 = 0o100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEntry {
    /// A file to start when the profile loads.
    Executable(PathBuf),
    /// Contents of the bookmark entry: a folder name for the bookmark launcher.
    BookmarkFolder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub dir: PathBuf,
    /// Resolved target of the `cwd` link, used as working directory for entries.
    pub cwd: Option<PathBuf>,
    /// In file-name order.
    pub entries: Vec<ProfileEntry>,
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
    settings: ProfileSettings,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>, settings: ProfileSettings) -> Self {
        Self {
            root: root.into(),
            settings,
        }
    }

    pub fn settings(&self) -> &ProfileSettings {
        &self.settings
    }

    /// Names of all profile directories, sorted. A missing root is no profiles.
    pub fn configured_profiles(&self) -> Result<Vec<String>> {
        let read = match fs::read_dir(&self.root) {
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(root = %self.root.display(), "no config root yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in read {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Directory for profile `name`.
    pub fn profile_dir(&self, name: &str) -> Result<PathBuf> {
        let plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains('/')
            && !name.contains('\0');
        if !plain {
            return Err(WsError::Config(format!(
                "\"{name}\" cannot be used as a profile name"
            )));
        }
        Ok(self.root.join(name))
    }

    /// Path of the `cwd` link in profile `name`. It may not exist.
    pub fn cwd_link(&self, name: &str) -> Result<PathBuf> {
        Ok(self.profile_dir(name)?.join(&self.settings.cwd_entry))
    }

    /// Read and classify profile `name`.
    pub fn profile(&self, name: &str) -> Result<Profile> {
        let dir = self.profile_dir(name)?;
        if !dir.is_dir() {
            return Err(WsError::Config(format!(
                "no profile \"{name}\" in {}",
                self.root.display()
            )));
        }

        let cwd = match fs::canonicalize(dir.join(&self.settings.cwd_entry)) {
            Ok(path) => Some(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let mut files = fs::read_dir(&dir)?.collect::<io::Result<Vec<_>>>()?;
        files.sort_by_key(|e| e.file_name());

        let mut entries = Vec::new();
        for file in files {
            let file_name = file.file_name();
            let path = file.path();
            if file_name == self.settings.cwd_entry.as_str() {
                continue;
            }
            if file_name == self.settings.bookmark_entry.as_str() {
                match read_bookmark(&path) {
                    Ok(Some(folder)) => entries.push(ProfileEntry::BookmarkFolder(folder)),
                    Ok(None) => warn!(path = %path.display(), "bookmark entry is empty"),
                    Err(e) => warn!(path = %path.display(), error = %e, "cannot read bookmark entry"),
                }
                continue;
            }
            match is_executable(&path) {
                Ok(true) => entries.push(ProfileEntry::Executable(path)),
                Ok(false) => debug!(path = %path.display(), "not executable, skipped"),
                Err(e) => warn!(path = %path.display(), error = %e, "skipped"),
            }
        }

        Ok(Profile {
            name: name.to_string(),
            dir,
            cwd,
            entries,
        })
    }
}

fn read_bookmark(path: &Path) -> io::Result<Option<String>> {
    let folder = fs::read_to_string(path)?.trim().to_string();
    Ok((!folder.is_empty()).then_some(folder))
}

/// Regular file (or link to one) with the owner-execute bit set.
fn is_executable(path: &Path) -> io::Result<bool> {
    // fs::metadata follows symlinks; a broken link is an error here.
    let meta = fs::metadata(path)?;
    if meta.is_dir() {
        return Ok(false);
    }
    Ok(meta.permissions().mode() & OWNER_EXEC != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::symlink;
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str, mode: u32) {
        fs::write(path, contents).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    fn store(root: &Path) -> ProfileStore {
        ProfileStore::new(root, ProfileSettings::default())
    }

    #[test]
    fn test_missing_root_has_no_profiles() {
        let temp = TempDir::new().unwrap();
        let s = store(&temp.path().join("absent"));
        assert!(s.configured_profiles().unwrap().is_empty());
    }

    #[test]
    fn test_lists_only_directories_sorted() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("work")).unwrap();
        fs::create_dir(temp.path().join("mail")).unwrap();
        fs::write(temp.path().join("config.yaml"), "").unwrap();
        fs::write(temp.path().join("autosave.json"), "[]").unwrap();

        assert_eq!(store(temp.path()).configured_profiles().unwrap(), vec!["mail", "work"]);
    }

    #[test]
    fn test_classifies_entries() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("work");
        let project = temp.path().join("project");
        fs::create_dir_all(dir.join("subdir")).unwrap();
        fs::create_dir(&project).unwrap();

        write(&dir.join("a-editor"), "#!/bin/sh\n", 0o755);
        write(&dir.join("b-notes.txt"), "notes", 0o644);
        write(&dir.join("chrome-rewindow"), "  Work Tabs\n", 0o755);
        write(&project.join("run"), "#!/bin/sh\n", 0o700);
        symlink(project.join("run"), dir.join("c-linked")).unwrap();
        symlink(temp.path().join("gone"), dir.join("d-broken")).unwrap();
        symlink(&project, dir.join("cwd")).unwrap();

        let profile = store(temp.path()).profile("work").unwrap();

        assert_eq!(profile.cwd, Some(fs::canonicalize(&project).unwrap()));
        assert_eq!(
            profile.entries,
            vec![
                ProfileEntry::Executable(dir.join("a-editor")),
                ProfileEntry::Executable(dir.join("c-linked")),
                ProfileEntry::BookmarkFolder("Work Tabs".to_string()),
            ]
        );
    }

    #[test]
    fn test_profile_without_cwd() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();
        let profile = store(temp.path()).profile("empty").unwrap();
        assert_eq!(profile.cwd, None);
        assert!(profile.entries.is_empty());
    }

    #[test]
    fn test_unknown_profile_is_config_error() {
        let temp = TempDir::new().unwrap();
        let err = store(temp.path()).profile("nope").unwrap_err();
        assert!(matches!(err, WsError::Config(_)));
    }

    #[test]
    fn test_rejects_path_like_names() {
        let temp = TempDir::new().unwrap();
        let s = store(temp.path());
        for bad in ["", ".", "..", "a/b"] {
            assert!(s.profile_dir(bad).is_err(), "{bad:?}");
        }
        assert_eq!(s.profile_dir("3").unwrap(), temp.path().join("3"));
    }
}
