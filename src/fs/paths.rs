//! Path resolution utilities for hostboard
//!
//! Locates the directory holding `.hostboard/` and builds paths inside it.

use std::path::{Path, PathBuf};

/// Find the nearest ancestor (including `start_cwd`) containing a `.hostboard` directory.
///
/// Returns `None` when no ancestor has one; callers then run with defaults.
pub fn find_project_root(start_cwd: &Path) -> Option<PathBuf> {
    let mut current = start_cwd.canonicalize().ok()?;

    loop {
        if get_hostboard_dir(&current).is_dir() {
            return Some(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Directory commands run against: the `--cwd` override or the process cwd
pub fn resolve_cwd(cwd: Option<&Path>) -> PathBuf {
    cwd.map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `<root>/.hostboard`
pub fn get_hostboard_dir(root: &Path) -> PathBuf {
    root.join(".hostboard")
}

/// `<root>/.hostboard/config.json`
pub fn get_config_path(root: &Path) -> PathBuf {
    get_hostboard_dir(root).join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".hostboard")).unwrap();
        temp
    }

    #[test]
    fn test_find_project_root_from_root() {
        let temp = setup_project();
        let root = find_project_root(temp.path()).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_project_root_from_subdir() {
        let temp = setup_project();
        let subdir = temp.path().join("listings").join("drafts");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = find_project_root(&subdir).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_project_root_missing_path() {
        let temp = TempDir::new().unwrap();
        assert!(find_project_root(&temp.path().join("does-not-exist")).is_none());
    }

    #[test]
    fn test_get_config_path() {
        let root = PathBuf::from("/srv/host");
        assert_eq!(get_hostboard_dir(&root), PathBuf::from("/srv/host/.hostboard"));
        assert_eq!(get_config_path(&root), PathBuf::from("/srv/host/.hostboard/config.json"));
    }

    #[test]
    fn test_cwd_override_wins() {
        let listings = PathBuf::from("/srv/listings");
        assert_eq!(resolve_cwd(Some(&listings)), listings);
        assert!(!resolve_cwd(None).as_os_str().is_empty());
    }
}
