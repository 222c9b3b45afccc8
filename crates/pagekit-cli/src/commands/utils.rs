//! Shared utilities for command implementations.

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(CliError::CurrentDir)
}

/// Absolute project root for a `--root` argument. A trailing `.` component
/// from the default is dropped so output paths read cleanly.
pub fn project_root(root: &Path) -> Result<PathBuf> {
    let resolved = resolve_path(root, &get_cwd()?);
    Ok(resolved.components().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_absolute() {
        let cwd = Path::new("/home/user");
        let abs = Path::new("/etc/site");
        assert_eq!(resolve_path(abs, cwd), PathBuf::from("/etc/site"));
    }

    #[test]
    fn test_resolve_path_relative() {
        let cwd = Path::new("/home/user");
        assert_eq!(
            resolve_path(Path::new("site"), cwd),
            PathBuf::from("/home/user/site")
        );
    }

    #[test]
    fn test_project_root_drops_cur_dir() {
        let root = project_root(Path::new(".")).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, get_cwd().unwrap());
    }
}
