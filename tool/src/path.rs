//! Path absolutizing for user-supplied configuration paths.
//!
//! Paths are made absolute lexically: a leading `~` is expanded, relative
//! paths are joined onto a base directory, and `.`/`..` components are folded
//! without consulting the filesystem. The file need not exist.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` component to the home directory.
///
/// Only a first component that is exactly `~` is expanded. Names such as
/// `~backup.json` or `~user/x` are ordinary relative paths and come back
/// unchanged, as do paths that are not valid UTF-8.
///
/// # Errors
///
/// Returns an error if the path starts with `~` and the home directory
/// cannot be determined.
///
/// # Examples
///
/// ```
/// use tool::path::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// let untouched = expand_tilde(Path::new("~project")).unwrap();
/// assert_eq!(untouched, Path::new("~project"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "Cannot determine home directory".to_string(),
            })?;
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                Ok(home)
            } else {
                Ok(home.join(rest))
            }
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Fold `.` and `..` components of an absolute path.
///
/// A `..` at the root stays at the root.
///
/// # Examples
///
/// ```
/// use tool::path::fold_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(fold_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(fold_components(Path::new("/a/../..")), PathBuf::from("/"));
/// ```
#[must_use]
pub fn fold_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => result.push(Component::RootDir),
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() refuses to remove the root, which is what we want
                result.pop();
            }
        }
    }

    result
}

/// Make `path` absolute relative to `base`.
///
/// # Errors
///
/// Returns an error if tilde expansion fails.
///
/// # Examples
///
/// ```
/// use tool::path::absolutize;
/// use std::path::{Path, PathBuf};
///
/// let abs = absolutize(Path::new("../conf/tool.json"), Path::new("/work/project")).unwrap();
/// assert_eq!(abs, PathBuf::from("/work/conf/tool.json"));
/// ```
pub fn absolutize(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    let joined = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };
    Ok(fold_components(&joined))
}
