use std::env;
use std::path::{Path, PathBuf};

/// Searches the `PATH` directories for an executable with the given name.
///
/// Names containing a path separator are checked directly instead of
/// searched. On Windows every `PATHEXT` extension is tried as well.
/// Returns the first hit, or `None`.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    if name.contains(std::path::MAIN_SEPARATOR) || name.contains('/') {
        let path = PathBuf::from(name);
        return is_executable(&path).then_some(path);
    }

    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        for candidate in candidate_names(name) {
            let full = dir.join(&candidate);
            if is_executable(&full) {
                return Some(full);
            }
        }
    }
    None
}

#[cfg(unix)]
fn candidate_names(name: &str) -> Vec<String> {
    vec![name.to_string()]
}

/// The bare name, then the name with each `PATHEXT` extension appended.
#[cfg(windows)]
fn candidate_names(name: &str) -> Vec<String> {
    let mut candidates = vec![name.to_string()];
    if let Some(pathext) = env::var_os("PATHEXT") {
        for ext in pathext.to_string_lossy().split(';') {
            if !ext.is_empty() {
                candidates.push(format!("{name}{ext}"));
            }
        }
    }
    candidates
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    if !path.is_file() {
        return false;
    }
    match path.metadata() {
        Ok(metadata) => metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn finds_a_standard_tool() {
        let path = find_executable("sh").expect("sh on PATH");
        assert!(path.is_file());
    }

    #[test]
    fn unknown_names_come_back_empty() {
        assert_eq!(find_executable("definitely-not-a-real-program-xyz"), None);
    }

    #[test]
    fn paths_with_separators_are_checked_directly() {
        assert_eq!(find_executable("./definitely/not/here"), None);
        let sh = find_executable("sh").expect("sh on PATH");
        let direct = find_executable(sh.to_str().expect("utf-8 path"));
        assert_eq!(direct, Some(sh));
    }
}
