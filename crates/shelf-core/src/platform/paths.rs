//! Executable lookup on the search path.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Locate `program` on the `PATH` of the current process.
///
/// # Platform Behavior
/// - **Windows**: tries each `PATHEXT` extension (`.COM;.EXE;.BAT;.CMD` if unset)
/// - **Other**: the name is used as-is
pub fn find_executable(program: &str) -> Option<PathBuf> {
    let search_path = env::var_os("PATH")?;

    #[cfg(windows)]
    let extensions: Vec<OsString> = env::var_os("PATHEXT")
        .unwrap_or_else(|| OsString::from(".COM;.EXE;.BAT;.CMD"))
        .to_string_lossy()
        .split(';')
        .filter(|ext| !ext.is_empty())
        .map(OsString::from)
        .collect();

    #[cfg(not(windows))]
    let extensions: Vec<OsString> = Vec::new();

    find_executable_in(program, &search_path, &extensions)
}

/// Locate `program` in an explicit search path.
///
/// A program containing a path separator is checked directly instead of
/// being searched for. Each directory is tried with the bare name first,
/// then with every entry of `extensions` appended.
pub fn find_executable_in(
    program: &str,
    search_path: &OsStr,
    extensions: &[OsString],
) -> Option<PathBuf> {
    let direct = Path::new(program);
    if direct.components().count() > 1 {
        return candidate_names(direct, extensions).find(|path| is_executable_file(path));
    }

    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidate_names(&dir.join(program), extensions).collect::<Vec<_>>())
        .find(|path| is_executable_file(path))
}

fn candidate_names<'a>(
    base: &'a Path,
    extensions: &'a [OsString],
) -> impl Iterator<Item = PathBuf> + 'a {
    std::iter::once(base.to_path_buf()).chain(extensions.iter().map(move |ext| {
        let mut name = base.as_os_str().to_owned();
        name.push(ext);
        PathBuf::from(name)
    }))
}

fn is_executable_file(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_executable(path: &Path) {
        fs::write(path, b"#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn test_find_in_second_directory() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        make_executable(&second.path().join("opener"));

        let search = env::join_paths([first.path(), second.path()]).unwrap();
        let found = find_executable_in("opener", &search, &[]).expect("found");
        assert_eq!(found, second.path().join("opener"));
    }

    #[test]
    fn test_find_with_extension() {
        let dir = TempDir::new().unwrap();
        make_executable(&dir.path().join("cmd.exe"));

        let search = env::join_paths([dir.path()]).unwrap();
        let exts = [OsString::from(".com"), OsString::from(".exe")];
        let found = find_executable_in("cmd", &search, &exts).expect("found");
        assert_eq!(found, dir.path().join("cmd.exe"));
    }

    #[test]
    fn test_missing_program() {
        let dir = TempDir::new().unwrap();
        let search = env::join_paths([dir.path()]).unwrap();
        assert!(find_executable_in("no-such-opener", &search, &[]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("opener"), b"data").unwrap();
        let search = env::join_paths([dir.path()]).unwrap();
        assert!(find_executable_in("opener", &search, &[]).is_none());
    }

    #[test]
    fn test_direct_path_is_not_searched() {
        let dir = TempDir::new().unwrap();
        let program = dir.path().join("opener");
        make_executable(&program);

        let found = find_executable_in(program.to_str().unwrap(), OsStr::new(""), &[]);
        assert_eq!(found, Some(program));
    }
}
