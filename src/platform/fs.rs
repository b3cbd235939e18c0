// TestBench - platform/fs.rs
//
// Filesystem-backed host commands: read_text_file, write_text_file, list_dir.
// Each maps its I/O failure into a `CommandError` carrying the path.

use crate::util::error::CommandError;
use std::path::Path;

/// Read the full content of a file as UTF-8 text.
///
/// Invalid UTF-8 is an error (`InvalidData`), not a lossy conversion: the
/// buffer is written back verbatim by "Save as…", so silently replacing
/// bytes would corrupt the file on a round trip.
pub fn read_text_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Create or truncate `path` and write `contents` to it.
pub fn write_text_file(path: &Path, contents: &str) -> Result<(), CommandError> {
    std::fs::write(path, contents).map_err(|source| CommandError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// List the immediate children of `path` as full path strings, sorted.
///
/// Fails on the first unreadable entry rather than returning a partial list.
pub fn list_dir(path: &Path) -> Result<Vec<String>, CommandError> {
    let entries = std::fs::read_dir(path).map_err(|source| CommandError::ReadDir {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CommandError::DirEntry {
            path: path.to_path_buf(),
            source,
        })?;
        out.push(entry.path().display().to_string());
    }
    out.sort();

    tracing::trace!(dir = %path.display(), entries = out.len(), "Directory listed");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_then_read_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        write_text_file(&path, "line one\nline two").unwrap();
        assert_eq!(read_text_file(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "a much longer original body").unwrap();
        write_text_file(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file_reports_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_text_file(&path).unwrap_err();
        assert!(matches!(err, CommandError::ReadFile { .. }));
        assert!(err.to_string().starts_with("read_text_file failed:"));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn test_read_invalid_utf8_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        assert!(read_text_file(&path).is_err());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.txt");
        let err = write_text_file(&path, "x").unwrap_err();
        assert!(err.to_string().starts_with("write_text_file failed:"));
    }

    #[test]
    fn test_list_dir_returns_sorted_full_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("c_sub")).unwrap();

        let listed = list_dir(dir.path()).unwrap();
        let expected: Vec<String> = ["a.txt", "b.txt", "c_sub"]
            .iter()
            .map(|n| dir.path().join(n).display().to_string())
            .collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_list_dir_is_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner.txt"), "").unwrap();
        assert_eq!(list_dir(dir.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_list_dir_on_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "").unwrap();
        let err = list_dir(&file).unwrap_err();
        assert!(err.to_string().starts_with("list_dir read_dir failed:"));
    }
}
