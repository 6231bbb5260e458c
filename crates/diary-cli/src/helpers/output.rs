//! Writing artifacts to the output directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use diary_core::fs::{write_atomic, write_atomic_new};

use crate::errors::CliError;

/// Write `contents` as `name` inside `dir`, returning the written path.
///
/// See [`write_output`] for the overwrite rules.
pub fn write_artifact(
    dir: &Path,
    name: &str,
    contents: &[u8],
    force: bool,
    source: Option<&Path>,
) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    write_output(&path, contents, false, force, source)?;
    Ok(path)
}

/// Write `contents` to `path`.
///
/// An existing file is only replaced when `force` is set. The file the
/// contents were read from (`source`) is never replaced.
pub fn write_output(
    path: &Path,
    contents: &[u8],
    private: bool,
    force: bool,
    source: Option<&Path>,
) -> anyhow::Result<()> {
    if let Some(source) = source {
        if is_same_file(path, source) {
            return Err(CliError::invalid_input(format!(
                "Refusing to overwrite the input file {}. Choose another --output-dir.",
                path.display()
            ))
            .into());
        }
    }

    let result = if force {
        write_atomic(path, contents, private)
    } else {
        write_atomic_new(path, contents, private)
    };
    result.map_err(|e| -> anyhow::Error {
        if e.kind() == ErrorKind::AlreadyExists {
            CliError::invalid_input(format!(
                "{} already exists. Use --force to replace it.",
                path.display()
            ))
            .into()
        } else {
            anyhow::anyhow!("Failed to write {}: {}", path.display(), e)
        }
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

/// Final path component of `path` as text.
pub fn file_name_of(path: &Path) -> anyhow::Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("Not a file path: {}", path.display()))
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_artifact_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out");
        let path = write_artifact(&out, "photo.jpg.enc", b"sealed", false, None).unwrap();
        assert_eq!(path, out.join("photo.jpg.enc"));
        assert_eq!(std::fs::read(&path).unwrap(), b"sealed");
    }

    #[test]
    fn test_existing_file_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("keep.bin");
        std::fs::write(&existing, b"precious").unwrap();

        let err = write_artifact(dir.path(), "keep.bin", b"other", false, None).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(std::fs::read(&existing).unwrap(), b"precious");

        write_artifact(dir.path(), "keep.bin", b"other", true, None).unwrap();
        assert_eq!(std::fs::read(&existing).unwrap(), b"other");
    }

    #[test]
    fn test_source_is_never_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("photo.dat");
        std::fs::write(&source, b"sealed bytes").unwrap();

        let err =
            write_artifact(dir.path(), "photo.dat", b"plain", true, Some(&source)).unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite the input file"));
        assert_eq!(std::fs::read(&source).unwrap(), b"sealed bytes");
    }

    #[test]
    fn test_file_name_of() {
        assert_eq!(
            file_name_of(Path::new("/tmp/notes/today.txt")).unwrap(),
            "today.txt"
        );
        assert!(file_name_of(Path::new("/")).is_err());
    }
}
