use crate::Result;
use std::fs;
use std::path::Path;

/// Write decoded image bytes to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub fn save_image(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, bytes).map_err(|e| {
        tracing::error!("Failed to save image to {}: {}", path.display(), e);
        e
    })?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::tempdir;

    #[test]
    fn test_save_image_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("generated_image.png");
        fs::write(&path, b"stale contents that are longer").unwrap();

        save_image(&path, b"hello").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_save_image_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/image.png");

        save_image(&path, &[1, 2, 3]).unwrap();

        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_save_image_into_directory_path_fails() {
        let dir = tempdir().unwrap();

        let err = save_image(dir.path(), b"hello").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
