use crate::error::{PixchunkError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffixes accepted as images, matched case-sensitively.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff"];

/// Fails when the input does not exist or the output is not a directory.
/// When both are wrong, both are reported.
pub fn check_paths(input: &Path, output: &Path) -> Result<()> {
    match (input.exists(), output.is_dir()) {
        (true, true) => {
            tracing::debug!("Path check successful (paths exist and fulfill file/dir conditions)");
            Ok(())
        }
        (false, true) => Err(PixchunkError::InvalidInputPath(input.to_path_buf())),
        (true, false) => Err(PixchunkError::InvalidOutputPath(output.to_path_buf())),
        (false, false) => Err(PixchunkError::InvalidPaths {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        }),
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.contains(&e))
}

/// Resolve `input` to the image files to process.
///
/// A file is taken as-is when its extension is recognized. A directory yields
/// its direct child files with a recognized extension, sorted by name; nested
/// directories are not entered.
pub fn discover_images(input: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    if input.is_file() {
        if has_extension(input, extensions) {
            images.push(input.to_path_buf());
        }
    } else if input.is_dir() {
        for e in WalkDir::new(input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let e = match e {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!("Skipping unreadable directory entry: {err}");
                    continue;
                }
            };
            if e.file_type().is_file() && has_extension(e.path(), extensions) {
                images.push(e.into_path());
            }
        }
    }
    if images.is_empty() {
        return Err(PixchunkError::NoImagesFound(input.to_path_buf()));
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn directory_listing_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "notes.txt", "c.PNG", "d.tiff"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();
        fs::write(dir.path().join("nested.png").join("inner.png"), b"").unwrap();

        let found = discover_images(dir.path(), DEFAULT_EXTENSIONS).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.jpg", "b.png", "d.tiff"]);
    }

    #[test]
    fn single_file_needs_known_extension() {
        let dir = tempfile::tempdir().unwrap();
        let img = dir.path().join("x.bmp");
        let txt = dir.path().join("x.txt");
        fs::write(&img, b"").unwrap();
        fs::write(&txt, b"").unwrap();

        assert_eq!(discover_images(&img, DEFAULT_EXTENSIONS).unwrap(), vec![img]);
        assert!(matches!(
            discover_images(&txt, DEFAULT_EXTENSIONS),
            Err(PixchunkError::NoImagesFound(_))
        ));
    }

    #[test]
    fn empty_directory_finds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            discover_images(dir.path(), DEFAULT_EXTENSIONS),
            Err(PixchunkError::NoImagesFound(_))
        ));
    }

    #[test]
    fn path_check_reports_both_failures() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let file = dir.path().join("file.png");
        fs::write(&file, b"").unwrap();

        assert!(check_paths(&file, dir.path()).is_ok());
        assert!(matches!(
            check_paths(&missing, dir.path()),
            Err(PixchunkError::InvalidInputPath(_))
        ));
        assert!(matches!(
            check_paths(dir.path(), &file),
            Err(PixchunkError::InvalidOutputPath(_))
        ));
        let err = check_paths(&missing, &missing).unwrap_err();
        assert_eq!(err.to_string().lines().count(), 2);
    }
}
