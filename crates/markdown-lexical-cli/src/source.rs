use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

const MARKDOWN_EXT: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(PathBuf),
}

/// Read a markdown source file
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(SourceError::Io)
}

/// Last modification time of `path`, used as the post's publish date.
pub fn modified_at(path: &Path) -> Result<DateTime<Utc>, SourceError> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(modified.into())
}

/// List the `.md` files directly inside `dir`, sorted by file name.
///
/// Legacy posts are named by date, so name order is publication order.
pub fn scan_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    if !dir.is_dir() {
        return Err(SourceError::InvalidSourceDir(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == MARKDOWN_EXT
        {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// File name without its `.md` extension, used as the title of last resort.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.md");

        let err = read_source(&missing).unwrap_err();

        assert!(matches!(err, SourceError::NotFound(p) if p == missing));
    }

    #[test]
    fn read_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("post.md");
        fs::write(&path, "# Hi").unwrap();

        assert_eq!(read_source(&path).unwrap(), "# Hi");
    }

    #[test]
    fn modified_at_of_fresh_file_is_recent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("post.md");
        fs::write(&path, "body").unwrap();

        let age = Utc::now() - modified_at(&path).unwrap();

        assert!(age.num_minutes() < 5);
    }

    #[test]
    fn scan_only_markdown_sorted_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("2021-02-b.md"), "").unwrap();
        fs::write(root.join("2020-12-a.md"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::create_dir(root.join("sub.md")).unwrap();
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("nested/2019-x.md"), "").unwrap();

        let files = scan_markdown_files(root).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_stem(p)).collect();

        assert_eq!(names, vec!["2020-12-a", "2021-02-b"]);
    }

    #[test]
    fn scan_rejects_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        assert!(matches!(
            scan_markdown_files(&missing),
            Err(SourceError::InvalidSourceDir(_))
        ));
    }

    #[test]
    fn stem_drops_extension() {
        assert_eq!(file_stem(Path::new("/blog/My Post.md")), "My Post");
    }
}
