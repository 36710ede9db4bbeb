use std::path::Path;

use chrono::{DateTime, Utc};
use markdown_lexical_engine::{ConvertOptions, LexicalRoot, PostMetadata, convert_with};
use serde::Serialize;

use crate::source::{self, SourceError};

/// Everything the content store needs to create one post.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    #[serde(flatten)]
    pub meta: PostMetadata,
    /// Last modification time of the source file.
    pub published_at: DateTime<Utc>,
    pub content: LexicalRoot,
    #[serde(rename = "meta")]
    pub seo: SeoMeta,
}

/// The store's SEO block, a copy of the post's own title and description.
#[derive(Debug, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
}

impl PostRecord {
    pub fn build(
        markdown: &str,
        file_stem: &str,
        published_at: DateTime<Utc>,
        opts: &ConvertOptions,
    ) -> Self {
        let meta = PostMetadata::extract(markdown, Some(file_stem), opts);
        let content = convert_with(markdown, opts).to_lexical();
        let seo = SeoMeta {
            title: meta.title.clone(),
            description: meta.description.clone(),
        };
        Self {
            meta,
            published_at,
            content,
            seo,
        }
    }

    /// Reads `path` and builds its record, dated by the file's mtime.
    pub fn from_path(path: &Path, opts: &ConvertOptions) -> Result<Self, SourceError> {
        let markdown = source::read_source(path)?;
        let published_at = source::modified_at(path)?;
        Ok(Self::build(
            &markdown,
            &source::file_stem(path),
            published_at,
            opts,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn epoch() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    #[test]
    fn record_flattens_metadata() {
        let record = PostRecord::build(
            "# Hello There\n\nBody.",
            "file",
            epoch(),
            &ConvertOptions::default(),
        );
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["title"], "Hello There");
        assert_eq!(value["slug"], "hello-there");
        assert_eq!(value["description"], "Body.");
        assert_eq!(value["meta"]["title"], "Hello There");
        assert_eq!(value["meta"]["description"], "Body.");
        assert_eq!(value["content"]["root"]["type"], "root");
        assert_eq!(
            value["content"]["root"]["children"].as_array().unwrap().len(),
            2
        );
    }

    #[test]
    fn record_title_falls_back_to_stem() {
        let record = PostRecord::build(
            "- only a list",
            "2020-05-07",
            epoch(),
            &ConvertOptions::default(),
        );

        assert_eq!(record.meta.title, "2020-05-07");
        assert_eq!(record.meta.slug, "2020-05-07");
        assert_eq!(record.meta.description, "No description available");
    }

    #[test]
    fn published_at_comes_from_file_mtime() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2020-09-13-post.md");
        fs::write(&path, "# Dated\n\nBody.").unwrap();
        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();

        let record = PostRecord::from_path(&path, &ConvertOptions::default()).unwrap();

        assert_eq!(
            record.published_at,
            DateTime::<Utc>::from_timestamp(1_600_000_000, 0).unwrap()
        );
        let value = serde_json::to_value(&record).unwrap();
        let stamp = value["publishedAt"].as_str().unwrap();
        assert!(stamp.starts_with("2020-09-13T12:26:40"), "{stamp}");
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn from_path_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone.md");

        assert!(matches!(
            PostRecord::from_path(&missing, &ConvertOptions::default()),
            Err(SourceError::NotFound(_))
        ));
    }
}
