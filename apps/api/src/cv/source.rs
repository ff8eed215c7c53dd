//! Getting CV text out of whatever the caller uploaded.
//!
//! `TextSource` is the async seam between the upload transport and the pure
//! extractor. The declared content type and file extension are advisory only:
//! every source is decoded as plain text.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};

use crate::catalog::{Catalog, Skill};
use crate::cv::extractor::{extract, ParsedCv};
use crate::errors::CvError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// File types the upload form advertises. Anything else is still read as text.
const KNOWN_TEXT_TYPES: &[&str] = &["text/plain", "application/pdf", "text/csv", "application/json"];
const KNOWN_EXTENSIONS: &[&str] = &[".txt", ".pdf", ".csv", ".json"];

#[async_trait]
pub trait TextSource: Send + Sync {
    /// Resolves to the raw text, or a `CvError` when nothing usable can be read.
    async fn read_text(&self) -> Result<String, CvError>;
}

/// A file received from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    fn is_known_type(&self) -> bool {
        let by_type = self
            .content_type
            .as_deref()
            .map(|t| KNOWN_TEXT_TYPES.contains(&t))
            .unwrap_or(false);
        let name = self.file_name.to_lowercase();
        by_type || KNOWN_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
    }
}

#[async_trait]
impl TextSource for UploadedFile {
    async fn read_text(&self) -> Result<String, CvError> {
        if self.bytes.is_empty() {
            return Err(CvError::EmptyFile);
        }

        if !self.is_known_type() {
            warn!(
                file_name = %self.file_name,
                content_type = ?self.content_type,
                "Unsupported file type, attempting to read as text"
            );
        }

        let raw = self.bytes.strip_prefix(UTF8_BOM).unwrap_or(&self.bytes[..]);
        let text = String::from_utf8_lossy(raw).into_owned();
        if text.trim().is_empty() {
            return Err(CvError::ReadFailure(
                "file appears to be empty or could not be read as text".to_string(),
            ));
        }

        debug!(file_name = %self.file_name, chars = text.chars().count(), "Read CV upload");
        Ok(text)
    }
}

/// Text pasted directly by the caller.
#[async_trait]
impl TextSource for String {
    async fn read_text(&self) -> Result<String, CvError> {
        Ok(self.clone())
    }
}

/// Reads the source, then runs the extractor over the text.
pub async fn parse_cv(
    source: &dyn TextSource,
    catalog: &Catalog,
    extra_skills: &[Skill],
) -> Result<ParsedCv, CvError> {
    let text = source.read_text().await?;
    extract(&text, catalog, extra_skills)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, content_type: Option<&str>, body: &'static [u8]) -> UploadedFile {
        UploadedFile::new(name, content_type.map(String::from), Bytes::from_static(body))
    }

    #[tokio::test]
    async fn test_zero_bytes_is_empty_file() {
        let file = upload("cv.txt", Some("text/plain"), b"");
        assert_eq!(file.read_text().await, Err(CvError::EmptyFile));
    }

    #[tokio::test]
    async fn test_whitespace_only_is_read_failure() {
        let file = upload("cv.txt", Some("text/plain"), b"  \n\t ");
        assert!(matches!(file.read_text().await, Err(CvError::ReadFailure(_))));
    }

    #[tokio::test]
    async fn test_bom_is_stripped() {
        let file = upload("cv.txt", None, b"\xEF\xBB\xBFSkills: Rust");
        assert_eq!(file.read_text().await.unwrap(), "Skills: Rust");
    }

    #[tokio::test]
    async fn test_unknown_type_still_read_as_text() {
        let file = upload("cv.docx", Some("application/msword"), b"Python and SQL");
        assert!(!file.is_known_type());
        assert_eq!(file.read_text().await.unwrap(), "Python and SQL");
    }

    #[tokio::test]
    async fn test_invalid_utf8_decoded_lossily() {
        let file = upload("cv.pdf", Some("application/pdf"), b"Docker \xFF Kubernetes");
        let text = file.read_text().await.unwrap();
        assert!(text.starts_with("Docker "));
        assert!(text.ends_with(" Kubernetes"));
    }

    #[tokio::test]
    async fn test_parse_cv_from_upload() {
        let catalog = Catalog::builtin();
        let file = upload("cv.txt", Some("text/plain"), b"Skills: Rust, Docker");
        let parsed = parse_cv(&file, &catalog, &[]).await.unwrap();
        assert!(parsed.skills.contains(&"rust".to_string()));
        assert!(parsed.skills.contains(&"docker".to_string()));
    }

    #[tokio::test]
    async fn test_parse_cv_propagates_empty_file() {
        let catalog = Catalog::builtin();
        let file = upload("cv.txt", None, b"");
        assert_eq!(parse_cv(&file, &catalog, &[]).await, Err(CvError::EmptyFile));
    }

    #[tokio::test]
    async fn test_parse_cv_pasted_text_searches_custom_skills() {
        let catalog = Catalog::builtin();
        let custom = vec![Skill::new("custom-radio", "Ham Radio", "Custom")];
        let text = "Licensed ham radio operator, Python hobbyist".to_string();
        let parsed = parse_cv(&text, &catalog, &custom).await.unwrap();
        assert!(parsed.skills.contains(&"custom-radio".to_string()));
        assert!(parsed.skills.contains(&"py".to_string()));
    }

    #[tokio::test]
    async fn test_parse_cv_blank_text_is_empty_input() {
        let catalog = Catalog::builtin();
        let text = "   ".to_string();
        assert_eq!(parse_cv(&text, &catalog, &[]).await, Err(CvError::EmptyInput));
    }
}
