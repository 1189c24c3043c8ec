use std::io;
use std::path::Path;

use bytes::Bytes;
use mime::Mime;

/// A file selected for upload.
///
/// The content is held in memory, cloning an `Upload` is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Upload {
    file_name: String,
    content: Bytes,
}

impl Upload {
    /// Creates an upload from in-memory content.
    #[inline]
    pub fn new<S, B>(file_name: S, content: B) -> Self
    where
        S: Into<String>,
        B: Into<Bytes>,
    {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Reads the file at `path`. The upload is named after the last path
    /// component.
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "not a file path")
            })?;
        let content = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, content))
    }

    /// Returns the file name sent to the service.
    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the file content.
    #[inline]
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Returns the content type derived from the file extension.
    pub fn mime(&self) -> Mime {
        if has_extension(&self.file_name, "pdf") {
            mime::APPLICATION_PDF
        } else {
            mime::APPLICATION_OCTET_STREAM
        }
    }
}

/// Checks the extension of `file_name`, ignoring ASCII case.
pub fn has_extension(file_name: &str, extension: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime() {
        let pdf = mime::APPLICATION_PDF;
        assert_eq!(Upload::new("report.pdf", "x").mime(), pdf);
        assert_eq!(Upload::new("REPORT.PDF", "x").mime(), pdf);
        assert_eq!(
            Upload::new("notes.txt", "x").mime(),
            mime::APPLICATION_OCTET_STREAM
        );
        assert_eq!(
            Upload::new("pdf", "x").mime(),
            mime::APPLICATION_OCTET_STREAM
        );
    }

    #[tokio::test]
    async fn test_from_path() {
        let path = std::env::temp_dir()
            .join(format!("chatpad-upload-{}.pdf", std::process::id()));
        tokio::fs::write(&path, b"%PDF-1.4").await.unwrap();

        let upload = Upload::from_path(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert!(upload.file_name().starts_with("chatpad-upload-"));
        assert_eq!(upload.content().as_ref(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_from_missing_path() {
        let err = Upload::from_path("/nonexistent/chatpad/report.pdf")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
