use crate::constants::PDF_MIME;
use std::path::{Path, PathBuf};

/// A file the user has offered for conversion, before or after validation.
///
/// The MIME type is derived from the file name extension; the file's
/// contents are never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl CandidateFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unnamed".to_string());
        let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        let mime = mime_from_extension(&path).to_string();

        Self {
            path,
            name,
            size,
            mime,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.mime == PDF_MIME
    }

    /// File size in megabytes, rounded to two decimals ("2.00 MB").
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size as f64 / (1024.0 * 1024.0))
    }
}

/// Map a file extension to the MIME type the conversion endpoint expects.
///
/// Anything that is not a `.pdf` falls back to a generic binary type and
/// is rejected by the validator.
pub fn mime_from_extension(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .as_deref()
    {
        Some("pdf") => PDF_MIME,
        _ => "application/octet-stream",
    }
}
