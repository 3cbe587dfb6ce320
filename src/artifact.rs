use crate::constants::OUTPUT_FILENAME;
use std::path::Path;

/// The materialized PPTX output of a successful conversion.
///
/// The bytes live in memory for the rest of the session or until a new
/// conversion (or a new file selection) replaces them; dropping the old
/// artifact releases the previous buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedArtifact {
    bytes: Vec<u8>,
}

impl ConvertedArtifact {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Suggested name for the download dialog.
    pub fn suggested_filename(&self) -> &'static str {
        OUTPUT_FILENAME
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.bytes.len() as f64 / (1024.0 * 1024.0))
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, &self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_filename_is_fixed() {
        let artifact = ConvertedArtifact::new(vec![1, 2, 3]);
        assert_eq!(artifact.suggested_filename(), "converted.pptx");
    }

    #[test]
    fn test_len() {
        let artifact = ConvertedArtifact::new(vec![0u8; 4096]);
        assert_eq!(artifact.len(), 4096);
        assert!(!artifact.is_empty());
    }

    #[test]
    fn test_save_to_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("converted.pptx");

        let payload = vec![0x50, 0x4b, 0x03, 0x04, 0xde, 0xad];
        let artifact = ConvertedArtifact::new(payload.clone());
        artifact.save_to(&path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), payload);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let artifact = ConvertedArtifact::new(vec![1]);
        let result = artifact.save_to(Path::new("/nonexistent_dir_xyz/out.pptx"));
        assert!(result.is_err());
    }

    #[test]
    fn test_failed_save_leaves_artifact_retryable() {
        let payload = vec![0x50, 0x4b, 0x03, 0x04];
        let artifact = ConvertedArtifact::new(payload.clone());

        assert!(artifact
            .save_to(Path::new("/nonexistent_dir_xyz/out.pptx"))
            .is_err());

        // The bytes are untouched and a retry to a writable path works
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(artifact.suggested_filename());
        artifact.save_to(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), payload);
    }
}
