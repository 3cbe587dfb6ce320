// App Constants
pub const APP_NAME: &str = "PDF to PowerPoint Converter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// Conversion endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/convert";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 120;
pub const UPLOAD_FIELD_NAME: &str = "file";

// File handling
pub const PDF_MIME: &str = "application/pdf";
pub const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";
pub const OUTPUT_FILENAME: &str = "converted.pptx";

// Shown in the drop zone; the endpoint enforces the actual limit
pub const SIZE_HINT_MB: u64 = 10;

// User-facing notices
pub const INVALID_FILE_NOTICE: &str = "Please select a valid PDF file";
pub const CONVERT_FAILED_NOTICE: &str = "Error converting file. Please try again.";

pub const STATUS_POLL_INTERVAL_MS: u64 = 100;
