use crate::artifact::ConvertedArtifact;
use crate::candidate::CandidateFile;
use crate::constants::{CONVERT_FAILED_NOTICE, INVALID_FILE_NOTICE};

/// The single authoritative stage of the upload-convert lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    FileReady,
    Converting,
    Success,
    Error,
}

impl Default for FlowState {
    fn default() -> Self {
        FlowState::Idle
    }
}

impl FlowState {
    pub fn is_converting(&self) -> bool {
        matches!(self, FlowState::Converting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FlowState::Success)
    }
}

/// One user's upload-convert session.
///
/// Owns the candidate file, the error notice and the converted artifact,
/// and is the only place that moves [`FlowState`] between stages. The
/// transitions keep two things true at all times: a notice and an
/// artifact are never current together, and a second conversion cannot
/// start while one is in flight.
///
/// In-flight-ness is tracked separately from [`FlowState`]: accepting a
/// new file mid-conversion re-enters `FileReady`, but the outstanding
/// request still blocks submission until its terminal status lands.
#[derive(Debug, Default)]
pub struct Session {
    state: FlowState,
    candidate: Option<CandidateFile>,
    notice: Option<String>,
    artifact: Option<ConvertedArtifact>,
    in_flight: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn candidate(&self) -> Option<&CandidateFile> {
        self.candidate.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn artifact(&self) -> Option<&ConvertedArtifact> {
        self.artifact.as_ref()
    }

    /// Validate an offered candidate from either intake channel.
    ///
    /// `None` (cancelled picker, empty drop payload) leaves the session
    /// untouched. A non-PDF is rejected with the fixed validation notice
    /// and discards any previously accepted candidate. A PDF becomes the
    /// current candidate, superseding any stale notice or artifact.
    pub fn offer(&mut self, candidate: Option<CandidateFile>) {
        let Some(candidate) = candidate else {
            return;
        };

        if candidate.is_pdf() {
            tracing::debug!(name = %candidate.name, size = candidate.size, "candidate accepted");
            self.candidate = Some(candidate);
            self.notice = None;
            self.artifact = None;
            self.state = FlowState::FileReady;
        } else {
            tracing::debug!(name = %candidate.name, mime = %candidate.mime, "candidate rejected");
            self.candidate = None;
            self.artifact = None;
            self.notice = Some(INVALID_FILE_NOTICE.to_string());
            self.state = FlowState::Error;
        }
    }

    /// Whether a request is outstanding. Unlike `state().is_converting()`
    /// this stays true across a mid-flight reselection, so the busy
    /// indicator and the submit guard always cover the open request.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the submit action is currently allowed.
    pub fn can_submit(&self) -> bool {
        self.candidate.is_some() && !self.in_flight
    }

    /// Move to `Converting` and hand back the candidate to upload.
    ///
    /// Returns `None` when no candidate is present or a request is
    /// already outstanding, which makes a double submission a no-op.
    pub fn begin_conversion(&mut self) -> Option<CandidateFile> {
        if !self.can_submit() {
            return None;
        }

        self.notice = None;
        self.artifact = None;
        self.in_flight = true;
        self.state = FlowState::Converting;
        self.candidate.clone()
    }

    /// Record a successful conversion response.
    ///
    /// A result that arrives after the session has already moved on (for
    /// example a new file was accepted mid-flight) is discarded.
    pub fn complete_conversion(&mut self, artifact: ConvertedArtifact) {
        self.in_flight = false;

        if !self.state.is_converting() {
            tracing::debug!("conversion result arrived in state {:?}, discarding", self.state);
            return;
        }

        self.notice = None;
        self.artifact = Some(artifact);
        self.state = FlowState::Success;
    }

    /// Record a failed conversion attempt with the fixed retry notice.
    pub fn fail_conversion(&mut self) {
        self.in_flight = false;

        if !self.state.is_converting() {
            tracing::debug!("conversion failure arrived in state {:?}, discarding", self.state);
            return;
        }

        self.artifact = None;
        self.notice = Some(CONVERT_FAILED_NOTICE.to_string());
        self.state = FlowState::Error;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn pdf(name: &str, size: u64) -> CandidateFile {
        CandidateFile {
            path: PathBuf::from(name),
            name: name.to_string(),
            size,
            mime: "application/pdf".to_string(),
        }
    }

    fn png(name: &str) -> CandidateFile {
        CandidateFile {
            path: PathBuf::from(name),
            name: name.to_string(),
            size: 100,
            mime: "image/png".to_string(),
        }
    }

    fn artifact(n: usize) -> ConvertedArtifact {
        ConvertedArtifact::new(vec![0u8; n])
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.state(), FlowState::Idle);
        assert!(session.candidate().is_none());
        assert!(session.notice().is_none());
        assert!(session.artifact().is_none());
        assert!(!session.can_submit());
    }

    #[test]
    fn test_offer_none_is_noop() {
        let mut session = Session::new();
        session.offer(None);
        assert_eq!(session.state(), FlowState::Idle);
        assert!(session.notice().is_none());

        // Also a no-op after a file is already accepted
        session.offer(Some(pdf("report.pdf", 1000)));
        session.offer(None);
        assert_eq!(session.state(), FlowState::FileReady);
        assert!(session.candidate().is_some());
    }

    #[test]
    fn test_offer_valid_pdf_reaches_file_ready() {
        let mut session = Session::new();
        session.offer(Some(pdf("report.pdf", 2_097_152)));

        assert_eq!(session.state(), FlowState::FileReady);
        assert!(session.notice().is_none());
        let candidate = session.candidate().unwrap();
        assert_eq!(candidate.name, "report.pdf");
        assert_eq!(candidate.size_display(), "2.00 MB");
        assert!(session.can_submit());
    }

    #[test]
    fn test_offer_non_pdf_never_reaches_file_ready() {
        let mut session = Session::new();
        session.offer(Some(png("image.png")));

        assert_eq!(session.state(), FlowState::Error);
        assert_eq!(session.notice(), Some("Please select a valid PDF file"));
        assert!(session.candidate().is_none());
        assert!(!session.can_submit());
    }

    #[test]
    fn test_offer_non_pdf_discards_accepted_candidate() {
        let mut session = Session::new();
        session.offer(Some(pdf("report.pdf", 1000)));
        session.offer(Some(png("image.png")));

        assert!(session.candidate().is_none());
        assert_eq!(session.state(), FlowState::Error);
    }

    #[test]
    fn test_offer_valid_pdf_clears_notice_and_artifact() {
        let mut session = Session::new();
        session.offer(Some(png("image.png")));
        assert!(session.notice().is_some());

        session.offer(Some(pdf("report.pdf", 1000)));
        assert!(session.notice().is_none());
        assert_eq!(session.state(), FlowState::FileReady);

        // And from Success: the stale artifact is dropped
        session.begin_conversion().unwrap();
        session.complete_conversion(artifact(10));
        assert!(session.artifact().is_some());

        session.offer(Some(pdf("other.pdf", 500)));
        assert!(session.artifact().is_none());
        assert_eq!(session.state(), FlowState::FileReady);
    }

    #[test]
    fn test_begin_conversion_requires_candidate() {
        let mut session = Session::new();
        assert!(session.begin_conversion().is_none());
        assert_eq!(session.state(), FlowState::Idle);
    }

    #[test]
    fn test_begin_conversion_moves_to_converting() {
        let mut session = Session::new();
        session.offer(Some(pdf("report.pdf", 1000)));

        let candidate = session.begin_conversion().unwrap();
        assert_eq!(candidate.name, "report.pdf");
        assert_eq!(session.state(), FlowState::Converting);
        assert!(session.notice().is_none());
        assert!(session.artifact().is_none());
    }

    #[test]
    fn test_submit_while_converting_is_noop() {
        let mut session = Session::new();
        session.offer(Some(pdf("report.pdf", 1000)));

        assert!(session.begin_conversion().is_some());
        assert!(session.begin_conversion().is_none());
        assert_eq!(session.state(), FlowState::Converting);
    }

    #[test]
    fn test_successful_response_produces_artifact() {
        let mut session = Session::new();
        session.offer(Some(pdf("report.pdf", 1000)));
        session.begin_conversion().unwrap();

        session.complete_conversion(artifact(4096));

        assert_eq!(session.state(), FlowState::Success);
        assert!(session.notice().is_none());
        assert_eq!(session.artifact().unwrap().len(), 4096);
    }

    #[test]
    fn test_failed_response_produces_notice_and_no_artifact() {
        let mut session = Session::new();
        session.offer(Some(pdf("report.pdf", 1000)));
        session.begin_conversion().unwrap();

        session.fail_conversion();

        assert_eq!(session.state(), FlowState::Error);
        assert_eq!(
            session.notice(),
            Some("Error converting file. Please try again.")
        );
        assert!(session.artifact().is_none());
        // Flow stays interactive: the candidate is kept for a retry
        assert!(session.can_submit());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut session = Session::new();
        session.offer(Some(pdf("report.pdf", 1000)));
        session.begin_conversion().unwrap();
        session.fail_conversion();

        assert!(session.begin_conversion().is_some());
        assert!(session.notice().is_none());
        assert_eq!(session.state(), FlowState::Converting);

        session.complete_conversion(artifact(8));
        assert_eq!(session.state(), FlowState::Success);
    }

    #[test]
    fn test_new_conversion_supersedes_previous_artifact() {
        let mut session = Session::new();
        session.offer(Some(pdf("report.pdf", 1000)));
        session.begin_conversion().unwrap();
        session.complete_conversion(artifact(100));

        session.begin_conversion().unwrap();
        assert!(session.artifact().is_none());

        session.complete_conversion(artifact(200));
        assert_eq!(session.artifact().unwrap().len(), 200);
    }

    #[test]
    fn test_notice_and_artifact_never_current_together() {
        let mut session = Session::new();
        session.offer(Some(pdf("report.pdf", 1000)));
        session.begin_conversion().unwrap();
        session.complete_conversion(artifact(10));

        session.offer(Some(png("image.png")));
        assert!(session.notice().is_some());
        assert!(session.artifact().is_none());

        session.offer(Some(pdf("again.pdf", 10)));
        session.begin_conversion().unwrap();
        session.fail_conversion();
        assert!(session.notice().is_some());
        assert!(session.artifact().is_none());
    }

    #[test]
    fn test_reselection_while_in_flight_keeps_submit_blocked() {
        let mut session = Session::new();
        session.offer(Some(pdf("first.pdf", 1000)));
        session.begin_conversion().unwrap();

        // A new accepted file re-enters FileReady, but the first request
        // has not settled: no second request may be issued
        session.offer(Some(pdf("second.pdf", 2000)));
        assert_eq!(session.state(), FlowState::FileReady);
        assert!(session.in_flight());
        assert!(!session.can_submit());
        assert!(session.begin_conversion().is_none());

        // Once the outstanding request settles, submission reopens
        session.fail_conversion();
        assert!(!session.in_flight());
        assert!(session.can_submit());
        assert!(session.begin_conversion().is_some());
    }

    #[test]
    fn test_late_response_after_reselection_is_discarded() {
        let mut session = Session::new();
        session.offer(Some(pdf("first.pdf", 1000)));
        session.begin_conversion().unwrap();

        // User picks a new file while the request is still in flight
        session.offer(Some(pdf("second.pdf", 2000)));
        assert_eq!(session.state(), FlowState::FileReady);

        session.complete_conversion(artifact(10));
        assert_eq!(session.state(), FlowState::FileReady);
        assert!(session.artifact().is_none());
        // The busy guard settles even though the result was discarded
        assert!(!session.in_flight());
    }

    #[test]
    fn test_late_failure_after_reselection_is_discarded() {
        let mut session = Session::new();
        session.offer(Some(pdf("first.pdf", 1000)));
        session.begin_conversion().unwrap();
        session.offer(Some(pdf("second.pdf", 2000)));

        session.fail_conversion();
        assert_eq!(session.state(), FlowState::FileReady);
        assert!(session.notice().is_none());
        assert!(!session.in_flight());
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut session = Session::new();
        session.offer(Some(pdf("report.pdf", 1000)));
        session.begin_conversion().unwrap();
        session.complete_conversion(artifact(10));

        session.reset();

        assert_eq!(session.state(), FlowState::Idle);
        assert!(session.candidate().is_none());
        assert!(session.notice().is_none());
        assert!(session.artifact().is_none());
    }
}
