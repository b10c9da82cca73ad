/// Detection workflow state machine
///
/// Coordinates the upload manager, the detection call and the result view:
///
/// ```text
/// Idle --select--> Preparing --preview--> Ready --analyze--> Analyzing
///                                          ^                    |
///                                          +--success/failure---+
/// ```
///
/// Every selection, clear and analysis takes a fresh token from a
/// monotonically increasing counter. Completions (previews and detection
/// responses) are applied only while their token is still current, so a
/// slow response can never overwrite the state of a newer selection.

use tracing::{debug, info, warn};

use super::data::{DiagnosisResult, PickedFile, Preview, SelectedImage};
use super::upload::UploadManager;

/// User-facing text for any failed analysis
pub const ANALYSIS_FAILED: &str = "Gagal menganalisis gambar. Pastikan server API aktif.";

/// Identifies one selection or one detection call
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No image selected
    Idle,
    /// A file was chosen, its preview is not ready yet
    Preparing,
    /// An image is selected, with or without a diagnosis
    Ready,
    /// A detection call is in flight
    Analyzing,
}

/// Everything needed to issue one detection call
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub token: RequestToken,
    pub file: PickedFile,
}

/// Non-blocking message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

/// What happened when a detection call came back
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The diagnosis is now live
    Diagnosed,
    /// The call failed; show this once
    Failed(Notification),
    /// The call belongs to an older selection and was discarded
    Stale,
}

#[derive(Debug, Default)]
pub struct DetectionWorkflow {
    upload: UploadManager,
    result: Option<DiagnosisResult>,
    in_flight: Option<RequestToken>,
    last_token: u64,
}

impl DetectionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_token(&mut self) -> RequestToken {
        self.last_token += 1;
        RequestToken(self.last_token)
    }

    /// Select a new file. The prior diagnosis is dropped and any call in
    /// flight stops being relevant. Returns the token the preview must carry.
    pub fn select(&mut self, file: PickedFile) -> RequestToken {
        let token = self.next_token();
        if let Some(stale) = self.in_flight.take() {
            debug!("Selection {:?} supersedes in-flight call {:?}", token, stale);
        }
        info!("Selected {} ({} bytes)", file.name, file.bytes.len());
        self.result = None;
        self.upload.select(token, file);
        token
    }

    /// Attach a derived preview to the selection identified by `token`
    pub fn preview_ready(&mut self, token: RequestToken, preview: Preview) -> bool {
        let applied = self.upload.preview_ready(token, preview);
        if applied {
            self.result = None;
        } else {
            debug!("Discarding preview for superseded selection {:?}", token);
        }
        applied
    }

    /// Back to the initial state: no image, no result, not loading
    pub fn clear(&mut self) {
        // Bumping the token makes any outstanding preview or call stale
        self.next_token();
        self.upload.clear();
        self.result = None;
        self.in_flight = None;
    }

    /// Begin an analysis of the selected image.
    ///
    /// No-op (None) unless an image is selected, its preview has landed and
    /// no call is outstanding.
    pub fn analyze(&mut self) -> Option<AnalysisRequest> {
        if self.phase() != Phase::Ready {
            debug!("Ignoring analyze in phase {:?}", self.phase());
            return None;
        }
        let file = self.upload.selected()?.file.clone();
        let token = self.next_token();
        self.in_flight = Some(token);
        info!("Analyzing {} as request {:?}", file.name, token);
        Some(AnalysisRequest { token, file })
    }

    /// Apply the outcome of the call identified by `token`
    pub fn finish(
        &mut self,
        token: RequestToken,
        outcome: Result<DiagnosisResult, String>,
    ) -> Completion {
        if self.in_flight != Some(token) {
            debug!("Discarding stale detection response {:?}", token);
            return Completion::Stale;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                info!(
                    "Diagnosis: {} ({}%, {:?})",
                    result.disease, result.confidence, result.severity
                );
                self.result = Some(result);
                Completion::Diagnosed
            }
            Err(reason) => {
                warn!("Detection request {:?} failed: {}", token, reason);
                Completion::Failed(Notification {
                    message: ANALYSIS_FAILED.to_string(),
                })
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight.is_some() {
            Phase::Analyzing
        } else if self.upload.is_pending() {
            Phase::Preparing
        } else if self.upload.selected().is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn is_analyzing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Token of the outstanding call
    #[cfg(test)]
    pub fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }

    /// Whether the analyze button should be enabled
    pub fn can_analyze(&self) -> bool {
        self.phase() == Phase::Ready
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.upload.selected()
    }

    pub fn pending_name(&self) -> Option<&str> {
        self.upload.pending_name()
    }

    pub fn result(&self) -> Option<&DiagnosisResult> {
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Severity;
    use iced::widget::image::Handle;

    fn leaf(name: &str) -> PickedFile {
        PickedFile {
            name: name.to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF, 0xD9],
        }
    }

    fn preview() -> Preview {
        Preview {
            handle: Handle::from_bytes(vec![0xFF, 0xD8]),
            dimensions: Some((64, 48)),
        }
    }

    fn diagnosis() -> DiagnosisResult {
        DiagnosisResult {
            disease: "Bercak Daun".to_string(),
            confidence: 94.0,
            severity: Severity::Medium,
            description: "Penyakit jamur".to_string(),
            symptoms: vec!["Bercak coklat".to_string()],
            treatment: vec!["Pangkas daun".to_string()],
        }
    }

    /// Workflow with `name` selected and its preview ready
    fn ready_with(name: &str) -> DetectionWorkflow {
        let mut workflow = DetectionWorkflow::new();
        let token = workflow.select(leaf(name));
        assert!(workflow.preview_ready(token, preview()));
        workflow
    }

    fn assert_initial(workflow: &DetectionWorkflow) {
        assert_eq!(workflow.phase(), Phase::Idle);
        assert!(workflow.selected().is_none());
        assert!(workflow.pending_name().is_none());
        assert!(workflow.result().is_none());
        assert!(!workflow.is_analyzing());
    }

    #[test]
    fn test_initial_state_is_idle() {
        assert_initial(&DetectionWorkflow::new());
    }

    #[test]
    fn test_analyze_without_image_is_noop() {
        let mut workflow = DetectionWorkflow::new();

        assert!(workflow.analyze().is_none());
        assert_initial(&workflow);
    }

    #[test]
    fn test_analyze_waits_for_preview() {
        let mut workflow = DetectionWorkflow::new();
        workflow.select(leaf("daun.jpg"));

        assert_eq!(workflow.phase(), Phase::Preparing);
        assert!(!workflow.can_analyze());
        assert!(workflow.analyze().is_none());
    }

    #[test]
    fn test_successful_analysis_stores_result() {
        let mut workflow = ready_with("daun.jpg");

        let request = workflow.analyze().unwrap();
        assert_eq!(request.file.name, "daun.jpg");
        assert_eq!(workflow.phase(), Phase::Analyzing);

        let completion = workflow.finish(request.token, Ok(diagnosis()));

        assert_eq!(completion, Completion::Diagnosed);
        assert_eq!(workflow.phase(), Phase::Ready);
        assert_eq!(workflow.result().unwrap().disease, "Bercak Daun");
    }

    #[test]
    fn test_second_analyze_while_in_flight_is_noop() {
        let mut workflow = ready_with("daun.jpg");
        let first = workflow.analyze().unwrap();

        assert!(workflow.analyze().is_none());
        assert_eq!(workflow.phase(), Phase::Analyzing);
        assert_eq!(
            workflow.finish(first.token, Ok(diagnosis())),
            Completion::Diagnosed
        );
    }

    #[test]
    fn test_failed_analysis_keeps_preview_and_notifies_once() {
        let mut workflow = ready_with("daun.jpg");
        let request = workflow.analyze().unwrap();

        let completion = workflow.finish(request.token, Err("connection refused".to_string()));

        let notifications: Vec<Notification> = match completion {
            Completion::Failed(n) => vec![n],
            _ => vec![],
        };
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].message, ANALYSIS_FAILED);
        assert_eq!(workflow.phase(), Phase::Ready);
        assert_eq!(workflow.selected().unwrap().file.name, "daun.jpg");
        assert!(workflow.result().is_none());

        // A duplicate delivery of the same response must not notify again
        assert_eq!(
            workflow.finish(request.token, Err("again".to_string())),
            Completion::Stale
        );
    }

    #[test]
    fn test_user_can_retry_after_failure() {
        let mut workflow = ready_with("daun.jpg");
        let first = workflow.analyze().unwrap();
        workflow.finish(first.token, Err("timeout".to_string()));

        let retry = workflow.analyze().unwrap();

        assert!(retry.token > first.token);
        assert_eq!(workflow.finish(retry.token, Ok(diagnosis())), Completion::Diagnosed);
    }

    #[test]
    fn test_new_selection_clears_result_before_analysis() {
        let mut workflow = ready_with("pertama.jpg");
        let request = workflow.analyze().unwrap();
        workflow.finish(request.token, Ok(diagnosis()));
        assert!(workflow.result().is_some());

        workflow.select(leaf("kedua.jpg"));

        assert!(workflow.result().is_none());
        assert!(workflow.analyze().is_none());
    }

    #[test]
    fn test_stale_response_does_not_overwrite_new_selection() {
        let mut workflow = ready_with("pertama.jpg");
        let request = workflow.analyze().unwrap();

        let token = workflow.select(leaf("kedua.jpg"));
        assert!(!workflow.is_analyzing());
        workflow.preview_ready(token, preview());

        assert_eq!(workflow.finish(request.token, Ok(diagnosis())), Completion::Stale);
        assert!(workflow.result().is_none());
        assert_eq!(workflow.phase(), Phase::Ready);
        assert_eq!(workflow.selected().unwrap().file.name, "kedua.jpg");
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let mut workflow = ready_with("pertama.jpg");
        let request = workflow.analyze().unwrap();
        workflow.select(leaf("kedua.jpg"));

        assert_eq!(
            workflow.finish(request.token, Err("500".to_string())),
            Completion::Stale
        );
    }

    #[test]
    fn test_stale_preview_is_discarded() {
        let mut workflow = DetectionWorkflow::new();
        let old = workflow.select(leaf("lama.jpg"));
        let new = workflow.select(leaf("baru.jpg"));

        assert!(!workflow.preview_ready(old, preview()));
        assert_eq!(workflow.phase(), Phase::Preparing);
        assert!(workflow.preview_ready(new, preview()));
        assert_eq!(workflow.selected().unwrap().file.name, "baru.jpg");
    }

    #[test]
    fn test_clear_returns_to_initial_state() {
        let mut workflow = ready_with("daun.jpg");
        let request = workflow.analyze().unwrap();
        workflow.finish(request.token, Ok(diagnosis()));

        workflow.clear();

        assert_initial(&workflow);
    }

    #[test]
    fn test_clear_during_analysis_discards_response() {
        let mut workflow = ready_with("daun.jpg");
        let request = workflow.analyze().unwrap();

        workflow.clear();

        assert_eq!(workflow.finish(request.token, Ok(diagnosis())), Completion::Stale);
        assert_initial(&workflow);
    }

    #[test]
    fn test_clear_while_preparing_discards_preview() {
        let mut workflow = DetectionWorkflow::new();
        let token = workflow.select(leaf("daun.jpg"));

        workflow.clear();

        assert!(!workflow.preview_ready(token, preview()));
        assert_initial(&workflow);
    }
}
