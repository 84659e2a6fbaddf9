use pdftext_frontend::{
    AttemptState, Effect, ErrorKind, ExtractionArtifact, PdfPayload, ResponseStatus,
    UploadConfig, UploadError, UploadOrchestrator, UploadOutcome,
};

#[derive(Clone, Debug, PartialEq)]
struct SelectedFile {
    name: String,
    size: u64,
}

impl PdfPayload for SelectedFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn size_bytes(&self) -> u64 {
        self.size
    }
}

fn pdf(name: &str, size: u64) -> SelectedFile {
    SelectedFile {
        name: name.to_string(),
        size,
    }
}

fn body(text: &str) -> UploadOutcome {
    UploadOutcome::Success(ExtractionArtifact::new(
        text.as_bytes().to_vec(),
        "extracted_text.txt",
        Some("text/plain; charset=utf-8".to_string()),
    ))
}

fn sent_requests(effects: &[Effect<SelectedFile>]) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::SendUpload { .. }))
        .count()
}

/// Records the progress value after every step of an attempt.
struct Recorder {
    orchestrator: UploadOrchestrator<SelectedFile>,
    progress: Vec<u8>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            orchestrator: UploadOrchestrator::new(UploadConfig::default()),
            progress: Vec::new(),
        }
    }

    fn step<T>(&mut self, f: impl FnOnce(&mut UploadOrchestrator<SelectedFile>) -> T) -> T {
        let out = f(&mut self.orchestrator);
        self.progress.push(self.orchestrator.view().progress_percent);
        out
    }
}

#[test]
fn successful_upload_offers_download() {
    let mut rec = Recorder::new();

    let effects = rec.step(|o| o.submit(Some(pdf("doc.pdf", 2 * 1024 * 1024))));
    assert_eq!(sent_requests(&effects), 1);
    let attempt = rec.orchestrator.attempt().id();

    rec.step(|o| o.tick(attempt));
    rec.step(|o| o.on_response_headers(attempt, &ResponseStatus::new(200, "OK")));
    rec.step(|o| o.tick(attempt));
    let effects = rec.step(|o| o.on_body_ready(attempt, body("hello world")));
    assert!(effects.contains(&Effect::StopTimer { attempt }));
    assert!(effects.contains(&Effect::PublishArtifact { attempt }));

    assert!(rec.progress.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(rec.progress.last(), Some(&100));

    let view = rec.orchestrator.view();
    assert_eq!(view.status, "Processing complete!");
    assert_eq!(view.state, AttemptState::Complete);
    assert!(view.download.is_some());
    assert_eq!(
        rec.orchestrator.artifact().map(|a| a.bytes().to_vec()),
        Some(b"hello world".to_vec())
    );

    // Elapsed time is frozen once complete
    let frozen = view.elapsed_seconds;
    assert_eq!(frozen, 2);
    rec.orchestrator.tick(attempt);
    rec.orchestrator.tick(attempt);
    assert_eq!(rec.orchestrator.view().elapsed_seconds, frozen);
}

#[test]
fn server_error_resets_progress_and_reenables_submit() {
    let mut orchestrator = UploadOrchestrator::new(UploadConfig::default());
    orchestrator.submit(Some(pdf("doc.pdf", 4096)));
    let attempt = orchestrator.attempt().id();
    orchestrator.tick(attempt);

    let status = ResponseStatus::new(500, "Internal Server Error");
    let effects = orchestrator.on_response_headers(attempt, &status);
    assert_eq!(effects, vec![Effect::StopTimer { attempt }]);

    let view = orchestrator.view();
    assert!(view.status.contains("Upload failed"));
    assert!(view.is_error);
    assert_eq!(view.progress_percent, 0);
    assert!(view.submit_enabled);
    assert!(!view.show_spinner);
    assert!(view.download.is_none());

    // Stopped timer: late ticks do nothing
    assert!(!orchestrator.tick(attempt));
    assert_eq!(orchestrator.view().elapsed_seconds, 1);
}

#[test]
fn body_failure_surfaces_transport_message() {
    let mut orchestrator = UploadOrchestrator::new(UploadConfig::default());
    orchestrator.submit(Some(pdf("doc.pdf", 4096)));
    let attempt = orchestrator.attempt().id();
    orchestrator.on_response_headers(attempt, &ResponseStatus::new(200, "OK"));
    assert_eq!(orchestrator.view().progress_percent, 60);

    let err = UploadError::TransferFailed("connection reset".to_string());
    orchestrator.on_body_ready(attempt, UploadOutcome::Failure(err));

    let view = orchestrator.view();
    assert_eq!(view.state, AttemptState::Failed);
    assert_eq!(view.status, "Transfer failed: connection reset");
    assert_eq!(view.progress_percent, 0);
    assert_eq!(
        orchestrator.attempt().error().map(UploadError::kind),
        Some(ErrorKind::TransferFailed)
    );
}

#[test]
fn missing_file_sends_nothing() {
    let mut orchestrator = UploadOrchestrator::<SelectedFile>::new(UploadConfig::default());
    let effects = orchestrator.submit(None);

    assert_eq!(sent_requests(&effects), 0);
    assert!(effects.is_empty());

    let view = orchestrator.view();
    assert_eq!(view.status, "Please select a PDF file");
    assert_eq!(view.progress_percent, 0);
    assert_eq!(view.state, AttemptState::Idle);
}

#[test]
fn resubmission_resets_visual_state() {
    let mut orchestrator = UploadOrchestrator::new(UploadConfig::default());

    // Attempt 1 fails after a few seconds
    orchestrator.submit(Some(pdf("first.pdf", 10)));
    let first = orchestrator.attempt().id();
    for _ in 0..3 {
        orchestrator.tick(first);
    }
    orchestrator.on_response_headers(first, &ResponseStatus::new(400, "Bad Request"));

    // Attempt 2 completes
    let effects = orchestrator.submit(Some(pdf("second.pdf", 10)));
    let second = orchestrator.attempt().id();
    assert_ne!(first, second);
    assert_eq!(sent_requests(&effects), 1);

    let view = orchestrator.view();
    assert_eq!(view.progress_percent, 20);
    assert_eq!(view.elapsed_seconds, 0);
    assert!(!view.is_error);
    assert_eq!(view.status, "Uploading second.pdf...");

    orchestrator.on_response_headers(second, &ResponseStatus::new(200, "OK"));
    orchestrator.tick(second);
    orchestrator.on_body_ready(second, body("two"));

    // Attempt 3 starts from a completed attempt and drops its download
    let effects = orchestrator.submit(Some(pdf("third.pdf", 10)));
    assert_eq!(effects.first(), Some(&Effect::RevokeArtifact));

    let view = orchestrator.view();
    assert_eq!(view.progress_percent, 20);
    assert_eq!(view.elapsed_seconds, 0);
    assert!(view.download.is_none());
    assert!(orchestrator.artifact().is_none());
}

#[test]
fn late_response_from_superseded_attempt_is_ignored() {
    let mut orchestrator = UploadOrchestrator::new(UploadConfig::default());

    orchestrator.submit(Some(pdf("slow.pdf", 10)));
    let stale = orchestrator.attempt().id();
    orchestrator.on_body_ready(
        stale,
        UploadOutcome::Failure(UploadError::TransferFailed("timeout".to_string())),
    );

    orchestrator.submit(Some(pdf("fresh.pdf", 10)));
    let current = orchestrator.attempt().id();
    orchestrator.on_response_headers(current, &ResponseStatus::new(200, "OK"));

    // The first request finally answers
    assert!(orchestrator
        .on_response_headers(stale, &ResponseStatus::new(200, "OK"))
        .is_empty());
    assert!(orchestrator.on_body_ready(stale, body("stale")).is_empty());

    let view = orchestrator.view();
    assert_eq!(view.state, AttemptState::AwaitingResult);
    assert_eq!(view.progress_percent, 60);
    assert!(orchestrator.artifact().is_none());

    orchestrator.on_body_ready(current, body("fresh"));
    assert_eq!(
        orchestrator.artifact().map(|a| a.bytes().to_vec()),
        Some(b"fresh".to_vec())
    );
}

#[test]
fn non_pdf_is_rejected_locally() {
    let mut orchestrator = UploadOrchestrator::new(UploadConfig::default());
    let effects = orchestrator.submit(Some(pdf("notes.txt", 10)));

    assert!(effects.is_empty());
    let view = orchestrator.view();
    assert!(view.is_error);
    assert!(view.status.contains("notes.txt"));
    assert_eq!(view.state, AttemptState::Idle);
}
