//! Upload orchestration: the state machine behind the upload form.
//!
//! [`UploadOrchestrator`] owns the single active [`UploadAttempt`] and moves
//! it through
//!
//! ```text
//! Idle ──submit──▶ Validating ──▶ Uploading ──headers ok──▶ AwaitingResult ──body ok──▶ Complete
//!                                   │                           │
//!                                   └──── rejected / transfer ──┴──────────▶ Failed
//! ```
//!
//! It performs no I/O. Each operation mutates the attempt and returns the
//! [`Effect`]s the browser shell must run (timer, request, blob URL). Every
//! response handler takes the [`AttemptId`] the request was sent with; answers
//! for a superseded attempt are dropped so they cannot overwrite fresher state.
//!
//! The rendered form is a pure function of this state: see
//! [`UploadOrchestrator::view`].

mod attempt;
mod effect;
mod view_model;

pub use attempt::{AttemptId, AttemptState, Milestone, PdfPayload, UploadAttempt};
pub use effect::Effect;
pub use view_model::{format_elapsed, DownloadOffer, UploadView};

use crate::config::UploadConfig;
use crate::error::{format_size, UploadError};
use crate::types::{ExtractionArtifact, LogEntry, LogLevel};

/// Status line of the HTTP response, available before the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseStatus {
    pub code: u16,
    pub text: String,
}

impl ResponseStatus {
    pub fn new(code: u16, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Final result of one upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success(ExtractionArtifact),
    Failure(UploadError),
}

pub struct UploadOrchestrator<F> {
    config: UploadConfig,
    last_id: AttemptId,
    attempt: UploadAttempt<F>,
    artifact: Option<ExtractionArtifact>,
    /// Local validation message; shown without touching the attempt.
    notice: Option<UploadError>,
    logs: Vec<LogEntry>,
    next_log_seq: u64,
}

impl<F: PdfPayload> Default for UploadOrchestrator<F> {
    fn default() -> Self {
        Self::new(UploadConfig::default())
    }
}

impl<F: PdfPayload> UploadOrchestrator<F> {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config,
            last_id: 0,
            attempt: UploadAttempt::default(),
            artifact: None,
            notice: None,
            logs: Vec::new(),
            next_log_seq: 0,
        }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    pub fn attempt(&self) -> &UploadAttempt<F> {
        &self.attempt
    }

    pub fn artifact(&self) -> Option<&ExtractionArtifact> {
        self.artifact.as_ref()
    }

    /// Message from the last locally rejected submission, if any.
    pub fn notice(&self) -> Option<&UploadError> {
        self.notice.as_ref()
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }

    /// Whether `attempt` is still the one being displayed.
    pub fn is_current(&self, attempt: AttemptId) -> bool {
        attempt != 0 && attempt == self.attempt.id()
    }

    /// Start a new attempt with the selected file.
    ///
    /// Missing, mistyped or oversized files are refused locally: the message is
    /// shown and nothing else changes. Submissions while a request is in flight
    /// are ignored.
    pub fn submit(&mut self, file: Option<F>) -> Vec<Effect<F>> {
        if !self.attempt.state().accepts_submission() {
            log::warn!(
                "Ignoring submit while attempt {} is {:?}",
                self.attempt.id(),
                self.attempt.state()
            );
            return Vec::new();
        }

        let Some(file) = file else {
            return self.refuse(UploadError::NoFileSelected);
        };

        let mut candidate = UploadAttempt::validating(self.last_id + 1, file.clone());
        if let Err(err) = self.validate(&file) {
            return self.refuse(err);
        }

        self.last_id = candidate.id();
        candidate.set_state(AttemptState::Uploading);
        candidate.advance(Milestone::Dispatched);

        let mut effects = Vec::with_capacity(3);
        if self.artifact.take().is_some() {
            effects.push(Effect::RevokeArtifact);
        }
        self.notice = None;
        self.attempt = candidate;

        let id = self.attempt.id();
        self.push_log(
            LogLevel::Info,
            format!(
                "📤 Uploading {} ({})",
                file.file_name(),
                format_size(file.size_bytes())
            ),
        );
        effects.push(Effect::StartTimer { attempt: id });
        effects.push(Effect::SendUpload { attempt: id, file });
        effects
    }

    /// Response headers arrived for `attempt`.
    ///
    /// A non-success status fails the attempt whatever the body holds.
    pub fn on_response_headers(
        &mut self,
        attempt: AttemptId,
        status: &ResponseStatus,
    ) -> Vec<Effect<F>> {
        if !self.accepts_response(attempt, "response headers") {
            return Vec::new();
        }
        if self.attempt.state() != AttemptState::Uploading {
            log::warn!(
                "Response headers for attempt {} arrived in state {:?}",
                attempt,
                self.attempt.state()
            );
            return Vec::new();
        }

        if !status.is_success() {
            return self.fail(UploadError::UploadRejected {
                status: status.code,
                status_text: status.text.clone(),
            });
        }

        self.attempt.advance(Milestone::Accepted);
        self.attempt.set_state(AttemptState::AwaitingResult);
        self.push_log(
            LogLevel::Info,
            format!("⏳ Server accepted the upload ({}), extracting text...", status.code),
        );
        Vec::new()
    }

    /// The request finished: either the whole body was read, or the transfer broke.
    ///
    /// Transfer failures are accepted from Uploading too, since the connection
    /// can drop before any headers arrive.
    pub fn on_body_ready(&mut self, attempt: AttemptId, outcome: UploadOutcome) -> Vec<Effect<F>> {
        if !self.accepts_response(attempt, "response body") {
            return Vec::new();
        }

        match outcome {
            UploadOutcome::Success(artifact) => {
                if self.attempt.state() != AttemptState::AwaitingResult {
                    log::warn!(
                        "Response body for attempt {} arrived in state {:?}",
                        attempt,
                        self.attempt.state()
                    );
                    return Vec::new();
                }
                self.attempt.advance(Milestone::Received);
                self.attempt.advance(Milestone::Done);
                self.attempt.set_state(AttemptState::Complete);
                self.push_log(
                    LogLevel::Success,
                    format!(
                        "✅ Processing complete! {} ready ({})",
                        artifact.file_name(),
                        format_size(artifact.len() as u64)
                    ),
                );
                self.artifact = Some(artifact);
                vec![
                    Effect::StopTimer { attempt },
                    Effect::PublishArtifact { attempt },
                ]
            }
            UploadOutcome::Failure(err) => {
                if !self.attempt.state().is_busy() {
                    log::warn!(
                        "Failure for attempt {} arrived in state {:?}: {}",
                        attempt,
                        self.attempt.state(),
                        err
                    );
                    return Vec::new();
                }
                self.fail(err)
            }
        }
    }

    /// One elapsed-time tick. Returns whether the counter moved.
    pub fn tick(&mut self, attempt: AttemptId) -> bool {
        if !self.is_current(attempt) || !self.attempt.state().is_busy() {
            return false;
        }
        self.attempt.tick();
        true
    }

    /// Render model for the upload form.
    pub fn view(&self) -> UploadView {
        let state = self.attempt.state();
        let (status, is_error) = match (&self.notice, state) {
            (Some(notice), _) => (notice.to_string(), true),
            (None, AttemptState::Idle) => {
                ("Select a PDF file to extract its text.".to_string(), false)
            }
            (None, AttemptState::Validating) => ("Checking file...".to_string(), false),
            (None, AttemptState::Uploading) => (
                format!(
                    "Uploading {}...",
                    self.attempt.file_name().unwrap_or_default()
                ),
                false,
            ),
            (None, AttemptState::AwaitingResult) => (
                "Processing PDF... scanned documents can take a while.".to_string(),
                false,
            ),
            (None, AttemptState::Complete) => ("Processing complete!".to_string(), false),
            (None, AttemptState::Failed) => (
                self.attempt
                    .error()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "Upload failed".to_string()),
                true,
            ),
        };

        let download = match (state, &self.artifact) {
            (AttemptState::Complete, Some(artifact)) => Some(DownloadOffer {
                attempt: self.attempt.id(),
                file_name: artifact.file_name().to_string(),
                size_bytes: artifact.len(),
            }),
            _ => None,
        };

        UploadView {
            state,
            status,
            is_error,
            progress_percent: self.attempt.progress_percent(),
            elapsed_seconds: self.attempt.elapsed_seconds(),
            elapsed_text: format_elapsed(self.attempt.elapsed_seconds()),
            show_spinner: state.is_busy(),
            submit_enabled: !state.is_busy(),
            download,
        }
    }

    fn validate(&self, file: &F) -> Result<(), UploadError> {
        let name = file.file_name();
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if extension != self.config.accepted_extension {
            return Err(UploadError::InvalidFileType(name));
        }

        let size = file.size_bytes();
        if size > self.config.max_file_size {
            return Err(UploadError::FileTooLarge {
                size,
                limit: self.config.max_file_size,
            });
        }
        Ok(())
    }

    fn refuse(&mut self, err: UploadError) -> Vec<Effect<F>> {
        self.push_log(LogLevel::Warning, format!("⚠️ {}", err));
        self.notice = Some(err);
        Vec::new()
    }

    fn fail(&mut self, err: UploadError) -> Vec<Effect<F>> {
        let attempt = self.attempt.id();
        self.push_log(LogLevel::Error, format!("❌ {}", err));
        self.attempt.fail(err);
        vec![Effect::StopTimer { attempt }]
    }

    fn accepts_response(&self, attempt: AttemptId, what: &str) -> bool {
        if self.is_current(attempt) {
            return true;
        }
        log::debug!(
            "Dropping {} for superseded attempt {} (current is {})",
            what,
            attempt,
            self.attempt.id()
        );
        false
    }

    fn push_log(&mut self, level: LogLevel, message: String) {
        match level {
            LogLevel::Error => log::error!("{}", message),
            LogLevel::Warning => log::warn!("{}", message),
            LogLevel::Debug => log::debug!("{}", message),
            LogLevel::Info | LogLevel::Success => log::info!("{}", message),
        }
        self.next_log_seq += 1;
        self.logs.push(LogEntry::now(self.next_log_seq, level, message));
        if self.logs.len() > self.config.max_log_entries {
            let overflow = self.logs.len() - self.config.max_log_entries;
            self.logs.drain(..overflow);
        }
    }
}
