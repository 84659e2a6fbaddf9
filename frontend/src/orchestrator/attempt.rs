use chrono::{DateTime, Local};

use crate::error::UploadError;

/// Sequence number identifying one upload attempt. `0` is the idle placeholder.
pub type AttemptId = u64;

/// Files the orchestrator can upload.
///
/// Implemented for `web_sys::File` in the upload service; tests use a
/// plain struct.
pub trait PdfPayload: Clone {
    fn file_name(&self) -> String;
    fn size_bytes(&self) -> u64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AttemptState {
    #[default]
    Idle,
    Validating,
    Uploading,
    AwaitingResult,
    Complete,
    Failed,
}

impl AttemptState {
    /// A request is in flight; the submit control is disabled.
    pub fn is_busy(self) -> bool {
        matches!(self, AttemptState::Uploading | AttemptState::AwaitingResult)
    }

    /// Idle, Complete and Failed are the only states a new attempt may start from.
    pub fn accepts_submission(self) -> bool {
        matches!(
            self,
            AttemptState::Idle | AttemptState::Complete | AttemptState::Failed
        )
    }
}

/// Fixed progress checkpoints.
///
/// The transport exposes no byte-level progress, so the bar jumps between
/// these values instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Milestone {
    /// Request dispatched.
    Dispatched = 20,
    /// Server accepted the upload, body not yet received.
    Accepted = 60,
    /// Body received.
    Received = 80,
    /// Artifact stored and offered.
    Done = 100,
}

impl Milestone {
    pub fn percent(self) -> u8 {
        self as u8
    }
}

/// One submit-to-terminal-state cycle.
#[derive(Clone, Debug)]
pub struct UploadAttempt<F> {
    id: AttemptId,
    file: Option<F>,
    started_at: Option<DateTime<Local>>,
    state: AttemptState,
    elapsed_seconds: u32,
    progress_percent: u8,
    error: Option<UploadError>,
}

impl<F> Default for UploadAttempt<F> {
    fn default() -> Self {
        Self {
            id: 0,
            file: None,
            started_at: None,
            state: AttemptState::Idle,
            elapsed_seconds: 0,
            progress_percent: 0,
            error: None,
        }
    }
}

impl<F: PdfPayload> UploadAttempt<F> {
    /// Fresh attempt, still being validated.
    pub(crate) fn validating(id: AttemptId, file: F) -> Self {
        Self {
            id,
            file: Some(file),
            started_at: Some(Local::now()),
            state: AttemptState::Validating,
            ..Self::default()
        }
    }

    pub fn id(&self) -> AttemptId {
        self.id
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn file_name(&self) -> Option<String> {
        self.file.as_ref().map(PdfPayload::file_name)
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    pub(crate) fn set_state(&mut self, next: AttemptState) {
        log::debug!("attempt {}: {:?} -> {:?}", self.id, self.state, next);
        self.state = next;
    }

    /// Never moves the bar backwards.
    pub(crate) fn advance(&mut self, milestone: Milestone) {
        self.progress_percent = self.progress_percent.max(milestone.percent());
    }

    pub(crate) fn tick(&mut self) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
    }

    pub(crate) fn fail(&mut self, error: UploadError) {
        self.set_state(AttemptState::Failed);
        self.progress_percent = 0;
        self.error = Some(error);
    }
}
