use super::AttemptId;

/// Work the orchestrator asks the browser shell to perform.
///
/// The orchestrator never touches timers, the network or blob URLs itself;
/// it returns these and the driver carries them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<F> {
    /// Start the one-second elapsed-time interval for this attempt,
    /// replacing any interval still alive.
    StartTimer { attempt: AttemptId },
    /// Stop the interval owned by this attempt.
    StopTimer { attempt: AttemptId },
    /// POST the file to the extraction service.
    SendUpload { attempt: AttemptId, file: F },
    /// Expose the stored artifact as a download.
    PublishArtifact { attempt: AttemptId },
    /// Revoke the object URL of the previous artifact.
    RevokeArtifact,
}
