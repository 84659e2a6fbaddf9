use super::{AttemptId, AttemptState};

/// Everything the upload form renders, derived from orchestrator state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadView {
    pub state: AttemptState,
    pub status: String,
    pub is_error: bool,
    pub progress_percent: u8,
    pub elapsed_seconds: u32,
    pub elapsed_text: String,
    pub show_spinner: bool,
    pub submit_enabled: bool,
    pub download: Option<DownloadOffer>,
}

/// Download affordance, present only once an attempt is Complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOffer {
    pub attempt: AttemptId,
    pub file_name: String,
    pub size_bytes: usize,
}

/// `Time elapsed: 42s`, or `Time elapsed: 2m 05s` past the first minute.
pub fn format_elapsed(seconds: u32) -> String {
    let minutes = seconds / 60;
    let rest = seconds % 60;
    if minutes == 0 {
        format!("Time elapsed: {}s", rest)
    } else {
        format!("Time elapsed: {}m {:02}s", minutes, rest)
    }
}
