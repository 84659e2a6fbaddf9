//! Runs orchestrator effects against the browser.
//!
//! [`UploadDriver`] is the only place where the pure [`UploadOrchestrator`]
//! meets timers, `fetch` and blob URLs. Components call [`UploadDriver::submit`];
//! everything after that is fed back into the orchestrator by the driver.

use leptos::*;
use web_sys::File;

use crate::config::{UploadConfig, TICK_INTERVAL_MS, UPLOAD_ENDPOINT};
use crate::orchestrator::{AttemptId, Effect, UploadOrchestrator, UploadOutcome, UploadView};
use crate::services::{send_pdf, ObjectUrl, TickTimer};
use crate::types::LogEntry;

/// Reactive handle on the upload flow. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct UploadDriver {
    orchestrator: RwSignal<UploadOrchestrator<File>>,
    timer: StoredValue<Option<TickTimer>>,
    download: StoredValue<Option<ObjectUrl>>,
    download_href: RwSignal<Option<String>>,
    endpoint: &'static str,
}

impl UploadDriver {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            orchestrator: create_rw_signal(UploadOrchestrator::new(config)),
            timer: store_value(None),
            download: store_value(None),
            download_href: create_rw_signal(None),
            endpoint: UPLOAD_ENDPOINT,
        }
    }

    /// Render model, recomputed whenever the orchestrator changes.
    pub fn view(&self) -> Memo<UploadView> {
        let orchestrator = self.orchestrator;
        create_memo(move |_| orchestrator.with(|o| o.view()))
    }

    pub fn logs(&self) -> Signal<Vec<LogEntry>> {
        let orchestrator = self.orchestrator;
        Signal::derive(move || orchestrator.with(|o| o.logs().to_vec()))
    }

    pub fn clear_logs(&self) {
        self.orchestrator.update(|o| o.clear_logs());
    }

    /// `blob:` URL of the current artifact, once published.
    pub fn download_href(&self) -> Signal<Option<String>> {
        self.download_href.into()
    }

    pub fn submit(&self, file: Option<File>) {
        self.apply(|o| o.submit(file));
    }

    /// Drop the live timer and revoke the live object URL.
    pub fn shutdown(&self) {
        self.timer.try_update_value(|slot| slot.take());
        self.revoke();
    }

    fn apply(&self, f: impl FnOnce(&mut UploadOrchestrator<File>) -> Vec<Effect<File>>) {
        let effects = self.orchestrator.try_update(f).unwrap_or_default();
        self.run(effects);
    }

    fn run(&self, effects: Vec<Effect<File>>) {
        for effect in effects {
            match effect {
                Effect::StartTimer { attempt } => self.start_timer(attempt),
                Effect::StopTimer { attempt } => self.stop_timer(attempt),
                Effect::SendUpload { attempt, file } => self.send(attempt, file),
                Effect::PublishArtifact { attempt } => self.publish(attempt),
                Effect::RevokeArtifact => self.revoke(),
            }
        }
    }

    fn start_timer(&self, attempt: AttemptId) {
        let orchestrator = self.orchestrator;
        let timer = TickTimer::start(attempt, TICK_INTERVAL_MS, move || {
            orchestrator.update(|o| {
                o.tick(attempt);
            });
        });
        self.timer.try_update_value(|slot| replace_slot(slot, timer));
    }

    fn stop_timer(&self, attempt: AttemptId) {
        self.timer
            .try_update_value(|slot| take_if_owned(slot, attempt, TickTimer::attempt));
    }

    fn send(&self, attempt: AttemptId, file: File) {
        let driver = *self;
        let file_name = self
            .orchestrator
            .with_untracked(|o| o.config().download_file_name.clone());

        spawn_local(async move {
            let pending = match send_pdf(&file, driver.endpoint).await {
                Ok(pending) => pending,
                Err(err) => {
                    driver.apply(|o| o.on_body_ready(attempt, UploadOutcome::Failure(err)));
                    return;
                }
            };

            let status = pending.status();
            driver.apply(|o| o.on_response_headers(attempt, &status));
            if !status.is_success() {
                return;
            }

            let outcome = pending.into_outcome(&file_name).await;
            driver.apply(|o| o.on_body_ready(attempt, outcome));
        });
    }

    fn publish(&self, attempt: AttemptId) {
        self.download_href.try_set(None);

        let orchestrator = self.orchestrator;
        let published = self.download.try_update_value(|slot| {
            refill_slot(slot, || {
                orchestrator
                    .with_untracked(|o| o.artifact().map(ObjectUrl::from_artifact))
                    .unwrap_or_else(|| Err("no artifact stored".to_string()))
            })
            .map(|url| url.href().to_string())
        });

        match published {
            Some(Ok(href)) => {
                log::info!("⬇️ Download ready for attempt {}", attempt);
                self.download_href.try_set(Some(href));
            }
            Some(Err(e)) => log::error!("Could not offer download for attempt {}: {}", attempt, e),
            None => log::warn!("Download slot is gone; attempt {} not published", attempt),
        }
    }

    fn revoke(&self) {
        self.download.try_update_value(|slot| slot.take());
        self.download_href.try_set(None);
    }
}

/// Store `next`, dropping whatever the slot held before.
fn replace_slot<T>(slot: &mut Option<T>, next: T) {
    slot.take();
    *slot = Some(next);
}

/// Empty the slot only if its value belongs to `attempt`.
fn take_if_owned<T>(
    slot: &mut Option<T>,
    attempt: AttemptId,
    owner: impl Fn(&T) -> AttemptId,
) -> Option<T> {
    if slot.as_ref().map(owner) == Some(attempt) {
        slot.take()
    } else {
        None
    }
}

/// Drop the old value, then build and store a new one.
///
/// The old value is released before `create` runs, so two object URLs never
/// exist at once. On error the slot stays empty.
fn refill_slot<T>(
    slot: &mut Option<T>,
    create: impl FnOnce() -> Result<T, String>,
) -> Result<&T, String> {
    slot.take();
    let value = create()?;
    Ok(slot.insert(value))
}
