use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::modules::homework::{check_response, Homework, PayloadError};
use crate::services::practicum::{PracticumError, StatusSource};
use crate::services::telegram::Notifier;

/// Sent when a poll comes back with no homeworks; deduplicated like any
/// other message.
const NO_CHANGE_MESSAGE: &str = "check complete, status unchanged";

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error(transparent)]
    Fetch(#[from] PracticumError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Mutable loop state carried between cycles. Lives only in memory, so a
/// restart forgets what was already reported.
#[derive(Debug, Default)]
pub struct WatchState {
    /// Unix timestamp sent as `from_date` on the next fetch.
    pub from_date: i64,
    /// Text of the last notification handed to the notifier. Failure
    /// notifications never land here.
    pub last_notified: Option<String>,
}

pub struct WatcherEngine {
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,
    chat_id: String,
    poll_interval: Duration,
}

impl WatcherEngine {
    pub fn new(
        source: Arc<dyn StatusSource>,
        notifier: Arc<dyn Notifier>,
        chat_id: String,
        poll_interval: Duration,
    ) -> Self {
        Self {
            source,
            notifier,
            chat_id,
            poll_interval,
        }
    }

    /// Start the polling loop; runs until the process is killed.
    pub async fn run(&self) {
        let mut state = WatchState {
            from_date: Utc::now().timestamp(),
            last_notified: None,
        };

        // Next wake is one period after this cycle's start; an overrunning
        // cycle pushes the schedule back instead of bursting catch-up ticks.
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        tracing::info!(
            "Homework watcher started, checking every {:?}",
            self.poll_interval
        );

        loop {
            interval.tick().await;
            self.run_cycle(&mut state).await;
        }
    }

    /// Run a single fetch/validate/notify pass.
    ///
    /// Any failure turns into a failure notification and leaves
    /// `last_notified` untouched, so the same failure is reported again on
    /// every cycle it persists.
    pub async fn run_cycle(&self, state: &mut WatchState) {
        state.from_date = Utc::now().timestamp();

        let candidate = match self.poll_once(state.from_date).await {
            Ok(message) => message,
            Err(err) => {
                tracing::error!("Watch cycle failed: {}", err);
                self.notify(&format!("operation failure: {}", err)).await;
                return;
            }
        };

        if state.last_notified.as_deref() == Some(candidate.as_str()) {
            tracing::debug!("Status unchanged, suppressing repeat notification");
            return;
        }

        self.notify(&candidate).await;
        state.last_notified = Some(candidate);
    }

    /// Reduce one poll to the message it would produce. Only the first
    /// homework in the list is considered; an empty list maps to the fixed
    /// no-change text.
    async fn poll_once(&self, from_date: i64) -> Result<String, WatchError> {
        let payload = self.source.fetch_statuses(from_date).await?;
        let homeworks = check_response(&payload)?;

        match homeworks.first() {
            Some(raw) => {
                let homework = Homework::from_value(raw)?;
                tracing::debug!(
                    "Newest homework \"{}\" is {}",
                    homework.name,
                    homework.status.as_str()
                );
                Ok(homework.message())
            }
            None => Ok(NO_CHANGE_MESSAGE.to_string()),
        }
    }

    /// Best-effort delivery: a failed send is logged and dropped, never
    /// retried within the cycle.
    async fn notify(&self, text: &str) {
        match self.notifier.send_message(&self.chat_id, text).await {
            Ok(()) => tracing::debug!("Sent notification: \"{}\"", text),
            Err(err) => {
                tracing::error!("Failed to send notification \"{}\": {}", text, err);
            }
        }
    }
}
