use crate::ReadError;
use std::env;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5 * 60);

// Deadline used when `now + timeout` does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            read: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl Timeouts {
    /// Honours `SQLMI_READ_TIMEOUT_SECS`; unset or unparsable values keep the default.
    pub fn from_env() -> Self {
        let read = env::var("SQLMI_READ_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_READ_TIMEOUT);
        Self { read }
    }
}

/// Deadline and cancellation for a single read.
#[derive(Debug, Clone)]
pub struct ReadContext {
    deadline: Instant,
    timeout: Duration,
    cancel: CancellationToken,
}

impl ReadContext {
    pub fn new(timeouts: &Timeouts) -> Self {
        Self::with_timeout(timeouts.read)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let now = Instant::now();
        Self {
            deadline: now
                .checked_add(timeout)
                .unwrap_or_else(|| now + FAR_FUTURE),
            timeout,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Drives `fut` until it completes, the deadline passes or the token fires.
    pub(crate) async fn run<F>(&self, id: &str, fut: F) -> Result<F::Output, ReadError>
    where
        F: Future,
    {
        if self.cancel.is_cancelled() {
            return Err(ReadError::Cancelled { id: id.to_string() });
        }
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ReadError::Cancelled { id: id.to_string() }),
            result = tokio::time::timeout_at(self.deadline, fut) => {
                result.map_err(|_| ReadError::Timeout {
                    id: id.to_string(),
                    after: self.timeout,
                })
            }
        }
    }
}

impl Default for ReadContext {
    fn default() -> Self {
        Self::new(&Timeouts::default())
    }
}
