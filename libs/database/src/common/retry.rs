use std::future::Future;
use std::iter;
use std::time::Duration;
use tracing::{debug, warn};

/// Exponential backoff for startup connection attempts.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Attempts after the first one
    pub max_retries: u32,
    pub initial_delay: Duration,
    /// Cap for any single delay
    pub max_delay: Duration,
    pub multiplier: u32,
    /// Scale each delay to a random 50-100% of its nominal value
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
            multiplier: 2,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_delays(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_delay = initial;
        self.max_delay = max;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }

    /// Nominal delay before each retry, in order.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        let (cap, multiplier) = (self.max_delay, self.multiplier);
        iter::successors(Some(self.initial_delay.min(cap)), move |previous| {
            Some(previous.saturating_mul(multiplier).min(cap))
        })
        .take(self.max_retries as usize)
    }
}

/// Runs `operation` until it succeeds or the retries run out, returning the
/// last error in that case.
///
/// ```ignore
/// let client = retry_with_backoff(
///     || database::mongodb::connect_from_config(&config),
///     RetryConfig::new().with_max_retries(10),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut delays = config.delays();
    let mut attempt: u32 = 1;

    loop {
        let error = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        let Some(nominal) = delays.next() else {
            warn!(attempts = attempt, %error, "Operation failed, giving up");
            return Err(error);
        };
        let delay = if config.jitter { jitter(nominal) } else { nominal };

        warn!(attempt, %error, ?delay, "Operation failed, retrying");
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

fn jitter(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let percent = RandomState::new().hash_one(std::time::SystemTime::now()) % 51;
    delay.mul_f64((50 + percent) as f64 / 100.0)
}
