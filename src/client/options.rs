//! Client configuration.

use std::time::Duration;

/// Optional settings for [`crate::BrawlhallaClient`].
///
/// Defaults match the public API key limits: 180 requests per 15 minutes
/// and 10 per second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Requests allowed per 15 minutes. 0 disables this limit.
    pub requests_per_15_minutes: u32,
    /// Requests allowed per second. 0 disables this limit.
    pub requests_per_second: u32,
    /// Wait for the internal rate limiter before sending, instead of letting
    /// the server reject the request.
    pub use_internal_ratelimiter: bool,
    /// Per-request timeout.
    pub max_timeout: Duration,
    /// When false, failed requests log a warning and yield `Ok(None)`.
    /// `swallow_429` takes precedence for rate-limit responses.
    pub propagate_exceptions: bool,
    /// Rate-limited requests yield `Ok(None)` instead of an error.
    pub swallow_429: bool,
    /// Retry rate-limited requests after `retry_delay`.
    pub retry_on_429: bool,
    pub retry_delay: Duration,
    /// Upper bound on 429 retries for a single call.
    pub max_retries_on_429: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            requests_per_15_minutes: 180,
            requests_per_second: 10,
            use_internal_ratelimiter: true,
            max_timeout: Duration::from_secs(10),
            propagate_exceptions: true,
            swallow_429: true,
            retry_on_429: true,
            retry_delay: Duration::from_secs(60),
            max_retries_on_429: 1,
        }
    }
}

impl ClientOptions {
    pub fn with_rate_limits(mut self, per_15_minutes: u32, per_second: u32) -> Self {
        self.requests_per_15_minutes = per_15_minutes;
        self.requests_per_second = per_second;
        self
    }

    pub fn with_internal_ratelimiter(mut self, enabled: bool) -> Self {
        self.use_internal_ratelimiter = enabled;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.max_timeout = timeout;
        self
    }

    pub fn with_propagate_exceptions(mut self, propagate: bool) -> Self {
        self.propagate_exceptions = propagate;
        self
    }

    pub fn with_swallow_429(mut self, swallow: bool) -> Self {
        self.swallow_429 = swallow;
        self
    }

    /// Enable or disable 429 retries. Passing `None` disables them.
    pub fn with_retry_on_429(mut self, retry: Option<(Duration, u32)>) -> Self {
        match retry {
            Some((delay, max_retries)) => {
                self.retry_on_429 = true;
                self.retry_delay = delay;
                self.max_retries_on_429 = max_retries;
            }
            None => self.retry_on_429 = false,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.requests_per_15_minutes, 180);
        assert_eq!(options.requests_per_second, 10);
        assert!(options.use_internal_ratelimiter);
        assert_eq!(options.max_timeout, Duration::from_secs(10));
        assert!(options.propagate_exceptions);
        assert!(options.swallow_429);
        assert!(options.retry_on_429);
        assert_eq!(options.retry_delay, Duration::from_secs(60));
        assert_eq!(options.max_retries_on_429, 1);
    }

    #[test]
    fn test_builders() {
        let options = ClientOptions::default()
            .with_rate_limits(100, 5)
            .with_internal_ratelimiter(false)
            .with_timeout(Duration::from_secs(3))
            .with_propagate_exceptions(false)
            .with_swallow_429(false)
            .with_retry_on_429(Some((Duration::from_secs(2), 4)));

        assert_eq!(options.requests_per_15_minutes, 100);
        assert_eq!(options.requests_per_second, 5);
        assert!(!options.use_internal_ratelimiter);
        assert_eq!(options.max_timeout, Duration::from_secs(3));
        assert!(!options.propagate_exceptions);
        assert!(!options.swallow_429);
        assert_eq!(options.retry_delay, Duration::from_secs(2));
        assert_eq!(options.max_retries_on_429, 4);

        let options = options.with_retry_on_429(None);
        assert!(!options.retry_on_429);
    }
}
