use crate::{AuthAttempt, AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::net::IpAddr;
use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::keyed::DefaultKeyedStateStore,
};

type AttemptKey = (AuthAttempt, IpAddr);

/// Limiter for authentication attempts, keyed by client address and action.
///
/// Every client gets the full budget per action as a burst, refilled evenly
/// over the window.
pub struct AuthRateLimiter {
    limiter: RateLimiter<AttemptKey, DefaultKeyedStateStore<AttemptKey>, DefaultClock>,
    config: RateLimitConfig,
}

impl AuthRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let window = Duration::from_secs(config.window_secs.max(1));
        let period = (window / burst.get()).max(Duration::from_nanos(1));

        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    #[track_caller]
    pub fn check(&self, attempt: AuthAttempt, client: IpAddr) -> AuthErrorResult<()> {
        self.limiter
            .check_key(&(attempt, client))
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop state for clients whose budget has fully refilled
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
    }

    /// Number of (action, client) pairs currently tracked
    pub fn tracked(&self) -> usize {
        self.limiter.len()
    }
}
