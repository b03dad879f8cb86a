// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss duration domain type.
//!
//! Negative or non-finite values are a configuration slip, not an error:
//! they are clamped to zero, which means "never auto-dismiss".

use crate::config::{DEFAULT_DURATION_SECS, DISABLED_DURATION_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Auto-dismiss delay in seconds, guaranteed to be finite and non-negative.
///
/// # Example
///
/// ```
/// use iced_toast::ToastDuration;
///
/// let duration = ToastDuration::new(2.0);
/// assert_eq!(duration.secs(), 2.0);
///
/// // Negative values disable auto-dismiss
/// assert!(ToastDuration::new(-1.0).is_disabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct ToastDuration(f64);

impl ToastDuration {
    /// Keeps the toast on screen until tapped or cleared by the host.
    pub const DISABLED: Self = Self(DISABLED_DURATION_SECS);

    /// Creates a new duration, clamping invalid values to [`Self::DISABLED`].
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self(secs)
        } else {
            Self::DISABLED
        }
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn secs(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_disabled(self) -> bool {
        self.0 <= 0.0
    }

    /// Returns the countdown delay at millisecond resolution, or `None`
    /// when auto-dismiss is off.
    #[must_use]
    pub fn as_delay(self) -> Option<Duration> {
        if self.is_disabled() {
            None
        } else {
            // Saturating cast; sub-millisecond durations round up to 1 ms.
            let millis = (self.0 * 1000.0).round().max(1.0) as u64;
            Some(Duration::from_millis(millis))
        }
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(DEFAULT_DURATION_SECS)
    }
}

impl From<f64> for ToastDuration {
    fn from(secs: f64) -> Self {
        Self::new(secs)
    }
}

impl From<ToastDuration> for f64 {
    fn from(duration: ToastDuration) -> Self {
        duration.0
    }
}

impl From<Duration> for ToastDuration {
    fn from(duration: Duration) -> Self {
        Self::new(duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_point_two_seconds() {
        assert_eq!(ToastDuration::default().secs(), 1.2);
        assert_eq!(
            ToastDuration::default().as_delay(),
            Some(Duration::from_millis(1200))
        );
    }

    #[test]
    fn zero_negative_and_nan_disable_auto_dismiss() {
        for secs in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let duration = ToastDuration::new(secs);
            assert!(duration.is_disabled(), "{secs} should disable");
            assert_eq!(duration.as_delay(), None);
        }
    }

    #[test]
    fn converts_from_std_duration() {
        let duration = ToastDuration::from(Duration::from_millis(2500));
        assert_eq!(duration.secs(), 2.5);
    }
}
