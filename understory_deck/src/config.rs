// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck configuration.
//!
//! Everything the deck needs to know about its environment is injected here, most importantly the
//! screen width: it scales the swipe threshold, the fling distance and the rotation range.

use core::time::Duration;

use kurbo::Vec2;
use understory_motion::position::{MotionError, MotionParams};
use understory_motion::spring::{SpringConfig, SpringError};

/// Errors reported by [`DeckConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The swipe threshold ratio must be positive and finite.
    #[error("swipe threshold ratio must be positive and finite, got {0}")]
    ThresholdRatio(f64),
    /// The stack step must be finite.
    #[error("stack step must be finite, got {0:?}")]
    StackStep(Vec2),
    /// The stack settle spring is invalid.
    #[error("invalid stack settle spring: {0}")]
    StackSettle(SpringError),
    /// Motion parameters (screen width, fling duration, rotation, reset spring) are invalid.
    #[error(transparent)]
    Motion(#[from] MotionError),
}

/// Configuration of a [`Deck`](crate::deck::Deck).
///
/// ```
/// use understory_deck::config::DeckConfig;
///
/// let config = DeckConfig::new(400.0).unwrap();
/// assert_eq!(config.swipe_threshold(), 100.0);
/// assert!(DeckConfig::new(0.0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckConfig {
    /// Width of the screen (or deck container) in logical pixels.
    pub screen_width: f64,
    /// Fraction of the screen width a release must exceed to count as a swipe.
    pub swipe_threshold_ratio: f64,
    /// Duration of the fling off screen.
    pub swipe_duration: Duration,
    /// Horizontal offset, in screen widths, at which the top card reaches its maximum rotation.
    pub rotation_range: f64,
    /// Rotation in degrees at `+rotation_range × screen_width`.
    pub max_rotation_degrees: f64,
    /// Spring used when an incomplete swipe returns to the origin.
    pub reset_spring: SpringConfig,
    /// Offset (left, top) between a card and the one below it.
    pub stack_step: Vec2,
    /// Spring the stack uses to slide up after a swipe; `None` snaps it into place.
    pub stack_settle: Option<SpringConfig>,
}

impl DeckConfig {
    /// Standard configuration for `screen_width`, validated.
    pub fn new(screen_width: f64) -> Result<Self, ConfigError> {
        let config = Self::with_screen_width(screen_width);
        config.validate()?;
        Ok(config)
    }

    /// Standard configuration for `screen_width`, unvalidated.
    ///
    /// Threshold 0.25 widths, 250 ms fling, ±120° at ±1.5 widths, stack step (2, 10),
    /// default springs.
    pub fn with_screen_width(screen_width: f64) -> Self {
        Self {
            screen_width,
            swipe_threshold_ratio: 0.25,
            swipe_duration: Duration::from_millis(250),
            rotation_range: 1.5,
            max_rotation_degrees: 120.0,
            reset_spring: SpringConfig::default(),
            stack_step: Vec2::new(2.0, 10.0),
            stack_settle: Some(SpringConfig::default()),
        }
    }

    /// Replace the swipe threshold ratio.
    pub fn with_threshold_ratio(mut self, ratio: f64) -> Self {
        self.swipe_threshold_ratio = ratio;
        self
    }

    /// Replace the fling duration.
    pub fn with_swipe_duration(mut self, duration: Duration) -> Self {
        self.swipe_duration = duration;
        self
    }

    /// Replace the reset spring.
    pub fn with_reset_spring(mut self, spring: SpringConfig) -> Self {
        self.reset_spring = spring;
        self
    }

    /// Replace the stack step.
    pub fn with_stack_step(mut self, step: Vec2) -> Self {
        self.stack_step = step;
        self
    }

    /// Replace (or disable with `None`) the stack settle spring.
    pub fn with_stack_settle(mut self, spring: Option<SpringConfig>) -> Self {
        self.stack_settle = spring;
        self
    }

    /// Horizontal distance a release must exceed to count as a swipe.
    pub fn swipe_threshold(&self) -> f64 {
        self.swipe_threshold_ratio * self.screen_width
    }

    /// Parameters for the top card's position animator.
    pub fn motion_params(&self) -> MotionParams {
        MotionParams {
            screen_width: self.screen_width,
            swipe_duration: self.swipe_duration,
            reset_spring: self.reset_spring,
            rotation_range: self.rotation_range,
            max_rotation_degrees: self.max_rotation_degrees,
        }
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.motion_params().validate()?;
        if !(self.swipe_threshold_ratio.is_finite() && self.swipe_threshold_ratio > 0.0) {
            return Err(ConfigError::ThresholdRatio(self.swipe_threshold_ratio));
        }
        if !self.stack_step.is_finite() {
            return Err(ConfigError::StackStep(self.stack_step));
        }
        if let Some(spring) = &self.stack_settle {
            spring.validate().map_err(ConfigError::StackSettle)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_values() {
        let c = DeckConfig::new(360.0).unwrap();
        assert_eq!(c.swipe_threshold(), 90.0);
        assert_eq!(c.swipe_duration, Duration::from_millis(250));
        assert_eq!(c.stack_step, Vec2::new(2.0, 10.0));
        assert_eq!(c.motion_params().screen_width, 360.0);
        assert_eq!(c.motion_params().rotation_range, 1.5);
    }

    #[test]
    fn rejects_bad_screen_width() {
        assert_eq!(
            DeckConfig::new(-1.0),
            Err(ConfigError::Motion(MotionError::ScreenWidth(-1.0)))
        );
        assert!(DeckConfig::new(f64::NAN).is_err());
    }

    #[test]
    fn rejects_bad_fields() {
        let base = DeckConfig::with_screen_width(400.0);
        assert_eq!(
            base.with_threshold_ratio(0.0).validate(),
            Err(ConfigError::ThresholdRatio(0.0))
        );
        assert_eq!(
            base.with_swipe_duration(Duration::ZERO).validate(),
            Err(ConfigError::Motion(MotionError::ZeroSwipeDuration))
        );
        let step = Vec2::new(f64::INFINITY, 0.0);
        assert_eq!(
            base.with_stack_step(step).validate(),
            Err(ConfigError::StackStep(step))
        );
        let floppy = SpringConfig {
            damping: 0.0,
            ..SpringConfig::default()
        };
        assert_eq!(
            base.with_stack_settle(Some(floppy)).validate(),
            Err(ConfigError::StackSettle(SpringError::Damping(0.0)))
        );
        assert!(matches!(
            base.with_reset_spring(floppy).validate(),
            Err(ConfigError::Motion(MotionError::Spring(_)))
        ));
        assert_eq!(base.with_stack_settle(None).validate(), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let c = DeckConfig::with_screen_width(412.0).with_stack_settle(None);
        let json = serde_json::to_string(&c).unwrap();
        let back: DeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
