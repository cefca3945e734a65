// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position animator for a draggable, flingable card.
//!
//! ## Overview
//!
//! [`PositionAnimator`] owns the offset of the top card and exposes the three motions a
//! swipe needs:
//!
//! - [`follow_finger`](PositionAnimator::follow_finger): set the offset immediately.
//! - [`reset_position`](PositionAnimator::reset_position): spring back to the origin.
//! - [`force_swipe`](PositionAnimator::force_swipe): fly linearly to one screen width
//!   left or right.
//!
//! It also derives the card's [`CardStyle`]: the translation is the offset, and the
//! rotation is interpolated from the horizontal offset over `±rotation_range × width`,
//! clamped at `±max_rotation_degrees`.

use core::time::Duration;

use kurbo::Vec2;

use crate::interpolate::{Interpolation, InterpolationError};
use crate::spring::{SpringConfig, SpringError};
use crate::style::CardStyle;
use crate::value::{Animated2D, AnimatedXY, TransitionKind};

/// Direction of a completed or forced swipe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
}

impl SwipeDirection {
    /// `-1.0` for [`Left`](Self::Left), `1.0` for [`Right`](Self::Right).
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// The opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Errors reported by [`MotionParams::validate`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum MotionError {
    /// Screen width must be positive and finite.
    #[error("screen width must be positive and finite, got {0}")]
    ScreenWidth(f64),
    /// Rotation range must be positive and finite.
    #[error("rotation range must be positive and finite, got {0}")]
    RotationRange(f64),
    /// Maximum rotation must be finite.
    #[error("maximum rotation must be finite, got {0}")]
    MaxRotation(f64),
    /// A forced swipe needs a non-zero duration.
    #[error("swipe duration must be non-zero")]
    ZeroSwipeDuration,
    /// Invalid reset spring.
    #[error("invalid reset spring: {0}")]
    Spring(#[from] SpringError),
    /// Invalid rotation stops.
    #[error("invalid rotation interpolation: {0}")]
    Interpolation(#[from] InterpolationError),
}

/// Parameters of a [`PositionAnimator`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionParams {
    /// Width of the screen (or deck container) in logical pixels.
    pub screen_width: f64,
    /// Duration of a forced swipe.
    pub swipe_duration: Duration,
    /// Spring used to return to the origin.
    pub reset_spring: SpringConfig,
    /// Horizontal offset, in screen widths, at which rotation reaches its maximum.
    pub rotation_range: f64,
    /// Rotation in degrees at `+rotation_range × screen_width`.
    pub max_rotation_degrees: f64,
}

impl MotionParams {
    /// Parameters for `screen_width` with the standard swipe feel
    /// (250 ms fling, ±120° at ±1.5 widths, default spring).
    pub fn new(screen_width: f64) -> Self {
        Self {
            screen_width,
            swipe_duration: Duration::from_millis(250),
            reset_spring: SpringConfig::default(),
            rotation_range: 1.5,
            max_rotation_degrees: 120.0,
        }
    }

    /// Check every parameter.
    pub fn validate(&self) -> Result<(), MotionError> {
        self.rotation().map(|_| ())
    }

    fn rotation(&self) -> Result<Interpolation<3>, MotionError> {
        if !(self.screen_width.is_finite() && self.screen_width > 0.0) {
            return Err(MotionError::ScreenWidth(self.screen_width));
        }
        if !(self.rotation_range.is_finite() && self.rotation_range > 0.0) {
            return Err(MotionError::RotationRange(self.rotation_range));
        }
        if !self.max_rotation_degrees.is_finite() {
            return Err(MotionError::MaxRotation(self.max_rotation_degrees));
        }
        if self.swipe_duration.is_zero() {
            return Err(MotionError::ZeroSwipeDuration);
        }
        self.reset_spring.validate()?;
        let reach = self.screen_width * self.rotation_range;
        let max = self.max_rotation_degrees;
        Interpolation::new([-reach, 0.0, reach], [-max, 0.0, max]).map_err(MotionError::from)
    }
}

/// What the animator finished doing during an [`advance`](PositionAnimator::advance).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MotionEvent {
    /// The spring back to the origin came to rest.
    Reset,
    /// A forced swipe reached the edge of the screen.
    Swiped(SwipeDirection),
}

/// Animated offset of the top card.
///
/// Generic over the [`Animated2D`] engine; [`AnimatedXY`] by default.
///
/// ```
/// use core::time::Duration;
/// use kurbo::Vec2;
/// use understory_motion::position::{MotionEvent, MotionParams, PositionAnimator, SwipeDirection};
///
/// let mut anim = PositionAnimator::new(MotionParams::new(400.0)).unwrap();
/// anim.follow_finger(Vec2::new(150.0, 12.0));
/// anim.force_swipe(SwipeDirection::Right);
/// assert_eq!(
///     anim.advance(Duration::from_millis(250)),
///     Some(MotionEvent::Swiped(SwipeDirection::Right))
/// );
/// assert_eq!(anim.offset(), Vec2::new(400.0, 0.0));
/// anim.snap_to_origin();
/// assert_eq!(anim.offset(), Vec2::ZERO);
/// ```
#[derive(Clone, Debug)]
pub struct PositionAnimator<A: Animated2D = AnimatedXY> {
    value: A,
    params: MotionParams,
    rotation: Interpolation<3>,
    swiping: Option<SwipeDirection>,
}

impl PositionAnimator<AnimatedXY> {
    /// Create an animator at the origin using the built-in engine.
    pub fn new(params: MotionParams) -> Result<Self, MotionError> {
        Self::with_value(AnimatedXY::new(Vec2::ZERO), params)
    }
}

impl<A: Animated2D> PositionAnimator<A> {
    /// Create an animator over a host-supplied animated value.
    pub fn with_value(value: A, params: MotionParams) -> Result<Self, MotionError> {
        let rotation = params.rotation()?;
        Ok(Self {
            value,
            params,
            rotation,
            swiping: None,
        })
    }

    /// Parameters in use.
    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    /// Current offset.
    pub fn offset(&self) -> Vec2 {
        self.value.value()
    }

    /// The underlying animated value.
    pub fn value(&self) -> &A {
        &self.value
    }

    /// True while a spring back or forced swipe is running.
    pub fn is_animating(&self) -> bool {
        self.value.is_animating()
    }

    /// Direction of the forced swipe in flight, if any.
    pub fn swiping(&self) -> Option<SwipeDirection> {
        self.swiping
    }

    /// Set the offset to the pan translation immediately.
    ///
    /// Supersedes a running spring back; the caller is responsible for not
    /// interrupting a forced swipe.
    pub fn follow_finger(&mut self, translation: Vec2) {
        self.swiping = None;
        self.value.set_value(translation);
    }

    /// Spring back to `(0, 0)`.
    pub fn reset_position(&mut self) {
        self.swiping = None;
        self.value.spring_to(Vec2::ZERO, self.params.reset_spring);
    }

    /// Fly linearly to `(±screen_width, 0)` over the swipe duration.
    pub fn force_swipe(&mut self, direction: SwipeDirection) {
        self.swiping = Some(direction);
        let target = Vec2::new(direction.sign() * self.params.screen_width, 0.0);
        self.value.timing_to(target, self.params.swipe_duration);
    }

    /// Set the offset to `(0, 0)` immediately, cancelling anything in flight.
    pub fn snap_to_origin(&mut self) {
        self.swiping = None;
        self.value.set_value(Vec2::ZERO);
    }

    /// Advance time and report a finished motion.
    pub fn advance(&mut self, dt: Duration) -> Option<MotionEvent> {
        let finished = self.value.advance(dt)?;
        match (finished.kind, self.swiping.take()) {
            (TransitionKind::Timing, Some(direction)) => Some(MotionEvent::Swiped(direction)),
            (TransitionKind::Spring, None) => Some(MotionEvent::Reset),
            // A host engine finished something this animator did not start.
            (_, swiping) => {
                self.swiping = swiping;
                None
            }
        }
    }

    /// Style for an arbitrary offset.
    pub fn style_for(&self, offset: Vec2) -> CardStyle {
        CardStyle {
            translation: offset,
            rotation_degrees: self.rotation.sample(offset.x),
        }
    }

    /// Style for the current offset.
    pub fn style(&self) -> CardStyle {
        self.style_for(self.offset())
    }
}
