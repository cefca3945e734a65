// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated 2D values.
//!
//! ## Overview
//!
//! [`Animated2D`] is the capability set a position animator needs from an animation engine:
//! an immediate set, a spring transition, a timed transition, and a way to advance time.
//! [`AnimatedXY`] is the built-in, deterministic implementation. A host that owns its own
//! animation engine can implement the trait instead and keep the rest of the stack unchanged.
//!
//! ## Completion
//!
//! [`Animated2D::advance`] reports [`Finished`] exactly once for a transition that reaches
//! its target. A transition superseded by [`Animated2D::set_value`] or by starting another
//! transition never reports.

use core::time::Duration;

use kurbo::Vec2;

use crate::spring::{SpringConfig, SpringState};

/// Which kind of transition finished.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransitionKind {
    /// A spring came to rest on its target.
    Spring,
    /// A timed transition reached the end of its duration.
    Timing,
}

/// Reported by [`Animated2D::advance`] when a transition completes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Finished {
    /// The transition that completed.
    pub kind: TransitionKind,
}

/// An animatable 2D value.
pub trait Animated2D {
    /// Current value.
    fn value(&self) -> Vec2;
    /// Set the value immediately, stopping any running transition.
    fn set_value(&mut self, value: Vec2);
    /// Start a spring transition towards `target`.
    fn spring_to(&mut self, target: Vec2, spring: SpringConfig);
    /// Start a linear transition to `target` lasting `duration`.
    fn timing_to(&mut self, target: Vec2, duration: Duration);
    /// Advance time by `dt`; returns the completion of the running transition, if it completed.
    fn advance(&mut self, dt: Duration) -> Option<Finished>;
    /// True while a transition is running.
    fn is_animating(&self) -> bool;
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Transition {
    Spring {
        target: Vec2,
        config: SpringConfig,
    },
    Timing {
        from: Vec2,
        to: Vec2,
        duration: Duration,
        elapsed: Duration,
    },
}

/// Deterministic [`Animated2D`] driven by explicit [`advance`](Animated2D::advance) calls.
///
/// ```
/// use core::time::Duration;
/// use kurbo::Vec2;
/// use understory_motion::value::{Animated2D, AnimatedXY, TransitionKind};
///
/// let mut v = AnimatedXY::new(Vec2::ZERO);
/// v.timing_to(Vec2::new(100.0, 0.0), Duration::from_millis(200));
/// assert!(v.advance(Duration::from_millis(100)).is_none());
/// assert_eq!(v.value(), Vec2::new(50.0, 0.0));
/// let done = v.advance(Duration::from_millis(100)).unwrap();
/// assert_eq!(done.kind, TransitionKind::Timing);
/// assert_eq!(v.value(), Vec2::new(100.0, 0.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimatedXY {
    state: SpringState,
    transition: Option<Transition>,
}

impl AnimatedXY {
    /// Create a value at rest at `value`.
    pub fn new(value: Vec2) -> Self {
        Self {
            state: SpringState {
                position: value,
                velocity: Vec2::ZERO,
            },
            transition: None,
        }
    }

    /// Current velocity (only non-zero while a spring is running).
    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    /// Target of the running transition, if any.
    pub fn target(&self) -> Option<Vec2> {
        self.transition.map(|t| match t {
            Transition::Spring { target, .. } => target,
            Transition::Timing { to, .. } => to,
        })
    }
}

impl Animated2D for AnimatedXY {
    fn value(&self) -> Vec2 {
        self.state.position
    }

    fn set_value(&mut self, value: Vec2) {
        self.state.position = value;
        self.state.velocity = Vec2::ZERO;
        self.transition = None;
    }

    fn spring_to(&mut self, target: Vec2, spring: SpringConfig) {
        // A running spring hands its velocity over; anything else starts from rest.
        if !matches!(self.transition, Some(Transition::Spring { .. })) {
            self.state.velocity = Vec2::ZERO;
        }
        self.transition = Some(Transition::Spring {
            target,
            config: spring,
        });
    }

    fn timing_to(&mut self, target: Vec2, duration: Duration) {
        self.state.velocity = Vec2::ZERO;
        self.transition = Some(Transition::Timing {
            from: self.state.position,
            to: target,
            duration,
            elapsed: Duration::ZERO,
        });
    }

    fn advance(&mut self, dt: Duration) -> Option<Finished> {
        let transition = self.transition.as_mut()?;
        let kind = match transition {
            Transition::Spring { target, config } => {
                if !self.state.step(*target, config, dt) {
                    return None;
                }
                TransitionKind::Spring
            }
            Transition::Timing {
                from,
                to,
                duration,
                elapsed,
            } => {
                *elapsed = elapsed.saturating_add(dt);
                if *elapsed < *duration {
                    let t = elapsed.as_secs_f64() / duration.as_secs_f64();
                    self.state.position = *from + (*to - *from) * t;
                    return None;
                }
                self.state.position = *to;
                TransitionKind::Timing
            }
        };
        self.transition = None;
        Some(Finished { kind })
    }

    fn is_animating(&self) -> bool {
        self.transition.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_to_end(v: &mut AnimatedXY, max_frames: usize) -> Option<Finished> {
        for _ in 0..max_frames {
            if let Some(f) = v.advance(FRAME) {
                return Some(f);
            }
        }
        None
    }

    #[test]
    fn set_value_is_immediate_and_stops_transitions() {
        let mut v = AnimatedXY::new(Vec2::ZERO);
        v.timing_to(Vec2::new(10.0, 0.0), Duration::from_millis(100));
        v.set_value(Vec2::new(3.0, 4.0));
        assert_eq!(v.value(), Vec2::new(3.0, 4.0));
        assert!(!v.is_animating());
        assert_eq!(v.advance(Duration::from_secs(1)), None);
        assert_eq!(v.value(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn timing_is_linear_and_lands_exactly() {
        let mut v = AnimatedXY::new(Vec2::new(0.0, 40.0));
        v.timing_to(Vec2::new(-400.0, 0.0), Duration::from_millis(250));
        assert_eq!(v.advance(Duration::from_millis(125)), None);
        assert_eq!(v.value(), Vec2::new(-200.0, 20.0));
        assert_eq!(
            v.advance(Duration::from_millis(200)),
            Some(Finished {
                kind: TransitionKind::Timing
            })
        );
        assert_eq!(v.value(), Vec2::new(-400.0, 0.0));
        assert_eq!(v.advance(FRAME), None, "completion reported once");
    }

    #[test]
    fn zero_duration_timing_finishes_on_next_advance() {
        let mut v = AnimatedXY::new(Vec2::ZERO);
        v.timing_to(Vec2::new(5.0, 5.0), Duration::ZERO);
        assert!(v.advance(Duration::ZERO).is_some());
        assert_eq!(v.value(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn spring_reports_completion_once_on_target() {
        let mut v = AnimatedXY::new(Vec2::new(90.0, -30.0));
        v.spring_to(Vec2::ZERO, SpringConfig::default());
        assert_eq!(v.target(), Some(Vec2::ZERO));
        let done = run_to_end(&mut v, 400);
        assert_eq!(
            done,
            Some(Finished {
                kind: TransitionKind::Spring
            })
        );
        assert_eq!(v.value(), Vec2::ZERO);
        assert_eq!(v.target(), None);
        assert_eq!(v.advance(FRAME), None);
    }

    #[test]
    fn superseded_transition_never_reports() {
        let mut v = AnimatedXY::new(Vec2::new(50.0, 0.0));
        v.spring_to(Vec2::ZERO, SpringConfig::default());
        v.advance(FRAME);
        v.timing_to(Vec2::new(300.0, 0.0), Duration::from_millis(32));
        assert_eq!(v.velocity(), Vec2::ZERO);
        assert_eq!(v.advance(FRAME), None);
        assert_eq!(
            v.advance(FRAME).map(|f| f.kind),
            Some(TransitionKind::Timing)
        );
    }

    #[test]
    fn respringing_keeps_velocity() {
        let mut v = AnimatedXY::new(Vec2::new(100.0, 0.0));
        v.spring_to(Vec2::ZERO, SpringConfig::default());
        v.advance(FRAME);
        let vel = v.velocity();
        assert!(vel.x < 0.0);
        v.spring_to(Vec2::new(10.0, 0.0), SpringConfig::default());
        assert_eq!(v.velocity(), vel);
    }
}
