// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack settle: slide the remaining cards up after a swipe.
//!
//! When the index advances every visible card moves one slot closer to the top. Rather than
//! jumping, the whole stack is lifted back by one step and springs to zero.

use core::time::Duration;

use kurbo::Vec2;
use understory_motion::spring::SpringConfig;
use understory_motion::value::{Animated2D, AnimatedXY};

#[derive(Clone, Debug)]
pub(crate) struct StackSettle {
    lift: AnimatedXY,
    spring: Option<SpringConfig>,
}

impl StackSettle {
    pub(crate) fn new(spring: Option<SpringConfig>) -> Self {
        Self {
            lift: AnimatedXY::new(Vec2::ZERO),
            spring,
        }
    }

    /// Current offset added to every card.
    pub(crate) fn lift(&self) -> Vec2 {
        self.lift.value()
    }

    pub(crate) fn is_settling(&self) -> bool {
        self.lift.is_animating()
    }

    /// Cards moved up by one `step`; start from where they were.
    pub(crate) fn advance_index(&mut self, step: Vec2) {
        let Some(spring) = self.spring else {
            return;
        };
        self.lift.set_value(self.lift.value() + step);
        self.lift.spring_to(Vec2::ZERO, spring);
    }

    pub(crate) fn advance(&mut self, dt: Duration) {
        self.lift.advance(dt);
    }

    pub(crate) fn clear(&mut self) {
        self.lift.set_value(Vec2::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_never_lifts() {
        let mut s = StackSettle::new(None);
        s.advance_index(Vec2::new(2.0, 10.0));
        assert_eq!(s.lift(), Vec2::ZERO);
        assert!(!s.is_settling());
    }

    #[test]
    fn lift_springs_back_to_zero() {
        let mut s = StackSettle::new(Some(SpringConfig::default()));
        s.advance_index(Vec2::new(2.0, 10.0));
        assert_eq!(s.lift(), Vec2::new(2.0, 10.0));
        assert!(s.is_settling());
        for _ in 0..300 {
            s.advance(Duration::from_millis(16));
        }
        assert!(!s.is_settling());
        assert_eq!(s.lift(), Vec2::ZERO);
    }

    #[test]
    fn successive_advances_accumulate() {
        let mut s = StackSettle::new(Some(SpringConfig::default()));
        s.advance_index(Vec2::new(2.0, 10.0));
        s.advance_index(Vec2::new(2.0, 10.0));
        assert_eq!(s.lift(), Vec2::new(4.0, 20.0));
        s.clear();
        assert_eq!(s.lift(), Vec2::ZERO);
        assert!(!s.is_settling());
    }
}
