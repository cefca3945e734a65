// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped spring parameters and integration.
//!
//! ## Model
//!
//! A unit of mass `m` attached to the target by a spring of stiffness `k` with
//! viscous damping `c`:
//!
//! ```text
//! a = (-k * (x - target) - c * v) / m
//! ```
//!
//! Integration is semi-implicit Euler in fixed increments, so the result only
//! depends on total elapsed time, not on how the host splits frames (up to the
//! final partial substep). The increment is [`SUBSTEP`], halved as many times as
//! a stiff or heavily damped spring needs to stay stable, down to [`MIN_SUBSTEP`].
//! With `b = c / m`, `a = k / m` and step `h`, the step is stable while
//! `b·h < 2` and `2·b·h + a·h² < 4`; the chosen step keeps `b·h <= 1` and
//! `a·h² <= 1`.
//!
//! The spring is at rest once both the displacement from the target and the
//! velocity fall under their thresholds; at that point the value snaps to the
//! target exactly.

use core::time::Duration;

use kurbo::Vec2;

/// Largest integration step.
pub const SUBSTEP: Duration = Duration::from_millis(1);

/// Smallest integration step, [`SUBSTEP`] halved ten times.
pub const MIN_SUBSTEP: Duration = Duration::from_nanos(1_000_000 >> MAX_HALVINGS);

const MAX_HALVINGS: u32 = 10;

/// Errors reported by [`SpringConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpringError {
    /// Stiffness must be positive and finite.
    #[error("spring stiffness must be positive and finite, got {0}")]
    Stiffness(f64),
    /// Damping must be positive and finite, otherwise the spring never rests.
    #[error("spring damping must be positive and finite, got {0}")]
    Damping(f64),
    /// Mass must be positive and finite.
    #[error("spring mass must be positive and finite, got {0}")]
    Mass(f64),
    /// Rest thresholds must be positive and finite.
    #[error("spring rest thresholds must be positive and finite")]
    RestThreshold,
    /// The spring is too stiff or too heavily damped to integrate stably.
    #[error("spring (stiffness {stiffness}, damping {damping}, mass {mass}) is unstable at the smallest step")]
    Unstable {
        /// Spring constant.
        stiffness: f64,
        /// Damping coefficient.
        damping: f64,
        /// Mass.
        mass: f64,
    },
}

/// Spring parameters.
///
/// The defaults (stiffness 230.2, damping 22, mass 1) settle a card dragged a
/// few hundred pixels in a little over a second with a small overshoot.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringConfig {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m`.
    pub mass: f64,
    /// Distance from the target under which the spring may rest.
    pub rest_displacement: f64,
    /// Speed under which the spring may rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 230.2,
            damping: 22.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl SpringConfig {
    /// Check that the parameters describe a spring that comes to rest.
    pub fn validate(&self) -> Result<(), SpringError> {
        if !positive(self.stiffness) {
            return Err(SpringError::Stiffness(self.stiffness));
        }
        if !positive(self.damping) {
            return Err(SpringError::Damping(self.damping));
        }
        if !positive(self.mass) {
            return Err(SpringError::Mass(self.mass));
        }
        if !positive(self.rest_displacement) || !positive(self.rest_speed) {
            return Err(SpringError::RestThreshold);
        }
        if self.substep().is_none() {
            return Err(SpringError::Unstable {
                stiffness: self.stiffness,
                damping: self.damping,
                mass: self.mass,
            });
        }
        Ok(())
    }

    /// Integration step used for this spring, or `None` if even [`MIN_SUBSTEP`] is unstable.
    pub fn substep(&self) -> Option<Duration> {
        let b = self.damping / self.mass;
        let a = self.stiffness / self.mass;
        (0..=MAX_HALVINGS)
            .map(|n| Duration::from_nanos(1_000_000 >> n))
            .find(|h| {
                let h = h.as_secs_f64();
                b * h <= 1.0 && a * h * h <= 1.0
            })
    }
}

/// Position and velocity of one spring-driven value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct SpringState {
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
}

impl SpringState {
    /// Advance by `dt` towards `target`. Returns true once at rest (snapped).
    pub(crate) fn step(&mut self, target: Vec2, config: &SpringConfig, dt: Duration) -> bool {
        let substep = config.substep().unwrap_or(MIN_SUBSTEP);
        let mut remaining = dt;
        while !remaining.is_zero() {
            let h = remaining.min(substep);
            remaining -= h;
            let h = h.as_secs_f64();
            let accel = (-(self.position - target) * config.stiffness
                - self.velocity * config.damping)
                / config.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            if self.at_rest(target, config) {
                self.position = target;
                self.velocity = Vec2::ZERO;
                return true;
            }
        }
        false
    }

    pub(crate) fn at_rest(&self, target: Vec2, config: &SpringConfig) -> bool {
        let d = config.rest_displacement;
        let s = config.rest_speed;
        (self.position - target).hypot2() <= d * d && self.velocity.hypot2() <= s * s
    }
}
