// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise-linear interpolation over fixed stops.

/// Behavior for inputs outside the first/last stop.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Extrapolate {
    /// Hold the first/last output value.
    #[default]
    Clamp,
    /// Continue the slope of the first/last segment.
    Extend,
}

/// Errors reported by [`Interpolation::new`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InterpolationError {
    /// At least two stops are needed to define a segment.
    #[error("interpolation needs at least two stops, got {0}")]
    TooFewStops(usize),
    /// Input stops must be finite and strictly increasing.
    #[error("interpolation input stops must be finite and strictly increasing (at stop {0})")]
    NotIncreasing(usize),
}

/// Maps an input range onto an output range through `N` linear segments' worth of stops.
///
/// ```
/// use understory_motion::interpolate::Interpolation;
///
/// let rot = Interpolation::new([-300.0, 0.0, 300.0], [-120.0, 0.0, 120.0]).unwrap();
/// assert_eq!(rot.sample(150.0), 60.0);
/// assert_eq!(rot.sample(900.0), 120.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interpolation<const N: usize> {
    input: [f64; N],
    output: [f64; N],
    extrapolate: Extrapolate,
}

impl<const N: usize> Interpolation<N> {
    /// Build a clamping interpolation from matching input/output stops.
    pub fn new(input: [f64; N], output: [f64; N]) -> Result<Self, InterpolationError> {
        if N < 2 {
            return Err(InterpolationError::TooFewStops(N));
        }
        for i in 0..N {
            if !input[i].is_finite() || (i > 0 && input[i] <= input[i - 1]) {
                return Err(InterpolationError::NotIncreasing(i));
            }
        }
        Ok(Self {
            input,
            output,
            extrapolate: Extrapolate::Clamp,
        })
    }

    /// Replace the extrapolation behavior.
    pub fn with_extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// Extrapolation behavior in use.
    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    /// Map `x` through the stops.
    pub fn sample(&self, x: f64) -> f64 {
        let last = N - 1;
        if self.extrapolate == Extrapolate::Clamp {
            if x <= self.input[0] {
                return self.output[0];
            }
            if x >= self.input[last] {
                return self.output[last];
            }
        }
        // Segment whose right stop is the first one >= x, bounded to the outer segments.
        let mut seg = 1;
        while seg < last && x > self.input[seg] {
            seg += 1;
        }
        let (x0, x1) = (self.input[seg - 1], self.input[seg]);
        let (y0, y1) = (self.output[seg - 1], self.output[seg]);
        y0 + (x - x0) * (y1 - y0) / (x1 - x0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation() -> Interpolation<3> {
        Interpolation::new([-600.0, 0.0, 600.0], [-120.0, 0.0, 120.0]).unwrap()
    }

    #[test]
    fn hits_every_stop_exactly() {
        let r = rotation();
        assert_eq!(r.sample(-600.0), -120.0);
        assert_eq!(r.sample(0.0), 0.0);
        assert_eq!(r.sample(600.0), 120.0);
    }

    #[test]
    fn linear_between_stops() {
        let r = rotation();
        assert_eq!(r.sample(300.0), 60.0);
        assert_eq!(r.sample(-150.0), -30.0);
    }

    #[test]
    fn clamps_outside_range() {
        let r = rotation();
        assert_eq!(r.sample(10_000.0), 120.0);
        assert_eq!(r.sample(-10_000.0), -120.0);
    }

    #[test]
    fn extend_continues_outer_slopes() {
        let r = rotation().with_extrapolate(Extrapolate::Extend);
        assert_eq!(r.sample(1200.0), 240.0);
        assert_eq!(r.sample(-1200.0), -240.0);
        assert_eq!(r.extrapolate(), Extrapolate::Extend);
    }

    #[test]
    fn uneven_segments() {
        let r = Interpolation::new([0.0, 10.0, 110.0], [0.0, 1.0, 2.0]).unwrap();
        assert_eq!(r.sample(5.0), 0.5);
        assert_eq!(r.sample(60.0), 1.5);
    }

    #[test]
    fn rejects_degenerate_stops() {
        assert_eq!(
            Interpolation::new([1.0], [1.0]),
            Err(InterpolationError::TooFewStops(1))
        );
        assert_eq!(
            Interpolation::new([0.0, 0.0, 1.0], [0.0, 1.0, 2.0]),
            Err(InterpolationError::NotIncreasing(1))
        );
        assert_eq!(
            Interpolation::new([0.0, f64::NAN], [0.0, 1.0]),
            Err(InterpolationError::NotIncreasing(1))
        );
    }
}
