// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual style derived from an animated position.

use core::f64::consts::PI;

use kurbo::{Affine, Point, Vec2};

/// Translation plus rotation applied to a card.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CardStyle {
    /// Layout translation (left, top).
    pub translation: Vec2,
    /// Rotation in degrees, clockwise in a y-down space.
    pub rotation_degrees: f64,
}

impl CardStyle {
    /// A style that only translates.
    pub fn translated(translation: Vec2) -> Self {
        Self {
            translation,
            rotation_degrees: 0.0,
        }
    }

    /// Rotation in radians.
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_degrees * (PI / 180.0)
    }

    /// Affine that rotates about `center` (in the card's untransformed space), then translates.
    pub fn transform_about(&self, center: Point) -> Affine {
        Affine::translate(self.translation) * Affine::rotate_about(self.rotation_radians(), center)
    }

    /// Same style shifted by `delta`.
    pub fn offset_by(self, delta: Vec2) -> Self {
        Self {
            translation: self.translation + delta,
            ..self
        }
    }
}
