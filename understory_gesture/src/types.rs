// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the gesture tracker: pointer input and pan output.
//!
//! ## Overview
//!
//! [`PointerEvent`] is what a host toolkit feeds in; [`PanEvent`] is what the
//! [`tracker`](crate::tracker) emits back. Coordinates are in whatever space the
//! host uses, as long as it is consistent for the lifetime of a gesture.

use kurbo::{Point, Vec2};

/// Identifier of a pointer (mouse, pen, or a single touch contact).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PointerId(pub u64);

/// What happened to a pointer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerKind {
    /// Contact started (button press or touch start).
    Down,
    /// Contact moved.
    Move,
    /// Contact ended normally.
    Up,
    /// The host took the contact away (system gesture, window lost focus, ...).
    Cancel,
}

/// A decoded pointer event.
///
/// Fed to [`GestureTracker::handle`](crate::tracker::GestureTracker::handle).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer this event belongs to.
    pub pointer: PointerId,
    /// Kind of event.
    pub kind: PointerKind,
    /// Position of the pointer when the event occurred.
    pub position: Point,
}

impl PointerEvent {
    /// Build a [`PointerKind::Down`] event.
    pub fn down(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            kind: PointerKind::Down,
            position,
        }
    }

    /// Build a [`PointerKind::Move`] event.
    pub fn moved(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            kind: PointerKind::Move,
            position,
        }
    }

    /// Build a [`PointerKind::Up`] event.
    pub fn up(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            kind: PointerKind::Up,
            position,
        }
    }

    /// Build a [`PointerKind::Cancel`] event.
    pub fn cancel(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            kind: PointerKind::Cancel,
            position,
        }
    }
}

/// Cumulative displacement of a pan since it began.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PanSample {
    /// `(dx, dy)` from the position of the initial `Down`.
    pub translation: Vec2,
}

impl PanSample {
    /// Horizontal displacement.
    #[inline]
    pub fn dx(&self) -> f64 {
        self.translation.x
    }

    /// Vertical displacement.
    #[inline]
    pub fn dy(&self) -> f64 {
        self.translation.y
    }
}

/// Output of the tracker for a single pointer event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PanEvent {
    /// A pan began at `origin`.
    Began {
        /// Pointer that owns the pan.
        pointer: PointerId,
        /// Position of the initial contact.
        origin: Point,
    },
    /// The tracked pointer moved.
    Moved(PanSample),
    /// The tracked pointer was lifted; tracking has ended.
    Released(PanSample),
    /// The host cancelled the tracked pointer; tracking has ended.
    Cancelled(PanSample),
}

impl PanEvent {
    /// The sample carried by this event, if any.
    pub fn sample(&self) -> Option<PanSample> {
        match *self {
            Self::Began { .. } => None,
            Self::Moved(s) | Self::Released(s) | Self::Cancelled(s) => Some(s),
        }
    }

    /// True if this event ends the pan.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Released(_) | Self::Cancelled(_))
    }
}
