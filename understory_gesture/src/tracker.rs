// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan tracker implementation.
//!
//! ## Overview
//!
//! Follows exactly one pointer from `Down` to `Up` (or `Cancel`) and reports the
//! cumulative displacement from the initial contact on every move.
//!
//! ## Pointer ownership
//!
//! - The first `Down` while idle claims the pan; the tracker keeps that pointer
//!   until it is released or cancelled.
//! - Events from any other pointer are ignored while a pan is active.
//! - `Move`/`Up`/`Cancel` with no active pan are ignored.
//!
//! ## Enabling
//!
//! [`GestureTracker::set_enabled`] gates new pans only. Disabling does not end
//! a pan that is already running; call [`GestureTracker::reset`] for that.

use kurbo::{Point, Vec2};

use crate::types::{PanEvent, PanSample, PointerEvent, PointerId, PointerKind};

#[derive(Copy, Clone, Debug, PartialEq)]
struct ActivePan {
    pointer: PointerId,
    origin: Point,
    translation: Vec2,
}

/// Single-pointer pan tracker.
///
/// ## Usage
///
/// - Forward every pointer event the host routes to the tracked view to
///   [`GestureTracker::handle`].
/// - React to the returned [`PanEvent`]: follow on `Moved`, decide on
///   `Released`, undo on `Cancelled`.
///
/// ```
/// use kurbo::Point;
/// use understory_gesture::tracker::GestureTracker;
/// use understory_gesture::types::{PanEvent, PointerEvent, PointerId};
///
/// let mut t = GestureTracker::new();
/// let p = PointerId(1);
/// t.handle(PointerEvent::down(p, Point::new(10.0, 10.0)));
/// let ev = t.handle(PointerEvent::moved(p, Point::new(40.0, 5.0))).unwrap();
/// assert_eq!(ev.sample().unwrap().dx(), 30.0);
/// assert!(matches!(
///     t.handle(PointerEvent::up(p, Point::new(50.0, 5.0))),
///     Some(PanEvent::Released(_))
/// ));
/// assert!(!t.is_active());
/// ```
#[derive(Clone, Debug)]
pub struct GestureTracker {
    active: Option<ActivePan>,
    enabled: bool,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    /// Create an idle, enabled tracker.
    pub fn new() -> Self {
        Self {
            active: None,
            enabled: true,
        }
    }

    /// Allow or refuse new pans.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether new pans are accepted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True while a pointer is being tracked.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The pointer currently owning the pan, if any.
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active.map(|a| a.pointer)
    }

    /// Latest cumulative translation of the active pan.
    pub fn translation(&self) -> Option<Vec2> {
        self.active.map(|a| a.translation)
    }

    /// Drop the active pan without emitting anything.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Feed one pointer event and return the resulting pan transition, if any.
    pub fn handle(&mut self, event: PointerEvent) -> Option<PanEvent> {
        match event.kind {
            PointerKind::Down => {
                if !self.enabled || self.active.is_some() {
                    return None;
                }
                self.active = Some(ActivePan {
                    pointer: event.pointer,
                    origin: event.position,
                    translation: Vec2::ZERO,
                });
                log::trace!("pan began: pointer={:?} origin={:?}", event.pointer, event.position);
                Some(PanEvent::Began {
                    pointer: event.pointer,
                    origin: event.position,
                })
            }
            PointerKind::Move => {
                let active = self.active.as_mut()?;
                if active.pointer != event.pointer {
                    return None;
                }
                active.translation = event.position - active.origin;
                log::trace!(
                    "pan moved: pointer={:?} translation={:?}",
                    event.pointer,
                    active.translation
                );
                Some(PanEvent::Moved(PanSample {
                    translation: active.translation,
                }))
            }
            PointerKind::Up | PointerKind::Cancel => {
                let active = self.active?;
                if active.pointer != event.pointer {
                    return None;
                }
                self.active = None;
                let sample = PanSample {
                    translation: event.position - active.origin,
                };
                log::trace!(
                    "pan ended: pointer={:?} kind={:?} translation={:?}",
                    event.pointer,
                    event.kind,
                    sample.translation
                );
                Some(if event.kind == PointerKind::Up {
                    PanEvent::Released(sample)
                } else {
                    PanEvent::Cancelled(sample)
                })
            }
        }
    }
}
