// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracker basics.
//!
//! Feed raw pointer events and print the pan events they produce. A second finger is ignored
//! while the first one is down, and a disabled tracker starts no pans.
//!
//! Run:
//! - `cargo run -p understory_demos --example gesture_basics`

use kurbo::Point;
use understory_gesture::tracker::GestureTracker;
use understory_gesture::types::{PointerEvent, PointerId};

fn main() {
    let mut tracker = GestureTracker::new();
    let (a, b) = (PointerId(1), PointerId(2));
    let events = [
        PointerEvent::down(a, Point::new(10.0, 10.0)),
        PointerEvent::moved(a, Point::new(25.0, 12.0)),
        PointerEvent::down(b, Point::new(200.0, 200.0)),
        PointerEvent::moved(b, Point::new(210.0, 200.0)),
        PointerEvent::moved(a, Point::new(60.0, 18.0)),
        PointerEvent::up(a, Point::new(70.0, 20.0)),
        PointerEvent::moved(a, Point::new(90.0, 20.0)),
    ];

    println!("== Pointer -> pan ==");
    let mut ended = 0;
    for e in events {
        match tracker.handle(e) {
            Some(pan) => {
                let end = if pan.is_terminal() { "  (pan over)" } else { "" };
                println!("  {:?} {:?} -> {:?}{end}", e.pointer, e.kind, pan);
                ended += usize::from(pan.is_terminal());
            }
            None => println!("  {:?} {:?} -> (ignored)", e.pointer, e.kind),
        }
    }
    assert!(!tracker.is_active());
    assert_eq!(ended, 1);

    // A disabled tracker refuses new pans, like a deck whose card is flying off screen.
    println!("== Disabled ==");
    tracker.set_enabled(false);
    println!("  enabled={}", tracker.is_enabled());
    let refused = tracker.handle(PointerEvent::down(a, Point::new(0.0, 0.0)));
    println!("  down -> {refused:?}");
    assert!(refused.is_none());
    tracker.set_enabled(true);
    assert!(tracker.is_enabled());
    assert!(tracker.handle(PointerEvent::down(a, Point::new(0.0, 0.0))).is_some());
}
