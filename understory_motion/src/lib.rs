// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_motion --heading-base-level=0

//! Understory Motion: deterministic, `no_std` animated values for UI.
//!
//! ## Overview
//!
//! This crate animates 2D offsets without owning a clock.
//! The host advances time explicitly (typically once per frame), which keeps every transition
//! reproducible in tests and lets the same code run under any display loop.
//!
//! - [`Animated2D`](crate::value::Animated2D): the capability set (immediate set, spring, timed transition).
//! - [`AnimatedXY`](crate::value::AnimatedXY): the built-in implementation.
//! - [`SpringConfig`](crate::spring::SpringConfig): damped spring parameters.
//! - [`Interpolation`](crate::interpolate::Interpolation): piecewise-linear mapping with clamping.
//! - [`PositionAnimator`](crate::position::PositionAnimator): follow-finger, spring back and forced
//!   swipe for a draggable card, plus the derived [`CardStyle`](crate::style::CardStyle).
//!
//! ## Determinism
//!
//! Springs integrate in fixed 1 ms substeps and timed transitions are linear in elapsed time,
//! so results depend on total elapsed time rather than on how frames are split.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Vec2;
//! use understory_motion::position::{MotionEvent, MotionParams, PositionAnimator};
//!
//! let mut anim = PositionAnimator::new(MotionParams::new(360.0)).unwrap();
//! anim.follow_finger(Vec2::new(40.0, 0.0));
//! anim.reset_position();
//!
//! let mut settled = false;
//! for _ in 0..240 {
//!     if anim.advance(Duration::from_millis(16)) == Some(MotionEvent::Reset) {
//!         settled = true;
//!         break;
//!     }
//! }
//! assert!(settled);
//! assert_eq!(anim.offset(), Vec2::ZERO);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod interpolate;
pub mod position;
pub mod spring;
pub mod style;
pub mod value;
