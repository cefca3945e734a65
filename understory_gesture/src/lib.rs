// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: deterministic, `no_std` pan tracking for UI.
//!
//! ## Overview
//!
//! This crate turns a stream of decoded pointer events into pan transitions: began → moved → released (or cancelled).
//! It does not decode platform input and it does not perform hit testing.
//! Instead, feed it [`PointerEvent`](crate::types::PointerEvent) values for a view the host already decided was hit,
//! and it reports the cumulative displacement from the initial contact.
//!
//! ## Inputs
//!
//! A [`PointerEvent`](crate::types::PointerEvent) carries a [`PointerId`](crate::types::PointerId),
//! a [`PointerKind`](crate::types::PointerKind) and a position.
//!
//! ## Outputs
//!
//! A [`PanEvent`](crate::types::PanEvent) for each event that affects the tracked pan.
//! Every `Moved`, `Released` and `Cancelled` carries a [`PanSample`](crate::types::PanSample)
//! whose translation is measured from the position of the initial `Down`, not from the previous move.
//!
//! ## Layering
//!
//! The tracker only measures. Deciding what a release means (a swipe, a tap, a snap back) is left to the caller;
//! `understory_deck` is one such caller.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod tracker;
pub mod types;
