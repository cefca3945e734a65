// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_deck --heading-base-level=0

//! Understory Deck: a headless, swipeable card stack.
//!
//! ## Overview
//!
//! A deck shows the caller's items as a stack of cards. The top card follows the finger while
//! dragged; on release it either springs back or flies off screen to the left or right, and the
//! matching callback fires with the swiped item. Cards below it are offset by a fixed step per
//! level. Once every card has been swiped the deck shows a single "no more cards" view.
//!
//! The crate draws nothing and owns no clock. The host:
//!
//! - routes pointer events for the top card to [`Deck::handle_pointer`](crate::deck::Deck::handle_pointer),
//! - calls [`Deck::advance`](crate::deck::Deck::advance) once per frame,
//! - draws what [`Deck::layout`](crate::deck::Deck::layout) or
//!   [`Deck::render`](crate::deck::Deck::render) returns, back-to-front.
//!
//! ## Crates
//!
//! - `understory_gesture` turns pointer events into pans.
//! - `understory_motion` animates the top card's offset and derives its rotation.
//! - This crate holds the index, the callbacks and the render rule.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use std::sync::Arc;
//! use understory_deck::config::DeckConfig;
//! use understory_deck::deck::Deck;
//! use understory_deck::render::CardRenderer;
//! use understory_deck::types::{DeckItem, SwipeDirection};
//!
//! #[derive(Debug)]
//! struct Profile { id: u64, name: &'static str }
//!
//! impl DeckItem for Profile {
//!     type Id = u64;
//!     fn id(&self) -> u64 { self.id }
//! }
//!
//! struct Labels;
//! impl CardRenderer<Profile> for Labels {
//!     type View = &'static str;
//!     fn render_card(&mut self, item: &Profile) -> &'static str { item.name }
//!     fn render_no_more_cards(&mut self) -> &'static str { "that's everyone" }
//! }
//!
//! let people: Arc<[Profile]> = Arc::from(vec![
//!     Profile { id: 1, name: "Ada" },
//!     Profile { id: 2, name: "Grace" },
//! ]);
//! let mut deck = Deck::<Profile>::new(people, DeckConfig::new(390.0).unwrap())
//!     .unwrap()
//!     .on_swipe_right(|p: &Profile| println!("liked {}", p.name));
//!
//! // Back-to-front: Grace underneath, Ada on top.
//! let frame = deck.render(&mut Labels);
//! let names: Vec<_> = frame.cards().iter().map(|c| c.view).collect();
//! assert_eq!(names, ["Grace", "Ada"]);
//!
//! deck.swipe(SwipeDirection::Right);
//! while deck.advance(Duration::from_millis(16)).is_none() {}
//! assert_eq!(deck.render(&mut Labels).top().map(|c| c.view), Some("Grace"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod deck;
pub mod render;
mod stack;
pub mod types;
