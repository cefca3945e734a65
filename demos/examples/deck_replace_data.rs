// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replacing the deck's data.
//!
//! Handing the deck the same `Arc` is a no-op. A new `Arc` (even with equal contents)
//! starts over at the first card and cancels a fling that was in flight.
//!
//! Run:
//! - `cargo run -p understory_demos --example deck_replace_data`

use std::sync::Arc;
use std::time::Duration;

use understory_deck::config::DeckConfig;
use understory_deck::deck::Deck;
use understory_deck::types::{DeckItem, SwipeDirection};

#[derive(Clone, Debug)]
struct Card(&'static str);

impl DeckItem for Card {
    type Id = &'static str;
    fn id(&self) -> &'static str {
        self.0
    }
}

fn main() {
    let first: Arc<[Card]> = Arc::from(vec![Card("a"), Card("b"), Card("c")]);
    let mut deck = Deck::<Card>::new(Arc::clone(&first), DeckConfig::new(400.0).unwrap())
        .unwrap()
        .on_swipe_right(|c: &Card| println!("  swiped right: {}", c.0));

    deck.swipe(SwipeDirection::Right);
    while deck.advance(Duration::from_millis(16)).is_none() {}
    println!("after one swipe: index={}", deck.index());

    deck.set_data(Arc::clone(&first));
    println!("same Arc:        index={}", deck.index());
    assert_eq!(deck.index(), 1);

    // Start a fling, then replace mid-flight: no callback fires for it.
    deck.swipe(SwipeDirection::Right);
    deck.advance(Duration::from_millis(16));
    println!("mid-fling:       phase={:?} offset={:?}", deck.phase(), deck.offset());
    deck.set_data(Arc::from(first.to_vec()));
    println!("new Arc:         index={} phase={:?}", deck.index(), deck.phase());
    assert_eq!(deck.index(), 0);
    for _ in 0..30 {
        assert!(deck.advance(Duration::from_millis(16)).is_none());
    }
    println!("top card is {:?}", deck.current_item());
}
