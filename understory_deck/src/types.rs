// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the deck: items, phases, flags and swipe results.

pub use understory_motion::position::SwipeDirection;

/// An item that can be shown as a card.
///
/// The identifier is the card's render key. It must be unique within a data set and stable
/// across renders so a host can reconcile views when the top card changes.
pub trait DeckItem {
    /// Identifier type.
    type Id: Clone + Eq + core::fmt::Debug;
    /// Returns this item's identifier.
    fn id(&self) -> Self::Id;
}

/// Observable state of a [`Deck`](crate::deck::Deck).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DeckPhase {
    /// The top card is at rest and accepts gestures.
    Idle,
    /// A pointer is dragging the top card.
    Dragging,
    /// The top card is springing back to the origin. A new drag supersedes it.
    SpringingBack,
    /// The top card is flying off screen; gestures are refused until it lands.
    Flinging(SwipeDirection),
    /// Every card has been swiped.
    Exhausted,
}

/// A completed swipe, returned by [`Deck::advance`](crate::deck::Deck::advance).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Swiped {
    /// Direction of the swipe.
    pub direction: SwipeDirection,
    /// Index of the swiped item in the data it was swiped from.
    pub index: usize,
}

bitflags::bitflags! {
    /// Per-card render flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CardFlags: u8 {
        /// The card receives pointer input (only the top card).
        const INTERACTIVE = 0b0000_0001;
        /// The card's style is changing over time and should be redrawn every frame.
        const ANIMATED    = 0b0000_0010;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_empty() {
        assert!(CardFlags::default().is_empty());
        let top = CardFlags::INTERACTIVE | CardFlags::ANIMATED;
        assert!(top.contains(CardFlags::INTERACTIVE));
    }
}
