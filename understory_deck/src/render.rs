// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render rule: from deck state to a back-to-front list of placed cards.
//!
//! ## Overview
//!
//! The deck does not draw. [`Deck::layout`](crate::deck::Deck::layout) computes where each card
//! goes, and [`Deck::render`](crate::deck::Deck::render) pairs each placement with a view built by
//! the host's [`CardRenderer`].
//!
//! ## Rule
//!
//! - Exhausted deck: only the "no more cards" view.
//! - Items before the current index: nothing.
//! - The current item: interactive, animated, styled from the drag offset.
//! - Items after it: static, offset by `stack_step × depth` where `depth = i - index`.
//! - Order is back-to-front: the deepest card first, the top card last.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use understory_motion::style::CardStyle;

use crate::types::CardFlags;

/// Builds host views for cards.
///
/// The analog of a pair of render callbacks: one for a card, one for the exhausted deck.
pub trait CardRenderer<T> {
    /// Host view type.
    type View;
    /// Build the view for one item.
    fn render_card(&mut self, item: &T) -> Self::View;
    /// Build the view shown once every card has been swiped.
    fn render_no_more_cards(&mut self) -> Self::View;
}

/// Where and how one card is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct CardPlacement<K> {
    /// The item's render key.
    pub key: K,
    /// Index of the item in the deck's data.
    pub index: usize,
    /// Distance from the top of the stack; 0 for the top card.
    pub depth: usize,
    /// Interaction and animation flags.
    pub flags: CardFlags,
    /// Translation and rotation relative to the deck's base card position.
    pub style: CardStyle,
}

impl<K> CardPlacement<K> {
    /// True for the card that receives gestures.
    pub fn is_interactive(&self) -> bool {
        self.flags.contains(CardFlags::INTERACTIVE)
    }

    /// Hit test `point` against this card, given the card's untransformed bounds.
    ///
    /// Rotation is applied about the centre of `card_bounds`, like the host would draw it.
    pub fn contains(&self, point: Point, card_bounds: Rect) -> bool {
        let tf = self.style.transform_about(card_bounds.center());
        card_bounds.contains(tf.inverse() * point)
    }
}

/// Placements for the current deck state.
#[derive(Clone, Debug, PartialEq)]
pub enum Layout<K> {
    /// Every card has been swiped.
    Exhausted,
    /// Remaining cards, back-to-front.
    Cards(Vec<CardPlacement<K>>),
}

impl<K> Layout<K> {
    /// The top (interactive) card, if any.
    pub fn top(&self) -> Option<&CardPlacement<K>> {
        match self {
            Self::Exhausted => None,
            Self::Cards(cards) => cards.last(),
        }
    }
}

/// A placed card and its host view.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView<K, V> {
    /// Placement computed by the deck.
    pub placement: CardPlacement<K>,
    /// View built by the [`CardRenderer`].
    pub view: V,
}

/// Output of [`Deck::render`](crate::deck::Deck::render).
#[derive(Clone, Debug, PartialEq)]
pub enum Frame<K, V> {
    /// Only the "no more cards" view.
    NoMoreCards(V),
    /// Remaining cards, back-to-front.
    Cards(Vec<CardView<K, V>>),
}

impl<K, V> Frame<K, V> {
    /// True when the frame is the "no more cards" view.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::NoMoreCards(_))
    }

    /// Number of card views (0 for an exhausted frame).
    pub fn len(&self) -> usize {
        match self {
            Self::NoMoreCards(_) => 0,
            Self::Cards(cards) => cards.len(),
        }
    }

    /// True if no card views were produced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The top (interactive) card, if any.
    pub fn top(&self) -> Option<&CardView<K, V>> {
        match self {
            Self::NoMoreCards(_) => None,
            Self::Cards(cards) => cards.last(),
        }
    }

    /// Card views back-to-front (empty for an exhausted frame).
    pub fn cards(&self) -> &[CardView<K, V>] {
        match self {
            Self::NoMoreCards(_) => &[],
            Self::Cards(cards) => cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Vec2;

    fn placement(style: CardStyle) -> CardPlacement<u32> {
        CardPlacement {
            key: 1,
            index: 0,
            depth: 0,
            flags: CardFlags::INTERACTIVE | CardFlags::ANIMATED,
            style,
        }
    }

    #[test]
    fn contains_follows_translation() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 150.0);
        let p = placement(CardStyle::translated(Vec2::new(200.0, 0.0)));
        assert!(!p.contains(Point::new(50.0, 50.0), bounds));
        assert!(p.contains(Point::new(250.0, 50.0), bounds));
        assert!(p.is_interactive());
    }

    #[test]
    fn contains_follows_rotation() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
        let p = placement(CardStyle {
            translation: Vec2::ZERO,
            rotation_degrees: 90.0,
        });
        // A wide, short card turned upright: its old corners are outside, the new extent inside.
        assert!(!p.contains(Point::new(5.0, 10.0), bounds));
        assert!(p.contains(Point::new(50.0, 50.0), bounds));
    }

    #[test]
    fn frame_helpers() {
        let exhausted: Frame<u32, &str> = Frame::NoMoreCards("done");
        assert!(exhausted.is_exhausted());
        assert!(exhausted.is_empty());
        assert!(exhausted.top().is_none());
        assert!(exhausted.cards().is_empty());

        let cards = Frame::Cards(vec![
            CardView {
                placement: CardPlacement {
                    depth: 1,
                    flags: CardFlags::empty(),
                    ..placement(CardStyle::default())
                },
                view: "b",
            },
            CardView {
                placement: placement(CardStyle::default()),
                view: "a",
            },
        ]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards.top().map(|c| c.view), Some("a"));
        assert!(!cards.is_exhausted());
    }

    #[test]
    fn layout_top_is_last() {
        let layout = Layout::Cards(vec![
            CardPlacement {
                key: 2,
                depth: 1,
                ..placement(CardStyle::default())
            },
            placement(CardStyle::default()),
        ]);
        assert_eq!(layout.top().map(|p| p.key), Some(1));
        assert!(Layout::<u32>::Exhausted.top().is_none());
    }
}
