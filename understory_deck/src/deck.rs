// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck controller.
//!
//! ## Overview
//!
//! [`Deck`] owns the index into the caller's data, the top card's animated offset, the gesture
//! tracker and the stack settle. The host drives it with two calls:
//!
//! - [`Deck::handle_pointer`] for every pointer event routed to the top card.
//! - [`Deck::advance`] once per frame.
//!
//! ## Release rule
//!
//! With `threshold = swipe_threshold_ratio × screen_width` and the release translation `dx`:
//! `dx > threshold` flings right, `dx < -threshold` flings left, anything else springs back.
//! A cancelled pointer springs back.
//!
//! ## Completion order
//!
//! When a fling lands, inside the same [`Deck::advance`] call: the direction's callback runs with
//! the swiped item, the offset is set to `(0, 0)`, then the index moves to the next item. The
//! next card therefore never starts from the previous card's offset.
//!
//! ## Data replacement
//!
//! [`Deck::set_data`] compares by identity ([`Arc::ptr_eq`]). A different `Arc` resets the index
//! to 0 and cancels everything in flight, so no callback can fire against the new data for a card
//! of the old one. The same `Arc` is a no-op.

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Vec2;
use understory_gesture::tracker::GestureTracker;
use understory_gesture::types::{PanEvent, PointerEvent, PointerKind};
use understory_motion::position::{MotionEvent, PositionAnimator};
use understory_motion::style::CardStyle;
use understory_motion::value::{Animated2D, AnimatedXY};

use crate::config::{ConfigError, DeckConfig};
use crate::render::{CardPlacement, CardRenderer, CardView, Frame, Layout};
use crate::stack::StackSettle;
use crate::types::{CardFlags, DeckItem, DeckPhase, SwipeDirection, Swiped};

type Callback<T> = Box<dyn FnMut(&T)>;

/// Classify a release by its horizontal translation.
///
/// Returns `None` when `|dx| <= threshold`.
///
/// ```
/// use understory_deck::deck::classify_release;
/// use understory_deck::types::SwipeDirection;
///
/// assert_eq!(classify_release(101.0, 100.0), Some(SwipeDirection::Right));
/// assert_eq!(classify_release(-101.0, 100.0), Some(SwipeDirection::Left));
/// assert_eq!(classify_release(100.0, 100.0), None);
/// ```
pub fn classify_release(dx: f64, threshold: f64) -> Option<SwipeDirection> {
    if dx > threshold {
        Some(SwipeDirection::Right)
    } else if dx < -threshold {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

/// A swipeable stack of cards over caller-owned data.
///
/// ```
/// use std::sync::Arc;
/// use core::time::Duration;
/// use kurbo::Point;
/// use understory_deck::config::DeckConfig;
/// use understory_deck::deck::Deck;
/// use understory_deck::types::DeckItem;
/// use understory_gesture::types::{PointerEvent, PointerId};
///
/// struct Card(u32);
/// impl DeckItem for Card {
///     type Id = u32;
///     fn id(&self) -> u32 { self.0 }
/// }
///
/// let data: Arc<[Card]> = Arc::from(vec![Card(1), Card(2)]);
/// let mut deck = Deck::<Card>::new(data, DeckConfig::new(400.0).unwrap()).unwrap();
///
/// let p = PointerId(0);
/// deck.handle_pointer(PointerEvent::down(p, Point::new(100.0, 300.0)));
/// deck.handle_pointer(PointerEvent::moved(p, Point::new(250.0, 310.0)));
/// deck.handle_pointer(PointerEvent::up(p, Point::new(260.0, 310.0)));
///
/// let swiped = deck.advance(Duration::from_millis(250)).unwrap();
/// assert_eq!(swiped.index, 0);
/// assert_eq!(deck.index(), 1);
/// assert_eq!(deck.current_item().map(|c| c.0), Some(2));
/// ```
///
/// The top card's offset is animated by an [`Animated2D`] engine, [`AnimatedXY`] by default. A
/// host with its own animation engine passes it to [`Deck::with_animator`].
pub struct Deck<T: DeckItem, A: Animated2D = AnimatedXY> {
    data: Arc<[T]>,
    index: usize,
    config: DeckConfig,
    tracker: GestureTracker,
    position: PositionAnimator<A>,
    stack: StackSettle,
    on_swipe_left: Callback<T>,
    on_swipe_right: Callback<T>,
}

impl<T: DeckItem, A: Animated2D> core::fmt::Debug for Deck<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Deck")
            .field("len", &self.data.len())
            .field("index", &self.index)
            .field("offset", &self.offset())
            .field("phase", &self.phase())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: DeckItem> Deck<T> {
    /// Create a deck at index 0 with no-op callbacks and the built-in animation engine.
    pub fn new(data: impl Into<Arc<[T]>>, config: DeckConfig) -> Result<Self, ConfigError> {
        Self::with_animator(data, config, AnimatedXY::new(Vec2::ZERO))
    }
}

impl<T: DeckItem, A: Animated2D> Deck<T, A> {
    /// Create a deck whose top card is animated by `animator`.
    ///
    /// The animator is snapped to the origin first.
    pub fn with_animator(
        data: impl Into<Arc<[T]>>,
        config: DeckConfig,
        animator: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut position = PositionAnimator::with_value(animator, config.motion_params())?;
        position.snap_to_origin();
        Ok(Self {
            data: data.into(),
            index: 0,
            config,
            tracker: GestureTracker::new(),
            position,
            stack: StackSettle::new(config.stack_settle),
            on_swipe_left: Box::new(|_| {}),
            on_swipe_right: Box::new(|_| {}),
        })
    }

    /// Builder form of [`set_on_swipe_left`](Self::set_on_swipe_left).
    pub fn on_swipe_left(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.set_on_swipe_left(f);
        self
    }

    /// Builder form of [`set_on_swipe_right`](Self::set_on_swipe_right).
    pub fn on_swipe_right(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.set_on_swipe_right(f);
        self
    }

    /// Called once with the item for every completed leftward swipe.
    pub fn set_on_swipe_left(&mut self, f: impl FnMut(&T) + 'static) {
        self.on_swipe_left = Box::new(f);
    }

    /// Called once with the item for every completed rightward swipe.
    pub fn set_on_swipe_right(&mut self, f: impl FnMut(&T) + 'static) {
        self.on_swipe_right = Box::new(f);
    }

    /// Configuration in use.
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// The caller's data.
    pub fn data(&self) -> &Arc<[T]> {
        &self.data
    }

    /// Index of the top card.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The item on top of the stack, if any.
    pub fn current_item(&self) -> Option<&T> {
        self.data.get(self.index)
    }

    /// Number of cards not yet swiped.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.index)
    }

    /// True once every card has been swiped.
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.data.len()
    }

    /// Current offset of the top card.
    pub fn offset(&self) -> Vec2 {
        self.position.offset()
    }

    /// Current lift of the stack while it settles after a swipe.
    pub fn stack_lift(&self) -> Vec2 {
        self.stack.lift()
    }

    /// Horizontal distance a release must exceed to count as a swipe.
    pub fn swipe_threshold(&self) -> f64 {
        self.config.swipe_threshold()
    }

    /// Style of the top card for its current offset.
    pub fn style(&self) -> CardStyle {
        self.position.style()
    }

    /// Current state of the controller.
    pub fn phase(&self) -> DeckPhase {
        if self.is_exhausted() {
            DeckPhase::Exhausted
        } else if let Some(direction) = self.position.swiping() {
            DeckPhase::Flinging(direction)
        } else if self.tracker.is_active() {
            DeckPhase::Dragging
        } else if self.position.is_animating() {
            DeckPhase::SpringingBack
        } else {
            DeckPhase::Idle
        }
    }

    /// True when something still moves: a drag, a spring back, a fling or the stack settling.
    pub fn is_animating(&self) -> bool {
        self.position.is_animating() || self.stack.is_settling()
    }

    /// Replace the data.
    ///
    /// A different `Arc` resets the index to 0 and cancels any drag, spring back, fling and stack
    /// settle. The same `Arc` changes nothing.
    pub fn set_data(&mut self, data: Arc<[T]>) {
        if Arc::ptr_eq(&self.data, &data) {
            return;
        }
        log::debug!(
            "deck data replaced: {} -> {} items, index {} -> 0",
            self.data.len(),
            data.len(),
            self.index
        );
        self.data = data;
        self.index = 0;
        self.tracker.reset();
        self.position.snap_to_origin();
        self.stack.clear();
    }

    /// Feed a pointer event for the top card. Returns true if the deck used it.
    ///
    /// New gestures are refused while the deck is exhausted or a fling is in flight.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if event.kind == PointerKind::Down {
            let accepts = !self.is_exhausted() && self.position.swiping().is_none();
            self.tracker.set_enabled(accepts);
        }
        let Some(pan) = self.tracker.handle(event) else {
            return false;
        };
        match pan {
            // A running spring back keeps going until the first move overwrites it.
            PanEvent::Began { .. } => {}
            PanEvent::Moved(sample) => self.position.follow_finger(sample.translation),
            PanEvent::Released(sample) => self.release(sample.dx()),
            PanEvent::Cancelled(_) => {
                log::debug!("pan cancelled at index {}, springing back", self.index);
                self.position.reset_position();
            }
        }
        true
    }

    fn release(&mut self, dx: f64) {
        let threshold = self.swipe_threshold();
        let decision = classify_release(dx, threshold);
        log::debug!(
            "release at index {}: dx={dx} threshold={threshold} -> {decision:?}",
            self.index
        );
        match decision {
            Some(direction) => self.position.force_swipe(direction),
            None => self.position.reset_position(),
        }
    }

    /// Fling the top card off screen without a gesture.
    ///
    /// Refused (returns false) while dragging, while a fling is already in flight, or when the
    /// deck is exhausted. Supersedes a spring back.
    pub fn swipe(&mut self, direction: SwipeDirection) -> bool {
        if self.is_exhausted() || self.tracker.is_active() || self.position.swiping().is_some() {
            return false;
        }
        log::debug!("programmatic swipe {direction:?} at index {}", self.index);
        self.position.force_swipe(direction);
        true
    }

    /// Advance time by `dt`. Returns the swipe that completed during this step, if any.
    pub fn advance(&mut self, dt: Duration) -> Option<Swiped> {
        self.stack.advance(dt);
        match self.position.advance(dt)? {
            MotionEvent::Reset => None,
            MotionEvent::Swiped(direction) => Some(self.complete_swipe(direction)),
        }
    }

    fn complete_swipe(&mut self, direction: SwipeDirection) -> Swiped {
        let index = self.index;
        match self.data.get(index) {
            Some(item) => match direction {
                SwipeDirection::Left => (self.on_swipe_left)(item),
                SwipeDirection::Right => (self.on_swipe_right)(item),
            },
            None => log::warn!("swipe completed past the end of the data (index {index})"),
        }
        self.position.snap_to_origin();
        self.index += 1;
        if !self.is_exhausted() {
            self.stack.advance_index(self.config.stack_step);
        }
        log::debug!(
            "swiped {direction:?} at index {index}; {} remaining",
            self.remaining()
        );
        Swiped { direction, index }
    }

    /// Placements for the current state, back-to-front.
    pub fn layout(&self) -> Layout<T::Id> {
        if self.is_exhausted() {
            return Layout::Exhausted;
        }
        let lift = self.stack.lift();
        let settling = self.stack.is_settling();
        let rest = &self.data[self.index..];
        let mut cards = Vec::with_capacity(rest.len());
        for (depth, item) in rest.iter().enumerate().rev() {
            let (flags, style) = if depth == 0 {
                (
                    CardFlags::INTERACTIVE | CardFlags::ANIMATED,
                    self.position.style().offset_by(lift),
                )
            } else {
                let slot = self.config.stack_step * depth as f64;
                let flags = if settling {
                    CardFlags::ANIMATED
                } else {
                    CardFlags::empty()
                };
                (flags, CardStyle::translated(slot + lift))
            };
            cards.push(CardPlacement {
                key: item.id(),
                index: self.index + depth,
                depth,
                flags,
                style,
            });
        }
        Layout::Cards(cards)
    }

    /// Render the current state with the host's views.
    pub fn render<R: CardRenderer<T>>(&self, renderer: &mut R) -> Frame<T::Id, R::View> {
        match self.layout() {
            Layout::Exhausted => Frame::NoMoreCards(renderer.render_no_more_cards()),
            Layout::Cards(placements) => Frame::Cards(
                placements
                    .into_iter()
                    .map(|placement| {
                        let view = renderer.render_card(&self.data[placement.index]);
                        CardView { placement, view }
                    })
                    .collect(),
            ),
        }
    }
}
