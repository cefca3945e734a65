// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck basics.
//!
//! Three profiles: drag the top one past the threshold to the right, let one spring back,
//! then swipe the rest away and print every frame's placements.
//!
//! Run:
//! - `cargo run -p understory_demos --example deck_basics`

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use kurbo::Point;
use understory_deck::config::DeckConfig;
use understory_deck::deck::Deck;
use understory_deck::render::{CardRenderer, Frame};
use understory_deck::types::{DeckItem, SwipeDirection};
use understory_gesture::types::{PointerEvent, PointerId};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug)]
struct Profile {
    id: u32,
    name: &'static str,
}

impl DeckItem for Profile {
    type Id = u32;
    fn id(&self) -> u32 {
        self.id
    }
}

struct Text;

impl CardRenderer<Profile> for Text {
    type View = String;
    fn render_card(&mut self, item: &Profile) -> String {
        format!("[{}]", item.name)
    }
    fn render_no_more_cards(&mut self) -> String {
        "No more cards".to_string()
    }
}

fn print_frame(label: &str, frame: &Frame<u32, String>) {
    println!("== {label} ==");
    match frame {
        Frame::NoMoreCards(view) => println!("  {view}"),
        Frame::Cards(cards) => {
            for c in cards {
                let s = c.placement.style;
                println!(
                    "  depth={} key={} {:>10} at ({:>7.1}, {:>6.1}) rot={:>6.1}° flags={:?}",
                    c.placement.depth,
                    c.placement.key,
                    c.view,
                    s.translation.x,
                    s.translation.y,
                    s.rotation_degrees,
                    c.placement.flags,
                );
            }
        }
    }
}

fn settle(deck: &mut Deck<Profile>) {
    for _ in 0..600 {
        if let Some(s) = deck.advance(FRAME) {
            println!("  -> swiped {:?} (index {})", s.direction, s.index);
        }
        if !deck.is_animating() {
            return;
        }
    }
}

fn main() {
    let data: Arc<[Profile]> = Arc::from(vec![
        Profile { id: 1, name: "Ada" },
        Profile { id: 2, name: "Grace" },
        Profile { id: 3, name: "Edsger" },
    ]);

    let liked = Rc::new(RefCell::new(Vec::new()));
    let passed = Rc::new(RefCell::new(Vec::new()));
    let (l, p) = (Rc::clone(&liked), Rc::clone(&passed));
    let mut deck = Deck::<Profile>::new(data, DeckConfig::new(390.0).unwrap())
        .unwrap()
        .on_swipe_right(move |item: &Profile| l.borrow_mut().push(item.name))
        .on_swipe_left(move |item: &Profile| p.borrow_mut().push(item.name));

    print_frame("initial", &deck.render(&mut Text));

    let finger = PointerId(0);
    let start = Point::new(120.0, 400.0);
    deck.handle_pointer(PointerEvent::down(finger, start));
    for step in 1..=5 {
        let at = start + kurbo::Vec2::new(30.0 * f64::from(step), 4.0 * f64::from(step));
        deck.handle_pointer(PointerEvent::moved(finger, at));
    }
    print_frame("dragging right", &deck.render(&mut Text));
    deck.handle_pointer(PointerEvent::up(finger, Point::new(270.0, 420.0)));
    println!("released: {:?}", deck.phase());
    settle(&mut deck);

    // Not far enough: springs back.
    deck.handle_pointer(PointerEvent::down(finger, start));
    deck.handle_pointer(PointerEvent::moved(finger, start + kurbo::Vec2::new(-60.0, 10.0)));
    deck.handle_pointer(PointerEvent::up(finger, start + kurbo::Vec2::new(-60.0, 10.0)));
    println!("released short: {:?}", deck.phase());
    settle(&mut deck);
    assert_eq!(deck.index(), 1);

    deck.swipe(SwipeDirection::Left);
    settle(&mut deck);
    print_frame("one left", &deck.render(&mut Text));
    deck.swipe(SwipeDirection::Right);
    settle(&mut deck);
    print_frame("done", &deck.render(&mut Text));

    println!("liked:  {:?}", liked.borrow());
    println!("passed: {:?}", passed.borrow());
    assert_eq!(*liked.borrow(), ["Ada", "Edsger"]);
    assert_eq!(*passed.borrow(), ["Grace"]);
}
