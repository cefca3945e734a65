// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;
use std::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_deck::config::DeckConfig;
use understory_deck::deck::Deck;
use understory_deck::render::CardRenderer;
use understory_deck::types::{DeckItem, SwipeDirection};
use understory_gesture::types::{PointerEvent, PointerId};

const FRAME: Duration = Duration::from_millis(16);

struct Item(u64);

impl DeckItem for Item {
    type Id = u64;
    fn id(&self) -> u64 {
        self.0
    }
}

struct Ids;

impl CardRenderer<Item> for Ids {
    type View = u64;
    fn render_card(&mut self, item: &Item) -> u64 {
        item.0
    }
    fn render_no_more_cards(&mut self) -> u64 {
        u64::MAX
    }
}

fn items(n: usize) -> Arc<[Item]> {
    (0..n as u64).map(Item).collect::<Vec<_>>().into()
}

fn deck(n: usize) -> Deck<Item> {
    Deck::<Item>::new(items(n), DeckConfig::new(390.0).unwrap()).unwrap()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[3usize, 32, 256] {
        let d = deck(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("layout_n{}", n), |b| {
            b.iter(|| black_box(d.layout()))
        });
        group.bench_function(format!("render_n{}", n), |b| {
            b.iter(|| black_box(d.render(&mut Ids)))
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    let p = PointerId(1);
    // 60 moves, then a release past the threshold.
    let moves: Vec<PointerEvent> = (1..=60)
        .map(|i| PointerEvent::moved(p, Point::new(100.0 + 3.0 * i as f64, 300.0 + i as f64)))
        .collect();
    group.throughput(Throughput::Elements(moves.len() as u64));
    group.bench_function("follow_finger_and_fling", |b| {
        b.iter_batched(
            || deck(8),
            |mut d| {
                d.handle_pointer(PointerEvent::down(p, Point::new(100.0, 300.0)));
                for &e in &moves {
                    d.handle_pointer(e);
                    black_box(d.layout());
                }
                d.handle_pointer(PointerEvent::up(p, Point::new(280.0, 360.0)));
                while d.advance(FRAME).is_none() {}
                black_box(d.index());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_swipe_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_through");
    for &n in &[16usize, 128] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("programmatic_n{}", n), |b| {
            b.iter_batched(
                || deck(n),
                |mut d| {
                    let mut dir = SwipeDirection::Left;
                    while !d.is_exhausted() {
                        d.swipe(dir);
                        while d.advance(FRAME).is_none() {}
                        dir = dir.opposite();
                    }
                    black_box(d.render(&mut Ids));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_drag, bench_swipe_through);
criterion_main!(benches);
