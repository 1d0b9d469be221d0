use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_hands::deck::Deck;
use poker_hands::hand::Hand;

fn bench_construct(c: &mut Criterion) {
    let mut g = c.benchmark_group("hand_parse");
    for (name, text) in
        [("high_card", "KD QH 8C 9H 5S"), ("wheel", "AD 3S 5H 2D 4S"), ("royal", "TS JS QS KS AS")]
    {
        g.bench_with_input(BenchmarkId::new(name, text), text, |b, input| {
            b.iter(|| Hand::parse(black_box(input)))
        });
    }
    g.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut deck = Deck::standard();
    deck.shuffle_seeded(42);
    let hands: Vec<Hand> = std::iter::from_fn(|| deck.deal_hand()).collect();
    c.bench_function("sort_dealt_hands", |b| {
        b.iter(|| {
            let mut xs = hands.clone();
            xs.sort();
            black_box(xs)
        })
    });
}

criterion_group!(benches, bench_construct, bench_compare);
criterion_main!(benches);
