use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fenprep::codec::{board_to_one_hot, encode_notation, one_hot_to_board, parse_notation};

const STARTING: &str = "rnbqkbnr-pppppppp-8-8-8-8-PPPPPPPP-RNBQKBNR";

fn bench_parse_notation(c: &mut Criterion) {
    c.bench_function("parse_notation_starting", |b| {
        b.iter(|| parse_notation(black_box(STARTING)))
    });
}

fn bench_encode_notation(c: &mut Criterion) {
    let board = parse_notation(STARTING).unwrap();
    c.bench_function("encode_notation_starting", |b| {
        b.iter(|| encode_notation(black_box(&board)))
    });
}

fn bench_board_to_one_hot(c: &mut Criterion) {
    let board = parse_notation(STARTING).unwrap();
    c.bench_function("board_to_one_hot", |b| {
        b.iter(|| board_to_one_hot(black_box(&board)))
    });
}

fn bench_one_hot_to_board(c: &mut Criterion) {
    let board = parse_notation(STARTING).unwrap();
    let vector = board_to_one_hot(&board);
    c.bench_function("one_hot_to_board", |b| {
        b.iter(|| one_hot_to_board(black_box(&vector[..])))
    });
}

criterion_group!(
    benches,
    bench_parse_notation,
    bench_encode_notation,
    bench_board_to_one_hot,
    bench_one_hot_to_board
);
criterion_main!(benches);
