use boggle_solver::{load_dictionary, read_word_list, Board, Solver};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const BOARDS: [(&str, &str); 3] = [
    ("4x4", "cats/ored/qlin/esta"),
    ("5x5", "rates/inlet/dsoar/teqin/carts"),
    ("6x6", "satire/dotens/lacers/trines/qbites/gander"),
];

/// `BOGGLE_DICT` points at a full word list; the embedded sample is only a
/// fallback and understates the trie's size.
fn bench_words() -> Vec<String> {
    match std::env::var("BOGGLE_DICT") {
        Ok(path) => read_word_list(&path).expect("readable BOGGLE_DICT word list"),
        Err(_) => load_dictionary(),
    }
}

fn bench_solve(c: &mut Criterion) {
    let solver = Solver::with_words(bench_words());
    let mut group = c.benchmark_group("solve");
    for (name, text) in BOARDS {
        let board = Board::parse(text).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| solver.solve(black_box(&board), 3).unwrap())
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let solver = Solver::new();
    let board = Board::parse(BOARDS[2].1).unwrap();
    c.bench_function("validate 6x6", |b| {
        b.iter(|| solver.validate(black_box("tiresnet"), &board).unwrap())
    });
}

criterion_group!(benches, bench_solve, bench_validate);
criterion_main!(benches);
