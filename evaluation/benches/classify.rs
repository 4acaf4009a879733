use cozy_chess::Color;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evaluation::{classify, normalize, review, MateMapping, Perspective, RawEvaluation, Thresholds};

const PLIES: usize = 200;

fn scripted_game() -> Vec<(Color, i32)> {
    (0..PLIES)
        .map(|i| {
            let side = if i % 2 == 0 { Color::White } else { Color::Black };
            let swing = ((i * 37) % 500) as i32 - 250;
            (side, swing)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let thresholds = Thresholds::default();
    let mapping = MateMapping::default();
    let plies = scripted_game();

    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(100), black_box(-150), Color::White, &thresholds))
    });

    c.bench_function("normalize", |b| {
        let raw = RawEvaluation::mate(Perspective::SideToMove(Color::Black), 4);
        b.iter(|| normalize(black_box(&raw), &mapping))
    });

    c.bench_function("review", |b| {
        b.iter(|| review(Some(15), black_box(&plies), &thresholds))
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
