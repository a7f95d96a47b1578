use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_helper::{filter, load_dictionary, pick, ConstraintSet, Feedback, Word};

fn criterion_benchmark(c: &mut Criterion) {
    let words = load_dictionary();
    let guess = Word::parse("crane").unwrap();
    let target = Word::parse("toast").unwrap();

    c.bench_function("pick dictionary", |b| b.iter(|| pick(black_box(&words))));

    c.bench_function("filter round crane/toast", |b| {
        b.iter(|| {
            let feedback = Feedback::grade(black_box(&guess), black_box(&target));
            let constraints = ConstraintSet::build(&guess, &feedback);
            filter(&words, &constraints)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
