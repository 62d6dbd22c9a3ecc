use criterion::{Criterion, black_box, criterion_group, criterion_main};
use text_search::{LexiconBuilder, TextIndex, search};

const TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vestibulum eros ipsum, tincidutn eu metus ut, commodo accumsan mi. Vestibulum porta, orci nec ullamcorper posuere, eros tortor pharetra est, at porttitor mi leo a velit. Aenean sollicitudin mauris elit, ultricies congue dui vulputate in. In hac habitasse platea dictumst. Nam iaculis sagittis justo a condimentum. Curabitur sed rhoncus dolor.";

fn benchmark_search(c: &mut Criterion) {
    let index = TextIndex::new(&TEXT.repeat(64));
    let text = index.text();

    c.bench_function("search", |b| {
        b.iter(|| {
            let _ = search(black_box("porttitor"), black_box(text));
        });
    });
}

fn benchmark_suggest(c: &mut Criterion) {
    let lexicon = LexiconBuilder::new().build_from_text(TEXT);

    c.bench_function("suggest_exact", |b| {
        b.iter(|| {
            let _ = lexicon.suggest_exact(black_box("po"), 10);
        });
    });
    c.bench_function("suggest_fuzzy", |b| {
        b.iter(|| {
            let _ = lexicon.suggest_fuzzy(black_box("vestbulum"), 10, 2);
        });
    });
}

criterion_group!(benches, benchmark_search, benchmark_suggest);
criterion_main!(benches);
