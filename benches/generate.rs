#[macro_use]
extern crate criterion;

use criterion::Criterion;

use barnsley::fern::DEFAULT_GROWTH_FACTOR;
use barnsley::FernRenderer;

fn bench_generate(c: &mut Criterion) {
    let fern = FernRenderer::new(64, 64, 4, DEFAULT_GROWTH_FACTOR).unwrap();
    c.bench_function("generate 64x64x4", move |b| {
        b.iter(|| {
            let mut data = vec![0.0_f64; fern.plane.len()];
            fern.generate(&mut data, &mut rand::thread_rng());
            data
        })
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
