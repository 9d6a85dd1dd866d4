use criterion::{Criterion, criterion_group, criterion_main};
use gitetch::plan::{build_plan, first_sunday};
use gitetch_image::Pixel;
use std::collections::BTreeSet;
use std::hint::black_box;

/// Every coordinate of the largest image the grid allows
fn full_grid() -> Vec<Pixel> {
    (0..51)
        .flat_map(|x| (0..7).map(move |y| Pixel::new(x, y)))
        .collect()
}

fn plan_benchmarks(c: &mut Criterion) {
    let pixels = full_grid();
    let anchor = first_sunday(2024);

    // Pretend every other week already has a committed Sunday
    let existing: BTreeSet<_> = (0..51)
        .step_by(2)
        .filter_map(|x| gitetch::plan::target_date(anchor, Pixel::new(x, 0)))
        .collect();

    let mut group = c.benchmark_group("plan");

    group.bench_function("first_sunday", |b| {
        b.iter(|| first_sunday(black_box(2024)))
    });

    group.bench_function("build_plan_full_grid", |b| {
        b.iter(|| build_plan(&pixels, anchor, 2024, &existing, false))
    });

    group.bench_function("build_plan_full_grid_force", |b| {
        b.iter(|| build_plan(&pixels, anchor, 2024, &existing, true))
    });

    group.finish();
}

criterion_group!(benches, plan_benchmarks);
criterion_main!(benches);
