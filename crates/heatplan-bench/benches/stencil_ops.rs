//! Criterion micro-benchmarks for the reference stepper.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use heatplan_bench::reference_profile;
use heatplan_grid::GridBuffers;
use heatplan_stencil::ExplicitStencil;

/// Benchmark: one explicit step over the reference grid.
fn bench_step_reference(c: &mut Criterion) {
    let scenario = reference_profile();
    let plan = scenario.plan().unwrap();
    let stencil = ExplicitStencil::for_plan(&plan, &scenario.source).unwrap();
    let mut buffers = GridBuffers::sample(&scenario.source, &plan);

    c.bench_function("step_reference", |b| {
        b.iter(|| {
            stencil.step(&mut buffers).unwrap();
            black_box(buffers.u1());
        });
    });
}

/// Benchmark: full run (plan, sample, all steps) of the reference profile.
fn bench_full_run_reference(c: &mut Criterion) {
    let scenario = reference_profile();

    c.bench_function("full_run_reference", |b| {
        b.iter(|| {
            let setup = scenario.run_setup().unwrap();
            let mut buffers = setup.buffers;
            ExplicitStencil::for_plan(&setup.plan, &scenario.source)
                .unwrap()
                .run(&mut buffers, setup.plan.iterations)
                .unwrap();
            black_box(buffers)
        });
    });
}

criterion_group!(benches, bench_step_reference, bench_full_run_reference);
criterion_main!(benches);
