use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poiswarm::prelude::*;

fn recalculate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("swarm: recalculate");
    for n in [10, 25, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("Vector2d", n), &n, |b, n_particles| {
            let mut swarm =
                Swarm::new(Vector2d::from([800.0, 600.0]), Vector2d::from([1.0, 1.0]))
                    .with_seed(0)
                    .with_point_of_interest(Vector2d::from([400.0, 300.0]));
            for _ in 0..*n_particles {
                swarm.add_particle().unwrap();
            }
            swarm.prepare().unwrap();
            b.iter(|| swarm.recalculate().unwrap());
        });
        group.bench_with_input(BenchmarkId::new("Vector3", n), &n, |b, n_particles| {
            let mut swarm = Swarm::new(
                Vector3::<Float>::from([100.0, 100.0, 100.0]),
                Vector3::<Float>::from([1.0, 1.0, 1.0]),
            )
            .with_seed(0)
            .with_point_of_interest(Vector3::<Float>::from([50.0, 50.0, 50.0]));
            for _ in 0..*n_particles {
                swarm.add_particle().unwrap();
            }
            swarm.prepare().unwrap();
            b.iter(|| swarm.recalculate().unwrap());
        });
    }
    group.finish();
}

fn update_benchmark(c: &mut Criterion) {
    let mut swarm = Swarm::new(Vector2d::from([800.0, 600.0]), Vector2d::from([1.0, 1.0]))
        .with_seed(0)
        .with_point_of_interest(Vector2d::from([400.0, 300.0]));
    for _ in 0..100 {
        swarm.add_particle().unwrap();
    }
    swarm.prepare().unwrap();
    swarm.recalculate().unwrap();
    c.bench_function("swarm: update (100 particles)", |b| {
        b.iter(|| swarm.update(500.0))
    });
}

criterion_group!(benches, recalculate_benchmark, update_benchmark);
criterion_main!(benches);
