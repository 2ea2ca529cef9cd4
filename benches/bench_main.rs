use criterion::{Criterion, black_box, criterion_group, criterion_main};

use viagraph::loading::RoadNetworkBuilder;
use viagraph::prelude::*;

/// Square grid of two-way streets, `size` x `size` intersections
fn grid_network(size: i64) -> RoadNetwork {
    let mut builder = RoadNetworkBuilder::new();
    builder
        .add_road(Road::new(1, "Grid St", false, 3))
        .unwrap();
    for row in 0..size {
        for col in 0..size {
            builder
                .add_intersection(row * size + col, col as f64, row as f64)
                .unwrap();
        }
    }
    for row in 0..size {
        for col in 0..size {
            let id = row * size + col;
            if col + 1 < size {
                builder.add_segment(1, id, id + 1, 1.0).unwrap();
            }
            if row + 1 < size {
                builder.add_segment(1, id, id + size, 1.0).unwrap();
            }
        }
    }
    builder.build()
}

fn bench_find_path(c: &mut Criterion) {
    let network = grid_network(100);
    let goal = 100 * 100 - 1;

    c.bench_function("find_path distance 100x100 grid", |b| {
        b.iter(|| {
            find_path(
                black_box(&network),
                black_box(0),
                black_box(goal),
                CostMode::Distance,
                TravelMode::Car,
            )
            .unwrap()
        });
    });

    c.bench_function("find_path time 100x100 grid", |b| {
        b.iter(|| {
            find_path(
                black_box(&network),
                black_box(0),
                black_box(goal),
                CostMode::Time,
                TravelMode::Car,
            )
            .unwrap()
        });
    });
}

fn bench_articulation(c: &mut Criterion) {
    let network = grid_network(100);

    c.bench_function("articulation points 100x100 grid", |b| {
        b.iter(|| find_articulation_points(black_box(&network)));
    });
}

criterion_group!(benches, bench_find_path, bench_articulation);
criterion_main!(benches);
