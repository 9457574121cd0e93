//! Benchmark domain construction, neighbours rebuild and path search.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use marga::{RasterImage, Room, RoomConfig, SearchAlgorithm};

const FLOOR: [u8; 3] = [200, 200, 200];
const WALL: [u8; 3] = [0, 0, 0];

/// Square room with a grid of pillars
fn pillar_plan(size: u32) -> RasterImage {
    let mut image = RasterImage::filled(size, size, FLOOR);
    let pitch = (size / 5).max(4);
    for cx in (pitch..size - 2).step_by(pitch as usize) {
        for cy in (pitch..size - 2).step_by(pitch as usize) {
            for x in cx - 1..=cx + 1 {
                for y in cy - 1..=cy + 1 {
                    image.set_rgb(x, y, WALL);
                }
            }
        }
    }
    image
}

fn bench_domain_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain_build");

    for size in [64u32, 128, 256].iter() {
        let image = pillar_plan(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let room = Room::new(black_box(&image), RoomConfig::with_clearance(3));
                black_box(room)
            })
        });
    }

    group.finish();
}

fn bench_neighbours(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbours_rebuild");
    let image = pillar_plan(128);

    for waypoints in [50usize, 200, 500].iter() {
        let Ok(mut room) = Room::new(&image, RoomConfig::with_clearance(3)) else {
            return;
        };
        let mut rng = StdRng::seed_from_u64(42);
        room.randomize_endpoints(&mut rng);
        room.scatter_waypoints(*waypoints, &mut rng);
        let layout = room.to_project();

        group.bench_with_input(BenchmarkId::from_parameter(waypoints), waypoints, |b, _| {
            b.iter(|| {
                room.apply_project(&layout);
                black_box(room.neighbours().len())
            })
        });
    }

    group.finish();
}

fn bench_path_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_search");
    let image = pillar_plan(128);

    for algorithm in [SearchAlgorithm::Dijkstra, SearchAlgorithm::AStar] {
        let Ok(mut room) = Room::new(&image, RoomConfig::with_clearance(3)) else {
            return;
        };
        let mut rng = StdRng::seed_from_u64(7);
        room.randomize_endpoints(&mut rng);
        room.scatter_waypoints(300, &mut rng);
        room.set_algorithm(algorithm);
        room.neighbours();

        group.bench_function(BenchmarkId::from_parameter(algorithm), |b| {
            b.iter(|| black_box(room.generate_path()))
        });
    }

    group.finish();
}

fn bench_trajectory(c: &mut Criterion) {
    let image = pillar_plan(128);
    let Ok(mut room) = Room::new(&image, RoomConfig::with_clearance(3)) else {
        return;
    };
    let mut rng = StdRng::seed_from_u64(9);
    room.randomize_endpoints(&mut rng);
    room.scatter_waypoints(200, &mut rng);
    let path = room.generate_path();

    c.bench_function("smooth_and_check", |b| b.iter(|| black_box(room.smooth(&path))));
}

criterion_group!(
    benches,
    bench_domain_build,
    bench_neighbours,
    bench_path_search,
    bench_trajectory
);
criterion_main!(benches);
