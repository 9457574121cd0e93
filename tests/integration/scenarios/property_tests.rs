//! Properties that must hold for any room and waypoint layout

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use marga::graph::VisibilityFilter;
use marga::{Coord2D, PathPoint, SearchAlgorithm};

use crate::harness::{FloorPlan, init_logging, pillar_room};

#[test]
fn test_domain_constant_along_line() {
    let room = FloorPlan::open(20, 20).room();
    let domain = room.domain();

    for i in 0..=200 {
        let t = i as f64 / 200.0;
        let p = PathPoint::new(-0.2 + 19.4 * t, 3.3 + 12.0 * t);
        assert!(domain.contains(p), "{:?} left the domain", p);
    }
    assert!(!domain.contains(PathPoint::new(-0.7, 3.0)));
    assert!(!domain.contains(PathPoint::new(10.0, 19.6)));
}

#[test]
fn test_hole_is_outside_domain() {
    let room = pillar_room().room();
    assert!(room.in_domain(Coord2D::new(2, 2)));
    assert!(room.in_domain(Coord2D::new(10, 15)));
    assert!(!room.in_domain(Coord2D::new(15, 15)));
    assert!(!room.in_domain(Coord2D::new(11, 11)));
    assert!(!room.domain().contains(PathPoint::new(14.5, 14.5)));

    // Nested island inside the pillar is free again
    let mut room = FloorPlan::open(30, 30)
        .block(8, 8, 22, 22)
        .room();
    assert!(!room.in_domain(Coord2D::new(15, 15)));
    assert!(!room.insert_waypoint(Coord2D::new(15, 15)));

    let island = FloorPlan::open(30, 30)
        .block(8, 8, 22, 8 + 3)
        .block(8, 19, 22, 22)
        .block(8, 11, 11, 19)
        .block(19, 11, 22, 19);
    let room = island.room();
    assert!(!room.in_domain(Coord2D::new(9, 15)));
    assert!(room.in_domain(Coord2D::new(15, 15)));
}

#[test]
fn test_visibility_symmetric() {
    let mut room = pillar_room().room();
    let mut rng = StdRng::seed_from_u64(11);
    room.scatter_waypoints(30, &mut rng);

    let vertices: Vec<Coord2D> = room.graph().vertices().into_iter().collect();
    let filter = VisibilityFilter::new(room.domain(), room.border_polygons());
    let mut blocked = 0;
    for (i, &u) in vertices.iter().enumerate() {
        for &v in &vertices[i + 1..] {
            let forward = filter.is_visible(u, v);
            assert_eq!(forward, filter.is_visible(v, u), "{} <-> {}", u, v);
            if !forward {
                blocked += 1;
            }
        }
    }
    assert!(blocked > 0, "pillar should block some pairs");
}

#[test]
fn test_dijkstra_and_astar_agree_on_cost() {
    init_logging();
    for seed in 0..5 {
        let mut room = pillar_room().room();
        let mut rng = StdRng::seed_from_u64(seed);
        room.scatter_waypoints(40, &mut rng);
        assert!(room.randomize_endpoints(&mut rng));

        room.set_algorithm(SearchAlgorithm::Dijkstra);
        let dijkstra = room.generate_path();
        room.set_algorithm(SearchAlgorithm::AStar);
        let astar = room.generate_path();

        let start = room.start().unwrap();
        assert_eq!(dijkstra.reaches(start), astar.reaches(start));
        if dijkstra.reaches(start) {
            assert_relative_eq!(dijkstra.cost, astar.cost, epsilon = 1e-6);
            assert_relative_eq!(dijkstra.length(), astar.length(), epsilon = 1e-6);
        }
    }
}

#[test]
fn test_waypoint_round_trip() {
    let mut room = FloorPlan::open(25, 25).room();
    assert!(room.set_start(Coord2D::new(0, 0)));
    assert!(room.set_end(Coord2D::new(24, 24)));

    let mut rng = StdRng::seed_from_u64(3);
    let mut inserted = Vec::new();
    while inserted.len() < 50 {
        let coord = Coord2D::new(rng.random_range(0..25), rng.random_range(0..25));
        if room.insert_waypoint(coord) {
            inserted.push(coord);
        }
    }
    assert_eq!(room.waypoint_count(), 50);
    assert_eq!(room.graph().num_vertices(), 52);

    for coord in &inserted {
        assert!(room.remove_waypoint(*coord));
    }
    assert_eq!(room.waypoint_count(), 0);
    assert_eq!(room.graph().num_vertices(), 2);
    assert!(room.waypoint_triangles().is_empty());
    assert!(!room.remove_waypoint(inserted[0]));
}

#[test]
fn test_smoothing_keeps_endpoints() {
    for seed in 0..3 {
        let mut room = pillar_room().room();
        let mut rng = StdRng::seed_from_u64(100 + seed);
        room.scatter_waypoints(25, &mut rng);
        assert!(room.randomize_endpoints(&mut rng));

        let path = room.generate_path();
        let start = room.start().unwrap();
        if !path.reaches(start) {
            continue;
        }
        let trajectory = room.smooth(&path);

        let (Some(first), Some(last)) = (path.points.first(), path.points.last()) else {
            unreachable!()
        };
        let (left, right) = if first.x > last.x { (last, first) } else { (first, last) };
        let head = trajectory.points[0];
        let tail = trajectory.points[trajectory.points.len() - 1];
        assert_relative_eq!(head.x, f64::from(left.x), epsilon = 1e-9);
        assert_relative_eq!(head.y, f64::from(left.y), epsilon = 1e-9);
        assert_relative_eq!(tail.x, f64::from(right.x), epsilon = 1e-9);
        assert_relative_eq!(tail.y, f64::from(right.y), epsilon = 1e-9);
    }
}
