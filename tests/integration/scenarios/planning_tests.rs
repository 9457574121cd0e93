//! End-to-end planning scenarios

use approx::assert_relative_eq;
use marga::{Coord2D, RoomConfig, SearchAlgorithm};

use crate::harness::{FloorPlan, door_room, init_logging};

fn c(x: i32, y: i32) -> Coord2D {
    Coord2D::new(x, y)
}

#[test]
fn test_empty_room_direct_path() {
    init_logging();
    let mut room = FloorPlan::open(10, 10).room();
    assert!(room.set_start(c(0, 0)));
    assert!(room.set_end(c(9, 9)));

    let neighbours = room.neighbours().clone();
    assert_eq!(neighbours.len(), 2);
    assert_eq!(neighbours[&c(0, 0)].iter().copied().collect::<Vec<_>>(), vec![c(9, 9)]);
    assert_eq!(neighbours[&c(9, 9)].iter().copied().collect::<Vec<_>>(), vec![c(0, 0)]);

    let path = room.generate_path();
    assert_eq!(path.points, vec![c(0, 0), c(9, 9)]);
    assert_relative_eq!(path.cost, 162.0_f64.sqrt(), epsilon = 1e-9);
}

fn door_path(algorithm: SearchAlgorithm, start: Coord2D, end: Coord2D) -> Vec<Coord2D> {
    let mut room = door_room().room();
    room.set_algorithm(algorithm);
    assert!(room.set_start(start));
    assert!(room.set_end(end));
    room.generate_path().points
}

#[test]
fn test_door_room_routes_through_door() {
    init_logging();
    let room = door_room().room();
    assert_eq!(room.door_spans().len(), 1);
    assert!(room.graph().is_vertex(c(5, 5)));
    assert_eq!(room.waypoints(), vec![c(5, 5)]);

    for algorithm in [SearchAlgorithm::Dijkstra, SearchAlgorithm::AStar] {
        assert_eq!(
            door_path(algorithm, c(1, 1), c(9, 2)),
            vec![c(1, 1), c(5, 5), c(9, 2)]
        );
        assert_eq!(
            door_path(algorithm, c(9, 2), c(1, 1)),
            vec![c(9, 2), c(5, 5), c(1, 1)]
        );
        assert_eq!(
            door_path(algorithm, c(2, 9), c(8, 10)),
            vec![c(2, 9), c(5, 5), c(8, 10)]
        );
    }
}

#[test]
fn test_wall_pixel_rejected() {
    let mut room = door_room().room();
    let before = room.waypoint_count();

    assert!(!room.insert_waypoint(c(5, 0)));
    assert!(!room.insert_waypoint(c(5, 10)));
    assert_eq!(room.waypoint_count(), before);

    assert!(!room.set_start(c(5, 2)));
    assert_eq!(room.start(), None);
}

#[test]
fn test_clear_keeps_door_waypoints() {
    let mut room = door_room().room();
    assert!(room.insert_waypoint(c(2, 2)));
    assert!(room.insert_waypoint(c(8, 8)));
    assert_eq!(room.waypoint_count(), 3);

    room.clear_waypoints();
    assert_eq!(room.waypoints(), vec![c(5, 5)]);
}

#[test]
fn test_unreachable_end() {
    init_logging();
    let mut room = FloorPlan::open(11, 11).wall_column(5).room();
    assert!(room.set_start(c(1, 1)));
    assert!(room.set_end(c(9, 2)));

    let path = room.generate_path();
    assert!(!path.reaches(c(1, 1)));
    assert_eq!(path.points.last().copied(), Some(c(9, 2)));

    let trajectory = room.trajectory();
    assert!(trajectory.points.is_empty());
    assert!(trajectory.collisions.is_empty());
}

#[test]
fn test_door_trajectory_endpoints() {
    let mut room = door_room().room();
    room.set_start(c(1, 1));
    room.set_end(c(9, 2));

    let trajectory = room.trajectory();
    assert_eq!(trajectory.points.len(), 2 * 150 + 1);
    let first = trajectory.points[0];
    let last = trajectory.points[trajectory.points.len() - 1];
    assert_relative_eq!(first.x, 1.0, epsilon = 1e-9);
    assert_relative_eq!(first.y, 1.0, epsilon = 1e-9);
    assert_relative_eq!(last.x, 9.0, epsilon = 1e-9);
    assert_relative_eq!(last.y, 2.0, epsilon = 1e-9);

    let stats = room.stats();
    assert_eq!(stats.last_algorithm, Some(SearchAlgorithm::Dijkstra));
}

#[test]
fn test_door_waypoints_can_be_disabled() {
    let config = RoomConfig {
        door_waypoints: false,
        ..RoomConfig::with_clearance(1)
    };
    let mut room = door_room().room_with(config);
    assert_eq!(room.door_spans().len(), 1);
    assert_eq!(room.waypoint_count(), 0);

    room.set_start(c(1, 1));
    room.set_end(c(9, 2));
    assert!(!room.generate_path().reaches(c(1, 1)));

    assert!(room.insert_waypoint(c(5, 5)));
    assert_eq!(room.generate_path().points, vec![c(1, 1), c(5, 5), c(9, 2)]);
}
