//! Image files, project files and YAML configuration

use std::path::Path;

use image::{Rgb, RgbImage};
use marga::io::{export_svg, load_raster};
use marga::{Coord2D, MargaConfig, Room, RoomConfig, RoomError, RoomProject, SearchAlgorithm};

use crate::harness::init_logging;

/// 16x12 plan: outside margin, wall ring, floor, and a door in the right wall
fn write_plan(path: &Path) {
    let mut img = RgbImage::from_pixel(16, 12, Rgb([255, 255, 255]));
    for y in 1..11 {
        for x in 1..15 {
            let on_ring = x == 1 || x == 14 || y == 1 || y == 10;
            let pixel = if on_ring { [0, 0, 0] } else { [220, 210, 190] };
            img.put_pixel(x, y, Rgb(pixel));
        }
    }
    img.put_pixel(14, 5, Rgb([128, 128, 128]));
    img.save(path).unwrap();
}

#[test]
fn test_load_png_and_plan() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("plan.png");
    write_plan(&plan);

    let raster = load_raster(&plan).unwrap();
    assert_eq!((raster.width(), raster.height()), (16, 12));

    let mut room = Room::from_image_file(&plan, RoomConfig::with_clearance(1)).unwrap();
    assert!(room.in_domain(Coord2D::new(7, 5)));
    assert!(!room.in_domain(Coord2D::new(0, 0)));
    assert!(!room.in_domain(Coord2D::new(1, 5)));
    assert_eq!(room.door_spans().len(), 1);

    assert!(room.set_start(Coord2D::new(3, 3)));
    assert!(room.set_end(Coord2D::new(12, 8)));
    let path = room.generate_path();
    assert_eq!(path.points, vec![Coord2D::new(3, 3), Coord2D::new(12, 8)]);

    let svg = dir.path().join("plan.svg");
    let trajectory = room.smooth(&path);
    export_svg(&mut room, &path, &trajectory, &svg).unwrap();
    assert!(std::fs::read_to_string(&svg).unwrap().contains("<svg"));
}

#[test]
fn test_project_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    write_plan(&dir.path().join("plan.png"));
    let project_path = dir.path().join("session.yaml");

    let project = RoomProject {
        image: Some("plan.png".into()),
        start: Some(Coord2D::new(3, 3)),
        end: Some(Coord2D::new(12, 8)),
        waypoints: vec![Coord2D::new(6, 7), Coord2D::new(9, 4)],
    };
    project.save(&project_path).unwrap();

    let config = RoomConfig {
        door_waypoints: false,
        ..RoomConfig::with_clearance(1)
    };
    let room = Room::open_project(&project_path, config.clone()).unwrap();
    assert_eq!(room.start(), Some(Coord2D::new(3, 3)));
    assert_eq!(room.end(), Some(Coord2D::new(12, 8)));
    assert_eq!(room.waypoints(), vec![Coord2D::new(6, 7), Coord2D::new(9, 4)]);

    let resaved = dir.path().join("copy.yaml");
    room.save_project(&resaved).unwrap();
    assert_eq!(RoomProject::load(&resaved).unwrap(), project);

    let reopened = Room::open_project(&resaved, config).unwrap();
    assert_eq!(reopened.waypoints(), room.waypoints());
}

#[test]
fn test_project_without_image() {
    let dir = tempfile::tempdir().unwrap();
    let project_path = dir.path().join("empty.yaml");
    RoomProject::default().save(&project_path).unwrap();

    let result = Room::open_project(&project_path, RoomConfig::default());
    assert!(matches!(result, Err(RoomError::MissingImage)));
}

#[test]
fn test_missing_image_file() {
    let result = Room::from_image_file("/nonexistent/plan.png", RoomConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_yaml_config_drives_room() {
    let yaml = r#"
room:
  clearance: 3
  door_waypoints: false
planner:
  algorithm: astar
  smoothing:
    steps: 20
"#;
    let config = MargaConfig::from_yaml(yaml).unwrap();
    let room_config = config.to_room_config();
    assert_eq!(room_config.clearance, 3);
    assert_eq!(room_config.algorithm, SearchAlgorithm::AStar);

    let dir = tempfile::tempdir().unwrap();
    let plan = dir.path().join("plan.png");
    write_plan(&plan);
    let mut room = Room::from_image_file(&plan, room_config).unwrap();
    assert_eq!(room.waypoint_count(), 0);
    // Radius 1 erodes the pixels next to the wall ring
    assert!(!room.in_domain(Coord2D::new(2, 5)));
    assert!(room.in_domain(Coord2D::new(3, 5)));

    room.set_start(Coord2D::new(3, 3));
    room.set_end(Coord2D::new(12, 8));
    let trajectory = room.trajectory();
    assert_eq!(trajectory.points.len(), 21);
    assert_eq!(room.stats().last_algorithm, Some(SearchAlgorithm::AStar));
}
