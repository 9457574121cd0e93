//! SVG rendering of a planned room for manual inspection.
//!
//! Layers, bottom to top: domain triangles, border loops, door spans,
//! visibility edges, waypoints, shortest path, smoothed trajectory,
//! collision markers, start and end.

use std::path::Path;

use svg::Document;
use svg::node::element::{Circle, Group, Line, Polygon as SvgPolygon, Polyline, Rectangle};

use crate::boundary::corner_point;
use crate::core::{Coord2D, PathPoint};
use crate::error::Result;
use crate::pathfinding::{GeneratedPath, Trajectory};
use crate::room::Room;

/// Colorblind-friendly color palette (Okabe-Ito).
mod colors {
    pub const DOMAIN: &str = "#E8F4EA";
    pub const DOMAIN_EDGE: &str = "#C8DCCB";
    pub const BORDER: &str = "#000000";
    pub const DOOR: &str = "#E69F00";
    pub const VISIBILITY: &str = "#56B4E9";
    pub const WAYPOINT: &str = "#0072B2";
    pub const PATH: &str = "#009E73";
    pub const TRAJECTORY: &str = "#CC79A7";
    pub const COLLISION: &str = "#D55E00";
    pub const START: &str = "#009E73";
    pub const END: &str = "#D55E00";
}

fn points_attr<I: IntoIterator<Item = PathPoint>>(points: I) -> String {
    points
        .into_iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn marker(coord: Coord2D, radius: f64, color: &str) -> Circle {
    Circle::new()
        .set("cx", coord.x)
        .set("cy", coord.y)
        .set("r", radius)
        .set("fill", color)
}

/// Render the room, its graph and the given path to an SVG document.
///
/// Coordinates are pixel space; `scale` only sets the output size.
pub fn render_room(
    room: &mut Room,
    path: &GeneratedPath,
    trajectory: &Trajectory,
    scale: f64,
) -> Document {
    let width = f64::from(room.width());
    let height = f64::from(room.height());

    let mut doc = Document::new()
        .set("width", width * scale)
        .set("height", height * scale)
        .set("viewBox", (-0.5, -0.5, width, height));

    doc = doc.add(
        Rectangle::new()
            .set("x", -0.5)
            .set("y", -0.5)
            .set("width", width)
            .set("height", height)
            .set("fill", "white"),
    );

    // Layer 1: domain triangles
    let mut domain = Group::new().set("id", "domain");
    for tri in room.domain_triangles() {
        domain = domain.add(
            SvgPolygon::new()
                .set("points", points_attr([tri.a, tri.b, tri.c]))
                .set("fill", colors::DOMAIN)
                .set("stroke", colors::DOMAIN_EDGE)
                .set("stroke-width", 0.05),
        );
    }
    doc = doc.add(domain);

    // Layer 2: borders and doors
    let mut borders = Group::new().set("id", "borders");
    for polygon in room.border_polygons() {
        borders = borders.add(
            SvgPolygon::new()
                .set("points", points_attr(polygon.vertices().iter().map(|c| corner_point(*c))))
                .set("fill", "none")
                .set("stroke", colors::BORDER)
                .set("stroke-width", 0.15),
        );
    }
    for door in room.door_spans() {
        borders = borders.add(
            Line::new()
                .set("x1", door.start.x)
                .set("y1", door.start.y)
                .set("x2", door.end.x)
                .set("y2", door.end.y)
                .set("stroke", colors::DOOR)
                .set("stroke-width", 0.4),
        );
    }
    doc = doc.add(borders);

    // Layer 3: visibility graph
    let mut graph = Group::new().set("id", "visibility");
    for (from, targets) in room.neighbours() {
        for to in targets.iter().filter(|to| *to > from) {
            graph = graph.add(
                Line::new()
                    .set("x1", from.x)
                    .set("y1", from.y)
                    .set("x2", to.x)
                    .set("y2", to.y)
                    .set("stroke", colors::VISIBILITY)
                    .set("stroke-width", 0.1),
            );
        }
    }
    for waypoint in room.waypoints() {
        graph = graph.add(marker(waypoint, 0.35, colors::WAYPOINT));
    }
    doc = doc.add(graph);

    // Layer 4: path, trajectory, collisions
    if path.len() >= 2 {
        doc = doc.add(
            Polyline::new()
                .set("points", points_attr(path.points.iter().map(|c| c.to_point())))
                .set("fill", "none")
                .set("stroke", colors::PATH)
                .set("stroke-width", 0.3),
        );
    }
    if trajectory.points.len() >= 2 {
        doc = doc.add(
            Polyline::new()
                .set("points", points_attr(trajectory.points.iter().copied()))
                .set("fill", "none")
                .set("stroke", colors::TRAJECTORY)
                .set("stroke-width", 0.2),
        );
    }
    let mut collisions = Group::new().set("id", "collisions");
    for hit in &trajectory.collisions {
        collisions = collisions.add(
            Circle::new()
                .set("cx", hit.x)
                .set("cy", hit.y)
                .set("r", 0.25)
                .set("fill", colors::COLLISION),
        );
    }
    doc = doc.add(collisions);

    // Layer 5: endpoints
    if let Some(start) = room.start() {
        doc = doc.add(marker(start, 0.6, colors::START));
    }
    if let Some(end) = room.end() {
        doc = doc.add(marker(end, 0.6, colors::END));
    }

    doc
}

/// Render and write an SVG file
pub fn export_svg<P: AsRef<Path>>(
    room: &mut Room,
    path: &GeneratedPath,
    trajectory: &Trajectory,
    output: P,
) -> Result<()> {
    let doc = render_room(room, path, trajectory, 8.0);
    svg::save(output, &doc)?;
    Ok(())
}
