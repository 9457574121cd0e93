//! Room engine.
//!
//! Owns every planning stage for one floor plan:
//!
//! ```text
//! image -> classify -> erode -> trace -> RoomDomain
//!                                  \-> door spans -> door waypoints
//! waypoints/start/end -> WaypointGraph -> VisibilityFilter -> NeighboursMap
//! NeighboursMap -> find_path -> PathSmoother -> Trajectory
//! ```
//!
//! The domain is rebuilt when the image or clearance changes. The
//! neighbours map is a dirty cache rebuilt on the next query after any
//! waypoint, start or end mutation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;

use crate::boundary::{Boundary, trace_boundary};
use crate::core::{Coord2D, Edge, Polygon, Triangle};
use crate::domain::RoomDomain;
use crate::error::{Result, RoomError};
use crate::graph::{
    Endpoint, NeighboursCache, NeighboursMap, VisibilityFilter, WaypointGraph, build_neighbours,
};
use crate::io::{RoomProject, load_raster};
use crate::pathfinding::{
    GeneratedPath, PathSmoother, SearchAlgorithm, SmoothingConfig, Trajectory, find_path,
};
use crate::raster::{ClassGrid, RasterImage, RasterPalette, classify, erode};
use crate::stats::{PlanningStats, elapsed_us};

/// Runtime configuration of a [`Room`]
#[derive(Clone, Debug)]
pub struct RoomConfig {
    /// Reserved image colors
    pub palette: RasterPalette,
    /// Robot diameter in pixels
    pub clearance: u32,
    /// Insert door midpoints as waypoints
    pub door_waypoints: bool,
    /// Search strategy
    pub algorithm: SearchAlgorithm,
    /// Smooth generated paths (otherwise the raw polyline is returned)
    pub smooth_paths: bool,
    /// Catmull-Rom settings
    pub smoothing: SmoothingConfig,
    /// Random draws per requested waypoint
    pub max_attempts_per_waypoint: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            palette: RasterPalette::default(),
            clearance: 5,
            door_waypoints: true,
            algorithm: SearchAlgorithm::Dijkstra,
            smooth_paths: true,
            smoothing: SmoothingConfig::default(),
            max_attempts_per_waypoint: 100,
        }
    }
}

impl RoomConfig {
    /// Create with a custom clearance
    pub fn with_clearance(clearance: u32) -> Self {
        Self {
            clearance,
            ..Default::default()
        }
    }

    /// Select the search algorithm
    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Path-planning engine for one floor plan
pub struct Room {
    config: RoomConfig,
    width: u32,
    height: u32,
    /// Classification before clearance erosion
    classes: ClassGrid,
    boundary: Boundary,
    domain: RoomDomain,
    graph: WaypointGraph,
    neighbours: NeighboursCache,
    image_ref: Option<PathBuf>,
    stats: PlanningStats,
}

impl Room {
    /// Build a room from decoded pixels.
    pub fn new(image: &RasterImage, config: RoomConfig) -> Result<Self> {
        let started = Instant::now();
        let classes = classify(image, &config.palette);
        let (boundary, domain) = build_domain(&classes, config.clearance)?;

        let mut room = Self {
            width: image.width(),
            height: image.height(),
            classes,
            boundary,
            domain,
            graph: WaypointGraph::new(),
            neighbours: NeighboursCache::default(),
            image_ref: None,
            stats: PlanningStats::new(),
            config,
        };
        room.stats.domain_build_us = elapsed_us(started);
        room.apply_door_waypoints();

        info!(
            "[Room] {}x{} room: {} borders, {} doors, domain built in {} µs",
            room.width,
            room.height,
            room.boundary.borders.len(),
            room.boundary.doors.len(),
            room.stats.domain_build_us
        );
        Ok(room)
    }

    /// Load a floor-plan image file and build a room from it
    pub fn from_image_file<P: AsRef<Path>>(path: P, config: RoomConfig) -> Result<Self> {
        let path = path.as_ref();
        let image = load_raster(path)?;
        let mut room = Self::new(&image, config)?;
        room.image_ref = Some(path.to_path_buf());
        Ok(room)
    }

    /// Open a saved project: load its image, then restore start, end and waypoints.
    pub fn open_project<P: AsRef<Path>>(path: P, config: RoomConfig) -> Result<Self> {
        let path = path.as_ref();
        let project = RoomProject::load(path)?;
        let image_path = project.resolve_image(path).ok_or(RoomError::MissingImage)?;

        let mut room = Self::from_image_file(&image_path, config)?;
        room.image_ref = project.image.clone();
        let rejected = room.apply_project(&project);
        if rejected > 0 {
            warn!(
                "[Room] {} placements from {} no longer fit the domain",
                rejected,
                path.display()
            );
        }
        Ok(room)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn stats(&self) -> &PlanningStats {
        &self.stats
    }

    /// Image this room was loaded from, if any
    pub fn image_ref(&self) -> Option<&Path> {
        self.image_ref.as_deref()
    }

    /// Pixel classification before clearance erosion
    pub fn classes(&self) -> &ClassGrid {
        &self.classes
    }

    /// Border loops on the corner lattice
    pub fn border_polygons(&self) -> &[Polygon] {
        &self.boundary.borders
    }

    /// Door spans in pixel coordinates
    pub fn door_spans(&self) -> &[Edge] {
        &self.boundary.doors
    }

    pub fn domain(&self) -> &RoomDomain {
        &self.domain
    }

    /// Whether a pixel center is navigable
    pub fn in_domain(&self, coord: Coord2D) -> bool {
        self.domain.contains_coord(coord)
    }

    /// In-domain triangles of the room triangulation
    pub fn domain_triangles(&self) -> Vec<Triangle> {
        self.domain.triangles()
    }

    /// Triangles of the waypoint graph
    pub fn waypoint_triangles(&self) -> Vec<Triangle> {
        self.graph.triangles()
    }

    pub fn graph(&self) -> &WaypointGraph {
        &self.graph
    }

    pub fn waypoints(&self) -> Vec<Coord2D> {
        self.graph.waypoints().collect()
    }

    pub fn waypoint_count(&self) -> usize {
        self.graph.waypoint_count()
    }

    pub fn start(&self) -> Option<Coord2D> {
        self.graph.start()
    }

    pub fn end(&self) -> Option<Coord2D> {
        self.graph.end()
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.config.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: SearchAlgorithm) {
        self.config.algorithm = algorithm;
    }

    pub fn clearance(&self) -> u32 {
        self.config.clearance
    }

    /// Add a waypoint. Returns false when the placement is rejected.
    pub fn insert_waypoint(&mut self, coord: Coord2D) -> bool {
        let inserted = self.graph.insert(coord, &self.domain);
        if inserted {
            self.neighbours.invalidate();
        } else {
            debug!("[Room] Waypoint {} rejected", coord);
        }
        inserted
    }

    /// Remove a waypoint. Returns false for start, end and unknown coordinates.
    pub fn remove_waypoint(&mut self, coord: Coord2D) -> bool {
        let removed = self.graph.remove(coord);
        if removed {
            self.neighbours.invalidate();
        }
        removed
    }

    /// Drop every waypoint, then put the door waypoints back
    pub fn clear_waypoints(&mut self) {
        self.graph.clear();
        self.apply_door_waypoints();
        self.neighbours.invalidate();
    }

    pub fn set_start(&mut self, coord: Coord2D) -> bool {
        self.set_endpoint(Endpoint::Start, coord)
    }

    pub fn set_end(&mut self, coord: Coord2D) -> bool {
        self.set_endpoint(Endpoint::End, coord)
    }

    fn set_endpoint(&mut self, which: Endpoint, coord: Coord2D) -> bool {
        let current = match which {
            Endpoint::Start => self.graph.start(),
            Endpoint::End => self.graph.end(),
        };
        let accepted = self.graph.set_endpoint(which, coord, &self.domain);
        if !accepted {
            debug!("[Room] {:?} at {} rejected", which, coord);
        } else if current != Some(coord) {
            self.neighbours.invalidate();
        }
        accepted
    }

    /// Insert the midpoint of every door span as a waypoint.
    ///
    /// Returns the number of door waypoints present afterwards.
    fn apply_door_waypoints(&mut self) -> usize {
        if !self.config.door_waypoints {
            return 0;
        }
        let mut present = 0;
        for door in &self.boundary.doors {
            let mid = door.start.midpoint(&door.end);
            if self.graph.is_vertex(mid) || self.graph.insert(mid, &self.domain) {
                present += 1;
            } else {
                warn!(
                    "[Room] Door waypoint {} for span {} - {} is not navigable",
                    mid, door.start, door.end
                );
            }
        }
        self.neighbours.invalidate();
        present
    }

    /// Change the robot diameter and rebuild the domain.
    ///
    /// Start, end and waypoints that are no longer navigable are dropped.
    pub fn set_clearance(&mut self, clearance: u32) -> Result<()> {
        if clearance == self.config.clearance {
            return Ok(());
        }

        let started = Instant::now();
        let (boundary, domain) = build_domain(&self.classes, clearance)?;
        self.boundary = boundary;
        self.domain = domain;
        self.config.clearance = clearance;
        self.stats.domain_build_us = elapsed_us(started);

        let old = std::mem::take(&mut self.graph);
        for (which, coord) in [(Endpoint::Start, old.start()), (Endpoint::End, old.end())] {
            let Some(coord) = coord else { continue };
            if !self.graph.set_endpoint(which, coord, &self.domain) {
                warn!("[Room] {:?} {} dropped by clearance {}", which, coord, clearance);
            }
        }
        let mut dropped = 0;
        for waypoint in old.waypoints() {
            if !self.graph.insert(waypoint, &self.domain) {
                dropped += 1;
            }
        }
        self.apply_door_waypoints();
        self.neighbours.invalidate();

        info!(
            "[Room] Clearance set to {}: {} waypoints kept, {} dropped",
            clearance,
            self.graph.waypoint_count(),
            dropped
        );
        Ok(())
    }

    /// Visible neighbours of every graph vertex, rebuilt if stale
    pub fn neighbours(&mut self) -> &NeighboursMap {
        let started = Instant::now();
        let rebuilding = self.neighbours.is_dirty();
        let (graph, domain, borders) = (&self.graph, &self.domain, &self.boundary.borders);
        let map = self.neighbours.get_or_rebuild(|| {
            let filter = VisibilityFilter::new(domain, borders);
            build_neighbours(graph, &filter)
        });
        if rebuilding {
            self.stats.neighbours_us = elapsed_us(started);
        }
        map
    }

    /// Shortest path from start to end with the configured algorithm.
    ///
    /// Empty when start or end is unset. When the end is unreachable the
    /// path does not begin at start; see [`GeneratedPath::reaches`].
    pub fn generate_path(&mut self) -> GeneratedPath {
        let (Some(start), Some(end)) = (self.graph.start(), self.graph.end()) else {
            debug!("[Room] Path requested without start and end");
            return GeneratedPath {
                points: Vec::new(),
                cost: f64::INFINITY,
                nodes_expanded: 0,
            };
        };

        let algorithm = self.config.algorithm;
        let map = self.neighbours();
        let started = Instant::now();
        let path = find_path(map, start, end, algorithm);
        self.stats.path_search_us = elapsed_us(started);
        self.stats.last_algorithm = Some(algorithm);
        self.stats.last_nodes_expanded = path.nodes_expanded;
        path
    }

    /// Smoothed trajectory of the current shortest path.
    ///
    /// Empty when no path reaches the start. Collisions are samples that
    /// left the domain while smoothing.
    pub fn trajectory(&mut self) -> Trajectory {
        let path = self.generate_path();
        self.smooth(&path)
    }

    /// Smooth an already generated path
    pub fn smooth(&mut self, path: &GeneratedPath) -> Trajectory {
        let Some(start) = self.graph.start() else {
            return Trajectory::default();
        };
        if !path.reaches(start) {
            return Trajectory::default();
        }

        let steps = if self.config.smooth_paths {
            self.config.smoothing.steps
        } else {
            1
        };
        let smoother = PathSmoother::new(&self.domain, SmoothingConfig { steps });

        let started = Instant::now();
        let points = smoother.interpolate(&path.points);
        self.stats.smoothing_us = elapsed_us(started);

        let started = Instant::now();
        let collisions = smoother.check(&points);
        self.stats.collision_check_us = elapsed_us(started);

        if !collisions.is_empty() {
            debug!(
                "[Room] Smoothed path clips walls at {} of {} samples",
                collisions.len(),
                points.len()
            );
        }
        Trajectory { points, collisions }
    }

    /// Replace all waypoints with `amount` random navigable ones.
    ///
    /// Door waypoints are re-applied afterwards. Returns how many random
    /// waypoints were placed.
    pub fn scatter_waypoints<R: Rng + ?Sized>(&mut self, amount: usize, rng: &mut R) -> usize {
        let started = Instant::now();
        self.graph.clear();
        self.neighbours.invalidate();

        let mut placed = 0;
        if self.width > 0 && self.height > 0 && !self.domain.is_empty() {
            let max_attempts = amount.saturating_mul(self.config.max_attempts_per_waypoint);
            let mut attempts = 0;
            while placed < amount && attempts < max_attempts {
                attempts += 1;
                let coord = self.random_coord(rng);
                if self.graph.insert(coord, &self.domain) {
                    placed += 1;
                }
            }
            if placed < amount {
                warn!(
                    "[Room] Placed {}/{} waypoints after {} attempts",
                    placed, amount, attempts
                );
            }
        }

        self.apply_door_waypoints();
        self.stats.scatter_us = elapsed_us(started);
        info!(
            "[Room] Scattered {} waypoints in {} µs",
            placed, self.stats.scatter_us
        );
        placed
    }

    /// Move start and end to random navigable pixels.
    ///
    /// Returns true when both were placed.
    pub fn randomize_endpoints<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.width == 0 || self.height == 0 || self.domain.is_empty() {
            return false;
        }
        let max_attempts = self.config.max_attempts_per_waypoint.max(1);
        let mut placed = [false; 2];

        for (slot, which) in [Endpoint::Start, Endpoint::End].into_iter().enumerate() {
            for _ in 0..max_attempts {
                let coord = self.random_coord(rng);
                if self.graph.set_endpoint(which, coord, &self.domain) {
                    placed[slot] = true;
                    break;
                }
            }
        }
        self.neighbours.invalidate();

        debug!(
            "[Room] Random endpoints: start={:?} end={:?}",
            self.graph.start(),
            self.graph.end()
        );
        placed[0] && placed[1]
    }

    fn random_coord<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord2D {
        Coord2D::new(
            rng.random_range(0..self.width as i32),
            rng.random_range(0..self.height as i32),
        )
    }

    /// Snapshot of the persistent state
    pub fn to_project(&self) -> RoomProject {
        RoomProject {
            image: self.image_ref.clone(),
            start: self.graph.start(),
            end: self.graph.end(),
            waypoints: self.graph.waypoints().collect(),
        }
    }

    /// Replace start, end and waypoints with those of `project`.
    ///
    /// The image reference is not reloaded. Returns the number of rejected
    /// placements.
    pub fn apply_project(&mut self, project: &RoomProject) -> usize {
        self.graph = WaypointGraph::new();
        self.neighbours.invalidate();
        let mut rejected = 0;

        for (which, coord) in [(Endpoint::Start, project.start), (Endpoint::End, project.end)] {
            let Some(coord) = coord else { continue };
            if !self.graph.set_endpoint(which, coord, &self.domain) {
                warn!("[Room] Project {:?} {} rejected", which, coord);
                rejected += 1;
            }
        }
        for &waypoint in &project.waypoints {
            if !self.graph.insert(waypoint, &self.domain) {
                debug!("[Room] Project waypoint {} rejected", waypoint);
                rejected += 1;
            }
        }
        self.apply_door_waypoints();
        rejected
    }

    /// Write the persistent state as a YAML project file
    pub fn save_project<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_project().save(path)
    }
}

impl std::fmt::Debug for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Room")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("clearance", &self.config.clearance)
            .field("domain", &self.domain)
            .field("graph", &self.graph)
            .finish()
    }
}

/// Erode, trace and triangulate
fn build_domain(classes: &ClassGrid, clearance: u32) -> Result<(Boundary, RoomDomain)> {
    let eroded = erode(classes, clearance);
    let boundary = trace_boundary(&eroded, classes);
    if boundary.is_empty() {
        warn!("[Room] No navigable region (clearance {})", clearance);
    }
    let domain = RoomDomain::build(&boundary.borders)?;
    Ok((boundary, domain))
}
