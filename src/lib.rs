//! # Marga: Room Domains and Visibility-Graph Path Planning
//!
//! Turns a floor-plan image into a triangulated navigable region and plans
//! collision-checked paths through it for a round robot.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::{Coord2D, Room, RoomConfig, SearchAlgorithm};
//!
//! let config = RoomConfig::with_clearance(5).with_algorithm(SearchAlgorithm::AStar);
//! let mut room = Room::from_image_file("office.png", config)?;
//! room.set_start(Coord2D::new(12, 40));
//! room.set_end(Coord2D::new(310, 95));
//!
//! let path = room.generate_path();
//! let trajectory = room.smooth(&path);
//! println!("{} waypoints, {} samples, {} collisions",
//!     path.len(), trajectory.points.len(), trajectory.collisions.len());
//! # Ok::<(), marga::RoomError>(())
//! ```
//!
//! ## Pixel Classes
//!
//! | Color (RGB)     | Class   |
//! |-----------------|---------|
//! | 0, 0, 0         | Wall    |
//! | 255, 255, 255   | Outside |
//! | 128, 128, 128   | Door    |
//! | anything else   | Inside  |
//!
//! Colors are configurable through [`RasterPalette`](raster::RasterPalette).
//!
//! ## Pipeline
//!
//! ```text
//!   RasterImage
//!       │ classify()
//!       ▼
//!   ClassGrid ──erode(clearance)──► navigable grid
//!       │                               │ trace_boundary()
//!       │ trace_doors()                 ▼
//!       ▼                          border loops
//!   door spans                          │ RoomDomain::build()
//!       │ midpoints                     ▼
//!       └──────────► WaypointGraph ◄── RoomDomain (CDT + parity)
//!                         │ VisibilityFilter
//!                         ▼
//!                    NeighboursMap
//!                         │ find_path() (Dijkstra / A*)
//!                         ▼
//!                    GeneratedPath
//!                         │ PathSmoother (Catmull-Rom + collision check)
//!                         ▼
//!                     Trajectory
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Integer and real coordinates, polygons, segment intersection
//! - [`raster`]: Pixel classification and clearance erosion
//! - [`boundary`]: Border loop and door span tracing
//! - [`domain`]: Constrained triangulation of the navigable region
//! - [`graph`]: Waypoint triangulation, visibility filter, neighbours map
//! - [`pathfinding`]: Shortest path search and trajectory smoothing
//! - [`room`]: The engine tying all stages together
//! - [`io`]: Image loading, project files, SVG export
//! - [`config`]: YAML configuration

pub mod boundary;
pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod graph;
pub mod io;
pub mod pathfinding;
pub mod raster;
pub mod room;
pub mod stats;

pub use config::MargaConfig;
pub use core::{Coord2D, PathPoint};
pub use error::{Result, RoomError};
pub use io::RoomProject;
pub use pathfinding::{GeneratedPath, SearchAlgorithm, Trajectory};
pub use raster::RasterImage;
pub use room::{Room, RoomConfig};
pub use stats::PlanningStats;
