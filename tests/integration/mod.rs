//! Integration tests for marga
//!
//! Each scenario builds a `Room` from a synthetic floor plan and checks the
//! full pipeline: classification, domain, waypoint graph, search and
//! smoothing.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration -- --nocapture
//!
//! # Single scenario with planner logs
//! RUST_LOG=marga=debug cargo test --test integration door_room
//! ```

mod harness;
mod scenarios;
