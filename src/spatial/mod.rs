//! Spatial data structures for level generation
//!
//! This module contains spatial-related functionality including:
//! - Tile grid storage with closed-edge bounds semantics
//! - Room partitioning and the directed room adjacency graph

/// Tile grid storage and mutation
pub mod grid;
/// Room partitioning and adjacency graph construction
pub mod rooms;

pub use grid::{Cell, TileGrid};
pub use rooms::RoomGraph;
