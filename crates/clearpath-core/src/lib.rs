//! Core types for clearance-aware grid pathfinding.
//!
//! This crate provides the geometry primitives shared across the
//! *clearpath* workspace and the caller-owned obstacle bitmap that the
//! clearance field is built from.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{ObstacleGrid, ParseError};
