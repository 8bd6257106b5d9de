//! Routing collaborators for thickness layers.
//!
//! Once a graph has been split into planar layers, each layer still has to
//! be laid out. This crate provides the pieces for that on a 2D grid:
//!
//! - [`OccupancyGrid`], a rectangle of free / blocked / routed cells;
//! - [`Router`], which runs an injectable routing strategy and claims the
//!   cells of every path it lays down;
//! - [`dijkstra`] and [`astar`], 4-connected unit-cost strategies;
//! - [`max_flow`], the number of edge-disjoint paths between two nodes of
//!   a [`ConnectivityMap`](thicket_core::ConnectivityMap).

mod astar;
mod dijkstra;
mod error;
mod flow;
mod grid;
mod router;

pub use astar::astar;
pub use dijkstra::dijkstra;
pub use error::GridError;
pub use flow::max_flow;
pub use grid::{Cell, OccupancyGrid, Point};
pub use router::{Routed, Router};
