//! Planarity testing for graph thickness search.
//!
//! The thickness search only needs a yes/no answer for each candidate
//! layer, so planarity is consumed through the single-method
//! [`PlanaritySource`] trait. Any planarity algorithm can be plugged in;
//! this crate ships one:
//!
//! - **Left-right planarity test** ([`LrPlanarity`]), testing only, no
//!   embedding, with iterative DFS phases.
//!
//! It also provides the Euler edge bound helpers ([`max_planar_edges`],
//! [`thickness_lower_bound`]) used to reject dense graphs early.

mod bound;
mod error;
mod lr;
mod traits;

pub use bound::{max_planar_edges, thickness_lower_bound};
pub use error::PlanarityError;
pub use lr::LrPlanarity;
pub use traits::PlanaritySource;
