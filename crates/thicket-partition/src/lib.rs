//! Graph thickness search.
//!
//! The thickness of a graph is the minimum number of planar subgraphs its
//! edge set can be split into. This crate computes it by brute force:
//!
//! - [`Partitions`] lazily enumerates the partitions of a sequence into
//!   exactly `k` blocks, in the order of the Stirling recurrence;
//! - [`ThicknessPartitioner`] tries `k = 2, 3, ...` and returns the first
//!   partition whose blocks all pass a
//!   [`PlanaritySource`](thicket_planar::PlanaritySource).
//!
//! ```
//! use thicket_partition::ThicknessPartitioner;
//! use thicket_planar::LrPlanarity;
//!
//! let partitioner = ThicknessPartitioner::new(LrPlanarity);
//! let result = partitioner.compute([("A", "B"), ("B", "C"), ("A", "C")]).unwrap();
//! assert!(result.is_planar());
//! assert_eq!(result.thickness(), 1);
//! ```

mod cancel;
mod config;
mod error;
mod parallel;
mod partitioner;
mod partitions;
mod result;

pub use cancel::CancelToken;
pub use config::PartitionerConfig;
pub use error::ThicknessError;
pub use partitioner::ThicknessPartitioner;
pub use partitions::{Partitions, stirling2};
pub use result::ThicknessResult;
