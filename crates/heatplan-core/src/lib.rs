//! Core types for the heatplan grid pipeline.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types shared by every other heatplan crate: the sampled [`Point`]
//! and the axis-aligned [`Bounds`] of a point set.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod point;

pub use bounds::Bounds;
pub use point::{Point, COORD_TOLERANCE};
