//! Spatial regions for heatplan grids.
//!
//! A [`Region`] supplies a temperature for any coordinate, either from a
//! fixed list of sample points or from a membership predicate paired with a
//! value function. Every consumer queries it through one entry point,
//! [`Region::compute_u`], without branching on which kind it holds.
//!
//! # Variants
//!
//! - [`Region::PointSet`]: ordered points; first coincident point wins
//! - [`Region::PredicateValue`]: pure predicate + value closures
//!
//! Closed-form membership tests ([`Shape`]) are available for building
//! continuous regions without hand-written closures.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod region;
pub mod shape;

pub use error::RegionError;
pub use region::{Predicate, Region, ValueFn, BACKGROUND};
pub use shape::Shape;
