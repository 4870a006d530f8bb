//! Region geometry and area accounting.
//!
//! ## Module Structure
//!
//! - [`geometry`] - Circle and polygon shapes with their area formulas
//! - [`collection`] - Ordered region sets with total area
//! - [`coverage`] - Feature-over-AOI coverage ratio

mod collection;
mod coverage;
mod geometry;

pub use collection::RegionCollection;
pub use coverage::{compute as compute_coverage, CoverageError, CoverageReport};
pub use geometry::{Geometry, ShapeKind};
