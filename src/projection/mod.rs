//! Forward-looking ROI projections

mod roi;

pub use roi::{generate_roi_projections, RoiProjection, DEFAULT_PROJECTION_YEARS};
