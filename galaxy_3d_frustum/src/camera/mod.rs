//! Camera module: projection configuration, camera basis and view frustum.
//!
//! The frustum is a passive tool: the caller owns it, sets the projection
//! and pose, and queries it during culling.

mod basis;
mod frustum;
mod projection;

pub use basis::{CameraBasis, FrustumCorners};
pub use frustum::{
    Frustum, Containment,
    PLANE_TOP, PLANE_BOTTOM, PLANE_LEFT, PLANE_RIGHT, PLANE_NEAR, PLANE_FAR,
};
pub use projection::{ProjectionParameters, ProjectionExtents};
