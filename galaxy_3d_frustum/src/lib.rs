/*!
# Galaxy 3D Frustum

View frustum construction and visibility culling for the Galaxy3D engine.

A [`Frustum`](galaxy3d::camera::Frustum) is built from perspective parameters
(field of view, aspect ratio, near/far distances) and a camera pose (position,
look direction, up vector). It then answers conservative containment queries
for points, spheres and axis-aligned bounding boxes, and turns window
coordinates into world-space pick rays.

## Modules

- **camera**: `Frustum`, projection parameters, camera basis and corners
- **math**: `Plane`, `AABB`, `Ray`
- **log**: pluggable logger used for contract-violation warnings and tracing

## Example

```
use galaxy_3d_frustum::galaxy3d::camera::Frustum;
use galaxy_3d_frustum::glam::Vec3;

let mut frustum = Frustum::new();
frustum.set_camera_parameters(90.0, 1.0, 1.0, 100.0);
frustum.set_camera_orientation(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);

assert!(frustum.point_in_frustum(Vec3::new(0.0, 0.0, -10.0)));
assert!(!frustum.point_in_frustum(Vec3::new(0.0, 0.0, 10.0)));
```
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod math;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and configuration, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, LogCrateLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
        // Note: frustum_* macros are exported at the crate root
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }
}

// Re-export math library at crate root
pub use glam;
