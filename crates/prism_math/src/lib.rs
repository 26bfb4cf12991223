//! Prism math primitives.
//!
//! Vectors come from `glam`; Prism works in double precision throughout, so
//! `Vec3` here is `glam::DVec3`. The same type doubles as an RGB color.

// Re-export glam for convenience
pub use glam::{dvec3, DVec3};

/// 3-component vector used for points, directions and colors.
pub type Vec3 = DVec3;

mod color;
mod ray;

pub use color::{color_ratio, to_display_color, Color};
pub use ray::Ray;
