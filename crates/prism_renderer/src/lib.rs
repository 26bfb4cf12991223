//! Prism Renderer - recursive ray tracing.
//!
//! A Whitted-style ray tracer: hard shadows, Lambertian diffuse shading,
//! mirror reflection and refraction blended with an approximate Fresnel
//! term, and emissive objects acting as lights.

mod camera;
mod optics;
mod renderer;
mod tracer;

pub use camera::Camera;
pub use optics::{fresnel_blend, reflect, refract, FRESNEL_MIX};
pub use renderer::{render, render_pixel, ImageBuffer};
pub use tracer::{Hit, Tracer, BIAS};

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Color, Ray, Vec3};
