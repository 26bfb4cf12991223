//! Prism Core - scene model and scene description loading.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`, `Plane`, `Material` and the `Surface` capability
//! - **Scene**: an immutable `Scene` assembled through `SceneBuilder`
//! - **Scene descriptions**: JSON record parsing and scene loading
//!
//! # Example
//!
//! ```ignore
//! use prism_core::description::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

pub mod description;
pub mod geometry;
pub mod material;
pub mod plane;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use description::{load_scene, load_scene_from_str, LoadError};
pub use geometry::{Geometry, GeometryError, Shape, Surface};
pub use material::Material;
pub use plane::Plane;
pub use scene::{Scene, SceneBuilder, SceneError, SceneSettings};
pub use sphere::Sphere;
