//! Scene description support.
//!
//! A scene description is a JSON array of typed records:
//!
//! - `scene`: viewport size, recursion depth, field of view, background
//! - `light`: spherical light source with an emission color
//! - `sphere`: sphere with color, transparency, reflectivity and IOR
//! - `plane`: finite rectangle with color and reflectivity
//!
//! Colors are given as 0-255 `{r, g, b}` triples. Records with an unknown
//! `type` are logged and skipped.
//!
//! # Example
//!
//! ```ignore
//! use prism_core::description::load_scene;
//!
//! let scene = load_scene("scenes/showcase.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

mod loader;
mod records;

pub use loader::*;
pub use records::*;
