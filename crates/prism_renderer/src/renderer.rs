//! Frame generation.
//!
//! Maps every pixel to a primary camera ray, traces it, and collects the
//! resulting colors into an `ImageBuffer`. Rendering is single-threaded and
//! deterministic.

use std::time::Instant;

use prism_core::Scene;
use prism_math::{to_display_color, Color};

use crate::{Camera, Tracer};

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Row-major index of pixel (x, y).
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&to_display_color(*color));
        }
        bytes
    }
}

/// Trace the primary ray through pixel (x, y).
pub fn render_pixel(tracer: &Tracer, camera: &Camera, x: u32, y: u32) -> Color {
    let ray = camera.primary_ray(x, y);
    tracer.trace(&ray, 0)
}

/// Render the entire scene to an image buffer.
pub fn render(scene: &Scene) -> ImageBuffer {
    let camera = Camera::from_scene(scene);
    let tracer = Tracer::new(scene);
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    log::info!(
        "Rendering {}x{} ({} objects, max depth {})",
        image.width,
        image.height,
        scene.object_count(),
        scene.max_ray_depth()
    );

    let start = Instant::now();
    let report_every = (image.height / 10).max(1);

    for y in 0..image.height {
        for x in 0..image.width {
            let color = render_pixel(&tracer, &camera, x, y);
            image.set(x, y, color);
        }

        if (y + 1) % report_every == 0 {
            log::debug!("Rendered {}/{} rows", y + 1, image.height);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
