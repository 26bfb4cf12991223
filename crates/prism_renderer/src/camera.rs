//! Pinhole camera for primary ray generation.

use prism_core::Scene;
use prism_math::{Ray, Vec3};

/// Camera at the origin looking down -Z with +Y up.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    tan_half_fov: f64,
    aspect_ratio: f64,
}

impl Camera {
    /// Create a camera for an image of the given size and field of view (degrees).
    pub fn new(image_width: u32, image_height: u32, field_of_view: f64) -> Self {
        Self {
            image_width,
            image_height,
            tan_half_fov: (0.5 * field_of_view.to_radians()).tan(),
            aspect_ratio: image_width as f64 / image_height as f64,
        }
    }

    /// Camera matching the scene's viewport settings.
    pub fn from_scene(scene: &Scene) -> Self {
        Self::new(scene.width(), scene.height(), scene.field_of_view())
    }

    /// Generate the ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let ndc_x = (x as f64 + 0.5) / self.image_width as f64;
        let ndc_y = (y as f64 + 0.5) / self.image_height as f64;

        let view_x = (2.0 * ndc_x - 1.0) * self.tan_half_fov * self.aspect_ratio;
        let view_y = (1.0 - 2.0 * ndc_y) * self.tan_half_fov;

        Ray::new(Vec3::ZERO, Vec3::new(view_x, view_y, -1.0).normalize())
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_z() {
        let camera = Camera::new(5, 5, 90.0);
        let ray = camera.primary_ray(2, 2);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_corner_rays_are_symmetric() {
        let camera = Camera::new(4, 4, 90.0);
        let top_left = camera.primary_ray(0, 0).direction;
        let bottom_right = camera.primary_ray(3, 3).direction;

        assert!(top_left.x < 0.0 && top_left.y > 0.0);
        assert!((top_left.x + bottom_right.x).abs() < 1e-12);
        assert!((top_left.y + bottom_right.y).abs() < 1e-12);
        assert!((top_left.z - bottom_right.z).abs() < 1e-12);
    }

    #[test]
    fn test_view_coordinates() {
        // fov 90 -> tan(45 deg) = 1; pixel 0 of 4 sits at view x = -0.75
        let camera = Camera::new(4, 4, 90.0);
        let d = camera.primary_ray(0, 0).direction;
        let expected = Vec3::new(-0.75, 0.75, -1.0).normalize();
        assert!((d - expected).length() < 1e-12);
    }

    #[test]
    fn test_non_square_aspect() {
        let camera = Camera::new(300, 200, 90.0);
        assert!((camera.aspect_ratio() - 1.5).abs() < 1e-12);

        let d = camera.primary_ray(0, 100).direction;
        // x = (2 * 0.5 / 300 - 1) * 1.5
        let view_x = (1.0 / 300.0 - 1.0) * 1.5;
        let expected = Vec3::new(view_x, (1.0 - 201.0 / 200.0), -1.0).normalize();
        assert!((d - expected).length() < 1e-12);
    }
}
