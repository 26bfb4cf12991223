//! Sphere primitive.

use prism_math::{Ray, Vec3};

use crate::geometry::{GeometryError, Surface};

/// A sphere given by center and radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64) -> Result<Self, GeometryError> {
        if !(radius > 0.0) {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Surface for Sphere {
    /// Geometric ray/sphere test.
    ///
    /// Rays whose closest approach to the center lies behind the origin are
    /// misses, even when the origin is inside the sphere. When the near root
    /// is behind the origin the far root is reported instead.
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let to_center = self.center - ray.origin;
        let t_center = to_center.dot(ray.direction);
        if t_center < 0.0 {
            return None;
        }

        let d2 = to_center.length_squared() - t_center * t_center;
        let radius2 = self.radius * self.radius;
        if d2 > radius2 {
            return None;
        }

        let t_diff = (radius2 - d2).sqrt();
        let t0 = t_center - t_diff;
        let t1 = t_center + t_diff;

        // t_center >= 0 here, so the far root is never behind the origin
        Some(if t0 < 0.0 { t1 } else { t0 })
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }
}
