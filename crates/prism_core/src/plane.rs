//! Finite rectangular plane primitive.

use prism_math::{Ray, Vec3};

use crate::geometry::{GeometryError, Surface};

/// Rays with `direction . normal` above this are treated as parallel or
/// back-facing and never hit the plane.
pub const PARALLEL_EPSILON: f64 = 1e-6;

/// A one-sided rectangle of `width` x `height` centered on `center`.
///
/// `p1` and `p2` span the plane and are fixed at construction; the
/// rectangle's width runs along `p1` and its height along `p2`.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    center: Vec3,
    normal: Vec3,
    width: f64,
    height: f64,
    p1: Vec3,
    p2: Vec3,
}

impl Plane {
    /// Create a new plane.
    ///
    /// The normal is stored normalized. Fails on a zero normal or a
    /// non-positive extent.
    pub fn new(center: Vec3, normal: Vec3, width: f64, height: f64) -> Result<Self, GeometryError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(GeometryError::NonPositiveExtent { width, height });
        }

        let p1 = in_plane_axis(normal).ok_or(GeometryError::ZeroNormal)?.normalize();
        let normal = normal.normalize();
        let p2 = normal.cross(p1).normalize();

        Ok(Self {
            center,
            normal,
            width,
            height,
            p1,
            p2,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The plane's local (x, y) axes.
    pub fn basis(&self) -> (Vec3, Vec3) {
        (self.p1, self.p2)
    }

    /// Project a world-space point into the plane's local frame.
    ///
    /// Returns (along p1, along p2, along normal).
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        let offset = point - self.center;
        Vec3::new(
            offset.dot(self.p1),
            offset.dot(self.p2),
            offset.dot(self.normal),
        )
    }
}

/// Pick a vector perpendicular to `normal`, keyed on the first non-zero
/// component (x, then y, then z). `None` for the zero vector.
fn in_plane_axis(normal: Vec3) -> Option<Vec3> {
    if normal.x != 0.0 {
        Some(Vec3::new(normal.y / normal.x, -1.0, 0.0))
    } else if normal.y != 0.0 {
        Some(Vec3::new(-1.0, normal.x / normal.y, 0.0))
    } else if normal.z != 0.0 {
        Some(Vec3::new(-1.0, 0.0, normal.x / normal.z))
    } else {
        None
    }
}

impl Surface for Plane {
    /// One-sided test: only rays travelling against the normal (within
    /// `PARALLEL_EPSILON`) can hit. The reported distance is not checked for
    /// sign, only the rectangle bounds are.
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denom = ray.direction.dot(self.normal);
        if denom > PARALLEL_EPSILON {
            return None;
        }

        let distance = (self.center - ray.origin).dot(self.normal) / denom;
        let local = self.to_local(ray.at(distance));

        let inside = local.x.abs() < self.width / 2.0 && local.y.abs() < self.height / 2.0;
        inside.then_some(distance)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}
