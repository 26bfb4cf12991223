//! Scene geometry: the `Surface` capability and the `Geometry` variant type.

use prism_math::{Ray, Vec3};
use thiserror::Error;

use crate::material::Material;
use crate::plane::Plane;
use crate::sphere::Sphere;

/// Errors raised while constructing geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Normal to plane cannot be the zero vector")]
    ZeroNormal,

    #[error("Sphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("Plane extent must be positive, got {width} x {height}")]
    NonPositiveExtent { width: f64, height: f64 },

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),
}

/// Trait for analytic primitives that can be hit by rays.
pub trait Surface {
    /// Distance along `ray` to the intersection, or `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Outward surface normal at `point`.
    fn normal_at(&self, point: Vec3) -> Vec3;
}

/// The primitive shapes Prism can render.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Surface for Shape {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
        }
    }

    #[inline]
    fn normal_at(&self, point: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.normal_at(point),
            Shape::Plane(plane) => plane.normal_at(point),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

/// A shape together with its material.
///
/// Lights are ordinary geometry whose material is emissive.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    pub shape: Shape,
    pub material: Material,
}

impl Geometry {
    /// Create a new geometry instance.
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    /// Check if this geometry is a light source.
    pub fn is_light(&self) -> bool {
        self.material.is_emissive()
    }
}

impl Surface for Geometry {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.shape.intersect(ray)
    }

    #[inline]
    fn normal_at(&self, point: Vec3) -> Vec3 {
        self.shape.normal_at(point)
    }
}
