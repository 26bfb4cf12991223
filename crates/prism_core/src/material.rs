//! Surface material attributes shared by every geometry variant.

use prism_math::Color;

use crate::geometry::GeometryError;

/// Optical properties of a surface.
///
/// A material with a non-black `emission_color` turns its geometry into a
/// light source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse color, also used to tint reflected and refracted light
    pub surface_color: Color,

    /// Emitted light (black for ordinary surfaces)
    pub emission_color: Color,

    /// Share of light transmitted through the surface (0-1)
    pub transparency: f64,

    /// Share of light mirrored by the surface (0-1)
    pub reflectivity: f64,

    /// Refractive index of the interior (1.0 = air)
    pub index_of_refraction: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            surface_color: Color::new(0.5, 0.5, 0.5), // Grey default
            emission_color: Color::ZERO,
            transparency: 0.0,
            reflectivity: 0.0,
            index_of_refraction: 1.0,
        }
    }
}

impl Material {
    /// Create a non-emissive material.
    pub fn new(
        surface_color: Color,
        transparency: f64,
        reflectivity: f64,
        index_of_refraction: f64,
    ) -> Self {
        Self {
            surface_color,
            emission_color: Color::ZERO,
            transparency,
            reflectivity,
            index_of_refraction,
        }
    }

    /// Opaque, non-reflective material with the given color.
    pub fn diffuse(surface_color: Color) -> Self {
        Self::new(surface_color, 0.0, 0.0, 1.0)
    }

    /// Material of a light source: black surface, no reflection or
    /// transmission, refractive index 1.
    pub fn light(emission_color: Color) -> Self {
        Self {
            emission_color,
            ..Self::diffuse(Color::ZERO)
        }
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emission_color.length() > 0.0
    }

    /// True when secondary reflection/refraction rays should be spawned.
    pub fn is_specular(&self) -> bool {
        self.transparency > 0.0 || self.reflectivity > 0.0
    }

    /// Check that the scalar attributes are in range.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(0.0..=1.0).contains(&self.transparency) {
            return Err(GeometryError::InvalidMaterial(format!(
                "transparency {} is outside [0, 1]",
                self.transparency
            )));
        }
        if !(0.0..=1.0).contains(&self.reflectivity) {
            return Err(GeometryError::InvalidMaterial(format!(
                "reflectivity {} is outside [0, 1]",
                self.reflectivity
            )));
        }
        if !(self.index_of_refraction > 0.0) {
            return Err(GeometryError::InvalidMaterial(format!(
                "index of refraction {} must be positive",
                self.index_of_refraction
            )));
        }
        Ok(())
    }
}
