//! Scene representation.
//!
//! A `Scene` is a flat, ordered list of geometry plus the viewport and
//! recursion settings. It is assembled once through `SceneBuilder` and is
//! read-only afterwards.

use prism_math::{Color, Vec3};
use thiserror::Error;

use crate::geometry::{Geometry, GeometryError};
use crate::material::Material;
use crate::plane::Plane;
use crate::sphere::Sphere;

/// Errors raised when a scene cannot be assembled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Scene settings were never provided")]
    MissingSettings,

    #[error("Invalid scene settings: {0}")]
    InvalidSettings(String),
}

/// Viewport, camera and recursion settings.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSettings {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Maximum number of reflection/refraction bounces
    pub max_ray_depth: u32,

    /// Horizontal field of view in degrees
    pub field_of_view: f64,

    /// Color returned by rays that hit nothing
    pub background_color: Color,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_ray_depth: 5,
            field_of_view: 75.0,
            background_color: Color::ZERO,
        }
    }
}

impl SceneSettings {
    /// Check that the settings describe a renderable viewport.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidSettings(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(SceneError::InvalidSettings(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.field_of_view
            )));
        }
        Ok(())
    }
}

/// A complete, immutable scene.
#[derive(Clone, Debug)]
pub struct Scene {
    settings: SceneSettings,
    objects: Vec<Geometry>,
}

impl Scene {
    /// Start building a scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// All geometry in insertion order.
    pub fn objects(&self) -> &[Geometry] {
        &self.objects
    }

    /// Geometry with an emissive material, paired with its index in `objects()`.
    pub fn lights(&self) -> impl Iterator<Item = (usize, &Geometry)> + '_ {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.is_light())
    }

    pub fn width(&self) -> u32 {
        self.settings.width
    }

    pub fn height(&self) -> u32 {
        self.settings.height
    }

    pub fn max_ray_depth(&self) -> u32 {
        self.settings.max_ray_depth
    }

    pub fn field_of_view(&self) -> f64 {
        self.settings.field_of_view
    }

    pub fn background_color(&self) -> Color {
        self.settings.background_color
    }

    /// Get object count.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights().count()
    }

    /// Return a copy of this scene with a different recursion limit.
    pub fn with_max_ray_depth(mut self, max_ray_depth: u32) -> Self {
        self.settings.max_ray_depth = max_ray_depth;
        self
    }
}

/// Accumulates settings and geometry, then produces a `Scene`.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    settings: Option<SceneSettings>,
    objects: Vec<Geometry>,
}

impl SceneBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scene settings, replacing any previous ones.
    pub fn settings(&mut self, settings: SceneSettings) -> &mut Self {
        self.settings = Some(settings);
        self
    }

    /// Check whether settings have been provided yet.
    pub fn has_settings(&self) -> bool {
        self.settings.is_some()
    }

    /// Append a geometry instance.
    pub fn add(&mut self, geometry: Geometry) -> &mut Self {
        self.objects.push(geometry);
        self
    }

    /// Append a spherical light source.
    pub fn add_light(
        &mut self,
        center: Vec3,
        radius: f64,
        emission_color: Color,
    ) -> Result<&mut Self, GeometryError> {
        let sphere = Sphere::new(center, radius)?;
        Ok(self.add(Geometry::new(sphere, Material::light(emission_color))))
    }

    /// Append a sphere with the given material.
    pub fn add_sphere(
        &mut self,
        center: Vec3,
        radius: f64,
        material: Material,
    ) -> Result<&mut Self, GeometryError> {
        material.validate()?;
        let sphere = Sphere::new(center, radius)?;
        Ok(self.add(Geometry::new(sphere, material)))
    }

    /// Append a rectangular plane with the given material.
    pub fn add_plane(
        &mut self,
        plane: Plane,
        material: Material,
    ) -> Result<&mut Self, GeometryError> {
        material.validate()?;
        Ok(self.add(Geometry::new(plane, material)))
    }

    /// Validate and assemble the scene.
    pub fn build(self) -> Result<Scene, SceneError> {
        let settings = self.settings.ok_or(SceneError::MissingSettings)?;
        settings.validate()?;

        let scene = Scene {
            settings,
            objects: self.objects,
        };

        if scene.light_count() == 0 {
            log::warn!("Scene has no light sources; diffuse surfaces will render black");
        }

        Ok(scene)
    }
}
