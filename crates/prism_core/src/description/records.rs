//! Typed records of the JSON scene description.

use prism_math::{color_ratio, Color, Vec3};
use serde::{Deserialize, Deserializer};

/// Record `type` values understood by the loader.
pub const KNOWN_RECORD_TYPES: [&str; 4] = ["scene", "light", "sphere", "plane"];

/// An `{x, y, z}` triple.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct XyzRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<XyzRecord> for Vec3 {
    fn from(v: XyzRecord) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// An `{r, g, b}` triple with 0-255 channels.
///
/// Non-numeric channels are read as 0.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RgbRecord {
    #[serde(deserialize_with = "lenient_channel")]
    pub r: f64,
    #[serde(deserialize_with = "lenient_channel")]
    pub g: f64,
    #[serde(deserialize_with = "lenient_channel")]
    pub b: f64,
}

impl From<RgbRecord> for Color {
    fn from(c: RgbRecord) -> Self {
        Color::new(color_ratio(c.r), color_ratio(c.g), color_ratio(c.b))
    }
}

fn lenient_channel<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

/// Global render settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneRecord {
    pub width: u32,
    pub height: u32,
    pub max_ray_depth: u32,
    pub field_of_view: f64,
    pub background_color: RgbRecord,
}

/// A spherical light source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightRecord {
    pub center: XyzRecord,
    pub radius: f64,
    pub emission_color: RgbRecord,
}

/// A sphere. Emission is implicitly black.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SphereRecord {
    pub center: XyzRecord,
    pub radius: f64,
    pub color: RgbRecord,
    pub transparency: f64,
    pub reflectivity: f64,
    pub index_of_refraction: f64,
}

/// A finite plane. Transparency is 0, refractive index 1, emission black.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaneRecord {
    pub center: XyzRecord,
    pub normal: XyzRecord,
    pub width: f64,
    pub height: f64,
    pub color: RgbRecord,
    pub reflectivity: f64,
}

/// One entry of a scene description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Record {
    Scene(SceneRecord),
    Light(LightRecord),
    Sphere(SphereRecord),
    Plane(PlaneRecord),
}

impl Record {
    /// The record's `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Record::Scene(_) => "scene",
            Record::Light(_) => "light",
            Record::Sphere(_) => "sphere",
            Record::Plane(_) => "plane",
        }
    }
}
