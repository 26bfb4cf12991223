//! High-level scene loading.
//!
//! Turns a JSON scene description into an immutable `Scene` via
//! `SceneBuilder`.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::description::records::{Record, KNOWN_RECORD_TYPES};
use crate::geometry::GeometryError;
use crate::material::Material;
use crate::plane::Plane;
use crate::scene::{Scene, SceneBuilder, SceneError, SceneSettings};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scene description must be a JSON array of records")]
    NotAnArray,

    #[error("Malformed {kind} record at index {index}: {source}")]
    Record {
        index: usize,
        kind: String,
        source: serde_json::Error,
    },

    #[error("Invalid geometry in record at index {index}: {source}")]
    Geometry { index: usize, source: GeometryError },

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene description file and return a `Scene`.
///
/// # Example
///
/// ```ignore
/// use prism_core::description::load_scene;
///
/// let scene = load_scene("scene.json")?;
/// println!("{}x{}", scene.width(), scene.height());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene description {}", path.display());

    let content = std::fs::read_to_string(path)?;
    load_scene_from_str(&content)
}

/// Load a scene from a JSON string.
pub fn load_scene_from_str(content: &str) -> LoadResult<Scene> {
    let records = parse_records(content)?;
    let scene = build_scene(records)?;

    log::info!(
        "Loaded scene: {}x{}, {} objects ({} lights), max depth {}",
        scene.width(),
        scene.height(),
        scene.object_count(),
        scene.light_count(),
        scene.max_ray_depth()
    );

    Ok(scene)
}

/// Parse the record list, skipping records of unknown type.
///
/// Returns each kept record with its index in the original array.
pub fn parse_records(content: &str) -> LoadResult<Vec<(usize, Record)>> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(entries) = value else {
        return Err(LoadError::NotAnArray);
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let kind = match entry.get("type").and_then(Value::as_str) {
            Some(kind) if KNOWN_RECORD_TYPES.contains(&kind) => kind.to_string(),
            Some(kind) => {
                log::warn!("Skipping record {index}: unknown type \"{kind}\"");
                continue;
            }
            None => {
                log::warn!("Skipping record {index}: missing \"type\"");
                continue;
            }
        };

        let record = serde_json::from_value::<Record>(entry)
            .map_err(|source| LoadError::Record { index, kind, source })?;
        records.push((index, record));
    }

    Ok(records)
}

/// Assemble parsed records into a scene.
pub fn build_scene(records: Vec<(usize, Record)>) -> LoadResult<Scene> {
    let mut builder = SceneBuilder::new();

    for (index, record) in records {
        log::debug!("Record {index}: {}", record.kind());
        add_record(&mut builder, record)
            .map_err(|source| LoadError::Geometry { index, source })?;
    }

    Ok(builder.build()?)
}

fn add_record(builder: &mut SceneBuilder, record: Record) -> Result<(), GeometryError> {
    match record {
        Record::Scene(settings) => {
            if builder.has_settings() {
                log::warn!("Multiple scene records; the last one wins");
            }
            builder.settings(SceneSettings {
                width: settings.width,
                height: settings.height,
                max_ray_depth: settings.max_ray_depth,
                field_of_view: settings.field_of_view,
                background_color: settings.background_color.into(),
            });
        }
        Record::Light(light) => {
            builder.add_light(light.center.into(), light.radius, light.emission_color.into())?;
        }
        Record::Sphere(sphere) => {
            let material = Material::new(
                sphere.color.into(),
                sphere.transparency,
                sphere.reflectivity,
                sphere.index_of_refraction,
            );
            builder.add_sphere(sphere.center.into(), sphere.radius, material)?;
        }
        Record::Plane(plane) => {
            let material = Material::new(plane.color.into(), 0.0, plane.reflectivity, 1.0);
            let shape = Plane::new(
                plane.center.into(),
                plane.normal.into(),
                plane.width,
                plane.height,
            )?;
            builder.add_plane(shape, material)?;
        }
    }
    Ok(())
}
