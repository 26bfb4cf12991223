//! Simple ray tracer example.
//!
//! Renders a basic scene with spheres and a floor and saves to PPM format.

use prism_core::{Material, Plane, Scene, SceneSettings};
use prism_renderer::{render, Color, ImageBuffer, Vec3};
use prism_math::to_display_color;
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Prism Ray Tracer - Simple Example");
    println!("=================================");

    // Build the scene
    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?} ({} objects)", start.elapsed(), scene.object_count());

    println!(
        "Rendering {}x{} @ depth {}...",
        scene.width(),
        scene.height(),
        scene.max_ray_depth()
    );

    // Render
    let start = std::time::Instant::now();
    let image = render(&scene);
    println!("Rendered in {:?}", start.elapsed());

    // Save as PPM
    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut builder = Scene::builder();
    builder.settings(SceneSettings {
        width: 640,
        height: 480,
        max_ray_depth: 5,
        field_of_view: 30.0,
        background_color: Color::new(0.2, 0.2, 0.2),
    });

    // Light
    builder
        .add_light(Vec3::new(0.0, 20.0, -30.0), 3.0, Color::new(3.0, 3.0, 3.0))
        .expect("valid light");

    // Floor
    builder
        .add_plane(
            Plane::new(Vec3::new(0.0, -4.0, -20.0), Vec3::Y, 40.0, 40.0).expect("valid plane"),
            Material::new(Color::new(0.8, 0.8, 0.8), 0.0, 0.0, 1.0),
        )
        .expect("valid floor");

    // Glass, mirror and diffuse spheres
    builder
        .add_sphere(
            Vec3::new(0.0, 0.0, -20.0),
            4.0,
            Material::new(Color::new(1.0, 0.32, 0.36), 0.5, 1.0, 1.1),
        )
        .expect("valid sphere");
    builder
        .add_sphere(
            Vec3::new(5.0, -1.0, -15.0),
            2.0,
            Material::new(Color::new(0.9, 0.76, 0.46), 0.0, 1.0, 1.0),
        )
        .expect("valid sphere");
    builder
        .add_sphere(
            Vec3::new(-5.5, 0.0, -15.0),
            3.0,
            Material::diffuse(Color::new(0.65, 0.77, 0.97)),
        )
        .expect("valid sphere");

    builder.build().expect("valid scene")
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = to_display_color(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}
