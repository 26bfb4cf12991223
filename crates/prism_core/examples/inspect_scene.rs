//! Example: Load and inspect a scene description.
//!
//! Run with: cargo run --example inspect_scene -- scenes/showcase.json

use std::env;

use prism_core::{load_scene, Shape};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-json>");
        println!("\nExamples:");
        println!("  cargo run --example inspect_scene -- scenes/showcase.json");
        println!("  cargo run --example inspect_scene -- scenes/single_sphere.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene description: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let settings = scene.settings();
            println!("\n=== Scene ===");
            println!("Viewport: {}x{}", settings.width, settings.height);
            println!("Field of view: {:.1} deg", settings.field_of_view);
            println!("Max ray depth: {}", settings.max_ray_depth);
            println!(
                "Background: ({:.2}, {:.2}, {:.2})",
                settings.background_color.x, settings.background_color.y, settings.background_color.z
            );

            println!("\n--- Objects ---");
            for (i, object) in scene.objects().iter().enumerate() {
                let m = &object.material;
                match &object.shape {
                    Shape::Sphere(s) => println!(
                        "  [{}] {} at ({:.2}, {:.2}, {:.2}) r={:.2}",
                        i,
                        if object.is_light() { "Light" } else { "Sphere" },
                        s.center().x,
                        s.center().y,
                        s.center().z,
                        s.radius()
                    ),
                    Shape::Plane(p) => println!(
                        "  [{}] Plane at ({:.2}, {:.2}, {:.2}) {:.2}x{:.2}",
                        i,
                        p.center().x,
                        p.center().y,
                        p.center().z,
                        p.width(),
                        p.height()
                    ),
                }
                println!(
                    "       transparency {:.2}, reflectivity {:.2}, ior {:.2}",
                    m.transparency, m.reflectivity, m.index_of_refraction
                );
            }

            println!("\nLights: {}", scene.light_count());
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
        }
    }
}
