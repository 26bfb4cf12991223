//! Recursive Whitted-style shading.
//!
//! `Tracer::trace` finds the nearest surface along a ray and shades it:
//! reflective or transparent surfaces spawn reflection and refraction rays
//! (blended with a Fresnel weight) until the scene's depth limit, everything
//! else is lit directly by the emissive objects with hard shadows.

use prism_core::{Geometry, Material, Scene, Surface};
use prism_math::{Color, Ray, Vec3};

use crate::optics::{fresnel_blend, reflect, refract};

/// Offset applied to secondary ray origins along the normal to avoid
/// re-intersecting the surface they leave.
pub const BIAS: f64 = 1e-4;

/// The nearest intersection along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Index of the object in `Scene::objects()`
    pub index: usize,
    pub object: &'a Geometry,
    pub distance: f64,
}

/// Shading state at a hit point.
#[derive(Debug, Clone, Copy)]
struct SurfacePoint {
    point: Vec3,
    /// Normal facing against the incoming ray
    normal: Vec3,
    /// The incoming ray started inside the object
    inside: bool,
}

/// Traces rays against an immutable scene.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Find the closest object hit by `ray`.
    ///
    /// Objects are tested in scene order; on equal distances the earlier
    /// object wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit<'a>> {
        let mut nearest: Option<Hit<'a>> = None;
        let mut t_near = f64::MAX;

        for (index, object) in self.scene.objects().iter().enumerate() {
            if let Some(distance) = object.intersect(ray) {
                if distance < t_near {
                    t_near = distance;
                    nearest = Some(Hit {
                        index,
                        object,
                        distance,
                    });
                }
            }
        }

        nearest
    }

    /// Compute the color seen along `ray`, which is `depth` bounces away from
    /// the camera.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let Some(hit) = self.closest_hit(ray) else {
            return self.scene.background_color();
        };

        let material = &hit.object.material;
        let point = ray.at(hit.distance);
        let mut normal = hit.object.normal_at(point);

        let inside = ray.direction.dot(normal) > 0.0;
        if inside {
            normal = -normal;
        }
        let surface = SurfacePoint {
            point,
            normal,
            inside,
        };

        let shaded = if material.is_specular() && depth < self.scene.max_ray_depth() {
            self.reflect_refract(material, ray.direction, &surface, depth)
        } else {
            self.direct_lighting(material, point, normal)
        };

        shaded + material.emission_color
    }

    /// Fresnel-weighted mix of the reflected and refracted colors, tinted by
    /// the surface color.
    fn reflect_refract(
        &self,
        material: &Material,
        direction: Vec3,
        surface: &SurfacePoint,
        depth: u32,
    ) -> Color {
        let SurfacePoint {
            point,
            normal,
            inside,
        } = *surface;

        let fresnel = fresnel_blend((-direction).dot(normal));

        let reflect_ray = Ray::new(point + normal * BIAS, reflect(direction, normal));
        let reflection = self.trace(&reflect_ray, depth + 1);

        let refraction = if material.transparency > 0.0 {
            let eta = if inside {
                material.index_of_refraction
            } else {
                1.0 / material.index_of_refraction
            };
            match refract(direction, normal, eta) {
                Some(refract_dir) => {
                    let refract_ray = Ray::new(point - normal * BIAS, refract_dir);
                    self.trace(&refract_ray, depth + 1)
                }
                // Total internal reflection: the transmitted share is reflected too
                None => reflection,
            }
        } else {
            Color::ZERO
        };

        (reflection * fresnel * material.reflectivity
            + refraction * (1.0 - fresnel) * material.transparency)
            * material.surface_color
    }

    /// Lambertian lighting from every emissive object, with binary shadows.
    ///
    /// A light is blocked when any other object intersects the ray from the
    /// biased hit point toward the light's center; blocker distance is not
    /// compared against the light's. There is no distance falloff.
    pub fn direct_lighting(&self, material: &Material, point: Vec3, normal: Vec3) -> Color {
        let shadow_origin = point + normal * BIAS;
        let mut color = Color::ZERO;

        for (light_index, light) in self.scene.lights() {
            // Outward light normal at `point` points away from the light
            let light_dir = -light.normal_at(point);
            let shadow_ray = Ray::new(shadow_origin, light_dir);

            let occluded = self
                .scene
                .objects()
                .iter()
                .enumerate()
                .any(|(index, object)| index != light_index && object.intersect(&shadow_ray).is_some());
            if occluded {
                continue;
            }

            color += material.surface_color
                * normal.dot(light_dir).max(0.0)
                * light.material.emission_color;
        }

        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{Plane, SceneSettings};

    fn settings(max_ray_depth: u32, background_color: Color) -> SceneSettings {
        SceneSettings {
            width: 4,
            height: 4,
            max_ray_depth,
            field_of_view: 90.0,
            background_color,
        }
    }

    fn forward() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_miss_returns_background() {
        let background = Color::new(0.2, 0.3, 0.4);
        let mut builder = Scene::builder();
        builder.settings(settings(3, background));
        builder
            .add_sphere(Vec3::new(0.0, 10.0, -5.0), 1.0, Material::default())
            .unwrap();
        let scene = builder.build().unwrap();

        let tracer = Tracer::new(&scene);
        assert!(tracer.closest_hit(&forward()).is_none());
        assert_eq!(tracer.trace(&forward(), 0), background);
    }

    #[test]
    fn test_nearest_object_wins() {
        let mut builder = Scene::builder();
        builder.settings(settings(0, Color::ZERO));
        builder
            .add_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0, Material::default())
            .unwrap();
        builder
            .add_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default())
            .unwrap();
        let scene = builder.build().unwrap();

        let hit = Tracer::new(&scene).closest_hit(&forward()).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.distance - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_object_wins_ties() {
        let mut builder = Scene::builder();
        builder.settings(settings(0, Color::ZERO));
        for color in [Color::X, Color::Y] {
            builder
                .add_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::diffuse(color))
                .unwrap();
        }
        let scene = builder.build().unwrap();

        let hit = Tracer::new(&scene).closest_hit(&forward()).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.object.material.surface_color, Color::X);
    }

    #[test]
    fn test_diffuse_sphere_is_tinted_by_surface_color() {
        let mut builder = Scene::builder();
        builder.settings(settings(1, Color::ZERO));
        builder
            .add_light(Vec3::new(0.0, 5.0, 0.0), 1.0, Color::ONE)
            .unwrap();
        builder
            .add_sphere(
                Vec3::new(0.0, 0.0, -5.0),
                1.0,
                Material::diffuse(Color::new(1.0, 0.0, 0.0)),
            )
            .unwrap();
        let scene = builder.build().unwrap();

        let color = Tracer::new(&scene).trace(&forward(), 0);

        // Hit at (0, 0, -4), normal +Z, light direction (0, 5, 4) / |(0, 5, 4)|
        let expected = 4.0 / 41.0_f64.sqrt();
        assert!((color.x - expected).abs() < 1e-9, "{color}");
        assert_eq!(color.y, 0.0);
        assert_eq!(color.z, 0.0);
    }

    #[test]
    fn test_light_adds_its_emission() {
        let emission = Color::new(0.5, 0.25, 1.0);
        let mut builder = Scene::builder();
        builder.settings(settings(1, Color::ZERO));
        builder
            .add_light(Vec3::new(0.0, 0.0, -5.0), 1.0, emission)
            .unwrap();
        let scene = builder.build().unwrap();

        // The light's own surface color is black, so only emission remains
        assert_eq!(Tracer::new(&scene).trace(&forward(), 0), emission);
    }

    fn shadow_scene(with_blocker: bool) -> Scene {
        let mut builder = Scene::builder();
        builder.settings(settings(2, Color::ZERO));
        builder
            .add_light(Vec3::new(0.0, 10.0, 0.0), 1.0, Color::ONE)
            .unwrap();
        builder
            .add_plane(
                Plane::new(Vec3::ZERO, Vec3::Y, 10.0, 10.0).unwrap(),
                Material::diffuse(Color::ONE),
            )
            .unwrap();
        if with_blocker {
            builder
                .add_sphere(
                    Vec3::new(0.0, 5.0, 0.0),
                    1.0,
                    Material::diffuse(Color::new(0.3, 0.3, 0.3)),
                )
                .unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_unblocked_light_illuminates() {
        let scene = shadow_scene(false);
        let plane = &scene.objects()[1].material;
        let color = Tracer::new(&scene).direct_lighting(plane, Vec3::ZERO, Vec3::Y);
        assert!((color - Color::ONE).length() < 1e-9, "{color}");
    }

    #[test]
    fn test_blocked_light_casts_shadow() {
        let scene = shadow_scene(true);
        let plane = &scene.objects()[1].material;
        let color = Tracer::new(&scene).direct_lighting(plane, Vec3::ZERO, Vec3::Y);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_surface_facing_away_gets_no_light() {
        let scene = shadow_scene(false);
        let plane = &scene.objects()[1].material;
        let color = Tracer::new(&scene).direct_lighting(plane, Vec3::ZERO, -Vec3::Y);
        assert_eq!(color, Color::ZERO);
    }

    /// Camera inside an emissive mirror sphere: every bounce hits the wall
    /// head-on, so each level is `0.1 * next + e` and the last level falls
    /// back to direct lighting (the sphere lights itself) for `2e`.
    #[test]
    fn test_recursion_stops_at_max_depth() {
        let emission = Color::splat(0.5);

        for max_ray_depth in 0..5 {
            let mut builder = Scene::builder();
            builder.settings(settings(max_ray_depth, Color::ZERO));
            builder.add(Geometry::new(
                prism_core::Sphere::new(Vec3::ZERO, 2.0).unwrap(),
                Material {
                    emission_color: emission,
                    ..Material::new(Color::ONE, 0.0, 1.0, 1.0)
                },
            ));
            let scene = builder.build().unwrap();

            let mut expected = emission * 2.0;
            for _ in 0..max_ray_depth {
                expected = expected * 0.1 + emission;
            }

            let color = Tracer::new(&scene).trace(&forward(), 0);
            assert!(
                (color - expected).length() < 1e-9,
                "depth {max_ray_depth}: got {color}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_specular_surface_at_depth_limit_is_diffuse() {
        let mut builder = Scene::builder();
        builder.settings(settings(2, Color::splat(0.7)));
        builder
            .add_light(Vec3::new(0.0, 5.0, 0.0), 1.0, Color::ONE)
            .unwrap();
        builder
            .add_sphere(
                Vec3::new(0.0, 0.0, -5.0),
                1.0,
                Material::new(Color::new(0.2, 0.4, 0.6), 0.0, 1.0, 1.0),
            )
            .unwrap();
        let scene = builder.build().unwrap();
        let tracer = Tracer::new(&scene);

        let hit_point = Vec3::new(0.0, 0.0, -4.0);
        let sphere = &scene.objects()[1].material;
        let diffuse = tracer.direct_lighting(sphere, hit_point, Vec3::Z);

        let at_limit = tracer.trace(&forward(), 2);
        assert!((at_limit - diffuse).length() < 1e-9);

        // Below the limit the mirror reflects the background instead
        let reflected = tracer.trace(&forward(), 0);
        let expected = Color::splat(0.7) * 0.1 * Color::new(0.2, 0.4, 0.6);
        assert!((reflected - expected).length() < 1e-9, "{reflected}");
    }

    #[test]
    fn test_transparent_sphere_transmits_background() {
        let background = Color::new(0.2, 0.4, 1.0);
        let mut builder = Scene::builder();
        builder.settings(settings(5, background));
        builder
            .add_sphere(
                Vec3::new(0.0, 0.0, -5.0),
                1.0,
                Material::new(Color::ONE, 1.0, 0.0, 1.0),
            )
            .unwrap();
        let scene = builder.build().unwrap();

        // Head-on: fresnel = 0.1 at entry and exit, so 0.9 * 0.9 passes through
        let color = Tracer::new(&scene).trace(&forward(), 0);
        assert!((color - background * 0.81).length() < 1e-9, "{color}");
    }

    /// Off-axis ray through a glass sphere. It enters at 30 degrees, so
    /// inside sin(t) = 0.5 / 1.5 = 1/3, and it leaves deviated by
    /// 2 * (30 - asin(1/3)) ~ 21.06 degrees toward -X, where the light sits.
    #[test]
    fn test_refraction_through_glass_sphere_follows_snell() {
        let emission = Color::new(1.0, 0.5, 0.25);
        let mut builder = Scene::builder();
        builder.settings(settings(5, Color::ZERO));
        builder
            .add_sphere(
                Vec3::new(0.0, 0.0, -5.0),
                1.0,
                Material::new(Color::ONE, 1.0, 0.0, 1.5),
            )
            .unwrap();
        // Exit point (0.15544, 0, -5.98784), exit direction (-0.35931, 0, -0.93322), 4 units out
        builder
            .add_light(Vec3::new(-1.28178, 0.0, -9.72072), 0.5, emission)
            .unwrap();
        let scene = builder.build().unwrap();

        let ray = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let color = Tracer::new(&scene).trace(&ray, 0);

        // cos at entry is cos(30), at exit cos(asin(1/3)) = sqrt(8/9)
        let entry = fresnel_blend(3.0_f64.sqrt() / 2.0);
        let exit = fresnel_blend((8.0_f64 / 9.0).sqrt());
        let expected = emission * (1.0 - entry) * (1.0 - exit);
        assert!(
            (color - expected).length() < 1e-4,
            "got {color}, expected {expected}"
        );
    }

    /// From inside a glass sphere the ray meets the wall at 60 degrees, past
    /// the critical angle asin(1 / 1.5) ~ 41.8 degrees. The transmitted share
    /// takes the reflected color, so both Fresnel weights land on the light
    /// seen in the mirror direction.
    #[test]
    fn test_total_internal_reflection_reuses_reflection() {
        let emission = Color::new(0.25, 0.5, 1.0);
        let wall = Vec3::new(0.0, 2.0, -5.0);
        let sin_60 = 60.0_f64.to_radians().sin();
        let incoming = Vec3::new(sin_60, 0.5, 0.0);
        let mirrored = Vec3::new(sin_60, -0.5, 0.0);

        let mut builder = Scene::builder();
        builder.settings(settings(3, Color::ZERO));
        builder
            .add_sphere(
                Vec3::new(0.0, 0.0, -5.0),
                2.0,
                Material::new(Color::ONE, 1.0, 1.0, 1.5),
            )
            .unwrap();
        builder
            .add_light(wall + mirrored * 1.5, 0.3, emission)
            .unwrap();
        let scene = builder.build().unwrap();
        let tracer = Tracer::new(&scene);

        let ray = Ray::new(wall - incoming * 1.5, incoming);
        let hit = tracer.closest_hit(&ray).unwrap();
        assert_eq!(hit.index, 0);
        assert!((ray.at(hit.distance) - wall).length() < 1e-9);

        let color = tracer.trace(&ray, 0);
        assert!((color - emission).length() < 1e-9, "{color}");
    }

    #[test]
    fn test_grazing_rays_through_dense_sphere_stay_finite() {
        let mut builder = Scene::builder();
        builder.settings(settings(4, Color::splat(0.5)));
        builder
            .add_sphere(
                Vec3::new(0.0, 0.0, -5.0),
                1.0,
                Material::new(Color::ONE, 0.9, 0.1, 2.4),
            )
            .unwrap();
        let scene = builder.build().unwrap();
        let tracer = Tracer::new(&scene);

        // Near-tangent rays bounce around inside the sphere until the depth limit
        for y in [0.9, 0.95, 0.99] {
            let target = Vec3::new(0.0, y, -5.0);
            let ray = Ray::new(Vec3::ZERO, target.normalize());
            let color = tracer.trace(&ray, 0);
            assert!(color.is_finite(), "non-finite color {color} at y={y}");
        }
    }
}
