//! Reflection, refraction and the Fresnel blend used by the tracer.

use prism_math::Vec3;

/// Weight given to the constant base reflectance in the Fresnel blend.
pub const FRESNEL_MIX: f64 = 0.1;

/// Approximate Fresnel weight for a surface seen at `cos_incidence`.
///
/// Linear blend of a base reflectance of 1 and `(1 - cos)^3`: 0.1 head-on,
/// approaching 1 at grazing angles.
#[inline]
pub fn fresnel_blend(cos_incidence: f64) -> f64 {
    let falloff = (1.0 - cos_incidence).powi(3);
    mix(falloff, 1.0, FRESNEL_MIX)
}

#[inline]
fn mix(a: f64, b: f64, amount: f64) -> f64 {
    b * amount + a * (1.0 - amount)
}

/// Mirror `direction` about `normal` and normalize.
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    (direction - normal * 2.0 * direction.dot(normal)).normalize()
}

/// Bend `direction` through a surface with relative index `eta`.
///
/// `normal` must face against `direction`. Returns `None` on total internal
/// reflection.
#[inline]
pub fn refract(direction: Vec3, normal: Vec3, eta: f64) -> Option<Vec3> {
    let cos_i = (-normal).dot(direction);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some((direction * eta + normal * (eta * cos_i - k.sqrt())).normalize())
}
