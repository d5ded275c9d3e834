//! 2D vector primitives
//!
//! Thin named wrappers over `glam::Vec2` so the collision code reads like the
//! math it implements. All functions are total.

use glam::Vec2;

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

#[inline]
pub fn sub(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

#[inline]
pub fn mult(v: Vec2, s: f32) -> Vec2 {
    v * s
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}

#[inline]
pub fn mag(v: Vec2) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`, or zero when `v` has zero length
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let m = v.length();
    if m == 0.0 { Vec2::ZERO } else { v / m }
}

/// Rotate `point` about `center` by `angle` radians (counter-clockwise in y-up)
pub fn rotate_point(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    center + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
}

/// Reflect velocity off a surface: v' = v - 2(v·n)n
#[inline]
pub fn reflect(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}
