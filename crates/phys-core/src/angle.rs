//! Planar heading math shared by the spawn code and the engine.
//!
//! Headings are angles in radians, kept normalized to `[0, 2π)`.  The
//! coordinate convention is the usual mathematical one: heading 0 points
//! along +x, π/2 along +y, and positive rotation is counter-clockwise
//! ("left" from the agent's point of view).

use std::f32::consts::TAU;

/// Normalize an angle into `[0, TAU)`.
///
/// Works for any finite input, including large negative angles.
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    a.rem_euclid(TAU)
}

/// Unit direction vector `(x, y)` for a heading angle.
#[inline]
pub fn heading_vec(heading: f32) -> (f32, f32) {
    (heading.cos(), heading.sin())
}

/// Heading angle of a direction vector, normalized to `[0, TAU)`.
///
/// The zero vector maps to heading 0; callers that must preserve an existing
/// heading on a degenerate blend check the vector length first.
#[inline]
pub fn vec_heading(x: f32, y: f32) -> f32 {
    wrap_angle(y.atan2(x))
}

/// Rotate `heading` by `delta` radians, keeping the result in `[0, TAU)`.
#[inline]
pub fn rotate(heading: f32, delta: f32) -> f32 {
    wrap_angle(heading + delta)
}
