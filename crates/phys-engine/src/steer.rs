//! Sensing and turning: how one agent picks its next heading.
//!
//! Each agent reads the trail at three sensors — ahead, ahead-left, and
//! ahead-right, all at `sensor_distance` — and turns by `rotation_angle`
//! toward the strongest reading.  Sensors do not wrap: a sensor hanging off
//! the grid reads `0.0`, so trails near an edge pull agents back inward
//! rather than across the seam.

use phys_core::angle::{heading_vec, rotate, vec_heading};
use phys_core::ParameterSet;
use phys_field::TrailField;

/// Outcome of comparing the three sensor readings.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Turn {
    Straight,
    Left,
    Right,
}

/// Decide a turn from the three sensor readings.
///
/// Going straight wins all ties with the side sensors; a pure left/right tie
/// resolves left.  Left is the counter-clockwise (positive-angle) side.
#[inline]
pub fn judge_samples(left: f32, center: f32, right: f32) -> Turn {
    if center >= left && center >= right {
        Turn::Straight
    } else if left >= right {
        Turn::Left
    } else {
        Turn::Right
    }
}

/// Read-only inputs of the sense pass, borrowed once per step and shared by
/// every agent's steering decision.
///
/// Angles arrive in degrees from [`ParameterSet`] and are converted to
/// radians here, once, instead of per agent.
pub struct SteerContext<'a> {
    field:             &'a TrailField,
    sensor_distance:   f32,
    /// Angular offset of the side sensors, radians.
    sensor_angle:      f32,
    /// How far a single turn rotates the heading, radians.
    rotation_angle:    f32,
    center_attraction: f32,
    center:            (f32, f32),
}

impl<'a> SteerContext<'a> {
    pub fn new(params: &ParameterSet, field: &'a TrailField) -> Self {
        Self {
            field,
            sensor_distance:   params.sensor_distance,
            sensor_angle:      params.sensor_angle.to_radians(),
            rotation_angle:    params.rotation_angle.to_radians(),
            center_attraction: params.center_attraction,
            center: (
                field.width() as f32 * 0.5,
                field.height() as f32 * 0.5,
            ),
        }
    }

    /// New heading for an agent at `(x, y)` currently pointing `heading`.
    ///
    /// Applies the sensor turn first, then the centre-attraction blend.
    /// Reads only shared state, so any number of agents may steer
    /// concurrently.
    pub fn steer(&self, x: f32, y: f32, heading: f32) -> f32 {
        let turned = match self.judge(x, y, heading) {
            Turn::Straight => heading,
            Turn::Left => rotate(heading, self.rotation_angle),
            Turn::Right => rotate(heading, -self.rotation_angle),
        };
        self.attract(x, y, turned)
    }

    /// Compare the three sensor readings for one agent.
    fn judge(&self, x: f32, y: f32, heading: f32) -> Turn {
        let left   = self.sample_at(x, y, heading, self.sensor_angle);
        let center = self.sample_at(x, y, heading, 0.0);
        let right  = self.sample_at(x, y, heading, -self.sensor_angle);
        judge_samples(left, center, right)
    }

    /// Trail value under the sensor offset by `offset` radians from the
    /// heading.  Out-of-grid sensors read `0.0`.
    fn sample_at(&self, x: f32, y: f32, heading: f32, offset: f32) -> f32 {
        let (dx, dy) = heading_vec(rotate(heading, offset));
        self.field.sample(
            x + dx * self.sensor_distance,
            y + dy * self.sensor_distance,
        )
    }

    /// Blend the unit vector toward the grid centre into the heading,
    /// weighted by `center_attraction`.
    ///
    /// Two degenerate cases keep the heading unchanged: an agent standing on
    /// the centre (no defined pull direction), and a blend that cancels to a
    /// zero vector (pull exactly opposing the heading).
    fn attract(&self, x: f32, y: f32, heading: f32) -> f32 {
        if self.center_attraction == 0.0 {
            return heading;
        }

        let tx = self.center.0 - x;
        let ty = self.center.1 - y;
        let len = (tx * tx + ty * ty).sqrt();
        if len <= f32::EPSILON {
            return heading;
        }

        let (hx, hy) = heading_vec(heading);
        let bx = hx + self.center_attraction * (tx / len);
        let by = hy + self.center_attraction * (ty / len);
        if bx * bx + by * by <= f32::EPSILON {
            return heading;
        }
        vec_heading(bx, by)
    }
}
