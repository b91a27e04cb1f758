//! Minute tick layout.
//!
//! Tick `i` sits along clock direction `θ(i) = π·i/30`. Its center is pulled in from
//! the rim by half its own length, so the outer edge of every tick, major or minor,
//! lies exactly on the body's rim.

use core::f32::consts::PI;

use horologe_engine::coords::{clock_point, Quat, Transform};

use crate::config::ClockConfig;

pub const TICK_COUNT: u32 = 60;

/// Every fifth tick is a major (five-minute) tick.
pub const MAJOR_EVERY: u32 = 5;

/// Size ratio of major to minor ticks, applied to both width and length.
pub const MAJOR_SCALE: f32 = 2.0;

/// Clock direction of tick `index`: radians clockwise from 12 o'clock.
#[inline]
pub fn tick_direction(index: u32) -> f32 {
    index as f32 * PI / 30.0
}

/// Rotation of tick `index` about the face normal: `−index·π/30`.
///
/// Periodic in 60 (mod 2π).
#[inline]
pub fn tick_angle(index: u32) -> f32 {
    -tick_direction(index)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickMark {
    pub index: u32,
    pub is_major: bool,
    /// The 12 o'clock tick, drawn in the accent color.
    pub is_accent: bool,
    /// Rotation about the face normal (see [`tick_angle`]).
    pub angle: f32,
    pub width: f32,
    pub length: f32,
}

impl TickMark {
    pub fn new(index: u32, config: &ClockConfig) -> Self {
        let is_major = index % MAJOR_EVERY == 0;
        let scale = if is_major { MAJOR_SCALE } else { 1.0 };
        Self {
            index,
            is_major,
            is_accent: index % TICK_COUNT == 0,
            angle: tick_angle(index),
            width: config.tick_width * scale,
            length: config.tick_length * scale,
        }
    }

    /// Distance from the face center to the tick's center.
    #[inline]
    pub fn center_radius(&self, body_radius: f32) -> f32 {
        body_radius - self.length * 0.5
    }

    /// Face-local placement of the tick plate (long axis local +Y turned radial).
    pub fn local_transform(&self, body_radius: f32) -> Transform {
        let center = clock_point(tick_direction(self.index), self.center_radius(body_radius));
        Transform::from_translation(center.extend(0.0)).with_rotation(Quat::from_rotation_z(self.angle))
    }
}

/// The 60 ticks of one face, in index order.
pub fn tick_marks(config: &ClockConfig) -> impl Iterator<Item = TickMark> + '_ {
    (0..TICK_COUNT).map(move |i| TickMark::new(i, config))
}
