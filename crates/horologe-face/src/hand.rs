//! Hand angles and poses.
//!
//! All angles are clock angles: radians clockwise from 12 o'clock, in `[0, 2π)`.
//! Poses are recomputed from the time sample alone, never accumulated.

use core::f32::consts::{PI, TAU};

use horologe_engine::coords::{clock_point, Quat, Transform, Vec3};
use horologe_engine::scene::MeshHandle;

use crate::config::{ClockConfig, HourMotion};
use crate::sample::TimeSample;

/// Height of the second hand above the face surface, keeping it from z-fighting
/// with the hour and minute hands it crosses.
pub const SECOND_HAND_LIFT: f32 = 0.01;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];
}

/// Which side of the body a face sits on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FaceSide {
    /// Faces +Z, the default viewing direction.
    Front,
    /// Faces −Z; the optional secondary face.
    Back,
}

impl FaceSide {
    /// Transform from face-local space to scene space.
    ///
    /// Face-local space has the face surface at `z = 0`, +Z pointing out of the face
    /// and +Y toward 12 o'clock. The back frame is the front frame turned half a turn
    /// about the vertical axis: scene x is mirrored, so the back face still reads
    /// clockwise to someone looking at it.
    pub fn frame(self, body_height: f32) -> Transform {
        let half = body_height * 0.5;
        match self {
            FaceSide::Front => Transform::from_translation(Vec3::new(0.0, 0.0, half)),
            FaceSide::Back => Transform::from_translation(Vec3::new(0.0, 0.0, -half))
                .with_rotation(Quat::from_rotation_y(PI)),
        }
    }
}

/// Live state of one hand mesh.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hand {
    pub kind: HandKind,
    pub side: FaceSide,
    pub length: f32,
    pub width: f32,
    /// Current clock angle.
    pub angle: f32,
    pub handle: MeshHandle,
}

impl Hand {
    /// Distance from the pivot to the hand's midpoint. Hands are centered shapes,
    /// so they sit this far out along their own direction.
    #[inline]
    pub fn pivot_offset(&self) -> f32 {
        self.length * 0.5
    }
}

/// Hour hand angle for `hours` (0..24) and `minutes`.
pub fn hour_angle(hours: u32, minutes: u32, motion: HourMotion) -> f32 {
    let hour = (hours % 12) as f32;
    let creep = match motion {
        HourMotion::Smooth => minutes as f32 / 60.0,
        HourMotion::Stepped => 0.0,
    };
    TAU * ((hour + creep) / 12.0)
}

pub fn minute_angle(minutes: u32) -> f32 {
    TAU * (minutes as f32 / 60.0)
}

pub fn second_angle(seconds: u32) -> f32 {
    TAU * (seconds as f32 / 60.0)
}

/// Angle of `kind` on `side` for `time`.
///
/// The back face's hour hand shows `time` shifted by the configured offset; its
/// minute and second hands mirror the front.
pub fn hand_angle(config: &ClockConfig, kind: HandKind, side: FaceSide, time: TimeSample) -> f32 {
    let time = match side {
        FaceSide::Front => time,
        FaceSide::Back => time.offset_hours(config.secondary_offset()),
    };
    match kind {
        HandKind::Hour => hour_angle(time.hours, time.minutes, config.hour_motion),
        HandKind::Minute => minute_angle(time.minutes),
        HandKind::Second => second_angle(time.seconds),
    }
}

/// Face-local pose of a hand of `length` at `angle`.
///
/// The midpoint sits at `length/2` along the clock direction and the long axis
/// (local +Y) is turned by `−angle` about the face normal, so position and
/// orientation always agree.
pub fn hand_local_pose(kind: HandKind, angle: f32, length: f32) -> Transform {
    let lift = match kind {
        HandKind::Second => SECOND_HAND_LIFT,
        HandKind::Hour | HandKind::Minute => 0.0,
    };
    Transform::from_translation(clock_point(angle, length * 0.5).extend(lift))
        .with_rotation(Quat::from_rotation_z(-angle))
}
