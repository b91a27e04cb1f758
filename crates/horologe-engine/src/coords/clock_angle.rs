use glam::Vec2;

/// Point at `radius` along a clock angle.
///
/// `angle` is in radians, clockwise from +Y: `0` is 12 o'clock, `π/2` is 3 o'clock.
/// Face-plane and lathe sweep positions both use this convention.
#[inline]
pub fn clock_point(angle: f32, radius: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(radius * sin, radius * cos)
}
