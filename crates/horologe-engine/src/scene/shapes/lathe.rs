use bytemuck::{Pod, Zeroable};

use crate::coords::{clock_point, Vec2, Vec3};

/// Vertex emitted by procedural geometry: position + normal.
///
/// `#[repr(C)]` and `Pod` so sinks can upload a triangle list with
/// `bytemuck::cast_slice` directly.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex3d {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Surface of revolution: a 2D profile swept around the local +Z axis.
///
/// Profile points are `(radius, z)`. A point at sweep angle `φ` lands at
/// `(r·sin φ, r·cos φ, z)`, so `φ` follows the same clockwise-from-+Y convention as
/// clock angles. The sweep always covers a full turn.
#[derive(Debug, Clone, PartialEq)]
pub struct LatheGeometry {
    profile: Vec<Vec2>,
    segments: u32,
}

impl LatheGeometry {
    pub const MIN_SEGMENTS: u32 = 3;

    /// Creates a lathe from a profile polyline.
    ///
    /// Returns `None` for fewer than two profile points, fewer than
    /// [`MIN_SEGMENTS`](Self::MIN_SEGMENTS) segments, negative radii, or non-finite input.
    pub fn new(profile: Vec<Vec2>, segments: u32) -> Option<Self> {
        let valid = profile.len() >= 2
            && segments >= Self::MIN_SEGMENTS
            && profile.iter().all(|p| p.is_finite() && p.x >= 0.0);
        valid.then_some(Self { profile, segments })
    }

    #[inline]
    pub fn profile(&self) -> &[Vec2] {
        &self.profile
    }

    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// `(min, max)` radius over the profile.
    pub fn radial_extent(&self) -> (f32, f32) {
        extent(self.profile.iter().map(|p| p.x))
    }

    /// `(min, max)` z over the profile.
    pub fn height_extent(&self) -> (f32, f32) {
        extent(self.profile.iter().map(|p| p.y))
    }

    /// Expands the surface into a flat-shaded triangle list.
    ///
    /// Every triangle owns its three vertices and they share the face normal, which
    /// keeps profile corners crisp. Triangles that collapse (profile points on the
    /// axis, repeated points) are skipped.
    pub fn flat_triangles(&self) -> Vec<Vertex3d> {
        let step = core::f32::consts::TAU / self.segments as f32;
        let edges = self.profile.windows(2);
        let mut out = Vec::with_capacity(self.segments as usize * edges.len() * 6);

        for seg in 0..self.segments {
            let phi0 = seg as f32 * step;
            // Close the seam on exactly the starting angle.
            let phi1 = if seg + 1 == self.segments { 0.0 } else { (seg + 1) as f32 * step };

            for edge in self.profile.windows(2) {
                let a = revolve(edge[0], phi0);
                let b = revolve(edge[0], phi1);
                let c = revolve(edge[1], phi1);
                let d = revolve(edge[1], phi0);

                push_flat(&mut out, a, b, d);
                push_flat(&mut out, b, c, d);
            }
        }

        out
    }
}

#[inline]
fn revolve(p: Vec2, phi: f32) -> Vec3 {
    clock_point(phi, p.x).extend(p.y)
}

fn push_flat(out: &mut Vec<Vertex3d>, a: Vec3, b: Vec3, c: Vec3) {
    let n = (b - a).cross(c - a);
    let len = n.length();
    if len <= f32::EPSILON {
        return;
    }
    let normal = (n / len).to_array();
    for p in [a, b, c] {
        out.push(Vertex3d { position: p.to_array(), normal });
    }
}

fn extent(values: impl Iterator<Item = f32>) -> (f32, f32) {
    values.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
