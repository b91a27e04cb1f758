//! Clock face construction.
//!
//! `build` is a pure function of the config: it records every mesh of the face into
//! a fresh `MeshList` and returns handles to the hands so the animator can move them.

use horologe_engine::coords::{Transform, Vec2, Vec3};
use horologe_engine::paint::{Color, Material};
use horologe_engine::scene::shapes::LatheGeometry;
use horologe_engine::scene::{Layer, MeshCmd, MeshHandle, MeshList, Shape};

use crate::config::{ClockConfig, SecondaryHands};
use crate::error::FaceError;
use crate::hand::{Hand, HandKind, FaceSide, hand_local_pose};
use crate::tick::tick_marks;

/// Radial segments of the body cylinder.
pub const BODY_RADIAL_SEGMENTS: u32 = 64;

/// Segments of the outer ring's revolution.
pub const RING_SEGMENTS: u32 = 200;

/// Ring height relative to the body height; the ring stands proud of both faces.
pub const RING_HEIGHT_RATIO: f32 = 2.0;

/// Paint layers used by the face.
///
/// Ticks are drawn without depth testing, so they must come after the body.
pub mod layers {
    use horologe_engine::scene::Layer;

    pub const BODY: Layer = Layer::new(0);
    pub const MARKINGS: Layer = Layer::new(1);
    pub const MOUNT: Layer = Layer::new(2);
    pub const HANDS: Layer = Layer::new(3);
}

/// What a recorded mesh represents.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PartRole {
    Body,
    Tick { index: u32, major: bool },
    Mount,
    Ring,
    Hand(HandKind),
}

/// Bookkeeping for one recorded mesh.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FacePart {
    pub role: PartRole,
    /// `None` for parts shared by both faces (body, ring).
    pub side: Option<FaceSide>,
    pub handle: MeshHandle,
}

/// Everything `build` produced: the mesh list plus what each mesh is.
///
/// Static parts never change after `build`. Hand transforms are rewritten in place by
/// the animator through the handles kept in `hands`, using the config the face was
/// built from.
#[derive(Debug, Clone)]
pub struct FaceGeometry {
    pub(crate) config: ClockConfig,
    pub(crate) meshes: MeshList,
    pub(crate) parts: Vec<FacePart>,
    pub(crate) hands: Vec<Hand>,
}

impl FaceGeometry {
    /// The config this face was built from.
    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    #[inline]
    pub fn meshes(&self) -> &MeshList {
        &self.meshes
    }

    /// Mutable access for paint-order submission (`MeshList::submit_to`).
    #[inline]
    pub fn meshes_mut(&mut self) -> &mut MeshList {
        &mut self.meshes
    }

    #[inline]
    pub fn parts(&self) -> &[FacePart] {
        &self.parts
    }

    #[inline]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, kind: HandKind, side: FaceSide) -> Option<&Hand> {
        self.hands.iter().find(|h| h.kind == kind && h.side == side)
    }

    /// Number of recorded parts matching `pred`.
    pub fn count(&self, pred: impl Fn(&FacePart) -> bool) -> usize {
        self.parts.iter().filter(|p| pred(p)).count()
    }

    /// Scene transform of a recorded mesh.
    pub fn transform(&self, handle: MeshHandle) -> Option<Transform> {
        self.meshes.get(handle).map(|item| item.cmd.transform)
    }

    fn record(&mut self, role: PartRole, side: Option<FaceSide>, layer: Layer, cmd: MeshCmd) -> MeshHandle {
        let handle = self.meshes.push(layer, cmd);
        self.parts.push(FacePart { role, side, handle });
        handle
    }
}

/// Builds the face described by `config`, with hands at 12:00:00.
pub fn build(config: &ClockConfig) -> Result<FaceGeometry, FaceError> {
    config.validate()?;

    let mut face = FaceGeometry {
        config: config.clone(),
        meshes: MeshList::new(),
        parts: Vec::new(),
        hands: Vec::new(),
    };

    face.record(
        PartRole::Body,
        None,
        layers::BODY,
        MeshCmd::new(
            Shape::Cylinder {
                radius: config.body_radius,
                height: config.body_height,
                radial_segments: BODY_RADIAL_SEGMENTS,
            },
            Transform::IDENTITY,
            Material::solid(config.palette.body),
        ),
    );

    if config.ring_thickness > 0.0 {
        let (shape, transform) = outer_ring(config)?;
        face.record(
            PartRole::Ring,
            None,
            layers::BODY,
            MeshCmd::new(shape, transform, Material::solid(config.palette.ring).double_sided().flat()),
        );
    }

    build_side(&mut face, config, FaceSide::Front);
    if config.secondary_face {
        build_side(&mut face, config, FaceSide::Back);
    }

    log::debug!(
        "built clock face: {} meshes, {} ticks, {} hands, ring {}, secondary face {}",
        face.meshes.len(),
        face.count(|p| matches!(p.role, PartRole::Tick { .. })),
        face.hands.len(),
        config.ring_thickness > 0.0,
        config.secondary_face,
    );

    Ok(face)
}

/// Ticks, mount and hands of one face.
fn build_side(face: &mut FaceGeometry, config: &ClockConfig, side: FaceSide) {
    let frame = side.frame(config.body_height);

    for tick in tick_marks(config) {
        let color = if tick.is_accent { config.palette.accent_tick } else { config.palette.tick };
        face.record(
            PartRole::Tick { index: tick.index, major: tick.is_major },
            Some(side),
            layers::MARKINGS,
            MeshCmd::new(
                Shape::Plate { width: tick.width, length: tick.length },
                frame.compose(&tick.local_transform(config.body_radius)),
                Material::solid(color).without_depth_test(),
            ),
        );
    }

    face.record(
        PartRole::Mount,
        Some(side),
        layers::MOUNT,
        MeshCmd::new(
            Shape::Sphere { radius: config.mount_radius },
            frame,
            Material::solid(config.palette.mount),
        ),
    );

    for kind in HandKind::ALL {
        if side == FaceSide::Back
            && config.secondary_hands == SecondaryHands::HourOnly
            && kind != HandKind::Hour
        {
            continue;
        }

        let length = config.hand_lengths.get(kind);
        let width = config.hand_widths.get(kind);
        let handle = face.record(
            PartRole::Hand(kind),
            Some(side),
            layers::HANDS,
            MeshCmd::new(
                hand_shape(kind, length, width),
                frame.compose(&hand_local_pose(kind, 0.0, length)),
                hand_material(kind, config.palette.hands.get(kind)),
            ),
        );

        face.hands.push(Hand { kind, side, length, width, angle: 0.0, handle });
    }
}

/// Hour and minute hands are stretched spheres; the second hand is a thin plate.
fn hand_shape(kind: HandKind, length: f32, width: f32) -> Shape {
    match kind {
        HandKind::Hour | HandKind::Minute => Shape::Ellipsoid {
            radii: Vec3::new(width * 0.5, length * 0.5, width * 0.5),
        },
        HandKind::Second => Shape::Plate { width, length },
    }
}

fn hand_material(kind: HandKind, color: Color) -> Material {
    match kind {
        HandKind::Second => Material::solid(color).double_sided(),
        HandKind::Hour | HandKind::Minute => Material::solid(color),
    }
}

/// Rectangular profile from the body rim outward, revolved about the face normal and
/// centered on the body.
fn outer_ring(config: &ClockConfig) -> Result<(Shape, Transform), FaceError> {
    let inner = config.body_radius;
    let outer = inner + config.ring_thickness;
    let height = config.body_height * RING_HEIGHT_RATIO;

    let profile = vec![
        Vec2::new(inner, 0.0),
        Vec2::new(inner, height),
        Vec2::new(outer, height),
        Vec2::new(outer, 0.0),
        Vec2::new(inner, 0.0),
    ];

    let lathe = LatheGeometry::new(profile, RING_SEGMENTS)
        .ok_or_else(|| FaceError::config("ring_thickness", "does not produce a valid ring profile"))?;

    let transform = Transform::from_translation(Vec3::new(0.0, 0.0, -height * 0.5));
    Ok((Shape::Lathe(lathe), transform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::SECOND_HAND_LIFT;

    fn single_face() -> ClockConfig {
        ClockConfig::default().with_body(50.0, 10.0).with_ticks(1.0, 5.0).without_ring()
    }

    fn is_tick(p: &FacePart) -> bool {
        matches!(p.role, PartRole::Tick { .. })
    }

    fn is_hand(p: &FacePart) -> bool {
        matches!(p.role, PartRole::Hand(_))
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn single_face_part_counts() {
        let face = build(&single_face()).unwrap();
        assert_eq!(face.count(is_tick), 60);
        assert_eq!(face.count(|p| p.role == PartRole::Body), 1);
        assert_eq!(face.count(|p| p.role == PartRole::Mount), 1);
        assert_eq!(face.count(|p| p.role == PartRole::Ring), 0);
        assert_eq!(face.count(is_hand), 3);
        assert_eq!(face.hands().len(), 3);
        assert_eq!(face.meshes().len(), 65);
    }

    #[test]
    fn dual_face_duplicates_per_side_parts() {
        let face = build(&single_face().with_ring(5.0).with_secondary_face(Some(-9))).unwrap();
        assert_eq!(face.count(is_tick), 120);
        assert_eq!(face.count(|p| p.role == PartRole::Mount), 2);
        assert_eq!(face.count(|p| p.role == PartRole::Body), 1);
        assert_eq!(face.count(|p| p.role == PartRole::Ring), 1);
        assert_eq!(face.hands().len(), 6);
        assert_eq!(face.count(|p| is_tick(p) && p.side == Some(FaceSide::Back)), 60);
    }

    #[test]
    fn hour_only_secondary_suppresses_back_minute_and_second() {
        let config = single_face()
            .with_secondary_face(None)
            .with_secondary_hands(SecondaryHands::HourOnly);
        let face = build(&config).unwrap();
        assert_eq!(face.hands().len(), 4);
        assert!(face.hand(HandKind::Hour, FaceSide::Back).is_some());
        assert!(face.hand(HandKind::Minute, FaceSide::Back).is_none());
        assert!(face.hand(HandKind::Second, FaceSide::Back).is_none());
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn negative_radius_fails() {
        let err = build(&single_face().with_body(-1.0, 10.0)).unwrap_err();
        assert!(matches!(err, FaceError::InvalidConfig { field: "body_radius", .. }));
    }

    #[test]
    fn offset_without_secondary_fails() {
        let config = ClockConfig { secondary_time_offset_hours: Some(3), ..single_face() };
        assert!(matches!(build(&config), Err(FaceError::InvalidConfig { .. })));
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn build_is_deterministic() {
        let config = single_face().with_ring(5.0).with_secondary_face(Some(2));
        let a = build(&config).unwrap();
        let b = build(&config).unwrap();
        assert_eq!(a.meshes().items(), b.meshes().items());
        assert_eq!(a.parts(), b.parts());
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn front_ticks_sit_on_front_surface_flush_with_rim() {
        let config = single_face();
        let face = build(&config).unwrap();
        for part in face.parts().iter().filter(|p| is_tick(p)) {
            let item = face.meshes().get(part.handle).unwrap();
            let Shape::Plate { length, .. } = item.cmd.shape else {
                panic!("tick is not a plate");
            };
            let t = item.cmd.transform;
            assert_eq!(t.translation.z, 5.0);
            let outer = t.transform_point(Vec3::new(0.0, length * 0.5, 0.0));
            assert!((outer.truncate().length() - 50.0).abs() < 1e-4);
        }
    }

    #[test]
    fn ticks_skip_depth_test_and_paint_after_body() {
        let mut face = build(&single_face()).unwrap();
        let body = face.parts()[0].handle;
        let order: Vec<_> = face.meshes_mut().iter_in_paint_order().map(|(h, _)| h).collect();
        assert_eq!(order[0], body);

        for part in face.parts().iter().filter(|p| is_tick(p)) {
            let item = face.meshes().get(part.handle).unwrap();
            assert!(!item.cmd.material.depth_test);
            assert_eq!(item.key.layer, layers::MARKINGS);
        }
    }

    #[test]
    fn twelve_o_clock_tick_uses_accent_color() {
        let config = single_face();
        let face = build(&config).unwrap();
        for part in face.parts() {
            if let PartRole::Tick { index, .. } = part.role {
                let color = face.meshes().get(part.handle).unwrap().cmd.material.color;
                let expected = if index == 0 { config.palette.accent_tick } else { config.palette.tick };
                assert_eq!(color, expected, "tick {index}");
            }
        }
    }

    #[test]
    fn ring_spans_rim_to_thickness_and_is_flat_shaded() {
        let config = single_face().with_ring(5.0);
        let face = build(&config).unwrap();
        let ring = face.parts().iter().find(|p| p.role == PartRole::Ring).unwrap();
        let item = face.meshes().get(ring.handle).unwrap();

        let Shape::Lathe(lathe) = &item.cmd.shape else {
            panic!("ring is not a lathe");
        };
        assert_eq!(lathe.segments(), RING_SEGMENTS);
        assert_eq!(lathe.profile().len(), 5);
        assert_eq!(lathe.radial_extent(), (50.0, 55.0));
        assert_eq!(lathe.height_extent(), (0.0, 20.0));
        assert_eq!(item.cmd.transform.translation, Vec3::new(0.0, 0.0, -10.0));
        assert!(item.cmd.material.flat_shading);
    }

    #[test]
    fn hands_start_at_twelve() {
        let config = single_face();
        let face = build(&config).unwrap();
        for hand in face.hands() {
            let t = face.transform(hand.handle).unwrap();
            let lift = if hand.kind == HandKind::Second { SECOND_HAND_LIFT } else { 0.0 };
            assert_eq!(hand.angle, 0.0);
            assert_eq!(t.translation, Vec3::new(0.0, hand.pivot_offset(), 5.0 + lift));
        }
    }

    #[test]
    fn back_ticks_sit_on_back_surface_flush_with_rim() {
        let face = build(&single_face().with_secondary_face(None)).unwrap();
        let back_ticks: Vec<_> = face
            .parts()
            .iter()
            .filter(|p| is_tick(p) && p.side == Some(FaceSide::Back))
            .collect();
        assert_eq!(back_ticks.len(), 60);

        for part in back_ticks {
            let item = face.meshes().get(part.handle).unwrap();
            let Shape::Plate { length, .. } = item.cmd.shape else {
                panic!("tick is not a plate");
            };
            let t = item.cmd.transform;
            assert!((t.translation.z + 5.0).abs() < 1e-5, "{:?}", part.role);

            let outer = t.transform_point(Vec3::new(0.0, length * 0.5, 0.0));
            assert!((outer.truncate().length() - 50.0).abs() < 1e-4, "{:?}", part.role);

            let axis = (t.rotation * Vec3::Y).truncate();
            let radial = t.translation.truncate().normalize();
            assert!((axis - radial).length() < 1e-4, "{:?}", part.role);
        }
    }

    #[test]
    fn back_ticks_mirror_front_ticks() {
        let face = build(&single_face().with_secondary_face(None)).unwrap();
        let tick = |index: u32, side: FaceSide| {
            let part = face
                .parts()
                .iter()
                .find(|p| matches!(p.role, PartRole::Tick { index: i, .. } if i == index) && p.side == Some(side))
                .unwrap();
            face.transform(part.handle).unwrap().translation
        };
        // Three o'clock on the back is on the scene's left.
        let front = tick(15, FaceSide::Front);
        let back = tick(15, FaceSide::Back);
        assert!(front.x > 0.0);
        assert!((back - Vec3::new(-front.x, front.y, -front.z)).length() < 1e-4);
    }

    #[test]
    fn back_second_hand_is_lifted_outward() {
        let face = build(&single_face().with_secondary_face(None)).unwrap();
        let second = face.hand(HandKind::Second, FaceSide::Back).unwrap();
        let z = face.transform(second.handle).unwrap().translation.z;
        assert!((z - (-5.0 - SECOND_HAND_LIFT)).abs() < 1e-6, "z = {z}");

        let hour = face.hand(HandKind::Hour, FaceSide::Back).unwrap();
        assert!((face.transform(hour.handle).unwrap().translation.z + 5.0).abs() < 1e-6);
    }

    #[test]
    fn face_keeps_its_build_config() {
        let config = single_face().with_secondary_face(Some(4));
        assert_eq!(build(&config).unwrap().config(), &config);
    }

    #[test]
    fn back_face_sits_behind_body() {
        let face = build(&single_face().with_secondary_face(None)).unwrap();
        let back_mount = face
            .parts()
            .iter()
            .find(|p| p.role == PartRole::Mount && p.side == Some(FaceSide::Back))
            .unwrap();
        assert_eq!(face.transform(back_mount.handle).unwrap().translation, Vec3::new(0.0, 0.0, -5.0));
    }
}
