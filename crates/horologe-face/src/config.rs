use horologe_engine::paint::Color;

use crate::error::FaceError;
use crate::hand::HandKind;

/// One value per hand kind.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandSet<T> {
    pub hour: T,
    pub minute: T,
    pub second: T,
}

impl<T: Copy> HandSet<T> {
    #[inline]
    pub const fn new(hour: T, minute: T, second: T) -> Self {
        Self { hour, minute, second }
    }

    #[inline]
    pub fn get(&self, kind: HandKind) -> T {
        match kind {
            HandKind::Hour => self.hour,
            HandKind::Minute => self.minute,
            HandKind::Second => self.second,
        }
    }
}

/// How the hour hand moves within an hour.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum HourMotion {
    /// Creeps with the minutes: half-way between 3 and 4 at 3:30.
    #[default]
    Smooth,
    /// Holds on the whole hour and jumps when the hour changes.
    Stepped,
}

/// Which hands the secondary (back) face carries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum SecondaryHands {
    /// Hour, minute and second hands.
    #[default]
    Full,
    /// Only the (offset) hour hand.
    HourOnly,
}

/// Colors for every part of the face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FacePalette {
    /// Clear color for frames showing the face.
    pub background: Color,
    pub body: Color,
    pub tick: Color,
    /// The 12 o'clock tick.
    pub accent_tick: Color,
    pub mount: Color,
    pub ring: Color,
    pub hands: HandSet<Color>,
}

impl Default for FacePalette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            body: Color::WHITE,
            tick: Color::BLACK,
            accent_tick: Color::SKY_BLUE,
            mount: Color::BLACK,
            ring: Color::SKY_BLUE,
            hands: HandSet::new(Color::BLACK, Color::BLACK, Color::RED),
        }
    }
}

/// Static description of a clock face.
///
/// Lengths are in scene units. `Default` is a 50-unit face, 10 units thick, with a
/// 5-unit ring, on one side only.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub body_radius: f32,
    pub body_height: f32,
    /// Minor tick size. Major (five-minute) ticks are twice as wide and long.
    pub tick_width: f32,
    pub tick_length: f32,
    /// Radial thickness of the outer ring; `0` leaves the ring out.
    pub ring_thickness: f32,
    pub hand_lengths: HandSet<f32>,
    pub hand_widths: HandSet<f32>,
    pub mount_radius: f32,
    /// Mirror the face onto the back of the body.
    pub secondary_face: bool,
    /// Hour offset of the secondary face (another time zone). Requires `secondary_face`.
    pub secondary_time_offset_hours: Option<i32>,
    pub secondary_hands: SecondaryHands,
    pub hour_motion: HourMotion,
    pub palette: FacePalette,
}

impl ClockConfig {
    /// Hand lengths proportional to the face: the hour hand reaches half the radius
    /// past the tick band, minute and second hands four fifths.
    pub fn proportional_hand_lengths(body_radius: f32, tick_length: f32) -> HandSet<f32> {
        let long = body_radius * 4.0 / 5.0 + tick_length;
        HandSet::new(body_radius / 2.0 + tick_length, long, long)
    }

    /// Sets the body size and resets hand lengths to proportional defaults.
    pub fn with_body(mut self, radius: f32, height: f32) -> Self {
        self.body_radius = radius;
        self.body_height = height;
        self.hand_lengths = Self::proportional_hand_lengths(radius, self.tick_length);
        self
    }

    /// Sets the minor tick size and resets hand lengths to proportional defaults.
    pub fn with_ticks(mut self, width: f32, length: f32) -> Self {
        self.tick_width = width;
        self.tick_length = length;
        self.hand_lengths = Self::proportional_hand_lengths(self.body_radius, length);
        self
    }

    pub fn with_ring(mut self, thickness: f32) -> Self {
        self.ring_thickness = thickness;
        self
    }

    pub fn without_ring(self) -> Self {
        self.with_ring(0.0)
    }

    pub fn with_hand_lengths(mut self, lengths: HandSet<f32>) -> Self {
        self.hand_lengths = lengths;
        self
    }

    pub fn with_hand_widths(mut self, widths: HandSet<f32>) -> Self {
        self.hand_widths = widths;
        self
    }

    pub fn with_mount_radius(mut self, radius: f32) -> Self {
        self.mount_radius = radius;
        self
    }

    /// Enables the mirrored back face, optionally showing another time zone.
    pub fn with_secondary_face(mut self, offset_hours: Option<i32>) -> Self {
        self.secondary_face = true;
        self.secondary_time_offset_hours = offset_hours;
        self
    }

    pub fn with_secondary_hands(mut self, hands: SecondaryHands) -> Self {
        self.secondary_hands = hands;
        self
    }

    pub fn with_hour_motion(mut self, motion: HourMotion) -> Self {
        self.hour_motion = motion;
        self
    }

    pub fn with_palette(mut self, palette: FacePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Hour offset applied on the secondary face (`0` when unset).
    #[inline]
    pub fn secondary_offset(&self) -> i32 {
        self.secondary_time_offset_hours.unwrap_or(0)
    }

    /// Checks every dimension and the secondary-face settings.
    pub fn validate(&self) -> Result<(), FaceError> {
        positive("body_radius", self.body_radius)?;
        positive("body_height", self.body_height)?;
        positive("tick_width", self.tick_width)?;
        positive("tick_length", self.tick_length)?;
        positive("mount_radius", self.mount_radius)?;

        positive("hand_lengths.hour", self.hand_lengths.hour)?;
        positive("hand_lengths.minute", self.hand_lengths.minute)?;
        positive("hand_lengths.second", self.hand_lengths.second)?;
        positive("hand_widths.hour", self.hand_widths.hour)?;
        positive("hand_widths.minute", self.hand_widths.minute)?;
        positive("hand_widths.second", self.hand_widths.second)?;

        if !(self.ring_thickness.is_finite() && self.ring_thickness >= 0.0) {
            return Err(FaceError::config(
                "ring_thickness",
                format!("must be >= 0 (got {})", self.ring_thickness),
            ));
        }

        if self.secondary_time_offset_hours.is_some() && !self.secondary_face {
            return Err(FaceError::config(
                "secondary_time_offset_hours",
                "is set but secondary_face is disabled",
            ));
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), FaceError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FaceError::config(field, format!("must be > 0 (got {value})")))
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        let body_radius = 50.0;
        let tick_length = 5.0;
        Self {
            body_radius,
            body_height: 10.0,
            tick_width: 1.0,
            tick_length,
            ring_thickness: 5.0,
            hand_lengths: Self::proportional_hand_lengths(body_radius, tick_length),
            hand_widths: HandSet::new(2.0, 2.0, 1.0),
            mount_radius: 2.0,
            secondary_face: false,
            secondary_time_offset_hours: None,
            secondary_hands: SecondaryHands::Full,
            hour_motion: HourMotion::Smooth,
            palette: FacePalette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: FaceError) -> &'static str {
        match err {
            FaceError::InvalidConfig { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn default_is_valid_and_proportional() {
        let c = ClockConfig::default();
        c.validate().unwrap();
        assert_eq!(c.hand_lengths, HandSet::new(30.0, 45.0, 45.0));
    }

    #[test]
    fn with_body_rederives_hand_lengths() {
        let c = ClockConfig::default().with_body(100.0, 4.0);
        assert_eq!(c.hand_lengths.hour, 55.0);
        assert_eq!(c.hand_lengths.minute, 85.0);
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn negative_radius_is_rejected() {
        let err = ClockConfig::default().with_body(-1.0, 10.0).validate().unwrap_err();
        assert_eq!(field_of(err), "body_radius");
    }

    #[test]
    fn zero_and_nan_dimensions_are_rejected() {
        let c = ClockConfig { tick_width: 0.0, ..ClockConfig::default() };
        assert_eq!(field_of(c.validate().unwrap_err()), "tick_width");

        let c = ClockConfig { body_height: f32::NAN, ..ClockConfig::default() };
        assert_eq!(field_of(c.validate().unwrap_err()), "body_height");

        let c = ClockConfig::default().with_hand_lengths(HandSet::new(1.0, 1.0, 0.0));
        assert_eq!(field_of(c.validate().unwrap_err()), "hand_lengths.second");
    }

    #[test]
    fn zero_ring_is_allowed_negative_is_not() {
        ClockConfig::default().without_ring().validate().unwrap();
        let err = ClockConfig::default().with_ring(-0.5).validate().unwrap_err();
        assert_eq!(field_of(err), "ring_thickness");
    }

    #[test]
    fn offset_without_secondary_face_is_rejected() {
        let c = ClockConfig { secondary_time_offset_hours: Some(-9), ..ClockConfig::default() };
        assert_eq!(field_of(c.validate().unwrap_err()), "secondary_time_offset_hours");

        ClockConfig::default().with_secondary_face(Some(-9)).validate().unwrap();
    }
}
