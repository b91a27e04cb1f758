//! Per-frame hand animation.

use horologe_engine::time::TimeSource;

use crate::builder::FaceGeometry;
use crate::config::ClockConfig;
use crate::error::FaceError;
use crate::hand::{hand_angle, hand_local_pose};
use crate::sample::TimeSample;

/// Poses every hand of `face` for `time`.
///
/// Stateless: each pose is derived from `time` alone, so repeating a call with the
/// same sample writes bit-identical transforms. `config` must be the config `face` was
/// built from, and `time` must be in range; both are checked before anything is
/// written, so on error the face is untouched.
pub fn step(config: &ClockConfig, face: &mut FaceGeometry, time: TimeSample) -> Result<(), FaceError> {
    if *config != face.config {
        return Err(FaceError::config("config", "differs from the config the face was built from"));
    }
    time.validate()?;

    let FaceGeometry { meshes, hands, .. } = face;
    for hand in hands.iter_mut() {
        let angle = hand_angle(config, hand.kind, hand.side, time);
        let pose = hand
            .side
            .frame(config.body_height)
            .compose(&hand_local_pose(hand.kind, angle, hand.length));

        hand.angle = angle;
        let written = meshes.set_transform(hand.handle, pose);
        debug_assert!(written, "hand handle does not belong to its face");
    }

    log::trace!(
        "posed {} hands for {:02}:{:02}:{:02}",
        hands.len(),
        time.hours,
        time.minutes,
        time.seconds
    );

    Ok(())
}

/// Binds a validated config to the time source it animates from.
///
/// Every `tick` reads the source once and poses the hands from that reading.
#[derive(Debug, Clone)]
pub struct HandAnimator<S> {
    config: ClockConfig,
    source: S,
}

impl<S: TimeSource> HandAnimator<S> {
    pub fn new(config: ClockConfig, source: S) -> Result<Self, FaceError> {
        config.validate()?;
        Ok(Self { config, source })
    }

    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Samples the time source and poses `face`. Returns the sample used.
    pub fn tick(&self, face: &mut FaceGeometry) -> Result<TimeSample, FaceError> {
        let sample = TimeSample::from(&self.source.now());
        step(&self.config, face, sample)?;
        Ok(sample)
    }
}
