use anyhow::{Context, Result};

use horologe_engine::core::{App, AppControl, FrameCtx};
use horologe_engine::logging::{init_logging, LoggingConfig};
use horologe_engine::paint::Color;
use horologe_engine::runtime::{Runtime, RuntimeConfig};
use horologe_engine::scene::{MeshHandle, MeshItem, SceneSink};
use horologe_engine::time::LocalClock;
use horologe_face::{build, ClockConfig, FaceGeometry, FaceSide, HandAnimator, HandKind, TimeSample};

/// Hours between local time and the zone shown on the back face.
const BACK_FACE_OFFSET_HOURS: i32 = -9;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = ClockConfig::default().with_secondary_face(Some(BACK_FACE_OFFSET_HOURS));
    let mut app = ClockApp::new(config).context("failed to set up clock face")?;
    let mut sink = LogSink::default();

    Runtime::run(
        RuntimeConfig::default().with_title("Horologe Studio").with_target_fps(60),
        &mut sink,
        &mut app,
    )?;

    Ok(())
}

/// Builds the face once, then poses and submits it every frame.
struct ClockApp {
    face: FaceGeometry,
    animator: HandAnimator<LocalClock>,
    last_shown: Option<TimeSample>,
}

impl ClockApp {
    fn new(config: ClockConfig) -> Result<Self> {
        let face = build(&config)?;
        log::info!(
            "clock face ready: {} meshes, {} hands",
            face.meshes().len(),
            face.hands().len()
        );
        let animator = HandAnimator::new(config, LocalClock)?;
        Ok(Self { face, animator, last_shown: None })
    }

    fn log_hands(&self, time: TimeSample) {
        let angle = |kind, side| {
            self.face
                .hand(kind, side)
                .map(|h| h.angle.to_degrees())
                .unwrap_or(f32::NAN)
        };
        log::info!(
            "{:02}:{:02}:{:02}  front h/m/s {:6.1}° {:6.1}° {:6.1}°  back h {:6.1}°",
            time.hours,
            time.minutes,
            time.seconds,
            angle(HandKind::Hour, FaceSide::Front),
            angle(HandKind::Minute, FaceSide::Front),
            angle(HandKind::Second, FaceSide::Front),
            angle(HandKind::Hour, FaceSide::Back),
        );
    }
}

impl App for ClockApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl> {
        let time = self.animator.tick(&mut self.face)?;

        if self.last_shown != Some(time) {
            self.log_hands(time);
            self.last_shown = Some(time);
        }

        let clear = self.animator.config().palette.background;
        ctx.render(clear, self.face.meshes_mut())?;
        Ok(AppControl::Continue)
    }
}

/// Stand-in renderer: counts what each frame would draw.
#[derive(Default)]
struct LogSink {
    clear: Color,
    submitted: usize,
    no_depth: usize,
}

impl SceneSink for LogSink {
    fn begin_frame(&mut self, clear: Color) {
        self.clear = clear;
        self.submitted = 0;
        self.no_depth = 0;
    }

    fn submit(&mut self, handle: MeshHandle, item: &MeshItem) {
        self.submitted += 1;
        if !item.cmd.material.depth_test {
            self.no_depth += 1;
        }
        log::trace!("mesh {:?} on {:?}: {:?}", handle, item.key.layer, item.cmd.transform.translation);
    }

    fn end_frame(&mut self) -> Result<()> {
        log::debug!(
            "frame: {} meshes ({} without depth test), clear {:?}",
            self.submitted,
            self.no_depth,
            self.clear
        );
        Ok(())
    }
}
