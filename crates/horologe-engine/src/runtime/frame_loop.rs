use anyhow::{Context, Result};

use crate::core::{App, AppControl, FrameCtx};
use crate::scene::SceneSink;
use crate::time::FrameClock;

/// Frame loop configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Frames per second to pace to. `0` runs unpaced.
    pub target_fps: u32,
    /// Stop after this many frames. `None` runs until the app exits.
    pub max_frames: Option<u64>,
}

impl RuntimeConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "horologe".to_string(),
            target_fps: 60,
            max_frames: None,
        }
    }
}

/// Runtime context passed to the application.
///
/// Requests are applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit_requested: bool,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit_requested = true;
    }

    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

/// Entry point for the frame loop.
pub struct Runtime;

impl Runtime {
    /// Drives `app` until it exits, fails, or `max_frames` is reached.
    ///
    /// Returns the number of frames run.
    pub fn run<A>(config: RuntimeConfig, sink: &mut dyn SceneSink, app: &mut A) -> Result<u64>
    where
        A: App,
    {
        let mut clock = FrameClock::default().with_target_fps(config.target_fps);
        let mut frames: u64 = 0;

        log::info!(
            "{}: frame loop started (target {} fps, limit {:?})",
            config.title,
            config.target_fps,
            config.max_frames
        );

        let outcome = loop {
            if config.max_frames.is_some_and(|max| frames >= max) {
                break Ok(());
            }

            let time = clock.tick();
            let mut runtime_ctx = RuntimeCtx::default();

            let control = {
                let mut ctx = FrameCtx {
                    time,
                    sink: &mut *sink,
                    runtime: &mut runtime_ctx,
                };
                app.on_frame(&mut ctx)
                    .with_context(|| format!("{}: frame {} failed", config.title, time.frame_index))
            };

            let control = match control {
                Ok(c) => c,
                Err(e) => break Err(e),
            };

            frames += 1;

            if control == AppControl::Exit || runtime_ctx.exit_requested() {
                break Ok(());
            }

            let idle = clock.remaining(&time);
            if !idle.is_zero() {
                std::thread::sleep(idle);
            }
        };

        app.on_stop();

        match &outcome {
            Ok(()) => log::info!("{}: frame loop stopped after {frames} frames", config.title),
            Err(e) => log::error!("{}: frame loop aborted after {frames} frames: {e:#}", config.title),
        }

        outcome.map(|()| frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Transform;
    use crate::paint::{Color, Material};
    use crate::scene::{Layer, MeshCmd, MeshList, RecordingSink, Shape};

    fn unpaced() -> RuntimeConfig {
        RuntimeConfig::default().with_target_fps(0)
    }

    struct Counter {
        frames: u64,
        exit_after: Option<u64>,
        request_exit_after: Option<u64>,
        fail_at: Option<u64>,
        stopped: bool,
    }

    impl Counter {
        fn new() -> Self {
            Self { frames: 0, exit_after: None, request_exit_after: None, fail_at: None, stopped: false }
        }
    }

    impl App for Counter {
        fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl> {
            assert_eq!(ctx.time.frame_index, self.frames);
            if self.fail_at == Some(self.frames) {
                anyhow::bail!("boom");
            }
            self.frames += 1;
            if self.request_exit_after == Some(self.frames) {
                ctx.runtime.exit();
            }
            if self.exit_after == Some(self.frames) {
                return Ok(AppControl::Exit);
            }
            Ok(AppControl::Continue)
        }

        fn on_stop(&mut self) {
            self.stopped = true;
        }
    }

    // ── stop conditions ───────────────────────────────────────────────────

    #[test]
    fn max_frames_bounds_the_loop() {
        let mut app = Counter::new();
        let mut sink = RecordingSink::default();
        let frames = Runtime::run(unpaced().with_max_frames(5), &mut sink, &mut app).unwrap();
        assert_eq!(frames, 5);
        assert_eq!(app.frames, 5);
        assert!(app.stopped);
    }

    #[test]
    fn app_exit_stops_the_loop() {
        let mut app = Counter::new();
        app.exit_after = Some(3);
        let mut sink = RecordingSink::default();
        assert_eq!(Runtime::run(unpaced(), &mut sink, &mut app).unwrap(), 3);
    }

    #[test]
    fn runtime_exit_request_stops_the_loop() {
        let mut app = Counter::new();
        app.request_exit_after = Some(2);
        let mut sink = RecordingSink::default();
        assert_eq!(Runtime::run(unpaced(), &mut sink, &mut app).unwrap(), 2);
    }

    #[test]
    fn frame_error_aborts_and_still_stops_app() {
        let mut app = Counter::new();
        app.fail_at = Some(1);
        let mut sink = RecordingSink::default();
        let err = Runtime::run(unpaced().with_max_frames(10), &mut sink, &mut app).unwrap_err();
        assert!(format!("{err:#}").contains("boom"));
        assert!(app.stopped);
    }

    // ── render ────────────────────────────────────────────────────────────

    struct OneMesh(MeshList);

    impl App for OneMesh {
        fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl> {
            ctx.render(Color::WHITE, &mut self.0)?;
            Ok(AppControl::Continue)
        }
    }

    #[test]
    fn render_frames_reach_the_sink() {
        let mut list = MeshList::new();
        list.push(
            Layer(0),
            MeshCmd::new(Shape::Sphere { radius: 1.0 }, Transform::IDENTITY, Material::default()),
        );
        let mut app = OneMesh(list);
        let mut sink = RecordingSink::default();

        Runtime::run(unpaced().with_max_frames(4), &mut sink, &mut app).unwrap();

        assert_eq!(sink.frames(), 4);
        assert_eq!(sink.clear_color(), Some(Color::WHITE));
        assert_eq!(sink.submitted().len(), 1);
    }
}
