use anyhow::{Context, Result};

use crate::paint::Color;
use crate::runtime::RuntimeCtx;
use crate::scene::{MeshList, SceneSink};
use crate::time::FrameTime;

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub time: FrameTime,
    pub sink: &'a mut dyn SceneSink,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a> FrameCtx<'a> {
    /// Hands `scene` to the sink as one frame cleared to `clear`.
    ///
    /// Call after every transform for the frame has been written; the sink sees the
    /// scene exactly as it is at this point.
    pub fn render(&mut self, clear: Color, scene: &mut MeshList) -> Result<()> {
        self.sink.begin_frame(clear);
        scene.submit_to(&mut *self.sink);
        self.sink
            .end_frame()
            .with_context(|| format!("scene sink failed to finish frame {}", self.time.frame_index))
    }
}
