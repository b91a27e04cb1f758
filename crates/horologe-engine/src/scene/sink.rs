use anyhow::Result;

use crate::paint::Color;

use super::{MeshHandle, MeshItem};

/// Write-only consumer of a scene, implemented by whatever actually draws.
///
/// Per frame the caller issues `begin_frame`, one `submit` per mesh in paint order,
/// then `end_frame`. Sinks must not assume the scene changes between frames, and the
/// scene never reads anything back from a sink.
pub trait SceneSink {
    /// Starts a frame cleared to `clear`.
    fn begin_frame(&mut self, clear: Color) {
        let _ = clear;
    }

    /// Receives one mesh. `handle` identifies the mesh across frames.
    fn submit(&mut self, handle: MeshHandle, item: &MeshItem);

    /// Finishes the frame (present, flush, ...).
    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sink that keeps a copy of the most recent frame.
///
/// Useful for tests and for replaying a frame into a real renderer later.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    clear: Option<Color>,
    items: Vec<(MeshHandle, MeshItem)>,
    frames: u64,
}

impl RecordingSink {
    #[inline]
    pub fn clear_color(&self) -> Option<Color> {
        self.clear
    }

    /// Items of the current (or last finished) frame, in submission order.
    #[inline]
    pub fn submitted(&self) -> &[(MeshHandle, MeshItem)] {
        &self.items
    }

    /// Number of frames that reached `end_frame`.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl SceneSink for RecordingSink {
    fn begin_frame(&mut self, clear: Color) {
        self.clear = Some(clear);
        self.items.clear();
    }

    fn submit(&mut self, handle: MeshHandle, item: &MeshItem) {
        self.items.push((handle, item.clone()));
    }

    fn end_frame(&mut self) -> Result<()> {
        self.frames += 1;
        Ok(())
    }
}
