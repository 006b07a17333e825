use std::collections::HashSet;

use serde::Serialize;

use crate::common::types::FrameId;
use crate::memory::error::MemoryError;

/// Frames owned by the process that are not backing any page.
///
/// Frames only ever leave the pool. An evicted frame goes straight to the
/// faulting page instead of coming back here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FramePool {
    free_frames: Vec<FrameId>,
}

impl FramePool {
    pub fn new(free_frames: Vec<FrameId>) -> Result<Self, MemoryError> {
        let mut seen = HashSet::with_capacity(free_frames.len());
        for &frame in &free_frames {
            if !seen.insert(frame) {
                return Err(MemoryError::DuplicateFrame { frame });
            }
        }
        Ok(Self { free_frames })
    }

    /// A pool holding frames `0..count`
    pub fn with_frame_count(count: u32) -> Self {
        Self {
            free_frames: (0..count).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.free_frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free_frames.is_empty()
    }

    pub fn frames(&self) -> &[FrameId] {
        &self.free_frames
    }

    pub fn contains(&self, frame: FrameId) -> bool {
        self.free_frames.contains(&frame)
    }

    /// Draw a free frame
    pub(crate) fn take(&mut self) -> Option<FrameId> {
        self.free_frames.pop()
    }
}
