use std::fmt;

use thiserror::Error;

use crate::common::types::{FrameId, PageNumber, Timestamp};

/// Which bounded input exceeded its configured maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    PageTable,
    FramePool,
    ReferenceString,
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::PageTable => write!(f, "page table"),
            Capacity::FramePool => write!(f, "frame pool"),
            Capacity::ReferenceString => write!(f, "reference string"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Page {page} is out of range for a table of {table_size} entries")]
    IndexOutOfRange { page: PageNumber, table_size: usize },
    #[error("No victim available to back page {page}: frame pool is empty and no page is resident")]
    NoVictimAvailable { page: PageNumber },
    #[error("{what} length {len} exceeds the configured maximum of {max}")]
    CapacityExceeded { what: Capacity, len: usize, max: usize },
    #[error("Timestamp {now} is not later than the latest recorded timestamp {latest}")]
    StaleTimestamp { now: Timestamp, latest: Timestamp },
    #[error("Invalid entry for page {page}: {reason}")]
    InvalidEntry { page: PageNumber, reason: String },
    #[error("Frame {frame} is assigned more than once")]
    DuplicateFrame { frame: FrameId },
}
