use crate::common::types::{ReferenceCount, Timestamp};
use crate::memory::page_table::ResidentPage;

use super::{Policy, ReplacementPolicy};

/// Least frequently used. Equal counts fall back to the earliest arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lfu;

impl ReplacementPolicy for Lfu {
    type Score = (ReferenceCount, Timestamp);

    fn policy(&self) -> Policy {
        Policy::Lfu
    }

    fn score(&self, page: &ResidentPage) -> Self::Score {
        (page.reference_count(), page.arrival_time())
    }
}
