use crate::common::types::Timestamp;
use crate::memory::page_table::ResidentPage;

use super::{Policy, ReplacementPolicy};

/// First-in-first-out: evict the page that has been resident longest
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl ReplacementPolicy for Fifo {
    type Score = Timestamp;

    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn score(&self, page: &ResidentPage) -> Timestamp {
        page.arrival_time()
    }
}
