use crate::common::types::Timestamp;
use crate::memory::page_table::ResidentPage;

use super::{Policy, ReplacementPolicy};

/// Least recently used, approximated with explicit access timestamps
#[derive(Debug, Clone, Copy, Default)]
pub struct Lru;

impl ReplacementPolicy for Lru {
    type Score = Timestamp;

    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn score(&self, page: &ResidentPage) -> Timestamp {
        page.last_access_time()
    }
}
