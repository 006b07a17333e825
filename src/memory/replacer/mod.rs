use std::fmt;

use serde::Serialize;

use crate::common::types::PageNumber;
use crate::memory::page_table::{PageTable, ResidentPage};

mod fifo;
mod lfu;
mod lru;

pub use fifo::Fifo;
pub use lfu::Lfu;
pub use lru::Lru;

/// Eviction policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Policy {
    Fifo,
    Lru,
    Lfu,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Lfu];
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Lru => write!(f, "LRU"),
            Policy::Lfu => write!(f, "LFU"),
        }
    }
}

/// A victim-selection rule.
///
/// Policies differ only in how they score a resident page: the page with the
/// lowest score is evicted, and among equal scores the lowest page number wins.
pub trait ReplacementPolicy {
    type Score: Ord;

    fn policy(&self) -> Policy;

    fn score(&self, page: &ResidentPage) -> Self::Score;

    /// Pick the resident page to evict, or `None` if nothing is resident
    fn victim(&self, table: &PageTable) -> Option<PageNumber> {
        table
            .resident_pages()
            .min_by_key(|(_, page)| self.score(page))
            .map(|(page_number, _)| page_number)
    }
}
