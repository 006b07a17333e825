use log::{debug, trace};

use crate::common::types::{FrameId, PageNumber, Timestamp};
use crate::memory::error::MemoryError;
use crate::memory::frame_pool::FramePool;
use crate::memory::page_table::{PageTable, PageTableEntry, ResidentPage};
use crate::memory::replacer::{Fifo, Lfu, Lru, ReplacementPolicy};

/// How a page reference was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident
    Hit(FrameId),
    /// Page fault served from the free frame pool
    Allocated(FrameId),
    /// Page fault served by evicting `victim` and reusing its frame
    Replaced { frame: FrameId, victim: PageNumber },
}

impl Access {
    pub fn frame(&self) -> FrameId {
        match *self {
            Access::Hit(frame) | Access::Allocated(frame) => frame,
            Access::Replaced { frame, .. } => frame,
        }
    }

    pub fn is_fault(&self) -> bool {
        !matches!(self, Access::Hit(_))
    }
}

/// Resolves page references against a page table and frame pool, evicting
/// according to policy `P` when the pool runs dry.
#[derive(Debug, Clone, Default)]
pub struct AccessProcessor<P> {
    policy: P,
}

impl<P: ReplacementPolicy> AccessProcessor<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Find the frame backing `page` at time `now`, faulting it in if needed.
    ///
    /// Nothing is mutated when an error is returned.
    pub fn resolve(
        &self,
        table: &mut PageTable,
        page: PageNumber,
        pool: &mut FramePool,
        now: Timestamp,
    ) -> Result<Access, MemoryError> {
        table.get(page)?;
        table.check_clock(now)?;

        if let PageTableEntry::Resident(resident) = table.entry_mut(page)? {
            resident.touch(now);
            let frame = resident.frame();
            table.set_clock(now);
            trace!("{} hit: page {} in frame {}", self.policy.policy(), page, frame);
            return Ok(Access::Hit(frame));
        }

        let access = match pool.take() {
            Some(frame) => Access::Allocated(frame),
            None => {
                let victim = self
                    .policy
                    .victim(table)
                    .ok_or(MemoryError::NoVictimAvailable { page })?;
                let frame = table
                    .evict(victim)
                    .ok_or(MemoryError::NoVictimAvailable { page })?;
                debug!(
                    "{} evicted page {} from frame {} for page {}",
                    self.policy.policy(),
                    victim,
                    frame,
                    page
                );
                Access::Replaced { frame, victim }
            }
        };

        *table.entry_mut(page)? = PageTableEntry::Resident(ResidentPage::new(access.frame(), now));
        table.set_clock(now);

        Ok(access)
    }
}

/// Resolve one reference under first-in-first-out replacement
pub fn process_page_access_fifo(
    table: &mut PageTable,
    page: PageNumber,
    pool: &mut FramePool,
    now: Timestamp,
) -> Result<FrameId, MemoryError> {
    AccessProcessor::new(Fifo)
        .resolve(table, page, pool, now)
        .map(|access| access.frame())
}

/// Resolve one reference under least-recently-used replacement
pub fn process_page_access_lru(
    table: &mut PageTable,
    page: PageNumber,
    pool: &mut FramePool,
    now: Timestamp,
) -> Result<FrameId, MemoryError> {
    AccessProcessor::new(Lru)
        .resolve(table, page, pool, now)
        .map(|access| access.frame())
}

/// Resolve one reference under least-frequently-used replacement
pub fn process_page_access_lfu(
    table: &mut PageTable,
    page: PageNumber,
    pool: &mut FramePool,
    now: Timestamp,
) -> Result<FrameId, MemoryError> {
    AccessProcessor::new(Lfu)
        .resolve(table, page, pool, now)
        .map(|access| access.frame())
}
