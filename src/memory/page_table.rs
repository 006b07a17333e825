use std::collections::HashSet;

use serde::Serialize;

use crate::common::types::{FrameId, PageNumber, ReferenceCount, Timestamp};
use crate::memory::error::MemoryError;

/// Bookkeeping for a page that currently occupies a frame.
///
/// `arrival_time <= last_access_time` and `reference_count >= 1` hold for
/// every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResidentPage {
    frame: FrameId,
    arrival_time: Timestamp,
    last_access_time: Timestamp,
    reference_count: ReferenceCount,
}

impl ResidentPage {
    /// A page that has just been faulted into `frame` at `now`
    pub fn new(frame: FrameId, now: Timestamp) -> Self {
        Self {
            frame,
            arrival_time: now,
            last_access_time: now,
            reference_count: 1,
        }
    }

    /// Rebuild the bookkeeping of a page the caller already considers resident
    pub fn restore(
        page: PageNumber,
        frame: FrameId,
        arrival_time: Timestamp,
        last_access_time: Timestamp,
        reference_count: ReferenceCount,
    ) -> Result<Self, MemoryError> {
        if arrival_time > last_access_time {
            return Err(MemoryError::InvalidEntry {
                page,
                reason: format!(
                    "arrival time {} is later than last access time {}",
                    arrival_time, last_access_time
                ),
            });
        }
        if reference_count == 0 {
            return Err(MemoryError::InvalidEntry {
                page,
                reason: "a resident page must have been referenced at least once".to_string(),
            });
        }

        Ok(Self {
            frame,
            arrival_time,
            last_access_time,
            reference_count,
        })
    }

    pub fn frame(&self) -> FrameId {
        self.frame
    }

    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    pub fn last_access_time(&self) -> Timestamp {
        self.last_access_time
    }

    pub fn reference_count(&self) -> ReferenceCount {
        self.reference_count
    }

    /// Record a hit at `now`
    pub(crate) fn touch(&mut self, now: Timestamp) {
        self.last_access_time = now;
        self.reference_count = self.reference_count.saturating_add(1);
    }
}

/// One page table slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PageTableEntry {
    #[default]
    Absent,
    Resident(ResidentPage),
}

impl PageTableEntry {
    pub fn is_resident(&self) -> bool {
        matches!(self, PageTableEntry::Resident(_))
    }

    pub fn as_resident(&self) -> Option<&ResidentPage> {
        match self {
            PageTableEntry::Resident(page) => Some(page),
            PageTableEntry::Absent => None,
        }
    }

    pub fn frame(&self) -> Option<FrameId> {
        self.as_resident().map(ResidentPage::frame)
    }
}

/// Per-process page table, indexed by logical page number.
///
/// The table also remembers the latest timestamp it has seen so that
/// accesses can be rejected when the clock does not move forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
    latest: Timestamp,
}

impl PageTable {
    /// Create a table of `size` absent entries
    pub fn new(size: usize) -> Self {
        Self {
            entries: vec![PageTableEntry::Absent; size],
            latest: 0,
        }
    }

    /// Create a table from caller-supplied entries, some of which may
    /// already be resident
    pub fn from_entries(entries: Vec<PageTableEntry>) -> Result<Self, MemoryError> {
        let mut seen = HashSet::new();
        let mut latest = 0;

        for page in entries.iter().filter_map(PageTableEntry::as_resident) {
            if !seen.insert(page.frame()) {
                return Err(MemoryError::DuplicateFrame { frame: page.frame() });
            }
            latest = latest.max(page.last_access_time());
        }

        Ok(Self { entries, latest })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PageTableEntry] {
        &self.entries
    }

    pub fn get(&self, page: PageNumber) -> Result<&PageTableEntry, MemoryError> {
        self.entries.get(page).ok_or(MemoryError::IndexOutOfRange {
            page,
            table_size: self.entries.len(),
        })
    }

    pub(crate) fn entry_mut(
        &mut self,
        page: PageNumber,
    ) -> Result<&mut PageTableEntry, MemoryError> {
        let table_size = self.entries.len();
        self.entries
            .get_mut(page)
            .ok_or(MemoryError::IndexOutOfRange { page, table_size })
    }

    /// Iterate over resident pages in page-number order
    pub fn resident_pages(&self) -> impl Iterator<Item = (PageNumber, &ResidentPage)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(page, entry)| entry.as_resident().map(|resident| (page, resident)))
    }

    pub fn resident_count(&self) -> usize {
        self.resident_pages().count()
    }

    pub fn is_resident(&self, page: PageNumber) -> Result<bool, MemoryError> {
        Ok(self.get(page)?.is_resident())
    }

    /// Frame currently backing `page`, if any. Out-of-range pages have none.
    pub fn frame_of(&self, page: PageNumber) -> Option<FrameId> {
        self.entries.get(page).and_then(PageTableEntry::frame)
    }

    /// Frame assignment of every page, indexed by page number
    pub fn frame_assignments(&self) -> Vec<Option<FrameId>> {
        self.entries.iter().map(PageTableEntry::frame).collect()
    }

    /// Latest timestamp recorded by any access, 0 if none
    pub fn latest_timestamp(&self) -> Timestamp {
        self.latest
    }

    /// Reject `now` unless it is later than every timestamp already recorded
    pub fn check_clock(&self, now: Timestamp) -> Result<(), MemoryError> {
        if now <= self.latest {
            return Err(MemoryError::StaleTimestamp {
                now,
                latest: self.latest,
            });
        }
        Ok(())
    }

    pub(crate) fn set_clock(&mut self, now: Timestamp) {
        self.latest = self.latest.max(now);
    }

    /// Reset `page` to absent, handing back the frame it occupied
    pub(crate) fn evict(&mut self, page: PageNumber) -> Option<FrameId> {
        let entry = self.entries.get_mut(page)?;
        let frame = entry.frame()?;
        *entry = PageTableEntry::Absent;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_all_absent() {
        let table = PageTable::new(4);
        assert_eq!(table.len(), 4);
        assert_eq!(table.resident_count(), 0);
        assert_eq!(table.frame_assignments(), vec![None; 4]);
        assert_eq!(table.latest_timestamp(), 0);
    }

    #[test]
    fn test_get_out_of_range() {
        let table = PageTable::new(2);
        assert_eq!(
            table.get(2),
            Err(MemoryError::IndexOutOfRange { page: 2, table_size: 2 })
        );
        assert_eq!(table.frame_of(7), None);
    }

    #[test]
    fn test_restore_rejects_inverted_timestamps() {
        let err = ResidentPage::restore(3, 0, 5, 4, 1).unwrap_err();
        assert!(matches!(err, MemoryError::InvalidEntry { page: 3, .. }));
    }

    #[test]
    fn test_restore_rejects_zero_references() {
        let err = ResidentPage::restore(1, 0, 2, 2, 0).unwrap_err();
        assert!(matches!(err, MemoryError::InvalidEntry { page: 1, .. }));
    }

    #[test]
    fn test_from_entries_tracks_latest_timestamp() {
        let entries = vec![
            PageTableEntry::Resident(ResidentPage::restore(0, 7, 1, 3, 2).unwrap()),
            PageTableEntry::Absent,
            PageTableEntry::Resident(ResidentPage::restore(2, 8, 2, 9, 4).unwrap()),
        ];
        let table = PageTable::from_entries(entries).unwrap();

        assert_eq!(table.latest_timestamp(), 9);
        assert_eq!(table.resident_count(), 2);
        assert_eq!(table.frame_assignments(), vec![Some(7), None, Some(8)]);
    }

    #[test]
    fn test_from_entries_rejects_shared_frame() {
        let entries = vec![
            PageTableEntry::Resident(ResidentPage::new(4, 1)),
            PageTableEntry::Resident(ResidentPage::new(4, 2)),
        ];
        assert_eq!(
            PageTable::from_entries(entries),
            Err(MemoryError::DuplicateFrame { frame: 4 })
        );
    }

    #[test]
    fn test_touch_updates_access_bookkeeping() {
        let mut page = ResidentPage::new(2, 5);
        page.touch(9);

        assert_eq!(page.frame(), 2);
        assert_eq!(page.arrival_time(), 5);
        assert_eq!(page.last_access_time(), 9);
        assert_eq!(page.reference_count(), 2);
    }

    #[test]
    fn test_clock_must_advance() {
        let mut table = PageTable::new(1);
        assert!(table.check_clock(3).is_ok());
        table.set_clock(3);
        assert_eq!(
            table.check_clock(3),
            Err(MemoryError::StaleTimestamp { now: 3, latest: 3 })
        );
        assert!(table.check_clock(4).is_ok());
    }

    #[test]
    fn test_evict_resets_entry() {
        let mut table = PageTable::from_entries(vec![
            PageTableEntry::Resident(ResidentPage::new(6, 1)),
            PageTableEntry::Absent,
        ])
        .unwrap();

        assert_eq!(table.evict(0), Some(6));
        assert_eq!(table.get(0), Ok(&PageTableEntry::Absent));
        assert_eq!(table.evict(1), None);
        assert_eq!(table.evict(5), None);
    }
}
