use serde::{Deserialize, Serialize};

use crate::common::types::PageNumber;
use crate::memory::error::{Capacity, MemoryError};
use crate::memory::frame_pool::FramePool;
use crate::memory::page_table::PageTable;

/// Upper bounds on simulator inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Maximum number of page table entries
    pub max_table_size: usize,

    /// Maximum number of free frames handed to a run
    pub max_pool_size: usize,

    /// Maximum length of a reference string
    pub max_reference_len: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_table_size: 1024,
            max_pool_size: 1024,
            max_reference_len: 64 * 1024,
        }
    }
}

impl SimulatorConfig {
    /// Reject inputs larger than the configured limits
    pub fn check(
        &self,
        table: &PageTable,
        reference_string: &[PageNumber],
        pool: &FramePool,
    ) -> Result<(), MemoryError> {
        let limits = [
            (Capacity::PageTable, table.len(), self.max_table_size),
            (Capacity::FramePool, pool.len(), self.max_pool_size),
            (Capacity::ReferenceString, reference_string.len(), self.max_reference_len),
        ];

        for (what, len, max) in limits {
            if len > max {
                return Err(MemoryError::CapacityExceeded { what, len, max });
            }
        }
        Ok(())
    }
}
