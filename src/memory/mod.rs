pub mod access;
pub mod error;
pub mod frame_pool;
pub mod page_table;
pub mod replacer;

pub use access::{Access, AccessProcessor};
pub use error::{Capacity, MemoryError};
pub use frame_pool::FramePool;
pub use page_table::{PageTable, PageTableEntry, ResidentPage};
pub use replacer::{Fifo, Lfu, Lru, Policy, ReplacementPolicy};
