/// Logical page number, used directly as an index into a page table
pub type PageNumber = usize;

/// Physical frame identifier
pub type FrameId = u32;

/// Simulated clock value. Starts at 1 and increases by one per reference.
pub type Timestamp = u64;

/// Number of accesses recorded for a resident page
pub type ReferenceCount = u64;
