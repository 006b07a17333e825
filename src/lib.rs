// Page replacement simulator

pub mod common;
pub mod memory;
pub mod simulation;

// Re-export key items for convenient access
pub use memory::{
    Access, AccessProcessor, Fifo, FramePool, Lfu, Lru, MemoryError, PageTable, PageTableEntry,
    Policy, ReplacementPolicy, ResidentPage,
};
pub use memory::access::{
    process_page_access_fifo, process_page_access_lfu, process_page_access_lru,
};
pub use simulation::{
    count_page_faults_fifo, count_page_faults_lfu, count_page_faults_lru, SimulationError,
    SimulationReport, Simulator, SimulatorConfig,
};
