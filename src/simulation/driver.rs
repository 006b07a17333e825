use std::collections::HashSet;

use log::{error, info};
use serde::Serialize;

use crate::common::types::{PageNumber, Timestamp};
use crate::memory::access::{Access, AccessProcessor};
use crate::memory::error::MemoryError;
use crate::memory::frame_pool::FramePool;
use crate::memory::page_table::PageTable;
use crate::memory::replacer::{Fifo, Lfu, Lru, Policy, ReplacementPolicy};
use crate::simulation::config::SimulatorConfig;
use crate::simulation::error::SimulationError;

/// Outcome of replaying one reference string under one policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub policy: Policy,
    pub references: usize,
    pub fault_count: usize,
    pub hit_count: usize,
    pub eviction_count: usize,
    /// Working copy of the page table after the last reference
    pub table: PageTable,
    /// Working copy of the frame pool after the last reference
    pub pool: FramePool,
}

/// Replays reference strings against private copies of a page table and
/// frame pool. The caller's table and pool are never modified.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Number of page faults `reference_string` causes under `policy`
    pub fn count_page_faults(
        &self,
        policy: Policy,
        table: &PageTable,
        reference_string: &[PageNumber],
        pool: &FramePool,
    ) -> Result<usize, SimulationError> {
        self.simulate(policy, table, reference_string, pool)
            .map(|report| report.fault_count)
    }

    /// Replay `reference_string` under `policy` and report what happened
    pub fn simulate(
        &self,
        policy: Policy,
        table: &PageTable,
        reference_string: &[PageNumber],
        pool: &FramePool,
    ) -> Result<SimulationReport, SimulationError> {
        match policy {
            Policy::Fifo => self.replay(AccessProcessor::new(Fifo), table, reference_string, pool),
            Policy::Lru => self.replay(AccessProcessor::new(Lru), table, reference_string, pool),
            Policy::Lfu => self.replay(AccessProcessor::new(Lfu), table, reference_string, pool),
        }
    }

    /// Run every policy on the same inputs, one report per policy
    pub fn compare(
        &self,
        table: &PageTable,
        reference_string: &[PageNumber],
        pool: &FramePool,
    ) -> Result<Vec<SimulationReport>, SimulationError> {
        Policy::ALL
            .iter()
            .map(|&policy| self.simulate(policy, table, reference_string, pool))
            .collect()
    }

    fn replay<P: ReplacementPolicy>(
        &self,
        processor: AccessProcessor<P>,
        table: &PageTable,
        reference_string: &[PageNumber],
        pool: &FramePool,
    ) -> Result<SimulationReport, SimulationError> {
        let policy = processor.policy().policy();

        self.config
            .check(table, reference_string, pool)
            .and_then(|_| check_frame_ownership(table, pool))
            .map_err(|source| {
                error!("{} simulation rejected its input: {}", policy, source);
                SimulationError::InvalidInput { policy, source }
            })?;

        let latest = table.latest_timestamp();
        let start = latest.checked_add(1).ok_or_else(|| {
            let source = MemoryError::StaleTimestamp { now: latest, latest };
            error!("{} simulation rejected its input: {}", policy, source);
            SimulationError::InvalidInput { policy, source }
        })?;

        let mut table = table.clone();
        let mut pool = pool.clone();

        let mut fault_count = 0;
        let mut hit_count = 0;
        let mut eviction_count = 0;

        for (position, &page) in reference_string.iter().enumerate() {
            let access = clock_at(start, position)
                .and_then(|now| processor.resolve(&mut table, page, &mut pool, now))
                .map_err(|source| {
                    error!(
                        "{} simulation aborted at reference {} (page {}): {}",
                        policy, position, page, source
                    );
                    SimulationError::AccessFailed {
                        policy,
                        position,
                        page,
                        source,
                    }
                })?;

            match access {
                Access::Hit(_) => hit_count += 1,
                Access::Allocated(_) => fault_count += 1,
                Access::Replaced { .. } => {
                    fault_count += 1;
                    eviction_count += 1;
                }
            }
        }

        info!(
            "{} simulation: {} references, {} faults, {} evictions",
            policy,
            reference_string.len(),
            fault_count,
            eviction_count
        );

        Ok(SimulationReport {
            policy,
            references: reference_string.len(),
            fault_count,
            hit_count,
            eviction_count,
            table,
            pool,
        })
    }
}

/// Timestamp of the reference at `position` in a run whose clock starts at `start`
fn clock_at(start: Timestamp, position: usize) -> Result<Timestamp, MemoryError> {
    Timestamp::try_from(position)
        .ok()
        .and_then(|offset| start.checked_add(offset))
        .ok_or(MemoryError::StaleTimestamp {
            now: Timestamp::MAX,
            latest: Timestamp::MAX,
        })
}

/// Every frame must be owned exactly once, either by a resident page or by the pool
fn check_frame_ownership(table: &PageTable, pool: &FramePool) -> Result<(), MemoryError> {
    let resident: HashSet<_> = table.resident_pages().map(|(_, page)| page.frame()).collect();
    match pool.frames().iter().copied().find(|frame| resident.contains(frame)) {
        Some(frame) => Err(MemoryError::DuplicateFrame { frame }),
        None => Ok(()),
    }
}

/// Page faults for `reference_string` under first-in-first-out replacement
pub fn count_page_faults_fifo(
    table: &PageTable,
    reference_string: &[PageNumber],
    pool: &FramePool,
) -> Result<usize, SimulationError> {
    Simulator::default().count_page_faults(Policy::Fifo, table, reference_string, pool)
}

/// Page faults for `reference_string` under least-recently-used replacement
pub fn count_page_faults_lru(
    table: &PageTable,
    reference_string: &[PageNumber],
    pool: &FramePool,
) -> Result<usize, SimulationError> {
    Simulator::default().count_page_faults(Policy::Lru, table, reference_string, pool)
}

/// Page faults for `reference_string` under least-frequently-used replacement
pub fn count_page_faults_lfu(
    table: &PageTable,
    reference_string: &[PageNumber],
    pool: &FramePool,
) -> Result<usize, SimulationError> {
    Simulator::default().count_page_faults(Policy::Lfu, table, reference_string, pool)
}
