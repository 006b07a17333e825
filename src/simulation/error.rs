use thiserror::Error;

use crate::common::types::PageNumber;
use crate::memory::error::MemoryError;
use crate::memory::replacer::Policy;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("{policy} simulation rejected its input: {source}")]
    InvalidInput {
        policy: Policy,
        #[source]
        source: MemoryError,
    },
    #[error("{policy} simulation failed at reference {position} (page {page}): {source}")]
    AccessFailed {
        policy: Policy,
        position: usize,
        page: PageNumber,
        #[source]
        source: MemoryError,
    },
}

impl SimulationError {
    /// Policy of the run that failed
    pub fn policy(&self) -> Policy {
        match self {
            SimulationError::InvalidInput { policy, .. }
            | SimulationError::AccessFailed { policy, .. } => *policy,
        }
    }

    pub fn memory_error(&self) -> &MemoryError {
        match self {
            SimulationError::InvalidInput { source, .. }
            | SimulationError::AccessFailed { source, .. } => source,
        }
    }
}
