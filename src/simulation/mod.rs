pub mod config;
pub mod driver;
pub mod error;

pub use config::SimulatorConfig;
pub use driver::{
    count_page_faults_fifo, count_page_faults_lfu, count_page_faults_lru, SimulationReport,
    Simulator,
};
pub use error::SimulationError;
