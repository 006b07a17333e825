use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use pagesim::{FramePool, PageTable, Policy, SimulationReport, Simulator, SimulatorConfig};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Replay a page reference string under FIFO, LRU and LFU replacement"
)]
struct Cli {
    /// Number of physical frames available to the process
    #[arg(short, long, default_value_t = 3)]
    frames: u32,

    /// Page table size (defaults to the largest referenced page + 1)
    #[arg(short, long)]
    pages: Option<usize>,

    /// Replacement policy to simulate
    #[arg(long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Maximum accepted page table size
    #[arg(long, default_value_t = SimulatorConfig::default().max_table_size)]
    max_pages: usize,

    /// Maximum accepted number of frames
    #[arg(long, default_value_t = SimulatorConfig::default().max_pool_size)]
    max_frames: usize,

    /// Maximum accepted reference string length
    #[arg(long, default_value_t = SimulatorConfig::default().max_reference_len)]
    max_references: usize,

    /// Logical page numbers, in reference order
    #[arg(required = true)]
    references: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Fifo,
    Lru,
    Lfu,
    All,
}

impl PolicyArg {
    fn policies(self) -> Vec<Policy> {
        match self {
            PolicyArg::Fifo => vec![Policy::Fifo],
            PolicyArg::Lru => vec![Policy::Lru],
            PolicyArg::Lfu => vec![Policy::Lfu],
            PolicyArg::All => Policy::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let size = table_size(cli.pages, &cli.references)?;
    let simulator = Simulator::new(simulator_config(&cli));
    let table = PageTable::new(size);
    let pool = FramePool::with_frame_count(cli.frames);

    let reports = cli
        .policy
        .policies()
        .into_iter()
        .map(|policy| simulator.simulate(policy, &table, &cli.references, &pool))
        .collect::<Result<Vec<_>, _>>()
        .context("simulation failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        display_reports(&reports, cli.frames);
    }

    Ok(())
}

/// Table size to simulate, checked against the largest referenced page
fn table_size(pages: Option<usize>, references: &[usize]) -> Result<usize> {
    let largest = references.iter().copied().max().unwrap_or(0);
    let size = match pages {
        Some(pages) => pages,
        None => match largest.checked_add(1) {
            Some(size) => size,
            None => bail!("page {} is too large to simulate", largest),
        },
    };
    if size <= largest {
        bail!("page {} does not fit in a table of {} pages", largest, size);
    }
    Ok(size)
}

fn simulator_config(cli: &Cli) -> SimulatorConfig {
    SimulatorConfig {
        max_table_size: cli.max_pages,
        max_pool_size: cli.max_frames,
        max_reference_len: cli.max_references,
    }
}

fn display_reports(reports: &[SimulationReport], frames: u32) {
    println!(
        "| {:<6} | {:>10} | {:>6} | {:>4} | {:>9} |",
        "policy", "references", "faults", "hits", "evictions"
    );
    println!("+{:-<8}+{:-<12}+{:-<8}+{:-<6}+{:-<11}+", "", "", "", "", "");
    for report in reports {
        println!(
            "| {:<6} | {:>10} | {:>6} | {:>4} | {:>9} |",
            report.policy.to_string(),
            report.references,
            report.fault_count,
            report.hit_count,
            report.eviction_count
        );
    }
    println!("({} frames)", frames);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size_defaults_to_largest_page() {
        assert_eq!(table_size(None, &[3, 9, 1]).unwrap(), 10);
        assert_eq!(table_size(Some(12), &[3, 9, 1]).unwrap(), 12);
        assert!(table_size(Some(9), &[3, 9, 1]).is_err());
    }

    #[test]
    fn test_table_size_rejects_largest_usize() {
        assert!(table_size(None, &[0, usize::MAX]).is_err());
    }

    #[test]
    fn test_frame_limit_applies_to_cli_runs() {
        let cli = Cli::try_parse_from(["pagesim", "--frames", "8", "--max-frames", "4", "1", "2"])
            .unwrap();
        let simulator = Simulator::new(simulator_config(&cli));
        let table = PageTable::new(table_size(cli.pages, &cli.references).unwrap());
        let pool = FramePool::with_frame_count(cli.frames);

        let err = simulator
            .simulate(Policy::Fifo, &table, &cli.references, &pool)
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("frame pool length 8 exceeds the configured maximum of 4"));
    }

    #[test]
    fn test_default_limits_match_library_defaults() {
        let cli = Cli::try_parse_from(["pagesim", "1"]).unwrap();
        assert_eq!(simulator_config(&cli), SimulatorConfig::default());
    }
}
