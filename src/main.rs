//! Cache replacement simulator CLI.
//!
//! Reads a workload file, picks a policy and a capacity (from flags, or by
//! prompting on stdin when a flag is missing), then replays the workload
//! and prints a trace of every access followed by the hit rate.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cachesim::common::config::{MAX_CACHE_CAPACITY, MIN_CACHE_CAPACITY};
use cachesim::{PolicyKind, Simulator, Workload};

const RULE: &str = "---------------------------------------------";

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Cache replacement simulator (FIFO, LRU, LFU)",
    long_about = "Replay a sequence of address accesses through a FIFO, LRU or LFU cache.\n\nThe workload file holds one address per whitespace-separated token.\nPolicy and capacity are prompted for on stdin when not given as flags.\n\nExamples:\n  cachesim trace.txt\n  cachesim trace.txt -d\n  cachesim trace.txt --policy lru --capacity 4"
)]
struct Cli {
    /// Workload file: one address per whitespace-separated token.
    workload: PathBuf,

    /// Also count accesses and hits per address.
    #[arg(short, long)]
    detailed: bool,

    /// Replacement policy: fifo, lru or lfu.
    #[arg(short, long)]
    policy: Option<PolicyKind>,

    /// Cache capacity, in [1, 256].
    #[arg(short, long, value_parser = parse_capacity)]
    capacity: Option<usize>,

    /// Print only the final report.
    #[arg(short, long)]
    quiet: bool,

    /// Log policy decisions to stderr (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    let capacity: usize = s
        .parse()
        .map_err(|_| format!("{:?} is not a positive integer", s))?;
    if !(MIN_CACHE_CAPACITY..=MAX_CACHE_CAPACITY).contains(&capacity) {
        return Err(format!(
            "capacity must be in [{}, {}]",
            MIN_CACHE_CAPACITY, MAX_CACHE_CAPACITY
        ));
    }
    Ok(capacity)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Read one trimmed line, failing on end of input.
fn read_answer(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed before a selection was made",
        ));
    }
    Ok(line.trim().to_string())
}

fn prompt_policy(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<PolicyKind> {
    loop {
        writeln!(out, "Select the cache to simulate: ")?;
        write!(out, " 1-FIFO Cache; 2-LRU Cache; 3-LFU Cache.\n Option: ")?;
        out.flush()?;

        let answer = read_answer(input)?;
        match answer.parse().ok().and_then(PolicyKind::from_option) {
            Some(kind) => return Ok(kind),
            None => writeln!(out, "You can only select option 1-3.")?,
        }
    }
}

fn prompt_capacity(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<usize> {
    loop {
        write!(
            out,
            "Select cache size to simulate (positive integer in [{},{}]): ",
            MIN_CACHE_CAPACITY, MAX_CACHE_CAPACITY
        )?;
        out.flush()?;

        match parse_capacity(&read_answer(input)?) {
            Ok(capacity) => return Ok(capacity),
            Err(_) => writeln!(
                out,
                "You can only select a size in [{},{}].",
                MIN_CACHE_CAPACITY, MAX_CACHE_CAPACITY
            )?,
        }
    }
}

fn run(cli: Cli) -> cachesim::Result<()> {
    // Load first so a bad path fails before any prompting
    let workload = Workload::from_path(&cli.workload)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let policy = match cli.policy {
        Some(policy) => policy,
        None => prompt_policy(&mut input, &mut out)?,
    };
    let capacity = match cli.capacity {
        Some(capacity) => capacity,
        None => prompt_capacity(&mut input, &mut out)?,
    };

    let mut sim = Simulator::new(policy, capacity, cli.detailed)?;

    writeln!(out, "Simulating a {} Cache of size {}.", policy, capacity)?;
    writeln!(out, "{}", RULE)?;

    let mut write_result = Ok(());
    let report = sim.run(&workload, |trace| {
        if cli.quiet || write_result.is_err() {
            return;
        }
        write_result = writeln!(out, "{}\n{}", trace, RULE);
    });
    write_result?;

    writeln!(out, "{}", report)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("cachesim: {}", err);
        process::exit(1);
    }
}
