//! Standalone benchmark runner that prints the formatted report.
//!
//! Runs the standard (17×997) and wide (977×997) workloads back to back
//! against fresh registries, each with warmup passes before sampling. The
//! warmup passes also put later join phases on the already-present fast
//! path, which is the hot case the registry is sized for.
//!
//! Usage:
//!   cargo run --release

use anyhow::Result;
use log::LevelFilter;
use registry_bench::initialize_logger;
use registry_bench::registry::Registry;
use registry_bench::report::{print_report, BenchResult};
use registry_bench::workload::{run_pass, sample_payload, WorkloadParams};
use std::time::Instant;

const WARMUP_PASSES: u32 = 1;
const SAMPLE_PASSES: u32 = 5;

fn bench_workload(label: &str, params: &WorkloadParams) -> BenchResult {
    let payload = sample_payload(params.payload_len);
    let mut registry = Registry::new();

    // Warmup
    for _ in 0..WARMUP_PASSES {
        run_pass(&mut registry, params, &payload);
    }

    // Collect samples
    let mut result = BenchResult::new(label);
    for _ in 0..SAMPLE_PASSES {
        let start = Instant::now();
        let stats = run_pass(&mut registry, params, &payload);
        result.add_sample(start.elapsed(), &stats);
    }

    result
}

fn main() -> Result<()> {
    initialize_logger(LevelFilter::Info)?;

    log::info!("Starting room registry throughput benchmark");
    log::info!("Warmup passes: {WARMUP_PASSES}, sample passes: {SAMPLE_PASSES}");

    let workloads = [
        ("standard", WorkloadParams::standard()),
        ("wide", WorkloadParams::wide()),
    ];

    let mut results = Vec::new();
    for (label, params) in &workloads {
        eprint!(
            "  Benchmarking {label} ({}×{} key space, {} joins + {} appends per pass)...",
            params.room_modulus, params.user_modulus, params.join_ops, params.append_ops
        );
        let r = bench_workload(label, params);
        eprintln!(" done ({:.2}ms mean)", r.mean_us() / 1000.0);
        results.push(r);
    }

    print_report(&results);

    Ok(())
}
