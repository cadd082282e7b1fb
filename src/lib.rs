//! In-Memory Room Registry Throughput Benchmark
//!
//! Measures the two hot operations of a room/user registry — membership
//! registration ([`registry::Registry::join_room`]) and buffered append
//! ([`registry::Registry::append_user_input`]) — plus the read-only
//! aggregation pass, at high call volume.
//!
//! Workloads replay the reference access pattern `(i % rooms, i % users)`
//! at two key-space shapes:
//! - **standard**: 17 rooms × 997 users (few rooms, heavy re-join traffic)
//! - **wide**: 977 rooms × 997 users (nearly every pair distinct)
//!
//! Run benchmarks: `cargo bench`
//! Run tests: `cargo test`
//! Run the standalone report: `cargo run --release`

pub mod registry;
pub mod report;
pub mod workload;

use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub fn initialize_logger(log_level: LevelFilter) -> Result<()> {
    const LOGGING_PATTERN: &str = "{d} {l} {f}:{L} - {m}\n";

    // Stderr only — the report itself goes to stdout.
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_level)))
                .build("stderr", Box::new(stderr)),
        )
        .build(Root::builder().appender("stderr").build(log_level))?;

    log4rs::init_config(config)?;

    Ok(())
}
