//! Report module: accumulates pass timings and prints the human-readable
//! benchmark report, including the final aggregate totals per workload.

use crate::registry::RegistryTotals;
use crate::workload::{PassStats, NUM_PHASES, PHASE_NAMES};
use std::time::Duration;

/// Results from the sampled passes of one workload.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub workload_label: String,
    pub pass_durations: Vec<Duration>,
    /// Accumulated phase durations across all sampled passes.
    pub phase_totals: [Duration; NUM_PHASES],
    /// Operations per phase in a single pass (aggregate counts users
    /// visited), for throughput derivation.
    pub phase_ops: [usize; NUM_PHASES],
    /// Number of samples (for computing phase means).
    pub sample_count: usize,
    /// Aggregate totals observed after the last sampled pass.
    pub totals: RegistryTotals,
}

impl BenchResult {
    pub fn new(workload_label: &str) -> Self {
        Self {
            workload_label: workload_label.to_string(),
            pass_durations: Vec::new(),
            phase_totals: [Duration::ZERO; NUM_PHASES],
            phase_ops: [0; NUM_PHASES],
            sample_count: 0,
            totals: RegistryTotals::default(),
        }
    }

    pub fn add_sample(&mut self, total: Duration, stats: &PassStats) {
        self.pass_durations.push(total);
        for (i, &d) in stats.phase_durations.iter().enumerate() {
            self.phase_totals[i] += d;
        }
        self.phase_ops = [stats.joins, stats.appends, stats.totals.users];
        self.totals = stats.totals;
        self.sample_count += 1;
    }

    /// Mean phase duration in microseconds.
    pub fn phase_mean_us(&self, phase: usize) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        self.phase_totals[phase].as_secs_f64() * 1e6 / self.sample_count as f64
    }

    /// Phase as percentage of total mean pass time.
    pub fn phase_pct(&self, phase: usize) -> f64 {
        let total = self.mean_us();
        if total <= 0.0 {
            return 0.0;
        }
        self.phase_mean_us(phase) / total * 100.0
    }

    /// Phase throughput in operations per second.
    pub fn phase_ops_per_sec(&self, phase: usize) -> f64 {
        let mean_us = self.phase_mean_us(phase);
        if mean_us <= 0.0 {
            return 0.0;
        }
        self.phase_ops[phase] as f64 * 1e6 / mean_us
    }

    pub fn mean_us(&self) -> f64 {
        if self.pass_durations.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .pass_durations
            .iter()
            .map(|d| d.as_secs_f64() * 1e6)
            .sum();
        sum / self.pass_durations.len() as f64
    }

    pub fn percentile_us(&self, pct: f64) -> f64 {
        if self.pass_durations.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self
            .pass_durations
            .iter()
            .map(|d| d.as_secs_f64() * 1e6)
            .collect();
        sorted.sort_by(f64::total_cmp);
        let idx = ((pct / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }
}

/// Print a formatted report comparing workload results.
pub fn print_report(results: &[BenchResult]) {
    println!("\n{}", "=".repeat(80));
    println!("  Room Registry Throughput Report");
    println!("{}", "=".repeat(80));

    for result in results {
        let mean = result.mean_us();
        let p50 = result.percentile_us(50.0);
        let p95 = result.percentile_us(95.0);
        let p99 = result.percentile_us(99.0);

        println!("\n  Workload: {}", result.workload_label);
        println!("  {}", "-".repeat(60));
        println!(
            "  Mean pass:       {:>10.0}µs  ({:.2}ms)",
            mean,
            mean / 1000.0
        );
        println!("  p50:             {:>10.0}µs", p50);
        println!("  p95:             {:>10.0}µs", p95);
        println!("  p99:             {:>10.0}µs", p99);

        // Per-phase breakdown
        println!("\n  Phase breakdown (mean per pass):");
        println!(
            "  {:12} {:>12} {:>10} {:>6} {:>12}",
            "Phase", "Mean (µs)", "Mean (ms)", "% pass", "Mops/s"
        );
        println!("  {}", "-".repeat(56));
        for phase in 0..NUM_PHASES {
            println!(
                "  {:12} {:>12.0} {:>10.2} {:>5.1}% {:>12.2}",
                PHASE_NAMES[phase],
                result.phase_mean_us(phase),
                result.phase_mean_us(phase) / 1000.0,
                result.phase_pct(phase),
                result.phase_ops_per_sec(phase) / 1e6,
            );
        }

        // Final registry state, per the driver contract: room count, user
        // count, and total buffered bytes.
        println!("\n  Aggregate totals:");
        println!("  Rooms:           {:>12}", result.totals.rooms);
        println!("  Users:           {:>12}", result.totals.users);
        println!("  Input bytes:     {:>12}", result.totals.input_bytes);
    }

    println!("\n{}", "=".repeat(80));

    // Comparison table
    if results.len() >= 2 {
        println!("\n  Comparison Summary:");
        println!(
            "  {:12} {:>12} {:>12} {:>12} {:>12}",
            "Workload", "Mean (µs)", "p95 (µs)", "Join Mops/s", "App Mops/s"
        );
        println!("  {}", "-".repeat(66));
        for r in results {
            println!(
                "  {:12} {:>12.0} {:>12.0} {:>12.2} {:>12.2}",
                r.workload_label,
                r.mean_us(),
                r.percentile_us(95.0),
                r.phase_ops_per_sec(crate::workload::PHASE_JOIN) / 1e6,
                r.phase_ops_per_sec(crate::workload::PHASE_APPEND) / 1e6,
            );
        }
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::BenchResult;
    use crate::registry::RegistryTotals;
    use crate::workload::{PassStats, PHASE_APPEND, PHASE_JOIN};
    use std::time::Duration;

    fn stats_with(join_ms: u64, append_ms: u64) -> PassStats {
        let mut stats = PassStats {
            joins: 1_000,
            appends: 2_000,
            appended_bytes: 20_000,
            totals: RegistryTotals {
                rooms: 5,
                users: 100,
                input_bytes: 20_000,
            },
            ..Default::default()
        };
        stats.phase_durations[PHASE_JOIN] = Duration::from_millis(join_ms);
        stats.phase_durations[PHASE_APPEND] = Duration::from_millis(append_ms);
        stats
    }

    #[test]
    fn empty_result_reports_zeros() {
        let result = BenchResult::new("empty");
        assert_eq!(result.mean_us(), 0.0);
        assert_eq!(result.percentile_us(95.0), 0.0);
        assert_eq!(result.phase_mean_us(PHASE_JOIN), 0.0);
        assert_eq!(result.phase_ops_per_sec(PHASE_JOIN), 0.0);
    }

    #[test]
    fn mean_and_percentiles_over_samples() {
        let mut result = BenchResult::new("standard");
        result.add_sample(Duration::from_millis(10), &stats_with(4, 6));
        result.add_sample(Duration::from_millis(20), &stats_with(8, 12));

        assert_eq!(result.sample_count, 2);
        assert!((result.mean_us() - 15_000.0).abs() < 1.0);
        assert!((result.percentile_us(0.0) - 10_000.0).abs() < 1.0);
        assert!((result.percentile_us(100.0) - 20_000.0).abs() < 1.0);
    }

    #[test]
    fn phase_means_accumulate_across_samples() {
        let mut result = BenchResult::new("standard");
        result.add_sample(Duration::from_millis(10), &stats_with(4, 6));
        result.add_sample(Duration::from_millis(10), &stats_with(6, 4));

        // (4ms + 6ms) / 2 samples = 5ms mean join phase.
        assert!((result.phase_mean_us(PHASE_JOIN) - 5_000.0).abs() < 1.0);
        // 1,000 joins per pass over a 5ms mean phase = 200k joins/s.
        assert!((result.phase_ops_per_sec(PHASE_JOIN) - 200_000.0).abs() < 100.0);
    }

    #[test]
    fn add_sample_tracks_latest_totals() {
        let mut result = BenchResult::new("standard");
        result.add_sample(Duration::from_millis(10), &stats_with(4, 6));
        assert_eq!(result.totals.users, 100);
        assert_eq!(result.phase_ops[PHASE_JOIN], 1_000);
    }
}
