//! Integration tests: run workload passes against the registry and verify
//! idempotence and totals accounting end to end.

use registry_bench::registry::Registry;
use registry_bench::workload::{
    run_append_phase, run_join_phase, run_pass, sample_payload, WorkloadParams, PHASE_AGGREGATE,
    PHASE_APPEND, PHASE_JOIN,
};

fn smoke_params() -> WorkloadParams {
    WorkloadParams::smoke()
}

#[test]
fn join_pass_populates_the_full_key_space() {
    let params = smoke_params();
    let mut registry = Registry::new();

    run_join_phase(&mut registry, &params);
    let totals = registry.aggregate();

    // join_ops exceeds the pair cycle length, so every room and every pair
    // in the cycle exists; no bytes have been appended yet.
    assert_eq!(totals.rooms, params.room_modulus as usize);
    assert_eq!(totals.users, params.distinct_pairs());
    assert_eq!(totals.input_bytes, 0);
}

#[test]
fn repeated_join_passes_leave_state_unchanged() {
    let params = smoke_params();
    let mut registry = Registry::new();

    run_join_phase(&mut registry, &params);
    let first = registry.aggregate();

    run_join_phase(&mut registry, &params);
    assert_eq!(registry.aggregate(), first);
}

#[test]
fn append_pass_without_joins_leaves_registry_empty() {
    let params = smoke_params();
    let payload = sample_payload(params.payload_len);
    let mut registry = Registry::new();

    run_append_phase(&mut registry, &params, &payload);
    let totals = registry.aggregate();

    assert_eq!(totals.rooms, 0);
    assert_eq!(totals.users, 0);
    assert_eq!(totals.input_bytes, 0);
}

#[test]
fn pass_totals_track_appended_bytes_across_passes() {
    let params = smoke_params();
    let payload = sample_payload(params.payload_len);
    let mut registry = Registry::new();

    let mut last = run_pass(&mut registry, &params, &payload);
    for _ in 0..2 {
        last = run_pass(&mut registry, &params, &payload);
    }

    // Three passes, every append landing.
    let expected_bytes = 3 * params.append_ops * params.payload_len;
    assert_eq!(last.totals.input_bytes, expected_bytes);
    assert_eq!(last.appended_bytes, params.append_ops * params.payload_len);

    // Key space is saturated after the first pass and stays put.
    assert_eq!(last.totals.rooms, params.room_modulus as usize);
    assert_eq!(last.totals.users, params.distinct_pairs());
}

#[test]
fn pass_reports_per_phase_op_counts() {
    let params = smoke_params();
    let payload = sample_payload(params.payload_len);
    let mut registry = Registry::new();

    let stats = run_pass(&mut registry, &params, &payload);

    assert_eq!(stats.joins, params.join_ops);
    assert_eq!(stats.appends, params.append_ops);
    assert_eq!(stats.phase_durations.len(), 3);
    // Every phase actually ran.
    for phase in [PHASE_JOIN, PHASE_APPEND, PHASE_AGGREGATE] {
        assert!(stats.phase_durations[phase] > std::time::Duration::ZERO);
    }
}

#[test]
fn empty_payload_pass_grows_no_buffers() {
    let params = smoke_params();
    let payload = sample_payload(0);
    let mut registry = Registry::new();

    let stats = run_pass(&mut registry, &params, &payload);

    assert_eq!(stats.appended_bytes, 0);
    assert_eq!(stats.totals.input_bytes, 0);
    assert_eq!(stats.totals.users, params.distinct_pairs());
}
