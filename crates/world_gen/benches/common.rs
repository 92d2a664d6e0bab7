#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};

/// Square arena edge lengths exercised by every bench group.
pub const ARENA_SIZES: [i32; 3] = [64, 128, 256];

/// Whole runs are short and mostly deterministic, so fewer samples over a
/// longer window give stable numbers.
pub fn world_gen_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(30)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
        .noise_threshold(0.03)
}

/// Throughput in height-field cells, including the extra sampling row.
pub fn field_cells(width: usize, height: usize) -> Throughput {
    Throughput::Elements((width * (height + 1)).max(1) as u64)
}

/// Throughput in spawner calls.
pub fn spawn_calls(count: usize) -> Throughput {
    Throughput::Elements(count.max(1) as u64)
}
