// Wall-clock timing of a repeated operation.

use std::hint::black_box;
use std::time::Instant;

/// Runs `op` `loops` times back to back and returns the total elapsed
/// wall-clock time in seconds.
///
/// Each result goes through `black_box` so the work can't be discarded.
pub fn timeit<T, F: FnMut() -> T>(loops: u64, mut op: F) -> f64 {
    let start = Instant::now();
    for _ in 0..loops {
        black_box(op());
    }
    start.elapsed().as_secs_f64()
}
