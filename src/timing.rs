//! Wall-clock timing of a single unit of work.

use std::time::{Duration, Instant};

/// Run `work` once on the calling thread and report how long it took.
///
/// The clock is monotonic. Nothing is allocated inside the timed region
/// beyond what `work` itself allocates.
#[inline]
pub fn measure<T>(work: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = work();
    let elapsed = start.elapsed();
    (output, elapsed)
}
