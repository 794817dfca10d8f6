use std::num::NonZeroUsize;
use std::ops::Range;

/// Splits the row range `[0, height)` into `workers` contiguous bands.
///
/// Band i covers rows `height·i/W .. height·(i+1)/W` under integer
/// division, so the bands tile the full range with no gaps and no
/// overlaps for every height and worker count, including heights that
/// do not divide evenly and worker counts above the height (the excess
/// bands come back empty).
#[must_use]
pub fn partition_rows(height: u32, workers: NonZeroUsize) -> Vec<Range<u32>> {
    let workers = workers.get() as u64;
    let height = u64::from(height);

    (0..workers)
        .map(|band| {
            let start = (height * band / workers) as u32;
            let end = (height * (band + 1) / workers) as u32;
            start..end
        })
        .collect()
}
