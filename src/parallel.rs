//! Row-parallel iteration over tightly packed buffers.
//!
//! With the `parallel` feature (default) rows are distributed over the rayon
//! pool; otherwise they run in order on the calling thread. Each closure call
//! owns exactly one output row, so there is no cross-row data dependency.
#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub(crate) fn for_each_row<T, F>(data: &mut [T], width: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    if width == 0 || data.is_empty() {
        return;
    }
    #[cfg(feature = "parallel")]
    {
        data.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        data.chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}
