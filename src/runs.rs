use std::fmt::Debug;

use itertools::Itertools;
use num::traits::CheckedNeg;
use tracing::{debug, info};

use crate::{
    error::{InvalidArgument, RunResult},
    windows::IterExt,
};

/// Parameters of a run search. The defaults look for runs of 3 numbers
/// going up or down by 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunQuery {
    pub step: i64,
    pub window_size: usize,
}

impl Default for RunQuery {
    fn default() -> Self {
        Self {
            step: 1,
            window_size: 3,
        }
    }
}

impl RunQuery {
    pub fn find<T>(&self, sequence: &[T]) -> RunResult<Option<Vec<usize>>>
    where
        T: Copy + Into<i128> + Debug,
    {
        find_consecutive_runs(sequence, self.step, self.window_size)
    }
}

/// True if every diff is `step`, or every diff is `-step`. A mix of the
/// two is not a run.
pub fn is_uniform_step<T>(diffs: &[T], step: T) -> RunResult<bool>
where
    T: Copy + PartialEq + CheckedNeg,
{
    // `all` is vacuously true on nothing, so an empty set has to be
    // rejected up front
    if diffs.is_empty() {
        return Err(InvalidArgument::EmptyDifferences);
    }

    let ascending = diffs.iter().all(|&diff| diff == step);
    let descending = diffs.iter().all(|diff| diff.checked_neg() == Some(step));

    Ok(ascending || descending)
}

/// Pairwise differences of a window, widened so that no pair of 64 bit
/// integers can overflow.
fn differences<T: Copy + Into<i128>>(window: &[T]) -> Vec<i128> {
    window
        .iter()
        .map(|&item| -> i128 { item.into() })
        .streaming_windows()
        .map(|[a, b]| b - a)
        .collect()
}

/// Find the start index of every window of `window_size` consecutive
/// items in `sequence` that steps uniformly up or down by `step`.
///
/// Returns `Ok(None)` rather than an empty list when nothing qualifies,
/// including when `sequence` is too short to hold a single window.
pub fn find_consecutive_runs<T>(
    sequence: &[T],
    step: i64,
    window_size: usize,
) -> RunResult<Option<Vec<usize>>>
where
    T: Copy + Into<i128> + Debug,
{
    if window_size < 2 {
        return Err(InvalidArgument::WindowTooSmall(window_size));
    }

    if sequence.len() < window_size {
        info!(
            len = sequence.len(),
            window_size, "input is shorter than one window"
        );
        return Ok(None);
    }

    let step = i128::from(step);

    let runs = sequence
        .iter()
        .copied()
        .sized_windows(window_size)
        .map(|window| is_uniform_step(&differences(&window), step))
        .use_oks(|checks| {
            checks
                .positions(|is_run| is_run)
                .inspect(|&start| {
                    debug!(start, window = ?&sequence[start..start + window_size], "found run")
                })
                .collect_vec()
        })?;

    if runs.is_empty() {
        Ok(None)
    } else {
        Ok(Some(runs))
    }
}
