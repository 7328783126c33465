//! Sequential or fork-join iteration over rectangular `(row, col)` ranges.
//!
//! Every whole-matrix operation in this crate funnels its loop through this
//! module. The decision to go parallel is made by [`is_parallelizable()`],
//! which consults a per-thread [`ParallelEnabled`] mode:
//!
//! - [`ParallelEnabled::Yes`] - always split the loop across rayon tasks.
//! - [`ParallelEnabled::No`] - never split.
//! - [`ParallelEnabled::Default`] - split only if the work is at least
//!   [`PARALLEL_THRESHOLD`] cells.
//!
//! The mode is thread-local, so overriding it (e.g. in a test) cannot leak
//! into code running on other threads. Use [`ParallelGuard`] or
//! [`with_parallel_enabled()`] to override it for a scope.
//!
//! Parallelism never changes the result of a matrix operation: tasks write
//! disjoint cells, and every buffer is assembled in row-major order whichever
//! axis was split.

use std::cell::{Cell};
use std::sync::{Mutex};

use rayon::prelude::*;

use super::{MatrixError, Result, Shape};

/// Whether whole-matrix loops may run in parallel.
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ParallelEnabled {
    /// Always run in parallel.
    Yes,
    /// Always run sequentially.
    No,
    /// Run in parallel only above [`PARALLEL_THRESHOLD`] cells.
    #[default]
    Default,
}

/// Under [`ParallelEnabled::Default`], the number of cells (times the
/// multiplier passed to [`is_parallelizable_by()`]) at which loops go
/// parallel.
pub const PARALLEL_THRESHOLD: usize = 8192;

thread_local! {
    static PARALLEL_ENABLED: Cell<ParallelEnabled> = const { Cell::new(ParallelEnabled::Default) };
}

/// Returns the current thread's mode.
pub fn parallel_enabled() -> ParallelEnabled {
    PARALLEL_ENABLED.with(Cell::get)
}

/// Sets the current thread's mode and returns the previous one.
///
/// Prefer [`ParallelGuard`], which restores the previous mode automatically.
pub fn set_parallel_enabled(mode: ParallelEnabled) -> ParallelEnabled {
    let old = PARALLEL_ENABLED.with(|cell| cell.replace(mode));
    if old != mode { log::debug!("Parallel mode changed from {:?} to {:?}", old, mode); }
    old
}

/// Overrides the current thread's [`ParallelEnabled`] mode until dropped.
///
/// ```
/// use gridmat::parallel::{self, ParallelEnabled, ParallelGuard};
/// assert_eq!(parallel::parallel_enabled(), ParallelEnabled::Default);
/// {
///     let _guard = ParallelGuard::new(ParallelEnabled::No);
///     assert_eq!(parallel::parallel_enabled(), ParallelEnabled::No);
/// }
/// assert_eq!(parallel::parallel_enabled(), ParallelEnabled::Default);
/// ```
#[must_use = "the mode is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ParallelGuard {
    previous: ParallelEnabled,
}

impl ParallelGuard {
    /// Sets the current thread's mode to `mode`.
    pub fn new(mode: ParallelEnabled) -> Self {
        Self {previous: set_parallel_enabled(mode)}
    }

    /// The mode that will be restored on drop.
    pub fn previous(&self) -> ParallelEnabled { self.previous }
}

impl Drop for ParallelGuard {
    fn drop(&mut self) { set_parallel_enabled(self.previous); }
}

/// Calls `f` with the current thread's mode set to `mode`, then restores the
/// previous mode, even if `f` panics.
pub fn with_parallel_enabled<R>(mode: ParallelEnabled, f: impl FnOnce() -> R) -> R {
    let _guard = ParallelGuard::new(mode);
    f()
}

/// Equivalent to `is_parallelizable_by(m, 1)`.
pub fn is_parallelizable(m: &impl Shape) -> bool { is_parallelizable_by(m, 1) }

/// Decides whether a loop over every cell of `m`, costing roughly
/// `multiplier` units per cell, should run in parallel.
pub fn is_parallelizable_by(m: &impl Shape, multiplier: usize) -> bool {
    match parallel_enabled() {
        ParallelEnabled::Yes => true,
        ParallelEnabled::No => false,
        ParallelEnabled::Default => m.count().saturating_mul(multiplier) >= PARALLEL_THRESHOLD,
    }
}

// ----------------------------------------------------------------------------

/// Equivalent to `run_range(0, rows, 0, cols, op, in_parallel)`, which
/// cannot fail.
pub fn run(rows: usize, cols: usize, op: impl Fn(usize, usize) + Sync + Send, in_parallel: bool) {
    run_inner(0..rows, 0..cols, &op, in_parallel);
}

/// Calls `op(i, j)` for every `i` in `from_row..to_row` and `j` in
/// `from_col..to_col`.
///
/// Sequentially, the outer loop is over rows if there are no more rows than
/// columns, and over columns otherwise. In parallel, the longer axis is split
/// across tasks and each task walks the shorter axis. This call blocks until
/// every task has finished; a panic in any task is re-raised here.
///
/// ```
/// use std::sync::Mutex;
/// use gridmat::parallel;
/// let seen = Mutex::new(Vec::new());
/// parallel::run_range(1, 3, 1, 3, |i, j| seen.lock().unwrap().push((i, j)), false).unwrap();
/// assert_eq!(seen.into_inner().unwrap(), [(1, 1), (1, 2), (2, 1), (2, 2)]);
/// ```
pub fn run_range(
    from_row: usize, to_row: usize,
    from_col: usize, to_col: usize,
    op: impl Fn(usize, usize) + Sync + Send,
    in_parallel: bool,
) -> Result<()> {
    check_ranges(from_row, to_row, from_col, to_col)?;
    run_inner(from_row..to_row, from_col..to_col, &op, in_parallel);
    Ok(())
}

/// Like [`run_range()`], but `op` can fail.
///
/// Every cell is attempted even after a failure. The first error observed is
/// returned; in parallel, "first" means first to be recorded.
pub fn try_run_range<E: Send>(
    from_row: usize, to_row: usize,
    from_col: usize, to_col: usize,
    op: impl Fn(usize, usize) -> std::result::Result<(), E> + Sync + Send,
    in_parallel: bool,
) -> Result<std::result::Result<(), E>> {
    check_ranges(from_row, to_row, from_col, to_col)?;
    let first_error = Mutex::new(None);
    run_inner(from_row..to_row, from_col..to_col, &|i, j| {
        if let Err(e) = op(i, j) {
            let mut first_error = first_error.lock().unwrap_or_else(|e| e.into_inner());
            if first_error.is_none() { *first_error = Some(e); }
        }
    }, in_parallel);
    let first_error = first_error.into_inner().unwrap_or_else(|e| e.into_inner());
    Ok(first_error.map_or(Ok(()), Err))
}

fn check_ranges(from_row: usize, to_row: usize, from_col: usize, to_col: usize) -> Result<()> {
    if from_row > to_row || from_col > to_col {
        return Err(MatrixError::OutOfBounds(format!(
            "reversed range {}..{} x {}..{}", from_row, to_row, from_col, to_col,
        )));
    }
    Ok(())
}

fn run_inner(
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
    op: &(impl Fn(usize, usize) + Sync + Send),
    in_parallel: bool,
) {
    if rows.is_empty() || cols.is_empty() { return; }
    let rows_outer = if in_parallel { rows.len() >= cols.len() } else { rows.len() <= cols.len() };
    log::trace!(
        "run {}x{} parallel={} rows_outer={}",
        rows.len(), cols.len(), in_parallel, rows_outer,
    );
    if in_parallel {
        if rows_outer {
            rows.into_par_iter().for_each(|i| cols.clone().for_each(|j| op(i, j)));
        } else {
            cols.into_par_iter().for_each(|j| rows.clone().for_each(|i| op(i, j)));
        }
    } else if rows_outer {
        for i in rows { for j in cols.clone() { op(i, j); } }
    } else {
        for j in cols { for i in rows.clone() { op(i, j); } }
    }
}

// ----------------------------------------------------------------------------

/// Equivalent to `call_range(0, rows, 0, cols, f, in_parallel)`, which
/// cannot fail.
pub fn call<R: Send>(
    rows: usize, cols: usize,
    f: impl Fn(usize, usize) -> R + Sync + Send,
    in_parallel: bool,
) -> Vec<R> {
    call_inner(0..rows, 0..cols, &f, in_parallel)
}

/// Collects `f(i, j)` for every cell of a region.
///
/// The loop is partitioned exactly as in [`run_range()`]. Each partition
/// (one index of the outer axis) collects into its own buffer, and the
/// buffers are concatenated in outer-axis order. Consequently the result is
/// row-major when rows are the outer axis, and column-major otherwise.
///
/// ```
/// use gridmat::parallel;
/// let cells = parallel::call_range(0, 2, 0, 3, |i, j| 10 * i + j, false).unwrap();
/// assert_eq!(cells, [0, 1, 2, 10, 11, 12]);
/// ```
pub fn call_range<R: Send>(
    from_row: usize, to_row: usize,
    from_col: usize, to_col: usize,
    f: impl Fn(usize, usize) -> R + Sync + Send,
    in_parallel: bool,
) -> Result<Vec<R>> {
    check_ranges(from_row, to_row, from_col, to_col)?;
    Ok(call_inner(from_row..to_row, from_col..to_col, &f, in_parallel))
}

fn call_inner<R: Send>(
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
    f: &(impl Fn(usize, usize) -> R + Sync + Send),
    in_parallel: bool,
) -> Vec<R> {
    if rows.is_empty() || cols.is_empty() { return Vec::new(); }
    let rows_outer = if in_parallel { rows.len() >= cols.len() } else { rows.len() <= cols.len() };
    match (in_parallel, rows_outer) {
        (true, true) => rows.into_par_iter()
            .flat_map_iter(|i| cols.clone().map(move |j| f(i, j)))
            .collect(),
        (true, false) => cols.into_par_iter()
            .flat_map_iter(|j| rows.clone().map(move |i| f(i, j)))
            .collect(),
        (false, true) => rows.flat_map(|i| cols.clone().map(move |j| f(i, j))).collect(),
        (false, false) => cols.flat_map(|j| rows.clone().map(move |i| f(i, j))).collect(),
    }
}

// ----------------------------------------------------------------------------

/// Drives the `i, j, k` loop nest of the matrix product `a * b`, calling
/// `op(i, j, k)` for every `i < a.rows()`, `j < b.cols()` and
/// `k < a.cols()`.
///
/// For a fixed `(i, j)`, all the `k` are visited by the same task, in order.
/// In parallel, the longer of the `i` and `j` axes is split across tasks.
///
/// Fails with [`MatrixError::ShapeMismatch`] if `a.cols() != b.rows()`.
pub fn multiply(
    a: &impl Shape,
    b: &impl Shape,
    op: impl Fn(usize, usize, usize) + Sync + Send,
    in_parallel: bool,
) -> Result<()> {
    if a.cols() != b.rows() { return Err(MatrixError::shape_mismatch(a.dims(), b.dims())); }
    let n = a.cols();
    run_inner(0..a.rows(), 0..b.cols(), &|i, j| (0..n).for_each(|k| op(i, j, k)), in_parallel);
    Ok(())
}

// ----------------------------------------------------------------------------

/// Constructs a row-major buffer of `rows * cols` items by calling `f(i, j)`
/// once per cell.
pub(crate) fn generate<R: Send>(
    rows: usize, cols: usize,
    f: impl Fn(usize, usize) -> R + Sync + Send,
    in_parallel: bool,
) -> Box<[R]> {
    let items = call_inner(0..rows, 0..cols, &f, in_parallel);
    let rows_outer = if in_parallel { rows >= cols } else { rows <= cols };
    if rows_outer { items.into() } else { column_major_to_row_major(items, rows, cols) }
}

/// Like [`generate()`] with `in_parallel` false, but `f` may carry mutable
/// state from one cell to the next. Cells are visited in the same order as
/// a sequential [`run()`].
pub(crate) fn generate_sequential<R>(
    rows: usize, cols: usize,
    mut f: impl FnMut(usize, usize) -> R,
) -> Box<[R]> {
    log::trace!("generate {}x{} sequentially rows_outer={}", rows, cols, rows <= cols);
    if rows <= cols {
        (0..rows).flat_map(|i| (0..cols).map(move |j| (i, j))).map(|(i, j)| f(i, j)).collect()
    } else {
        let items = (0..cols).flat_map(|j| (0..rows).map(move |i| (i, j))).map(|(i, j)| f(i, j)).collect();
        column_major_to_row_major(items, rows, cols)
    }
}

fn column_major_to_row_major<R>(items: Vec<R>, rows: usize, cols: usize) -> Box<[R]> {
    debug_assert_eq!(items.len(), rows * cols);
    let mut columns = Vec::with_capacity(cols);
    let mut items = items.into_iter();
    for _ in 0..cols { columns.push(items.by_ref().take(rows).collect::<Vec<_>>().into_iter()); }
    let mut out = Vec::with_capacity(rows * cols);
    for _ in 0..rows {
        for column in columns.iter_mut() { out.extend(column.next()); }
    }
    out.into()
}

/// Replaces every item of the row-major buffer `items` of shape
/// `rows x cols` with `f(i, j, old)`.
pub(crate) fn update<T: Copy + Send + Sync>(
    items: &mut [T],
    rows: usize, cols: usize,
    f: impl Fn(usize, usize, T) -> T + Sync + Send,
    in_parallel: bool,
) {
    debug_assert_eq!(items.len(), rows * cols);
    if rows == 0 || cols == 0 { return; }
    if in_parallel && rows >= cols {
        items.par_chunks_mut(cols).enumerate().for_each(|(i, row)| {
            for (j, x) in row.iter_mut().enumerate() { *x = f(i, j, *x); }
        });
    } else if in_parallel {
        let fresh = {
            let old = &*items;
            generate(rows, cols, |i, j| f(i, j, old[i * cols + j]), true)
        };
        items.copy_from_slice(&fresh);
    } else if rows <= cols {
        for (i, row) in items.chunks_mut(cols).enumerate() {
            for (j, x) in row.iter_mut().enumerate() { *x = f(i, j, *x); }
        }
    } else {
        for j in 0..cols {
            for i in 0..rows {
                let x = &mut items[i * cols + j];
                *x = f(i, j, *x);
            }
        }
    }
}

// ----------------------------------------------------------------------------
