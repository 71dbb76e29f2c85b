//! crates/logging/src/thread_local.rs
//! Per-thread rendering scratch shared by every logger on the thread.

use std::cell::RefCell;

use logging_sink::LineScratch;

thread_local! {
    static SCRATCH: RefCell<LineScratch> = const { RefCell::new(LineScratch::new()) };
}

/// Runs `f` with this thread's scratch buffer.
///
/// The inline buffer is initialised once per thread. A nested call (a
/// `Display` impl that logs while its own message is rendering) or a call
/// made during thread-local teardown gets a fresh buffer instead. Any heap
/// spill is released before returning.
pub(crate) fn with_scratch<R>(mut f: impl FnMut(&mut LineScratch) -> R) -> R {
    let reused = SCRATCH.try_with(|cell| {
        let mut scratch = cell.try_borrow_mut().ok()?;
        let result = f(&mut scratch);
        scratch.release();
        Some(result)
    });
    match reused {
        Ok(Some(result)) => result,
        _ => f(&mut LineScratch::new()),
    }
}
