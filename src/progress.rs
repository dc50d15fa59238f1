// src/progress.rs
/// Lightweight progress reporting for the long-running phases.
/// The CLI implements this to print one line per page.
pub trait Progress {
    /// Called at the start of a phase with the number of pages it will visit.
    fn begin(&mut self, _phase: &str, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A page was fetched and handled.
    fn item_done(&mut self, _url: &str) {}

    /// A page could not be fetched or its row could not be written.
    fn item_failed(&mut self, _url: &str, _reason: &str) {}

    /// Called at the end of a phase, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
