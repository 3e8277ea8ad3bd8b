//! Output sink contract
//!
//! The core never opens files. The sink accepts bounded batches of candidate
//! strings and is responsible for file or pipe mechanics on its side.

use crate::error::WordforgeError;

/// Consumer of generated candidates.
pub trait Sink {
    /// Accept one bounded batch. The batch is never larger than the
    /// configured batch size; the last batch of a run may be smaller. An
    /// error aborts generation and is surfaced to the caller.
    fn write_batch(&mut self, batch: &[String]) -> Result<(), WordforgeError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_batch(&mut self, batch: &[String]) -> Result<(), WordforgeError> {
        (**self).write_batch(batch)
    }
}
