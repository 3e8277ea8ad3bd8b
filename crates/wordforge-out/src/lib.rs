//! WordForge Out: line-oriented batch sinks
//!
//! The pipeline hands sinks bounded batches of candidate strings; the sink
//! owns file/pipe mechanics. Output is plain text, one candidate per line.

pub mod writer;

pub use writer::{CollectingSink, FileSink, LineWriterSink};
