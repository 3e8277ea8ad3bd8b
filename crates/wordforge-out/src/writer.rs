//! Batch writers

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wordforge_core::{Sink, WordforgeError};

/// Sink writing one candidate per line to any `io::Write`.
pub struct LineWriterSink<W: Write> {
    writer: W,
}

impl<W: Write> LineWriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for LineWriterSink<W> {
    fn write_batch(&mut self, batch: &[String]) -> Result<(), WordforgeError> {
        for candidate in batch {
            self.writer.write_all(candidate.as_bytes())?;
            self.writer.write_all(b"\n")?;
        }
        // Flush per batch so a pipe consumer sees complete batches even if
        // the process is interrupted afterwards.
        self.writer.flush()?;
        Ok(())
    }
}

/// Buffered file sink.
pub struct FileSink {
    inner: LineWriterSink<BufWriter<File>>,
}

impl FileSink {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, WordforgeError> {
        let file = File::create(path)?;
        Ok(Self { inner: LineWriterSink::new(BufWriter::new(file)) })
    }
}

impl Sink for FileSink {
    fn write_batch(&mut self, batch: &[String]) -> Result<(), WordforgeError> {
        self.inner.write_batch(batch)
    }
}

/// Test sink recording every candidate and the batch boundaries.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub candidates: Vec<String>,
    pub batch_sizes: Vec<usize>,
    /// When set, the next write fails; exercises sink-failure propagation.
    pub fail_next: bool,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for CollectingSink {
    fn write_batch(&mut self, batch: &[String]) -> Result<(), WordforgeError> {
        if self.fail_next {
            return Err(WordforgeError::Sink("simulated sink failure".to_string()));
        }
        self.batch_sizes.push(batch.len());
        self.candidates.extend(batch.iter().cloned());
        Ok(())
    }
}
