use alloc::vec::Vec;
use thiserror::Error;

/// An audio I/O failure reported by a capture source or sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AudioError {
    /// A block was requested from a source that has not been started.
    #[error("capture source has not been started")]
    NotStarted,
    /// A platform device failure, described by the implementation.
    #[error("audio device error: {0}")]
    Device(&'static str),
}

/// A source of captured PCM blocks, implemented per platform. The
/// source must be started before blocks can be read.
pub trait AudioCaptureSource {
    /// Starts capturing.
    fn start(&mut self) -> Result<(), AudioError>;
    /// Stops capturing.
    fn stop(&mut self);
    /// Reads up to `block.len()` samples into the front of `block`,
    /// returning the number of samples read. `Ok(0)` signals the end
    /// of the stream.
    fn read_block(&mut self, block: &mut [i16]) -> Result<usize, AudioError>;
}

/// A destination for rendered PCM blocks, implemented per platform.
pub trait AudioSink {
    /// Writes a block of samples.
    fn write_block(&mut self, block: &[i16]) -> Result<(), AudioError>;
}

/// An [AudioCaptureSource] serving samples from an in-memory buffer,
/// in reading order, a block at a time.
pub struct BufferSource {
    samples: Vec<i16>,
    position: usize,
    is_started: bool,
}

impl BufferSource {
    pub fn new(samples: Vec<i16>) -> Self {
        BufferSource {
            samples,
            position: 0,
            is_started: false,
        }
    }

    /// The number of samples not yet read.
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.position
    }
}

impl AudioCaptureSource for BufferSource {
    fn start(&mut self) -> Result<(), AudioError> {
        self.is_started = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.is_started = false;
    }

    fn read_block(&mut self, block: &mut [i16]) -> Result<usize, AudioError> {
        if !self.is_started {
            return Err(AudioError::NotStarted);
        }
        let count = block.len().min(self.remaining());
        block[..count].copy_from_slice(&self.samples[self.position..self.position + count]);
        self.position += count;
        Ok(count)
    }
}

/// An [AudioSink] collecting every written sample into memory.
pub struct BufferSink {
    samples: Vec<i16>,
}

impl BufferSink {
    pub fn new() -> Self {
        BufferSink {
            samples: Vec::new(),
        }
    }

    /// All samples written so far, in writing order.
    pub fn samples(&self) -> &[i16] {
        &self.samples[..]
    }
}

impl AudioSink for BufferSink {
    fn write_block(&mut self, block: &[i16]) -> Result<(), AudioError> {
        self.samples.extend_from_slice(block);
        Ok(())
    }
}
