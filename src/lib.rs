//! Time domain analysis of monophonic [pitch](https://en.wikipedia.org/wiki/Pitch_%28music%29)
//! in raw 16 bit PCM audio, along with a small set of companion tools: PCM level
//! metering, a naive pitch ratio adjustment, onset triggering and percussion
//! synthesis. Pitch is estimated by locating the lag that maximizes the
//! [autocorrelation](https://en.wikipedia.org/wiki/Autocorrelation) of the input,
//! which works well for monophonic, primarily musical, sounds. It cannot be used
//! to detect multiple pitches at once, like in a musical chord.
//!
//! Features
//! * Pure time domain computation. No FFT, no lookup tables.
//! * Operates directly on 16 bit PCM samples.
//! * `no_std` compatible. The streaming detector allocates a modest
//! amount on initialization and nothing after that, making it suitable
//! for real time use.
//!
//! # Examples
//!
//! One-shot API, for analyzing a single buffer directly.
//!
//! ```
//! use pitchtap::acf::detect_pitch;
//!
//! // Create a buffer containing a pure tone at 441 Hz.
//! let sample_rate = 44100;
//! let frequency = 441.0;
//! let mut buffer: Vec<i16> = vec![0; 4096];
//! for i in 0..buffer.len() {
//!     let phase = 2.0 * std::f32::consts::PI * frequency * (i as f32) / (sample_rate as f32);
//!     buffer[i] = (10000.0 * phase.sin()) as i16;
//! }
//!
//! let pitch = detect_pitch(&buffer, sample_rate);
//! // A negative return value means no pitch could be estimated.
//! assert!(pitch > 0.0);
//! assert!((pitch - frequency).abs() < 1.0);
//! ```
//!
//! Streaming API, handling collection of input chunks into (possibly
//! overlapping) analysis windows. See [acf::AcfPitchDetector].
//!
//! ```
//! use pitchtap::acf::AcfPitchDetector;
//!
//! let sample_rate = 44100;
//! let frequency = 441.0;
//! let mut chunk: Vec<i16> = vec![0; 10000];
//! for i in 0..chunk.len() {
//!     let phase = 2.0 * std::f32::consts::PI * frequency * (i as f32) / (sample_rate as f32);
//!     chunk[i] = (10000.0 * phase.sin()) as i16;
//! }
//!
//! let window_size = 4096; // The number of samples to perform pitch detection on.
//! let window_distance = 1024; // Pitch is computed every window_distance samples.
//! let mut detector = AcfPitchDetector::new(sample_rate, window_size, window_distance);
//!
//! detector.process(&chunk[..], |_sample_index, result| {
//!     assert!(result.is_valid());
//!     assert!((result.frequency - frequency).abs() < 1.0);
//! });
//! assert!(detector.processed_window_count() > 0);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod acf;
pub mod adjust;
pub mod common;
pub mod engine;
pub mod percussion;
pub mod trigger;
