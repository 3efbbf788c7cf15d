//! Time domain [autocorrelation](https://en.wikipedia.org/wiki/Autocorrelation)
//! pitch detection on raw 16 bit PCM audio. The estimated pitch is the
//! frequency corresponding to the lag with the largest autocorrelation,
//! searched over a range derived from the sample rate: the shortest candidate
//! lag corresponds to 1000 Hz and the longest to 50 Hz. The algorithm suits
//! monophonic, primarily musical, sounds and cannot detect multiple
//! simultaneous pitches, like in a musical chord.
//!
//! Three levels of API are available:
//! * [detect_pitch] — analyze a single buffer in one call.
//! * [AcfPitchResult] — reusable analysis state for processing one window at a
//!   time without allocating per call. Also exposes the per lag correlation values.
//! * [AcfPitchDetector] — handles collecting streamed input chunks into
//!   (possibly overlapping) analysis windows.
//!
//! # Examples
//! ```
//! use pitchtap::acf::{AcfPitchResult, NO_PITCH};
//!
//! let sample_rate = 44100;
//! let frequency = 441.0;
//! let window_size = 2048;
//! let mut result = AcfPitchResult::new(window_size, sample_rate);
//!
//! // Fill the window with a pure tone at 441 Hz.
//! for i in 0..window_size {
//!     let phase = 2.0 * std::f32::consts::PI * frequency * (i as f32) / (sample_rate as f32);
//!     result.window[i] = 10000.0 * phase.sin();
//! }
//!
//! result.compute();
//! assert!(result.is_valid());
//! assert!((result.frequency - frequency).abs() < 1.0);
//!
//! // An all zero window has no periodicity to find.
//! for sample in result.window.iter_mut() {
//!     *sample = 0.0;
//! }
//! result.compute();
//! assert!(!result.is_valid());
//! assert_eq!(result.frequency, NO_PITCH);
//! ```

mod detector;
mod result;

pub use detector::AcfPitchDetector;
pub use result::AcfPitchResult;

/// Sentinel frequency returned when no dominant periodicity was found.
pub const NO_PITCH: f32 = -1.0;

/// Estimates the fundamental frequency in Hz of a buffer of 16 bit PCM
/// samples, or [NO_PITCH] if no dominant periodicity was found. This is
/// a convenience wrapper that allocates analysis state on each call. Use
/// [AcfPitchResult] directly to analyze repeatedly without allocating.
pub fn detect_pitch(buffer: &[i16], sample_rate: u32) -> f32 {
    if buffer.is_empty() || sample_rate == 0 {
        return NO_PITCH;
    }
    let mut result = AcfPitchResult::new(buffer.len(), sample_rate);
    result.copy_from_pcm(buffer);
    result.compute();
    result.frequency
}
