//! Naive pitch ratio adjustment of 16 bit PCM buffers.
//!
//! The adjustment scales every sample by the ratio between a target
//! frequency and the detected frequency. Note that this changes the
//! amplitude of the signal, not its periodicity, so the result does not
//! actually play back at the target frequency. True pitch shifting
//! requires resampling or time stretching, which is out of scope here.
//! The scaling is kept as a deliberately simple stand-in.

use crate::acf::{detect_pitch, NO_PITCH};

/// Detects the pitch of a buffer and scales it in place by
/// `target_pitch / detected pitch`. Returns the detected pitch in Hz,
/// not the target. If detection fails, [NO_PITCH] is returned and the
/// buffer is left untouched.
pub fn adjust_pitch(buffer: &mut [i16], target_pitch: f32, sample_rate: u32) -> f32 {
    let detected_pitch = detect_pitch(buffer, sample_rate);
    if detected_pitch <= 0.0 {
        return NO_PITCH;
    }

    apply_pitch_ratio(buffer, target_pitch / detected_pitch);
    detected_pitch
}

/// Multiplies every sample in place by a ratio. Results are truncated
/// toward zero and saturate at the `i16` bounds.
pub fn apply_pitch_ratio(buffer: &mut [i16], ratio: f32) {
    for sample in buffer.iter_mut() {
        *sample = (*sample as f32 * ratio) as i16;
    }
}
