//! Synthesis of short percussive voices as 16 bit PCM. Each voice is a
//! simple source signal shaped by a shared percussive amplitude
//! envelope:
//! * Kick: a sine with an exponential frequency sweep from 120 Hz down to 40 Hz.
//! * Snare: a mix of white noise and a 200 Hz sine.
//! * Hi-hat: white noise.
//!
//! Noise comes from a caller supplied [WhiteNoise] source, so rendering
//! is deterministic for a given seed. Rendering fills caller owned
//! buffers and performs no allocation, apart from the [render]
//! convenience wrapper.

pub mod envelope;

use crate::common::WhiteNoise;
use alloc::vec;
use alloc::vec::Vec;
use envelope::percussive_gain;
use micromath::F32Ext;

const KICK_START_FREQ: f32 = 120.0;
const KICK_END_FREQ: f32 = 40.0;
const SNARE_TONE_FREQ: f32 = 200.0;

/// The percussion voices that can be rendered.
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercussionKind {
    Kick,
    Snare,
    HiHat,
}

impl PercussionKind {
    /// Picks the voice that best answers an input sound with the given
    /// dominant frequency: low sounds get a kick, midrange a snare and
    /// anything above 2 kHz a hi-hat.
    pub fn classify(dominant_frequency: f32) -> PercussionKind {
        if dominant_frequency < 200.0 {
            PercussionKind::Kick
        } else if dominant_frequency < 2000.0 {
            PercussionKind::Snare
        } else {
            PercussionKind::HiHat
        }
    }

    /// The nominal duration of the voice in seconds.
    pub fn duration_secs(&self) -> f32 {
        match self {
            PercussionKind::Kick => 0.15,
            PercussionKind::Snare => 0.2,
            PercussionKind::HiHat => 0.1,
        }
    }

    /// The number of samples of the voice at its nominal duration.
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        ((sample_rate as f32) * self.duration_secs()) as usize
    }

    /// The peak gain of the voice relative to full scale.
    pub fn peak_gain(&self) -> f32 {
        match self {
            PercussionKind::Kick => 0.8,
            PercussionKind::Snare => 0.5,
            PercussionKind::HiHat => 0.3,
        }
    }
}

/// Renders a voice into a caller owned buffer, filling it completely.
/// The buffer length determines the rendered duration; use
/// [PercussionKind::sample_count] to size it for the nominal duration.
pub fn render_into(
    kind: PercussionKind,
    sample_rate: u32,
    noise: &mut WhiteNoise,
    buffer: &mut [i16],
) {
    let sample_count = buffer.len();
    if sample_count == 0 {
        return;
    }
    let duration = (sample_count as f32) / (sample_rate as f32);
    let gain = kind.peak_gain() * (i16::MAX as f32);

    for (i, sample) in buffer.iter_mut().enumerate() {
        let t = (i as f32) / (sample_rate as f32);
        let envelope = percussive_gain(t / duration);
        let value = match kind {
            PercussionKind::Kick => {
                // Exponential sweep from the start frequency down to the
                // end frequency over the duration of the voice.
                let frequency =
                    KICK_START_FREQ * F32Ext::powf(KICK_END_FREQ / KICK_START_FREQ, t / duration);
                F32Ext::sin(2.0 * core::f32::consts::PI * frequency * t)
            }
            PercussionKind::Snare => {
                let tone = F32Ext::sin(2.0 * core::f32::consts::PI * SNARE_TONE_FREQ * t);
                0.6 * noise.next_sample() + 0.4 * tone
            }
            PercussionKind::HiHat => noise.next_sample(),
        };
        *sample = (value * envelope * gain) as i16;
    }
}

/// Renders a voice at its nominal duration into a newly allocated buffer.
pub fn render(kind: PercussionKind, sample_rate: u32, noise: &mut WhiteNoise) -> Vec<i16> {
    let mut buffer: Vec<i16> = vec![0; kind.sample_count(sample_rate)];
    render_into(kind, sample_rate, noise, &mut buffer[..]);
    buffer
}
