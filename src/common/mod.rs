//! Common algorithms and utilities.

mod autocorr;
mod midi;
mod noise;
mod pcm;

pub use autocorr::autocorr_at_lag;
pub use midi::freq_to_midi_note;
pub use noise::WhiteNoise;
pub use pcm::PcmArrayExt;
