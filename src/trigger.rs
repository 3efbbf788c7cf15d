//! Onset triggering on streamed PCM blocks.

use crate::common::PcmArrayExt;
use crate::percussion::PercussionKind;

/// A fired onset, carrying the level that caused it, a crude dominant
/// frequency estimate and the percussion voice classified from that
/// estimate.
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    /// The percussion voice classified from `dominant_frequency`.
    pub kind: PercussionKind,
    /// The normalized RMS level of the block that fired the trigger.
    pub level: f32,
    /// The dominant frequency estimate of the block, in Hz.
    pub dominant_frequency: f32,
}

/// Detects onsets in consecutive blocks of input samples: a block whose
/// RMS level exceeds a threshold fires a [Trigger], after which further
/// triggers are suppressed for a refractory interval. Time is measured
/// in samples, so the caller must feed every block, including quiet
/// ones, for the interval to be meaningful.
pub struct OnsetTrigger {
    sample_rate: u32,
    threshold: f32,
    refractory_samples: u64,
    sample_clock: u64,
    last_trigger_at: Option<u64>,
}

impl OnsetTrigger {
    /// Creates a trigger with the default threshold of 0.1 (normalized
    /// RMS) and a 100 ms refractory interval.
    pub fn new(sample_rate: u32) -> Self {
        OnsetTrigger::from_options(sample_rate, 0.1, 100)
    }

    /// Creates a trigger with a custom threshold (normalized RMS, must
    /// be positive) and refractory interval in milliseconds.
    ///
    /// Panics if `sample_rate` is zero or `threshold` is not positive.
    pub fn from_options(sample_rate: u32, threshold: f32, refractory_ms: u32) -> Self {
        if sample_rate == 0 {
            panic!("Sample rate must be greater than 0")
        }
        if threshold <= 0.0 {
            panic!("Trigger threshold must be greater than 0")
        }

        OnsetTrigger {
            sample_rate,
            threshold,
            refractory_samples: (sample_rate as u64) * (refractory_ms as u64) / 1000,
            sample_clock: 0,
            last_trigger_at: None,
        }
    }

    /// Consumes one block of input samples and returns a [Trigger] if
    /// the block fired one. The first qualifying block fires
    /// immediately; subsequent triggers require the refractory interval
    /// to have elapsed since the previous one.
    pub fn process_block(&mut self, block: &[i16]) -> Option<Trigger> {
        let level = block.rms_level();
        let is_armed = match self.last_trigger_at {
            Some(at) => self.sample_clock - at >= self.refractory_samples,
            None => true,
        };

        let trigger = if level > self.threshold && is_armed {
            self.last_trigger_at = Some(self.sample_clock);
            let frequency = dominant_frequency(block, self.sample_rate);
            Some(Trigger {
                kind: PercussionKind::classify(frequency),
                level,
                dominant_frequency: frequency,
            })
        } else {
            None
        };

        self.sample_clock += block.len() as u64;
        trigger
    }

    /// Returns the normalized RMS threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Returns the refractory interval in samples.
    pub fn refractory_samples(&self) -> u64 {
        self.refractory_samples
    }
}

/// Estimates the dominant frequency of a block by counting positive to
/// non-positive zero crossings. A crude stand-in for spectral analysis,
/// good enough to pick a percussion voice. Returns 0.0 for blocks
/// shorter than two samples.
pub fn dominant_frequency(block: &[i16], sample_rate: u32) -> f32 {
    if block.len() < 2 {
        return 0.0;
    }

    let mut zero_crossings: usize = 0;
    for i in 0..block.len() - 1 {
        if block[i] > 0 && block[i + 1] <= 0 {
            zero_crossings += 1;
        }
    }
    (zero_crossings as f32) * (sample_rate as f32) / (block.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sine_block(sample_rate: u32, frequency: f32, amplitude: f32, len: usize) -> Vec<i16> {
        let mut block: Vec<i16> = vec![0; len];
        for i in 0..len {
            let phase =
                2.0 * core::f32::consts::PI * frequency * (i as f32) / (sample_rate as f32);
            block[i] = (amplitude * (i16::MAX as f32) * phase.sin()) as i16;
        }
        block
    }

    #[test]
    fn test_dominant_frequency_of_sine() {
        // 441 Hz at 44100 Hz, 2048 samples: 9 complete periods fit,
        // each contributing one positive to non-positive crossing.
        let block = sine_block(44100, 441.0, 0.5, 2048);
        let estimate = dominant_frequency(&block[..], 44100);
        assert!((estimate - 441.0).abs() < 30.0);
    }

    #[test]
    fn test_dominant_frequency_of_short_blocks() {
        assert_eq!(dominant_frequency(&[], 44100), 0.0);
        assert_eq!(dominant_frequency(&[1000], 44100), 0.0);
    }

    #[test]
    fn test_first_loud_block_fires() {
        let mut trigger = OnsetTrigger::new(44100);
        let block = sine_block(44100, 441.0, 0.5, 1024);
        let fired = trigger.process_block(&block[..]);
        assert!(fired.is_some());
        let fired = fired.unwrap();
        assert!(fired.level > trigger.threshold());
        assert_eq!(fired.kind, PercussionKind::Snare);
    }

    #[test]
    fn test_quiet_input_never_fires() {
        let mut trigger = OnsetTrigger::new(44100);
        let block = sine_block(44100, 441.0, 0.01, 1024);
        for _ in 0..50 {
            assert!(trigger.process_block(&block[..]).is_none());
        }
    }

    #[test]
    fn test_refractory_interval() {
        // 100 ms at 44100 Hz is 4410 samples. With 1024 sample blocks,
        // blocks 1 through 4 after a trigger fall inside the interval
        // and block 5 (at sample 5120) falls outside it.
        let mut trigger = OnsetTrigger::new(44100);
        let block = sine_block(44100, 441.0, 0.5, 1024);

        assert!(trigger.process_block(&block[..]).is_some());
        for _ in 0..4 {
            assert!(trigger.process_block(&block[..]).is_none());
        }
        assert!(trigger.process_block(&block[..]).is_some());
    }

    #[test]
    fn test_rearms_after_quiet_stretch() {
        let mut trigger = OnsetTrigger::from_options(44100, 0.1, 100);
        let loud = sine_block(44100, 441.0, 0.5, 1024);
        let quiet: Vec<i16> = vec![0; 8192];

        assert!(trigger.process_block(&loud[..]).is_some());
        assert!(trigger.process_block(&quiet[..]).is_none());
        assert!(trigger.process_block(&loud[..]).is_some());
    }

    #[test]
    fn test_classification_bands() {
        let mut trigger = OnsetTrigger::new(44100);
        let kick = sine_block(44100, 100.0, 0.5, 4096);
        assert_eq!(
            trigger.process_block(&kick[..]).unwrap().kind,
            PercussionKind::Kick
        );

        let mut trigger = OnsetTrigger::new(44100);
        let snare = sine_block(44100, 1000.0, 0.5, 4096);
        assert_eq!(
            trigger.process_block(&snare[..]).unwrap().kind,
            PercussionKind::Snare
        );

        let mut trigger = OnsetTrigger::new(44100);
        let hihat = sine_block(44100, 5000.0, 0.5, 4096);
        assert_eq!(
            trigger.process_block(&hihat[..]).unwrap().kind,
            PercussionKind::HiHat
        );
    }

    #[test]
    fn test_noise_classified_as_hihat() {
        // Broadband noise has a high zero crossing rate.
        let mut rng = StdRng::seed_from_u64(7);
        let block: Vec<i16> = (0..4096)
            .map(|_| (rng.gen::<f32>() * 2.0 - 1.0) * 16000.0)
            .map(|value| value as i16)
            .collect();

        let mut trigger = OnsetTrigger::new(44100);
        let fired = trigger.process_block(&block[..]).unwrap();
        assert_eq!(fired.kind, PercussionKind::HiHat);
    }

    #[test]
    #[should_panic]
    fn test_zero_sample_rate() {
        OnsetTrigger::new(0);
    }

    #[test]
    #[should_panic]
    fn test_non_positive_threshold() {
        OnsetTrigger::from_options(44100, 0.0, 100);
    }
}
