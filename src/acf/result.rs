use alloc::vec;
use alloc::vec::Vec;

use crate::acf::NO_PITCH;
use crate::common::autocorr_at_lag;

/// A pitch detection result, holding the analysis window along with
/// preallocated space for the correlation values at each candidate lag.
/// All buffers are allocated once on creation, so an instance can be
/// reused to analyze any number of windows without further allocation.
pub struct AcfPitchResult {
    /// The estimated pitch frequency in Hz, or [NO_PITCH] if the most
    /// recent [compute](AcfPitchResult::compute) call found no dominant
    /// periodicity.
    pub frequency: f32,
    /// The candidate lag, in samples, with the largest correlation, or
    /// `None` if no candidate had a positive correlation.
    pub best_lag: Option<usize>,
    /// The correlation value at `best_lag`, or 0.0 if there is none.
    pub peak_correlation: f32,
    /// The window to analyze. Filled by the caller, either directly or
    /// via [copy_from_pcm](AcfPitchResult::copy_from_pcm). Samples are
    /// raw PCM magnitudes converted to `f32`, not normalized to [-1, 1].
    pub window: Vec<f32>,
    /// The correlation value per candidate lag. `correlation[i]` holds
    /// the value at lag `min_lag() + i`.
    pub correlation: Vec<f32>,
    sample_rate: u32,
    min_lag: usize,
}

impl AcfPitchResult {
    /// Creates an instance for analyzing windows of `window_size` samples
    /// at a given sample rate. The candidate lag range is derived from
    /// the sample rate: the shortest lag corresponds to 1000 Hz and the
    /// longest to 50 Hz. For sample rates below 50 Hz the range is empty
    /// and every analysis fails.
    ///
    /// Panics if `window_size` or `sample_rate` is zero.
    pub fn new(window_size: usize, sample_rate: u32) -> Self {
        if window_size == 0 {
            panic!("Window size must be greater than 0")
        }
        if sample_rate == 0 {
            panic!("Sample rate must be greater than 0")
        }

        let min_lag = (sample_rate / 1000) as usize;
        let max_lag = (sample_rate / 50) as usize;
        let lag_count = max_lag.saturating_sub(min_lag);

        AcfPitchResult {
            frequency: NO_PITCH,
            best_lag: None,
            peak_correlation: 0.0,
            window: vec![0.0; window_size],
            correlation: vec![0.0; lag_count],
            sample_rate,
            min_lag,
        }
    }

    /// Fills the window from a buffer of 16 bit PCM samples.
    ///
    /// Panics if the buffer length does not equal the window size.
    pub fn copy_from_pcm(&mut self, buffer: &[i16]) {
        if buffer.len() != self.window.len() {
            panic!(
                "Got PCM buffer of length {}, expected {}.",
                buffer.len(),
                self.window.len()
            )
        }
        for (target, sample) in self.window.iter_mut().zip(buffer.iter()) {
            *target = *sample as f32;
        }
    }

    /// Performs pitch detection on the current contents of `window`,
    /// populating `frequency`, `best_lag`, `peak_correlation` and the
    /// per lag `correlation` buffer. The best lag is the one with a
    /// correlation strictly greater than all shorter candidates, so
    /// ties keep the shortest lag.
    pub fn compute(&mut self) {
        self.best_lag = None;
        self.peak_correlation = 0.0;

        for lag_index in 0..self.correlation.len() {
            let lag = self.min_lag + lag_index;
            let value = autocorr_at_lag(&self.window[..], lag);
            self.correlation[lag_index] = value;
            if value > self.peak_correlation {
                self.peak_correlation = value;
                self.best_lag = Some(lag);
            }
        }

        self.frequency = match self.best_lag {
            Some(lag) => (self.sample_rate as f32) / (lag as f32),
            None => NO_PITCH,
        };
    }

    /// Indicates if the most recent [compute](AcfPitchResult::compute)
    /// call produced a valid pitch estimate.
    pub fn is_valid(&self) -> bool {
        self.best_lag.is_some()
    }

    /// The shortest candidate lag in samples, corresponding to 1000 Hz.
    pub fn min_lag(&self) -> usize {
        self.min_lag
    }

    /// One past the longest candidate lag in samples. The longest
    /// candidate corresponds to 50 Hz.
    pub fn max_lag(&self) -> usize {
        self.min_lag + self.correlation.len()
    }

    /// The sample rate in Hz the lag range was derived from.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acf::detect_pitch;

    fn generate_sine(sample_rate: u32, frequency: f32, sample_count: usize) -> Vec<i16> {
        let mut buffer: Vec<i16> = vec![0; sample_count];
        for i in 0..sample_count {
            let phase =
                2.0 * core::f32::consts::PI * frequency * (i as f32) / (sample_rate as f32);
            buffer[i] = (10000.0 * phase.sin()) as i16;
        }
        buffer
    }

    #[test]
    fn test_lag_range() {
        let result = AcfPitchResult::new(1024, 44100);
        assert_eq!(result.min_lag(), 44);
        assert_eq!(result.max_lag(), 882);
        assert_eq!(result.correlation.len(), 882 - 44);
    }

    #[test]
    fn test_empty_lag_range() {
        let mut result = AcfPitchResult::new(1024, 49);
        assert_eq!(result.correlation.len(), 0);
        result.compute();
        assert!(!result.is_valid());
        assert_eq!(result.frequency, NO_PITCH);
    }

    #[test]
    fn test_silence() {
        let mut result = AcfPitchResult::new(1024, 44100);
        result.compute();
        assert!(!result.is_valid());
        assert_eq!(result.frequency, NO_PITCH);
        assert_eq!(result.best_lag, None);
        assert_eq!(result.peak_correlation, 0.0);
    }

    #[test]
    fn test_sine_window() {
        let sample_rate = 44100;
        let frequency = 441.0;
        let buffer = generate_sine(sample_rate, frequency, 2048);

        let mut result = AcfPitchResult::new(buffer.len(), sample_rate);
        result.copy_from_pcm(&buffer[..]);
        result.compute();

        assert!(result.is_valid());
        assert_eq!(result.best_lag, Some(100));
        assert_eq!(result.frequency, 441.0);
        assert!(result.peak_correlation > 0.0);
        // The stored correlation at the best lag is the peak.
        let lag_index = result.best_lag.unwrap() - result.min_lag();
        assert_eq!(result.correlation[lag_index], result.peak_correlation);
    }

    #[test]
    fn test_agrees_with_one_shot_function() {
        let sample_rate = 44100;
        let buffer = generate_sine(sample_rate, 467.0, 3000);

        let mut result = AcfPitchResult::new(buffer.len(), sample_rate);
        result.copy_from_pcm(&buffer[..]);
        result.compute();

        assert_eq!(result.frequency, detect_pitch(&buffer[..], sample_rate));
    }

    #[test]
    fn test_reuse_resets_state() {
        let sample_rate = 44100;
        let buffer = generate_sine(sample_rate, 441.0, 2048);

        let mut result = AcfPitchResult::new(buffer.len(), sample_rate);
        result.copy_from_pcm(&buffer[..]);
        result.compute();
        assert!(result.is_valid());

        // Analyzing silence afterwards must not leak the previous estimate.
        for sample in result.window.iter_mut() {
            *sample = 0.0;
        }
        result.compute();
        assert!(!result.is_valid());
        assert_eq!(result.frequency, NO_PITCH);
    }

    #[test]
    #[should_panic]
    fn test_zero_window_size() {
        AcfPitchResult::new(0, 44100);
    }

    #[test]
    #[should_panic]
    fn test_zero_sample_rate() {
        AcfPitchResult::new(1024, 0);
    }

    #[test]
    #[should_panic]
    fn test_pcm_length_mismatch() {
        let mut result = AcfPitchResult::new(1024, 44100);
        let buffer: Vec<i16> = vec![0; 1000];
        result.copy_from_pcm(&buffer[..]);
    }
}
