//! `[i16]` PCM extensions.

use micromath::F32Ext;

const FULL_SCALE: f32 = i16::MAX as f32;

/// Level metering extensions for raw 16 bit PCM slices. Levels are
/// normalized by the maximum positive sample value, so a full scale
/// signal has a level close to 1.
pub trait PcmArrayExt {
    /// Returns the maximum absolute sample value, normalized to full scale.
    fn peak_level(&self) -> f32;
    /// Returns the maximum absolute sample value in dB relative to full scale,
    /// i.e 0 dB corresponds to a level of 1.
    fn peak_level_db(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level, normalized to full scale.
    fn rms_level(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level in dB relative to full scale, i.e 0 dB corresponds to a level of 1.
    fn rms_level_db(&self) -> f32;
}

impl PcmArrayExt for [i16] {
    fn peak_level(&self) -> f32 {
        if self.len() == 0 {
            return 0.0;
        };

        let mut max: f32 = 0.0;
        for sample in self.iter() {
            let value = (*sample as f32).abs();
            if value > max {
                max = value
            }
        }
        max / FULL_SCALE
    }

    fn peak_level_db(&self) -> f32 {
        20. * F32Ext::log10(self.peak_level())
    }

    fn rms_level(&self) -> f32 {
        if self.len() == 0 {
            return 0.0;
        };
        let mut sum: f32 = 0.;
        for sample in self.iter() {
            let value = *sample as f32;
            sum += value * value
        }
        F32Ext::sqrt(sum / (self.len() as f32)) / FULL_SCALE
    }

    fn rms_level_db(&self) -> f32 {
        20. * F32Ext::log10(self.rms_level())
    }
}

#[cfg(test)]
mod tests {
    use super::PcmArrayExt;

    #[test]
    fn test_empty_buffer() {
        let buffer: [i16; 0] = [];
        assert!(buffer.rms_level() == 0.0);
        assert!(buffer.peak_level() == 0.0);
    }

    #[test]
    fn test_full_scale_square_wave() {
        // micromath's sqrt and log10 are approximations, hence the
        // generous tolerances.
        let buffer: [i16; 4] = [i16::MAX, -i16::MAX, i16::MAX, -i16::MAX];
        assert!((buffer.peak_level() - 1.0).abs() < 1e-6);
        assert!((buffer.rms_level() - 1.0).abs() < 0.01);
        assert!(buffer.peak_level_db().abs() < 0.05);
    }

    #[test]
    fn test_most_negative_sample() {
        // i16::MIN has no positive counterpart, so the peak level
        // goes slightly above 1.
        let buffer: [i16; 1] = [i16::MIN];
        assert!(buffer.peak_level() >= 1.0);
    }

    #[test]
    fn test_half_scale_dc() {
        let half = i16::MAX / 2;
        let buffer: [i16; 8] = [half; 8];
        assert!((buffer.rms_level() - 0.5).abs() < 0.01);
        // Half scale is approximately -6 dB.
        assert!((buffer.rms_level_db() + 6.02).abs() < 0.3);
    }
}
