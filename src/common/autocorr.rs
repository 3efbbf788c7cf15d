/// Computes the [autocorrelation](https://en.wikipedia.org/wiki/Autocorrelation)
/// of a window at a single lag, i.e the sum of `window[i] * window[i + lag]`
/// over all `i` for which both terms exist. Returns 0.0 if `lag >= window.len()`,
/// since no such terms exist.
pub fn autocorr_at_lag(window: &[f32], lag: usize) -> f32 {
    let term_count = window.len().saturating_sub(lag);
    let mut sum: f32 = 0.0;
    for i in 0..term_count {
        sum += window[i] * window[i + lag];
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::autocorr_at_lag;

    #[test]
    fn test_known_values() {
        // Reference Octave output (https://www.gnu.org/software/octave/index)
        // a = [1   2   3   4   5   6   7   8]
        // conv(a, fliplr(a)) = [8    23    44    70   100   133   168   204   168   133 ...
        let window: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let expected = [204.0, 168.0, 133.0, 100.0];
        for (lag, value) in expected.iter().enumerate() {
            assert_eq!(autocorr_at_lag(&window[..], lag), *value);
        }
    }

    #[test]
    fn test_lag_at_and_beyond_window_size() {
        let window: Vec<f32> = vec![1.0, 2.0, 3.0];
        assert_eq!(autocorr_at_lag(&window[..], 3), 0.0);
        assert_eq!(autocorr_at_lag(&window[..], 1000), 0.0);
    }

    #[test]
    fn test_empty_window() {
        let window: [f32; 0] = [];
        assert_eq!(autocorr_at_lag(&window[..], 0), 0.0);
    }
}
