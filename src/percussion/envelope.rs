/// Gain of the percussive amplitude envelope at a normalized time in
/// [0, 1]: a fast linear attack to full gain over the first 1 % of the
/// voice, a decay down to 0.3 by 10 %, then a linear release to zero at
/// the end. Never returns a negative gain.
pub fn percussive_gain(normalized_time: f32) -> f32 {
    let gain = if normalized_time < 0.01 {
        normalized_time / 0.01
    } else if normalized_time < 0.1 {
        1.0 - (normalized_time - 0.01) / 0.09 * 0.7
    } else {
        0.3 * (1.0 - (normalized_time - 0.1) / 0.9)
    };
    gain.max(0.0)
}
