/// Generates a pure tone as 16 bit PCM. `amplitude` is relative to full
/// scale, in [0, 1].
pub fn sine(sample_rate: u32, frequency: f32, amplitude: f32, sample_count: usize) -> Vec<i16> {
    let mut buffer: Vec<i16> = vec![0; sample_count];
    for i in 0..sample_count {
        let phase = 2.0 * std::f32::consts::PI * frequency * (i as f32) / (sample_rate as f32);
        buffer[i] = (amplitude * (i16::MAX as f32) * phase.sin()) as i16;
    }
    buffer
}

/// Generates a train of sine bursts separated by silence, for exercising
/// onset triggering: `burst_count` bursts of `burst_secs` each, with
/// `gap_secs` of silence after every burst.
pub fn burst_train(
    sample_rate: u32,
    frequency: f32,
    amplitude: f32,
    burst_count: usize,
    burst_secs: f32,
    gap_secs: f32,
) -> Vec<i16> {
    let burst_len = ((sample_rate as f32) * burst_secs) as usize;
    let gap_len = ((sample_rate as f32) * gap_secs) as usize;
    let mut buffer: Vec<i16> = Vec::with_capacity(burst_count * (burst_len + gap_len));
    for _ in 0..burst_count {
        buffer.extend_from_slice(&sine(sample_rate, frequency, amplitude, burst_len)[..]);
        buffer.extend(std::iter::repeat(0).take(gap_len));
    }
    buffer
}
