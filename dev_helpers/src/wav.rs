use hound;

/// Reads a 16 bit PCM WAV file, returning the channel count, sample
/// rate and interleaved samples.
pub fn read_wav(path: &str) -> Result<(u16, u32, Vec<i16>), hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let samples = reader.samples::<i16>().collect::<Result<Vec<i16>, _>>()?;
    Ok((spec.channels, spec.sample_rate, samples))
}

/// Writes interleaved 16 bit PCM samples to a WAV file.
pub fn write_wav(
    path: &str,
    sample_rate: u32,
    channel_count: u16,
    buffer: &[i16],
) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: channel_count,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for sample in buffer.iter() {
        writer.write_sample(*sample)?;
    }
    writer.finalize()?;

    Ok(())
}
