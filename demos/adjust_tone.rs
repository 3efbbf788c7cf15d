// Detects the pitch of a generated tone, applies the naive pitch ratio
// adjustment and writes both versions to WAV files for comparison.

use dev_helpers::{sine, write_wav};
use pitchtap::acf::detect_pitch;
use pitchtap::adjust::adjust_pitch;

fn main() {
    let sample_rate = 44100;
    let frequency = 330.0;
    let target = 440.0;

    let original = sine(sample_rate, frequency, 0.4, sample_rate as usize);
    let mut adjusted = original.clone();

    println!(
        "Detected pitch: {:.2} Hz",
        detect_pitch(&original[..], sample_rate)
    );

    let detected = adjust_pitch(&mut adjusted[..], target, sample_rate);
    if detected <= 0.0 {
        eprintln!("Could not detect pitch, nothing to adjust.");
        return;
    }
    println!(
        "Scaled samples by {:.3} (target {} Hz). Note that this changes \
         amplitude, not periodicity.",
        target / detected,
        target
    );

    write_wav("tone_original.wav", sample_rate, 1, &original[..]).unwrap();
    write_wav("tone_adjusted.wav", sample_rate, 1, &adjusted[..]).unwrap();
    println!("Wrote tone_original.wav and tone_adjusted.wav");
}
