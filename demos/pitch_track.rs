// Streams a generated test signal through the windowed pitch detector
// and prints one JSON object per analyzed window, suitable for piping
// into a plotting tool.

use dev_helpers::{note_number_to_string, sine};
use pitchtap::acf::AcfPitchDetector;
use pitchtap::common::freq_to_midi_note;
use serde::Serialize;

#[derive(Serialize)]
struct PitchReading {
    time_s: f32,
    frequency: f32,
    note: String,
}

fn main() {
    let sample_rate = 44100;
    let window_size = 2048;
    let window_distance = 512;
    let chunk_size = 1024;

    // A few notes of a rising arpeggio, half a second each.
    let frequencies = [220.0_f32, 277.18, 329.63, 440.0];
    let mut input: Vec<i16> = Vec::new();
    for frequency in frequencies.iter() {
        input.extend_from_slice(&sine(sample_rate, *frequency, 0.5, sample_rate as usize / 2)[..]);
    }

    let mut detector = AcfPitchDetector::new(sample_rate, window_size, window_distance);

    for (chunk_index, chunk) in input.chunks(chunk_size).enumerate() {
        let chunk_offset = chunk_index * chunk_size;
        detector.process(chunk, |sample_index, result| {
            if !result.is_valid() {
                return;
            }
            let reading = PitchReading {
                time_s: ((chunk_offset + sample_index) as f32) / (sample_rate as f32),
                frequency: result.frequency,
                note: note_number_to_string(freq_to_midi_note(result.frequency)),
            };
            println!("{}", serde_json::to_string(&reading).unwrap());
        });
    }

    eprintln!("Analyzed {} windows.", detector.processed_window_count());
}
