// Runs the full response engine over a synthetic burst train and writes
// the rendered percussion to a WAV file.

use dev_helpers::{burst_train, write_wav};
use pitchtap::engine::{BufferSink, BufferSource, EngineEvent, ResponseEngine};

fn main() {
    let sample_rate = 44100;
    let block_size = 1024;

    // Eight short midrange bursts, 300 ms apart: each one should
    // trigger a snare hit.
    let input = burst_train(sample_rate, 441.0, 0.5, 8, 0.05, 0.3);

    let source = BufferSource::new(input);
    let mut engine = ResponseEngine::new(sample_rate, block_size, source, BufferSink::new());

    let mut handle_event = |event: EngineEvent| match event {
        EngineEvent::ListeningChanged(listening) => println!("Listening: {}", listening),
        EngineEvent::PercussionTriggered(kind) => println!("Triggered {:?}", kind),
        EngineEvent::TriggerCountChanged(count) => println!("Hit count: {}", count),
        EngineEvent::LevelUpdated(_) => {}
    };

    engine.start_listening(&mut handle_event).unwrap();
    engine.run(&mut handle_event).unwrap();
    engine.stop_listening(&mut handle_event);

    let path = "drum_response.wav";
    write_wav(path, sample_rate, 1, engine.sink().samples()).unwrap();
    println!(
        "Wrote {} samples to {}",
        engine.sink().samples().len(),
        path
    );
}
