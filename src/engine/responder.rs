use alloc::vec;
use alloc::vec::Vec;

use crate::common::{PcmArrayExt, WhiteNoise};
use crate::engine::audio_io::{AudioCaptureSource, AudioError, AudioSink};
use crate::percussion::{render, PercussionKind};
use crate::trigger::OnsetTrigger;

const DEFAULT_THRESHOLD: f32 = 0.1;
const DEFAULT_REFRACTORY_MS: u32 = 100;
const DEFAULT_NOISE_SEED: u64 = 0x9E3779B97F4A7C15;

/// A state change reported by [ResponseEngine] through its event
/// callback. Hosts typically forward these to a UI layer.
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    /// Listening started or stopped.
    ListeningChanged(bool),
    /// The normalized RMS level of the most recently processed block.
    LevelUpdated(f32),
    /// The total number of percussion hits since listening started.
    TriggerCountChanged(u32),
    /// A percussion voice was rendered and written to the sink.
    PercussionTriggered(PercussionKind),
}

/// Listens to an [AudioCaptureSource] and answers onsets with rendered
/// percussion, written to an [AudioSink]: each processed block updates
/// the level meter and feeds an [OnsetTrigger]; a fired trigger picks a
/// voice from the dominant frequency of the block and renders it.
///
/// All processing happens synchronously inside the method calls. The
/// engine holds no locks and spawns nothing; a host wanting concurrency
/// wraps the engine in its own threading.
pub struct ResponseEngine<S: AudioCaptureSource, K: AudioSink> {
    sample_rate: u32,
    source: S,
    sink: K,
    trigger: OnsetTrigger,
    noise: WhiteNoise,
    block: Vec<i16>,
    is_listening: bool,
    audio_level: f32,
    trigger_count: u32,
}

impl<S: AudioCaptureSource, K: AudioSink> ResponseEngine<S, K> {
    /// Creates an engine with the default trigger options and noise seed.
    pub fn new(sample_rate: u32, block_size: usize, source: S, sink: K) -> Self {
        ResponseEngine::from_options(
            sample_rate,
            block_size,
            source,
            sink,
            DEFAULT_THRESHOLD,
            DEFAULT_REFRACTORY_MS,
            DEFAULT_NOISE_SEED,
        )
    }

    /// Creates an engine with full control over the trigger threshold
    /// (normalized RMS), the refractory interval between hits and the
    /// noise seed used for percussion rendering.
    ///
    /// Panics if `block_size` is zero, or on invalid trigger options
    /// (zero sample rate, non-positive threshold) or a zero noise seed.
    pub fn from_options(
        sample_rate: u32,
        block_size: usize,
        source: S,
        sink: K,
        threshold: f32,
        refractory_ms: u32,
        noise_seed: u64,
    ) -> Self {
        if block_size == 0 {
            panic!("Block size must be greater than 0")
        }

        ResponseEngine {
            sample_rate,
            source,
            sink,
            trigger: OnsetTrigger::from_options(sample_rate, threshold, refractory_ms),
            noise: WhiteNoise::new(noise_seed),
            block: vec![0; block_size],
            is_listening: false,
            audio_level: 0.0,
            trigger_count: 0,
        }
    }

    /// Starts the capture source and resets the hit count.
    pub fn start_listening<F>(&mut self, events: &mut F) -> Result<(), AudioError>
    where
        F: FnMut(EngineEvent),
    {
        self.source.start()?;
        self.is_listening = true;
        self.trigger_count = 0;
        events(EngineEvent::ListeningChanged(true));
        events(EngineEvent::TriggerCountChanged(0));
        Ok(())
    }

    /// Stops the capture source.
    pub fn stop_listening<F>(&mut self, events: &mut F)
    where
        F: FnMut(EngineEvent),
    {
        self.source.stop();
        self.is_listening = false;
        events(EngineEvent::ListeningChanged(false));
    }

    /// Reads and processes one block from the source, returning the
    /// number of samples consumed. `Ok(0)` signals the end of the
    /// stream. Every non-empty block updates the level meter; a block
    /// that fires the trigger also renders a percussion voice into the
    /// sink.
    pub fn process_block<F>(&mut self, events: &mut F) -> Result<usize, AudioError>
    where
        F: FnMut(EngineEvent),
    {
        let count = self.source.read_block(&mut self.block[..])?;
        if count == 0 {
            return Ok(0);
        }

        let block = &self.block[..count];
        self.audio_level = block.rms_level();
        events(EngineEvent::LevelUpdated(self.audio_level));

        if let Some(trigger) = self.trigger.process_block(block) {
            self.render_hit(trigger.kind, events)?;
        }

        Ok(count)
    }

    /// Processes blocks until the end of the stream.
    pub fn run<F>(&mut self, events: &mut F) -> Result<(), AudioError>
    where
        F: FnMut(EngineEvent),
    {
        while self.process_block(events)? > 0 {}
        Ok(())
    }

    /// Renders a percussion voice into the sink without an input
    /// trigger, e.g for a hit requested from a UI.
    pub fn play_percussion<F>(
        &mut self,
        kind: PercussionKind,
        events: &mut F,
    ) -> Result<(), AudioError>
    where
        F: FnMut(EngineEvent),
    {
        self.render_hit(kind, events)
    }

    /// Indicates if the capture source has been started.
    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    /// The normalized RMS level of the most recently processed block.
    pub fn audio_level(&self) -> f32 {
        self.audio_level
    }

    /// The number of percussion hits since listening started.
    pub fn trigger_count(&self) -> u32 {
        self.trigger_count
    }

    /// The sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Borrows the sink, e.g to inspect collected output after a run.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    fn render_hit<F>(&mut self, kind: PercussionKind, events: &mut F) -> Result<(), AudioError>
    where
        F: FnMut(EngineEvent),
    {
        let voice = render(kind, self.sample_rate, &mut self.noise);
        self.sink.write_block(&voice[..])?;
        self.trigger_count += 1;
        events(EngineEvent::TriggerCountChanged(self.trigger_count));
        events(EngineEvent::PercussionTriggered(kind));
        Ok(())
    }
}
