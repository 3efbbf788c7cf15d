//! The platform seams and the response engine built on top of them.
//!
//! [AudioCaptureSource] and [AudioSink] are the only boundary between
//! this crate and platform audio. A host embedding the engine implements
//! them on top of whatever capture and playback machinery it has; the
//! in-memory [BufferSource] and [BufferSink] serve tests, demos and
//! offline processing. [ResponseEngine] pulls blocks from a source,
//! meters and triggers on them and renders percussion responses into a
//! sink, reporting state changes through an [EngineEvent] callback.

mod audio_io;
mod responder;

pub use audio_io::{AudioCaptureSource, AudioError, AudioSink, BufferSink, BufferSource};
pub use responder::{EngineEvent, ResponseEngine};
