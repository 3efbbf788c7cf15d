use crate::acf::result::AcfPitchResult;
use crate::alloc::boxed::Box;
use crate::alloc::vec;

/// * Collects streamed input samples into (possibly overlapping) windows
/// * Performs pitch detection on each newly filled window
pub struct AcfPitchDetector {
    /// The audio sample rate in Hz.
    sample_rate: u32,
    /// The size of the windows to analyze.
    window_size: usize,
    /// The number of samples between consecutive (possibly overlapping)
    /// windows. Must not be greater than `window_size`.
    window_distance: usize,
    /// For counting the number of samples from the start of the previous window.
    window_distance_counter: usize,
    processed_window_count: usize,
    input_buffer_write_index: usize,
    input_buffer: Box<[f32]>,
    has_filled_input_buffer: bool,
    result: AcfPitchResult,
}

impl AcfPitchDetector {
    /// Creates a detector. Pitch detection is performed on windows of
    /// `window_size` samples, starting `window_distance` samples apart.
    /// The sample rate is fixed per instance, since the candidate lag
    /// range is allocated from it.
    ///
    /// Panics if `window_size` or `sample_rate` is zero, or if
    /// `window_distance` is zero or greater than `window_size`.
    pub fn new(sample_rate: u32, window_size: usize, window_distance: usize) -> Self {
        if window_size == 0 {
            panic!("Window size must be greater than 0")
        }
        if window_distance > window_size || window_distance == 0 {
            panic!("Window distance must be > 0 and <= window_size")
        }

        AcfPitchDetector {
            sample_rate,
            window_size,
            window_distance,
            window_distance_counter: 0,
            processed_window_count: 0,
            input_buffer_write_index: 0,
            input_buffer: (vec![0.0; window_size]).into_boxed_slice(),
            has_filled_input_buffer: false,
            result: AcfPitchResult::new(window_size, sample_rate),
        }
    }

    /// Consumes a chunk of input samples, invoking `result_handler` once
    /// per newly filled window. The handler receives the index of the
    /// input sample just past the end of the window, along with the
    /// computed result.
    pub fn process<F>(&mut self, samples: &[i16], mut result_handler: F)
    where
        F: FnMut(usize, &AcfPitchResult),
    {
        for (sample_index, sample) in samples.iter().enumerate() {
            // Accumulate this sample
            self.input_buffer[self.input_buffer_write_index] = *sample as f32;

            // Advance write index, wrapping around the end of the input buffer
            self.input_buffer_write_index = (self.input_buffer_write_index + 1) % self.window_size;

            if !self.has_filled_input_buffer && self.input_buffer_write_index == 0 {
                // This is the first time the write index wrapped around to zero,
                // meaning we have filled the entire input buffer.
                self.has_filled_input_buffer = true
            }

            if self.has_filled_input_buffer {
                let should_process_window = self.window_distance_counter == 0;
                if should_process_window {
                    // Extract the window to analyze.
                    for target_index in 0..self.window_size {
                        let src_index =
                            (self.input_buffer_write_index + target_index) % self.window_size;
                        self.result.window[target_index] = self.input_buffer[src_index];
                    }

                    // Perform pitch detection
                    self.result.compute();
                    self.processed_window_count += 1;
                }
                self.window_distance_counter =
                    (self.window_distance_counter + 1) % self.window_distance;
                if should_process_window {
                    result_handler(sample_index + 1, &self.result);
                }
            }
        }
    }

    /// Returns the most recently computed pitch detection result.
    pub fn result(&self) -> &AcfPitchResult {
        &self.result
    }

    /// Returns the number of processed windows since the
    /// detector was created.
    pub fn processed_window_count(&self) -> usize {
        self.processed_window_count
    }

    /// Returns the fixed number of samples in a window.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the number of samples between windows.
    pub fn window_distance(&self) -> usize {
        self.window_distance
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
