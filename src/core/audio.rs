// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Host audio output for the simulated SCSP
//!
//! Plays what [`crate::core::sim::Scsp`] renders through the default cpal
//! output device, so the Sound Test beep is audible when the POST runs on
//! the host.

use crate::core::error::{PostError, Result};
use crate::core::sim::{AudioSink, SAMPLE_RATE};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

type SampleQueue = Arc<Mutex<VecDeque<(i16, i16)>>>;

fn lock(queue: &SampleQueue) -> MutexGuard<'_, VecDeque<(i16, i16)>> {
    queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// cpal output stream fed from a sample queue
///
/// # Example
///
/// ```no_run
/// use saturn_post::core::audio::AudioBackend;
/// use saturn_post::core::sim::SimSaturn;
///
/// let mut saturn = SimSaturn::new();
/// saturn.set_audio_sink(Box::new(AudioBackend::new().unwrap()));
/// ```
pub struct AudioBackend {
    #[allow(dead_code)]
    stream: cpal::Stream,
    sample_queue: SampleQueue,
    sample_rate: u32,
}

impl AudioBackend {
    /// Open the default output device and start the stream
    ///
    /// # Errors
    ///
    /// [`PostError::Audio`] if there is no output device, the device is not
    /// stereo, or the stream cannot be built or started.
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| PostError::Audio("No audio output device available".to_string()))?;

        let config = device
            .default_output_config()
            .map_err(|e| PostError::Audio(e.to_string()))?;
        let sample_rate = config.sample_rate().0;
        let channels = config.channels();

        if channels != 2 {
            return Err(PostError::Audio(format!(
                "device '{}' has {} channels, stereo required",
                device.name().unwrap_or_else(|_| "Unknown".to_string()),
                channels
            )));
        }

        if sample_rate != SAMPLE_RATE {
            log::warn!(
                "Audio: device runs at {} Hz, SCSP output is {} Hz; pitch will be off",
                sample_rate,
                SAMPLE_RATE
            );
        }

        log::info!(
            "Audio: using '{}' at {} Hz",
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            sample_rate
        );

        let sample_queue: SampleQueue = Arc::new(Mutex::new(VecDeque::new()));
        let queue_clone = sample_queue.clone();

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let mut queue = lock(&queue_clone);
                    for frame in data.chunks_mut(2) {
                        let (left, right) = queue.pop_front().unwrap_or((0, 0));
                        frame[0] = left as f32 / 32768.0;
                        if let Some(r) = frame.get_mut(1) {
                            *r = right as f32 / 32768.0;
                        }
                    }
                },
                |err| log::error!("Audio stream error: {}", err),
                None,
            )
            .map_err(|e| PostError::Audio(e.to_string()))?;

        stream
            .play()
            .map_err(|e| PostError::Audio(e.to_string()))?;

        Ok(Self {
            stream,
            sample_queue,
            sample_rate,
        })
    }

    /// Number of stereo samples waiting to be played
    pub fn buffer_level(&self) -> usize {
        lock(&self.sample_queue).len()
    }

    /// Output device sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl AudioSink for AudioBackend {
    fn queue_samples(&mut self, samples: &[(i16, i16)]) {
        lock(&self.sample_queue).extend(samples.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_backend_queue() {
        // No audio device on most CI machines
        match AudioBackend::new() {
            Ok(mut audio) => {
                assert!(audio.sample_rate() > 0);
                audio.queue_samples(&[(0, 0); 10]);
                assert!(audio.buffer_level() <= 10);
            }
            Err(e) => {
                println!("Audio backend creation failed (may be expected): {}", e);
            }
        }
    }
}
