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

//! Simulated SCSP sound slots
//!
//! Each slot plays signed PCM straight out of sound RAM with a fixed-point
//! step and per-side volume. There is no envelope, FM or DSP: a slot is
//! either playing at full programmed volume or silent.

use crate::core::platform::map::{FRAME_RATE, SOUND_SLOTS};
use crate::core::platform::{ChannelConfig, LoopMode, PcmFormat, SoundChip};

/// Output sample rate
pub const SAMPLE_RATE: u32 = 44_100;

/// Stereo samples rendered per video frame
pub const SAMPLES_PER_FRAME: usize = (SAMPLE_RATE / FRAME_RATE) as usize;

/// Maximum slot volume
const MAX_VOLUME: i32 = 0x3F;

/// Fractional bits of the playback position and pitch
const PITCH_SHIFT: u32 = 12;

/// One sound slot
#[derive(Debug, Clone, Default)]
struct Slot {
    config: ChannelConfig,

    /// Slot keyed on and not yet past the end of a one-shot sample
    playing: bool,

    /// Position in samples relative to the start address, 20.12 fixed point
    position: u32,
}

impl Slot {
    fn key_on(&mut self) {
        self.playing = true;
        self.position = 0;
    }

    fn fetch(&self, ram: &[u8]) -> i16 {
        let index = self.position >> PITCH_SHIFT;
        let start = self.config.start_address as usize;
        match self.config.format {
            PcmFormat::Pcm8 => {
                ram.get(start + index as usize)
                    .map_or(0, |&byte| ((byte as i8) as i16) << 8)
            }
            PcmFormat::Pcm16 => {
                let at = start + index as usize * 2;
                match (ram.get(at), ram.get(at + 1)) {
                    (Some(&hi), Some(&lo)) => i16::from_be_bytes([hi, lo]),
                    _ => 0,
                }
            }
        }
    }

    fn advance(&mut self) {
        self.position = self.position.wrapping_add(self.config.pitch as u32);

        if (self.position >> PITCH_SHIFT) > self.config.loop_end as u32 {
            match self.config.loop_mode {
                LoopMode::Off => self.playing = false,
                LoopMode::Forward => {
                    self.position = (self.config.loop_start as u32) << PITCH_SHIFT;
                }
            }
        }
    }
}

/// SCSP model with 32 slots
#[derive(Debug, Clone)]
pub struct Scsp {
    slots: Vec<Slot>,
    initialized: bool,
    key_on_events: u32,
}

impl Scsp {
    pub fn new() -> Self {
        Self {
            slots: vec![Slot::default(); SOUND_SLOTS],
            initialized: false,
            key_on_events: 0,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether `slot` is currently producing sound
    pub fn is_playing(&self, slot: u8) -> bool {
        self.slots
            .get(slot as usize)
            .is_some_and(|s| s.playing)
    }

    /// Programmed parameters of `slot`
    pub fn slot_config(&self, slot: u8) -> Option<&ChannelConfig> {
        self.slots.get(slot as usize).map(|s| &s.config)
    }

    /// Total key-on requests since reset
    pub fn key_on_events(&self) -> u32 {
        self.key_on_events
    }

    /// Render one frame of output from `ram` into `out`
    ///
    /// Nothing is appended while every slot is silent.
    pub fn render_frame(&mut self, ram: &[u8], out: &mut Vec<(i16, i16)>) {
        if !self.slots.iter().any(|s| s.playing) {
            return;
        }

        out.reserve(SAMPLES_PER_FRAME);
        for _ in 0..SAMPLES_PER_FRAME {
            let mut left = 0i32;
            let mut right = 0i32;

            for slot in self.slots.iter_mut().filter(|s| s.playing) {
                let sample = slot.fetch(ram) as i32;
                left += sample * slot.config.volume_left.min(0x3F) as i32 / MAX_VOLUME;
                right += sample * slot.config.volume_right.min(0x3F) as i32 / MAX_VOLUME;
                slot.advance();
            }

            out.push((
                left.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
                right.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
            ));
        }
    }

    fn slot_mut(&mut self, slot: u8) -> Option<&mut Slot> {
        let found = self.slots.get_mut(slot as usize);
        if found.is_none() {
            log::warn!("SCSP: slot {} out of range", slot);
        }
        found
    }
}

impl Default for Scsp {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundChip for Scsp {
    fn init(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = Slot::default());
        self.initialized = true;
        self.key_on_events = 0;
        log::debug!("SCSP: init");
    }

    fn configure(&mut self, slot: u8, config: &ChannelConfig) {
        if let Some(s) = self.slot_mut(slot) {
            s.config = *config;
        }
    }

    fn key_on(&mut self, slot: u8) {
        if let Some(s) = self.slot_mut(slot) {
            s.key_on();
            self.key_on_events += 1;
            log::trace!("SCSP: slot {} key on", slot);
        }
    }

    fn key_off(&mut self, slot: u8) {
        if let Some(s) = self.slot_mut(slot) {
            s.playing = false;
            log::trace!("SCSP: slot {} key off", slot);
        }
    }
}
