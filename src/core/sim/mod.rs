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

//! Simulated Saturn platform
//!
//! [`SimSaturn`] implements [`Platform`] entirely in host memory so the menu
//! and every diagnostic can be driven frame by frame. Each call to
//! `wait_frame()` is one VBlank: the pad advances to the next scripted
//! sample, VDP1 redraws its command list and the SCSP renders one frame of
//! audio.
//!
//! # Example
//!
//! ```
//! use saturn_post::core::controller::Buttons;
//! use saturn_post::core::platform::Platform;
//! use saturn_post::core::sim::{InputScript, SimSaturn};
//!
//! let mut saturn = SimSaturn::new();
//! saturn.set_script(InputScript::taps(&[Buttons::DOWN], 0));
//!
//! assert_eq!(saturn.read_pad().buttons, Buttons::DOWN);
//! saturn.wait_frame();
//! assert_eq!(saturn.read_pad().buttons, Buttons::empty());
//! assert_eq!(saturn.frame(), 1);
//! ```

mod console;
mod memory;
mod pad;
mod scsp;
mod vdp;

pub use console::TextConsole;
pub use memory::{Fault, SimMemory};
pub use pad::{InputScript, ScriptStep};
pub use scsp::{Scsp, SAMPLES_PER_FRAME, SAMPLE_RATE};
pub use vdp::{Vdp1, Vdp2};

use crate::core::controller::{Buttons, PadState};
use crate::core::platform::map::{
    SOUND_RAM_BASE, SOUND_RAM_BYTES, VDP1_VRAM_BASE, VDP1_VRAM_LONGS, WORK_RAM_BASE,
    WORK_RAM_WORDS,
};
use crate::core::platform::{
    Console, MemoryPort, Platform, RegisterSnapshot, SoundChip, SpriteRenderer, VideoDisplay,
};
use std::time::{Duration, Instant};

/// Destination for rendered sound output
pub trait AudioSink {
    fn queue_samples(&mut self, samples: &[(i16, i16)]);
}

/// Whole simulated machine
pub struct SimSaturn {
    pub console: TextConsole,
    pub work_ram: SimMemory<u32>,
    pub vram: SimMemory<u32>,
    pub sound_ram: SimMemory<u8>,
    pub scsp: Scsp,
    pub vdp1: Vdp1,
    pub vdp2: Vdp2,

    /// Values returned by register capture
    pub registers: [u32; RegisterSnapshot::COUNT],

    script: InputScript,
    pad: PadState,
    frame: u64,
    frame_limit: Option<u64>,

    /// Rendered audio not yet drained (when no sink is attached)
    audio: Vec<(i16, i16)>,
    audio_sink: Option<Box<dyn AudioSink>>,

    /// Real-time frame period, if pacing is enabled
    pacing: Option<Duration>,
    last_frame: Instant,
}

impl SimSaturn {
    /// Create a machine with the retail memory sizes
    pub fn new() -> Self {
        Self {
            console: TextConsole::new(),
            work_ram: SimMemory::new(WORK_RAM_BASE, WORK_RAM_WORDS),
            vram: SimMemory::new(VDP1_VRAM_BASE, VDP1_VRAM_LONGS),
            sound_ram: SimMemory::new(SOUND_RAM_BASE, SOUND_RAM_BYTES),
            scsp: Scsp::new(),
            vdp1: Vdp1::new(),
            vdp2: Vdp2::new(),
            registers: [0; RegisterSnapshot::COUNT],
            script: InputScript::new(),
            pad: PadState::default(),
            frame: 0,
            frame_limit: None,
            audio: Vec::new(),
            audio_sink: None,
            pacing: None,
            last_frame: Instant::now(),
        }
    }

    /// Replace the input script; its first sample is visible immediately
    pub fn set_script(&mut self, mut script: InputScript) {
        self.pad = script.next_frame().unwrap_or_default();
        self.script = script;
    }

    /// Append to the input script after what is still queued
    pub fn queue_input(&mut self, script: InputScript) {
        self.script.extend(script);
    }

    /// Frames still scripted after the current one
    pub fn script_remaining(&self) -> usize {
        self.script.len()
    }

    /// Frames elapsed since power-on
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Stop idling once `limit` frames have passed
    ///
    /// When the script has run out past the limit, Start is tapped every
    /// other frame so a test waiting for dismissal hands control back.
    pub fn set_frame_limit(&mut self, limit: u64) {
        self.frame_limit = Some(limit);
    }

    fn unscripted_pad(&self) -> PadState {
        match self.frame_limit {
            Some(limit) if self.frame >= limit && self.frame % 2 == 0 => {
                PadState::with_buttons(Buttons::START)
            }
            _ => PadState::default(),
        }
    }

    /// Send rendered audio to `sink` instead of buffering it
    pub fn set_audio_sink(&mut self, sink: Box<dyn AudioSink>) {
        self.audio_sink = Some(sink);
    }

    /// Drain buffered audio
    pub fn take_audio(&mut self) -> Vec<(i16, i16)> {
        std::mem::take(&mut self.audio)
    }

    /// Sleep in `wait_frame()` so frames pass at `fps`
    pub fn set_realtime(&mut self, fps: u32) {
        self.pacing = Some(Duration::from_secs(1) / fps.max(1));
        self.last_frame = Instant::now();
    }

    fn pace(&mut self) {
        if let Some(period) = self.pacing {
            let deadline = self.last_frame + period;
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
            self.last_frame = Instant::now();
        }
    }
}

impl Default for SimSaturn {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for SimSaturn {
    fn console(&mut self) -> &mut dyn Console {
        &mut self.console
    }

    fn work_ram(&mut self) -> &mut dyn MemoryPort<u32> {
        &mut self.work_ram
    }

    fn vram(&mut self) -> &mut dyn MemoryPort<u32> {
        &mut self.vram
    }

    fn sound_ram(&mut self) -> &mut dyn MemoryPort<u8> {
        &mut self.sound_ram
    }

    fn sound(&mut self) -> &mut dyn SoundChip {
        &mut self.scsp
    }

    fn sprites(&mut self) -> &mut dyn SpriteRenderer {
        &mut self.vdp1
    }

    fn video(&mut self) -> &mut dyn VideoDisplay {
        &mut self.vdp2
    }

    fn read_pad(&mut self) -> PadState {
        self.pad
    }

    fn capture_registers(&mut self) -> RegisterSnapshot {
        RegisterSnapshot::new(self.registers)
    }

    fn wait_frame(&mut self) {
        self.vdp1.draw_frame(self.vram.as_slice());

        match self.audio_sink.as_mut() {
            Some(sink) => {
                let mut frame_audio = Vec::new();
                self.scsp
                    .render_frame(self.sound_ram.as_slice(), &mut frame_audio);
                if !frame_audio.is_empty() {
                    sink.queue_samples(&frame_audio);
                }
            }
            None => self
                .scsp
                .render_frame(self.sound_ram.as_slice(), &mut self.audio),
        }

        self.pace();

        self.frame += 1;
        self.pad = match self.script.next_frame() {
            Some(pad) => pad,
            None => self.unscripted_pad(),
        };
    }
}
