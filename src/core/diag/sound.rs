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

//! Sound slot exerciser

use super::{DiagnosticTest, TestContext, TestResult};
use crate::core::platform::{ChannelConfig, LoopMode, PcmFormat};

/// 32-sample square wave, two periods
pub const BEEP_SAMPLE: [u8; 32] = [
    0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
];

/// Slot used for the beep
const BEEP_SLOT: u8 = 0;

/// Plays [`BEEP_SAMPLE`] on one SCSP slot
#[derive(Debug, Clone, Copy, Default)]
pub struct AudioChannelExerciser;

impl AudioChannelExerciser {
    /// Slot parameters for the beep stored at sound RAM offset 0
    pub fn channel_config() -> ChannelConfig {
        ChannelConfig {
            start_address: 0,
            loop_start: 0,
            loop_end: (BEEP_SAMPLE.len() - 1) as u16,
            format: PcmFormat::Pcm8,
            loop_mode: LoopMode::Off,
            volume_left: 0x3F,
            volume_right: 0x3F,
            pitch: 0x1000,
        }
    }
}

impl DiagnosticTest for AudioChannelExerciser {
    fn name(&self) -> &'static str {
        "Sound Test"
    }

    fn run(&mut self, ctx: &mut TestContext<'_>) -> TestResult {
        ctx.hw.sound().init();

        let ram = ctx.hw.sound_ram();
        for (i, &byte) in BEEP_SAMPLE.iter().enumerate() {
            ram.write(i, byte);
        }

        let sound = ctx.hw.sound();
        sound.configure(BEEP_SLOT, &Self::channel_config());
        sound.key_on(BEEP_SLOT);

        ctx.wait_frames(ctx.timing.tone_frames);

        ctx.hw.sound().key_off(BEEP_SLOT);
        ctx.report("Sound Test Complete.");
        TestResult::Complete
    }
}
