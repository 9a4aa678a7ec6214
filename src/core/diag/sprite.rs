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

//! Single-sprite render exerciser

use super::{DiagnosticTest, TestContext, TestResult};
use crate::core::platform::{BitmapFormat, CommandKind, SpriteCommand};

/// Sprite edge length in pixels
pub const SPRITE_SIZE: u16 = 16;

/// Sprite pixel colour (RGB555 white)
pub const SPRITE_COLOR: u16 = 0x7FFF;

/// Two sprite texels packed into one VRAM longword
pub const SPRITE_COLOR_PAIR: u32 = ((SPRITE_COLOR as u32) << 16) | SPRITE_COLOR as u32;

/// Screen position of the sprite
pub const SPRITE_X: i16 = 100;
pub const SPRITE_Y: i16 = 100;

/// Draws one white 16×16 bitmap sprite and waits for Start
#[derive(Debug, Clone, Copy, Default)]
pub struct SpriteRenderExerciser;

impl SpriteRenderExerciser {
    /// Bitmap command for a sprite stored at VRAM offset 0
    pub fn command() -> SpriteCommand {
        SpriteCommand {
            kind: CommandKind::Bitmap,
            link: SpriteCommand::END_OF_LIST,
            format: BitmapFormat::Rgb16,
            width: SPRITE_SIZE,
            height: SPRITE_SIZE,
            vram_offset: 0,
            x: SPRITE_X,
            y: SPRITE_Y,
        }
    }
}

impl DiagnosticTest for SpriteRenderExerciser {
    fn name(&self) -> &'static str {
        "Sprite Test"
    }

    fn run(&mut self, ctx: &mut TestContext<'_>) -> TestResult {
        ctx.hw.sprites().init();

        let vram = ctx.hw.vram();
        let longs = SPRITE_SIZE as usize * SPRITE_SIZE as usize / 2;
        for i in 0..longs {
            vram.write(i, SPRITE_COLOR_PAIR);
        }

        let sprites = ctx.hw.sprites();
        sprites.submit(Self::command());
        sprites.sync();

        ctx.report("Sprite Test complete.");
        ctx.report("Press Start to return.");
        ctx.wait_for_dismissal();

        TestResult::Complete
    }
}
