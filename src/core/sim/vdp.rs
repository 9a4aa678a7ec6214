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

//! Simulated VDP1 (sprites) and VDP2 (back screen)
//!
//! Only the parts the POST exercises are modelled: unscaled 16-bit bitmap
//! sprites drawn from VDP1 VRAM into a 320×224 framebuffer, and the VDP2
//! back screen colour with the display enable bit.

use crate::core::platform::map::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::platform::{
    BitmapFormat, CommandKind, Rgb1555, SpriteCommand, SpriteRenderer, VideoDisplay,
};

/// VDP1 command processor and framebuffer
#[derive(Debug, Clone)]
pub struct Vdp1 {
    /// Commands submitted since the last sync
    pending: Vec<SpriteCommand>,

    /// Command list handed over by the last sync, drawn every frame
    list: Vec<SpriteCommand>,

    framebuffer: Vec<u16>,
    frames_drawn: u64,
    initialized: bool,
}

impl Vdp1 {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            list: Vec::new(),
            framebuffer: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT],
            frames_drawn: 0,
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Command list currently being presented
    pub fn command_list(&self) -> &[SpriteCommand] {
        &self.list
    }

    /// Number of frames that drew a non-empty command list
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Framebuffer pixel, or `None` off screen
    pub fn pixel(&self, x: usize, y: usize) -> Option<u16> {
        if x < SCREEN_WIDTH && y < SCREEN_HEIGHT {
            Some(self.framebuffer[y * SCREEN_WIDTH + x])
        } else {
            None
        }
    }

    /// Draw the current command list from `vram`
    pub fn draw_frame(&mut self, vram: &[u32]) {
        if self.list.is_empty() {
            return;
        }

        self.framebuffer.fill(0);
        for command in &self.list {
            match (command.kind, command.format) {
                (CommandKind::Bitmap, BitmapFormat::Rgb16) => {
                    Self::draw_bitmap(&mut self.framebuffer, command, vram)
                }
            }
            if command.link == SpriteCommand::END_OF_LIST {
                break;
            }
        }
        self.frames_drawn += 1;
    }

    /// Texel `index` of VRAM; even texels sit in the high half of a longword
    fn texel(vram: &[u32], index: usize) -> Option<u16> {
        let long = *vram.get(index / 2)?;
        Some(if index % 2 == 0 {
            (long >> 16) as u16
        } else {
            long as u16
        })
    }

    fn draw_bitmap(framebuffer: &mut [u16], command: &SpriteCommand, vram: &[u32]) {
        let width = command.width as usize;
        for row in 0..command.height as usize {
            let sy = command.y as isize + row as isize;
            if sy < 0 || sy >= SCREEN_HEIGHT as isize {
                continue;
            }
            for col in 0..width {
                let sx = command.x as isize + col as isize;
                if sx < 0 || sx >= SCREEN_WIDTH as isize {
                    continue;
                }
                let texel_index = command.vram_offset as usize + row * width + col;
                if let Some(texel) = Self::texel(vram, texel_index) {
                    framebuffer[sy as usize * SCREEN_WIDTH + sx as usize] = texel;
                }
            }
        }
    }
}

impl Default for Vdp1 {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteRenderer for Vdp1 {
    fn init(&mut self) {
        self.pending.clear();
        self.list.clear();
        self.framebuffer.fill(0);
        self.initialized = true;
        log::debug!("VDP1: init");
    }

    fn submit(&mut self, command: SpriteCommand) {
        log::trace!("VDP1: submit {:?}", command);
        self.pending.push(command);
    }

    fn sync(&mut self) {
        self.list = std::mem::take(&mut self.pending);
        log::debug!("VDP1: sync, {} command(s)", self.list.len());
    }
}

/// VDP2 back screen state
#[derive(Debug, Clone, Default)]
pub struct Vdp2 {
    back_color: Rgb1555,
    history: Vec<Rgb1555>,
    display_enabled: bool,
}

impl Vdp2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn back_color(&self) -> Rgb1555 {
        self.back_color
    }

    /// Every colour written to the back screen, in order
    pub fn color_history(&self) -> &[Rgb1555] {
        &self.history
    }

    pub fn display_enabled(&self) -> bool {
        self.display_enabled
    }
}

impl VideoDisplay for Vdp2 {
    fn set_back_color(&mut self, color: Rgb1555) {
        log::trace!("VDP2: back color 0x{:04X}", color.0);
        self.back_color = color;
        self.history.push(color);
    }

    fn display_on(&mut self) {
        self.display_enabled = true;
    }
}
