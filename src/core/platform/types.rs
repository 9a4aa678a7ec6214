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

//! Value types exchanged with the hardware capabilities

use std::fmt;

/// 16-bit colour in 1-5-5-5 format
///
/// - Bits 0-4: Red
/// - Bits 5-9: Green
/// - Bits 10-14: Blue
/// - Bit 15: MSB (set for direct colour)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb1555(pub u16);

impl Rgb1555 {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(31, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 31, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 31);
    pub const WHITE: Self = Self::rgb(31, 31, 31);

    /// Build a direct colour from 5-bit components
    ///
    /// Components above 31 are masked.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(
            0x8000
                | ((b as u16 & 0x1F) << 10)
                | ((g as u16 & 0x1F) << 5)
                | (r as u16 & 0x1F),
        )
    }

    pub fn r(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    pub fn g(self) -> u8 {
        ((self.0 >> 5) & 0x1F) as u8
    }

    pub fn b(self) -> u8 {
        ((self.0 >> 10) & 0x1F) as u8
    }
}

/// VDP1 command kinds used by the POST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Normal sprite: unscaled bitmap at a screen position
    Bitmap,
}

/// Colour mode of a VDP1 character pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapFormat {
    /// 16-bit RGB, no lookup table
    Rgb16,
}

/// One VDP1 command table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteCommand {
    pub kind: CommandKind,

    /// Next command index; 0xFFFF ends the list
    pub link: u16,

    pub format: BitmapFormat,

    /// Bitmap width in pixels
    pub width: u16,

    /// Bitmap height in pixels
    pub height: u16,

    /// Texel offset of the bitmap inside VDP1 VRAM
    pub vram_offset: u32,

    /// Screen position of the upper-left corner
    pub x: i16,
    pub y: i16,
}

impl SpriteCommand {
    /// End-of-list link value
    pub const END_OF_LIST: u16 = 0xFFFF;
}

/// SCSP sample format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PcmFormat {
    /// 8-bit signed samples
    #[default]
    Pcm8,
    /// 16-bit signed samples
    Pcm16,
}

/// SCSP loop control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Play once from start to loop end, then stop
    #[default]
    Off,
    /// Jump back to loop start after loop end
    Forward,
}

/// Parameters for one SCSP slot
///
/// Addresses are sample offsets into sound RAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelConfig {
    pub start_address: u32,
    pub loop_start: u16,
    pub loop_end: u16,
    pub format: PcmFormat,
    pub loop_mode: LoopMode,

    /// Left/right volume, 0..=0x3F
    pub volume_left: u8,
    pub volume_right: u8,

    /// Playback step in 4.12 fixed point (0x1000 = one sample per output sample)
    pub pitch: u16,
}

/// Point-in-time copy of r0..r3
///
/// There is no fault context attached; the values are whatever the
/// registers held when the capture ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterSnapshot {
    regs: [u32; RegisterSnapshot::COUNT],
}

impl RegisterSnapshot {
    /// Number of captured registers
    pub const COUNT: usize = 4;

    pub fn new(regs: [u32; Self::COUNT]) -> Self {
        Self { regs }
    }

    /// Value of register `rN`
    pub fn reg(&self, index: usize) -> Option<u32> {
        self.regs.get(index).copied()
    }

    /// (register number, value) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.regs.iter().copied().enumerate()
    }
}

impl fmt::Display for RegisterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter() {
            writeln!(f, "r{}: {:08x}", i, value)?;
        }
        Ok(())
    }
}
