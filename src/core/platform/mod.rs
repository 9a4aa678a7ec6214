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

//! Hardware capabilities consumed by the POST
//!
//! Every piece of Saturn hardware the diagnostics touch is reached through a
//! trait in this module. The deployed image backs memory regions with
//! [`MmioPort`]; tests and the host harness use the simulated machine in
//! [`crate::core::sim`].
//!
//! | Capability        | Saturn hardware           | Used by                         |
//! |-------------------|---------------------------|---------------------------------|
//! | `work_ram()`      | Low work RAM              | Memory Test                     |
//! | `vram()`          | VDP1 VRAM                 | VRAM Test, Sprite Test          |
//! | `sound_ram()`     | SCSP sound RAM            | Sound Test                      |
//! | `sound()`         | SCSP slot registers       | Sound Test                      |
//! | `sprites()`       | VDP1 command table        | Sprite Test                     |
//! | `video()`         | VDP2 back screen / TVMD   | Color Test                      |
//! | `read_pad()`      | SMPC peripheral port 1    | Menu, Controller Test           |
//! | `console()`       | dbgio text plane on VDP2  | everything                      |
//! | `wait_frame()`    | VBlank-in                 | every polling loop              |

use std::fmt;

pub mod map;
mod mmio;
mod types;

pub use mmio::MmioPort;
pub use types::*;

use crate::core::controller::PadState;

/// Storage word of a memory-mapped region
///
/// Implemented for the three access widths the Saturn buses use. Conversions
/// from `u32` truncate, which is how a pattern value is narrowed to the bus
/// width.
pub trait Word: Copy + Eq + Default + fmt::Debug + fmt::UpperHex + Send + 'static {
    /// Width in bits
    const BITS: u32;

    /// Width in bytes
    const BYTES: u32 = Self::BITS / 8;

    /// Narrow a 32-bit value to this width
    fn from_u32(value: u32) -> Self;

    /// Widen to 32 bits
    fn to_u32(self) -> u32;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl Word for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn from_u32(value: u32) -> Self {
                    value as $ty
                }

                #[inline(always)]
                fn to_u32(self) -> u32 {
                    self as u32
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32);

/// Bounded read/write access to one memory-mapped region
///
/// Indices are word indices from the start of the region. Callers must stay
/// below [`MemoryPort::len`]; implementations panic on out-of-range indices
/// the same way slice indexing does.
pub trait MemoryPort<W: Word> {
    /// Bus address of word 0
    fn base_address(&self) -> u32;

    /// Number of addressable words
    fn len(&self) -> usize;

    /// Whether the region has no words
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read one word
    fn read(&mut self, index: usize) -> W;

    /// Write one word
    fn write(&mut self, index: usize, value: W);

    /// Bus address of the word at `index`
    fn address_of(&self, index: usize) -> u32 {
        self.base_address()
            .wrapping_add((index as u32).wrapping_mul(W::BYTES))
    }
}

/// Text console surface (dbgio)
pub trait Console {
    /// Clear the text plane
    fn clear(&mut self);

    /// Append text at the cursor
    fn print(&mut self, text: &str);

    /// Push buffered text to the display
    fn flush(&mut self);

    /// Append `text` followed by a newline
    fn print_line(&mut self, text: &str) {
        self.print(text);
        self.print("\n");
    }
}

/// VDP2 back screen and display control
pub trait VideoDisplay {
    /// Set the back screen colour
    fn set_back_color(&mut self, color: Rgb1555);

    /// Enable display output (TVMD DISP bit)
    fn display_on(&mut self);
}

/// VDP1 command submission
pub trait SpriteRenderer {
    /// Reset the command table and drawing state
    fn init(&mut self);

    /// Append one command to the command list
    fn submit(&mut self, command: SpriteCommand);

    /// Hand the command list to the renderer; it is drawn every frame from now on
    fn sync(&mut self);
}

/// SCSP sound slot control
pub trait SoundChip {
    /// Reset the sound chip: all slots keyed off, registers cleared
    fn init(&mut self);

    /// Program one slot
    fn configure(&mut self, slot: u8, config: &ChannelConfig);

    /// Start playback on a slot
    fn key_on(&mut self, slot: u8);

    /// Stop playback on a slot
    fn key_off(&mut self, slot: u8);
}

/// The whole machine as seen by the diagnostics
///
/// One logical thread of control owns the platform; each accessor hands out
/// exclusive access to one capability at a time.
pub trait Platform {
    fn console(&mut self) -> &mut dyn Console;

    fn work_ram(&mut self) -> &mut dyn MemoryPort<u32>;

    /// VDP1 VRAM as longwords, two texels each
    fn vram(&mut self) -> &mut dyn MemoryPort<u32>;

    fn sound_ram(&mut self) -> &mut dyn MemoryPort<u8>;

    fn sound(&mut self) -> &mut dyn SoundChip;

    fn sprites(&mut self) -> &mut dyn SpriteRenderer;

    fn video(&mut self) -> &mut dyn VideoDisplay;

    /// Sample controller port 1
    fn read_pad(&mut self) -> PadState;

    /// Capture r0..r3 at the call site
    fn capture_registers(&mut self) -> RegisterSnapshot;

    /// Suspend until the next vertical blank
    ///
    /// This is the only yield point in the system.
    fn wait_frame(&mut self);
}
