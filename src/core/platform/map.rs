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

//! Saturn address map (cache-through mirror)
//!
//! | Address range           | Region          | Size   | Access width |
//! |-------------------------|-----------------|--------|--------------|
//! | 0x20200000-0x202FFFFF   | Low work RAM    | 1MB    | 32-bit       |
//! | 0x25A00000-0x25A7FFFF   | SCSP sound RAM  | 512KB  | 8-bit        |
//! | 0x25C00000-0x25C7FFFF   | VDP1 VRAM       | 512KB  | 32-bit       |
//!
//! VDP1 reads VRAM as 16-bit texels; the CPU side reaches it a longword at a
//! time, high half at the lower address.

/// Low work RAM base
pub const WORK_RAM_BASE: u32 = 0x2020_0000;

/// Low work RAM size in 32-bit words
pub const WORK_RAM_WORDS: usize = 0x10_0000 / 4;

/// SCSP sound RAM base
pub const SOUND_RAM_BASE: u32 = 0x25A0_0000;

/// SCSP sound RAM size in bytes
pub const SOUND_RAM_BYTES: usize = 0x8_0000;

/// VDP1 VRAM base
pub const VDP1_VRAM_BASE: u32 = 0x25C0_0000;

/// VDP1 VRAM size in 32-bit words
pub const VDP1_VRAM_LONGS: usize = 0x8_0000 / 4;

/// Visible screen width used by the sprite renderer
pub const SCREEN_WIDTH: usize = 320;

/// Visible screen height used by the sprite renderer
pub const SCREEN_HEIGHT: usize = 224;

/// Number of SCSP slots
pub const SOUND_SLOTS: usize = 32;

/// Frames per second (NTSC)
pub const FRAME_RATE: u32 = 60;
