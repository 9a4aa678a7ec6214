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

//! Saturn control pad input
//!
//! The pad is sampled once per frame into a [`PadState`]. Callers ask whether
//! a button is *held*; to stop one physical press from firing on several
//! consecutive frames the [`InputPoller`] applies a [`RepeatGuard`] after
//! every accepted action.
//!
//! # Button Layout
//!
//! Bits follow the two SMPC peripheral data bytes of the digital pad,
//! inverted so that 1 means pressed:
//!
//! | Bit | Button | Bit | Button |
//! |-----|--------|-----|--------|
//! | 15  | Right  | 7   | R      |
//! | 14  | Left   | 6   | X      |
//! | 13  | Down   | 5   | Y      |
//! | 12  | Up     | 4   | Z      |
//! | 11  | Start  | 3   | L      |
//! | 10  | A      |     |        |
//! | 9   | C      |     |        |
//! | 8   | B      |     |        |

use crate::core::platform::Platform;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

bitflags! {
    /// Held-button mask of one pad sample
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Buttons: u16 {
        const RIGHT = 1 << 15;
        const LEFT = 1 << 14;
        const DOWN = 1 << 13;
        const UP = 1 << 12;
        const START = 1 << 11;
        const A = 1 << 10;
        const C = 1 << 9;
        const B = 1 << 8;
        const R = 1 << 7;
        const X = 1 << 6;
        const Y = 1 << 5;
        const Z = 1 << 4;
        const L = 1 << 3;
    }
}

impl Buttons {
    /// Buttons that select a menu entry or leave the result screen
    pub const ACCEPT: Self = Self::A.union(Self::START);

    /// Button that ends a test's own wait loop
    pub const DISMISS: Self = Self::START;
}

/// One controller sample
///
/// Replaced wholesale on every poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PadState {
    pub buttons: Buttons,
    pub analog_x: i16,
    pub analog_y: i16,
}

impl PadState {
    /// Sample with only digital buttons held
    pub fn with_buttons(buttons: Buttons) -> Self {
        Self {
            buttons,
            ..Self::default()
        }
    }

    /// Whether any button in `mask` is held
    pub fn held(&self, mask: Buttons) -> bool {
        self.buttons.intersects(mask)
    }
}

/// How repeated reads of one press are suppressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatGuard {
    /// Wait a fixed number of frames after each action
    #[default]
    Delay,
    /// Ignore a button until it has been released once after an action
    Edge,
}

/// Menu navigation decoded from one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Up,
    Down,
    Accept,
}

/// Per-frame pad sampler with repeat suppression
#[derive(Debug, Clone)]
pub struct InputPoller {
    guard: RepeatGuard,
    settle_frames: u32,
    current: PadState,

    /// Buttons consumed by an action and not yet released (edge mode only)
    latched: Buttons,
}

impl InputPoller {
    /// Post-action delay used by the POST menu
    pub const DEFAULT_SETTLE_FRAMES: u32 = 10;

    pub fn new(guard: RepeatGuard, settle_frames: u32) -> Self {
        Self {
            guard,
            settle_frames,
            current: PadState::default(),
            latched: Buttons::empty(),
        }
    }

    pub fn guard(&self) -> RepeatGuard {
        self.guard
    }

    /// Last sample taken
    pub fn current(&self) -> PadState {
        self.current
    }

    /// Take this frame's sample
    pub fn sample(&mut self, hw: &mut dyn Platform) -> PadState {
        let state = hw.read_pad();

        // A released button may trigger again
        self.latched &= state.buttons;
        self.current = state;

        log::trace!(
            "Pad: buttons=0x{:04X} x={} y={}",
            state.buttons.bits(),
            state.analog_x,
            state.analog_y
        );
        state
    }

    /// Whether a button in `mask` is held and available for a new action
    pub fn pressed(&self, mask: Buttons) -> bool {
        self.current
            .buttons
            .difference(self.latched)
            .intersects(mask)
    }

    /// Decode navigation from the current sample
    ///
    /// Up wins over Down, Down over Accept; at most one action per frame.
    pub fn navigation(&self) -> Option<NavAction> {
        if self.pressed(Buttons::UP) {
            Some(NavAction::Up)
        } else if self.pressed(Buttons::DOWN) {
            Some(NavAction::Down)
        } else if self.pressed(Buttons::ACCEPT) {
            Some(NavAction::Accept)
        } else {
            None
        }
    }

    /// Apply the repeat guard after an accepted action
    pub fn settle(&mut self, hw: &mut dyn Platform) {
        match self.guard {
            RepeatGuard::Delay => {
                for _ in 0..self.settle_frames {
                    hw.wait_frame();
                }
            }
            RepeatGuard::Edge => {
                self.latched |= self.current.buttons;
            }
        }
    }
}

impl Default for InputPoller {
    fn default() -> Self {
        Self::new(RepeatGuard::Delay, Self::DEFAULT_SETTLE_FRAMES)
    }
}
