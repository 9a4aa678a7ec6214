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

//! Scripted controller input
//!
//! An [`InputScript`] is a queue of per-frame pad samples. Scripts can be
//! built in code or loaded from TOML:
//!
//! ```toml
//! [[step]]
//! buttons = "DOWN"
//! frames = 1
//!
//! [[step]]
//! frames = 12          # idle
//!
//! [[step]]
//! buttons = "A | START"
//! analog_x = -40
//! frames = 2
//! ```

use crate::core::controller::{Buttons, PadState};
use crate::core::error::{PostError, Result};
use serde::Deserialize;
use std::collections::VecDeque;
use std::path::Path;

/// One run of identical pad samples
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub buttons: Buttons,
    #[serde(default)]
    pub analog_x: i16,
    #[serde(default)]
    pub analog_y: i16,
    #[serde(default = "default_step_frames")]
    pub frames: u32,
}

fn default_step_frames() -> u32 {
    1
}

impl ScriptStep {
    fn pad(&self) -> PadState {
        PadState {
            buttons: self.buttons,
            analog_x: self.analog_x,
            analog_y: self.analog_y,
        }
    }
}

#[derive(Deserialize)]
struct ScriptFile {
    #[serde(default, rename = "step")]
    steps: Vec<ScriptStep>,
}

/// Queue of pad samples, one per frame
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    frames: VecDeque<PadState>,
}

impl InputScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `pad` for `frames` frames
    pub fn push(&mut self, pad: PadState, frames: u32) -> &mut Self {
        self.frames
            .extend(std::iter::repeat(pad).take(frames as usize));
        self
    }

    /// Hold `buttons` for `frames` frames
    pub fn hold(&mut self, buttons: Buttons, frames: u32) -> &mut Self {
        self.push(PadState::with_buttons(buttons), frames)
    }

    /// Release everything for `frames` frames
    pub fn idle(&mut self, frames: u32) -> &mut Self {
        self.push(PadState::default(), frames)
    }

    /// One-frame presses, each followed by `gap` idle frames
    pub fn taps(buttons: &[Buttons], gap: u32) -> Self {
        let mut script = Self::new();
        for &b in buttons {
            script.hold(b, 1).idle(gap);
        }
        script
    }

    /// Parse a comma-separated tap list such as `"down, down, a+start"`
    ///
    /// Names are the button names (case-insensitive); `idle` is an empty
    /// press.
    pub fn parse_taps(list: &str, gap: u32) -> Result<Self> {
        let mut buttons = Vec::new();
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let mut mask = Buttons::empty();
            for name in token.split('+').map(str::trim) {
                if name.eq_ignore_ascii_case("idle") {
                    continue;
                }
                let flag = Buttons::from_name(&name.to_ascii_uppercase())
                    .ok_or_else(|| PostError::Script(format!("unknown button '{}'", name)))?;
                mask |= flag;
            }
            buttons.push(mask);
        }
        Ok(Self::taps(&buttons, gap))
    }

    /// Parse a TOML script
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ScriptFile = toml::from_str(text)?;
        let mut script = Self::new();
        for step in &file.steps {
            if step.frames == 0 {
                return Err(PostError::Script("step with zero frames".to_string()));
            }
            script.push(step.pad(), step.frames);
        }
        Ok(script)
    }

    /// Load a TOML script from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Append another script
    pub fn extend(&mut self, other: InputScript) -> &mut Self {
        self.frames.extend(other.frames);
        self
    }

    /// Sample for the next frame
    pub fn next_frame(&mut self) -> Option<PadState> {
        self.frames.pop_front()
    }

    /// Remaining frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
