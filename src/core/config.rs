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

//! POST configuration
//!
//! The deployed image has no file system and always runs with
//! [`PostConfig::default()`], which holds the platform constants. The host
//! harness can override any of them from a TOML file. Every section is
//! optional; a `[memory]` or `[vram]` section that is present must give
//! `words` and `key`.
//!
//! ```toml
//! [input]
//! repeat_guard = "edge"
//! settle_frames = 10
//!
//! [memory]
//! offset = 0
//! words = 0x1000
//! key = 0xAAAAAAAA
//!
//! [vram]
//! words = 0x20000
//! key = 0xAAAA
//!
//! [timing]
//! result_hold_frames = 120
//! color_dwell_frames = 60
//! tone_frames = 60
//! ```

use crate::core::controller::{InputPoller, RepeatGuard};
use crate::core::error::{PostError, Result};
use crate::core::pattern::{AddressRange, PatternVerifier};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete POST configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostConfig {
    pub input: InputConfig,
    pub memory: PatternConfig,
    pub vram: PatternConfig,
    pub timing: TimingConfig,
}

/// Pad repeat suppression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub repeat_guard: RepeatGuard,
    pub settle_frames: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            repeat_guard: RepeatGuard::Delay,
            settle_frames: InputPoller::DEFAULT_SETTLE_FRAMES,
        }
    }
}

impl InputConfig {
    pub fn poller(&self) -> InputPoller {
        InputPoller::new(self.repeat_guard, self.settle_frames)
    }
}

/// Range and key of one pattern test
///
/// `offset` and `words` count words of the region's bus width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    #[serde(default)]
    pub offset: u32,
    pub words: u32,
    pub key: u32,
}

impl PatternConfig {
    /// Work RAM test: the first 0x1000 longwords (16KB)
    pub const MEMORY: Self = Self {
        offset: 0,
        words: 0x1000,
        key: 0xAAAA_AAAA,
    };

    /// VDP1 VRAM test: all 0x20000 longwords (512KB)
    pub const VRAM: Self = Self {
        offset: 0,
        words: 0x2_0000,
        key: 0xAAAA,
    };

    pub fn verifier(&self) -> PatternVerifier {
        PatternVerifier::new(AddressRange::new(self.offset, self.words), self.key)
    }

    fn validate(&self, section: &str) -> Result<()> {
        if self.words == 0 {
            return Err(PostError::Config(format!("[{}] words must be non-zero", section)));
        }
        if self.key == 0 {
            return Err(PostError::Config(format!("[{}] key must be non-zero", section)));
        }
        Ok(())
    }
}

/// Frame counts for timed holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// Frames a pattern test result stays on screen
    pub result_hold_frames: u32,
    /// Frames each colour is shown by the Color Test
    pub color_dwell_frames: u32,
    /// Frames the Sound Test beep is keyed on
    pub tone_frames: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            result_hold_frames: 120,
            color_dwell_frames: 60,
            tone_frames: 60,
        }
    }
}

impl PostConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading config from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject settings the POST cannot run with
    pub fn validate(&self) -> Result<()> {
        self.memory.validate("memory")?;
        self.vram.validate("vram")?;
        if self.input.repeat_guard == RepeatGuard::Delay && self.input.settle_frames == 0 {
            return Err(PostError::Config(
                "[input] settle_frames must be non-zero with the delay guard".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            memory: PatternConfig::MEMORY,
            vram: PatternConfig::VRAM,
            timing: TimingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests;
