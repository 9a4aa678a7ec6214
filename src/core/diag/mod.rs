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

//! Diagnostic tests
//!
//! Every diagnostic implements [`DiagnosticTest`]: run to completion against
//! the platform, print through the console, and return a [`TestResult`].
//! Tests that keep something on screen (the controller monitor, the sprite,
//! the register dump) run their own wait-for-Start loop; the pattern tests
//! hold their result for a fixed number of frames instead.
//!
//! | Test               | Hardware touched             | Verdict          |
//! |--------------------|------------------------------|------------------|
//! | Memory Test        | work RAM                     | PASS / FAIL      |
//! | Color Test         | VDP2 back screen             | none (visual)    |
//! | Controller Test    | pad port                     | none (echo)      |
//! | Sound Test         | sound RAM, SCSP slot 0       | none (audible)   |
//! | Sprite Test        | VDP1 VRAM, VDP1 command list | none (visual)    |
//! | VRAM Test          | VDP1 VRAM                    | PASS / FAIL      |
//! | CPU Register Dump  | r0..r3                       | none             |

mod color;
mod controller;
mod pattern;
mod registers;
mod sound;
mod sprite;

#[cfg(test)]
mod tests;

pub use color::{ColorCyclePresentation, COLOR_SEQUENCE};
pub use controller::ControllerMonitor;
pub use pattern::{MemoryPatternTest, VramPatternTest};
pub use registers::RegisterSnapshotTest;
pub use sound::{AudioChannelExerciser, BEEP_SAMPLE};
pub use sprite::{
    SpriteRenderExerciser, SPRITE_COLOR, SPRITE_COLOR_PAIR, SPRITE_SIZE, SPRITE_X, SPRITE_Y,
};

use crate::core::config::TimingConfig;
use crate::core::controller::{Buttons, InputPoller};
use crate::core::error::VerificationFailure;
use crate::core::platform::Platform;
use std::fmt;

/// Outcome of one diagnostic run
///
/// Only shown on screen; never stored beyond the menu's last result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    /// Pattern verified
    Pass,
    /// Pattern mismatch
    Fail(VerificationFailure),
    /// Presentation test ran to the end; the operator judges it
    Complete,
    /// The test could not run (misconfigured range)
    Aborted(String),
}

impl TestResult {
    /// Whether the run found no fault
    pub fn passed(&self) -> bool {
        matches!(self, TestResult::Pass | TestResult::Complete)
    }

    pub fn failure(&self) -> Option<&VerificationFailure> {
        match self {
            TestResult::Fail(failure) => Some(failure),
            _ => None,
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestResult::Pass => write!(f, "PASS"),
            TestResult::Fail(failure) => write!(f, "FAIL at {:08x}", failure.address),
            TestResult::Complete => write!(f, "Complete"),
            TestResult::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Everything a running test may use
pub struct TestContext<'a> {
    pub hw: &'a mut dyn Platform,
    pub input: &'a mut InputPoller,
    pub timing: &'a TimingConfig,
}

impl<'a> TestContext<'a> {
    pub fn new(
        hw: &'a mut dyn Platform,
        input: &'a mut InputPoller,
        timing: &'a TimingConfig,
    ) -> Self {
        Self { hw, input, timing }
    }

    /// Print one line and push it to the screen
    pub fn report(&mut self, line: &str) {
        let console = self.hw.console();
        console.print_line(line);
        console.flush();
    }

    /// Let `frames` frames pass
    pub fn wait_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.hw.wait_frame();
        }
    }

    /// Poll once per frame until Start is pressed, then apply the repeat guard
    pub fn wait_for_dismissal(&mut self) {
        loop {
            self.input.sample(self.hw);
            if self.input.pressed(Buttons::DISMISS) {
                self.input.settle(self.hw);
                return;
            }
            self.hw.wait_frame();
        }
    }
}

/// A diagnostic selectable from the menu
pub trait DiagnosticTest {
    /// Menu label
    fn name(&self) -> &'static str;

    /// Run to completion
    ///
    /// Control does not return to the menu until this does; there is no
    /// cancellation.
    fn run(&mut self, ctx: &mut TestContext<'_>) -> TestResult;
}
