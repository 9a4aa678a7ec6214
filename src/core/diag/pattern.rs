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

//! Memory and VRAM pattern tests

use super::{DiagnosticTest, TestContext, TestResult};
use crate::core::config::PatternConfig;
use crate::core::error::{PostError, Result};
use crate::core::pattern::PatternVerifier;

/// Print the verdict of a pattern pass and hold it on screen
fn conclude(ctx: &mut TestContext<'_>, label: &str, outcome: Result<u32>) -> TestResult {
    let result = match outcome {
        Ok(words) => {
            log::info!("{} PASS ({} words)", label, words);
            ctx.report(&format!("{} PASS", label));
            TestResult::Pass
        }
        Err(PostError::Verification(failure)) => {
            ctx.report(&format!("{} FAIL at {:08x}", label, failure.address));
            TestResult::Fail(failure)
        }
        Err(e) => {
            log::error!("{} not run: {}", label, e);
            ctx.report(&format!("{} not run: {}", label, e));
            TestResult::Aborted(e.to_string())
        }
    };

    ctx.wait_frames(ctx.timing.result_hold_frames);
    result
}

/// Pattern pass over a small slice of work RAM
#[derive(Debug, Clone)]
pub struct MemoryPatternTest {
    verifier: PatternVerifier,
}

impl MemoryPatternTest {
    pub fn new(config: &PatternConfig) -> Self {
        Self {
            verifier: config.verifier(),
        }
    }

    pub fn verifier(&self) -> &PatternVerifier {
        &self.verifier
    }
}

impl Default for MemoryPatternTest {
    fn default() -> Self {
        Self::new(&PatternConfig::MEMORY)
    }
}

impl DiagnosticTest for MemoryPatternTest {
    fn name(&self) -> &'static str {
        "Memory Test"
    }

    fn run(&mut self, ctx: &mut TestContext<'_>) -> TestResult {
        let outcome = self.verifier.run(ctx.hw.work_ram());
        conclude(ctx, "Memory test", outcome)
    }
}

/// Pattern pass over VDP1 VRAM
#[derive(Debug, Clone)]
pub struct VramPatternTest {
    verifier: PatternVerifier,
}

impl VramPatternTest {
    pub fn new(config: &PatternConfig) -> Self {
        Self {
            verifier: config.verifier(),
        }
    }

    pub fn verifier(&self) -> &PatternVerifier {
        &self.verifier
    }

    /// Run the test and return only whether VRAM verified
    pub fn check(&mut self, ctx: &mut TestContext<'_>) -> bool {
        self.run(ctx).passed()
    }
}

impl Default for VramPatternTest {
    fn default() -> Self {
        Self::new(&PatternConfig::VRAM)
    }
}

impl DiagnosticTest for VramPatternTest {
    fn name(&self) -> &'static str {
        "VRAM Test"
    }

    fn run(&mut self, ctx: &mut TestContext<'_>) -> TestResult {
        let outcome = self.verifier.run(ctx.hw.vram());
        conclude(ctx, "VRAM test", outcome)
    }
}
