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

//! Background colour cycle

use super::{DiagnosticTest, TestContext, TestResult};
use crate::core::platform::Rgb1555;

/// Colours shown in order, each for the configured dwell time
pub const COLOR_SEQUENCE: [Rgb1555; 4] = [
    Rgb1555::RED,
    Rgb1555::GREEN,
    Rgb1555::BLUE,
    Rgb1555::WHITE,
];

/// Fills the back screen with primary colours for the operator to judge
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorCyclePresentation;

impl DiagnosticTest for ColorCyclePresentation {
    fn name(&self) -> &'static str {
        "Color Test"
    }

    fn run(&mut self, ctx: &mut TestContext<'_>) -> TestResult {
        let dwell = ctx.timing.color_dwell_frames;

        for (i, color) in COLOR_SEQUENCE.iter().enumerate() {
            let video = ctx.hw.video();
            video.set_back_color(*color);
            if i == 0 {
                video.display_on();
            }
            ctx.wait_frames(dwell);
        }

        ctx.hw.video().set_back_color(Rgb1555::BLACK);
        ctx.report("Color Test complete.");
        TestResult::Complete
    }
}
