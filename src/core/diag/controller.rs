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

//! Live controller echo

use super::{DiagnosticTest, TestContext, TestResult};
use crate::core::controller::Buttons;

/// Redraws the pad state every frame until Start is pressed
///
/// There is nothing to verify; the operator watches the bits change.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerMonitor;

impl DiagnosticTest for ControllerMonitor {
    fn name(&self) -> &'static str {
        "Controller Test"
    }

    fn run(&mut self, ctx: &mut TestContext<'_>) -> TestResult {
        loop {
            let pad = ctx.input.sample(ctx.hw);

            let console = ctx.hw.console();
            console.clear();
            console.print_line("Controller Input:");
            console.print_line(&format!("Buttons: 0x{:04x}", pad.buttons.bits()));
            console.print_line(&format!("Analog X: {}", pad.analog_x));
            console.print_line(&format!("Analog Y: {}", pad.analog_y));
            console.print_line("");
            console.print_line("Press Start to return");
            console.flush();

            if ctx.input.pressed(Buttons::DISMISS) {
                ctx.input.settle(ctx.hw);
                break;
            }

            ctx.hw.wait_frame();
        }

        TestResult::Complete
    }
}
