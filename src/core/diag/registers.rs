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

//! CPU register dump

use super::{DiagnosticTest, TestContext, TestResult};

/// Shows r0..r3 as they were when the capture ran
///
/// The values have no relation to any earlier fault; this is a liveness
/// check of the display path more than a debugging aid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterSnapshotTest;

impl DiagnosticTest for RegisterSnapshotTest {
    fn name(&self) -> &'static str {
        "CPU Register Dump"
    }

    fn run(&mut self, ctx: &mut TestContext<'_>) -> TestResult {
        let snapshot = ctx.hw.capture_registers();
        log::debug!("Register snapshot: {:?}", snapshot);

        let console = ctx.hw.console();
        console.print_line("CPU Registers:");
        console.print(&snapshot.to_string());
        console.flush();

        ctx.report("Press Start to return.");
        ctx.wait_for_dismissal();

        TestResult::Complete
    }
}
