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

//! Test fixtures for common POST scenarios

use saturn_post::core::config::{PostConfig, TimingConfig};
use saturn_post::core::controller::Buttons;
use saturn_post::core::diag::TestResult;
use saturn_post::core::menu::{MenuController, Phase};
use saturn_post::core::sim::{InputScript, SimSaturn};

/// Idle frames between operator actions; longer than the delay guard
pub const GAP: u32 = 30;

/// Default configuration with short holds
#[allow(dead_code)]
pub fn quick_config() -> PostConfig {
    PostConfig {
        timing: TimingConfig {
            result_hold_frames: 3,
            color_dwell_frames: 2,
            tone_frames: 4,
        },
        ..PostConfig::default()
    }
}

/// Operator input that runs the selected test and returns to the menu
///
/// Tests that wait for Start on their own get one extra Start press.
#[allow(dead_code)]
pub fn run_and_dismiss(waits_for_start: bool) -> InputScript {
    let mut presses = vec![Buttons::A];
    if waits_for_start {
        presses.push(Buttons::START);
    }
    presses.push(Buttons::START);
    InputScript::taps(&presses, GAP)
}

/// A machine and a menu built from `config`
#[allow(dead_code)]
pub fn session(config: &PostConfig, script: InputScript) -> (SimSaturn, MenuController) {
    let mut saturn = SimSaturn::new();
    saturn.set_script(script);
    (saturn, MenuController::from_config(config))
}

/// Step the menu for `frames` frames, collecting every result as it is shown
#[allow(dead_code)]
pub fn run_collecting(
    saturn: &mut SimSaturn,
    menu: &mut MenuController,
    frames: u64,
) -> Vec<(&'static str, TestResult)> {
    let mut results = Vec::new();
    let end = saturn.frame() + frames;
    saturn.set_frame_limit(end);

    while saturn.frame() < end {
        let previous = menu.phase();
        let phase = menu.step(saturn);
        if previous == Phase::Executing && phase == Phase::AwaitingDismissal {
            if let Some(result) = menu.last_result() {
                results.push((menu.selected_label(), result.clone()));
            }
        }
    }
    results
}
