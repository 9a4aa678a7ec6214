// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Menu state machine tests
//!
//! - `navigation`: selection movement, wraparound and repeat guards
//! - `execution`: running tests and returning to the menu

mod navigation;

use super::*;
use crate::core::sim::SimSaturn;

/// Defaults with short holds so scenarios stay a few hundred frames long
fn quick_config() -> PostConfig {
    PostConfig {
        timing: TimingConfig {
            result_hold_frames: 3,
            color_dwell_frames: 2,
            tone_frames: 4,
        },
        ..PostConfig::default()
    }
}

/// Step the menu until `frames` more frames have passed
fn drive(menu: &mut MenuController, saturn: &mut SimSaturn, frames: u64) {
    let end = saturn.frame() + frames;
    while saturn.frame() < end {
        menu.step(saturn);
    }
}
