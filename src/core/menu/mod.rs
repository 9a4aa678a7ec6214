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

//! POST menu state machine
//!
//! # Phases
//!
//! ```text
//!            Up/Down (wrap)
//!              ┌──────┐
//!              ▼      │
//!         ┌──────────────┐  Accept   ┌───────────┐  test returns  ┌────────────────────┐
//!  boot ─►│   Browsing   ├──────────►│ Executing ├───────────────►│ AwaitingDismissal  │
//!         └──────────────┘           └───────────┘                └─────────┬──────────┘
//!                ▲                                                          │ Accept
//!                └──────────────────────────────────────────────────────────┘
//! ```
//!
//! One call to [`MenuController::step`] is one frame of Browsing or
//! AwaitingDismissal, or the whole of Executing (the test owns the frames it
//! needs). Accept is A or Start.
//!
//! # Example
//!
//! ```
//! use saturn_post::core::config::PostConfig;
//! use saturn_post::core::controller::Buttons;
//! use saturn_post::core::menu::{MenuController, Phase};
//! use saturn_post::core::sim::{InputScript, SimSaturn};
//!
//! let mut saturn = SimSaturn::new();
//! saturn.set_script(InputScript::taps(&[Buttons::UP], 0));
//!
//! let mut menu = MenuController::from_config(&PostConfig::default());
//! menu.step(&mut saturn);
//!
//! assert_eq!(menu.selection(), 6);
//! assert_eq!(menu.phase(), Phase::Browsing);
//! ```

use crate::core::config::{PostConfig, TimingConfig};
use crate::core::controller::{Buttons, InputPoller, NavAction};
use crate::core::diag::{
    AudioChannelExerciser, ColorCyclePresentation, ControllerMonitor, DiagnosticTest,
    MemoryPatternTest, RegisterSnapshotTest, SpriteRenderExerciser, TestContext, TestResult,
    VramPatternTest,
};
use crate::core::error::{PostError, Result};
use crate::core::platform::{Console, Platform};

#[cfg(test)]
mod tests;

/// Menu title line
pub const MENU_TITLE: &str = "Saturn POST Menu:";

/// Prompt shown after a test returns
pub const DISMISS_PROMPT: &str = "Press Start or A to return to menu";

/// Lifecycle phase of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Browsing,
    Executing,
    AwaitingDismissal,
}

/// One menu entry
pub struct MenuOption {
    ordinal: usize,
    test: Box<dyn DiagnosticTest>,
}

impl MenuOption {
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn label(&self) -> &'static str {
        self.test.name()
    }
}

/// The seven POST diagnostics in menu order
pub fn standard_tests(config: &PostConfig) -> Vec<Box<dyn DiagnosticTest>> {
    vec![
        Box::new(MemoryPatternTest::new(&config.memory)),
        Box::new(ColorCyclePresentation),
        Box::new(ControllerMonitor),
        Box::new(AudioChannelExerciser),
        Box::new(SpriteRenderExerciser),
        Box::new(VramPatternTest::new(&config.vram)),
        Box::new(RegisterSnapshotTest),
    ]
}

/// Menu state machine
pub struct MenuController {
    options: Vec<MenuOption>,
    selection: usize,
    phase: Phase,
    input: InputPoller,
    timing: TimingConfig,
    last_result: Option<TestResult>,
}

impl MenuController {
    /// Build a menu over `tests`; ordinals follow the vector order
    ///
    /// # Errors
    ///
    /// [`PostError::Config`] if `tests` is empty.
    pub fn new(
        tests: Vec<Box<dyn DiagnosticTest>>,
        input: InputPoller,
        timing: TimingConfig,
    ) -> Result<Self> {
        if tests.is_empty() {
            return Err(PostError::Config("menu needs at least one test".to_string()));
        }
        Ok(Self::with_tests(tests, input, timing))
    }

    /// Standard POST menu
    pub fn from_config(config: &PostConfig) -> Self {
        Self::with_tests(
            standard_tests(config),
            config.input.poller(),
            config.timing.clone(),
        )
    }

    fn with_tests(
        tests: Vec<Box<dyn DiagnosticTest>>,
        input: InputPoller,
        timing: TimingConfig,
    ) -> Self {
        let options = tests
            .into_iter()
            .enumerate()
            .map(|(ordinal, test)| MenuOption { ordinal, test })
            .collect();

        Self {
            options,
            selection: 0,
            phase: Phase::Browsing,
            input,
            timing,
            last_result: None,
        }
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Label of the selected option
    pub fn selected_label(&self) -> &'static str {
        self.options[self.selection].label()
    }

    /// Result of the most recent test run
    pub fn last_result(&self) -> Option<&TestResult> {
        self.last_result.as_ref()
    }

    /// Advance the state machine by one step
    ///
    /// Returns the phase after the step.
    pub fn step(&mut self, hw: &mut dyn Platform) -> Phase {
        match self.phase {
            Phase::Browsing => self.browse(hw),
            Phase::Executing => self.execute(hw),
            Phase::AwaitingDismissal => self.await_dismissal(hw),
        }
        self.phase
    }

    /// Run the menu forever
    pub fn run(&mut self, hw: &mut dyn Platform) -> ! {
        loop {
            self.step(hw);
        }
    }

    fn browse(&mut self, hw: &mut dyn Platform) {
        self.input.sample(hw);

        let count = self.options.len();
        match self.input.navigation() {
            Some(NavAction::Up) => {
                self.selection = (self.selection + count - 1) % count;
                self.input.settle(hw);
            }
            Some(NavAction::Down) => {
                self.selection = (self.selection + 1) % count;
                self.input.settle(hw);
            }
            Some(NavAction::Accept) => {
                log::debug!("Menu: Browsing -> Executing ({})", self.selected_label());
                self.input.settle(hw);
                self.phase = Phase::Executing;
            }
            None => {}
        }

        self.draw_menu(hw.console());
        hw.wait_frame();
    }

    fn execute(&mut self, hw: &mut dyn Platform) {
        let option = &mut self.options[self.selection];
        let label = option.test.name();

        let console = hw.console();
        console.clear();
        console.print_line(&format!("Running {}...", label));
        console.flush();

        log::info!("Running {}", label);
        let result = {
            let mut ctx = TestContext::new(hw, &mut self.input, &self.timing);
            option.test.run(&mut ctx)
        };
        log::info!("{}: {}", label, result);

        self.last_result = Some(result);
        self.phase = Phase::AwaitingDismissal;
        log::debug!("Menu: Executing -> AwaitingDismissal");
    }

    fn await_dismissal(&mut self, hw: &mut dyn Platform) {
        self.input.sample(hw);

        let console = hw.console();
        console.clear();
        if let Some(result) = &self.last_result {
            console.print_line(&format!("{}: {}", self.selected_label(), result));
        }
        console.print_line(DISMISS_PROMPT);
        console.flush();

        if self.input.pressed(Buttons::ACCEPT) {
            self.input.settle(hw);
            self.phase = Phase::Browsing;
            log::debug!("Menu: AwaitingDismissal -> Browsing");
        }

        hw.wait_frame();
    }

    fn draw_menu(&self, console: &mut dyn Console) {
        console.clear();
        console.print_line(MENU_TITLE);
        for option in &self.options {
            let marker = if option.ordinal == self.selection {
                "> "
            } else {
                "  "
            };
            console.print(marker);
            console.print_line(option.label());
        }
        console.flush();
    }
}

/// Power-on banner lines
pub const BANNER: [&str; 2] = [
    "Saturn POST Diagnostic",
    "Use D-Pad to navigate, A/Start to select",
];

/// Clear the screen and show the power-on banner
pub fn show_banner(console: &mut dyn Console) {
    console.clear();
    for line in BANNER {
        console.print_line(line);
    }
    console.flush();
}

/// Entry point of the deployed image
///
/// Shows the banner and runs the standard menu forever.
pub fn boot(hw: &mut dyn Platform, config: &PostConfig) -> ! {
    show_banner(hw.console());

    let mut menu = MenuController::from_config(config);
    menu.run(hw)
}
