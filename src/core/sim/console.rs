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

//! Simulated dbgio text plane

use crate::core::platform::Console;

/// Text console that keeps what was last pushed to the screen
///
/// `print` appends to a pending buffer, `flush` copies it to the screen,
/// `clear` empties the buffer. Each flush that changes the screen is
/// appended to the transcript.
#[derive(Debug, Clone, Default)]
pub struct TextConsole {
    pending: String,
    screen: String,
    transcript: Vec<String>,
    clears: u64,
    flushes: u64,

    /// Print every changed page to stdout
    pub echo: bool,
}

impl TextConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently on screen
    pub fn screen(&self) -> &str {
        &self.screen
    }

    /// Text printed since the last clear, flushed or not
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Every distinct page shown so far, in order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn take_transcript(&mut self) -> Vec<String> {
        std::mem::take(&mut self.transcript)
    }

    /// Whether any page shown so far contains `needle`
    pub fn has_shown(&self, needle: &str) -> bool {
        self.transcript.iter().any(|page| page.contains(needle))
    }

    pub fn clears(&self) -> u64 {
        self.clears
    }

    pub fn flushes(&self) -> u64 {
        self.flushes
    }
}

impl Console for TextConsole {
    fn clear(&mut self) {
        self.pending.clear();
        self.clears += 1;
    }

    fn print(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    fn flush(&mut self) {
        self.flushes += 1;
        if self.pending == self.screen {
            return;
        }

        self.screen.clone_from(&self.pending);
        self.transcript.push(self.screen.clone());

        if self.echo {
            println!("----------------------------------------");
            print!("{}", self.screen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_publishes_pending_text() {
        let mut console = TextConsole::new();
        console.print("Running Memory Test...\n");
        assert_eq!(console.screen(), "");

        console.flush();
        assert_eq!(console.screen(), "Running Memory Test...\n");

        console.print_line("Memory test PASS");
        console.flush();
        assert_eq!(
            console.screen(),
            "Running Memory Test...\nMemory test PASS\n"
        );
        assert_eq!(console.transcript().len(), 2);
    }

    #[test]
    fn test_identical_redraw_is_not_recorded_twice() {
        let mut console = TextConsole::new();
        for _ in 0..3 {
            console.clear();
            console.print_line("Saturn POST Menu:");
            console.flush();
        }
        assert_eq!(console.transcript().len(), 1);
        assert_eq!(console.clears(), 3);
        assert_eq!(console.flushes(), 3);
        assert!(console.has_shown("POST Menu"));
    }
}
