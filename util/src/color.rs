// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

pub const GREY: &str = "\x1b[0;0m\x1b[90m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const PINK: &str = "\x1b[38;5;161;1m";
pub const RESET: &str = "\x1b[0;0m";

/// Colors text for terminal output.
pub trait Color {
    fn color(&self, color: &str) -> String;

    /// Progress.
    fn grey(&self) -> String;
    /// Success.
    fn mint(&self) -> String;
    /// Findings that need review.
    fn pink(&self) -> String;
}

impl<T: Display> Color for T {
    fn color(&self, color: &str) -> String {
        format!("{color}{self}{RESET}")
    }

    fn grey(&self) -> String {
        self.color(GREY)
    }
    fn mint(&self) -> String {
        self.color(MINT)
    }
    fn pink(&self) -> String {
        self.color(PINK)
    }
}
