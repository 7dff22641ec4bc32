//! Terminal output for wizard prompts, notifications and results.
//!
//! Views from `cadence-core` are markdown. In rich mode headers keep their
//! hash marks and are colored, notification lines (`> ...`) are highlighted,
//! and everything else goes through termimad inline styling. Plain mode
//! prints the markdown untouched, which is what the tests assert against.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_STYLE: &str = "\x1b[34m";
const NOTIFICATION_STYLE: &str = "\x1b[1;33m";
const RESET: &str = "\x1b[0m";

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }
        for line in markdown.lines() {
            match styled_prefix(line) {
                Some(style) => println!("{style}{line}{RESET}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Lines printed with a raw ANSI style instead of termimad.
fn styled_prefix(line: &str) -> Option<&'static str> {
    if line.starts_with('#') {
        Some(HEADER_STYLE)
    } else if line.starts_with("> ") {
        Some(NOTIFICATION_STYLE)
    } else {
        None
    }
}
