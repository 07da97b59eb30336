//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use stride_core::Theme;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    header_color: &'static str,
}

impl TerminalRenderer {
    /// Create a renderer styled for `theme`
    pub fn new(rich_enabled: bool, theme: Theme) -> Self {
        let (mut skin, header_color) = match theme {
            Theme::Dark => {
                let mut skin = MadSkin::default_dark();
                skin.set_headers_fg(Color::Blue);
                skin.bold.set_fg(Color::Yellow);
                skin.italic.set_fg(Color::Magenta);
                (skin, "\x1b[34m")
            }
            Theme::Light => {
                let mut skin = MadSkin::default_light();
                skin.set_headers_fg(Color::DarkBlue);
                skin.bold.set_fg(Color::DarkMagenta);
                skin.italic.set_fg(Color::DarkCyan);
                (skin, "\x1b[94m")
            }
        };
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self {
            rich_enabled,
            skin,
            header_color,
        }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks; everything else is styled inline.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("{}{line}\x1b[0m", self.header_color);
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true, Theme::default())
    }
}
