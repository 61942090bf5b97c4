//! Terminal rendering of markdown output.
//!
//! Rich mode styles headers and inline markdown with termimad and colors
//! outcome lines that need attention. Plain mode prints the markdown as is.

use termimad::{crossterm::style::Color, MadSkin};

/// Outcome lines starting with this marker need the user's attention.
const ATTENTION_MARKER: &str = "- ! ";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    attention_skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        let mut attention_skin = skin.clone();
        attention_skin.paragraph.set_fg(Color::Yellow);

        Self {
            rich_enabled,
            skin,
            attention_skin,
        }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[34m{line}\x1b[0m");
            } else if line.starts_with(ATTENTION_MARKER) {
                self.attention_skin.print_inline(line);
                println!();
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
