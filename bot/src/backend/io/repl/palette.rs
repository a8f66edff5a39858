//! Terminal colors for bot output. Purely cosmetic: with color disabled
//! every tone renders as the bare text.

use crossterm::style::Stylize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Something was created or changed
    Success,
    /// The command could not be carried out
    Error,
    /// Lookups, listings, small talk
    Info,
    /// Greeting and prompt
    Neutral,
    Farewell,
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    use_color: bool,
}

impl Palette {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }

        match tone {
            Tone::Success => text.black().on_green().to_string(),
            Tone::Error => text.red().to_string(),
            Tone::Info => text.to_string(),
            Tone::Neutral => text.cyan().to_string(),
            Tone::Farewell => text.white().on_black().to_string(),
        }
    }

    pub fn prompt(&self, text: &str) -> String {
        if self.use_color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::new(false);
        for tone in [Tone::Success, Tone::Error, Tone::Info, Tone::Neutral, Tone::Farewell] {
            assert_eq!(palette.paint(tone, "Good bye!"), "Good bye!");
        }
        assert_eq!(palette.prompt("Enter a command: "), "Enter a command: ");
    }

    #[test]
    fn test_color_palette_wraps_in_escape_codes() {
        let palette = Palette::new(true);
        let painted = palette.paint(Tone::Error, "Invalid command.");
        assert!(painted.contains("Invalid command."));
        assert!(painted.starts_with('\u{1b}'));
        assert_ne!(painted, "Invalid command.");

        assert_eq!(palette.paint(Tone::Info, "How can I help you?"), "How can I help you?");
    }
}
