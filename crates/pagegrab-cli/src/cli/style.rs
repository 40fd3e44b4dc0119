//! Console color choice, resolved once and passed to whoever prints.

use pagegrab_core::config::ColorChoice;
use std::io::IsTerminal;

const GREEN: &str = "32";
const RED: &str = "31";
const YELLOW: &str = "33";
const DIM: &str = "90";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    color: bool,
}

impl OutputStyle {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// `Auto` colors only when stdout is a terminal.
    pub fn resolve(choice: ColorChoice) -> Self {
        let color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        };
        Self::new(color)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_leaves_text_alone() {
        let s = OutputStyle::new(false);
        assert_eq!(s.green("ok"), "ok");
        assert_eq!(s.red("bad"), "bad");
    }

    #[test]
    fn colored_style_wraps_in_ansi() {
        let s = OutputStyle::new(true);
        assert_eq!(s.green("ok"), "\x1b[32mok\x1b[0m");
        assert_eq!(s.yellow("hm"), "\x1b[33mhm\x1b[0m");
    }

    #[test]
    fn explicit_choices_ignore_terminal() {
        assert!(OutputStyle::resolve(ColorChoice::Always).color());
        assert!(!OutputStyle::resolve(ColorChoice::Never).color());
    }
}
