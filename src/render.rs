//! Frame rendering for the spin animation.

use console::Style;
use std::fmt::Display;
use std::io::{self, Write};
use tracing::warn;

use crate::terminal;

/// Draws one animation frame.
pub trait Render<T> {
    fn render(&mut self, before: &[T], current: &T, after: &[T]) -> io::Result<()>;
}

/// Styles for the highlighted choice and the entries around it.
#[derive(Debug, Clone)]
pub struct Theme {
    pub current: Style,
    pub others: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            current: Style::new().green().bold(),
            others: Style::new().yellow().dim(),
        }
    }
}

impl Theme {
    /// Theme that never emits ANSI styling.
    pub fn plain() -> Self {
        let theme = Self::default();
        Self {
            current: theme.current.force_styling(false),
            others: theme.others.force_styling(false),
        }
    }
}

/// Renders frames to a terminal writer, clearing the previous frame first.
pub struct TerminalRenderer<W: Write> {
    out: W,
    theme: Theme,
    clear: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            clear: true,
        }
    }

    /// Append frames instead of clearing between them.
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, T: Display> Render<T> for TerminalRenderer<W> {
    fn render(&mut self, before: &[T], current: &T, after: &[T]) -> io::Result<()> {
        // A failed clear leaves the old frame up; the new one still gets drawn.
        if self.clear
            && let Err(e) = terminal::clear(&mut self.out)
        {
            warn!(error = %e, "render:clear failed");
        }

        for value in before {
            writeln!(self.out, "{}", self.theme.others.apply_to(value))?;
        }
        writeln!(
            self.out,
            "{}",
            self.theme.current.apply_to(format!("> {current} <"))
        )?;
        for value in after {
            writeln!(self.out, "{}", self.theme.others.apply_to(value))?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_renderer() -> TerminalRenderer<Vec<u8>> {
        TerminalRenderer::new(Vec::new(), Theme::plain()).without_clear()
    }

    #[test]
    fn renders_window_around_current() {
        let mut renderer = plain_renderer();
        renderer.render(&["A", "B"], &"C", &["D", "E"]).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "A\nB\n> C <\nD\nE\n");
    }

    #[test]
    fn renders_current_alone_with_empty_window() {
        let mut renderer = plain_renderer();
        renderer.render(&[], &"only", &[]).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, "> only <\n");
    }

    #[test]
    fn clears_before_each_frame() {
        let mut renderer = TerminalRenderer::new(Vec::new(), Theme::plain());
        renderer.render(&["a"], &"b", &["c"]).unwrap();
        renderer.render(&["b"], &"c", &["a"]).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out.matches("\x1b[2J").count(), 2);
        assert!(out.ends_with("b\n> c <\na\n"));
    }

    #[test]
    fn default_theme_styles_current_choice() {
        let theme = Theme::default();
        let styled = theme
            .current
            .force_styling(true)
            .apply_to("win")
            .to_string();

        assert!(styled.contains("win"));
        assert!(styled.starts_with('\x1b'));
    }
}
