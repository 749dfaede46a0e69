//! # StatusBar Component
//!
//! Bottom line showing the current mode and the key hints for it.
//!
//! StatusBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut status_bar = StatusBar::new(Mode::Editing);
//! status_bar.render(frame, area);
//! ```
//!
//! The hint for the name field only appears while editing, since the field
//! is not on screen otherwise.

use crate::core::Mode;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Mode indicator plus key hints.
pub struct StatusBar {
    pub mode: Mode,
}

impl StatusBar {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    fn hints(&self) -> &'static str {
        match self.mode {
            Mode::Editing => "Tab focus · Enter/Space press · Ctrl+E toggle · Esc quit",
            Mode::Viewing => "Enter/Space press · Ctrl+E toggle · Esc quit",
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mode_style = match self.mode {
            Mode::Editing => Style::default().fg(Color::Black).bg(Color::Green),
            Mode::Viewing => Style::default().fg(Color::Black).bg(Color::Cyan),
        };

        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.mode), mode_style.add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(self.hints(), Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(line, area);
    }
}
