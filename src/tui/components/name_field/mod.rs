//! # NameField Component
//!
//! Single-line controlled text input for the sale item name.
//!
//! ## Responsibilities
//!
//! - Capture text input, paste and editing keys (backspace, delete, cursor movement)
//! - Display the current value with horizontal scrolling
//! - Report every edit as the field's full new text
//!
//! ## State Management
//!
//! The value is a prop: the store owns the name, and the field is re-synced
//! from it before each event and each draw. Editing never touches the prop
//! directly. It computes the next text and emits `FieldEvent::Changed`, and
//! the parent forwards that to the store. Cursor position and scroll state
//! are the only internal state, encapsulated in `CursorState`.

mod cursor;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use cursor::{CursorState, inner_width, next_char_boundary, prev_char_boundary};

/// Rows the field occupies: one line of text plus top and bottom borders.
pub const FIELD_HEIGHT: u16 = 3;

/// High-level events emitted by the NameField
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The text changed; carries the full new text
    Changed(String),
    /// Only the cursor moved
    CursorMoved,
}

/// Controlled text input.
///
/// # Props
///
/// - `value`: Current sale item name (from the store)
/// - `focused`: Whether keyboard input goes to this field
pub struct NameField {
    pub value: String,
    pub focused: bool,
    cursor: CursorState,
}

impl NameField {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            focused: false,
            cursor: CursorState::new(),
        }
    }

    /// Update the value prop and keep the cursor valid for it.
    pub fn sync(&mut self, value: &str) {
        if self.value != value {
            self.value.clear();
            self.value.push_str(value);
        }
        self.cursor.clamp(&self.value);
    }

    /// Put the cursor after the last character, as when the field first opens.
    pub fn reset_cursor(&mut self) {
        self.cursor.move_to_end(&self.value);
        self.cursor.scroll = 0;
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor.pos
    }

    /// Apply an edit to a copy of the value. The prop itself is left alone.
    fn edit(&mut self, insert_at_cursor: Option<&str>, remove: Option<(usize, usize)>) -> FieldEvent {
        let mut next = self.value.clone();
        if let Some((start, end)) = remove {
            next.drain(start..end);
            self.cursor.pos = start;
        }
        if let Some(text) = insert_at_cursor {
            next.insert_str(self.cursor.pos, text);
            self.cursor.pos += text.len();
        }
        FieldEvent::Changed(next)
    }
}

impl Default for NameField {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for NameField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        self.cursor.update_scroll(&self.value, width);
        let visible = self.cursor.visible(&self.value, width);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title("Sale Item Name");

        let input = Paragraph::new(visible.to_string())
            .block(block)
            .style(Style::default().fg(Color::Green));

        frame.render_widget(input, area);

        if self.focused {
            frame.set_cursor_position(self.cursor.screen_pos(&self.value, area));
        }
    }
}

impl EventHandler for NameField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let pos = self.cursor.pos;
        match event {
            TuiEvent::InputChar(c) => {
                let mut encoded = [0u8; 4];
                Some(self.edit(Some(&*c.encode_utf8(&mut encoded)), None))
            }
            TuiEvent::Paste(text) => {
                // Single-line field: line breaks become spaces
                let flattened = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
                Some(self.edit(Some(&flattened), None))
            }
            TuiEvent::Backspace if pos > 0 => {
                let start = prev_char_boundary(&self.value, pos);
                Some(self.edit(None, Some((start, pos))))
            }
            TuiEvent::Delete if pos < self.value.len() => {
                let end = next_char_boundary(&self.value, pos);
                Some(self.edit(None, Some((pos, end))))
            }
            TuiEvent::CursorLeft if pos > 0 => {
                self.cursor.pos = prev_char_boundary(&self.value, pos);
                Some(FieldEvent::CursorMoved)
            }
            TuiEvent::CursorRight if pos < self.value.len() => {
                self.cursor.pos = next_char_boundary(&self.value, pos);
                Some(FieldEvent::CursorMoved)
            }
            TuiEvent::CursorHome if pos != 0 => {
                self.cursor.pos = 0;
                Some(FieldEvent::CursorMoved)
            }
            TuiEvent::CursorEnd if pos != self.value.len() => {
                self.cursor.move_to_end(&self.value);
                Some(FieldEvent::CursorMoved)
            }
            _ => None,
        }
    }
}
