//! Cursor position tracking for the NameField.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll
//! offset. The text itself is a prop owned by the store, so every method
//! takes `value: &str` explicitly.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Left/right borders plus one column of padding on each side
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to the first content column
pub(super) const CONTENT_OFFSET: u16 = 2;
/// Offset from area edge to the content row (top border)
pub(super) const BORDER_OFFSET: u16 = 1;

pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

pub(super) struct CursorState {
    /// Cursor position as byte offset in the value (0..=value.len())
    pub pos: usize,
    /// Display columns hidden off the left edge
    pub scroll: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0, scroll: 0 }
    }

    /// Keep the cursor inside `value` and on a char boundary.
    ///
    /// The value can change under the cursor when the store is updated from
    /// somewhere other than this field.
    pub fn clamp(&mut self, value: &str) {
        let mut pos = self.pos.min(value.len());
        while !value.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
    }

    pub fn move_to_end(&mut self, value: &str) {
        self.pos = value.len();
    }

    /// Display column of the cursor within the full value.
    pub fn column(&self, value: &str) -> usize {
        value[..self.pos].width()
    }

    /// Scroll so the cursor column stays within the visible window.
    pub fn update_scroll(&mut self, value: &str, width: u16) {
        let width = usize::from(width);
        if width == 0 {
            self.scroll = 0;
            return;
        }
        let column = self.column(value);
        if column < self.scroll {
            self.scroll = column;
        } else if column >= self.scroll + width {
            self.scroll = column - width + 1;
        }
        // Pull back when text was deleted and the window now shows blank space
        let total = value.width();
        if total < self.scroll + width {
            self.scroll = self.scroll.min(total.saturating_sub(width - 1));
        }
    }

    /// The slice of `value` visible through a window `width` columns wide.
    pub fn visible<'a>(&self, value: &'a str, width: u16) -> &'a str {
        let width = usize::from(width);
        let mut start = value.len();
        let mut column = 0;
        for (i, c) in value.char_indices() {
            if column >= self.scroll {
                start = i;
                break;
            }
            column += c.width().unwrap_or(0);
        }

        let rest = &value[start..];
        let mut end = rest.len();
        let mut used = 0;
        for (i, c) in rest.char_indices() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                end = i;
                break;
            }
            used += w;
        }
        &rest[..end]
    }

    /// Screen position of the cursor inside `area`, as (column, row).
    pub fn screen_pos(&self, value: &str, area: Rect) -> (u16, u16) {
        let visible_col = self.column(value).saturating_sub(self.scroll);
        let max_col = inner_width(area.width);
        let visible_col = u16::try_from(visible_col).unwrap_or(u16::MAX).min(max_col);
        (
            area.x.saturating_add(CONTENT_OFFSET).saturating_add(visible_col),
            area.y.saturating_add(BORDER_OFFSET),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_multibyte() {
        let text = "Säge";
        assert_eq!(next_char_boundary(text, 1), 3);
        assert_eq!(prev_char_boundary(text, 3), 1);
        assert_eq!(prev_char_boundary(text, 0), 0);
        assert_eq!(next_char_boundary(text, text.len()), text.len());
    }

    #[test]
    fn test_clamp_after_value_shrinks() {
        let mut cursor = CursorState::new();
        cursor.pos = 20;
        cursor.clamp("Hammer");
        assert_eq!(cursor.pos, 6);

        // Inside the two-byte 'ä'
        cursor.pos = 2;
        cursor.clamp("Säge");
        assert_eq!(cursor.pos, 1);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let value = "abcdefghij";
        let mut cursor = CursorState::new();
        cursor.move_to_end(value);
        cursor.update_scroll(value, 4);
        // Cursor column 10 must sit in the last visible column
        assert_eq!(cursor.scroll, 7);
        assert_eq!(cursor.visible(value, 4), "hij");

        cursor.pos = 0;
        cursor.update_scroll(value, 4);
        assert_eq!(cursor.scroll, 0);
        assert_eq!(cursor.visible(value, 4), "abcd");
    }

    #[test]
    fn test_visible_counts_wide_chars() {
        let value = "日本語";
        let cursor = CursorState::new();
        // Each glyph is two columns wide
        assert_eq!(cursor.visible(value, 5), "日本");
        assert_eq!(cursor.column(value), 0);
    }

    #[test]
    fn test_screen_pos_offsets_border_and_padding() {
        let value = "A Hammer";
        let mut cursor = CursorState::new();
        cursor.move_to_end(value);
        let area = Rect::new(3, 5, 30, 3);
        assert_eq!(cursor.screen_pos(value, area), (3 + 2 + 8, 6));
    }

    #[test]
    fn test_name_wider_than_u16_columns() {
        let value = "a".repeat(70_000);
        let mut cursor = CursorState::new();
        cursor.move_to_end(&value);
        cursor.update_scroll(&value, 196);

        assert_eq!(cursor.column(&value), 70_000);
        assert_eq!(cursor.scroll, 70_000 - 195);
        assert_eq!(cursor.visible(&value, 196).len(), 195);
        let area = Rect::new(0, 4, 200, 3);
        assert_eq!(cursor.screen_pos(&value, area), (2 + 195, 5));
    }
}
