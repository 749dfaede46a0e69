//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::tui::TuiState;
use crate::tui::components::{SalePage, SalePageProps};
use crate::tui::ui::draw_ui;

/// A page whose controls do nothing, for layout and rendering tests.
pub fn inert_page(name: &str, is_editable: bool) -> SalePage {
    SalePage::view(SalePageProps {
        store_title: "My Hardware Store".to_string(),
        sale_item_name: name.to_string(),
        is_editable,
        toggle_editable: Rc::new(|| {}),
        set_sale_item_name: Rc::new(|_: String| {}),
    })
}

/// All cell symbols of a buffer, row after row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// Draw `page` into a fresh `width` x `height` test terminal and return its text.
pub fn draw(page: &SalePage, tui: &mut TuiState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| draw_ui(f, page, tui)).unwrap();
    buffer_text(terminal.backend().buffer())
}
