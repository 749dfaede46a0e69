use crate::core::Mode;
use crate::tui::component::Component;
use crate::tui::components::name_field::FIELD_HEIGHT;
use crate::tui::components::{SalePage, StatusBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Screen areas of the page's parts for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub heading: Rect,
    pub banner: Rect,
    pub field: Option<Rect>,
    pub status: Rect,
}

impl PageLayout {
    pub fn new(area: Rect, has_field: bool) -> Self {
        use Constraint::{Length, Min};
        let field_height = if has_field { FIELD_HEIGHT } else { 0 };
        let [heading, _, banner, _, field, _, status] = Layout::vertical([
            Length(1),
            Length(1),
            Length(1),
            Length(1),
            Length(field_height),
            Min(0),
            Length(1),
        ])
        .areas(area);

        Self {
            heading,
            banner,
            field: has_field.then_some(field),
            status,
        }
    }
}

/// Text drawn for the toggle button.
pub fn button_text(label: &str) -> String {
    format!("[ {label} ]")
}

/// Display width in terminal columns, saturating at `u16::MAX`.
fn columns(text: &str) -> u16 {
    u16::try_from(Line::from(text).width()).unwrap_or(u16::MAX)
}

/// Where the toggle lands on the banner line: after the sale label and a gap.
pub fn toggle_area(banner: Rect, page: &SalePage) -> Rect {
    let label_width = columns(&page.sale_label);
    let button_width = columns(&button_text(page.toggle.label));
    let x = banner
        .x
        .saturating_add(label_width)
        .saturating_add(2)
        .min(banner.right());
    Rect {
        x,
        y: banner.y,
        width: button_width.min(banner.right() - x),
        height: banner.height,
    }
}

pub fn draw_ui(frame: &mut Frame, page: &SalePage, tui: &mut TuiState) {
    let area = frame.area();
    PageView { page, tui }.render(frame, area);
}

/// The page bound to its presentation state, drawable as a component.
///
/// Rendering records the page area and the control areas in `TuiState` so
/// mouse events can be hit tested until the next frame.
pub struct PageView<'a> {
    pub page: &'a SalePage,
    pub tui: &'a mut TuiState,
}

impl Component for PageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let page = self.page;
        let tui = &mut *self.tui;
        let layout = PageLayout::new(area, page.name_field.is_some());

        let heading = Paragraph::new(Line::from(Span::styled(
            page.heading.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(heading, layout.heading);

        frame.render_widget(Paragraph::new(page.sale_label.as_str()), layout.banner);

        let toggle = toggle_area(layout.banner, page);
        let button_style = if tui.focus == Focus::Toggle {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        frame.render_widget(
            Span::styled(button_text(page.toggle.label), button_style),
            toggle,
        );

        if let Some(field_area) = layout.field {
            tui.name_field.render(frame, field_area);
        }

        let mode = Mode::from_editable(page.name_field.is_some());
        StatusBar::new(mode).render(frame, layout.status);

        tui.page_area = area;
        tui.toggle_area = toggle;
        tui.field_area = layout.field;
    }
}

/// Which control (if any) sits under a screen position, per the last draw.
pub fn hit_test(tui: &TuiState, column: u16, row: u16) -> Option<Focus> {
    let position = Position::new(column, row);
    if tui.toggle_area.contains(position) {
        Some(Focus::Toggle)
    } else if tui.field_area.is_some_and(|area| area.contains(position)) {
        Some(Focus::NameField)
    } else {
        None
    }
}
