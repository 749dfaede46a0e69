//! # TUI Adapter
//!
//! The ratatui-specific layer and the page's render surface. Handles terminal
//! I/O, renders the `SalePage`, and turns keyboard and mouse events into
//! presses and edits on the page's controls.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop subscribes to the store and only redraws when a notification
//! arrived, an event changed presentation state (focus, cursor), or the
//! terminal was resized. Between events it sleeps in `poll` for up to 250ms.
//!
//! The page is rebuilt from the store before every event, so a burst of
//! keystrokes drained in one iteration always edits the latest name.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info};
use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::config::ResolvedConfig;
use crate::core::state::Storefront;
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEvent, NameField, SalePage, SalePageProps};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Toggle,
    NameField,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// TUI-specific presentation state (not part of the store)
pub struct TuiState {
    pub focus: Focus,
    pub name_field: NameField,
    /// Page area of the last draw
    pub page_area: Rect,
    /// Control areas for mouse hit testing, kept in step with the current page
    pub toggle_area: Rect,
    pub field_area: Option<Rect>,
    field_visible: bool,
}

impl TuiState {
    pub fn new(is_editable: bool) -> Self {
        Self {
            // Operator expects to type immediately when the page opens editable
            focus: if is_editable { Focus::NameField } else { Focus::Toggle },
            name_field: NameField::new(),
            page_area: Rect::default(),
            toggle_area: Rect::default(),
            field_area: None,
            field_visible: false,
        }
    }

    /// Bring presentation state in line with a freshly built page.
    ///
    /// Hit areas are laid out again for the new page, so a click drained in
    /// the same burst as a toggle lands on the control as it now reads.
    pub fn sync(&mut self, page: &SalePage) {
        if !self.page_area.is_empty() {
            let layout = ui::PageLayout::new(self.page_area, page.name_field.is_some());
            self.toggle_area = ui::toggle_area(layout.banner, page);
            self.field_area = layout.field;
        }
        match &page.name_field {
            Some(field) => {
                self.name_field.sync(&field.value);
                if !self.field_visible {
                    // Field just opened: cursor goes after the current name
                    self.name_field.reset_cursor();
                    self.field_visible = true;
                }
            }
            None => {
                self.field_visible = false;
                self.field_area = None;
                if self.focus == Focus::NameField {
                    self.focus = Focus::Toggle;
                }
            }
        }
        self.name_field.focused = self.focus == Focus::NameField;
    }

    /// Route one event to the page. Call `sync` with the same page first.
    pub fn handle_event(&mut self, page: &SalePage, event: &TuiEvent) -> Control {
        match event {
            TuiEvent::Quit => return Control::Quit,
            TuiEvent::Resize => {}
            TuiEvent::ToggleShortcut => press(page),
            TuiEvent::FocusNext | TuiEvent::FocusPrev => {
                // Only two controls, so both directions swap
                if page.name_field.is_some() {
                    self.focus = match self.focus {
                        Focus::Toggle => Focus::NameField,
                        Focus::NameField => Focus::Toggle,
                    };
                    debug!("Focus moved to {:?}", self.focus);
                }
            }
            TuiEvent::MouseClick(column, row) => match ui::hit_test(self, *column, *row) {
                Some(Focus::Toggle) => {
                    self.focus = Focus::Toggle;
                    press(page);
                }
                Some(Focus::NameField) => self.focus = Focus::NameField,
                None => {}
            },
            _ => match self.focus {
                Focus::Toggle => {
                    if matches!(event, TuiEvent::Activate | TuiEvent::InputChar(' ')) {
                        press(page);
                    }
                }
                Focus::NameField => {
                    if let Some(field) = &page.name_field
                        && let Some(FieldEvent::Changed(text)) = self.name_field.handle_event(event)
                    {
                        field.change(text);
                    }
                }
            },
        }
        self.name_field.focused = self.focus == Focus::NameField;
        Control::Continue
    }
}

fn press(page: &SalePage) {
    info!("Pressed '{}'", page.toggle.label);
    page.toggle.press();
}

/// Build the page from the store, wiring its controls back to the store's entry points.
pub fn view(store: &Rc<Storefront>, store_title: &str) -> SalePage {
    let state = store.snapshot();
    let toggle_store = Rc::clone(store);
    let name_store = Rc::clone(store);
    SalePage::view(SalePageProps {
        store_title: store_title.to_string(),
        sale_item_name: state.sale_item_name,
        is_editable: state.is_editable,
        toggle_editable: Rc::new(move || toggle_store.toggle_editable()),
        set_sale_item_name: Rc::new(move |name: String| name_store.set_sale_item_name(name)),
    })
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for the name field
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let store = Rc::new(Storefront::new(config.initial_state()));
    let mut tui = TuiState::new(store.is_editable());

    // The store tells us when to redraw
    let needs_redraw = Rc::new(Cell::new(true));
    let _subscription = {
        let needs_redraw = Rc::clone(&needs_redraw);
        store.subscribe(move |state| {
            debug!(
                "State changed: name={:?}, mode={}",
                state.sale_item_name,
                state.mode()
            );
            needs_redraw.set(true);
        })
    };

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &store, &mut tui, &config.title, &needs_redraw);

    // Leave raw mode even when the loop failed
    drop(terminal_mode_guard);
    ratatui::restore();

    info!(
        "Quitting with sale item {:?} after {} changes",
        store.sale_item_name(),
        store.version()
    );
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    store: &Rc<Storefront>,
    tui: &mut TuiState,
    title: &str,
    needs_redraw: &Cell<bool>,
) -> std::io::Result<()> {
    loop {
        let page = view(store, title);
        tui.sync(&page);

        if needs_redraw.replace(false) {
            terminal.draw(|f| ui::draw_ui(f, &page, tui))?;
        }
        drop(page);

        let mut next = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = next.take() {
            // Focus and cursor moves change nothing in the store but still need a frame
            needs_redraw.set(true);

            let page = view(store, title);
            tui.sync(&page);
            if tui.handle_event(&page, &event) == Control::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}
