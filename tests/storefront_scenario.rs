use std::cell::Cell;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use storefront::core::{Mode, SaleState, Storefront};
use storefront::tui::event::TuiEvent;
use storefront::tui::ui::draw_ui;
use storefront::tui::{Control, Focus, TuiState, view};

const TITLE: &str = "My Hardware Store";

// ============================================================================
// Helper Functions
// ============================================================================

/// A mounted page: store, presentation state and a test terminal.
struct Harness {
    store: Rc<Storefront>,
    tui: TuiState,
    terminal: Terminal<TestBackend>,
}

impl Harness {
    fn new(initial: SaleState) -> Self {
        let store = Rc::new(Storefront::new(initial));
        let tui = TuiState::new(store.is_editable());
        let terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        Self { store, tui, terminal }
    }

    fn send(&mut self, event: TuiEvent) -> Control {
        let page = view(&self.store, TITLE);
        self.tui.sync(&page);
        self.tui.handle_event(&page, &event)
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(TuiEvent::InputChar(c));
        }
    }

    /// Render the current page and return the screen text, one string per row.
    fn screen(&mut self) -> Vec<String> {
        let page = view(&self.store, TITLE);
        self.tui.sync(&page);
        let tui = &mut self.tui;
        self.terminal.draw(|f| draw_ui(f, &page, tui)).unwrap();

        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    fn screen_contains(&mut self, needle: &str) -> bool {
        self.screen().iter().any(|row| row.contains(needle))
    }
}

// ============================================================================
// Scenario
// ============================================================================

#[test]
fn test_toggle_and_rename_scenario() {
    let mut h = Harness::new(SaleState::default());

    assert!(h.screen_contains("Currently on Sale: A Hammer"));
    assert!(h.screen_contains("[ Hide ]"));
    assert!(h.screen_contains("Sale Item Name"));

    // Click the toggle where it was drawn
    let toggle = h.tui.toggle_area;
    h.send(TuiEvent::MouseClick(toggle.x, toggle.y));
    assert!(h.screen_contains("[ Edit Sale Item ]"));
    assert!(!h.screen_contains("Sale Item Name"));

    let toggle = h.tui.toggle_area;
    h.send(TuiEvent::MouseClick(toggle.x + 1, toggle.y));
    assert!(h.screen_contains("[ Hide ]"));
    assert!(h.screen_contains("Sale Item Name"));
    assert!(h.screen_contains("Currently on Sale: A Hammer"));

    // Focus the field and replace its contents
    let field = h.tui.field_area.expect("field is drawn while editing");
    h.send(TuiEvent::MouseClick(field.x + 1, field.y + 1));
    assert_eq!(h.tui.focus, Focus::NameField);
    for _ in 0.."A Hammer".len() {
        h.send(TuiEvent::Backspace);
    }
    assert!(h.screen_contains("Currently on Sale: "));
    h.type_text("A Wrench");

    assert!(h.screen_contains("Currently on Sale: A Wrench"));
    assert_eq!(h.store.sale_item_name(), "A Wrench");
    assert!(h.store.is_editable());
}

#[test]
fn test_label_updates_on_every_keystroke() {
    let mut h = Harness::new(SaleState::new("", Mode::Editing));
    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let _subscription = {
        let seen = Rc::clone(&seen);
        h.store
            .subscribe(move |state| seen.borrow_mut().push(state.sale_item_name.clone()))
    };

    h.type_text("Saw");

    assert_eq!(*seen.borrow(), vec!["S", "Sa", "Saw"]);
    assert!(h.screen_contains("Currently on Sale: Saw"));
}

#[test]
fn test_keyboard_only_flow() {
    let mut h = Harness::new(SaleState::default());

    // Tab to the toggle, press with Enter, field disappears
    h.send(TuiEvent::FocusNext);
    h.send(TuiEvent::Activate);
    assert_eq!(h.store.mode(), Mode::Viewing);
    assert!(!h.screen_contains("Sale Item Name"));

    // Typing while viewing goes nowhere
    h.type_text("xyz");
    assert_eq!(h.store.sale_item_name(), "A Hammer");

    // Ctrl+E reopens it, pre-filled with the current name
    h.send(TuiEvent::ToggleShortcut);
    h.send(TuiEvent::FocusNext);
    assert_eq!(h.tui.focus, Focus::NameField);
    h.type_text("s");
    assert_eq!(h.store.sale_item_name(), "A Hammers");

    assert_eq!(h.send(TuiEvent::Quit), Control::Quit);
}

#[test]
fn test_starting_in_view_mode() {
    let mut h = Harness::new(SaleState::new("A Drill", Mode::Viewing));
    assert_eq!(h.tui.focus, Focus::Toggle);
    assert!(h.screen_contains("Currently on Sale: A Drill"));
    assert!(h.screen_contains("[ Edit Sale Item ]"));
    assert!(h.screen_contains("Viewing"));
}

#[test]
fn test_redraw_notifications_match_mutations() {
    let h = Harness::new(SaleState::default());
    let notifications = Rc::new(Cell::new(0u32));
    let subscription = {
        let notifications = Rc::clone(&notifications);
        h.store.subscribe(move |_| notifications.set(notifications.get() + 1))
    };

    let page = view(&h.store, TITLE);
    page.toggle.press();
    let page = view(&h.store, TITLE);
    assert!(page.name_field.is_none());
    page.toggle.press();
    if let Some(field) = &view(&h.store, TITLE).name_field {
        field.change("A Clamp".to_string());
    }

    assert_eq!(notifications.get(), 3);
    assert_eq!(h.store.version(), 3);

    drop(subscription);
    h.store.set_sale_item_name("A Rasp");
    assert_eq!(notifications.get(), 3);
}
