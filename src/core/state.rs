//! # Storefront State
//!
//! The state owner for the sale page. This module contains domain logic only,
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! Storefront
//! ├── state: RefCell<SaleState>
//! │   ├── sale_item_name: String    // what is on sale right now
//! │   └── is_editable: bool         // Editing (true) / Viewing (false)
//! ├── version: Cell<u64>            // bumped once per mutation
//! └── subscribers: Rc<RefCell<..>>  // notified after every mutation
//! ```
//!
//! State changes only happen through `dispatch(action)`, which runs the
//! reducer in action.rs and then notifies subscribers. Everything here is
//! single-threaded: the store is shared with `Rc` and is not `Send`.

use crate::core::action::{Action, Effect, update};
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Name shown on a freshly opened page.
pub const DEFAULT_SALE_ITEM: &str = "A Hammer";

/// Whether the sale item name can currently be edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Editing,
    Viewing,
}

impl Mode {
    pub fn from_editable(is_editable: bool) -> Self {
        if is_editable { Mode::Editing } else { Mode::Viewing }
    }

    pub fn is_editable(self) -> bool {
        matches!(self, Mode::Editing)
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Editing => Mode::Viewing,
            Mode::Viewing => Mode::Editing,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Editing => "Editing",
            Mode::Viewing => "Viewing",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plain-value snapshot of everything the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleState {
    pub sale_item_name: String,
    pub is_editable: bool,
}

impl SaleState {
    pub fn new(sale_item_name: impl Into<String>, mode: Mode) -> Self {
        Self {
            sale_item_name: sale_item_name.into(),
            is_editable: mode.is_editable(),
        }
    }

    pub fn mode(&self) -> Mode {
        Mode::from_editable(self.is_editable)
    }
}

impl Default for SaleState {
    fn default() -> Self {
        Self::new(DEFAULT_SALE_ITEM, Mode::Editing)
    }
}

type Listener = Rc<dyn Fn(&SaleState)>;
type ListenerList = RefCell<Vec<(u64, Listener)>>;

/// Handle returned by [`Storefront::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    listeners: Weak<ListenerList>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Owns the sale page state and tells subscribers when it changes.
pub struct Storefront {
    state: RefCell<SaleState>,
    version: Cell<u64>,
    next_subscription: Cell<u64>,
    listeners: Rc<ListenerList>,
}

impl Storefront {
    pub fn new(initial: SaleState) -> Self {
        Self {
            state: RefCell::new(initial),
            version: Cell::new(0),
            next_subscription: Cell::new(0),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn snapshot(&self) -> SaleState {
        self.state.borrow().clone()
    }

    pub fn sale_item_name(&self) -> String {
        self.state.borrow().sale_item_name.clone()
    }

    pub fn is_editable(&self) -> bool {
        self.state.borrow().is_editable
    }

    pub fn mode(&self) -> Mode {
        self.state.borrow().mode()
    }

    /// Number of mutations applied since construction.
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    pub fn toggle_editable(&self) {
        self.dispatch(Action::ToggleEditable);
    }

    /// Replaces the name as-is. Empty strings and surrounding whitespace are kept.
    pub fn set_sale_item_name(&self, new_name: impl Into<String>) {
        self.dispatch(Action::SetSaleItemName(new_name.into()));
    }

    /// Applies `action` through the reducer and notifies subscribers if state changed.
    pub fn dispatch(&self, action: Action) -> Effect {
        debug!("Dispatching {:?}", action);
        let effect = update(&mut self.state.borrow_mut(), action);
        if effect == Effect::Render {
            self.version.set(self.version.get() + 1);
            self.notify();
        }
        effect
    }

    /// Registers `listener` to run after every mutation, in registration order.
    pub fn subscribe(&self, listener: impl Fn(&SaleState) + 'static) -> Subscription {
        let id = self.next_subscription.get();
        self.next_subscription.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        // Listeners may subscribe, unsubscribe or read the store while running.
        let snapshot = self.snapshot();
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(SaleState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_new_defaults() {
        let store = Storefront::default();
        assert_eq!(store.sale_item_name(), "A Hammer");
        assert!(store.is_editable());
        assert_eq!(store.mode(), Mode::Editing);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_toggle_parity() {
        for n in 0..7 {
            let store = Storefront::default();
            for _ in 0..n {
                store.toggle_editable();
            }
            assert_eq!(store.is_editable(), n % 2 == 0, "after {n} toggles");
        }
    }

    #[test]
    fn test_toggle_from_viewing_start() {
        let store = Storefront::new(SaleState::new("Nails", Mode::Viewing));
        store.toggle_editable();
        assert!(store.is_editable());
    }

    #[test]
    fn test_set_name_is_exact_and_idempotent() {
        let store = Storefront::default();
        for name in ["", "  padded  ", "A Wrench", "Säge 🪚"] {
            store.set_sale_item_name(name);
            let once = store.snapshot();
            store.set_sale_item_name(name);
            assert_eq!(store.sale_item_name(), name);
            assert_eq!(store.snapshot(), once);
        }
    }

    #[test]
    fn test_mutations_do_not_cross() {
        let store = Storefront::default();
        store.set_sale_item_name("A Drill");
        assert!(store.is_editable());

        store.toggle_editable();
        assert_eq!(store.sale_item_name(), "A Drill");
        assert!(!store.is_editable());

        store.set_sale_item_name("A Saw");
        assert!(!store.is_editable());
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let store = Storefront::default();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let log = log.clone();
            store.subscribe(move |state| log.borrow_mut().push(format!("a:{}", state.is_editable)))
        };
        let second = {
            let log = log.clone();
            store.subscribe(move |state| log.borrow_mut().push(format!("b:{}", state.sale_item_name)))
        };

        store.toggle_editable();
        store.set_sale_item_name("A Level");

        assert_eq!(
            *log.borrow(),
            vec!["a:false", "b:A Hammer", "a:false", "b:A Level"]
        );
        assert_eq!(store.version(), 2);
        drop((first, second));
    }

    #[test]
    fn test_dropped_subscription_is_not_notified() {
        let store = Storefront::default();
        let count = Rc::new(Cell::new(0));
        let subscription = {
            let count = count.clone();
            store.subscribe(move |_| count.set(count.get() + 1))
        };

        store.toggle_editable();
        drop(subscription);
        store.toggle_editable();

        assert_eq!(count.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_can_read_store_during_notify() {
        let store = Rc::new(Storefront::default());
        let seen = Rc::new(RefCell::new(String::new()));
        let _subscription = {
            let weak = Rc::downgrade(&store);
            let seen = seen.clone();
            store.subscribe(move |_| {
                if let Some(store) = weak.upgrade() {
                    *seen.borrow_mut() = store.sale_item_name();
                }
            })
        };

        store.set_sale_item_name("A Chisel");
        assert_eq!(*seen.borrow(), "A Chisel");
    }

    #[test]
    fn test_quit_does_not_notify() {
        let store = Storefront::default();
        let count = Rc::new(Cell::new(0));
        let _subscription = {
            let count = count.clone();
            store.subscribe(move |_| count.set(count.get() + 1))
        };

        assert_eq!(store.dispatch(Action::Quit), Effect::Quit);
        assert_eq!(count.get(), 0);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_mode_helpers() {
        assert_eq!(Mode::Editing.toggled(), Mode::Viewing);
        assert_eq!(Mode::from_editable(false), Mode::Viewing);
        assert_eq!(Mode::Viewing.to_string(), "Viewing");
    }
}
