//! # Actions
//!
//! Everything that can happen to the sale page becomes an `Action`.
//! Operator clicks the toggle? That's `Action::ToggleEditable`.
//! Operator types in the name field? That's `Action::SetSaleItemName(text)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` telling the caller what to do
//! next. No side effects here. Notification happens in `Storefront::dispatch`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use crate::core::state::SaleState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleEditable,
    /// Full text of the name field, not a diff.
    SetSaleItemName(String),
    Quit,
}

/// What the caller should do after `update()`. Every mutation renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Render,
    Quit,
}

pub fn update(state: &mut SaleState, action: Action) -> Effect {
    match action {
        Action::ToggleEditable => {
            state.is_editable = !state.is_editable;
            Effect::Render
        }
        Action::SetSaleItemName(name) => {
            state.sale_item_name = name;
            Effect::Render
        }
        Action::Quit => Effect::Quit,
    }
}
