//! # Core Storefront Logic
//!
//! This module contains the sale page's state and the rules for changing it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Storefront (state)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • subscribe() (notify) │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ Rc<dyn Fn> callbacks / notifications
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `Storefront`, the state owner, and its `SaleState` snapshot
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings loaded from `~/.storefront/config.toml`, env and CLI

pub mod action;
pub mod config;
pub mod state;

pub use action::{Action, Effect};
pub use state::{Mode, SaleState, Storefront, Subscription};
