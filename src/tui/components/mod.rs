//! # TUI Components
//!
//! This module contains all UI components for the storefront page.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `SalePage`: the page's render tree, built from store values and callbacks
//! - `StatusBar`: bottom line with the current mode and key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `NameField`: controlled single-line input; owns only its cursor
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields or function
//! parameters), not by reaching into the store. Changes flow back up through
//! the callbacks the page was built with:
//!
//! ```rust,ignore
//! // Good: the field reports text, the page's callback updates the store
//! if let Some(FieldEvent::Changed(text)) = name_field.handle_event(&event) {
//!     text_field.change(text);
//! }
//!
//! // Bad: the field writes the store itself
//! store.set_sale_item_name(name_field.value.clone());
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── sale_page.rs     (Render tree for the page)
//! ├── status_bar.rs    (Mode + key hints)
//! └── name_field/      (Controlled text input)
//! ```

pub mod name_field;
pub mod sale_page;
mod status_bar;

pub use name_field::{FieldEvent, NameField};
pub use sale_page::{Button, SalePage, SalePageProps, TextField};
pub use status_bar::StatusBar;
