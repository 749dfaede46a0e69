//! # SalePage View
//!
//! The stateless display for the storefront. `SalePage::view(props)` turns the
//! store's current values plus its two entry points into a small render tree:
//!
//! ```text
//! SalePage
//! ├── heading      "My Hardware Store"
//! ├── sale_label   "Currently on Sale: A Hammer"
//! ├── toggle       Button  "Hide" | "Edit Sale Item"   → toggle_editable()
//! └── name_field   Option<TextField> (only while editing) → set_sale_item_name(full text)
//! ```
//!
//! The tree owns no state. Controls hold the callbacks they were given and
//! invoke them when the render surface reports a press or an edit. Drawing is
//! done by `ui::PageView`, the `Component` that pairs the tree with the
//! terminal's focus and cursor state.

use std::fmt;
use std::rc::Rc;

pub const HIDE_LABEL: &str = "Hide";
pub const EDIT_LABEL: &str = "Edit Sale Item";

/// Everything the page needs from its parent.
pub struct SalePageProps {
    pub store_title: String,
    pub sale_item_name: String,
    pub is_editable: bool,
    pub toggle_editable: Rc<dyn Fn()>,
    pub set_sale_item_name: Rc<dyn Fn(String)>,
}

pub struct Button {
    pub label: &'static str,
    on_press: Rc<dyn Fn()>,
}

impl Button {
    pub fn press(&self) {
        (self.on_press)();
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button").field("label", &self.label).finish()
    }
}

pub struct TextField {
    pub value: String,
    on_change: Rc<dyn Fn(String)>,
}

impl TextField {
    /// Report the field's full current text.
    pub fn change(&self, text: String) {
        (self.on_change)(text);
    }
}

impl fmt::Debug for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField").field("value", &self.value).finish()
    }
}

#[derive(Debug)]
pub struct SalePage {
    pub heading: String,
    pub sale_label: String,
    pub toggle: Button,
    pub name_field: Option<TextField>,
}

impl SalePage {
    pub fn view(props: SalePageProps) -> Self {
        let toggle = Button {
            label: if props.is_editable { HIDE_LABEL } else { EDIT_LABEL },
            on_press: props.toggle_editable,
        };

        let name_field = props.is_editable.then(|| TextField {
            value: props.sale_item_name.clone(),
            on_change: props.set_sale_item_name,
        });

        Self {
            heading: props.store_title,
            sale_label: format!("Currently on Sale: {}", props.sale_item_name),
            toggle,
            name_field,
        }
    }

    pub fn text_field_count(&self) -> usize {
        usize::from(self.name_field.is_some())
    }
}
