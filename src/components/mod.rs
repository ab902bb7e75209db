//! UI Components
//!
//! Leptos components for the packing list. Each takes the `AppStore` as a prop.

mod logo;
mod new_item_form;
mod packing_list;
mod packing_item;
mod stats_footer;
mod confirm_button;

pub use logo::Logo;
pub use new_item_form::NewItemForm;
pub use packing_list::PackingList;
pub use packing_item::PackingItem;
pub use stats_footer::StatsFooter;
pub use confirm_button::ConfirmButton;
