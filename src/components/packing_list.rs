//! Packing List Component
//!
//! The sorted list, the sort picker and the clear button.

use leptos::prelude::*;
use packing_core::{Command, SortMode};

use crate::components::{ConfirmButton, PackingItem};
use crate::store::{store_dispatch, store_set_sort, store_sort_mode, store_sorted_items, AppStore};

#[component]
pub fn PackingList(store: AppStore) -> impl IntoView {
    let sorted_items = move || store_sorted_items(&store);

    let clear = Callback::new(move |_: ()| {
        if store_dispatch(&store, Command::Clear) {
            web_sys::console::log_1(&"[LIST] Cleared".into());
        }
    });

    view! {
        <div class="list">
            <ul>
                <For
                    each=sorted_items
                    // packed is part of the key so a toggled row re-renders
                    key=|item| (item.id, item.packed)
                    children=move |item| view! { <PackingItem store=store item=item /> }
                />
            </ul>

            <div class="actions">
                <select
                    prop:value=move || store_sort_mode(&store).as_str()
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<SortMode>() {
                            Ok(mode) => store_set_sort(&store, mode),
                            Err(e) => web_sys::console::log_1(&format!("[LIST] {}", e).into()),
                        }
                    }
                >
                    {SortMode::ALL
                        .iter()
                        .map(|mode| view! { <option value=mode.as_str()>{mode.label()}</option> })
                        .collect_view()}
                </select>
                <ConfirmButton
                    button_class="clear-btn"
                    label="Clear list"
                    prompt="Are you sure you want to delete all items?"
                    on_confirm=clear
                />
            </div>
        </div>
    }
}
