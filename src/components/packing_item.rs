//! Packing Item Component
//!
//! One row of the list.

use leptos::prelude::*;
use packing_core::{Command, Item};

use crate::store::{store_dispatch, AppStore};

#[component]
pub fn PackingItem(store: AppStore, item: Item) -> impl IntoView {
    let id = item.id;
    let packed = item.packed;
    let label = format!("{}x {}", item.quantity, item.description);

    view! {
        <li class=if packed { "item packed" } else { "item" }>
            <input
                type="checkbox"
                checked=packed
                on:change=move |_| {
                    store_dispatch(&store, Command::Toggle(id));
                }
            />
            <span style=if packed { "text-decoration: line-through;" } else { "" }>
                {label}
            </span>
            <button
                class="delete-btn"
                on:click=move |_| {
                    store_dispatch(&store, Command::Remove(id));
                }
            >
                "❌"
            </button>
        </li>
    }
}
