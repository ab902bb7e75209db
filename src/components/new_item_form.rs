//! New Item Form Component
//!
//! Quantity picker plus description input. The draft lives here, not in the
//! store, and is reset only when the add went through.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use packing_core::{Command, DEFAULT_QUANTITY};

use crate::store::{store_dispatch, store_quantity_choices, AppStore};

#[component]
pub fn NewItemForm(store: AppStore) -> impl IntoView {
    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(DEFAULT_QUANTITY);
    let choices = store_quantity_choices(&store);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let command = Command::Add {
            description: description.get(),
            quantity: quantity.get(),
        };
        if store_dispatch(&store, command) {
            set_description.set(String::new());
            set_quantity.set(DEFAULT_QUANTITY);
        } else {
            web_sys::console::log_1(&"[FORM] Blank description, nothing added".into());
        }
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need for your 😍 trip?"</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    let Some(select) = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok())
                    else {
                        return;
                    };
                    set_quantity.set(select.value().parse().unwrap_or(DEFAULT_QUANTITY));
                }
            >
                {choices
                    .into_iter()
                    .map(|n| view! { <option value=n.to_string()>{n}</option> })
                    .collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
