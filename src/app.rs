//! Far Away Frontend App
//!
//! Logo, add form, the list and the stats footer, top to bottom.

use leptos::prelude::*;
use reactive_stores::Store;
use packing_core::ListConfig;

use crate::store::{AppState, AppStore};
use crate::components::{Logo, NewItemForm, PackingList, StatsFooter};

#[component]
pub fn App() -> impl IntoView {
    // The only store in the app; every component gets it explicitly
    let store: AppStore = Store::new(AppState::new(ListConfig::default()));
    web_sys::console::log_1(&"[APP] Store created".into());

    view! {
        <div class="app">
            <Logo />
            <NewItemForm store=store />
            <PackingList store=store />
            <StatsFooter store=store />
        </div>
    }
}
