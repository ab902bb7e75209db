//! Stats Footer Component

use leptos::prelude::*;

use crate::store::{store_stats, AppStore};

/// Item count and packed percentage, recomputed on every list change
#[component]
pub fn StatsFooter(store: AppStore) -> impl IntoView {
    let summary = move || store_stats(&store).summary().to_string();

    view! {
        <footer class="stats">
            <em>{summary}</em>
        </footer>
    }
}
