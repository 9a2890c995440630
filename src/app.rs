//! Itinerary App
//!
//! Page shell: header, day title, sortable stops and the maps footer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{flash_notice, ItineraryList, Notice};
use crate::config::AppConfig;
use crate::maps;
use crate::store::ItineraryState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    tracing::info!(?config, "starting itinerary");

    let store = Store::new(ItineraryState::seeded());
    provide_context(store);
    provide_context(config.clone());

    let maps_home = config.maps_home_url.clone();
    let notice_ms = config.notice_ms;
    let open_maps_home = move |_| {
        if let Err(e) = maps::open_in_new_tab(&maps_home) {
            tracing::warn!(error = %e, "could not open maps");
            flash_notice(store, "Couldn't open maps", notice_ms);
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="brand">"Y2Z TRAVEL"</h1>
                <button class="icon-btn" aria-label="Menu">"☰"</button>
            </header>

            <main class="app-content">
                <div class="title-block">
                    <h2>"Itinerary"</h2>
                    <p class="subtitle">"Day"</p>
                </div>

                <ItineraryList />

                <div class="maps-footer">
                    <button class="maps-btn" on:click=open_maps_home>"MAPS"</button>
                </div>

                <Notice />
            </main>
        </div>
    }
}
