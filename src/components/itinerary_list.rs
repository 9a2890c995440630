//! Itinerary List Component
//!
//! Sortable list of stops. Drops from leptos-dragdrop feed straight
//! into the store's reorder.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::ItineraryCard;
use crate::config::AppConfig;
use crate::models::ItemId;
use crate::store::{store_item_memo, store_reorder, use_itinerary_store, ItineraryStateStoreFields};

#[component]
pub fn ItineraryList() -> impl IntoView {
    let store = use_itinerary_store();
    let config = expect_context::<AppConfig>();

    let dnd = create_dnd_signals::<ItemId>(config.drag_activation_px);

    bind_global_mouseup(dnd, move |active: ItemId, over: ItemId| {
        tracing::debug!(%active, %over, "drop");
        store_reorder(&store, &active, &over);
    });

    view! {
        <div class="itinerary-list" class:dragging=move || dnd.active_read.get().is_some()>
            <For
                each=move || store.items().get()
                // Keyed by id so a card keeps its edit state and focus when renumbered
                key=|item| item.id.clone()
                children=move |item| {
                    let item = store_item_memo(store, item);
                    view! { <ItineraryCard item=item dnd=dnd /> }
                }
            />
        </div>
    }
}
