//! Transient status line for side-effect feedback.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_set_notice, use_itinerary_store, ItineraryStateStoreFields, ItineraryStore};

/// Show `text` for `ms` milliseconds. A newer notice is left alone.
pub fn flash_notice(store: ItineraryStore, text: impl Into<String>, ms: u32) {
    let text = text.into();
    store_set_notice(&store, Some(text.clone()));
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        if store.notice().get_untracked().as_deref() == Some(text.as_str()) {
            store_set_notice(&store, None);
        }
    });
}

#[component]
pub fn Notice() -> impl IntoView {
    let store = use_itinerary_store();

    view! {
        {move || store.notice().get().map(|text| view! {
            <div class="notice" role="status">{text}</div>
        })}
    }
}
