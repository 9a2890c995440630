//! Itinerary Card Component
//!
//! One stop: drag handle, numbered image, rating, editable description,
//! tags and the action menu.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::components::{flash_notice, CardMenu, DescriptionEditor};
use crate::config::AppConfig;
use crate::edit_state::EditState;
use crate::maps;
use crate::models::{ItemId, ItineraryItem};
use crate::store::{store_delete, store_edit_description, store_move_by, use_itinerary_store, ItineraryStore};

fn view_on_maps(store: ItineraryStore, config: &AppConfig, title: &str) {
    let url = maps::maps_search_url(title, config);
    match maps::open_in_new_tab(&url) {
        Ok(()) => tracing::debug!(%url, "opened maps"),
        Err(e) => {
            tracing::warn!(error = %e, "could not open maps");
            flash_notice(store, "Couldn't open maps", config.notice_ms);
        }
    }
}

fn copy_map_link(store: ItineraryStore, config: &AppConfig, title: &str) {
    let url = maps::maps_search_url(title, config);
    let notice_ms = config.notice_ms;
    spawn_local(async move {
        match maps::copy_to_clipboard(&url).await {
            Ok(()) => {
                tracing::info!(%url, "link copied to clipboard");
                flash_notice(store, "Link copied", notice_ms);
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not copy link");
                flash_notice(store, "Couldn't copy link", notice_ms);
            }
        }
    });
}

/// A single stop in the itinerary
#[component]
pub fn ItineraryCard(
    /// Live view of this stop; number and description change in place
    #[prop(into)] item: Signal<ItineraryItem>,
    dnd: DndSignals<ItemId>,
) -> impl IntoView {
    let store = use_itinerary_store();
    let config = StoredValue::new(expect_context::<AppConfig>());

    let ItineraryItem { id, title, rating, review_count, image, tags, .. } = item.get_untracked();
    let key_attr = id.to_string();
    let item_id = StoredValue::new(id.clone());
    let title_value = StoredValue::new(title.clone());

    let (edit, set_edit) = signal(EditState::Idle);

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let card_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("itinerary-card");
            if dnd.is_active(&id) { c.push_str(" dragging"); }
            if dnd.is_over(&id) { c.push_str(" drop-target"); }
            c
        }
    };
    let card_style = {
        let id = id.clone();
        move || dnd.item_style(&id)
    };

    let handle_ref = NodeRef::<leptos::html::Span>::new();

    // Keyboard reordering from the focused handle
    let on_handle_keydown = move |ev: web_sys::KeyboardEvent| {
        let delta = match ev.key().as_str() {
            "ArrowUp" => -1,
            "ArrowDown" => 1,
            _ => return,
        };
        ev.prevent_default();
        store_move_by(&store, &item_id.get_value(), delta);
        // The list may move this node; keep the handle focused for the next press
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;
            if let Some(handle) = handle_ref.get_untracked() {
                let _ = handle.focus();
            }
        });
    };

    let on_commit = Callback::new(move |text: String| {
        store_edit_description(&store, &item_id.get_value(), &text);
    });
    let on_view_location = Callback::new(move |_: ()| {
        config.with_value(|c| title_value.with_value(|t| view_on_maps(store, c, t)));
    });
    let on_copy_link = Callback::new(move |_: ()| {
        config.with_value(|c| title_value.with_value(|t| copy_map_link(store, c, t)));
    });
    let on_delete = Callback::new(move |_: ()| {
        store_delete(&store, &item_id.get_value());
    });

    let alt = title.clone();

    view! {
        <div
            class=card_class
            style=card_style
            data-dnd-key=key_attr
            on:mousedown=on_mousedown
        >
            <div class="card-row">
                <span
                    node_ref=handle_ref
                    class="drag-handle"
                    role="button"
                    tabindex="0"
                    aria-label=format!("Reorder {}", title)
                    on:keydown=on_handle_keydown
                >
                    "☰"
                </span>

                <div class="card-image">
                    <img src=image alt=alt width="80" height="80" draggable="false" />
                    <span class="card-pin">{move || item.with(|i| i.number)}</span>
                </div>

                <div class="card-body">
                    <div class="card-title-row">
                        <h3 class="card-title">{title.clone()}</h3>
                        <CardMenu
                            on_view_location=on_view_location
                            on_copy_link=on_copy_link
                            on_delete=on_delete
                        />
                    </div>

                    <div class="card-rating">
                        <span class="star">"★"</span>
                        <span class="rating-value">{rating.to_string()}</span>
                        <span class="review-count">"(" {review_count} ")"</span>
                    </div>

                    {move || if edit.with(EditState::is_editing) {
                        view! {
                            <DescriptionEditor edit=edit set_edit=set_edit on_commit=on_commit />
                        }.into_any()
                    } else {
                        view! {
                            <div class="card-description">
                                <p>{move || item.with(|i| i.description.clone())}</p>
                                <button
                                    class="icon-btn edit-btn"
                                    aria-label="Edit description"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        let current = item.with_untracked(|i| i.description.clone());
                                        set_edit.update(|state| *state = std::mem::take(state).begin(&current));
                                    }
                                >
                                    "✎"
                                </button>
                            </div>
                        }.into_any()
                    }}

                    <div class="card-tags">
                        {tags.into_iter().map(|tag| view! { <span class="badge">{tag}</span> }).collect_view()}
                        <span class="badge badge-add">"+"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
