//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The store owns the canonical itinerary; components get read
//! access and call the helpers below to change it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::itinerary;
use crate::models::{seed_itinerary, ItemId, ItineraryItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ItineraryState {
    /// Stops in display order
    pub items: Vec<ItineraryItem>,
    /// Transient status line (clipboard / navigation feedback)
    pub notice: Option<String>,
}

impl ItineraryState {
    pub fn seeded() -> Self {
        Self {
            items: seed_itinerary(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ItineraryStore = Store<ItineraryState>;

/// Get the itinerary store from context
pub fn use_itinerary_store() -> ItineraryStore {
    expect_context::<ItineraryStore>()
}

/// Reactive view of one item, tracked by id.
/// Keeps the last known value once the item leaves the list.
pub fn store_item_memo(store: ItineraryStore, initial: ItineraryItem) -> Memo<ItineraryItem> {
    let id = initial.id.clone();
    Memo::new(move |prev: Option<&ItineraryItem>| {
        store
            .items()
            .with(|items| itinerary::find(items, &id))
            .or_else(|| prev.cloned())
            .unwrap_or_else(|| initial.clone())
    })
}

// ========================
// Store Helper Functions
// ========================

fn replace_items(store: &ItineraryStore, f: impl FnOnce(&[ItineraryItem]) -> Vec<ItineraryItem>) {
    let next = store.items().with_untracked(|items| f(items));
    *store.items().write() = next;
}

/// Move `source` into `target`'s slot
pub fn store_reorder(store: &ItineraryStore, source: &ItemId, target: &ItemId) {
    replace_items(store, |items| itinerary::reorder(items, source, target));
}

/// Move an item by `delta` slots (keyboard reordering)
pub fn store_move_by(store: &ItineraryStore, id: &ItemId, delta: isize) {
    replace_items(store, |items| itinerary::move_by(items, id, delta));
}

/// Replace an item's description
pub fn store_edit_description(store: &ItineraryStore, id: &ItemId, text: &str) {
    replace_items(store, |items| itinerary::edit_description(items, id, text));
}

/// Remove an item by ID
pub fn store_delete(store: &ItineraryStore, id: &ItemId) {
    replace_items(store, |items| itinerary::delete(items, id));
}

pub fn store_set_notice(store: &ItineraryStore, notice: Option<String>) {
    *store.notice().write() = notice;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_memo_tracks_renumbering() {
        let owner = Owner::new();
        owner.set();

        let store = Store::new(ItineraryState::seeded());
        let lotus = store.items().with_untracked(|items| items[3].clone());
        let memo = store_item_memo(store, lotus);
        assert_eq!(memo.get().number, 4);

        store_delete(&store, &"1".into());
        assert_eq!(memo.get().number, 3);

        store_edit_description(&store, &"4".into(), "Evening visit");
        assert_eq!(memo.get().description, "Evening visit");

        // Deleted item keeps its last value
        store_delete(&store, &"4".into());
        assert_eq!(memo.get().number, 3);
        assert_eq!(memo.get().id.as_str(), "4");
    }
}
