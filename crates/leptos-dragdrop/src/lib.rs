//! Leptos DragDrop Utilities
//!
//! Sortable vertical lists for Leptos using mouse events.
//! Uses a movement threshold to distinguish click from drag and
//! closest-center collision on the vertical axis to pick the drop slot.

use std::fmt::Display;
use std::str::FromStr;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Attribute carrying the sortable key on each item element
pub const DND_KEY_ATTR: &str = "data-dnd-key";

/// Key type used to identify sortable items.
///
/// Keys round-trip through the `data-dnd-key` DOM attribute so the
/// collision pass can map elements back to items.
pub trait DragKey: Clone + PartialEq + Send + Sync + 'static {
    fn to_attr(&self) -> String;
    fn from_attr(value: &str) -> Option<Self>;
}

impl<T> DragKey for T
where
    T: Clone + PartialEq + Send + Sync + Display + FromStr + 'static,
{
    fn to_attr(&self) -> String {
        self.to_string()
    }

    fn from_attr(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

/// DnD state signals
pub struct DndSignals<K: DragKey> {
    /// Item currently being dragged
    pub active_read: ReadSignal<Option<K>>,
    pub active_write: WriteSignal<Option<K>>,
    /// Item whose slot the dragged item would take on drop
    pub over_read: ReadSignal<Option<K>>,
    pub over_write: WriteSignal<Option<K>>,
    /// Pending item (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<K>>,
    pub pending_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Vertical translation of the dragged item
    pub offset_y_read: ReadSignal<i32>,
    pub offset_y_write: WriteSignal<i32>,
    /// Center of the dragged item when the press started
    pub origin_center_read: ReadSignal<f64>,
    pub origin_center_write: WriteSignal<f64>,
    /// Movement in pixels required before a press becomes a drag
    pub activation_distance: i32,
}

impl<K: DragKey> Clone for DndSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: DragKey> Copy for DndSignals<K> {}

impl<K: DragKey> DndSignals<K> {
    pub fn is_active(&self, key: &K) -> bool {
        self.active_read.with(|active| active.as_ref() == Some(key))
    }

    /// True for the drop slot, excluding the dragged item itself
    pub fn is_over(&self, key: &K) -> bool {
        let over = self.over_read.with(|over| over.as_ref() == Some(key));
        over && !self.is_active(key)
    }

    /// Inline style for a sortable item: vertical translation while dragged
    pub fn item_style(&self, key: &K) -> String {
        if self.is_active(key) {
            format!("transform: translate3d(0px, {}px, 0px); opacity: 0.8;", self.offset_y_read.get())
        } else {
            String::new()
        }
    }
}

pub fn create_dnd_signals<K: DragKey>(activation_distance: i32) -> DndSignals<K> {
    let (active_read, active_write) = signal(None::<K>);
    let (over_read, over_write) = signal(None::<K>);
    let (pending_read, pending_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (offset_y_read, offset_y_write) = signal(0i32);
    let (origin_center_read, origin_center_write) = signal(0f64);
    DndSignals {
        active_read,
        active_write,
        over_read,
        over_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        offset_y_read,
        offset_y_write,
        origin_center_read,
        origin_center_write,
        activation_distance,
    }
}

/// Whether a pointer displacement exceeds the activation distance
pub fn exceeds_activation(dx: i32, dy: i32, distance: i32) -> bool {
    let (dx, dy, distance) = (dx as i64, dy as i64, distance as i64);
    dx * dx + dy * dy > distance * distance
}

/// Closest-center collision on the vertical axis.
/// Ties resolve to the earliest candidate.
pub fn closest_center<K: Clone>(probe_y: f64, candidates: &[(K, f64)]) -> Option<K> {
    let mut best: Option<(&K, f64)> = None;
    for (key, center) in candidates {
        let distance = (center - probe_y).abs();
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((key, distance)),
        }
    }
    best.map(|(key, _)| key.clone())
}

/// End drag operation
pub fn end_drag<K: DragKey>(dnd: &DndSignals<K>) {
    dnd.active_write.set(None);
    dnd.over_write.set(None);
    dnd.pending_write.set(None);
    dnd.offset_y_write.set(0);
}

fn element_center(el: &web_sys::Element) -> f64 {
    let rect = el.get_bounding_client_rect();
    rect.top() + rect.height() / 2.0
}

/// Centers of every sortable element currently in the document.
/// The dragged item reports its origin center since its rect is translated.
fn sortable_centers<K: DragKey>(active: &K, origin_center: f64) -> Vec<(K, f64)> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(&format!("[{}]", DND_KEY_ATTR)) else {
        return Vec::new();
    };

    let mut centers = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let Some(key) = el.get_attribute(DND_KEY_ATTR).and_then(|v| K::from_attr(&v)) else {
            continue;
        };
        let center = if &key == active { origin_center } else { element_center(&el) };
        centers.push((key, center));
    }
    centers
}

/// Create mousedown handler for sortable items
/// Records pending drag with start position
pub fn make_on_mousedown<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is an input, textarea or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        let center = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| element_center(&el))
            .unwrap_or(ev.client_y() as f64);

        dnd.pending_write.set(Some(key.clone()));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
        dnd.origin_center_write.set(center);
    }
}

fn add_document_listener(event: &str, callback: &wasm_bindgen::JsValue) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback(event, callback.unchecked_ref());
    }
}

/// Bind document mousemove: starts the drag past the threshold,
/// then tracks the vertical offset and the closest slot
pub fn bind_global_mousemove<K: DragKey>(dnd: DndSignals<K>) {
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_read.get_untracked() else {
            return;
        };

        let dx = ev.client_x() - dnd.start_x_read.get_untracked();
        let dy = ev.client_y() - dnd.start_y_read.get_untracked();

        if dnd.active_read.get_untracked().is_none() {
            if !exceeds_activation(dx, dy, dnd.activation_distance) {
                return;
            }
            tracing::trace!(key = %pending.to_attr(), "drag started");
            dnd.active_write.set(Some(pending.clone()));
        }

        dnd.offset_y_write.set(dy);
        let origin = dnd.origin_center_read.get_untracked();
        let centers = sortable_centers(&pending, origin);
        let over = closest_center(origin + dy as f64, &centers);
        if over != dnd.over_read.get_untracked() {
            dnd.over_write.set(over);
        }
    });
    add_document_listener("mousemove", on_mousemove.as_ref());
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection.
/// Calls `on_drop(active, over)` when a drag completes; Escape cancels.
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: DragKey,
    F: Fn(K, K) + 'static,
{
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let active = dnd.active_read.get_untracked();
        let over = dnd.over_read.get_untracked();

        end_drag(&dnd);

        // Only a real drag emits; a plain click falls through to the element
        if let (Some(active), Some(over)) = (active, over) {
            on_drop(active, over);
        }
    });
    add_document_listener("mouseup", on_mouseup.as_ref());
    on_mouseup.forget();

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.pending_read.get_untracked().is_some() {
            tracing::trace!("drag cancelled");
            end_drag(&dnd);
        }
    });
    add_document_listener("keydown", on_keydown.as_ref());
    on_keydown.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_distance() {
        assert!(!exceeds_activation(0, 0, 8));
        assert!(!exceeds_activation(0, 8, 8));
        assert!(!exceeds_activation(5, 6, 8));
        assert!(exceeds_activation(0, 9, 8));
        assert!(exceeds_activation(-6, -6, 8));
    }

    #[test]
    fn test_closest_center_picks_nearest() {
        let candidates = vec![("a", 40.0), ("b", 120.0), ("c", 200.0)];
        assert_eq!(closest_center(10.0, &candidates), Some("a"));
        assert_eq!(closest_center(130.0, &candidates), Some("b"));
        assert_eq!(closest_center(500.0, &candidates), Some("c"));
    }

    #[test]
    fn test_closest_center_tie_and_empty() {
        let candidates = vec![("a", 0.0), ("b", 100.0)];
        assert_eq!(closest_center(50.0, &candidates), Some("a"));
        assert_eq!(closest_center::<&str>(50.0, &[]), None);
    }

    #[test]
    fn test_drag_key_roundtrip() {
        assert_eq!(<u32 as DragKey>::from_attr("42"), Some(42));
        assert_eq!(<u32 as DragKey>::from_attr("x"), None);
        assert_eq!(7u32.to_attr(), "7");
    }
}
