//! Description Editor Component
//!
//! Inline textarea with confirm / cancel for a card's description.

use leptos::prelude::*;

use crate::edit_state::EditState;

#[component]
pub fn DescriptionEditor(
    edit: ReadSignal<EditState>,
    set_edit: WriteSignal<EditState>,
    /// Receives the draft on confirm
    #[prop(into)] on_commit: Callback<String>,
) -> impl IntoView {
    let commit = move || {
        let (next, committed) = edit.get_untracked().commit();
        set_edit.set(next);
        if let Some(text) = committed {
            on_commit.run(text);
        }
    };
    let cancel = move || set_edit.update(|state| *state = std::mem::take(state).cancel());

    view! {
        <div class="description-editor">
            <textarea
                class="description-textarea"
                rows="2"
                prop:value=move || edit.with(|state| state.draft().unwrap_or_default().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_edit.update(|state| state.set_draft(value));
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    match ev.key().as_str() {
                        "Escape" => cancel(),
                        "Enter" if ev.ctrl_key() || ev.meta_key() => {
                            ev.prevent_default();
                            commit();
                        }
                        _ => {}
                    }
                }
            ></textarea>
            <div class="description-actions">
                <button class="confirm-btn" aria-label="Save description" on:click=move |_| commit()>"✓"</button>
                <button class="cancel-btn" aria-label="Cancel editing" on:click=move |_| cancel()>"✗"</button>
            </div>
        </div>
    }
}
