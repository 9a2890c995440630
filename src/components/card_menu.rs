//! Card Menu Component
//!
//! Per-stop overflow menu: open in maps, copy the link, delete.

use leptos::prelude::*;

#[component]
pub fn CardMenu(
    #[prop(into)] on_view_location: Callback<()>,
    #[prop(into)] on_copy_link: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    // Run the action and close the menu
    let pick = move |action: Callback<()>| {
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            set_open.set(false);
            action.run(());
        }
    };

    view! {
        <div class="card-menu">
            <button
                class="icon-btn menu-trigger"
                aria-label="More actions"
                aria-expanded=move || open.get().to_string()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_open.update(|o| *o = !*o);
                }
            >
                "⋮"
            </button>
            <Show when=move || open.get()>
                <div class="card-menu-content" role="menu">
                    <button class="card-menu-item" role="menuitem" on:click=pick(on_view_location)>
                        "↗ View on Maps"
                    </button>
                    <button class="card-menu-item" role="menuitem" on:click=pick(on_copy_link)>
                        "⧉ Copy Link"
                    </button>
                    <button class="card-menu-item danger" role="menuitem" on:click=pick(on_delete)>
                        "✕ Delete"
                    </button>
                </div>
            </Show>
        </div>
    }
}
