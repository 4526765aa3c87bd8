use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Locks page scroll while a modal is open.
fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Optional subtitle under the title (category, client...)
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Callback when modal should close
    #[prop(into)]
    on_close: Callback<()>,
    /// Extra class for the dialog box (size variants)
    #[prop(optional, into)]
    class: String,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes the modal
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    set_body_scroll_locked(true);
    on_cleanup(move || {
        handle.remove();
        set_body_scroll_locked(false);
    });

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    let aria_label = title.clone();

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div
                class=format!("modal {}", class)
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                on:click=stop_propagation
            >
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {subtitle.map(|s| view! { <p class="modal-subtitle">{s}</p> })}
                    </div>
                    <button class="button button--icon modal__close" aria-label="Cerrar" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
