use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Dialog over a dimmed overlay. Escape, the close button or a click on the
/// overlay request closing; footer buttons belong in `children` inside a
/// `modal-footer` div.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    /// Extra class on the dialog surface, e.g. "modal--wide"
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let surface_class = if class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", class)
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=surface_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
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
