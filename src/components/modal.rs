//! Modal dialog shell shared by the upload and new-folder dialogs.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/modal.module.css");

/// Backdrop plus dialog box. Clicking the backdrop or the close button
/// calls `on_close`. Children supply the body and footer.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] subtitle: Option<Signal<String>>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=css::backdrop on:click=move |_| on_close.run(())>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <header class=css::header>
                    <div class=css::titles>
                        <h2 class=css::title>{move || title.get()}</h2>
                        {subtitle.map(|subtitle| view! {
                            <span class=css::subtitle>{move || subtitle.get()}</span>
                        })}
                    </div>
                    <button
                        class=css::close
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}
