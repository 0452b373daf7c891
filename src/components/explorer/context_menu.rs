//! Per-item action menu (download, delete).

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{ContextTarget, ItemKind};

stylance::import_crate_style!(css, "src/components/explorer/context_menu.module.css");

/// Floating menu for the current context target.
///
/// Clicks inside the menu stop propagating so the window-level listener
/// that closes the menu does not run first.
#[component]
pub fn ContextMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let menu = Memo::new(move |_| ctx.browser.with(|b| b.context_menu().cloned()));

    // The target is read synchronously here, before anything can close the menu.
    let current_target = move || ctx.browser.with_untracked(|b| b.context_target().cloned());

    let on_download = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(target) = current_target() {
            ctx.download(&target);
        }
    };

    let on_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(target) = current_target() {
            ctx.delete(target);
        }
    };

    view! {
        {move || {
            menu.get().map(|menu| {
                let style = format!("left: {}px; top: {}px;", menu.x, menu.y);
                view! {
                    <div
                        class=css::menu
                        style=style
                        role="menu"
                        on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                    >
                        <MenuHeader target=menu.target.clone() />
                        <button
                            class=css::item
                            role="menuitem"
                            on:click=on_download
                        >
                            <Icon icon=ic::DOWNLOAD />
                            <span>"Download"</span>
                        </button>
                        <button
                            class=format!("{} {}", css::item, css::danger)
                            role="menuitem"
                            on:click=on_delete
                        >
                            <Icon icon=ic::TRASH />
                            <span>"Delete"</span>
                        </button>
                    </div>
                }
            })
        }}
    }
}

#[component]
fn MenuHeader(target: ContextTarget) -> impl IntoView {
    let icon = match target.kind {
        ItemKind::File => ic::FILE,
        ItemKind::Folder => ic::FOLDER,
    };
    view! {
        <div class=css::header>
            <Icon icon=icon />
            <span>{target.path.name().to_string()}</span>
        </div>
    }
}
