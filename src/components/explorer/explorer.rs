//! Main explorer component.
//!
//! ## Layout
//!
//! - **Sidebar** (left): quick-access folders and storage summary
//! - **Main** (right): toolbar, breadcrumb and file list
//! - **Context menu**: floating, positioned at the pointer

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Breadcrumb, ContextMenu, FileList, Sidebar};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::ROOT_LABEL;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let title = Memo::new(move |_| {
        ctx.browser.with(|b| {
            let path = b.current_path();
            if path.is_root() {
                ROOT_LABEL.to_string()
            } else {
                path.name().to_string()
            }
        })
    });

    let on_upload = move |_: leptos::ev::MouseEvent| {
        ctx.browser.update(|b| b.open_upload_modal());
    };
    let on_new_folder = move |_: leptos::ev::MouseEvent| {
        ctx.browser.update(|b| b.open_folder_modal());
    };

    view! {
        <div class=css::explorer>
            <Sidebar />

            <main class=css::main>
                <header class=css::toolbar>
                    <h1 class=css::title>{move || title.get()}</h1>
                    <div class=css::actions>
                        <button class=css::actionButton on:click=on_new_folder>
                            <Icon icon=ic::FOLDER_PLUS />
                            <span>"New Folder"</span>
                        </button>
                        <button
                            class=format!("{} {}", css::actionButton, css::primary)
                            on:click=on_upload
                        >
                            <Icon icon=ic::UPLOAD />
                            <span>"Upload"</span>
                        </button>
                    </div>
                </header>

                <Breadcrumb />

                <div class=css::listPane>
                    <FileList />
                </div>
            </main>

            <ContextMenu />
        </div>
    }
}
