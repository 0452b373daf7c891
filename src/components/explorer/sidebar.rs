//! Sidebar with quick-access folders and the storage summary.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, QUICK_FOLDERS, ROOT_LABEL};
use crate::models::DirectoryPath;

stylance::import_crate_style!(css, "src/components/explorer/sidebar.module.css");

/// A quick folder is active when the current path lies inside it.
/// The root entry is active only at the root itself.
fn is_active(current: &DirectoryPath, folder: &DirectoryPath) -> bool {
    match folder.first_segment() {
        None => current.is_root(),
        Some(segment) => current.first_segment() == Some(segment),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let storage = Memo::new(move |_| ctx.browser.with(|b| b.storage().map(|s| s.label())));

    let entries = std::iter::once((ROOT_LABEL, DirectoryPath::root(), ic::HOME))
        .chain(
            QUICK_FOLDERS
                .iter()
                .map(|name| (*name, DirectoryPath::new(name), ic::quick_folder(name))),
        )
        .map(|(label, path, icon)| view! { <SidebarItem label=label path=path icon=icon /> })
        .collect_view();

    view! {
        <aside class=css::sidebar>
            <div class=css::brand>{APP_NAME}</div>
            <nav class=css::nav>{entries}</nav>
            <div class=css::footer>
                <span class=css::footerIcon><Icon icon=ic::STORAGE /></span>
                <span>{move || storage.get().unwrap_or_default()}</span>
            </div>
        </aside>
    }
}

#[component]
fn SidebarItem(label: &'static str, path: DirectoryPath, icon: icondata::Icon) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let active_path = path.clone();
    let active = Memo::new(move |_| ctx.browser.with(|b| is_active(b.current_path(), &active_path)));

    let class = move || {
        if active.get() {
            format!("{} {}", css::item, css::active)
        } else {
            css::item.to_string()
        }
    };

    view! {
        <button class=class on:click=move |_| ctx.open(path.clone())>
            <span class=css::icon><Icon icon=icon /></span>
            <span>{label}</span>
        </button>
    }
}
