//! File list component for explorer view.
//!
//! Renders the current [`ListingState`]: a placeholder while loading, when
//! empty or on failure, otherwise one row per entry.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::listing::{ListingRow, ListingState};
use crate::models::ContextTarget;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// What the list area shows, without row payloads.
#[derive(Clone, Debug, PartialEq)]
enum ListView {
    Loading,
    Rows,
    Empty,
    Failed(String),
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = Memo::new(move |_| {
        ctx.browser.with(|b| match b.listing() {
            ListingState::Loading => ListView::Loading,
            ListingState::Rows(_) => ListView::Rows,
            ListingState::Empty => ListView::Empty,
            ListingState::Failed(message) => ListView::Failed(message.clone()),
        })
    });
    let rows = Memo::new(move |_| ctx.browser.with(|b| b.rows()));

    view! {
        <div class=css::list role="grid" aria-label="File list">
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerSize>"Size"</span>
                <span class=css::headerDate>"Modified"</span>
                <span class=css::headerActions></span>
            </div>
            {move || match state.get() {
                ListView::Loading => view! {
                    <div class=css::placeholder>"Loading..."</div>
                }
                .into_any(),
                ListView::Empty => view! {
                    <div class=css::placeholder>
                        <span class=css::placeholderIcon><Icon icon=ic::FOLDER /></span>
                        <span>"This folder is empty"</span>
                    </div>
                }
                .into_any(),
                ListView::Failed(message) => view! {
                    <div class=format!("{} {}", css::placeholder, css::error)>{message}</div>
                }
                .into_any(),
                ListView::Rows => view! {
                    <For
                        each=move || rows.get()
                        key=|row| (row.path.clone(), row.size.clone(), row.modified.clone())
                        children=move |row| view! { <FileListItem row=row /> }
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn FileListItem(row: ListingRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_folder = row.is_folder();
    let icon = if is_folder { ic::FOLDER } else { ic::FILE };
    let target = ContextTarget {
        path: row.path.clone(),
        kind: row.kind,
    };

    let is_active = {
        let path = row.path.clone();
        Signal::derive(move || {
            ctx.browser
                .with(|b| b.context_target().is_some_and(|t| t.path == path))
        })
    };

    let open_path = row.path.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        if is_folder {
            ctx.open(open_path.clone());
        }
    };

    let menu_target = target.clone();
    let handle_contextmenu = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let target = menu_target.clone();
        ctx.browser
            .update(|b| b.open_context_menu(target, ev.page_x(), ev.page_y()));
    };

    let handle_more = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let target = target.clone();
        ctx.browser
            .update(|b| b.open_context_menu(target, ev.page_x(), ev.page_y()));
    };

    let item_class = move || {
        let mut class = css::listItem.to_string();
        if is_folder {
            class = format!("{} {}", class, css::folder);
        }
        if is_active.get() {
            class = format!("{} {}", class, css::active);
        }
        class
    };

    let aria_label = format!("{}: {}", row.kind.label(), row.name);

    view! {
        <div
            class=item_class
            on:click=handle_click
            on:contextmenu=handle_contextmenu
            role="row"
            tabindex="0"
            aria-label=aria_label
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::name>{row.name}</span>
            <span class=css::size>{row.size}</span>
            <span class=css::date>{row.modified}</span>
            <button class=css::more on:click=handle_more aria-label="Actions">
                <Icon icon=ic::MORE />
            </button>
        </div>
    }
}
