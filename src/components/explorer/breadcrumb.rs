//! Breadcrumb bar above the file list.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::breadcrumb::Crumb;

stylance::import_crate_style!(css, "src/components/explorer/breadcrumb.module.css");

/// Clickable path segments, root first.
#[component]
pub fn Breadcrumb() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let crumbs = Memo::new(move |_| ctx.browser.with(|b| b.breadcrumb()));

    view! {
        <nav class=css::breadcrumb aria-label="Breadcrumb">
            {move || {
                crumbs
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator aria-hidden="true">
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                <CrumbSegment crumb=crumb is_root=idx == 0 />
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn CrumbSegment(crumb: Crumb, is_root: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = is_root.then(|| view! { <span class=css::icon><Icon icon=ic::HOME /></span> });

    match crumb.target {
        Some(target) => view! {
            <button
                class=css::segment
                on:click=move |_| ctx.open(target.clone())
            >
                {icon}
                <span>{crumb.label}</span>
            </button>
        }
        .into_any(),
        None => view! {
            <span class=format!("{} {}", css::segment, css::current) aria-current="page">
                {icon}
                <span>{crumb.label}</span>
            </span>
        }
        .into_any(),
    }
}
