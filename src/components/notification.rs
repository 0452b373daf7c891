//! Notification toast.
//!
//! One hide timer is owned here. Each new notification replaces it, and
//! dropping the old [`Timeout`] cancels it, so only the latest message's
//! duration applies.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NOTIFICATION_DURATION_MS;
use crate::models::Severity;

stylance::import_crate_style!(css, "src/components/notification.module.css");

#[component]
pub fn NotificationToast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let notification = Memo::new(move |_| ctx.browser.with(|b| b.notification().cloned()));
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        let Some(generation) = notification.with(|n| n.as_ref().map(|n| n.generation)) else {
            return;
        };
        let timeout = Timeout::new(NOTIFICATION_DURATION_MS, move || {
            ctx.browser.update(|b| b.expire_notification(generation));
        });
        timer.set_value(Some(timeout));
    });

    on_cleanup(move || {
        timer.try_update_value(|t| t.take());
    });

    view! {
        {move || {
            notification.get().map(|n| {
                let (class, icon) = match n.severity {
                    Severity::Success => (format!("{} {}", css::toast, css::success), ic::SUCCESS),
                    Severity::Error => (format!("{} {}", css::toast, css::error), ic::ERROR),
                };
                view! {
                    <div class=class role="status" aria-live="polite">
                        <span class=css::icon><Icon icon=icon /></span>
                        <span class=css::message>{n.message}</span>
                    </div>
                }
            })
        }}
    }
}
