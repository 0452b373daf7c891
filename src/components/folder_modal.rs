//! New-folder dialog.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::modal::Modal;

stylance::import_crate_style!(css, "src/components/folder_modal.module.css");
stylance::import_crate_style!(form_css, "src/components/dialog_form.module.css");

#[component]
pub fn FolderModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Mounted fresh on every open, so the name starts empty.
    let (name, set_name) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let submit = move || ctx.create_folder(name.get_untracked());
    let on_close = Callback::new(move |_: ()| ctx.browser.update(|b| b.close_folder_modal()));

    view! {
        <Modal title="New Folder".to_string() on_close=on_close>
            <div class=form_css::body>
                <input
                    class=css::textInput
                    type="text"
                    placeholder="Folder name"
                    node_ref=input_ref
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />
            </div>
            <footer class=form_css::footer>
                <button class=form_css::secondary on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class=form_css::primary on:click=move |_| submit()>
                    <Icon icon=ic::FOLDER_PLUS />
                    <span>"Create"</span>
                </button>
            </footer>
        </Modal>
    }
}
