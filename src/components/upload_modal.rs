//! Upload dialog: pick files or a folder, review, submit.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::modal::Modal;
use crate::models::PendingFile;
use crate::utils::dom;
use crate::utils::format::{format_file_count, format_file_size};

stylance::import_crate_style!(css, "src/components/upload_modal.module.css");
stylance::import_crate_style!(form_css, "src/components/dialog_form.module.css");

/// Files chosen in the input that fired `event`.
fn picked_files(event: &leptos::ev::Event) -> Vec<PendingFile<web_sys::File>> {
    let Some(list) = dom::event_input(event).and_then(|input| input.files()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| PendingFile {
            name: file.name(),
            relative_path: dom::relative_path(&file),
            size: file.size() as u64,
            handle: file,
        })
        .collect()
}

/// Summary of one selected file for rendering.
#[derive(Clone, Debug, PartialEq)]
struct SelectedRow {
    index: usize,
    name: String,
    size: String,
}

#[component]
pub fn UploadModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let folder_input = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = folder_input.get() {
            let _ = input.set_attribute("webkitdirectory", "");
        }
    });

    let selected = Memo::new(move |_| {
        ctx.browser.with(|b| {
            b.selection()
                .files()
                .iter()
                .enumerate()
                .map(|(index, file)| SelectedRow {
                    index,
                    name: file.upload_name().to_string(),
                    size: format_file_size(file.size),
                })
                .collect::<Vec<_>>()
        })
    });
    let summary = Memo::new(move |_| {
        ctx.browser.with(|b| {
            let selection = b.selection();
            (!selection.is_empty()).then(|| {
                format!(
                    "{} · {}",
                    format_file_count(selection.len()),
                    format_file_size(selection.total_bytes())
                )
            })
        })
    });
    let subtitle = Signal::derive(move || {
        ctx.browser.with(|b| {
            if b.selection().is_empty() {
                String::new()
            } else {
                b.upload_kind().label().to_string()
            }
        })
    });
    let uploading = Signal::derive(move || ctx.browser.with(|b| b.is_uploading()));
    let can_submit = Signal::derive(move || ctx.browser.with(|b| b.can_submit_upload()));
    let submit_label = Signal::derive(move || ctx.browser.with(|b| b.submit_label()));

    let on_pick = move |ev: leptos::ev::Event| {
        let files = picked_files(&ev);
        ctx.browser.update(|b| b.select_files(files));
    };
    let on_close = Callback::new(move |_: ()| ctx.browser.update(|b| b.close_upload_modal()));

    view! {
        <Modal title="Upload Files".to_string() subtitle=subtitle on_close=on_close>
            <div class=form_css::body>
                <div class=css::pickers>
                    <label class=css::picker>
                        <Icon icon=ic::FILE />
                        <span>"Choose Files"</span>
                        <input
                            type="file"
                            multiple=true
                            class=css::hiddenInput
                            disabled=move || uploading.get()
                            on:change=on_pick
                        />
                    </label>
                    <label class=css::picker>
                        <Icon icon=ic::FOLDER />
                        <span>"Choose Folder"</span>
                        <input
                            type="file"
                            multiple=true
                            class=css::hiddenInput
                            disabled=move || uploading.get()
                            node_ref=folder_input
                            on:change=on_pick
                        />
                    </label>
                </div>

                <ul class=css::selection>
                    <For
                        each=move || selected.get()
                        key=|row| (row.index, row.name.clone())
                        children=move |row| {
                            let index = row.index;
                            view! {
                                <li class=css::selectedItem>
                                    <span class=css::selectedName>{row.name}</span>
                                    <span class=css::selectedSize>{row.size}</span>
                                    <button
                                        class=css::remove
                                        aria-label="Remove"
                                        on:click=move |_| ctx.browser.update(|b| b.remove_selected(index))
                                    >
                                        <Icon icon=ic::CLOSE />
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>

                {move || summary.get().map(|text| view! { <div class=css::summary>{text}</div> })}
            </div>

            <footer class=form_css::footer>
                <button
                    class=form_css::secondary
                    disabled=move || uploading.get()
                    on:click=move |_| on_close.run(())
                >
                    "Cancel"
                </button>
                <button
                    class=form_css::primary
                    disabled=move || !can_submit.get()
                    on:click=move |_| ctx.submit_upload()
                >
                    <Icon icon=ic::UPLOAD />
                    <span>{move || submit_label.get()}</span>
                </button>
            </footer>
        </Modal>
    }
}
