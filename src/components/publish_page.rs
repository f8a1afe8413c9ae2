//! Publish Page Component
//!
//! Form for a new dataset: image files plus the label options offered to
//! labelers. Validation happens client-side.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::SessionContext;
use crate::notice::Notice;
use crate::publish::{DraftFile, PublishDraft};
use crate::store::{store_push_notice, use_app_store};

/// Read the chosen files and create preview URLs for them
fn files_from_event(ev: &web_sys::Event) -> Vec<DraftFile> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };

    let mut files = Vec::new();
    for i in 0..list.length() {
        let Some(file) = list.get(i) else { continue };
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(preview_url) => files.push(DraftFile {
                name: file.name(),
                preview_url,
            }),
            Err(e) => log::warn!("[PUBLISH] no preview for {}: {:?}", file.name(), e),
        }
    }
    files
}

fn revoke_previews(urls: Vec<String>) {
    for url in urls {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("[PUBLISH] failed to revoke {}: {:?}", url, e);
        }
    }
}

#[component]
pub fn PublishPage() -> impl IntoView {
    let session = expect_context::<SessionContext>().session;
    let store = use_app_store();
    let draft = RwSignal::new(PublishDraft::default());

    on_cleanup(move || {
        if let Some(urls) = draft.try_with_untracked(|d| d.preview_urls()) {
            revoke_previews(urls);
        }
    });

    let on_files = move |ev: web_sys::Event| {
        let files = files_from_event(&ev);
        log::debug!("[PUBLISH] {} files selected", files.len());
        draft.update(|d| d.add_files(files));
    };

    let submit = move |_| {
        let signed_in = session.with_untracked(|s| s.user_id().is_some());
        match draft.with_untracked(|d| d.validate(signed_in)) {
            Err(e) => store_push_notice(&store, Notice::error("Error", e.message())),
            Ok(()) => {
                draft.with_untracked(|d| {
                    log::info!("[PUBLISH] {} files, label options {:?}", d.files.len(), d.label_options)
                });
                revoke_previews(draft.try_update(|d| d.reset()).unwrap_or_default());
                store_push_notice(&store, Notice::success("Your post has been published."));
            }
        }
    };

    view! {
        <div class="publish">
            <h1 class="page-title">"Publish New Post"</h1>

            <input
                type="file"
                multiple
                accept="image/*"
                id="file-input"
                class="hidden-input"
                on:change=on_files
            />
            <label for="file-input" class="primary-btn full-width">"Select Files"</label>

            <div class="preview-grid">
                <For
                    each=move || draft.with(|d| d.files.clone())
                    key=|f| f.preview_url.clone()
                    children=move |f| view! { <img class="preview-thumb" src=f.preview_url alt=f.name /> }
                />
            </div>

            <div class="label-options">
                <For
                    each=move || 0..draft.with(|d| d.label_options.len())
                    key=|index| *index
                    children=move |index| {
                        let value = move || draft.with(|d| d.label_options.get(index).cloned().unwrap_or_default());
                        view! {
                            <div class="label-option-row">
                                <input
                                    type="text"
                                    placeholder=format!("Label option {}", index + 1)
                                    prop:value=value
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        draft.update(|d| d.set_label_option(index, text));
                                    }
                                />
                                <Show when=move || draft.with(|d| d.is_removable(index))>
                                    <button
                                        class="danger-btn small"
                                        aria-label="Remove label option"
                                        on:click=move |_| {
                                            draft.update(|d| {
                                                d.remove_label_option(index);
                                            })
                                        }
                                    >
                                        "✕"
                                    </button>
                                </Show>
                            </div>
                        }
                    }
                />
                <button class="ghost-btn small" on:click=move |_| draft.update(|d| d.add_label_option())>
                    "+ Add Label Option"
                </button>
            </div>

            <button class="success-btn" on:click=submit>"Publish"</button>
        </div>
    }
}
