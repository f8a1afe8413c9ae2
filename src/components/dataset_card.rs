//! Dataset Card Component

use leptos::prelude::*;

use crate::format::percent;
use crate::models::Dataset;

#[component]
pub fn DatasetCard(
    dataset: Dataset,
    #[prop(into)] on_end: Callback<String>,
) -> impl IntoView {
    let thumbnail = dataset.thumbnail_src();
    let options = dataset.label_options.join(", ");
    let confidence = percent(dataset.accuracy);
    let dataset_id = dataset.dataset_id.clone();

    view! {
        <div class="dataset-card">
            <div class="dataset-thumb">
                <img src=thumbnail alt=format!("{} thumbnail", dataset.name) />
            </div>
            <h2 class="dataset-name">{dataset.name.clone()}</h2>
            <p class="dataset-description">{dataset.description}</p>
            <hr />
            <div class="dataset-row">
                <span class="dataset-key">"🏷️ Label Options:"</span>
                <span class="dataset-value">{options}</span>
            </div>
            <div class="dataset-row">
                <span class="dataset-key">"✅ Confidence:"</span>
                <span class="dataset-value">{confidence}</span>
            </div>
            <div class="dataset-row">
                <span class="dataset-key">"🖼️ Labels Received:"</span>
                <span class="badge">{dataset.labels_received}</span>
            </div>
            <button
                class="danger-btn"
                title="End the labeling process for this dataset"
                on:click=move |_| on_end.run(dataset_id.clone())
            >
                "End Labeling"
            </button>
        </div>
    }
}
