use std::str::FromStr;

use common::dataset::DatasetKey;
use dioxus::prelude::*;

use crate::data_definitions::catalogue_context::CatalogueContext;

#[component]
pub fn DatasetSelector() -> Element {
    let mut session = use_context::<CatalogueContext>().session;
    let active = use_memo(move || session.read().active_dataset_key());

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 8px; font-size: 14px; color: #374151;",
            "Dataset"
            select {
                style: "
                    height: 36px;
                    padding: 0 10px;
                    font-size: 15px;
                    border-radius: 8px;
                    border: 1px solid #D1D5DB;
                    background: white;
                    cursor: pointer;
                ",
                onchange: move |event: Event<FormData>| {
                    match DatasetKey::from_str(&event.value()) {
                        Ok(key) => session.write().switch_dataset(key),
                        Err(e) => dioxus::logger::tracing::warn!("dataset selector: {e}"),
                    }
                },
                for key in DatasetKey::ALL {
                    option {
                        key: "{key}",
                        value: "{key}",
                        selected: key == active(),
                        "{key.display_name()}"
                    }
                }
            }
        }
    }
}
