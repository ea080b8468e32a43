use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch, icons::md_content_icons::MdClear};

use crate::data_definitions::catalogue_context::CatalogueContext;


/// Global search box. Results filter as you type.
#[component]
pub fn CatalogueSearchTopBar() -> Element {
    let mut session = use_context::<CatalogueContext>().session;
    let query = use_memo(move || session.read().filters().global_query.clone());
    let has_query = use_memo(move || !query.read().is_empty());

    rsx! {
        div {
            id: "x-catalogue-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 12px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search the catalogue",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 18px;
                    font-weight: 400;
                ",
                value: "{query}",
                oninput: move |event: Event<FormData>| {
                    session.write().set_global_query(event.value());
                },
            }
            if has_query() {
                button {
                    title: "Clear search",
                    style: "border: none; background: none; cursor: pointer; display: flex;",
                    onclick: move |_| {
                        session.write().set_global_query("");
                    },
                    Icon { icon: MdClear, style: "width: 18px; height: 18px; color: #6B7280;" }
                }
            }
        }
    }
}
