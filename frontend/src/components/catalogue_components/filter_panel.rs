//! Facet checklists and the in-results search box.

use common::facets::{FacetField, FacetOptionState};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{
    md_action_icons::MdSearch,
    md_content_icons::MdClear,
    md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank},
}};

use crate::data_definitions::catalogue_context::CatalogueContext;

#[component]
pub fn FilterPanel() -> Element {
    let mut session = use_context::<CatalogueContext>().session;
    let local_query = use_memo(move || session.read().filters().local_query.clone());
    let active_filter_count = use_memo(move || session.read().active_filter_count());

    rsx! {
        div {
            id: "x-catalogue-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                padding: 16px;
                border-radius: 10px;
                background: white;
                border: 1px solid #E5E7EB;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.05);
            ",

            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        flex-grow: 1;
                        height: 36px;
                        padding: 0 10px;
                        border-radius: 8px;
                        border: 1px solid #D1D5DB;
                    ",
                    Icon { icon: MdSearch, style: "width: 18px; height: 18px; color: #6B7280;" }
                    input {
                        r#type: "text",
                        placeholder: "Search within results",
                        style: "flex: 1; border: none; outline: none; font-size: 14px;",
                        value: "{local_query}",
                        oninput: move |event: Event<FormData>| {
                            session.write().set_local_query(event.value());
                        },
                    }
                }
                button {
                    disabled: active_filter_count() == 0 && local_query.read().is_empty(),
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        height: 36px;
                        padding: 0 12px;
                        font-size: 14px;
                        border-radius: 8px;
                        background: white;
                        color: #B91C1C;
                        border: 1px solid #FCA5A5;
                        cursor: pointer;
                    ",
                    onclick: move |_| session.write().clear_filters(),
                    Icon { icon: MdClear, style: "width: 16px; height: 16px;" }
                    "Clear All"
                }
            }

            div {
                style: "display: flex; flex-direction: row; gap: 16px; align-items: flex-start;",
                for field in FacetField::ALL {
                    FacetCheckboxList { key: "{field:?}", field }
                }
            }
        }
    }
}

#[component]
fn FacetCheckboxList(field: FacetField) -> Element {
    let session = use_context::<CatalogueContext>().session;
    let options = use_memo(move || session.read().facet_option_states(field));
    let selected_count = use_memo(move || session.read().filters().selected_count(field));

    rsx! {
        div {
            style: "flex: 1 1 0; min-width: 160px;",
            div {
                style: "font-size: 14px; font-weight: 600; color: #111827; margin-bottom: 6px;",
                "{field.display_name()}"
                if selected_count() > 0 {
                    span { style: "font-weight: 400; color: #2563EB;", " ({selected_count} selected)" }
                }
            }
            ul {
                class: "catalogue-thin-scrollbar",
                style: "max-height: 220px; overflow-y: auto;",
                for option in options.read().iter().cloned() {
                    li {
                        key: "{option.value}",
                        FacetCheckbox { field, option }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(field: FacetField, option: FacetOptionState) -> Element {
    let mut session = use_context::<CatalogueContext>().session;
    let value = option.value.clone();
    rsx! {
        div {
            class: "catalogue-hover-row",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                padding: 3px 4px;
                align-items: center;
                font-size: 14px;
            ",
            onclick: move |_| {
                session.write().toggle_facet_value(field, &value);
            },
            if option.is_selected {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #2563EB; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #6B7280; flex-shrink: 0;" }
            }
            span {
                style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap; min-width: 0;",
                "{option.value}"
            }
        }
    }
}
