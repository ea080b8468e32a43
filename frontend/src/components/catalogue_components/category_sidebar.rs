//! Collapsible taxonomy of the active dataset.

use common::category_tree::CategoryRow;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronRight, MdExpandMore}};

use crate::data_definitions::catalogue_context::CatalogueContext;

#[component]
pub fn CategorySidebar() -> Element {
    let session = use_context::<CatalogueContext>().session;
    let rows = use_memo(move || session.read().category_rows());
    let dataset_name = use_memo(move || session.read().active_dataset_key().display_name());

    rsx! {
        div {
            style: "padding: 12px 0;",
            div {
                style: "
                    font-size: 13px;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #6B7280;
                    padding: 0 12px 8px 12px;
                ",
                "Categories - {dataset_name}"
            }
            if rows.read().is_empty() {
                div { style: "padding: 0 12px; color: #9CA3AF; font-size: 14px;", "No categories" }
            }
            ul {
                for row in rows.read().iter().cloned() {
                    li {
                        key: "{row.path}",
                        CategoryRowItem { row }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryRowItem(row: ReadSignal<CategoryRow>) -> Element {
    let mut session = use_context::<CatalogueContext>().session;
    let indent = use_memo(move || row.read().depth * 16 + 12);
    let cursor = use_memo(move || if row.read().has_children { "pointer" } else { "default" });

    rsx! {
        div {
            class: "catalogue-hover-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
                padding: 6px 12px 6px {indent}px;
                font-size: 14px;
                color: #1F2937;
                cursor: {cursor};
            ",
            onclick: move |_| {
                let path = row.read().path.clone();
                session.write().toggle_category(&path);
            },
            if row.read().has_children {
                if row.read().is_open {
                    Icon { icon: MdExpandMore, style: "width: 18px; height: 18px; flex-shrink: 0;" }
                } else {
                    Icon { icon: MdChevronRight, style: "width: 18px; height: 18px; flex-shrink: 0;" }
                }
            } else {
                div { style: "width: 18px; flex-shrink: 0;" }
            }
            span {
                style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{row.read().label}"
            }
        }
    }
}
