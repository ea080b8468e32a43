//! The current page of filtered items, or an empty-state panel.

use common::catalogue_item::{CatalogueItem, ItemId};
use common::query_engine::EmptyResults;
use common::selection::SelectionRole;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::{
    go_icons::GoPin,
    md_action_icons::{MdBookmark, MdBookmarkBorder, MdShoppingCart},
    md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank},
}};

use crate::data_definitions::catalogue_context::CatalogueContext;

#[component]
pub fn ItemTable() -> Element {
    let session = use_context::<CatalogueContext>().session;
    let items = use_memo(move || session.read().visible_items());
    let empty_results = use_memo(move || session.read().empty_results());

    rsx! {
        div {
            id: "x-catalogue-item-table",
            style: "
                display: flex;
                flex-direction: column;
                border-radius: 10px;
                background: white;
                border: 1px solid #E5E7EB;
                overflow: hidden;
            ",
            ResultsHeader {}
            if let Some(empty) = empty_results() {
                EmptyState { empty }
            } else {
                ul {
                    for item in items.read().iter().cloned() {
                        li {
                            key: "{item.id}",
                            ItemRow { item }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultsHeader() -> Element {
    let session = use_context::<CatalogueContext>().session;
    let count = use_memo(move || session.read().filtered_count());
    let is_filtered = use_memo(move || session.read().is_filtered());
    let bookmarks_only = use_memo(move || session.read().filters().bookmarks_only);
    let heading = use_memo(move || {
        if bookmarks_only() {
            "Bookmarked Items"
        } else {
            session.read().active_dataset_key().display_name()
        }
    });
    let noun = use_memo(move || if count() == 1 { "result" } else { "results" });

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: baseline;
                gap: 12px;
                padding: 12px 16px;
                border-bottom: 1px solid #E5E7EB;
            ",
            h2 { style: "margin: 0; font-size: 18px; font-weight: 600; color: #111827;", "{heading}" }
            span {
                style: "font-size: 14px; color: #6B7280;",
                "{count} {noun}"
                if is_filtered() {
                    " (filtered)"
                }
            }
        }
    }
}

#[component]
fn ItemRow(item: ReadSignal<CatalogueItem>) -> Element {
    let mut session = use_context::<CatalogueContext>().session;
    let item_id = use_memo(move || item.read().id.clone());
    let is_selected = use_memo(move || session.read().is_member(SelectionRole::Selected, &item_id.read()));
    let background = use_memo(move || if is_selected() { "#EFF6FF" } else { "white" });
    let category_label = use_memo(move || item.read().category_label());

    rsx! {
        div {
            class: "catalogue-hover-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 10px 16px;
                border-bottom: 1px solid #F3F4F6;
                background: {background};
                cursor: pointer;
            ",
            onclick: move |_| {
                let id = item_id();
                session.write().toggle_selected(&id);
            },

            if is_selected() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #2563EB; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #6B7280; flex-shrink: 0;" }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 2px; flex-grow: 1; min-width: 0;",
                div {
                    style: "font-size: 15px; font-weight: 500; color: #111827; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{item.read().title}"
                }
                if let Some(label) = category_label() {
                    div { style: "font-size: 13px; color: #6B7280;", "{label}" }
                }
            }

            if let Some(frequency) = item.read().frequency.clone() {
                ItemTag { text: frequency }
            }
            if let Some(unit) = item.read().unit.clone() {
                ItemTag { text: unit }
            }

            SelectionActionButton { role: SelectionRole::Bookmarked, item_id: item_id(), on_icon: MdBookmark, off_icon: MdBookmarkBorder, label: "Bookmark" }
            SelectionActionButton { role: SelectionRole::Cart, item_id: item_id(), on_icon: MdShoppingCart, off_icon: MdShoppingCart, label: "Add to cart" }
            SelectionActionButton { role: SelectionRole::Pinned, item_id: item_id(), on_icon: GoPin, off_icon: GoPin, label: "Pin" }
        }
    }
}

#[component]
fn ItemTag(text: String) -> Element {
    rsx! {
        span {
            style: "
                flex-shrink: 0;
                padding: 2px 8px;
                border-radius: 9999px;
                background: #F3F4F6;
                color: #374151;
                font-size: 12px;
            ",
            "{text}"
        }
    }
}

#[component]
fn SelectionActionButton<I: IconShape + Clone + PartialEq + 'static, J: IconShape + Clone + PartialEq + 'static>(
    role: SelectionRole,
    item_id: ItemId,
    on_icon: I,
    off_icon: J,
    label: String,
) -> Element {
    let mut session = use_context::<CatalogueContext>().session;
    let is_member = session.read().is_member(role, &item_id);
    let color = if is_member { "#2563EB" } else { "#9CA3AF" };
    rsx! {
        button {
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                flex-shrink: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                border: none;
                border-radius: 8px;
                background: transparent;
                color: {color};
                cursor: pointer;
            ",
            onclick: move |event: Event<MouseData>| {
                // the row itself toggles selection
                event.stop_propagation();
                session.write().toggle(role, &item_id);
            },
            if is_member {
                Icon { icon: on_icon, style: "width: 20px; height: 20px;" }
            } else {
                Icon { icon: off_icon, style: "width: 20px; height: 20px;" }
            }
        }
    }
}

#[component]
fn EmptyState(empty: EmptyResults) -> Element {
    let mut session = use_context::<CatalogueContext>().session;
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 48px 16px;
                color: #6B7280;
            ",
            div { style: "font-size: 18px; font-weight: 600; color: #374151;", "{empty.headline()}" }
            div { style: "font-size: 14px;", "{empty.hint()}" }
            if empty.offers_clear_filters() {
                button {
                    style: "
                        margin-top: 8px;
                        height: 34px;
                        padding: 0 12px;
                        font-size: 14px;
                        border-radius: 8px;
                        background: white;
                        color: #2563EB;
                        border: 1px solid #2563EB;
                        cursor: pointer;
                    ",
                    onclick: move |_| session.write().clear_filters(),
                    "Clear Filters"
                }
            }
        }
    }
}
