//! Filter and bookmark toggles, selection counters and the graph action.

use common::selection::SelectionRole;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::{
    go_icons::GoPin,
    md_action_icons::{MdBookmark, MdBookmarkBorder, MdShoppingCart, MdTimeline},
    md_content_icons::MdFilterList,
}};

use crate::data_definitions::catalogue_context::CatalogueContext;

#[component]
pub fn CatalogueToolbar() -> Element {
    let context = use_context::<CatalogueContext>();
    let mut session = context.session;
    let mut show_filters = context.show_filters;

    let active_filter_count = use_memo(move || session.read().active_filter_count());
    let bookmarks_only = use_memo(move || session.read().filters().bookmarks_only);
    let selected_count = use_memo(move || session.read().selection_count(SelectionRole::Selected));
    let cart_count = use_memo(move || session.read().selection_count(SelectionRole::Cart));
    let pinned_count = use_memo(move || session.read().selection_count(SelectionRole::Pinned));
    let can_view_graph = use_memo(move || session.read().can_view_graph());

    rsx! {
        div {
            id: "x-catalogue-toolbar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                flex-wrap: wrap;
            ",

            ToolbarButton {
                icon: MdFilterList,
                label: "Filters",
                active: show_filters(),
                onclick: move |_| {
                    let open = show_filters();
                    show_filters.set(!open);
                },
                if active_filter_count() > 0 {
                    CountBadge { count: active_filter_count() }
                }
            }

            if bookmarks_only() {
                ToolbarButton {
                    icon: MdBookmark,
                    label: "Bookmarked",
                    active: true,
                    onclick: move |_| session.write().toggle_bookmarks_only(),
                }
            } else {
                ToolbarButton {
                    icon: MdBookmarkBorder,
                    label: "Bookmarked",
                    active: false,
                    onclick: move |_| session.write().toggle_bookmarks_only(),
                }
            }

            div { style: "flex-grow: 1;" }

            if selected_count() > 0 {
                span {
                    style: "font-size: 14px; color: #374151;",
                    "{selected_count} selected"
                }
            }

            span {
                title: "Cart",
                style: "display: flex; align-items: center; gap: 4px; color: #374151;",
                Icon { icon: MdShoppingCart, style: "width: 20px; height: 20px;" }
                CountBadge { count: cart_count() }
            }
            span {
                title: "Pinned",
                style: "display: flex; align-items: center; gap: 4px; color: #374151;",
                Icon { icon: GoPin, style: "width: 18px; height: 18px;" }
                CountBadge { count: pinned_count() }
            }

            ToolbarButton {
                icon: MdTimeline,
                label: "View Graph",
                active: false,
                disabled: !can_view_graph(),
                onclick: move |_| {
                    dioxus::logger::tracing::info!("graph requested for {} series", selected_count());
                },
            }
        }
    }
}

#[component]
fn ToolbarButton<I: IconShape + Clone + PartialEq + 'static>(
    icon: I,
    label: String,
    active: bool,
    #[props(default)] disabled: bool,
    onclick: Callback<()>,
    children: Element,
) -> Element {
    let background = if active { "#DBEAFE" } else { "white" };
    let border = if active { "#2563EB" } else { "#D1D5DB" };
    let color = if disabled { "rgba(0,0,0,0.3)" } else { "#111827" };
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    rsx! {
        button {
            disabled,
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                height: 36px;
                padding: 0 12px;
                font-size: 14px;
                border-radius: 8px;
                background: {background};
                color: {color};
                border: 1px solid {border};
                cursor: {cursor};
            ",
            onclick: move |_| {
                if !disabled {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 20px; height: 20px;" }
            "{label}"
            {children}
        }
    }
}

#[component]
pub fn CountBadge(count: usize) -> Element {
    rsx! {
        span {
            style: "
                min-width: 20px;
                height: 20px;
                padding: 0 6px;
                border-radius: 9999px;
                background: #2563EB;
                color: white;
                font-size: 12px;
                line-height: 20px;
                text-align: center;
            ",
            "{count}"
        }
    }
}
