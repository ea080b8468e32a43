use common::pagination::PageStripEntry;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::data_definitions::catalogue_context::CatalogueContext;

/// Previous/next buttons around a strip of page numbers. Hidden when there is
/// nothing to page through.
#[component]
pub fn PaginationStrip() -> Element {
    let mut session = use_context::<CatalogueContext>().session;
    let pagination = use_memo(move || session.read().pagination());
    let strip = use_memo(move || pagination().page_strip());

    if !pagination().is_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-catalogue-pagination",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 8px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous",
                disabled: !pagination().can_go_previous(),
                onclick: move |_| {
                    session.write().previous_page();
                }
            }
            for (index, entry) in strip().into_iter().enumerate() {
                if let PageStripEntry::Page { number, is_current } = entry {
                    PageButton { key: "page-{number}", number, is_current }
                } else {
                    span { key: "gap-{index}", style: "padding: 0 4px; color: #6B7280;", "..." }
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next",
                disabled: !pagination().can_go_next(),
                onclick: move |_| {
                    session.write().next_page();
                }
            }
            span {
                style: "margin-left: 12px; font-size: 14px; color: #6B7280;",
                "Page {pagination().current_page()} of {pagination().total_pages()}"
            }
        }
    }
}

#[component]
fn PageButton(number: u64, is_current: bool) -> Element {
    let mut session = use_context::<CatalogueContext>().session;
    let background = if is_current { "#2563EB" } else { "white" };
    let color = if is_current { "white" } else { "#111827" };
    rsx! {
        button {
            style: "
                min-width: 32px;
                height: 32px;
                padding: 0 8px;
                border-radius: 8px;
                border: 1px solid #D1D5DB;
                background: {background};
                color: {color};
                font-size: 14px;
                cursor: pointer;
            ",
            onclick: move |_| {
                session.write().go_to_page(number);
            },
            "{number}"
        }
    }
}

#[component]
pub fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                border: none;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
