use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::go_icons::GoDatabase;
use dioxus_free_icons::Icon;

use common::dataset::DatasetKey;
use common::filter_state::FilterState;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Economic Monitor - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                TextSearchCard {}
                BrowseCatalogueCard {}
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Economic" }
            span { style: "color:#2563EB;", "Monitor" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 24px;
                line-height: 1.6;
                max-width: 720px;
                font-weight: 500;
            ",
            "Find economic time series across national, state and international sources, then bookmark, compare and chart them."
        }
    }
}

#[component]
fn TextSearchCard() -> Element {

    rsx! {
        div {
            id: "x-card-text-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #1E3A8A 0%, #2563EB 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    font-size: 30px;
                    font-weight: 500;
                ",
                "Search the Catalogue"
            }

            div {
                style: "
                    font-size: 18px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Match series by title, category, frequency or unit."
            }

            div { style: "height: 8px; padding-top: 7px; margin-top:7px; border-top: 1px solid white; width: 100%; " }

            div {
                style: "
                    font-size: 16px;
                    color: rgba(255,255,255,0.9);
                    width: 100%;
                ",
                "*Type search terms in the text box below and hit Enter to start."
            }
            SearchCardInput {}
        }
    }
}

#[component]
fn SearchCardInput() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "e.g. GDP, CPI, exports",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        let filters = FilterState::with_global_query(search_q.read().clone());
                        n2.push(Route::catalogue_page_from_filters(filters));
                    }
                },
            }
        }
    }
}

#[component]
fn BrowseCatalogueCard() -> Element {
    rsx! {
        div {
            id: "x-card-browse-catalogue",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: white;
                color: #111827;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",

            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    font-size: 26px;
                    font-weight: 500;
                ",
                Icon { icon: GoDatabase, style: "width: 26px; height: 26px; color: #2563EB;" }
                "Browse by dataset"
            }

            ul {
                style: "display:flex; flex-direction: column; gap: 8px; font-size: 18px; color: #374151;",
                for key in DatasetKey::ALL {
                    li { key: "{key}", "{key.display_name()}" }
                }
            }

            div {
                style: "display:flex; flex-direction:row; margin-top: auto;",
                Link {
                    to: Route::catalogue_page_from_filters(FilterState::default()),
                    span {
                        class: "catalogue-hover-shadow",
                        style: "
                            display: inline-block;
                            padding: 8px 14px;
                            font-size: 14px;
                            border-radius: 8px;
                            background: #2563EB;
                            color: white;
                        ",
                        "Open Catalogue"
                    }
                }
            }
        }
    }
}
