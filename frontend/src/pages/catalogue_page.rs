use dioxus::prelude::*;

use common::auth::{AuthStatus, CatalogueGate};
use common::catalogue_store::CatalogueStore;
use common::dataset::{Dataset, DatasetKey};
use common::filter_state::FilterState;
use common::session::CatalogueSession;
use crate::{
    api::catalogue_api::{load_catalogues, session_auth_status},
    components::{
        catalogue_components::{
            catalogue_toolbar::CatalogueToolbar, category_sidebar::CategorySidebar, dataset_selector::DatasetSelector,
            filter_panel::FilterPanel, item_table::ItemTable, pagination_strip::PaginationStrip, search_top_bar::CatalogueSearchTopBar,
        },
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
    },
    data_definitions::{catalogue_context::CatalogueContext, filter_sync::FilterUrlSync, url_param::UrlParam},
    routes::Route,
};


fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Catalogue browser. Filters live in the URL so a search can be shared.
#[component]
pub fn CataloguePage(filters: UrlParam<FilterState>) -> Element {
    let query = filters.0.global_query.trim().to_string();
    rsx! {
        if query.is_empty() {
            Title { "Economic Monitor - Catalogue" }
        } else {
            Title { "Economic Monitor: {title_ellipsis(&query)}" }
        }
        CatalogueAuthGate { filters: filters.0.clone() }
    }
}

#[component]
fn CatalogueAuthGate(filters: ReadSignal<FilterState>) -> Element {
    let auth_status = use_resource(move || session_auth_status());
    let status = use_memo(move || match &*auth_status.read() {
        None => AuthStatus::Pending,
        Some(Ok(status)) => *status,
        Some(Err(e)) => {
            dioxus::logger::tracing::warn!("identity check failed, treating session as signed out: {e}");
            AuthStatus::Unauthenticated
        }
    });

    use_effect(move || {
        if status().gate() == CatalogueGate::Redirect {
            navigator().replace(Route::LoginPage {});
        }
    });

    match status().gate() {
        CatalogueGate::ShowLoading => rsx! {
            div {
                style: "display: flex; align-items: center; justify-content: center; width: 100%; height: 100%;",
                LoadingIndicator { message: "Checking your session..." }
            }
        },
        CatalogueGate::Redirect => rsx! {},
        CatalogueGate::Render => rsx! {
            SuspendWrapper { CatalogueLoader { filters } }
        },
    }
}

#[component]
fn CatalogueLoader(filters: ReadSignal<FilterState>) -> Element {
    let catalogues = use_resource(move || load_catalogues()).suspend()?.cloned();
    let catalogues = match catalogues {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(catalogues) => catalogues,
    };
    rsx! {
        CatalogueWorkspace { catalogues, filters }
    }
}

#[component]
fn CatalogueWorkspace(catalogues: ReadSignal<Vec<(DatasetKey, Dataset)>>, filters: ReadSignal<FilterState>) -> Element {
    let mut session = use_signal(|| {
        let store = CatalogueStore::new(catalogues.peek().clone());
        CatalogueSession::with_filters(store, filters.peek().clone())
    });
    let show_filters = use_signal(|| false);
    use_context_provider(|| CatalogueContext { session, show_filters });

    let mut url_sync = use_signal(|| FilterUrlSync::new(filters.peek().clone()));

    // url -> session, for back/forward navigation
    use_effect(move || {
        let route_filters = filters.read().clone();
        let applied = url_sync.write().route_changed(&route_filters);
        if let Some(route_filters) = applied {
            session.write().replace_filters(route_filters);
        }
    });
    // session -> url
    use_effect(move || {
        let current = session.read().filters().clone();
        let written = url_sync.write().session_changed(&current);
        if let Some(current) = written {
            navigator().replace(Route::catalogue_page_from_filters(current));
        }
    });

    rsx! {
        div {
            id: "x-catalogue-page-root-component",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            ",
            div {
                id: "x-catalogue-top-bar",
                style: "
                    border-bottom: 1px solid #E5E7EB;
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                    height: 76px;
                    width: 100%;
                    padding: 0 16px;
                ",
                CatalogueSearchTopBar {}
                div { style: "flex-grow: 1;" }
                DatasetSelector {}
            }

            div {
                id: "x-catalogue-bottom-space",
                style: "
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                ",
                div {
                    id: "x-catalogue-left-panel",
                    class: "catalogue-thin-scrollbar",
                    style: "
                        height: 100%;
                        width: 280px;
                        flex-shrink: 0;
                        background-color: #F9FAFB;
                        border-right: 1px solid #E5E7EB;
                        overflow-y: auto;
                    ",
                    CategorySidebar {}
                }
                div {
                    id: "x-catalogue-main-panel",
                    class: "catalogue-thin-scrollbar",
                    style: "
                        height: 100%;
                        flex-grow: 1;
                        min-width: 400px;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        padding: 16px;
                        background-color: #ECEEF2;
                        overflow-y: auto;
                    ",
                    CatalogueToolbar {}
                    if show_filters() {
                        FilterPanel {}
                    }
                    ItemTable {}
                    PaginationStrip {}
                }
            }
        }
    }
}
