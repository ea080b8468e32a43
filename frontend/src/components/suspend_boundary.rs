use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Shows a loading indicator while a child waits on a server call, and an
/// error panel if it fails.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                color: #4B5563;
                font-size: 18px;
                padding: 16px 24px;
                margin: 15px;
            ",
            div {
                style: "
                    width: 18px;
                    height: 18px;
                    border-radius: 50%;
                    border: 3px solid #BFDBFE;
                    border-top-color: #2563EB;
                ",
            }
            "{message}"
        }
    }
}
