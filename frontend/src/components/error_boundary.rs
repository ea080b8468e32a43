//! Error boundaries around routed pages and suspended components.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in {} boundary: {:?}", boundary_name.read(), err);
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 12px;
                            padding: 24px;
                            margin: 15px;
                            border: 1px solid #DC2626;
                            border-radius: 8px;
                            background: #FEF2F2;
                        ",
                        h1 { style: "color: #B91C1C; font-size: 32px; margin: 0;", "Something went wrong" }
                        p { style: "color: #7F1D1D; font-size: 18px; margin: 0;", "Boundary: {boundary_name}" }
                        Link {
                            to: Route::HomePage {},
                            span { style: "color: #2563EB; font-size: 18px;", "Return to Home Page" }
                        }
                        pre {
                            style: "color: black; padding: 10px; border: 1px solid #FCA5A5; border-radius: 5px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #2563EB; font-size: 16px; border: 1px solid #2563EB; background: white; padding: 8px 16px; border-radius: 6px; margin: 10px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h2 {
                style: "color: #B91C1C; font-size: 24px; margin: 5px;",
                "Could not load this section",
            }

            pre {
                style: "color: #7F1D1D; border: 1px solid #FCA5A5; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
