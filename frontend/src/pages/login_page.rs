use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdLock;
use dioxus_free_icons::Icon;

use crate::routes::Route;

/// Where unauthenticated sessions land. Sign-in itself belongs to the
/// identity provider; this page only explains why the catalogue is closed.
#[component]
pub fn LoginPage() -> Element {
    rsx! {
        Title { "Economic Monitor - Sign in" }
        div {
            id: "x-login-container",
            style: "
                display:flex;
                align-items: center;
                justify-content: center;
                width: 100%;
                height: 100%;
                background: #F5F6F8;
            ",
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 16px;
                    width: 420px;
                    padding: 32px;
                    border-radius: 16px;
                    background: white;
                    border: 1px solid #E5E7EB;
                    box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                ",
                Icon { icon: MdLock, style: "width: 40px; height: 40px; color: #1E3A8A;" }
                div { style: "font-size: 24px; font-weight: 600; color: #111827;", "Sign in required" }
                div {
                    style: "font-size: 16px; color: #4B5563; text-align: center; line-height: 1.5;",
                    "Your session is not signed in. Sign in with your organisation account to browse the data catalogue."
                }
                Link {
                    to: Route::HomePage {},
                    span { style: "color: #2563EB; font-size: 16px;", "Back to Home" }
                }
            }
        }
    }
}
