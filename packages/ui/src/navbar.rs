use dioxus::prelude::*;

use crate::use_session;

const VIEWS_CSS: Asset = asset!("/src/views.css");

/// Top bar. Links to the profile when signed in, to the sign-in page otherwise.
#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_session();

    let account = match session().current_user {
        Some(user) => {
            let avatar = user.display_avatar().unwrap_or_default().to_string();
            rsx! {
                Link {
                    to: "/profile",
                    class: "navbar-profile",
                    img { class: "avatar avatar-small", src: "{avatar}", alt: "profile" }
                }
            }
        }
        None => rsx! {
            Link { to: "/sign-in", class: "view-link", "Sign in" }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "navbar",
            Link { to: "/", class: "navbar-brand", "Estate" }
            {children}
            {account}
        }
    }
}
