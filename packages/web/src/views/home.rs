use dioxus::prelude::*;
use ui::use_session;

#[component]
pub fn Home() -> Element {
    let session = use_session();

    let greeting = match session().current_user {
        Some(user) => format!("Welcome back, {}.", user.username),
        None => "Find your next place.".to_string(),
    };

    rsx! {
        div {
            class: "home",
            h1 { class: "home-title", "Estate" }
            p { class: "home-greeting", "{greeting}" }
        }
    }
}
