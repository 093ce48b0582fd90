//! Sign-up page. Its loading and error state stay local to the page.

use dioxus::prelude::*;
use store::SignUpForm;

use crate::controllers::{sign_up, FormOutcome, SignUpState, StateHandle};
use crate::platform::alert;
use crate::use_services;

const VIEWS_CSS: Asset = asset!("/src/views.css");

/// Field name and input type, in display order.
const FIELDS: [(&str, &str); 3] = [("username", "text"), ("email", "email"), ("password", "password")];

#[component]
pub fn SignUp() -> Element {
    let services = use_services();
    let mut form = use_signal(SignUpForm::default);
    let mut local = use_signal(SignUpState::default);
    let nav = use_navigator();

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let backend = services().backend;
        match sign_up(&backend, &mut local, &form()).await {
            FormOutcome::Invalid(message) => alert(&message),
            FormOutcome::Failed(_) => {}
            FormOutcome::Done { alert: text, redirect } => {
                alert(text);
                nav.push(redirect);
            }
        }
    };

    let SignUpState { loading, error } = local();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page auth-page",
            h1 { class: "view-title", "Sign Up" }
            form {
                class: "auth-form",
                onsubmit: on_submit,
                for (field, kind) in FIELDS {
                    input {
                        key: "{field}",
                        id: field,
                        r#type: kind,
                        placeholder: field,
                        oninput: move |evt: FormEvent| form.apply(|f| f.with_field(field, evt.value())),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Loading..." } else { "Sign Up" }
                }
            }
            div {
                class: "auth-switch",
                p { "Have an account?" }
                Link { to: "/sign-in", class: "view-link", "Sign in" }
            }
            if let Some(message) = error {
                p { class: "notice notice-error", "{message}" }
            }
        }
    }
}
