//! Sign-in page.

use dioxus::prelude::*;
use store::{SignInForm, SystemClock};

use crate::controllers::{sign_in, FormOutcome, StateHandle};
use crate::platform::alert;
use crate::{use_services, use_session, NoticeBanner};

const VIEWS_CSS: Asset = asset!("/src/views.css");

#[component]
pub fn SignIn() -> Element {
    let mut session = use_session();
    let services = use_services();
    let mut form = use_signal(SignInForm::default);
    let nav = use_navigator();

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let backend = services().backend;
        let outcome = sign_in(&backend, &mut session, &form(), &SystemClock).await;
        match outcome {
            FormOutcome::Invalid(message) => alert(&message),
            FormOutcome::Failed(_) => {}
            FormOutcome::Done { alert: text, redirect } => {
                alert(text);
                nav.push(redirect);
            }
        }
    };

    let state = session();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page auth-page",
            h1 { class: "view-title", "Sign In" }
            form {
                class: "auth-form",
                onsubmit: on_submit,
                input {
                    id: "email",
                    r#type: "email",
                    placeholder: "email",
                    oninput: move |evt: FormEvent| form.apply(|f| f.with_field("email", evt.value())),
                }
                input {
                    id: "password",
                    r#type: "password",
                    placeholder: "password",
                    oninput: move |evt: FormEvent| form.apply(|f| f.with_field("password", evt.value())),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: state.loading,
                    if state.loading { "Loading..." } else { "Sign In" }
                }
            }
            div {
                class: "auth-switch",
                p { "Don't have an account?" }
                Link { to: "/sign-up", class: "view-link", "Sign up" }
            }
            NoticeBanner { notice: state.error.clone() }
        }
    }
}
