//! Sign-in and sign-up submissions.
//!
//! Both forms refuse to send anything while a field is empty. Sign-in reports
//! through the shared session; sign-up keeps its own `loading`/`error` pair because
//! a new account does not sign anybody in.

use api::Backend;
use store::{Clock, Notice, SessionAction, SessionState, SignInForm, SignUpForm};

use super::state::{dispatch, StateHandle};

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/sign-in";

/// What the screen should do once a submission settles.
#[derive(Clone, Debug, PartialEq)]
pub enum FormOutcome {
    /// Validation failed and nothing was sent; show a blocking alert.
    Invalid(String),
    /// The server refused. The message is already in the screen's state.
    Failed(String),
    /// Alert, then navigate.
    Done {
        alert: &'static str,
        redirect: &'static str,
    },
}

pub async fn sign_in<B, S>(
    backend: &B,
    session: &mut S,
    form: &SignInForm,
    clock: &impl Clock,
) -> FormOutcome
where
    B: Backend,
    S: StateHandle<SessionState>,
{
    if let Err(e) = form.validate() {
        return FormOutcome::Invalid(e.to_string());
    }

    dispatch(session, SessionAction::SignInStart);
    match backend.sign_in(form).await {
        Ok(user) => {
            tracing::info!(user = %user.id, "signed in");
            dispatch(session, SessionAction::SignInSuccess(user));
            FormOutcome::Done {
                alert: "User Logged in Successfully",
                redirect: HOME_PATH,
            }
        }
        Err(e) => {
            let message = e.message();
            tracing::warn!("sign in failed: {e}");
            let notice = Notice::sticky_error(message.clone(), clock.now());
            dispatch(session, SessionAction::SignInFailure(notice));
            FormOutcome::Failed(message)
        }
    }
}

/// Screen-local state of the sign-up form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpState {
    pub loading: bool,
    pub error: Option<String>,
}

pub async fn sign_up<B, L>(backend: &B, local: &mut L, form: &SignUpForm) -> FormOutcome
where
    B: Backend,
    L: StateHandle<SignUpState>,
{
    if let Err(e) = form.validate() {
        return FormOutcome::Invalid(e.to_string());
    }

    local.apply(|s| SignUpState {
        loading: true,
        error: s.error.clone(),
    });
    match backend.sign_up(form).await {
        Ok(payload) => {
            tracing::info!(%payload, "account created");
            local.apply(|_| SignUpState::default());
            FormOutcome::Done {
                alert: "User Created Successfully",
                redirect: SIGN_IN_PATH,
            }
        }
        Err(e) => {
            let message = e.message();
            tracing::warn!("sign up failed: {e}");
            local.apply(|_| SignUpState {
                loading: false,
                error: Some(message.clone()),
            });
            FormOutcome::Failed(message)
        }
    }
}
