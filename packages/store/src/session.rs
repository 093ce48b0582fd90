//! # Session state and its reducer
//!
//! The session is the one piece of state the screens share. It is never edited in
//! place: every change is a [`SessionAction`] fed to [`reduce`], which returns the
//! next snapshot. The action set follows the request lifecycle of each account
//! operation (`*Start` while the call is in flight, then `*Success` or
//! `*Failure`).
//!
//! | Action family | Success effect on `current_user` |
//! |---------------|----------------------------------|
//! | `SignIn*` | replaced with the returned record |
//! | `Update*` | replaced with the returned record |
//! | `Delete*` | cleared |
//! | `SignOut*` | cleared |
//!
//! Every `*Start` raises `loading`; every terminal action lowers it. Failures keep
//! the current record and store the error as a [`Notice`], which decides on its
//! own how long it stays visible.

use crate::clock::EpochMillis;
use crate::models::UserInfo;
use crate::notice::Notice;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub current_user: Option<UserInfo>,
    pub loading: bool,
    pub error: Option<Notice>,
}

impl SessionState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            current_user: Some(user),
            ..Self::default()
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// The error message to show at `now`, if any.
    pub fn visible_error(&self, now: EpochMillis) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|notice| notice.is_visible(now))
            .map(|notice| notice.message.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    SignInStart,
    SignInSuccess(UserInfo),
    SignInFailure(Notice),
    UpdateStart,
    UpdateSuccess(UserInfo),
    UpdateFailure(Notice),
    DeleteStart,
    DeleteSuccess,
    DeleteFailure(Notice),
    SignOutStart,
    SignOutSuccess,
    SignOutFailure(Notice),
}

/// Compute the next session snapshot.
pub fn reduce(state: &SessionState, action: SessionAction) -> SessionState {
    use SessionAction::*;

    match action {
        SignInStart | UpdateStart | DeleteStart | SignOutStart => SessionState {
            loading: true,
            ..state.clone()
        },
        SignInSuccess(user) | UpdateSuccess(user) => SessionState {
            current_user: Some(user),
            loading: false,
            error: None,
        },
        DeleteSuccess | SignOutSuccess => SessionState {
            current_user: None,
            loading: false,
            error: None,
        },
        SignInFailure(notice) | UpdateFailure(notice) | DeleteFailure(notice)
        | SignOutFailure(notice) => SessionState {
            current_user: state.current_user.clone(),
            loading: false,
            error: Some(notice),
        },
    }
}
