//! # Profile screen controller
//!
//! Account operations available from the profile page. Each function performs one
//! user action end to end: dispatch the lifecycle actions to the session, call the
//! backend, and write the outcome into the screen's local state.
//!
//! | Function | Endpoint | Writes |
//! |----------|----------|--------|
//! | [`upload_avatar`] | storage bucket | upload progress, draft avatar |
//! | [`update_profile`] | `POST /api/user/update/{id}` | session, draft, success notice |
//! | [`delete_account`] | `DELETE /api/user/delete/{id}` | session |
//! | [`sign_out`] | `GET /api/auth/signout` | session |
//! | [`show_listings`] | `GET /api/user/listings/{id}` | listings panel |
//! | [`delete_listing`] | `DELETE /api/listing/delete/{id}` | listings panel |
//!
//! Failures are logged and turned into state; nothing is returned as an error.

use api::{Backend, UploadFile, Uploader};
use serde_json::Value;
use store::{
    Clock, ListingsPanel, Notice, NoticeConfig, ProfileDraft, SessionAction, SessionState,
    UploadProgress,
};

use super::state::{dispatch, StateHandle};

pub const UPDATE_SUCCESS: &str = "User is updated successfully";

/// Upload a newly chosen avatar and put its URL into the draft.
pub async fn upload_avatar<U, P, D>(
    uploader: &U,
    file: UploadFile,
    clock: &impl Clock,
    progress: &mut P,
    draft: &mut D,
) where
    U: Uploader,
    P: StateHandle<UploadProgress>,
    D: StateHandle<ProfileDraft>,
{
    progress.apply(|_| UploadProgress::started());
    let name = file.name.clone();

    let result = uploader
        .upload(file, clock.now(), &mut |sent, total| {
            progress.apply(|p| p.with_progress(sent, total))
        })
        .await;

    match result {
        Ok(url) => {
            tracing::debug!(%name, %url, "avatar uploaded");
            draft.apply(|d| d.with_avatar(url));
            progress.apply(UploadProgress::completed);
        }
        Err(e) => {
            tracing::warn!(%name, "avatar upload failed: {e}");
            progress.apply(UploadProgress::failed);
        }
    }
}

/// Submit the draft. Returns the success notice to show, if the update went through.
pub async fn update_profile<B, S, D>(
    backend: &B,
    session: &mut S,
    draft: &mut D,
    notices: &NoticeConfig,
    clock: &impl Clock,
) -> Option<Notice>
where
    B: Backend,
    S: StateHandle<SessionState>,
    D: StateHandle<ProfileDraft>,
{
    let Some(user) = session.snapshot().current_user else {
        tracing::error!("profile update attempted while signed out");
        return None;
    };

    dispatch(session, SessionAction::UpdateStart);
    let update = draft.snapshot().merged_over(&user);

    match backend.update_user(&user.id, &update).await {
        Ok(updated) => {
            dispatch(session, SessionAction::UpdateSuccess(updated));
            draft.apply(|_| ProfileDraft::default());
            Some(Notice::success(
                UPDATE_SUCCESS,
                clock.now(),
                notices.success_ttl(),
            ))
        }
        Err(e) => {
            tracing::warn!(user = %user.id, "profile update failed: {e}");
            let notice = Notice::error(e.message(), clock.now(), notices.error_ttl());
            dispatch(session, SessionAction::UpdateFailure(notice));
            None
        }
    }
}

/// Delete the account. On success returns the server's payload as text for the alert.
pub async fn delete_account<B, S>(backend: &B, session: &mut S, clock: &impl Clock) -> Option<String>
where
    B: Backend,
    S: StateHandle<SessionState>,
{
    let Some(user) = session.snapshot().current_user else {
        tracing::error!("account deletion attempted while signed out");
        return None;
    };

    dispatch(session, SessionAction::DeleteStart);
    match backend.delete_user(&user.id).await {
        Ok(payload) => {
            dispatch(session, SessionAction::DeleteSuccess);
            Some(payload_text(&payload))
        }
        Err(e) => {
            tracing::warn!(user = %user.id, "account deletion failed: {e}");
            let notice = Notice::sticky_error(e.message(), clock.now());
            dispatch(session, SessionAction::DeleteFailure(notice));
            None
        }
    }
}

pub async fn sign_out<B, S>(backend: &B, session: &mut S, clock: &impl Clock)
where
    B: Backend,
    S: StateHandle<SessionState>,
{
    dispatch(session, SessionAction::SignOutStart);
    match backend.sign_out().await {
        Ok(_) => dispatch(session, SessionAction::SignOutSuccess),
        Err(e) => {
            tracing::warn!("sign out failed: {e}");
            let notice = Notice::sticky_error(e.message(), clock.now());
            dispatch(session, SessionAction::SignOutFailure(notice));
        }
    }
}

/// Fetch the signed-in user's listings into the panel.
pub async fn show_listings<B, S, L>(backend: &B, session: &S, listings: &mut L)
where
    B: Backend,
    S: StateHandle<SessionState>,
    L: StateHandle<ListingsPanel>,
{
    let Some(user) = session.snapshot().current_user else {
        listings.apply(ListingsPanel::failed);
        return;
    };

    match backend.user_listings(&user.id).await {
        Ok(items) => {
            tracing::debug!(count = items.len(), "listings loaded");
            listings.apply(|_| ListingsPanel::loaded(items));
        }
        Err(e) => {
            tracing::warn!(user = %user.id, "fetching listings failed: {e}");
            listings.apply(ListingsPanel::failed);
        }
    }
}

/// Delete one listing. The panel only changes once the server confirms.
pub async fn delete_listing<B, L>(backend: &B, listing_id: &str, listings: &mut L) -> bool
where
    B: Backend,
    L: StateHandle<ListingsPanel>,
{
    match backend.delete_listing(listing_id).await {
        Ok(_) => {
            listings.apply(|panel| panel.without(listing_id));
            true
        }
        Err(e) => {
            tracing::warn!(listing = %listing_id, "deleting listing failed: {e}");
            false
        }
    }
}

fn payload_text(payload: &Value) -> String {
    match payload {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use api::ApiError;
    use store::{ManualClock, UploadStatus};

    use super::*;
    use crate::controllers::state::MemoryState;
    use crate::controllers::testing::{ann, listing, FakeBackend, FakeUploader};

    fn signed_in() -> MemoryState<SessionState> {
        MemoryState::new(SessionState::signed_in(ann()))
    }

    fn avatar_file() -> UploadFile {
        UploadFile {
            name: "me.png".to_string(),
            bytes: vec![1, 2, 3],
            content_type: Some("image/png".to_string()),
        }
    }

    #[tokio::test]
    async fn test_update_success_notice_expires_after_three_seconds() {
        let backend = FakeBackend::default();
        let clock = ManualClock::starting_at(50_000);
        let mut session = signed_in();
        let mut draft = MemoryState::new(ProfileDraft::default().with_field("username", "anne"));

        let notice = update_profile(
            &backend,
            &mut session,
            &mut draft,
            &NoticeConfig::default(),
            &clock,
        )
        .await
        .expect("success notice");

        assert_eq!(notice.message, UPDATE_SUCCESS);
        assert!(notice.is_visible(clock.now()));
        clock.advance(Duration::from_millis(2_999));
        assert!(notice.is_visible(clock.now()));
        clock.advance(Duration::from_millis(1));
        assert!(!notice.is_visible(clock.now()));

        assert_eq!(session.get().current_user.as_ref().unwrap().username, "anne");
        assert_eq!(*draft.get(), ProfileDraft::default());
        assert_eq!(backend.calls(), vec!["update_user u1"]);
    }

    #[tokio::test]
    async fn test_update_goes_through_loading() {
        let backend = FakeBackend::default();
        let mut session = signed_in();
        let mut draft = MemoryState::new(ProfileDraft::default());
        update_profile(&backend, &mut session, &mut draft, &NoticeConfig::default(), &ManualClock::default()).await;

        let loading: Vec<bool> = session.history().iter().map(|s| s.loading).collect();
        assert_eq!(loading, vec![false, true, false]);
    }

    #[tokio::test]
    async fn test_update_failure_shows_server_message_for_five_seconds() {
        let backend = FakeBackend::rejecting("You can only update your own account!");
        let clock = ManualClock::starting_at(1_000);
        let mut session = signed_in();
        let mut draft = MemoryState::new(ProfileDraft::default().with_field("email", "x@y.z"));

        let notice =
            update_profile(&backend, &mut session, &mut draft, &NoticeConfig::default(), &clock).await;
        assert!(notice.is_none());

        let state = session.get();
        assert!(!state.loading);
        assert_eq!(
            state.visible_error(clock.now()),
            Some("You can only update your own account!")
        );
        clock.advance(Duration::from_millis(4_999));
        assert!(state.visible_error(clock.now()).is_some());
        clock.advance(Duration::from_millis(1));
        assert_eq!(state.visible_error(clock.now()), None);

        // Edits survive a failed submit.
        assert_eq!(draft.get().email.as_deref(), Some("x@y.z"));
        assert_eq!(state.current_user, Some(ann()));
    }

    #[tokio::test]
    async fn test_update_sends_draft_merged_over_record() {
        let backend = FakeBackend::default();
        let mut session = signed_in();
        let mut draft = MemoryState::new(
            ProfileDraft::default()
                .with_field("password", "n3w")
                .with_avatar("https://img/new.png"),
        );
        update_profile(&backend, &mut session, &mut draft, &NoticeConfig::default(), &ManualClock::default()).await;

        let sent = backend.last_update.borrow().clone().unwrap();
        assert_eq!(sent.username, "ann");
        assert_eq!(sent.email, "ann@example.com");
        assert_eq!(sent.avatar.as_deref(), Some("https://img/new.png"));
        assert_eq!(sent.password.as_deref(), Some("n3w"));
    }

    #[tokio::test]
    async fn test_update_clears_typed_password_for_the_next_submit() {
        let backend = FakeBackend::default();
        let mut session = signed_in();
        let mut draft = MemoryState::new(ProfileDraft::default().with_field("password", "n3w"));
        let notices = NoticeConfig::default();
        let clock = ManualClock::default();

        update_profile(&backend, &mut session, &mut draft, &notices, &clock).await;
        // the password input renders this value
        assert_eq!(draft.get().password.clone().unwrap_or_default(), "");

        update_profile(&backend, &mut session, &mut draft, &notices, &clock).await;
        let sent = backend.last_update.borrow().clone().unwrap();
        assert_eq!(sent.password, None);
    }

    #[tokio::test]
    async fn test_update_while_signed_out_sends_nothing() {
        let backend = FakeBackend::default();
        let mut session = MemoryState::new(SessionState::default());
        let mut draft = MemoryState::new(ProfileDraft::default());
        let notice =
            update_profile(&backend, &mut session, &mut draft, &NoticeConfig::default(), &ManualClock::default()).await;
        assert!(notice.is_none());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upload_progress_is_rounded_and_monotonic() {
        let uploader = FakeUploader {
            events: vec![(0, 300), (1, 300), (100, 300), (90, 300), (299, 300), (300, 300)],
            outcome: Ok("https://cdn/me.png".to_string()),
            keys: Default::default(),
        };
        let clock = ManualClock::starting_at(1_700_000_000_000);
        let mut progress = MemoryState::new(UploadProgress::default());
        let mut draft = MemoryState::new(ProfileDraft::default());

        upload_avatar(&uploader, avatar_file(), &clock, &mut progress, &mut draft).await;

        let percents: Vec<u8> = progress.history().iter().map(|p| p.percent).collect();
        assert_eq!(percents, vec![0, 0, 0, 0, 33, 33, 100, 100, 100]);
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(progress.get().status(), UploadStatus::Uploaded);
        assert_eq!(draft.get().avatar.as_deref(), Some("https://cdn/me.png"));
        assert_eq!(*uploader.keys.borrow(), vec!["1700000000000me.png".to_string()]);
    }

    #[tokio::test]
    async fn test_upload_failure_keeps_avatar() {
        let uploader = FakeUploader {
            events: vec![(10, 100)],
            outcome: Err(ApiError::TooLarge {
                size: 3_000_000,
                limit: 2_097_152,
            }),
            keys: Default::default(),
        };
        let mut progress = MemoryState::new(UploadProgress::default().failed());
        let mut draft = MemoryState::new(ProfileDraft::default().with_avatar("https://img/old.png"));

        upload_avatar(&uploader, avatar_file(), &ManualClock::default(), &mut progress, &mut draft).await;

        assert_eq!(progress.history()[1], UploadProgress::started());
        assert_eq!(progress.get().status(), UploadStatus::Failed);
        assert_eq!(draft.get().avatar.as_deref(), Some("https://img/old.png"));
    }

    #[tokio::test]
    async fn test_delete_account_clears_session_and_returns_payload() {
        let backend = FakeBackend::default();
        let mut session = signed_in();
        let text = delete_account(&backend, &mut session, &ManualClock::default())
            .await
            .unwrap();
        let shown: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(shown["message"], "User has been deleted!");
        assert_eq!(shown["success"], true);
        assert!(!session.get().is_signed_in());
        assert_eq!(backend.calls(), vec!["delete_user u1"]);
    }

    #[tokio::test]
    async fn test_delete_account_failure_keeps_session() {
        let backend = FakeBackend::rejecting("Unauthorized");
        let mut session = signed_in();
        assert!(delete_account(&backend, &mut session, &ManualClock::default()).await.is_none());
        assert!(session.get().is_signed_in());
        assert_eq!(session.get().visible_error(0), Some("Unauthorized"));
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let backend = FakeBackend::default();
        let mut session = signed_in();
        sign_out(&backend, &mut session, &ManualClock::default()).await;
        assert_eq!(*session.get(), SessionState::default());
    }

    #[tokio::test]
    async fn test_show_listings_success_and_failure() {
        let backend = FakeBackend::with_listings(vec![listing("a"), listing("b")]);
        let session = signed_in();
        let mut panel = MemoryState::new(ListingsPanel::default());
        show_listings(&backend, &session, &mut panel).await;
        assert_eq!(panel.get().items.len(), 2);
        assert!(!panel.get().error);

        let failing = FakeBackend::rejecting("boom");
        show_listings(&failing, &session, &mut panel).await;
        assert!(panel.get().error);
        assert_eq!(panel.get().items.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_listing_removes_exactly_that_entry() {
        let backend = FakeBackend::default();
        let mut panel = MemoryState::new(ListingsPanel::loaded(vec![
            listing("a"),
            listing("b"),
            listing("c"),
            listing("d"),
        ]));

        assert!(delete_listing(&backend, "c", &mut panel).await);
        let ids: Vec<_> = panel.get().items.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids, vec!["a", "b", "d"]);
        assert_eq!(backend.calls(), vec!["delete_listing c"]);
    }

    #[tokio::test]
    async fn test_delete_listing_failure_keeps_list() {
        let backend = FakeBackend::rejecting("Listing not found!");
        let mut panel = MemoryState::new(ListingsPanel::loaded(vec![listing("a")]));
        assert!(!delete_listing(&backend, "a", &mut panel).await);
        assert_eq!(panel.get().items.len(), 1);
    }
}
