//! Profile page: edit the account, upload an avatar and manage listings.

use api::UploadFile;
use dioxus::prelude::*;
use store::{
    ListingSummary, ListingsPanel, Notice, ProfileDraft, SystemClock, UploadProgress, UploadStatus,
};

use crate::controllers::{
    delete_account, delete_listing, show_listings, sign_out, update_profile, upload_avatar,
    StateHandle,
};
use crate::platform::{alert, guess_image_type};
use crate::{use_services, use_session, NoticeBanner, Services};

const VIEWS_CSS: Asset = asset!("/src/views.css");

#[component]
pub fn Profile() -> Element {
    let mut session = use_session();
    let services = use_services();
    let mut draft = use_signal(ProfileDraft::default);
    let mut progress = use_signal(UploadProgress::default);
    let mut success = use_signal(|| Option::<Notice>::None);
    let mut listings = use_signal(ListingsPanel::default);

    let state = session();
    let Some(user) = state.current_user.clone() else {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "view-page",
                p { class: "view-muted", "You are signed out." }
                Link { to: "/sign-in", class: "view-link", "Sign in" }
            }
        };
    };

    let on_pick = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        let Some(bytes) = engine.read_file(&name).await else {
            tracing::warn!(%name, "could not read the chosen file");
            return;
        };
        let file = UploadFile {
            content_type: Some(guess_image_type(&name).to_string()),
            name,
            bytes,
        };
        let uploader = services().uploader;
        upload_avatar(&uploader, file, &SystemClock, &mut progress, &mut draft).await;
    };

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        success.set(None);
        let Services { backend, config, .. } = services();
        let notice = update_profile(
            &backend,
            &mut session,
            &mut draft,
            &config.notices,
            &SystemClock,
        )
        .await;
        success.set(notice);
    };

    let on_delete_account = move |_| async move {
        let backend = services().backend;
        if let Some(text) = delete_account(&backend, &mut session, &SystemClock).await {
            alert(&text);
        }
    };

    let on_sign_out = move |_| async move {
        let backend = services().backend;
        sign_out(&backend, &mut session, &SystemClock).await;
    };

    let on_show_listings = move |_| async move {
        let backend = services().backend;
        show_listings(&backend, &session, &mut listings).await;
    };

    let on_delete_listing = move |id: String| {
        spawn(async move {
            let backend = services().backend;
            delete_listing(&backend, &id, &mut listings).await;
        });
    };

    let edits = draft();
    let username = edits.display_username(&user).to_string();
    let email = edits.display_email(&user).to_string();
    let avatar = edits.display_avatar(&user).unwrap_or_default().to_string();
    let password = edits.password.clone().unwrap_or_default();

    let upload_status = match progress().status() {
        UploadStatus::Idle => rsx! {},
        UploadStatus::Failed => rsx! {
            span { class: "text-error", "Error image upload (image must be less than 2 mb)" }
        },
        UploadStatus::Uploading(percent) => rsx! {
            span { class: "view-muted", "Uploading {percent}%" }
        },
        UploadStatus::Uploaded => rsx! {
            span { class: "text-success", "Image successfully uploaded!" }
        },
    };

    let panel = listings();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page profile",
            h1 { class: "view-title", "Profile" }

            form {
                class: "profile-form",
                onsubmit: on_submit,

                label {
                    class: "avatar-picker",
                    input {
                        r#type: "file",
                        accept: "image/*",
                        hidden: true,
                        onchange: on_pick,
                    }
                    img { class: "avatar", src: "{avatar}", alt: "profile" }
                }
                p { class: "upload-status", {upload_status} }

                input {
                    id: "username",
                    r#type: "text",
                    placeholder: "username",
                    value: "{username}",
                    oninput: move |evt: FormEvent| draft.apply(|d| d.with_field("username", evt.value())),
                }
                input {
                    id: "email",
                    r#type: "email",
                    placeholder: "email",
                    value: "{email}",
                    oninput: move |evt: FormEvent| draft.apply(|d| d.with_field("email", evt.value())),
                }
                input {
                    id: "password",
                    r#type: "password",
                    placeholder: "password",
                    value: "{password}",
                    oninput: move |evt: FormEvent| draft.apply(|d| d.with_field("password", evt.value())),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: state.loading,
                    if state.loading { "Loading..." } else { "Update" }
                }
                a { class: "btn btn-secondary", href: "/create-listing", "Create Listing" }
            }

            div {
                class: "profile-actions",
                span { class: "text-error clickable", onclick: on_delete_account, "Delete account" }
                span { class: "text-error clickable", onclick: on_sign_out, "Sign out" }
            }

            NoticeBanner { notice: state.error.clone() }
            NoticeBanner { notice: success() }

            button { class: "view-link", onclick: on_show_listings, "Show Listings" }
            if panel.error {
                p { class: "text-error", "Error showing listings" }
            }

            if !panel.is_empty() {
                div {
                    class: "listings",
                    h2 { class: "view-section-title", "Your Listings" }
                    for (id, listing) in panel.items.iter().map(|l| (l.id.clone(), l.clone())) {
                        ListingRow {
                            key: "{id}",
                            listing,
                            on_delete: on_delete_listing,
                        }
                    }
                }
            }
        }
    }
}

/// One row of the "Your Listings" panel.
#[component]
pub fn ListingRow(listing: ListingSummary, on_delete: EventHandler<String>) -> Element {
    let detail = format!("/listing/{}", listing.id);
    let edit = format!("/update-listing/{}", listing.id);
    let cover = listing.cover_image().unwrap_or_default().to_string();
    let name = listing.name.clone();
    let id = listing.id.clone();

    rsx! {
        div {
            class: "listing-row",
            a {
                href: "{detail}",
                img { class: "listing-cover", src: "{cover}", alt: "listing cover" }
            }
            a { class: "listing-name", href: "{detail}", "{name}" }
            div {
                class: "listing-actions",
                button {
                    class: "text-error",
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
                a { class: "text-success", href: "{edit}", "Edit" }
            }
        }
    }
}
