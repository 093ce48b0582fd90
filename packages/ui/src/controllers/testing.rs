//! In-memory stand-ins for the API used by controller tests.

use std::cell::RefCell;

use api::{ApiError, Backend, UploadFile, Uploader};
use serde_json::{json, Value};
use store::{ListingSummary, ProfileUpdate, SignInForm, SignUpForm, UserInfo};

pub fn ann() -> UserInfo {
    UserInfo {
        id: "u1".to_string(),
        username: "ann".to_string(),
        email: "ann@example.com".to_string(),
        avatar: Some("https://img/ann.png".to_string()),
    }
}

pub fn listing(id: &str) -> ListingSummary {
    ListingSummary {
        id: id.to_string(),
        name: format!("Listing {id}"),
        image_urls: vec![format!("https://img/{id}.jpg")],
        user_ref: Some("u1".to_string()),
    }
}

/// Answers every call with success, or with `reject` as the server message.
#[derive(Default)]
pub struct FakeBackend {
    pub reject: Option<String>,
    pub listings: Vec<ListingSummary>,
    pub calls: RefCell<Vec<String>>,
    pub last_update: RefCell<Option<ProfileUpdate>>,
}

impl FakeBackend {
    pub fn rejecting(message: &str) -> Self {
        Self {
            reject: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_listings(listings: Vec<ListingSummary>) -> Self {
        Self {
            listings,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn answer<T>(&self, call: String, ok: impl FnOnce() -> T) -> Result<T, ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.reject {
            Some(message) => Err(ApiError::Rejected {
                status: 400,
                message: message.clone(),
            }),
            None => Ok(ok()),
        }
    }
}

impl Backend for FakeBackend {
    async fn sign_in(&self, form: &SignInForm) -> Result<UserInfo, ApiError> {
        self.answer(format!("sign_in {}", form.email), ann)
    }

    async fn sign_up(&self, form: &SignUpForm) -> Result<Value, ApiError> {
        self.answer(format!("sign_up {}", form.username), || {
            json!("User created successfully!")
        })
    }

    async fn sign_out(&self) -> Result<Value, ApiError> {
        self.answer("sign_out".to_string(), || json!("User has been logged out!"))
    }

    async fn update_user(&self, id: &str, update: &ProfileUpdate) -> Result<UserInfo, ApiError> {
        *self.last_update.borrow_mut() = Some(update.clone());
        self.answer(format!("update_user {id}"), || UserInfo {
            id: id.to_string(),
            username: update.username.clone(),
            email: update.email.clone(),
            avatar: update.avatar.clone(),
        })
    }

    async fn delete_user(&self, id: &str) -> Result<Value, ApiError> {
        self.answer(format!("delete_user {id}"), || {
            json!({"success": true, "message": "User has been deleted!"})
        })
    }

    async fn user_listings(&self, id: &str) -> Result<Vec<ListingSummary>, ApiError> {
        self.answer(format!("user_listings {id}"), || self.listings.clone())
    }

    async fn delete_listing(&self, id: &str) -> Result<Value, ApiError> {
        self.answer(format!("delete_listing {id}"), || json!("Listing has been deleted!"))
    }
}

/// Replays `events` as progress, then returns `outcome`.
pub struct FakeUploader {
    pub events: Vec<(u64, u64)>,
    pub outcome: Result<String, ApiError>,
    pub keys: RefCell<Vec<String>>,
}

impl Uploader for FakeUploader {
    async fn upload(
        &self,
        file: UploadFile,
        now: store::EpochMillis,
        on_progress: &mut dyn FnMut(u64, u64),
    ) -> Result<String, ApiError> {
        self.keys.borrow_mut().push(api::object_key(now, &file.name));
        for (sent, total) in &self.events {
            on_progress(*sent, *total);
        }
        self.outcome.clone()
    }
}
