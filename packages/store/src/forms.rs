//! # Form drafts and validation
//!
//! Input elements report changes as `(name, value)` pairs; each form folds them in
//! with `with_field`. Unknown field names are ignored.
//!
//! The profile form starts empty and falls back to the session record for
//! anything the user has not typed, so the draft only ever holds edits. When
//! submitted, [`ProfileDraft::merged_over`] produces the full update body.
//!
//! The sign-in and sign-up forms double as their request bodies.

use serde::Serialize;
use thiserror::Error;

use crate::models::UserInfo;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please, fill all the fields")]
    MissingFields,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Unsubmitted edits to the profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileDraft {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileDraft {
    pub fn with_field(&self, name: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = Some(value.into());
        match name {
            "username" => next.username = value,
            "email" => next.email = value,
            "password" => next.password = value,
            "avatar" => next.avatar = value,
            _ => {}
        }
        next
    }

    pub fn with_avatar(&self, url: impl Into<String>) -> Self {
        Self {
            avatar: Some(url.into()),
            ..self.clone()
        }
    }

    pub fn display_username<'a>(&'a self, user: &'a UserInfo) -> &'a str {
        non_empty(&self.username).unwrap_or(user.username.as_str())
    }

    pub fn display_email<'a>(&'a self, user: &'a UserInfo) -> &'a str {
        non_empty(&self.email).unwrap_or(user.email.as_str())
    }

    pub fn display_avatar<'a>(&'a self, user: &'a UserInfo) -> Option<&'a str> {
        non_empty(&self.avatar).or_else(|| user.display_avatar())
    }

    /// The update request body: edited fields over the current record.
    pub fn merged_over(&self, user: &UserInfo) -> ProfileUpdate {
        ProfileUpdate {
            username: self.display_username(user).to_string(),
            email: self.display_email(user).to_string(),
            avatar: self.display_avatar(user).map(str::to_string),
            password: non_empty(&self.password).map(str::to_string),
        }
    }
}

/// Body of `POST /api/user/update/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn with_field(&self, name: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match name {
            "email" => next.email = value.into(),
            "password" => next.password = value.into(),
            _ => {}
        }
        next
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub fn with_field(&self, name: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match name {
            "username" => next.username = value.into(),
            "email" => next.email = value.into(),
            "password" => next.password = value.into(),
            _ => {}
        }
        next
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.username.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}
