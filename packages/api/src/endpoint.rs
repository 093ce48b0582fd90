//! # Endpoint table
//!
//! Every REST call the client makes, with its method, path and credentials mode.
//!
//! | Endpoint | Method | Path | Credentials |
//! |----------|--------|------|-------------|
//! | `SignIn` | POST | `/api/auth/signin` | same-origin |
//! | `SignUp` | POST | `/api/auth/signup` | same-origin |
//! | `SignOut` | GET | `/api/auth/signout` | same-origin |
//! | `UpdateUser(id)` | POST | `/api/user/update/{id}` | include |
//! | `DeleteUser(id)` | DELETE | `/api/user/delete/{id}` | include |
//! | `UserListings(id)` | GET | `/api/user/listings/{id}` | include |
//! | `DeleteListing(id)` | DELETE | `/api/listing/delete/{id}` | include |
//!
//! The auth endpoints go out with the browser default (`same-origin`). Against a
//! cross-origin API that means the session cookie set by sign-in is not stored,
//! and the credentialed calls rely on a cookie obtained some other way.

use reqwest::Method;

/// Fetch credentials mode. Only meaningful in the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credentials {
    SameOrigin,
    Include,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    SignIn,
    SignUp,
    SignOut,
    UpdateUser(String),
    DeleteUser(String),
    UserListings(String),
    DeleteListing(String),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::SignIn | Endpoint::SignUp | Endpoint::UpdateUser(_) => Method::POST,
            Endpoint::SignOut | Endpoint::UserListings(_) => Method::GET,
            Endpoint::DeleteUser(_) | Endpoint::DeleteListing(_) => Method::DELETE,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::SignIn => "/api/auth/signin".to_string(),
            Endpoint::SignUp => "/api/auth/signup".to_string(),
            Endpoint::SignOut => "/api/auth/signout".to_string(),
            Endpoint::UpdateUser(id) => format!("/api/user/update/{id}"),
            Endpoint::DeleteUser(id) => format!("/api/user/delete/{id}"),
            Endpoint::UserListings(id) => format!("/api/user/listings/{id}"),
            Endpoint::DeleteListing(id) => format!("/api/listing/delete/{id}"),
        }
    }

    pub fn credentials(&self) -> Credentials {
        match self {
            Endpoint::SignIn | Endpoint::SignUp | Endpoint::SignOut => Credentials::SameOrigin,
            _ => Credentials::Include,
        }
    }

    /// Message used when a failed response carries none of its own.
    pub fn fallback_message(&self, status: u16) -> String {
        match self {
            Endpoint::SignIn => "Failed to sign in.".to_string(),
            Endpoint::SignUp => "Failed to sign up.".to_string(),
            Endpoint::SignOut => "Failed to sign out user.".to_string(),
            Endpoint::UpdateUser(_) => "Failed to update user.".to_string(),
            Endpoint::DeleteUser(_) => "Failed to delete user.".to_string(),
            Endpoint::UserListings(_) => {
                format!("Failed to fetch user listings. Status: {status}")
            }
            Endpoint::DeleteListing(_) => "Failed to delete listing.".to_string(),
        }
    }

    /// Full URL under `origin`, tolerating a trailing slash on the origin.
    pub fn url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path())
    }
}
