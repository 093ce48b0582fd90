//! # Domain models shared by the API client and the screens
//!
//! These types mirror the JSON documents the remote estate API sends back. The
//! server is backed by a document database, so identifiers arrive as `_id`; the
//! `id` alias keeps fixtures and other backends readable.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The signed-in account (the session record). The password is never part of it. |
//! | [`ListingSummary`] | One of the user's property listings, as returned by the listings endpoint. |

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as held by the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    pub email: String,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserInfo {
    pub fn display_avatar(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|url| !url.is_empty())
    }
}

/// A listing owned by the current user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    /// Image URLs in display order; the first one is the cover.
    #[serde(rename = "imageUrls", default)]
    pub image_urls: Vec<String>,
    /// Owning user's id.
    #[serde(rename = "userRef", default, skip_serializing_if = "Option::is_none")]
    pub user_ref: Option<String>,
}

impl ListingSummary {
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}
