//! # Estate API client
//!
//! Everything that leaves the browser goes through this crate: the REST calls to
//! the estate server and the avatar upload to object storage. The screens depend
//! only on the [`Backend`] and [`Uploader`] traits, so tests drive them with
//! in-memory fakes while the app uses [`HttpBackend`] and [`StorageUploader`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`endpoint`] | Method, path, credentials mode and fallback error text for each REST call |
//! | [`client`] | The [`Backend`] trait, its `reqwest` implementation and response interpretation |
//! | [`upload`] | The [`Uploader`] trait and the Firebase Storage REST implementation |
//! | [`error`] | [`ApiError`], shared by both |
//!
//! ## Calls exposed here
//!
//! - **Auth**: `sign_in`, `sign_up`, `sign_out`
//! - **Account**: `update_user`, `delete_user`
//! - **Listings**: `user_listings`, `delete_listing`
//! - **Storage**: `upload`

pub mod client;
pub mod endpoint;
pub mod error;
pub mod upload;

pub use client::{interpret, Backend, HttpBackend};
pub use endpoint::{Credentials, Endpoint};
pub use error::ApiError;
pub use upload::{object_key, StorageUploader, UploadFile, Uploader};

pub use store::{ListingSummary, ProfileUpdate, SignInForm, SignUpForm, UserInfo};
