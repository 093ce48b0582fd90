//! Screen logic without any rendering.
//!
//! Components gather input, call one of these functions and render whatever state
//! they leave behind. Keeping them free of Dioxus hooks lets the tests run them
//! against [`MemoryState`] and fake backends.

mod auth;
mod profile;
mod state;
#[cfg(test)]
pub(crate) mod testing;

pub use auth::{sign_in, sign_up, FormOutcome, SignUpState, HOME_PATH, SIGN_IN_PATH};
pub use profile::{
    delete_account, delete_listing, show_listings, sign_out, update_profile, upload_avatar,
    UPDATE_SUCCESS,
};
pub use state::{dispatch, MemoryState, StateHandle};
