//! This crate contains all shared UI for the workspace.
//!
//! Screens are thin: they read state from signals and hand user actions to the
//! functions in [`controllers`], which hold the account logic and can be run
//! without a renderer.

pub mod controllers;
pub mod platform;

mod session;
pub use session::{use_services, use_session, EstateProvider, Services};

mod notice;
pub use notice::NoticeBanner;

mod navbar;
pub use navbar::Navbar;

mod profile;
pub use profile::{ListingRow, Profile};

mod sign_in;
pub use sign_in::SignIn;

mod sign_up;
pub use sign_up::SignUp;
