use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// Navbar above whichever page the router picked.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}
