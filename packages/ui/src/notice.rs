use dioxus::prelude::*;
use store::{Clock, Notice, NoticeKind, SystemClock};

use crate::platform::sleep;

/// Shows `notice` while it is visible and hides it on expiry.
///
/// Visibility is recomputed from the clock on every render. A timer scheduled
/// for the notice's expiry forces the render that hides it.
#[component]
pub fn NoticeBanner(notice: Option<Notice>) -> Element {
    let mut tick = use_signal(|| 0u32);

    use_effect(use_reactive((&notice,), move |(notice,)| {
        let wait = notice.and_then(|n| n.remaining(SystemClock.now()));
        if let Some(wait) = wait {
            spawn(async move {
                sleep(wait).await;
                *tick.write() += 1;
            });
        }
    }));

    // subscribe to the expiry timer
    let _ = tick();
    let now = SystemClock.now();

    match notice.filter(|n| n.is_visible(now)) {
        Some(n) => {
            let class = match n.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Error => "notice notice-error",
            };
            let message = n.message;
            rsx! {
                p { class: "{class}", "{message}" }
            }
        }
        None => rsx! {},
    }
}
