//! The few browser facilities the screens need, with native stand-ins so the crate
//! also builds and tests off the web.

use std::time::Duration;

/// Blocking message box. Off the web the message goes to the log instead.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    tracing::warn!("alert failed: {e:?}");
                }
            }
            None => tracing::warn!("no window for alert: {message}"),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!(%message, "alert");
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Best guess at an image's MIME type from its file name.
pub fn guess_image_type(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
