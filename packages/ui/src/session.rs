//! Session context and hooks for the UI.

use api::{HttpBackend, StorageUploader};
use dioxus::prelude::*;
use store::{ClientConfig, SessionState};

/// Remote collaborators every screen shares.
#[derive(Clone, Debug)]
pub struct Services {
    pub backend: HttpBackend,
    pub uploader: StorageUploader,
    pub config: ClientConfig,
}

impl Services {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            backend: HttpBackend::new(&config.api),
            uploader: StorageUploader::new(&config.upload),
            config: config.clone(),
        }
    }
}

/// The signed-in user and the status of the last account request.
/// Updating it re-renders every screen that reads it.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_services() -> Signal<Services> {
    use_context::<Signal<Services>>()
}

/// Wrap the app with this component so screens can reach the session and the
/// remote services. The session starts signed out.
#[component]
pub fn EstateProvider(config: ClientConfig, children: Element) -> Element {
    let session = use_signal(SessionState::default);
    let services = use_signal(|| {
        tracing::debug!(origin = %config.api.origin, "api origin");
        Services::new(&config)
    });

    use_context_provider(|| session);
    use_context_provider(|| services);

    rsx! {
        {children}
    }
}
