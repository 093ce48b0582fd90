//! # HTTP backend for the estate REST API
//!
//! [`Backend`] is the seam the screens talk to; [`HttpBackend`] implements it over
//! `reqwest`, which uses `fetch` in the browser and hyper on native targets.
//!
//! Every call goes through [`HttpBackend::call`]: build the URL from the
//! [`Endpoint`], attach the JSON body and credentials mode, read the whole body,
//! then hand status and text to [`interpret`]. A response counts as failed when the
//! status is not 2xx or the body says `"success": false`; the server's `message`
//! is kept verbatim, otherwise the endpoint's fallback text is used.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::{ApiConfig, ListingSummary, ProfileUpdate, SignInForm, SignUpForm, UserInfo};

use crate::endpoint::{Credentials, Endpoint};
use crate::error::ApiError;

/// Calls the screens make against the remote API.
pub trait Backend {
    async fn sign_in(&self, form: &SignInForm) -> Result<UserInfo, ApiError>;

    /// Returns the server's confirmation payload.
    async fn sign_up(&self, form: &SignUpForm) -> Result<Value, ApiError>;

    async fn sign_out(&self) -> Result<Value, ApiError>;

    async fn update_user(&self, id: &str, update: &ProfileUpdate) -> Result<UserInfo, ApiError>;

    /// Returns the raw deletion payload.
    async fn delete_user(&self, id: &str) -> Result<Value, ApiError>;

    async fn user_listings(&self, id: &str) -> Result<Vec<ListingSummary>, ApiError>;

    async fn delete_listing(&self, id: &str) -> Result<Value, ApiError>;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    http: reqwest::Client,
    origin: String,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: config.origin.clone(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    async fn call<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<Value, ApiError> {
        let url = endpoint.url(&self.origin);
        tracing::debug!(method = %endpoint.method(), %url, "api request");

        let mut request = self.http.request(endpoint.method(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = with_credentials(request, endpoint.credentials());

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        let result = interpret(&endpoint, status, &text);
        if let Err(e) = &result {
            tracing::warn!(%url, status, "api call failed: {e}");
        }
        result
    }

    async fn call_as<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let value = self.call(endpoint, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl Backend for HttpBackend {
    async fn sign_in(&self, form: &SignInForm) -> Result<UserInfo, ApiError> {
        self.call_as(Endpoint::SignIn, Some(form)).await
    }

    async fn sign_up(&self, form: &SignUpForm) -> Result<Value, ApiError> {
        self.call(Endpoint::SignUp, Some(form)).await
    }

    async fn sign_out(&self) -> Result<Value, ApiError> {
        self.call::<()>(Endpoint::SignOut, None).await
    }

    async fn update_user(&self, id: &str, update: &ProfileUpdate) -> Result<UserInfo, ApiError> {
        self.call_as(Endpoint::UpdateUser(id.to_string()), Some(update))
            .await
    }

    async fn delete_user(&self, id: &str) -> Result<Value, ApiError> {
        self.call::<()>(Endpoint::DeleteUser(id.to_string()), None)
            .await
    }

    async fn user_listings(&self, id: &str) -> Result<Vec<ListingSummary>, ApiError> {
        self.call_as::<_, ()>(Endpoint::UserListings(id.to_string()), None)
            .await
    }

    async fn delete_listing(&self, id: &str) -> Result<Value, ApiError> {
        self.call::<()>(Endpoint::DeleteListing(id.to_string()), None)
            .await
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder, credentials: Credentials) -> RequestBuilder {
    match credentials {
        Credentials::Include => request.fetch_credentials_include(),
        Credentials::SameOrigin => request.fetch_credentials_same_origin(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder, _credentials: Credentials) -> RequestBuilder {
    request
}

/// Decide whether a response is a success and extract its JSON body.
pub fn interpret(endpoint: &Endpoint, status: u16, text: &str) -> Result<Value, ApiError> {
    let body: Option<Value> = serde_json::from_str(text).ok();
    let status_ok = (200..300).contains(&status);
    let flagged = body
        .as_ref()
        .and_then(|b| b.get("success"))
        .and_then(Value::as_bool)
        == Some(false);

    if !status_ok || flagged {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| endpoint.fallback_message(status));
        return Err(ApiError::Rejected { status, message });
    }

    body.ok_or_else(|| {
        ApiError::Decode(format!("{} returned a body that is not JSON", endpoint.path()))
    })
}
