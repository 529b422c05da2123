use crate::domain::ActivityCatalog;
use crate::error::ApiError;
use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

/// Success body of the two mutating endpoints.
#[derive(Debug, Deserialize)]
struct ConfirmationBody {
    message: String,
}

/// Failure body of the two mutating endpoints. `detail` is optional so a
/// malformed or empty error body still maps to a rejection, just without
/// server-provided text.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Client for the activity service.
///
/// Constructed once at startup and shared through the provider context.
/// Stateless apart from the base URL: no caching, no retries, no timeouts —
/// the server is authoritative and every view refresh refetches.
#[derive(Debug, Clone, Default)]
pub struct ActivitiesApi {
    base_url: String,
}

impl ActivitiesApi {
    /// Same-origin client, the normal deployment (the service serves the
    /// page shell itself).
    pub fn new() -> Self {
        Self::default()
    }

    /// Client against an explicit origin, e.g. for local development against
    /// a separately hosted backend.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Fetch the full activity catalog.
    pub async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let url = format!("{}/activities", self.base_url);
        let response = Request::get(&url).send().await?;

        if !response.ok() {
            return Err(rejection(response).await);
        }

        let catalog = response.json::<ActivityCatalog>().await?;
        Ok(catalog)
    }

    /// Register a participant; returns the server's confirmation message.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = self.signup_url(activity, email);
        let response = Request::post(&url).send().await?;
        confirmation(response).await
    }

    /// Remove a participant; returns the server's confirmation message.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let url = self.unregister_url(activity, email);
        let response = Request::delete(&url).send().await?;
        confirmation(response).await
    }

    fn signup_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base_url,
            encode(activity),
            encode(email)
        )
    }

    fn unregister_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/unregister?email={}",
            self.base_url,
            encode(activity),
            encode(email)
        )
    }
}

/// Decode a 2xx/non-2xx mutation response into message-or-error.
async fn confirmation(response: Response) -> Result<String, ApiError> {
    if response.ok() {
        let body = response.json::<ConfirmationBody>().await?;
        Ok(body.message)
    } else {
        Err(rejection(response).await)
    }
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let detail = response
        .json::<RejectionBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    ApiError::Rejected { status, detail }
}

/// Percent-encode a path segment or query value.
fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}
