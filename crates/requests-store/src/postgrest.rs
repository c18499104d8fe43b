//! Supabase/PostgREST client for the `requests` table.

use crate::error::StoreError;
use crate::types::{NewRequest, PostgrestErrorBody, Request, StatusUpdate, REQUESTS_TABLE};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// PostgREST-backed request store.
///
/// The service key is stored using `SecretString` so it never shows up
/// in logs or debug output.
#[derive(Clone)]
pub struct PostgrestStore {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl PostgrestStore {
    /// Create a new store client for a Supabase project URL.
    pub fn new(
        base_url: impl Into<String>,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, REQUESTS_TABLE)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let key = self.api_key.expose_secret();
        builder
            .header("apikey", key)
            .header("Authorization", format!("Bearer {}", key))
    }

    /// Insert a new request row.
    #[instrument(skip(self, mobile))]
    pub async fn add_request(&self, mobile: &str, code: &str) -> Result<(), StoreError> {
        let row = NewRequest::new(mobile, code);

        let response = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;

        check_status(response).await?;
        debug!(code = %row.code, "Request row inserted");
        Ok(())
    }

    /// Fetch all requests, most recent first.
    #[instrument(skip(self))]
    pub async fn get_requests(&self) -> Result<Vec<Request>, StoreError> {
        let url = format!("{}?select=*&order=created_at.desc", self.table_url());
        debug!(url = %url, "Listing requests");

        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = check_status(response).await?;

        Ok(response.json().await?)
    }

    /// Fetch the request holding `code`, if any.
    #[instrument(skip(self))]
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Request>, StoreError> {
        let url = format!(
            "{}?select=*&code=eq.{}&order=created_at.desc&limit=1",
            self.table_url(),
            encode(&code.to_uppercase())
        );
        debug!(url = %url, "Looking up request by code");

        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = check_status(response).await?;

        let rows: Vec<Request> = response.json().await?;
        Ok(rows.into_iter().next())
    }

    /// Set `status` and `updated_at` on the request with `id`.
    ///
    /// An id that matches no row is not an error.
    #[instrument(skip(self))]
    pub async fn update_request_status(&self, id: &str, status: &str) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{}", self.table_url(), encode(id));

        let response = self
            .authorized(self.client.patch(&url))
            .header("Prefer", "return=minimal")
            .json(&StatusUpdate::new(status))
            .send()
            .await?;

        check_status(response).await?;
        debug!(id = %id, status = %status, "Request status updated");
        Ok(())
    }
}

/// Turn a non-2xx response into a `StoreError::Api` carrying the store's message.
async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(status = %status, body = %body, "Store request failed");

    let err = match serde_json::from_str::<PostgrestErrorBody>(&body) {
        Ok(parsed) => StoreError::Api {
            status: status.as_u16(),
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => StoreError::Api {
            status: status.as_u16(),
            code: None,
            message: if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown store error")
                    .to_string()
            } else {
                body
            },
        },
    };

    Err(err)
}
