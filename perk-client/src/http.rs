//! HTTP client for the perk endpoints

use crate::view::PerkSource;
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use shared::models::Perk;
use shared::response::{ErrorResponse, PerkListResponse, PerkResponse};

/// Detail payload tolerance: either the `{ perk: ... }` envelope or a
/// bare perk object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PerkPayload {
    Envelope(PerkResponse),
    Bare(Perk),
}

impl PerkPayload {
    fn into_perk(self) -> Perk {
        match self {
            PerkPayload::Envelope(env) => env.perk,
            PerkPayload::Bare(perk) => perk,
        }
    }
}

/// HTTP client for making network requests to the perk server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // Prefer the structured error envelope; fall back to the raw
            // body, then to the status line.
            let (code, message) = match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(envelope) => (envelope.code, envelope.message),
                Err(_) if !text.is_empty() => (status.as_u16().to_string(), text),
                Err(_) => (status.as_u16().to_string(), status.to_string()),
            };

            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                _ => Err(ClientError::Api { code, message }),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Fetch a single perk by id (`GET /perks/{id}`)
    ///
    /// `Ok(None)` means the fetch succeeded but the payload carried no
    /// perk; any non-2xx response (404 included) is an error carrying
    /// the server's message.
    pub async fn fetch_perk(&self, id: &str) -> ClientResult<Option<Perk>> {
        let value: serde_json::Value = self.get(&format!("perks/{id}")).await?;
        if value.is_null() || value.get("perk").is_some_and(serde_json::Value::is_null) {
            return Ok(None);
        }
        match serde_json::from_value::<PerkPayload>(value) {
            Ok(payload) => Ok(Some(payload.into_perk())),
            Err(_) => Err(ClientError::InvalidResponse(
                "Perk payload missing".to_string(),
            )),
        }
    }

    /// Fetch the full public perk list (`GET /perks/all`)
    pub async fn fetch_all(&self) -> ClientResult<Vec<Perk>> {
        let response: PerkListResponse = self.get("perks/all").await?;
        Ok(response.perks)
    }
}

#[async_trait]
impl PerkSource for HttpClient {
    async fn fetch_perk(&self, id: &str) -> ClientResult<Option<Perk>> {
        HttpClient::fetch_perk(self, id).await
    }

    async fn fetch_all(&self) -> ClientResult<Vec<Perk>> {
        HttpClient::fetch_all(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PerkCategory;

    fn sample_perk() -> serde_json::Value {
        serde_json::json!({
            "id": "p1",
            "title": "Free Coffee",
            "description": "One free coffee",
            "category": "food",
            "discountPercent": 10,
            "merchant": "Acme"
        })
    }

    #[test]
    fn payload_accepts_envelope_shape() {
        let value = serde_json::json!({ "perk": sample_perk() });
        let payload: PerkPayload = serde_json::from_value(value).unwrap();
        let perk = payload.into_perk();
        assert_eq!(perk.title, "Free Coffee");
        assert_eq!(perk.category, PerkCategory::Food);
    }

    #[test]
    fn payload_accepts_bare_perk() {
        let payload: PerkPayload = serde_json::from_value(sample_perk()).unwrap();
        assert_eq!(payload.into_perk().merchant, "Acme");
    }

    #[test]
    fn payload_rejects_empty_object() {
        assert!(serde_json::from_value::<PerkPayload>(serde_json::json!({})).is_err());
    }
}
