use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};
use url::Url;

use crate::helpers;
use crate::{PredictionError, PredictionResponse, SongFeatures};

const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Debug)]
pub struct PredictionClient {
    client: Client,
    endpoint: Url,
}

impl PredictionClient {
    /// Client for a backend served from `http://localhost:8000/`, posting to
    /// `http://localhost:8000/api/predict`.
    ///
    /// Requests never time out. Failing to set up the HTTP stack (for
    /// example, no TLS backend) is reported as [`PredictionError::Network`].
    ///
    /// ```no_run
    /// use predict_client::PredictionClient;
    ///
    /// let client = PredictionClient::new()?;
    /// # Ok::<(), predict_client::PredictionError>(())
    /// ```
    pub fn new() -> Result<Self, PredictionError> {
        let client = Client::builder()
            .build()
            .map_err(|err| PredictionError::Network(err.to_string()))?;

        Self::with_client(client, None)
    }

    /// Build a client with a pre-configured HTTP client and optional base URL.
    ///
    /// `api/predict` is resolved relative to `base_url`, so a trailing slash
    /// matters: `http://host/app/` targets `http://host/app/api/predict`.
    ///
    /// ```no_run
    /// use predict_client::PredictionClient;
    /// use reqwest::Client;
    ///
    /// let http = Client::builder().build()?;
    /// let client = PredictionClient::with_client(http, Some("http://127.0.0.1:9000/".into()))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_client(client: Client, base_url: Option<String>) -> Result<Self, PredictionError> {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let endpoint = helpers::resolve_endpoint(&base)?;

        Ok(Self { client, endpoint })
    }

    /// Fully resolved URL every request is posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `values` as JSON and decode the reply into `T`.
    ///
    /// Every failure is logged through `tracing` and collapsed into `None`;
    /// use [`PredictionClient::try_call_api`] to inspect the cause.
    ///
    /// ```no_run
    /// # async fn run(client: predict_client::PredictionClient) {
    /// let reply: Option<serde_json::Value> = client
    ///     .call_api(&serde_json::json!({ "x": 1 }))
    ///     .await;
    /// # }
    /// ```
    pub async fn call_api<P, T>(&self, values: &P) -> Option<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.try_call_api(values).await {
            Ok(reply) => Some(reply),
            Err(err) => {
                error!(endpoint = %self.endpoint, error = %err, "prediction request failed");
                None
            }
        }
    }

    /// Same request as [`PredictionClient::call_api`], returning the failure
    /// kind instead of logging it.
    ///
    /// The request is sent once. Non-2xx responses map to
    /// [`PredictionError::Status`] without reading the body.
    pub async fn try_call_api<P, T>(&self, values: &P) -> Result<T, PredictionError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = helpers::encode_payload(values)?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "sending prediction request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|err| PredictionError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| PredictionError::Serialization(err.to_string()))
    }

    /// Score a track. Returns `None` under the same conditions as
    /// [`PredictionClient::call_api`].
    pub async fn predict_score(&self, features: &SongFeatures) -> Option<f64> {
        self.call_api::<_, PredictionResponse>(features)
            .await
            .map(|reply| reply.score)
    }
}
