use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

use crate::{PredictionClient, PredictionError, PredictionResponse, SongFeatures};

/// POST `values` to `api/predict` on the default backend.
///
/// One-shot form of [`PredictionClient::call_api`] for callers that do not
/// keep a client around. Any failure, including building the client, is
/// logged and reported as `None`.
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() {
/// let reply: Option<serde_json::Value> =
///     predict_client::call_api(&serde_json::json!({ "x": 1 })).await;
/// println!("{reply:?}");
/// # }
/// ```
pub async fn call_api<P, T>(values: &P) -> Option<T>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    call_api_with(Client::builder(), None, values).await
}

pub(crate) async fn call_api_with<P, T>(
    builder: ClientBuilder,
    base_url: Option<String>,
    values: &P,
) -> Option<T>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let client = builder
        .build()
        .map_err(|err| PredictionError::Network(err.to_string()))
        .and_then(|http| PredictionClient::with_client(http, base_url));

    match client {
        Ok(client) => client.call_api(values).await,
        Err(err) => {
            error!(error = %err, "failed to build prediction client");
            None
        }
    }
}

/// Score `features` against the default backend, returning serialized JSON.
///
/// Intended for entry points that forward the reply verbatim and need the
/// failure kind rather than an absence value. The returned string holds a
/// [`PredictionResponse`].
///
/// ```no_run
/// use predict_client::SongFeatures;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), predict_client::PredictionError> {
/// let features = SongFeatures {
///     danceability: 0.8,
///     energy: 0.7,
///     acousticness: 0.1,
///     instrumentalness: 0.0,
///     valence: 0.6,
///     tempo: 120.0,
/// };
///
/// let json = predict_client::run_prediction_handler(features).await?;
/// println!("{json}");
/// # Ok(())
/// # }
/// ```
pub async fn run_prediction_handler(features: SongFeatures) -> Result<String, PredictionError> {
    let client = PredictionClient::new()?;
    run_with_client(&client, &features).await
}

pub(crate) async fn run_with_client(
    client: &PredictionClient,
    features: &SongFeatures,
) -> Result<String, PredictionError> {
    let reply: PredictionResponse = client.try_call_api(features).await?;

    serde_json::to_string(&reply).map_err(|err| PredictionError::Serialization(err.to_string()))
}
